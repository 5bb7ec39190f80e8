//! Token classes and the CSS class names they render with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical category assigned to a claimed span.
///
/// The set is closed: every rule in the built-in table maps onto one of these, and the renderer
/// maps each one onto a stable CSS class (see [`TokenClass::css_class`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenClass {
    /// Line or block comment.
    Comment,
    /// Quoted string literal (single, double, triple-quoted).
    String,
    /// Template / interpolated string, or a variable interpolation such as `$HOME`.
    Template,
    /// Reserved word, tag name, or at-rule.
    Keyword,
    /// Numeric literal, color literal, or character entity.
    Number,
    /// Brackets, separators and other structural punctuation.
    Punctuation,
    /// Operator run (`=>`, `+=`, `&&`, ...).
    Operator,
    /// Call-site label (identifier immediately followed by `(`), or a property/attribute name.
    Function,
}

impl TokenClass {
    /// All classes, in declaration order.
    pub const ALL: [TokenClass; 8] = [
        TokenClass::Comment,
        TokenClass::String,
        TokenClass::Template,
        TokenClass::Keyword,
        TokenClass::Number,
        TokenClass::Punctuation,
        TokenClass::Operator,
        TokenClass::Function,
    ];

    /// CSS class emitted on the `<span>` wrapping a token of this class.
    pub fn css_class(self) -> &'static str {
        match self {
            TokenClass::Comment => "tok-comment",
            TokenClass::String => "tok-string",
            TokenClass::Template => "tok-tmpl",
            TokenClass::Keyword => "tok-keyword",
            TokenClass::Number => "tok-number",
            TokenClass::Punctuation => "tok-punct",
            TokenClass::Operator => "tok-operator",
            TokenClass::Function => "tok-fn",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_css_classes_are_distinct_and_prefixed() {
        let names: HashSet<_> = TokenClass::ALL.iter().map(|c| c.css_class()).collect();
        assert_eq!(names.len(), TokenClass::ALL.len());
        assert!(names.iter().all(|n| n.starts_with("tok-")));
    }

    #[test]
    fn test_serde_names_are_snake_case() {
        let json = serde_json::to_string(&TokenClass::Punctuation).unwrap();
        assert_eq!(json, "\"punctuation\"");
    }
}
