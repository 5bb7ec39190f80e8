//! Canonical languages and the alias map that resolves informal fence tags onto them.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

/// A language with a built-in rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// C-family scripting language (also used for TypeScript/JSX fences).
    JavaScript,
    /// Python.
    Python,
    /// HTML/XML markup.
    Html,
    /// CSS (and the SCSS/Sass/Less dialects, highlighted as plain CSS).
    Css,
    /// POSIX-ish shell scripts.
    Bash,
    /// JSON.
    Json,
    /// SQL (keywords are case-insensitive).
    Sql,
    /// PHP.
    Php,
}

/// Alternate spellings, keyed exactly as they appear in a (lower-cased) fence tag.
pub const ALIASES: &[(&str, Language)] = &[
    ("js", Language::JavaScript),
    ("jsx", Language::JavaScript),
    ("ts", Language::JavaScript),
    ("tsx", Language::JavaScript),
    ("py", Language::Python),
    ("sh", Language::Bash),
    ("shell", Language::Bash),
    ("zsh", Language::Bash),
    ("htm", Language::Html),
    ("xml", Language::Html),
    ("svg", Language::Html),
    ("scss", Language::Css),
    ("sass", Language::Css),
    ("less", Language::Css),
    ("mysql", Language::Sql),
    ("pgsql", Language::Sql),
    ("postgresql", Language::Sql),
    ("sqlite", Language::Sql),
    ("jsonc", Language::Json),
];

static LOOKUP: LazyLock<HashMap<&'static str, Language>> = LazyLock::new(|| {
    let mut map: HashMap<&'static str, Language> = Language::ALL
        .iter()
        .map(|&lang| (lang.name(), lang))
        .collect();
    for &(alias, lang) in ALIASES {
        map.insert(alias, lang);
    }
    map
});

impl Language {
    /// Number of canonical languages.
    pub const COUNT: usize = 8;

    /// All canonical languages, in rule-table order.
    pub const ALL: [Language; Self::COUNT] = [
        Language::JavaScript,
        Language::Python,
        Language::Html,
        Language::Css,
        Language::Bash,
        Language::Json,
        Language::Sql,
        Language::Php,
    ];

    /// Canonical key of this language.
    pub fn name(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Html => "html",
            Language::Css => "css",
            Language::Bash => "bash",
            Language::Json => "json",
            Language::Sql => "sql",
            Language::Php => "php",
        }
    }

    /// Dense index used to address per-language tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve a fence tag (canonical name or alias) to a language.
    ///
    /// Keys are case-sensitive; callers are expected to lower-case and trim the tag first.
    /// Returns `None` for unsupported or empty tags.
    pub fn resolve(tag: &str) -> Option<Language> {
        LOOKUP.get(tag).copied()
    }

    /// Resolve a language from a file path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Language> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::resolve(&ext.to_ascii_lowercase())
    }

    /// Aliases that resolve to this language (canonical name excluded).
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        ALIASES
            .iter()
            .filter(move |(_, lang)| *lang == self)
            .map(|(alias, _)| *alias)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
