//! The built-in token rule table.
//!
//! Each language is an ordered list of [`RuleSpec`]s. Order is precedence: an earlier rule gets
//! first claim on any range it matches. Comments and strings come before keywords (markup lists tag
//! names first), and keywords always come before the call-site rule.
//!
//! Word boundaries and case-insensitive keywords are ASCII-only: `é` counts as a non-word
//! character, and `ſ` or the Kelvin sign never fold onto `s` or `k`.

use crate::class::TokenClass::{
    self, Comment, Function, Keyword, Number, Operator, Punctuation, Template,
};
use crate::error::RuleError;
use crate::language::Language;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Authored (uncompiled) rule: a pattern, the class it assigns, and an optional claim group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    /// Regex source (Rust `regex` syntax).
    pub pattern: &'static str,
    /// Class assigned to the claimed range.
    pub class: TokenClass,
    /// Claim only this capture group instead of the whole match.
    ///
    /// Stands in for a trailing look-ahead: for `([a-z_]\w*\s*)\(` only the identifier is
    /// claimed, while the scan continues after the `(`.
    pub claim_group: Option<usize>,
}

impl RuleSpec {
    /// A rule claiming its whole match.
    pub const fn new(pattern: &'static str, class: TokenClass) -> Self {
        Self {
            pattern,
            class,
            claim_group: None,
        }
    }

    /// Claim only capture group `group` of each match.
    pub const fn claiming(self, group: usize) -> Self {
        Self {
            claim_group: Some(group),
            ..self
        }
    }

    /// `true` for the "identifier immediately followed by `(`" rule.
    pub fn is_call_site(&self) -> bool {
        self.class == TokenClass::Function
            && self.claim_group.is_some()
            && self.pattern.ends_with(r"\(")
    }
}

/// One match of a [`Rule`] against a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Byte range the rule wants to claim.
    pub claim: Range<usize>,
    /// Byte offset where the rule's next search starts.
    pub end: usize,
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    spec: RuleSpec,
}

impl Rule {
    /// Compile and validate a rule authored for `language`.
    pub fn compile(language: Language, spec: RuleSpec) -> Result<Self, RuleError> {
        let regex = Regex::new(spec.pattern).map_err(|e| RuleError::RegexCompile {
            language,
            pattern: spec.pattern,
            message: e.to_string(),
        })?;

        if let Some(group) = spec.claim_group
            && group >= regex.captures_len()
        {
            return Err(RuleError::MissingGroup {
                language,
                pattern: spec.pattern,
                group,
            });
        }

        let rule = Self { regex, spec };
        if rule.matches_empty() {
            return Err(RuleError::EmptyMatch {
                language,
                pattern: spec.pattern,
            });
        }
        Ok(rule)
    }

    /// The authored spec this rule was compiled from.
    pub fn spec(&self) -> &RuleSpec {
        &self.spec
    }

    /// Class assigned to the claimed range.
    pub fn class(&self) -> TokenClass {
        self.spec.class
    }

    /// Find the next match starting no earlier than byte offset `start`.
    ///
    /// The regex sees the whole buffer, so anchors and `\b` at `start` look at the preceding text.
    pub fn find_at(&self, text: &str, start: usize) -> Option<RuleMatch> {
        match self.spec.claim_group {
            None => {
                let m = self.regex.find_at(text, start)?;
                Some(RuleMatch {
                    claim: m.range(),
                    end: m.end(),
                })
            }
            Some(group) => {
                let caps = self.regex.captures_at(text, start)?;
                let whole = caps.get(0)?;
                let claim = caps
                    .get(group)
                    .map_or(whole.start()..whole.start(), |m| m.range());
                Some(RuleMatch {
                    claim,
                    end: whole.end(),
                })
            }
        }
    }

    // A rule that can produce an empty match (or an empty claim) would never advance. Probe a
    // handful of short inputs at every char boundary.
    fn matches_empty(&self) -> bool {
        const PROBES: &[&str] = &[
            "",
            " ",
            "\n",
            "a",
            "0",
            "(",
            "\"",
            "'",
            "#",
            "$",
            "<",
            "-",
            "x = f(1); // y",
        ];

        PROBES.iter().any(|probe| {
            probe
                .char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(probe.len()))
                .any(|pos| {
                    self.find_at(probe, pos)
                        .is_some_and(|m| m.claim.is_empty())
                })
        })
    }
}

/// Compiled rule lists for every [`Language`].
#[derive(Debug, Clone)]
pub struct RuleTable {
    by_language: Vec<Vec<Rule>>,
}

static BUILTIN: LazyLock<Result<RuleTable, RuleError>> =
    LazyLock::new(|| RuleTable::compile(Language::ALL.iter().map(|&l| (l, specs(l)))));

impl RuleTable {
    /// The process-wide built-in table, compiled on first use.
    pub fn builtin() -> Result<&'static RuleTable, &'static RuleError> {
        BUILTIN.as_ref()
    }

    /// A table with no rules for any language; everything renders as plain text.
    pub fn empty() -> Self {
        Self {
            by_language: vec![Vec::new(); Language::COUNT],
        }
    }

    /// Compile authored rule lists. Languages not listed get an empty rule list.
    pub fn compile<'a>(
        tables: impl IntoIterator<Item = (Language, &'a [RuleSpec])>,
    ) -> Result<Self, RuleError> {
        let mut by_language = Self::empty().by_language;

        for (language, specs) in tables {
            check_call_site_order(language, specs)?;
            by_language[language.index()] = specs
                .iter()
                .map(|&spec| Rule::compile(language, spec))
                .collect::<Result<Vec<_>, _>>()?;
        }

        Ok(Self { by_language })
    }

    /// Ordered rules for `language`.
    pub fn rules(&self, language: Language) -> &[Rule] {
        &self.by_language[language.index()]
    }
}

// Keyword rules must precede the call-site rule, otherwise `if (` or `while (` would be labeled
// as calls.
fn check_call_site_order(language: Language, specs: &[RuleSpec]) -> Result<(), RuleError> {
    let Some(first_call_site) = specs.iter().position(RuleSpec::is_call_site) else {
        return Ok(());
    };

    match specs[first_call_site..]
        .iter()
        .find(|s| s.class == TokenClass::Keyword)
    {
        Some(late) => Err(RuleError::CallSiteBeforeKeyword {
            language,
            pattern: late.pattern,
        }),
        None => Ok(()),
    }
}

/// Authored rules for `language`, in precedence order.
pub fn specs(language: Language) -> &'static [RuleSpec] {
    match language {
        Language::JavaScript => JAVASCRIPT,
        Language::Python => PYTHON,
        Language::Html => HTML,
        Language::Css => CSS,
        Language::Bash => BASH,
        Language::Json => JSON,
        Language::Sql => SQL,
        Language::Php => PHP,
    }
}

const DOUBLE_OR_SINGLE_QUOTED: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#;
const BLOCK_COMMENT: &str = r"/\*(?s:.*?)\*/";
const DECIMAL: &str = r"(?-u:\b)[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?(?-u:\b)";
const CALL_SITE: &str = r"(?-u:\b)([a-zA-Z_][a-zA-Z0-9_]*\s*)\(";

const JAVASCRIPT: &[RuleSpec] = &[
    RuleSpec::new(r"//[^\n]*", Comment),
    RuleSpec::new(BLOCK_COMMENT, Comment),
    RuleSpec::new(DOUBLE_OR_SINGLE_QUOTED, TokenClass::String),
    RuleSpec::new(r"`(?:[^`\\]|\\.)*`", Template),
    RuleSpec::new(
        r"(?-u:\b)(?:function|return|const|let|var|if|else|for|while|do|switch|case|break|continue|class|new|this|import|export|from|of|in|typeof|instanceof|true|false|null|undefined|async|await|throw|try|catch|finally|default|void|delete|yield)(?-u:\b)",
        Keyword,
    ),
    RuleSpec::new(DECIMAL, Number),
    RuleSpec::new(r"[{}\[\]();,]", Punctuation),
    RuleSpec::new(r"=>|[+\-*/%=&|<>!~^?:]+", Operator),
    RuleSpec::new(r"(?-u:\b)([a-zA-Z_$][a-zA-Z0-9_$]*\s*)\(", Function).claiming(1),
];

const PYTHON: &[RuleSpec] = &[
    RuleSpec::new(r"#[^\n]*", Comment),
    RuleSpec::new(r#""""(?s:.*?)"""|'''(?s:.*?)'''"#, TokenClass::String),
    RuleSpec::new(DOUBLE_OR_SINGLE_QUOTED, TokenClass::String),
    RuleSpec::new(
        r"(?-u:\b)(?:def|return|if|elif|else|for|while|class|import|from|as|in|not|and|or|is|True|False|None|pass|break|continue|with|yield|lambda|try|except|finally|raise|print|global|nonlocal|assert|del)(?-u:\b)",
        Keyword,
    ),
    RuleSpec::new(DECIMAL, Number),
    RuleSpec::new(r"[{}\[\]();,:]", Punctuation),
    RuleSpec::new(r"[+\-*/%=&|<>!~^@]+", Operator),
    RuleSpec::new(CALL_SITE, Function).claiming(1),
];

const HTML: &[RuleSpec] = &[
    RuleSpec::new(r"<!--(?s:.*?)-->", Comment),
    RuleSpec::new(r"</?[a-zA-Z][a-zA-Z0-9-]*", Keyword),
    RuleSpec::new(r"\s[a-zA-Z-]+=", Function),
    RuleSpec::new(DOUBLE_OR_SINGLE_QUOTED, TokenClass::String),
    RuleSpec::new(r"&[a-zA-Z]+;|&#[0-9]+;", Number),
    RuleSpec::new(r"[<>/=]", Punctuation),
];

const CSS: &[RuleSpec] = &[
    RuleSpec::new(BLOCK_COMMENT, Comment),
    RuleSpec::new(DOUBLE_OR_SINGLE_QUOTED, TokenClass::String),
    RuleSpec::new(r"@[a-zA-Z-]+", Keyword),
    RuleSpec::new(r"!important", Keyword),
    RuleSpec::new(r"#[a-fA-F0-9]{3,8}(?-u:\b)", Number),
    RuleSpec::new(
        r"(?-u:\b)[0-9]+(?:\.[0-9]+)?(?:px|em|rem|%|vh|vw|fr|s|ms|deg)?(?-u:\b)",
        Number,
    ),
    RuleSpec::new(r"[{}();:,]", Punctuation),
    RuleSpec::new(r"[.#][a-zA-Z_-][a-zA-Z0-9_-]*", Function),
    RuleSpec::new(r"(?-u:\b)([a-zA-Z-]+\s*):", Function).claiming(1),
];

const BASH: &[RuleSpec] = &[
    RuleSpec::new(r"#[^\n]*", Comment),
    RuleSpec::new(r#""(?:[^"\\]|\\.)*"|'[^']*'"#, TokenClass::String),
    RuleSpec::new(r"\$[a-zA-Z_][a-zA-Z0-9_]*|\$\{[^}]+\}", Template),
    RuleSpec::new(
        r"(?-u:\b)(?:if|then|else|elif|fi|for|do|done|while|until|case|esac|in|function|return|local|export|source|alias|unset|set|shift|exit|echo|printf|read|test|cd|ls|grep|sed|awk|cat|mkdir|rm|cp|mv|chmod|chown|sudo|apt|yum|pip|npm)(?-u:\b)",
        Keyword,
    ),
    RuleSpec::new(r"(?-u:\b)[0-9]+(?:\.[0-9]+)?(?-u:\b)", Number),
    RuleSpec::new(r"[|&;<>(){}\[\]]", Punctuation),
    RuleSpec::new(r"[=!<>+\-]+", Operator),
];

const JSON: &[RuleSpec] = &[
    RuleSpec::new(r#"("(?:[^"\\]|\\.)*"\s*):"#, Function).claiming(1),
    RuleSpec::new(r#""(?:[^"\\]|\\.)*""#, TokenClass::String),
    RuleSpec::new(r"(?-u:\b)(?:true|false|null)(?-u:\b)", Keyword),
    RuleSpec::new(r"-?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?", Number),
    RuleSpec::new(r"[{}\[\]:,]", Punctuation),
];

const SQL: &[RuleSpec] = &[
    RuleSpec::new(r"--[^\n]*", Comment),
    RuleSpec::new(BLOCK_COMMENT, Comment),
    RuleSpec::new(r"'(?:[^'\\]|\\.)*'", TokenClass::String),
    RuleSpec::new(
        r"(?i-u:\b(?:SELECT|FROM|WHERE|AND|OR|NOT|IN|IS|NULL|AS|ON|JOIN|LEFT|RIGHT|INNER|OUTER|FULL|CROSS|INSERT|INTO|VALUES|UPDATE|SET|DELETE|CREATE|TABLE|ALTER|DROP|INDEX|VIEW|GRANT|REVOKE|UNION|ALL|DISTINCT|ORDER|BY|GROUP|HAVING|LIMIT|OFFSET|ASC|DESC|LIKE|BETWEEN|EXISTS|CASE|WHEN|THEN|ELSE|END|COUNT|SUM|AVG|MAX|MIN|PRIMARY|KEY|FOREIGN|REFERENCES|DEFAULT|CONSTRAINT|UNIQUE|CHECK|IF|BEGIN|COMMIT|ROLLBACK|TRUNCATE|WITH|RECURSIVE)\b)",
        Keyword,
    ),
    RuleSpec::new(r"(?-u:\b)[0-9]+(?:\.[0-9]+)?(?-u:\b)", Number),
    RuleSpec::new(r"[();,.*]", Punctuation),
    RuleSpec::new(r"[=<>!+\-]+", Operator),
    RuleSpec::new(CALL_SITE, Function).claiming(1),
];

const PHP: &[RuleSpec] = &[
    RuleSpec::new(r"//[^\n]*|#[^\n]*", Comment),
    RuleSpec::new(BLOCK_COMMENT, Comment),
    RuleSpec::new(DOUBLE_OR_SINGLE_QUOTED, TokenClass::String),
    RuleSpec::new(r"\$[a-zA-Z_][a-zA-Z0-9_]*", Template),
    RuleSpec::new(
        r"(?-u:\b)(?:function|return|if|else|elseif|for|foreach|while|do|switch|case|break|continue|class|new|this|public|private|protected|static|abstract|interface|extends|implements|namespace|use|require|include|require_once|include_once|echo|print|array|true|false|null|try|catch|finally|throw|const|var|match|fn|yield|enum)(?-u:\b)",
        Keyword,
    ),
    RuleSpec::new(DECIMAL, Number),
    RuleSpec::new(r"[{}\[\]();,]", Punctuation),
    RuleSpec::new(r"=>|->|[+\-*/%=&|<>!~^.?:]+", Operator),
    RuleSpec::new(CALL_SITE, Function).claiming(1),
];
