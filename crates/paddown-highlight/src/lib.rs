#![warn(missing_docs)]
//! `paddown-highlight` - rule-table syntax highlighting for fenced code blocks.
//!
//! Each supported language is an ordered list of regex rules. Rules run in precedence order over
//! the whole snippet, and a rule claims a match only if no byte of it was claimed before, so
//! spans never overlap and a keyword inside a string or comment stays part of that string or
//! comment. The result is a flat token stream (not a parse tree) rendered as escaped HTML.
//!
//! ```
//! let html = paddown_highlight::highlight("// if x", "js");
//! assert_eq!(html, "<span class=\"tok-comment\">// if x</span>");
//! ```
//!
//! Unsupported languages are not an error: the snippet comes back escaped and unhighlighted.

mod class;
mod config;
mod error;
mod language;
pub mod markup;
pub mod render;
pub mod rules;
pub mod tagger;

pub use class::TokenClass;
pub use config::HighlightConfig;
pub use error::RuleError;
pub use language::{ALIASES, Language};
pub use render::{Segment, escape_html};
pub use rules::{Rule, RuleSpec, RuleTable};
pub use tagger::{SpanTagger, Tag, TagBuffer};

use tracing::{debug, error};

/// A rule table paired with a [`HighlightConfig`].
///
/// Cheap to copy; holds no per-call state, so one instance can serve many threads.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter<'t> {
    table: &'t RuleTable,
    config: HighlightConfig,
}

impl Highlighter<'static> {
    /// A highlighter over the built-in rule table.
    pub fn builtin(config: HighlightConfig) -> Result<Self, &'static RuleError> {
        Ok(Self::new(RuleTable::builtin()?, config))
    }
}

impl<'t> Highlighter<'t> {
    /// A highlighter over a custom rule table.
    pub fn new(table: &'t RuleTable, config: HighlightConfig) -> Self {
        Self { table, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Tag `code` with the rules of `language`; `None` yields an all-unclaimed buffer.
    pub fn tag(&self, code: &str, language: Option<Language>) -> TagBuffer {
        match language {
            Some(language) => SpanTagger::new(self.table.rules(language), &self.config).tag(code),
            None => TagBuffer::new(code.len()),
        }
    }

    /// Split `code` into classified segments for the language named by `tag`.
    pub fn segments<'a>(&self, code: &'a str, tag: &str) -> Vec<Segment<'a>> {
        let language = Language::resolve(tag);
        if language.is_none() && !tag.is_empty() {
            debug!(tag, "unsupported language; rendering plain text");
        }
        let tags = self.tag(code, language);
        render::segments(code, &tags, self.config.merge_plain_runs)
    }

    /// Highlight `code` as an HTML fragment. Never fails.
    pub fn highlight(&self, code: &str, tag: &str) -> String {
        render::render_html(&self.segments(code, tag))
    }

    /// Highlight `code` wrapped as a fenced code block (see [`markup::code_block`]).
    pub fn code_block(&self, code: &str, fence_tag: Option<&str>) -> String {
        markup::code_block(self, code, fence_tag)
    }
}

/// Highlight `code` for the (already lower-cased and trimmed) language `tag` with the built-in
/// rules and default configuration.
///
/// Total: unsupported languages, empty input and unterminated constructs all produce valid,
/// escaped HTML.
pub fn highlight(code: &str, tag: &str) -> String {
    match Highlighter::builtin(HighlightConfig::default()) {
        Ok(highlighter) => highlighter.highlight(code, tag),
        Err(err) => {
            error!(%err, "built-in rule table is invalid; rendering plain text");
            escape_html(code)
        }
    }
}

/// Like [`highlight`], but returns the segment stream instead of HTML.
pub fn highlight_segments<'a>(code: &'a str, tag: &str) -> Vec<Segment<'a>> {
    match Highlighter::builtin(HighlightConfig::default()) {
        Ok(highlighter) => highlighter.segments(code, tag),
        Err(err) => {
            error!(%err, "built-in rule table is invalid; rendering plain text");
            render::segments(code, &TagBuffer::new(code.len()), true)
        }
    }
}

/// Render a fenced code block with the built-in rules (see [`markup::code_block`]).
pub fn render_code_block(code: &str, fence_tag: Option<&str>) -> String {
    match Highlighter::builtin(HighlightConfig::default()) {
        Ok(highlighter) => highlighter.code_block(code, fence_tag),
        Err(err) => {
            error!(%err, "built-in rule table is invalid; rendering plain text");
            let empty = RuleTable::empty();
            Highlighter::new(&empty, HighlightConfig::default()).code_block(code, fence_tag)
        }
    }
}
