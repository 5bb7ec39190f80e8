//! Errors raised while compiling rule tables.

use crate::language::Language;
use thiserror::Error;

#[derive(Debug, Error)]
/// Authoring defects detected while compiling a rule table.
pub enum RuleError {
    #[error("regex compile error for {language} pattern '{pattern}': {message}")]
    /// A rule pattern failed to compile.
    RegexCompile {
        /// Language the rule belongs to.
        language: Language,
        /// The regex pattern string.
        pattern: &'static str,
        /// The compiler error message.
        message: String,
    },

    #[error("{language} pattern '{pattern}' can match the empty string")]
    /// A rule pattern can match without consuming input, which would stall the scan cursor.
    EmptyMatch {
        /// Language the rule belongs to.
        language: Language,
        /// The regex pattern string.
        pattern: &'static str,
    },

    #[error("{language} pattern '{pattern}' has no capture group {group}")]
    /// A rule claims a capture group that the pattern does not define.
    MissingGroup {
        /// Language the rule belongs to.
        language: Language,
        /// The regex pattern string.
        pattern: &'static str,
        /// The requested capture group index.
        group: usize,
    },

    #[error("{language} rule table lists a call-site rule before keyword rule '{pattern}'")]
    /// A call-site rule would get first claim over a keyword followed by `(`.
    CallSiteBeforeKeyword {
        /// Language the rule belongs to.
        language: Language,
        /// The keyword rule that comes too late.
        pattern: &'static str,
    },
}
