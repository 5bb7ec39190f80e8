//! Priority-ordered span claiming over a per-call tag buffer.
//!
//! Rules run one after another in table order. Each rule scans the whole original buffer left to
//! right; a candidate match is claimed only if none of its bytes were claimed by an earlier rule or
//! an earlier match of the same rule. Partially blocked candidates are dropped entirely.

use crate::class::TokenClass;
use crate::config::HighlightConfig;
use crate::rules::Rule;
use std::ops::Range;
use tracing::{trace, warn};

/// State of one slot of a [`TagBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    /// Not covered by any span.
    #[default]
    Unclaimed,
    /// First slot of a span of `len` bytes.
    SpanStart {
        /// Class of the span.
        class: TokenClass,
        /// Span length in bytes.
        len: usize,
    },
    /// Covered by a span that starts earlier.
    Continuation,
}

/// One slot per input byte, recording which span (if any) owns it.
///
/// Regex matches always start and end on char boundaries, so a span never splits a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBuffer {
    tags: Vec<Tag>,
}

impl TagBuffer {
    /// An all-unclaimed buffer of `len` slots.
    pub fn new(len: usize) -> Self {
        Self {
            tags: vec![Tag::Unclaimed; len],
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` for a zero-length buffer.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<Tag> {
        self.tags.get(index).copied()
    }

    /// All slots.
    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns `true` if every slot in `range` is unclaimed.
    pub fn is_unclaimed(&self, range: Range<usize>) -> bool {
        self.tags
            .get(range)
            .is_some_and(|slots| slots.iter().all(|t| *t == Tag::Unclaimed))
    }

    /// Claim `range` for `class` if the whole range is free.
    ///
    /// Returns `false` (and changes nothing) for an empty, out-of-bounds or partially claimed
    /// range.
    pub fn claim(&mut self, range: Range<usize>, class: TokenClass) -> bool {
        if range.is_empty() || !self.is_unclaimed(range.clone()) {
            return false;
        }

        self.tags[range.start] = Tag::SpanStart {
            class,
            len: range.len(),
        };
        for slot in &mut self.tags[range.start + 1..range.end] {
            *slot = Tag::Continuation;
        }
        true
    }

    /// Claimed spans in document order.
    pub fn spans(&self) -> impl Iterator<Item = (Range<usize>, TokenClass)> + '_ {
        self.tags
            .iter()
            .enumerate()
            .filter_map(|(start, tag)| match *tag {
                Tag::SpanStart { class, len } => Some((start..start + len, class)),
                _ => None,
            })
    }
}

/// Runs an ordered rule list over a buffer.
#[derive(Debug, Clone, Copy)]
pub struct SpanTagger<'r> {
    rules: &'r [Rule],
    max_matches_per_rule: usize,
}

impl<'r> SpanTagger<'r> {
    /// Create a tagger for `rules` (highest precedence first).
    pub fn new(rules: &'r [Rule], config: &HighlightConfig) -> Self {
        Self {
            rules,
            max_matches_per_rule: config.max_matches_per_rule,
        }
    }

    /// Tag `text`, returning a fresh buffer with one slot per byte.
    pub fn tag(&self, text: &str) -> TagBuffer {
        let mut tags = TagBuffer::new(text.len());
        if self.max_matches_per_rule == 0 {
            return tags;
        }

        for (index, rule) in self.rules.iter().enumerate() {
            let mut cursor = 0;
            let mut examined = 0usize;
            let mut claimed = 0usize;

            while let Some(m) = rule.find_at(text, cursor) {
                if examined == self.max_matches_per_rule {
                    warn!(
                        rule = index,
                        pattern = rule.spec().pattern,
                        limit = self.max_matches_per_rule,
                        "match limit reached; skipping the rest of this rule"
                    );
                    break;
                }
                examined += 1;

                // Validated rules never match empty; stop rather than spin.
                if m.end <= cursor {
                    break;
                }

                if tags.claim(m.claim, rule.class()) {
                    claimed += 1;
                }
                cursor = m.end;
            }

            trace!(
                rule = index,
                class = %rule.class(),
                examined,
                claimed,
                "rule pass finished"
            );
        }

        tags
    }
}
