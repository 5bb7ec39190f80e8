//! Turning a tag buffer into output segments and HTML.

use crate::class::TokenClass;
use crate::tagger::{Tag, TagBuffer};
use serde::Serialize;
use std::ops::Range;

/// A contiguous piece of the input, either a claimed token or plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    /// Raw (unescaped) source text.
    pub text: &'a str,
    /// Token class, or `None` for plain text.
    pub class: Option<TokenClass>,
    /// Byte range of `text` within the input.
    pub range: Range<usize>,
}

/// Walk `tags` left to right and split `text` into segments.
///
/// Segments are contiguous and non-overlapping; concatenating their `text` reproduces `text`.
/// With `merge_plain_runs`, consecutive unclaimed characters form one segment, otherwise each
/// unclaimed character is its own segment.
///
/// `tags` is expected to come from tagging `text`. A span that runs past the end of `text` or does
/// not end on a char boundary is rendered as plain text instead.
pub fn segments<'a>(text: &'a str, tags: &TagBuffer, merge_plain_runs: bool) -> Vec<Segment<'a>> {
    let mut out = Vec::new();
    let mut plain_start: Option<usize> = None;
    let mut i = 0;

    while i < text.len() {
        if let Some(Tag::SpanStart { class, len }) = tags.get(i)
            && let Some(span) = text.get(i..i.saturating_add(len)).filter(|s| !s.is_empty())
        {
            if let Some(start) = plain_start.take() {
                out.push(plain(text, start..i));
            }
            out.push(Segment {
                text: span,
                class: Some(class),
                range: i..i + span.len(),
            });
            i += span.len();
            continue;
        }

        // Unclaimed. A continuation slot is never visited: spans are skipped whole.
        let ch_len = text[i..].chars().next().map_or(1, char::len_utf8);
        if merge_plain_runs {
            plain_start.get_or_insert(i);
        } else {
            out.push(plain(text, i..i + ch_len));
        }
        i += ch_len;
    }

    if let Some(start) = plain_start {
        out.push(plain(text, start..text.len()));
    }
    out
}

fn plain(text: &str, range: Range<usize>) -> Segment<'_> {
    Segment {
        text: &text[range.clone()],
        class: None,
        range,
    }
}

/// Escape `& < > "` for embedding in HTML content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Append `text` to `out`, escaping `& < > "`.
pub fn push_escaped(out: &mut String, text: &str) {
    let mut last = 0;
    for (i, b) in text.bytes().enumerate() {
        let replacement = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            _ => continue,
        };
        out.push_str(&text[last..i]);
        out.push_str(replacement);
        last = i + 1;
    }
    out.push_str(&text[last..]);
}

/// Render segments as an HTML fragment: `<span class="tok-…">` around tokens, escaped plain text
/// between them.
pub fn render_html(segments: &[Segment<'_>]) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.text.len()).sum::<usize>() * 2);
    for segment in segments {
        match segment.class {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class.css_class());
                out.push_str("\">");
                push_escaped(&mut out, segment.text);
                out.push_str("</span>");
            }
            None => push_escaped(&mut out, segment.text),
        }
    }
    out
}
