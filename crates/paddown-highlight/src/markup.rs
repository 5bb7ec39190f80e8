//! Markup around highlighted code: fenced code blocks and standalone HTML export.

use crate::Highlighter;
use crate::render::{escape_html, push_escaped};

/// Normalize a fence info string the way the markdown renderer does: trimmed and lower-cased.
pub fn normalize_fence_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Render one fenced code block.
///
/// Produces `<div class="code-block-wrapper">`, then a `<div class="code-lang-label">` when the
/// fence carried a non-empty tag, then `<pre><code>` with the highlighted code.
pub fn code_block(highlighter: &Highlighter<'_>, code: &str, fence_tag: Option<&str>) -> String {
    let tag = fence_tag.map(normalize_fence_tag).unwrap_or_default();
    let highlighted = highlighter.highlight(code, &tag);

    let mut out = String::with_capacity(highlighted.len() + tag.len() + 96);
    out.push_str("<div class=\"code-block-wrapper\">");
    if !tag.is_empty() {
        out.push_str("<div class=\"code-lang-label\">");
        push_escaped(&mut out, &tag);
        out.push_str("</div>");
    }
    out.push_str("<pre><code>");
    out.push_str(&highlighted);
    out.push_str("</code></pre></div>");
    out
}

/// Token colors and code-block chrome used by [`standalone_document`].
pub const DEFAULT_STYLESHEET: &str = r#".code-block-wrapper {
  position: relative;
  margin: 1rem 0;
  border-radius: 8px;
  background: #f6f7f9;
  overflow: hidden;
}
.code-block-wrapper pre {
  margin: 0;
  padding: 0.9rem 1rem;
  overflow-x: auto;
  font-family: "JetBrains Mono", "Fira Code", Consolas, monospace;
  font-size: 0.875rem;
  line-height: 1.5;
}
.code-lang-label {
  padding: 0.3rem 1rem;
  font-size: 0.75rem;
  color: #6b7280;
  border-bottom: 1px solid #e5e7eb;
}
.tok-comment { color: #6a737d; font-style: italic; }
.tok-string { color: #22863a; }
.tok-tmpl { color: #b08800; }
.tok-keyword { color: #d73a49; }
.tok-number { color: #005cc5; }
.tok-punct { color: #586069; }
.tok-operator { color: #d73a49; }
.tok-fn { color: #6f42c1; }
"#;

/// Wrap an HTML body in a self-contained document with [`DEFAULT_STYLESHEET`] inlined.
///
/// An empty `title` becomes `Untitled`.
pub fn standalone_document(title: &str, body: &str) -> String {
    let title = if title.trim().is_empty() {
        "Untitled"
    } else {
        title
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
{css}
body {{
  font-family: "Segoe UI", system-ui, -apple-system, Helvetica, Arial, sans-serif;
  color: #14181f;
  background: #ffffff;
  margin: 0;
  padding: 2rem;
  display: flex;
  justify-content: center;
}}
.standard-markdown {{
  max-width: 680px;
  width: 100%;
}}
  </style>
</head>
<body>
  <div class="standard-markdown">
{body}
  </div>
</body>
</html>"#,
        title = escape_html(title),
        css = DEFAULT_STYLESHEET,
    )
}
