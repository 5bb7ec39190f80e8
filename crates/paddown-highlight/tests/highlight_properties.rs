use paddown_highlight::{
    ALIASES, Language, Segment, TokenClass, highlight, highlight_segments, render_code_block,
};
use pretty_assertions::assert_eq;

const SAMPLES: &[&str] = &[
    "",
    "   \n\t ",
    "const greet = (name) => `Hello, ${name}!`; // say hi\nconsole.log(greet(\"x\"));",
    "/* unterminated block comment\nlet x = 1;",
    "\"unterminated string\nif (x) { return 'a\\'b'; }",
    "def f(a, b=2):\n    \"\"\"doc\n    string\"\"\"\n    return a ** b  # power\n",
    "<!-- note --><div class=\"box\" id='main'>&amp; &#169; <br/></div>",
    "@media (max-width: 600px) { .card, #hero { color: #fff !important; margin: 1.5rem 0; } }",
    "#!/bin/bash\nfor f in *.txt; do echo \"$f ${HOME}\" | grep -v x > out; done",
    "{\"name\": \"paddown\", \"tags\": [\"a\", \"b\"], \"n\": -1.5e3, \"ok\": true, \"x\": null}",
    "SELECT id, COUNT(*) FROM users u WHERE u.name LIKE 'a%' -- trailing\n/* block */ ORDER BY 1;",
    "<?php\n$items = array_map(fn($x) => $x * 2, $list); // double\necho \"done\";",
    "héllo wörld \"ünïcode 世界\" // 注释\n",
    "a & b < c > d \"e\" 'f'",
];

fn tags() -> Vec<&'static str> {
    let mut tags: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
    tags.extend(ALIASES.iter().map(|(alias, _)| *alias));
    tags.extend(["", "unknownlang", "rust"]);
    tags
}

fn unescape(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

fn strip_spans(html: &str) -> String {
    let mut out = String::new();
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let end = rest[start..].find('>').expect("well-formed span tag") + start;
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    out
}

fn classified<'a>(segments: &[Segment<'a>], class: TokenClass) -> Vec<&'a str> {
    segments
        .iter()
        .filter(|s| s.class == Some(class))
        .map(|s| s.text)
        .collect()
}

#[test]
fn test_segments_round_trip_and_cover_input_disjointly() {
    for tag in tags() {
        for sample in SAMPLES {
            let segments = highlight_segments(sample, tag);

            let joined: String = segments.iter().map(|s| s.text).collect();
            assert_eq!(&joined, sample, "round trip for {tag:?}");

            let mut expected_start = 0;
            for segment in &segments {
                assert_eq!(segment.range.start, expected_start, "gap/overlap for {tag:?}");
                assert!(!segment.text.is_empty());
                assert_eq!(&sample[segment.range.clone()], segment.text);
                expected_start = segment.range.end;
            }
            assert_eq!(expected_start, sample.len());
        }
    }
}

#[test]
fn test_html_output_round_trips_after_unescaping() {
    for tag in tags() {
        for sample in SAMPLES {
            let html = highlight(sample, tag);
            assert_eq!(unescape(&strip_spans(&html)), *sample, "tag {tag:?}");
        }
    }
}

#[test]
fn test_keyword_inside_string_stays_string() {
    let segments = highlight_segments("\"if (x) {}\"", "javascript");
    assert_eq!(
        segments
            .iter()
            .map(|s| (s.text, s.class))
            .collect::<Vec<_>>(),
        vec![("\"if (x) {}\"", Some(TokenClass::String))]
    );
}

#[test]
fn test_unsupported_language_passthrough() {
    assert_eq!(highlight("<b>x</b>", "unknownlang"), "&lt;b&gt;x&lt;/b&gt;");
    assert_eq!(highlight("<b>x</b>", ""), "&lt;b&gt;x&lt;/b&gt;");
    assert!(
        highlight_segments("<b>x</b>", "unknownlang")
            .iter()
            .all(|s| s.class.is_none())
    );
}

#[test]
fn test_alias_matches_canonical() {
    let code = "def f(): pass";
    assert_eq!(highlight(code, "py"), highlight(code, "python"));
    assert_eq!(highlight_segments(code, "py"), highlight_segments(code, "python"));

    for (alias, lang) in ALIASES {
        for sample in SAMPLES {
            assert_eq!(highlight(sample, alias), highlight(sample, lang.name()));
        }
    }
}

#[test]
fn test_call_site_detection() {
    let call = highlight_segments("foo(1)", "javascript");
    assert_eq!(classified(&call, TokenClass::Function), vec!["foo"]);

    let binding = highlight_segments("let foo = 1", "javascript");
    assert!(classified(&binding, TokenClass::Function).is_empty());
    assert_eq!(classified(&binding, TokenClass::Keyword), vec!["let"]);

    // Whitespace between the name and `(` belongs to the call-site span.
    let spaced = highlight_segments("foo (1)", "javascript");
    assert_eq!(classified(&spaced, TokenClass::Function), vec!["foo "]);
}

#[test]
fn test_keyword_followed_by_paren_is_not_a_call() {
    let segments = highlight_segments("if (x) { while(y) {} }", "javascript");
    assert_eq!(classified(&segments, TokenClass::Keyword), vec!["if", "while"]);
    assert!(classified(&segments, TokenClass::Function).is_empty());

    let py = highlight_segments("print(len(xs))", "python");
    assert_eq!(classified(&py, TokenClass::Keyword), vec!["print"]);
    assert_eq!(classified(&py, TokenClass::Function), vec!["len"]);
}

#[test]
fn test_comment_wins_over_keyword() {
    let segments = highlight_segments("// if this then that", "javascript");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].class, Some(TokenClass::Comment));
    assert_eq!(segments[0].text, "// if this then that");
}

#[test]
fn test_unterminated_block_comment_is_not_a_comment() {
    // The block-comment pattern needs a closing `*/`; without it the text is tagged normally.
    let segments = highlight_segments("/* open\nlet x", "javascript");
    assert!(classified(&segments, TokenClass::Comment).is_empty());
    assert_eq!(classified(&segments, TokenClass::Keyword), vec!["let"]);
}

#[test]
fn test_unterminated_string_is_left_unclaimed() {
    // An open quote with no closing quote never matches; later strings are still found.
    let segments = highlight_segments("x = \"open\ny = 'ok'", "python");
    assert_eq!(classified(&segments, TokenClass::String), vec!["'ok'"]);
}

#[test]
fn test_python_triple_quoted_string_spans_lines() {
    let code = "s = \"\"\"a\nif b\"\"\"";
    let segments = highlight_segments(code, "python");
    assert_eq!(
        classified(&segments, TokenClass::String),
        vec!["\"\"\"a\nif b\"\"\""]
    );
    assert!(classified(&segments, TokenClass::Keyword).is_empty());
}

#[test]
fn test_template_literal_in_javascript() {
    let segments = highlight_segments("let s = `if ${x}`;", "js");
    assert_eq!(classified(&segments, TokenClass::Template), vec!["`if ${x}`"]);
}

#[test]
fn test_html_tags_attributes_and_entities() {
    let segments = highlight_segments("<a href=\"/x\">&amp;</a>", "html");
    assert_eq!(classified(&segments, TokenClass::Keyword), vec!["<a", "</a"]);
    assert_eq!(classified(&segments, TokenClass::Function), vec![" href="]);
    assert_eq!(classified(&segments, TokenClass::String), vec!["\"/x\""]);
    assert_eq!(classified(&segments, TokenClass::Number), vec!["&amp;"]);
    assert_eq!(classified(&segments, TokenClass::Punctuation), vec![">", ">"]);
}

#[test]
fn test_css_properties_selectors_and_units() {
    let segments = highlight_segments(".card { color: #fff; margin: 12px; }", "css");
    assert_eq!(
        classified(&segments, TokenClass::Function),
        vec![".card", "color", "margin"]
    );
    assert_eq!(classified(&segments, TokenClass::Number), vec!["#fff", "12px"]);
}

#[test]
fn test_json_keys_are_distinct_from_values() {
    let segments = highlight_segments("{\"a\": \"b\", \"n\": -2}", "json");
    assert_eq!(
        classified(&segments, TokenClass::Function),
        vec!["\"a\"", "\"n\""]
    );
    assert_eq!(classified(&segments, TokenClass::String), vec!["\"b\""]);
    assert_eq!(classified(&segments, TokenClass::Number), vec!["-2"]);
}

#[test]
fn test_sql_keywords_are_case_insensitive() {
    let upper = highlight_segments("SELECT a FROM t", "sql");
    let lower = highlight_segments("select a from t", "sql");
    assert_eq!(classified(&upper, TokenClass::Keyword), vec!["SELECT", "FROM"]);
    assert_eq!(classified(&lower, TokenClass::Keyword), vec!["select", "from"]);
}

#[test]
fn test_sql_case_folding_ignores_non_ascii_lookalikes() {
    // Long s and the Kelvin sign are not `s` and `k`.
    assert_eq!(highlight("ſelect \u{212A}ey", "sql"), "ſelect \u{212A}ey");
    assert_eq!(
        highlight("Select ſelect", "sql"),
        "<span class=\"tok-keyword\">Select</span> ſelect"
    );
}

#[test]
fn test_accented_letters_are_word_boundaries() {
    assert_eq!(
        highlight("2.5é", "css"),
        "<span class=\"tok-number\">2.5</span>é"
    );
    assert_eq!(
        highlight("éif", "javascript"),
        "é<span class=\"tok-keyword\">if</span>"
    );
}

#[test]
fn test_bash_variables_inside_double_quotes_stay_string() {
    let segments = highlight_segments("echo \"$HOME\" $PATH", "bash");
    assert_eq!(classified(&segments, TokenClass::String), vec!["\"$HOME\""]);
    assert_eq!(classified(&segments, TokenClass::Template), vec!["$PATH"]);
    assert_eq!(classified(&segments, TokenClass::Keyword), vec!["echo"]);
}

#[test]
fn test_php_variables_and_arrows() {
    let segments = highlight_segments("$a->b($c);", "php");
    assert_eq!(classified(&segments, TokenClass::Template), vec!["$a", "$c"]);
    assert_eq!(classified(&segments, TokenClass::Operator), vec!["->"]);
    assert_eq!(classified(&segments, TokenClass::Function), vec!["b"]);
}

#[test]
fn test_render_code_block_lowercases_fence_tag() {
    let html = render_code_block("x", Some("PY"));
    assert_eq!(
        html,
        "<div class=\"code-block-wrapper\"><div class=\"code-lang-label\">py</div>\
         <pre><code>x</code></pre></div>"
    );
}
