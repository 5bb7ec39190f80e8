//! `paddown-hl` - highlight a code snippet from a file or stdin.
//!
//! # Usage
//!
//! ```bash
//! paddown-hl app.js                          # language from the extension
//! cat query.txt | paddown-hl --lang sql      # stdin
//! paddown-hl notes.py -f document > out.html # standalone page
//! paddown-hl snippet.sh -f json              # segment stream
//! ```

mod args;
mod tracing_config;

use anyhow::Context;
use args::{CliArgs, OutputFormat};
use clap::Parser;
use paddown_highlight::markup::{normalize_fence_tag, standalone_document};
use paddown_highlight::{HighlightConfig, Highlighter, Language};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    tracing_config::init_tracing();
    let args = CliArgs::parse();

    if args.list_languages {
        print!("{}", language_listing());
        return Ok(());
    }

    let config = load_config(&args)?;
    let highlighter =
        Highlighter::builtin(config).context("built-in rule table failed validation")?;
    let code = read_input(args.input.as_deref())?;
    let tag = language_tag(&args);
    debug!(tag = %tag, bytes = code.len(), format = ?args.format, "highlighting");

    let output = render(&highlighter, &code, &tag, &args)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

fn load_config(args: &CliArgs) -> anyhow::Result<HighlightConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            parse_config(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => HighlightConfig::default(),
    };

    if args.no_merge {
        config.merge_plain_runs = false;
    }
    if let Some(max) = args.max_matches_per_rule {
        config.max_matches_per_rule = max;
    }
    anyhow::ensure!(
        config.max_matches_per_rule > 0,
        "max_matches_per_rule must be at least 1"
    );
    Ok(config)
}

fn parse_config(text: &str) -> Result<HighlightConfig, serde_yaml::Error> {
    // An empty file is a valid "all defaults" config.
    if text.trim().is_empty() {
        return Ok(HighlightConfig::default());
    }
    serde_yaml::from_str(text)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .context("reading stdin")?;
            Ok(code)
        }
    }
}

/// Explicit `--lang` wins; otherwise the canonical name for the input's extension, or empty.
fn language_tag(args: &CliArgs) -> String {
    if let Some(lang) = &args.lang {
        return normalize_fence_tag(lang);
    }
    args.input
        .as_deref()
        .and_then(Language::from_path)
        .map(|lang| lang.name().to_string())
        .unwrap_or_default()
}

fn render(
    highlighter: &Highlighter<'_>,
    code: &str,
    tag: &str,
    args: &CliArgs,
) -> anyhow::Result<String> {
    let fence_tag = (!tag.is_empty()).then_some(tag);
    Ok(match args.format {
        OutputFormat::Html => highlighter.highlight(code, tag),
        OutputFormat::Block => highlighter.code_block(code, fence_tag),
        OutputFormat::Document => {
            let title = args.title.clone().unwrap_or_else(|| {
                args.input
                    .as_deref()
                    .and_then(Path::file_name)
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default()
            });
            standalone_document(&title, &highlighter.code_block(code, fence_tag))
        }
        OutputFormat::Json => serde_json::to_string_pretty(&highlighter.segments(code, tag))
            .context("serializing segments")?,
    })
}

fn language_listing() -> String {
    let mut out = String::new();
    for lang in Language::ALL {
        let aliases: Vec<&str> = lang.aliases().collect();
        if aliases.is_empty() {
            out.push_str(&format!("{lang}\n"));
        } else {
            out.push_str(&format!("{lang} ({})\n", aliases.join(", ")));
        }
    }
    out
}
