use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for `paddown-hl`.
#[derive(Parser, Debug)]
#[command(
    name = "paddown-hl",
    version,
    about = "Highlight a code snippet as HTML using the paddown rule tables"
)]
pub struct CliArgs {
    /// Input file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Language tag or alias (e.g. `js`, `python`, `sh`).
    ///
    /// Inferred from the input extension when omitted.
    #[arg(short = 'l', long)]
    pub lang: Option<String>,

    /// Output format.
    #[arg(short = 'f', long, value_enum, ignore_case = true, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Document title for `--format document`. Defaults to the input file name.
    #[arg(long)]
    pub title: Option<String>,

    /// YAML file with highlighter settings.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Emit one plain segment per unclaimed character instead of merged runs.
    #[arg(long)]
    pub no_merge: bool,

    /// Cap on candidate matches examined per rule.
    #[arg(long)]
    pub max_matches_per_rule: Option<usize>,

    /// Print supported languages and aliases, then exit.
    #[arg(long)]
    pub list_languages: bool,
}

/// What `paddown-hl` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bare highlighted HTML fragment.
    Html,
    /// Fragment wrapped as a fenced code block (label + `<pre><code>`).
    Block,
    /// Standalone HTML document with the token stylesheet inlined.
    Document,
    /// Segment stream as JSON.
    Json,
}
