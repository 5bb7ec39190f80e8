//! Tracing setup for `paddown-hl`.
//!
//! The subscriber is only installed when `PADDOWN_LOG` (or `RUST_LOG`) is set:
//!
//! ```bash
//! PADDOWN_LOG=debug paddown-hl --lang sh deploy.txt
//! PADDOWN_LOG="paddown_highlight::tagger=trace" paddown-hl snippet.js
//! ```
//!
//! Output goes to stderr so it never mixes with the highlighted HTML on stdout.

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `PADDOWN_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("PADDOWN_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global `fmt` subscriber if logging was requested.
pub fn init_tracing() {
    if std::env::var_os("PADDOWN_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
