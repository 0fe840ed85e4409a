//! Tracing configuration for rpcdoc binaries.
//!
//! Supports three output formats controlled by `RPCDOC_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # See why a method was skipped
//! RPCDOC_LOG=warn rpcdoc snapshot.json
//!
//! # Follow every resolution step
//! RPCDOC_LOG=debug RPCDOC_LOG_FORMAT=tree rpcdoc snapshot.json
//!
//! # Parser internals only
//! RPCDOC_LOG="rpcdoc_signature=trace" rpcdoc snapshot.json
//! ```
//!
//! A bare level in `RPCDOC_LOG` applies to the rpcdoc crates only; full
//! directive strings pass through unchanged. The subscriber is only
//! initialised when `RPCDOC_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Crates whose events a bare `RPCDOC_LOG=<level>` enables.
const RPCDOC_TARGETS: &[&str] = &[
    "rpcdoc",
    "rpcdoc_cli",
    "rpcdoc_introspect",
    "rpcdoc_metadata",
    "rpcdoc_signature",
];

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Parse from the `RPCDOC_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        Self::parse(&std::env::var("RPCDOC_LOG_FORMAT").unwrap_or_default())
    }
}

/// Expand a bare level (`debug`) into one directive per rpcdoc crate.
fn scoped_directives(value: &str) -> String {
    let value = value.trim();
    match value.parse::<LevelFilter>() {
        Ok(level) => RPCDOC_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(","),
        Err(_) => value.to_string(),
    }
}

/// Build an `EnvFilter` from `RPCDOC_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("RPCDOC_LOG") {
        EnvFilter::builder().parse_lossy(scoped_directives(&val))
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// All output goes to stderr so it never mixes with the JSON document on
/// stdout.
pub fn init_tracing() {
    let has_rpcdoc_log = std::env::var("RPCDOC_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_rpcdoc_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("bogus"), LogFormat::Text);
    }

    #[test]
    fn test_bare_level_is_scoped_to_rpcdoc_crates() {
        let directives = scoped_directives(" debug ").to_lowercase();
        assert_eq!(directives.split(',').count(), RPCDOC_TARGETS.len());
        assert!(directives.contains("rpcdoc_signature=debug"));
        assert!(directives.contains("rpcdoc_metadata=debug"));
    }

    #[test]
    fn test_full_directives_pass_through() {
        assert_eq!(
            scoped_directives("rpcdoc_signature=trace,warn"),
            "rpcdoc_signature=trace,warn"
        );
    }
}
