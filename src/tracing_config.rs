//! Tracing configuration for hosts embedding the tree queries.
//!
//! Supports three output formats controlled by `CARET_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`, which shows
//!   each query span with the descent and boundary decisions nested in it
//! - `json`: one JSON object per span/event
//!
//! ```bash
//! CARET_LOG=debug CARET_LOG_FORMAT=tree my-editor-host
//! CARET_LOG="caret_analysis::path_finder=trace" my-editor-host
//! ```
//!
//! The subscriber is only initialised when `CARET_LOG` (or `RUST_LOG`) is
//! set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `CARET_LOG_FORMAT` value. Unknown values select `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        std::env::var("CARET_LOG_FORMAT")
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// Build an `EnvFilter` from `CARET_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("CARET_LOG") {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global tracing subscriber.
///
/// Does nothing when neither `CARET_LOG` nor `RUST_LOG` is set. Returns
/// whether a subscriber was installed; a host that already installed its
/// own keeps it. Output goes to stderr.
pub fn init_tracing() -> bool {
    let requested =
        std::env::var_os("CARET_LOG").is_some() || std::env::var_os("RUST_LOG").is_some();
    if !requested {
        return false;
    }

    let filter = build_filter();
    let format = LogFormat::from_env();
    let installed = match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
    if installed.is_err() {
        return false;
    }
    tracing::debug!(?format, "tracing initialised");
    true
}
