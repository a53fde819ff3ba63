//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! caret, range and edit-cycle issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug,layout=trace` - scoped filtering
//! - `RUST_LOG=rich_canvas::editor=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/rich-canvas/logs/rich-canvas.log` with daily
//! rotation. File logging uses debug level by default.

use std::fmt;

use tracing_subscriber::{
    fmt as sub_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::geometry::{Position, TextRange};
use crate::selection::Selection;

/// Initialize tracing subscriber with console and file logging
///
/// Host applications call this once at startup; the library never installs a
/// subscriber on its own.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = sub_fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "rich-canvas.log");
            Some(
                sub_fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of caret/range state for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub caret: Position,
    pub range: Option<TextRange>,
}

impl SelectionSnapshot {
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            caret: selection.caret(),
            range: selection.active_range(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.caret != other.caret {
            changes.push(format!(
                "caret: {} → {}",
                PositionDisplay(self.caret),
                PositionDisplay(other.caret)
            ));
        }
        if self.range != other.range {
            match other.range {
                Some(range) => changes.push(format!(
                    "range: {}..{}",
                    PositionDisplay(range.start),
                    PositionDisplay(range.end)
                )),
                None => changes.push("range cleared".to_string()),
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

struct PositionDisplay(Position);

impl fmt::Display for PositionDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0.line, self.0.index)
    }
}
