//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/rich-canvas/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::document::DEFAULT_HISTORY_LIMIT;
use crate::style::{Color, Style};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Document-wide base style; the last fallback of style resolution
    pub default_style: Style,
    /// Maximum number of undo steps kept
    pub history_limit: usize,
    pub caret_color: Color,
    pub caret_width: f32,
    /// Fill of selection rectangles, usually translucent
    pub selection_color: Color,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_style: Style::base(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            caret_color: Color::BLACK,
            caret_width: 2.0,
            selection_color: Color::rgba(0, 0, 255, 0x4D),
        }
    }
}

impl EditorConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path. Missing or invalid files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.with_complete_default_style()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// A partial `default_style` in a file only overrides the fields it names
    fn with_complete_default_style(mut self) -> Self {
        self.default_style = Style::base().merged(&self.default_style);
        self
    }
}
