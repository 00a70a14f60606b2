//! Viewer configuration.
//!
//! Loaded from TOML; every field is optional and falls back to the defaults
//! below.
//!
//! ```toml
//! read_only = true
//! initial_expanded = [1]
//! theme = "dark"          # omit to follow the browser preference
//!
//! [sidebar]
//! default_width = 300
//! min_width = 200
//! max_width = 600
//!
//! [display]
//! font_size = 14
//! tab_size = 2
//! render_whitespace = "selection"
//! ```

use serde::Deserialize;

use crate::display::DisplayOptions;
use crate::error::ConfigError;
use crate::layout::{SidebarBounds, Theme};
use crate::tree::NodeId;

/// Side panel sizing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub default_width: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            default_width: 300.0,
            min_width: 200.0,
            max_width: 600.0,
        }
    }
}

impl SidebarConfig {
    pub fn bounds(&self) -> SidebarBounds {
        SidebarBounds {
            min: self.min_width,
            max: self.max_width,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Whether the code view refuses edits.
    pub read_only: bool,
    /// Folder ids expanded when the explorer first renders.
    pub initial_expanded: Vec<u32>,
    /// Fixed starting theme; `None` follows the browser preference.
    pub theme: Option<Theme>,
    pub sidebar: SidebarConfig,
    pub display: DisplayOptions,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            read_only: true,
            initial_expanded: vec![1],
            theme: None,
            sidebar: SidebarConfig::default(),
            display: DisplayOptions::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the sidebar bounds and display settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let SidebarConfig {
            default_width,
            min_width,
            max_width,
        } = self.sidebar;

        if min_width > max_width {
            return Err(ConfigError::InvertedBounds {
                min: min_width,
                max: max_width,
            });
        }
        if !(min_width..=max_width).contains(&default_width) {
            return Err(ConfigError::WidthOutOfBounds {
                width: default_width,
                min: min_width,
                max: max_width,
            });
        }
        if self.display.tab_size == 0 {
            return Err(ConfigError::ZeroTabSize);
        }
        Ok(())
    }

    pub fn initial_expanded(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.initial_expanded.iter().copied().map(NodeId)
    }
}
