//! Shell layout state: colour theme and side panel sizing.

use serde::Deserialize;

/// Colour theme shared by the explorer, tab bar and code view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Theme name in the code view's vocabulary.
    pub fn editor_name(self) -> &'static str {
        match self {
            Self::Dark => "vs-dark",
            Self::Light => "light",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Allowed side panel widths, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarBounds {
    pub min: f64,
    pub max: f64,
}

impl SidebarBounds {
    /// Clamp `width` into `[min, max]`.
    pub fn clamp(&self, width: f64) -> f64 {
        width.clamp(self.min, self.max)
    }
}

/// Pointer position and panel width captured when a resize drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    pub start_x: f64,
    pub start_width: f64,
}

impl DragAnchor {
    pub fn new(start_x: f64, start_width: f64) -> Self {
        Self {
            start_x,
            start_width,
        }
    }

    /// Panel width for the pointer at `client_x`, kept within `bounds`.
    pub fn width_at(&self, client_x: f64, bounds: SidebarBounds) -> f64 {
        bounds.clamp(self.start_width + (client_x - self.start_x))
    }
}
