//! Saved frame layouts.
//!
//! A frame's state is persisted as a JSON record: flags, saved geometry,
//! derived bar metrics and the ordered list of its tabs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FrameError;
use crate::sizehint::SizeHints;
use crate::types::Rect;

/// Persisted state of a frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geom: Option<Rect>,
    pub tab_hidden: bool,
    pub shaded: bool,
    pub show_numbers: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_h: Option<u32>,
    /// Derived tab bar width at save time; ignored when loading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_width: Option<u32>,
    /// Derived tab bar height at save time; ignored when loading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_height: Option<u32>,
    pub managed: Vec<ManagedConfig>,
}

/// Persisted state of one tab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// X11 client window the tab was showing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<u32>,
    /// Whether this was the visible tab
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub current: bool,
    pub size_hints: SizeHints,
}

impl FrameConfiguration {
    pub fn from_json(json: &str) -> Result<Self, FrameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, FrameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a saved layout file
    pub fn load_from_path(path: &Path) -> Result<Self, FrameError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::info!("Loaded frame layout from {:?} ({} tabs)", path, config.managed.len());
        Ok(config)
    }

    /// Write the layout to a file, replacing it
    pub fn save_to_path(&self, path: &Path) -> Result<(), FrameError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Saved frame layout to {:?}", path);
        Ok(())
    }
}
