//! Theme file support for tfwm.
//!
//! Loads brush settings from ~/.config/tfwm/theme.toml if it exists,
//! otherwise uses sensible defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::brush::{BorderWidths, ExtraValue};
use crate::floatframe::{BAR_MAX_W_Q_KEY, DEFAULT_BAR_MAX_W_Q, DEFAULT_TAB_MIN_W, TAB_MIN_W_KEY};

/// Brush settings for frames
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Font family used for tab labels ("monospace" picks a common one)
    pub font: String,
    /// Font size in points
    pub font_size: u32,
    /// Borders of the frame body
    pub border: BorderWidths,
    /// Borders of the tab bar and the separators between tabs
    pub bar_border: BorderWidths,
    /// Free-form values looked up by name, e.g. `floatframe_tab_min_w`
    pub extras: HashMap<String, ExtraValue>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut extras = HashMap::new();
        extras.insert(TAB_MIN_W_KEY.to_string(), ExtraValue::Int(DEFAULT_TAB_MIN_W as i64));
        extras.insert(BAR_MAX_W_Q_KEY.to_string(), ExtraValue::Float(DEFAULT_BAR_MAX_W_Q));

        Self {
            font: "monospace".to_string(),
            font_size: 10,
            border: BorderWidths {
                top: 2,
                bottom: 2,
                left: 2,
                right: 2,
                tb_ileft: 0,
                tb_iright: 0,
            },
            bar_border: BorderWidths {
                top: 4,
                bottom: 4,
                left: 6,
                right: 6,
                tb_ileft: 1,
                tb_iright: 1,
            },
            extras,
        }
    }
}

impl Theme {
    /// Load theme from default path (~/.config/tfwm/theme.toml)
    pub fn load() -> Self {
        Self::load_from_path(&Self::default_path())
    }

    /// Default theme file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tfwm")
            .join("theme.toml")
    }

    /// Load theme from a specific path
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(theme) => {
                    log::info!("Loaded theme from {:?}", path);
                    theme
                }
                Err(e) => {
                    log::warn!("Failed to parse theme: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No theme file found at {:?}, using defaults", path);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.font, "monospace");
        assert_eq!(theme.extras.get(TAB_MIN_W_KEY), Some(&ExtraValue::Int(100)));
        assert_eq!(theme.extras.get(BAR_MAX_W_Q_KEY), Some(&ExtraValue::Float(0.95)));
    }

    #[test]
    fn test_partial_theme() {
        let toml = r#"
font_size = 12

[bar_border]
left = 3
right = 3

[extras]
floatframe_tab_min_w = 80
floatframe_bar_max_w_q = 0.5
"#;
        let theme: Theme = toml::from_str(toml).unwrap();
        assert_eq!(theme.font, "monospace");
        assert_eq!(theme.font_size, 12);
        assert_eq!(theme.bar_border.left, 3);
        // Unset fields in a given table default to zero
        assert_eq!(theme.bar_border.top, 0);
        // Untouched tables keep the theme defaults
        assert_eq!(theme.border.left, 2);
        assert_eq!(theme.extras.get(TAB_MIN_W_KEY), Some(&ExtraValue::Int(80)));
        assert_eq!(theme.extras.get(BAR_MAX_W_Q_KEY), Some(&ExtraValue::Float(0.5)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let theme = Theme::load_from_path(Path::new("/nonexistent/tfwm/theme.toml"));
        assert_eq!(theme.font_size, 10);
    }

    #[test]
    fn test_unparsable_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("tfwm-theme-{}.toml", std::process::id()));
        std::fs::write(&path, "font_size = \"large\"").unwrap();
        let theme = Theme::load_from_path(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(theme.font_size, 10);
    }
}
