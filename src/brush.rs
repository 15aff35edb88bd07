//! Rendering backend interface.
//!
//! A brush is the drawing/theme engine attached to a frame. The frame core
//! only asks it for metrics, for labels fitted to a width, and to apply a
//! window shape; how text is drawn or truncated is the brush's business.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::types::Rect;

/// Border widths of a brush.
///
/// `tb_ileft`/`tb_iright` are the inner borders drawn on the left and right
/// side of each separator between two tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderWidths {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
    pub tb_ileft: u32,
    pub tb_iright: u32,
}

/// Font metrics of a brush
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontExtents {
    pub max_height: u32,
    pub max_width: u32,
    pub baseline: u32,
}

/// A theme-declared value looked up by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Rendering/theme backend used by frames
pub trait Brush {
    fn border_widths(&self) -> BorderWidths;

    fn font_extents(&self) -> FontExtents;

    /// Rendered width of `text` in pixels
    fn text_width(&self, text: &str) -> u32;

    /// Produce a label for `text` that fits in `max_width` pixels.
    ///
    /// Truncation and elision policy is up to the implementation.
    fn make_label(&self, text: &str, max_width: u32) -> String;

    /// Make `rects` (window-relative) the visible and input region of the
    /// window this brush draws on.
    fn set_window_shape(&self, rects: &[Rect]);

    /// Theme-declared extra value
    fn get_extra(&self, key: &str) -> Option<ExtraValue>;

    /// Extra value that must be an integer
    fn get_extra_int(&self, key: &str) -> Option<i64> {
        match self.get_extra(key)? {
            ExtraValue::Int(i) => Some(i),
            other => {
                log::warn!("Theme value {} is not an integer: {:?}", key, other);
                None
            }
        }
    }

    /// Extra value that must be numeric; integers are widened
    fn get_extra_float(&self, key: &str) -> Option<f64> {
        match self.get_extra(key)? {
            ExtraValue::Float(f) => Some(f),
            ExtraValue::Int(i) => Some(i as f64),
            other => {
                log::warn!("Theme value {} is not a number: {:?}", key, other);
                None
            }
        }
    }
}

/// The pair of brushes a frame draws with: one for the border and content
/// area, one for the tab bar.
#[derive(Clone)]
pub struct FrameBrushes {
    pub brush: Rc<dyn Brush>,
    pub bar_brush: Rc<dyn Brush>,
}

impl FrameBrushes {
    pub fn new(brush: Rc<dyn Brush>, bar_brush: Rc<dyn Brush>) -> Self {
        Self { brush, bar_brush }
    }

    /// Use the same brush for border and bar
    pub fn shared(brush: Rc<dyn Brush>) -> Self {
        Self {
            bar_brush: Rc::clone(&brush),
            brush,
        }
    }
}

impl fmt::Debug for FrameBrushes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBrushes")
            .field("border", &self.brush.border_widths())
            .field("bar_border", &self.bar_brush.border_widths())
            .finish()
    }
}
