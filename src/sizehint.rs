//! Size hints in the shape of ICCCM `WM_NORMAL_HINTS`.
//!
//! Each constraint is optional; an absent field means the client (or frame)
//! places no restriction of that kind.

use serde::{Deserialize, Serialize};

/// A width/height pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Resize constraints for a region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeHints {
    pub min: Option<Size>,
    pub max: Option<Size>,
    pub base: Option<Size>,
    pub inc: Option<Size>,
}

impl SizeHints {
    /// Raise the minimum so that it also satisfies `other`'s minimum.
    ///
    /// Used by frames holding several items: the frame cannot shrink below
    /// what any of its tabs accepts.
    pub fn adjust_for(&mut self, other: &SizeHints) {
        if let Some(omin) = other.min {
            self.min = Some(match self.min {
                Some(min) => Size::new(min.width.max(omin.width), min.height.max(omin.height)),
                None => omin,
            });
        }
    }

    /// Grow every size constraint by the decoration offsets.
    ///
    /// Base and min sizes that were not set become the offsets themselves,
    /// the maximum is only adjusted when present.
    pub fn add_offsets(&mut self, woff: u32, hoff: u32) {
        self.base = Some(match self.base {
            Some(b) => Size::new(b.width.saturating_add(woff), b.height.saturating_add(hoff)),
            None => Size::new(woff, hoff),
        });
        if let Some(max) = self.max.as_mut() {
            max.width = max.width.saturating_add(woff);
            max.height = max.height.saturating_add(hoff);
        }
        self.min = Some(match self.min {
            Some(m) => Size::new(m.width.saturating_add(woff), m.height.saturating_add(hoff)),
            None => Size::new(woff, hoff),
        });
    }

    /// Drop the min/max constraints, keeping base and increments
    pub fn clear_min_max(&mut self) {
        self.min = None;
        self.max = None;
    }

}
