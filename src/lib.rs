//! tfwm - floating tabbed frames for an X11 window manager.
//!
//! The library holds the frame core: tab bar layout, window shape and
//! geometry of floating frames, on top of a generic frame base. Drawing
//! and metrics come from a [`brush::Brush`]; a FreeType-backed brush and
//! X11 glue are included for driving real windows.

pub mod brush;
pub mod config;
pub mod error;
pub mod floatframe;
pub mod frame;
pub mod render;
pub mod saveload;
pub mod sizehint;
pub mod types;
pub mod x11;

pub use brush::{BorderWidths, Brush, ExtraValue, FontExtents, FrameBrushes};
pub use error::FrameError;
pub use floatframe::FloatFrame;
pub use frame::{FitParams, Frame, FrameFlags, FrameOps, ItemId, ManagedItem, TabTitle};
pub use saveload::{FrameConfiguration, ManagedConfig};
pub use sizehint::{Size, SizeHints};
pub use types::{Rect, SetParam};
