//! Shared types used across multiple modules.
//!
//! Geometry records and the set/unset/toggle parameter used by the
//! frame flag operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FrameError;

/// A rectangle representing geometry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// How a boolean property should be changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetParam {
    Set,
    Unset,
    Toggle,
}

impl SetParam {
    /// Apply to the current value and return the new one
    pub fn apply(self, current: bool) -> bool {
        match self {
            SetParam::Set => true,
            SetParam::Unset => false,
            SetParam::Toggle => !current,
        }
    }
}

impl FromStr for SetParam {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "set" => Ok(SetParam::Set),
            "unset" => Ok(SetParam::Unset),
            "toggle" => Ok(SetParam::Toggle),
            _ => Err(FrameError::InvalidSetParam(s.to_string())),
        }
    }
}

impl fmt::Display for SetParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SetParam::Set => "set",
            SetParam::Unset => "unset",
            SetParam::Toggle => "toggle",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_serialization() {
        let rect = Rect::new(-4, 20, 100, 200);
        let json = serde_json::to_string(&rect).unwrap();
        let parsed: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rect);
    }

    #[test]
    fn test_set_param() {
        assert_eq!("set".parse::<SetParam>().unwrap(), SetParam::Set);
        assert_eq!("Toggle".parse::<SetParam>().unwrap(), SetParam::Toggle);
        assert!("maybe".parse::<SetParam>().is_err());

        assert!(SetParam::Toggle.apply(false));
        assert!(!SetParam::Toggle.apply(true));
        assert!(!SetParam::Unset.apply(true));
        assert!(SetParam::Set.apply(false));
    }
}
