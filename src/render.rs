//! Font metrics and the FreeType-backed brush.
//!
//! `FontRenderer` measures and elides text with FreeType. `FontBrush` wraps
//! it together with a theme's border widths and extras to serve as a frame
//! brush, optionally applying shapes to a live X11 window.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use freetype::face::LoadFlag;
use freetype::Library as FtLibrary;

use crate::brush::{BorderWidths, Brush, ExtraValue, FontExtents};
use crate::types::Rect;
use crate::x11::ShapeTarget;

/// Appended to labels that had to be cut short
const ELLIPSIS: &str = "...";

/// Font directories searched after the user's own
const FONT_DIRS: &[&str] = &["/usr/share/fonts", "/usr/local/share/fonts"];

/// Preferred files for the "monospace" family
const MONOSPACE_FONTS: &[&str] = &[
    "DejaVuSansMono",
    "LiberationMono",
    "UbuntuMono",
    "DroidSansMono",
    "NotoSansMono",
    "FreeMono",
];

/// Text measurement using FreeType
pub struct FontRenderer {
    _library: FtLibrary,
    face: freetype::Face,
    extents: FontExtents,
}

impl FontRenderer {
    /// Load the named font at `font_size` points
    pub fn new(font_name: &str, font_size: u32) -> Result<Self> {
        let library = FtLibrary::init().context("Failed to initialize FreeType")?;

        let font_path = Self::find_font(font_name)?;
        log::info!("Loading font: {:?}", font_path);

        let face = library
            .new_face(&font_path, 0)
            .context("Failed to load font face")?;

        // 1/64th points at 96 DPI
        face.set_char_size(0, (font_size as isize) * 64, 96, 96)
            .context("Failed to set font size")?;

        let metrics = face.size_metrics().context("Failed to get font metrics")?;
        let extents = FontExtents {
            max_height: (metrics.height >> 6).max(0) as u32,
            max_width: (metrics.max_advance >> 6).max(0) as u32,
            baseline: (metrics.ascender >> 6).max(0) as u32,
        };
        log::debug!("Font extents: {:?}", extents);

        Ok(Self {
            _library: library,
            face,
            extents,
        })
    }

    /// Locate a regular-weight font file for `font_name`
    fn find_font(font_name: &str) -> Result<PathBuf> {
        let patterns: Vec<String> = if font_name == "monospace" {
            MONOSPACE_FONTS.iter().map(|s| s.to_string()).collect()
        } else {
            vec![font_name.replace(' ', ""), font_name.replace(' ', "-")]
        };

        let mut search_dirs: Vec<PathBuf> = dirs::home_dir()
            .map(|h| h.join(".local/share/fonts"))
            .into_iter()
            .chain(FONT_DIRS.iter().map(PathBuf::from))
            .filter(|p| p.exists())
            .collect();
        search_dirs.dedup();

        for pattern in &patterns {
            let pattern = pattern.to_lowercase();
            for dir in &search_dirs {
                if let Some(path) = find_font_file(dir, &|name| name.contains(&pattern)) {
                    return Ok(path);
                }
            }
        }

        for dir in &search_dirs {
            if let Some(path) = find_font_file(dir, &|_| true) {
                log::warn!("Font '{}' not found, using fallback: {:?}", font_name, path);
                return Ok(path);
            }
        }

        anyhow::bail!("No suitable font found. Please install a TTF/OTF font.")
    }

    pub fn extents(&self) -> FontExtents {
        self.extents
    }

    /// Horizontal advance of one character in pixels
    fn advance(&self, ch: char) -> u32 {
        match self.face.load_char(ch as usize, LoadFlag::DEFAULT) {
            Ok(()) => (self.face.glyph().advance().x >> 6).max(0) as u32,
            Err(_) => 0,
        }
    }

    /// Measure text width in pixels
    pub fn measure_text(&self, text: &str) -> u32 {
        text.chars().map(|ch| self.advance(ch)).sum()
    }

    /// Truncate text to fit within a given pixel width, adding "..." if needed
    pub fn truncate_text_to_width(&self, text: &str, max_width: u32) -> String {
        if text.is_empty() || max_width == 0 {
            return String::new();
        }
        if self.measure_text(text) <= max_width {
            return text.to_string();
        }

        let ellipsis_width = self.measure_text(ELLIPSIS);
        if ellipsis_width >= max_width {
            return String::new();
        }

        let available = max_width - ellipsis_width;
        let mut used = 0;
        let mut truncated: String = text
            .chars()
            .take_while(|&ch| {
                used += self.advance(ch);
                used <= available
            })
            .collect();
        truncated.push_str(ELLIPSIS);
        truncated
    }
}

/// Search `dir` recursively for a regular .ttf/.otf whose lowercase file
/// name satisfies `matches`
fn find_font_file(dir: &Path, matches: &dyn Fn(&str) -> bool) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if let Some(found) = find_font_file(&path, matches) {
                return Some(found);
            }
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let name = name.to_lowercase();
        let is_font = name.ends_with(".ttf") || name.ends_with(".otf");
        let is_regular = !["bold", "italic", "oblique"].iter().any(|s| name.contains(s));
        if is_font && is_regular && matches(&name) {
            return Some(path);
        }
    }
    None
}

/// Frame brush measuring with a FreeType font
pub struct FontBrush {
    font: Rc<FontRenderer>,
    borders: BorderWidths,
    extras: HashMap<String, ExtraValue>,
    target: Option<ShapeTarget>,
    last_shape: RefCell<Vec<Rect>>,
}

impl FontBrush {
    pub fn new(font: Rc<FontRenderer>, borders: BorderWidths, extras: HashMap<String, ExtraValue>) -> Self {
        Self {
            font,
            borders,
            extras,
            target: None,
            last_shape: RefCell::new(Vec::new()),
        }
    }

    /// Also apply shapes to an X11 window
    pub fn with_target(mut self, target: ShapeTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// The most recently set shape
    pub fn last_shape(&self) -> Vec<Rect> {
        self.last_shape.borrow().clone()
    }
}

impl Brush for FontBrush {
    fn border_widths(&self) -> BorderWidths {
        self.borders
    }

    fn font_extents(&self) -> FontExtents {
        self.font.extents()
    }

    fn text_width(&self, text: &str) -> u32 {
        self.font.measure_text(text)
    }

    fn make_label(&self, text: &str, max_width: u32) -> String {
        self.font.truncate_text_to_width(text, max_width)
    }

    fn set_window_shape(&self, rects: &[Rect]) {
        if let Some(target) = &self.target {
            if let Err(e) = target.apply(rects) {
                log::warn!("Failed to set shape of window 0x{:x}: {:#}", target.window(), e);
            }
        }
        *self.last_shape.borrow_mut() = rects.to_vec();
    }

    fn get_extra(&self, key: &str) -> Option<ExtraValue> {
        self.extras.get(key).cloned()
    }
}
