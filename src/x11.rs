//! X11 glue.
//!
//! Reading client titles and size hints for tabs, and applying frame shapes
//! with the SHAPE extension.

use std::rc::Rc;

use anyhow::{Context, Result};
use x11rb::connection::{Connection, RequestConnection};
use x11rb::properties::WmSizeHints;
use x11rb::protocol::shape::{self, ConnectionExt as _, SK, SO};
use x11rb::protocol::xproto::{
    Atom, AtomEnum, ClipOrdering, ConnectionExt as _, Rectangle, Window,
};
use x11rb::rust_connection::RustConnection;

use crate::frame::ManagedItem;
use crate::sizehint::{Size, SizeHints};
use crate::types::Rect;

/// Atoms needed to read window titles
pub struct Atoms {
    pub net_wm_name: Atom,
    pub utf8_string: Atom,
}

impl Atoms {
    /// Create and intern all required atoms
    pub fn new(conn: &impl Connection) -> Result<Self> {
        Ok(Self {
            net_wm_name: Self::intern(conn, b"_NET_WM_NAME")?,
            utf8_string: Self::intern(conn, b"UTF8_STRING")?,
        })
    }

    /// Intern an atom name
    fn intern(conn: &impl Connection, name: &[u8]) -> Result<Atom> {
        Ok(conn.intern_atom(false, name)?.reply()?.atom)
    }
}

/// Connect to the X server named by `$DISPLAY`
pub fn connect() -> Result<Rc<RustConnection>> {
    let (conn, _screen) = x11rb::connect(None).context("Failed to connect to X server")?;
    Ok(Rc::new(conn))
}

/// Whether `window` still exists on the server
pub fn window_exists(conn: &impl Connection, window: Window) -> bool {
    conn.get_window_attributes(window)
        .ok()
        .and_then(|cookie| cookie.reply().ok())
        .is_some()
}

/// Read a text property, `None` when it is unset or not valid UTF-8
fn text_property(conn: &impl Connection, window: Window, property: Atom, kind: Atom) -> Option<String> {
    let reply = conn
        .get_property(false, window, property, kind, 0, 1024)
        .ok()?
        .reply()
        .ok()?;
    if reply.value.is_empty() {
        return None;
    }
    String::from_utf8(reply.value).ok()
}

/// Get the window title from _NET_WM_NAME or WM_NAME
pub fn get_window_title(conn: &impl Connection, atoms: &Atoms, window: Window) -> Option<String> {
    text_property(conn, window, atoms.net_wm_name, atoms.utf8_string).or_else(|| {
        text_property(conn, window, AtomEnum::WM_NAME.into(), AtomEnum::STRING.into())
    })
}

/// Read WM_NORMAL_HINTS of a client
pub fn get_size_hints(conn: &impl Connection, window: Window) -> SizeHints {
    let hints = WmSizeHints::get_normal_hints(conn, window)
        .ok()
        .and_then(|cookie| cookie.reply().ok())
        .flatten();

    let Some(hints) = hints else {
        return SizeHints::default();
    };

    let size = |s: Option<(i32, i32)>| s.map(|(w, h)| Size::new(w.max(0) as u32, h.max(0) as u32));
    SizeHints {
        min: size(hints.min_size),
        max: size(hints.max_size),
        base: size(hints.base_size),
        inc: size(hints.size_increment),
    }
}

/// Build a tab for a live client window, `None` if it is gone
pub fn managed_item_for(conn: &impl Connection, atoms: &Atoms, window: Window) -> Option<ManagedItem> {
    if !window_exists(conn, window) {
        log::info!("Client window 0x{:x} no longer exists", window);
        return None;
    }

    let mut item = ManagedItem::unnamed()
        .with_window(window)
        .with_size_hints(get_size_hints(conn, window));
    item.name = get_window_title(conn, atoms, window);
    Some(item)
}

fn to_x_rect(r: &Rect) -> Rectangle {
    Rectangle {
        x: r.x.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
        y: r.y.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
        width: r.width.min(u16::MAX as u32) as u16,
        height: r.height.min(u16::MAX as u32) as u16,
    }
}

/// A window whose bounding and input shapes follow a frame
pub struct ShapeTarget {
    conn: Rc<RustConnection>,
    window: Window,
}

impl ShapeTarget {
    /// Fails if the server lacks the SHAPE extension
    pub fn new(conn: Rc<RustConnection>, window: Window) -> Result<Self> {
        conn.extension_information(shape::X11_EXTENSION_NAME)?
            .context("X server does not support the SHAPE extension")?;
        Ok(Self { conn, window })
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Replace the window's bounding and input regions with `rects`
    pub fn apply(&self, rects: &[Rect]) -> Result<()> {
        let rects: Vec<Rectangle> = rects.iter().map(to_x_rect).collect();
        for kind in [SK::BOUNDING, SK::INPUT] {
            self.conn.shape_rectangles(
                SO::SET,
                kind,
                ClipOrdering::UNSORTED,
                self.window,
                0,
                0,
                &rects,
            )?;
        }
        self.conn.flush()?;
        Ok(())
    }
}
