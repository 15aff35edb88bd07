//! Generic tabbed frame.
//!
//! A frame is a decorated container holding an ordered set of managed
//! items (tabs) under a tab bar. `Frame` holds the state every frame
//! variant shares; `FrameOps` is the interface a variant implements; its
//! provided methods are the generic operations built on top of the
//! variant's geometry.

use std::rc::Rc;

use bitflags::bitflags;
use slotmap::{new_key_type, SlotMap};

use crate::brush::{BorderWidths, Brush, FrameBrushes};
use crate::saveload::{FrameConfiguration, ManagedConfig};
use crate::sizehint::SizeHints;
use crate::types::{Rect, SetParam};

new_key_type! {
    /// Unique identifier for an item managed by a frame
    pub struct ItemId;
}

bitflags! {
    /// Frame state bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameFlags: u32 {
        /// Tab bar is not shown
        const TAB_HIDE      = 0x0004;
        /// Vertical extent saved by a vertical maximize
        const SAVED_VERT    = 0x0008;
        /// Horizontal extent saved by a horizontal maximize
        const SAVED_HORIZ   = 0x0010;
        /// Collapsed to the tab bar
        const SHADED        = 0x0020;
        /// Bar is drawn outside the border
        const BAR_OUTSIDE   = 0x0080;
        /// Frame should be destroyed when its last item leaves
        const DEST_EMPTY    = 0x0100;
        /// Size hints keep the managed items' min/max constraints
        const SZH_USEMINMAX = 0x0200;
        /// Tabs are labelled with their position instead of their name
        const SHOW_NUMBERS  = 0x0800;
    }
}

/// A client (or nested region) shown as one tab
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagedItem {
    pub name: Option<String>,
    /// X11 client window shown in the tab, if any
    pub window: Option<u32>,
    pub size_hints: SizeHints,
}

impl ManagedItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// An item without a display name
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: u32) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_size_hints(mut self, hints: SizeHints) -> Self {
        self.size_hints = hints;
        self
    }

    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Rendered label of one tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabTitle {
    /// Label text, `None` when the tab has no room for one
    pub text: Option<String>,
    /// Inner width the label was fitted to
    pub iw: u32,
}

/// Placement requested for a new frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitParams {
    pub geom: Rect,
}

impl FitParams {
    pub fn new(geom: Rect) -> Self {
        Self { geom }
    }
}

/// State shared by all frame variants
#[derive(Debug)]
pub struct Frame {
    geom: Rect,
    pub flags: FrameFlags,
    saved_x: i32,
    saved_y: i32,
    saved_w: u32,
    saved_h: u32,
    items: SlotMap<ItemId, ManagedItem>,
    order: Vec<ItemId>,
    current: Option<ItemId>,
    brushes: Option<FrameBrushes>,
    bar_h: u32,
    titles: Vec<TabTitle>,
}

impl Frame {
    pub fn new(fp: &FitParams) -> Self {
        Self {
            geom: fp.geom,
            flags: FrameFlags::empty(),
            saved_x: 0,
            saved_y: 0,
            saved_w: 0,
            saved_h: 0,
            items: SlotMap::with_key(),
            order: Vec::new(),
            current: None,
            brushes: None,
            bar_h: 0,
            titles: Vec::new(),
        }
    }

    /// Frame geometry in parent coordinates
    pub fn geometry(&self) -> Rect {
        self.geom
    }

    pub(crate) fn set_geometry(&mut self, geom: Rect) {
        self.geom = geom;
    }

    // -------------------------------------------------------------------------
    // Managed items
    // -------------------------------------------------------------------------

    /// Number of managed items
    pub fn mcount(&self) -> usize {
        self.order.len()
    }

    /// Managed items in tab order
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &ManagedItem)> + '_ {
        self.order.iter().map(move |&id| (id, &self.items[id]))
    }

    pub fn item(&self, id: ItemId) -> Option<&ManagedItem> {
        self.items.get(id)
    }

    pub fn item_at(&self, index: usize) -> Option<ItemId> {
        self.order.get(index).copied()
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.order.iter().position(|&i| i == id)
    }

    /// The item whose content is shown
    pub fn current(&self) -> Option<ItemId> {
        self.current
    }

    pub fn set_current(&mut self, id: ItemId) -> bool {
        if self.items.contains_key(id) {
            self.current = Some(id);
            true
        } else {
            false
        }
    }

    /// Append an item as the last tab; the first item becomes current
    pub(crate) fn attach(&mut self, item: ManagedItem) -> ItemId {
        let id = self.items.insert(item);
        self.order.push(id);
        if self.current.is_none() {
            self.current = Some(id);
        }
        id
    }

    pub(crate) fn detach(&mut self, id: ItemId) -> Option<ManagedItem> {
        let idx = self.index_of(id)?;
        self.order.remove(idx);
        let item = self.items.remove(id);

        if self.current == Some(id) {
            // The next tab takes over, or the previous one at the end
            self.current = self
                .order
                .get(idx)
                .or_else(|| self.order.last())
                .copied();
        }
        item
    }

    pub(crate) fn rename(&mut self, id: ItemId, name: Option<String>) -> bool {
        match self.items.get_mut(id) {
            Some(item) => {
                item.name = name;
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Brushes and bar
    // -------------------------------------------------------------------------

    /// Brush for the border and content area
    pub fn brush(&self) -> Option<&Rc<dyn Brush>> {
        self.brushes.as_ref().map(|b| &b.brush)
    }

    /// Brush for the tab bar
    pub fn bar_brush(&self) -> Option<&Rc<dyn Brush>> {
        self.brushes.as_ref().map(|b| &b.bar_brush)
    }

    /// Border widths of the border brush, zero without one
    pub fn border_widths(&self) -> BorderWidths {
        self.brush().map(|b| b.border_widths()).unwrap_or_default()
    }

    /// Border widths of the bar brush, zero without one
    pub fn bar_border_widths(&self) -> BorderWidths {
        self.bar_brush().map(|b| b.border_widths()).unwrap_or_default()
    }

    /// Replace the brushes and recompute the bar height from the bar font
    pub(crate) fn set_brushes(&mut self, brushes: Option<FrameBrushes>) {
        self.brushes = brushes;
        self.bar_h = match self.bar_brush() {
            Some(bar) => {
                let bdw = bar.border_widths();
                bar.font_extents()
                    .max_height
                    .saturating_add(bdw.top)
                    .saturating_add(bdw.bottom)
            }
            None => 0,
        };
    }

    /// Bar height regardless of whether the bar is shown
    pub fn bar_h(&self) -> u32 {
        self.bar_h
    }

    /// Height the bar occupies: zero when hidden
    pub fn visible_bar_h(&self) -> u32 {
        if self.flags.contains(FrameFlags::TAB_HIDE) {
            0
        } else {
            self.bar_h
        }
    }

    /// Tab labels, index-aligned with the managed items
    pub fn titles(&self) -> &[TabTitle] {
        &self.titles
    }

    pub(crate) fn replace_titles(&mut self, titles: Vec<TabTitle>) {
        self.titles = titles;
    }

    // -------------------------------------------------------------------------
    // Saved geometry
    // -------------------------------------------------------------------------

    /// Saved horizontal extent (x, width), if any
    pub fn saved_horiz(&self) -> Option<(i32, u32)> {
        self.flags
            .contains(FrameFlags::SAVED_HORIZ)
            .then_some((self.saved_x, self.saved_w))
    }

    /// Saved vertical extent (y, height), if any
    pub fn saved_vert(&self) -> Option<(i32, u32)> {
        self.flags
            .contains(FrameFlags::SAVED_VERT)
            .then_some((self.saved_y, self.saved_h))
    }

    pub(crate) fn save_horiz(&mut self, x: i32, w: u32) {
        self.saved_x = x;
        self.saved_w = w;
        self.flags.insert(FrameFlags::SAVED_HORIZ);
    }

    pub(crate) fn save_vert(&mut self, y: i32, h: u32) {
        self.saved_y = y;
        self.saved_h = h;
        self.flags.insert(FrameFlags::SAVED_VERT);
    }

    /// Restore saved extents from a configuration; a pair is only
    /// restored when both of its values are present
    pub(crate) fn load_saved_geom(&mut self, config: &FrameConfiguration) {
        if let (Some(x), Some(w)) = (config.saved_x, config.saved_w) {
            self.save_horiz(x, w);
        }
        if let (Some(y), Some(h)) = (config.saved_y, config.saved_h) {
            self.save_vert(y, h);
        }
    }

    // -------------------------------------------------------------------------
    // Generic size hints and configuration
    // -------------------------------------------------------------------------

    /// Size hints of the frame given the area left to managed content.
    ///
    /// The current item's hints are the starting point; everything is then
    /// grown by the decoration the frame adds around `managed`.
    pub fn base_resize_hints(&self, managed: Rect) -> SizeHints {
        let woff = self.geom.width.saturating_sub(managed.width);
        let hoff = self.geom.height.saturating_sub(managed.height);

        let mut hints = self
            .current
            .and_then(|id| self.items.get(id))
            .map(|item| item.size_hints)
            .unwrap_or_default();

        if self.flags.contains(FrameFlags::SZH_USEMINMAX) {
            for (_, item) in self.items() {
                hints.adjust_for(&item.size_hints);
            }
        } else {
            hints.clear_min_max();
        }

        hints.add_offsets(woff, hoff);
        hints
    }

    /// Configuration record common to all frames
    pub fn base_configuration(&self) -> FrameConfiguration {
        let (saved_x, saved_w) = match self.saved_horiz() {
            Some((x, w)) => (Some(x), Some(w)),
            None => (None, None),
        };
        let (saved_y, saved_h) = match self.saved_vert() {
            Some((y, h)) => (Some(y), Some(h)),
            None => (None, None),
        };

        FrameConfiguration {
            geom: Some(self.geom),
            tab_hidden: self.flags.contains(FrameFlags::TAB_HIDE),
            shaded: self.flags.contains(FrameFlags::SHADED),
            show_numbers: self.flags.contains(FrameFlags::SHOW_NUMBERS),
            saved_x,
            saved_y,
            saved_w,
            saved_h,
            bar_width: None,
            bar_height: None,
            managed: self
                .items()
                .map(|(id, item)| ManagedConfig {
                    name: item.name.clone(),
                    window: item.window,
                    current: self.current == Some(id),
                    size_hints: item.size_hints,
                })
                .collect(),
        }
    }
}

/// Operations of a frame variant.
///
/// The required methods are the variant-specific geometry and reactions;
/// the provided methods are the generic frame behaviour expressed through
/// them.
pub trait FrameOps {
    fn frame(&self) -> &Frame;

    fn frame_mut(&mut self) -> &mut Frame;

    /// Tab bar rectangle, frame-relative
    fn bar_geom(&self) -> Rect;

    /// Border rectangle, frame-relative
    fn border_geom(&self) -> Rect;

    /// Area inside the border, frame-relative
    fn border_inner_geom(&self) -> Rect;

    /// Area given to the managed content, frame-relative
    fn managed_geom(&self) -> Rect;

    /// Recompute the tab bar layout and labels
    fn recalc_bar(&mut self);

    /// React to a geometry change
    fn size_changed(&mut self, wchg: bool, hchg: bool);

    /// React to new brushes
    fn brushes_updated(&mut self);

    fn resize_hints(&self) -> SizeHints {
        self.frame().base_resize_hints(self.managed_geom())
    }

    fn get_configuration(&self) -> FrameConfiguration {
        self.frame().base_configuration()
    }

    // -------------------------------------------------------------------------
    // Tabs
    // -------------------------------------------------------------------------

    /// Outer width of the n:th tab, borders included
    fn nth_tab_w(&self, n: usize) -> u32 {
        let m = self.frame().mcount().max(1) as i64;
        let bdw = self.frame().bar_border_widths();
        let bar_w = self.bar_geom().width as i64;

        let free = bar_w
            - bdw.left as i64
            - bdw.right as i64
            - (bdw.tb_ileft as i64 + bdw.tb_iright as i64) * (m - 1);
        if free <= 0 {
            return 0;
        }

        let n = n as i64;
        let share = ((n + 1) * free) / m - (n * free) / m;
        let (lb, rb) = tab_edge_borders(&bdw, n, m);
        (share + lb as i64 + rb as i64) as u32
    }

    /// Width available to the n:th tab's label
    fn nth_tab_iw(&self, n: usize) -> u32 {
        let m = self.frame().mcount().max(1) as i64;
        let bdw = self.frame().bar_border_widths();
        let (lb, rb) = tab_edge_borders(&bdw, n as i64, m);
        self.nth_tab_w(n).saturating_sub(lb).saturating_sub(rb)
    }

    /// Bar-relative x of the n:th tab's left edge
    fn nth_tab_x(&self, n: usize) -> u32 {
        (0..n).map(|i| self.nth_tab_w(i)).sum()
    }

    /// Index of the tab under bar-relative `x`
    fn tab_at_x(&self, x: i32) -> Option<usize> {
        let bg = self.bar_geom();
        let m = self.frame().mcount();
        if m == 0 || x < bg.x || x as i64 >= bg.x as i64 + bg.width as i64 {
            return None;
        }

        let mut tx = bg.x as i64;
        for tab in 0..m {
            tx += self.nth_tab_w(tab) as i64;
            if (x as i64) < tx {
                return Some(tab);
            }
        }
        // Bar too narrow for its borders: no tab has any width
        None
    }

    // -------------------------------------------------------------------------
    // Membership
    // -------------------------------------------------------------------------

    /// React to a tab being added, removed or renamed
    fn managed_changed(&mut self) {
        self.recalc_bar();
    }

    fn attach(&mut self, item: ManagedItem) -> ItemId {
        let id = self.frame_mut().attach(item);
        self.managed_changed();
        id
    }

    fn detach(&mut self, id: ItemId) -> Option<ManagedItem> {
        let item = self.frame_mut().detach(id)?;
        self.managed_changed();
        Some(item)
    }

    fn rename(&mut self, id: ItemId, name: Option<String>) -> bool {
        if !self.frame_mut().rename(id, name) {
            return false;
        }
        self.managed_changed();
        true
    }

    /// Whether the frame has emptied out and asked to be destroyed then
    fn should_destroy(&self) -> bool {
        let frame = self.frame();
        frame.flags.contains(FrameFlags::DEST_EMPTY) && frame.mcount() == 0
    }

    // -------------------------------------------------------------------------
    // Geometry and appearance
    // -------------------------------------------------------------------------

    /// Attach new brushes (or drop them) and recompute everything that
    /// depends on them
    fn update_brushes(&mut self, brushes: Option<FrameBrushes>) {
        self.frame_mut().set_brushes(brushes);
        self.brushes_updated();
        self.size_changed(true, true);
    }

    /// Move/resize the frame
    fn fit(&mut self, geom: Rect) {
        let old = self.frame().geometry();
        self.frame_mut().set_geometry(geom);
        let wchg = old.width != geom.width;
        let hchg = old.height != geom.height;
        if wchg || hchg {
            self.size_changed(wchg, hchg);
        }
    }

    /// Maximize vertically within `area`, or restore the saved extent
    fn maximize_vert(&mut self, area: Rect) {
        let mut geom = self.frame().geometry();
        match self.frame().saved_vert() {
            Some((y, h)) => {
                geom.y = y;
                geom.height = h;
                self.frame_mut().flags.remove(FrameFlags::SAVED_VERT);
            }
            None => {
                self.frame_mut().save_vert(geom.y, geom.height);
                geom.y = area.y;
                geom.height = area.height;
            }
        }
        self.fit(geom);
    }

    /// Maximize horizontally within `area`, or restore the saved extent
    fn maximize_horiz(&mut self, area: Rect) {
        let mut geom = self.frame().geometry();
        match self.frame().saved_horiz() {
            Some((x, w)) => {
                geom.x = x;
                geom.width = w;
                self.frame_mut().flags.remove(FrameFlags::SAVED_HORIZ);
            }
            None => {
                self.frame_mut().save_horiz(geom.x, geom.width);
                geom.x = area.x;
                geom.width = area.width;
            }
        }
        self.fit(geom);
    }

    /// Show or hide the tab bar; returns whether it is now hidden
    fn set_tab_hidden(&mut self, sp: SetParam) -> bool {
        let flags = &mut self.frame_mut().flags;
        let old = flags.contains(FrameFlags::TAB_HIDE);
        let hidden = sp.apply(old);
        flags.set(FrameFlags::TAB_HIDE, hidden);
        if hidden != old {
            self.size_changed(true, true);
        }
        hidden
    }

    /// Shade or unshade; returns whether the frame is now shaded
    fn set_shaded(&mut self, sp: SetParam) -> bool {
        let flags = &mut self.frame_mut().flags;
        let shaded = sp.apply(flags.contains(FrameFlags::SHADED));
        flags.set(FrameFlags::SHADED, shaded);
        shaded
    }

    /// Label tabs by number or by name; returns whether numbers are shown
    fn set_show_numbers(&mut self, sp: SetParam) -> bool {
        let flags = &mut self.frame_mut().flags;
        let old = flags.contains(FrameFlags::SHOW_NUMBERS);
        let numbers = sp.apply(old);
        flags.set(FrameFlags::SHOW_NUMBERS, numbers);
        if numbers != old {
            self.recalc_bar();
        }
        numbers
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Restore flags, saved geometry and managed items from `config`.
    ///
    /// `loader` turns each saved entry into an item; entries it rejects are
    /// skipped.
    fn do_load<F>(&mut self, config: &FrameConfiguration, mut loader: F)
    where
        F: FnMut(&ManagedConfig) -> Option<ManagedItem>,
        Self: Sized,
    {
        {
            let frame = self.frame_mut();
            frame.flags.set(FrameFlags::TAB_HIDE, config.tab_hidden);
            frame.flags.set(FrameFlags::SHADED, config.shaded);
            frame.flags.set(FrameFlags::SHOW_NUMBERS, config.show_numbers);
            frame.load_saved_geom(config);
        }

        for entry in &config.managed {
            match loader(entry) {
                Some(item) => {
                    let frame = self.frame_mut();
                    let id = frame.attach(item);
                    if entry.current {
                        frame.set_current(id);
                    }
                }
                None => log::debug!("Skipping saved tab {:?}", entry.name),
            }
        }

        self.size_changed(true, true);
    }
}

/// Borders on the left and right side of the n:th of m tabs
fn tab_edge_borders(bdw: &BorderWidths, n: i64, m: i64) -> (u32, u32) {
    let left = if n == 0 { bdw.left } else { bdw.tb_ileft };
    let right = if n >= m - 1 { bdw.right } else { bdw.tb_iright };
    (left, right)
}
