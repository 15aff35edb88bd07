//! Floating frames.
//!
//! A floating frame sits freely on a workspace with its tab bar on top,
//! outside the border. Unlike tiled frames the bar does not span the whole
//! frame: it is only as wide as the tab labels need, up to a fraction of
//! the frame width set by the theme. The window shape is kept to the union
//! of the bar and the border so that the rest of the bar row is see-through.

use crate::brush::FrameBrushes;
use crate::error::FrameError;
use crate::frame::{FitParams, Frame, FrameFlags, FrameOps, ManagedItem, TabTitle};
use crate::saveload::{FrameConfiguration, ManagedConfig};
use crate::sizehint::{Size, SizeHints};
use crate::types::{Rect, SetParam};

/// Theme key for the minimum tab bar width
pub const TAB_MIN_W_KEY: &str = "floatframe_tab_min_w";
/// Theme key for the largest share of the frame width the bar may take
pub const BAR_MAX_W_Q_KEY: &str = "floatframe_bar_max_w_q";

/// Minimum bar width when the theme does not declare one
pub const DEFAULT_TAB_MIN_W: u32 = 100;
/// Bar width quota when the theme does not declare one
pub const DEFAULT_BAR_MAX_W_Q: f64 = 0.95;

/// Largest padding added on each side of a label when there is room
pub const TAB_MAX_TEXT_X_OFF: i64 = 10;

/// A frame floating on a workspace
#[derive(Debug)]
pub struct FloatFrame {
    frame: Frame,
    bar_w: u32,
    tab_min_w: u32,
    bar_max_width_q: f64,
}

impl FloatFrame {
    /// Create a frame at `fp`, drawing with `brushes` if given
    pub fn new(fp: &FitParams, brushes: Option<FrameBrushes>) -> Self {
        let mut frame = Frame::new(fp);
        frame.flags |= FrameFlags::BAR_OUTSIDE | FrameFlags::DEST_EMPTY | FrameFlags::SZH_USEMINMAX;

        let mut ff = Self {
            frame,
            bar_w: fp.geom.width,
            tab_min_w: 0,
            bar_max_width_q: 1.0,
        };
        if brushes.is_some() {
            ff.update_brushes(brushes);
        }
        ff
    }

    /// Recreate a frame from a saved configuration.
    ///
    /// Returns `None` when none of the saved tabs could be restored: an
    /// empty floating frame is never shown.
    pub fn load<F>(
        fp: &FitParams,
        config: &FrameConfiguration,
        brushes: Option<FrameBrushes>,
        loader: F,
    ) -> Option<Self>
    where
        F: FnMut(&ManagedConfig) -> Option<ManagedItem>,
    {
        let mut ff = Self::new(fp, brushes);
        ff.do_load(config, loader);

        if ff.frame.mcount() == 0 {
            log::debug!("Saved floating frame has nothing to manage, discarding");
            return None;
        }
        Some(ff)
    }

    /// Current tab bar width
    pub fn bar_w(&self) -> u32 {
        self.bar_w
    }

    /// Minimum tab bar width
    pub fn tab_min_w(&self) -> u32 {
        self.tab_min_w
    }

    /// Largest share of the frame width the bar may take
    pub fn bar_max_width_q(&self) -> f64 {
        self.bar_max_width_q
    }

    /// Difference between the frame's outer geometry and its content.
    ///
    /// `x`/`y` are the (negative) offset of the outer corner from the
    /// content corner; `width`/`height` the total decoration size.
    pub fn offsets(&self) -> Rect {
        let bdw = self.frame.border_widths();
        let bar_h = self.frame.visible_bar_h();

        let top = bdw.top.saturating_add(bar_h);
        Rect {
            x: -clamp_i32(bdw.left),
            y: -clamp_i32(top),
            width: bdw.left.saturating_add(bdw.right),
            height: top.saturating_add(bdw.bottom),
        }
    }

    /// Apply the current bar and border rectangles as the window shape
    pub fn set_shape(&self) {
        let Some(brush) = self.frame.brush() else {
            return;
        };

        let mut rects = Vec::with_capacity(2);
        if !self.frame.flags.contains(FrameFlags::TAB_HIDE) {
            rects.push(self.bar_geom());
        }
        rects.push(self.border_geom());

        log::trace!("Floating frame shape: {:?}", rects);
        brush.set_window_shape(&rects);
    }

    /// Width the bar should have for the current tabs and geometry
    fn compute_bar_w(&self) -> u32 {
        let m = self.frame.mcount() as i64;
        let frame_w = self.frame.geometry().width;
        let quota = self.bar_max_width_q * frame_w as f64;
        let tab_min_w = self.tab_min_w as i64;

        if m == 0 {
            // Empty frame: a floored bar, never wider than the quota
            let mut bar_w = tab_min_w;
            if bar_w as f64 > quota {
                bar_w = quota as i64;
            }
            return bar_w.max(0) as u32;
        }

        let Some(bar_brush) = self.frame.bar_brush() else {
            return self.bar_w;
        };
        let bdw = bar_brush.border_widths();
        let bdtotal = (m - 1) * (bdw.tb_ileft as i64 + bdw.tb_iright as i64)
            + bdw.left as i64
            + bdw.right as i64;

        let mut tmaxw = tab_min_w;
        for (_, item) in self.frame.items() {
            if let Some(name) = item.display_name() {
                tmaxw = tmaxw.max(bar_brush.text_width(name) as i64);
            }
        }

        let mut bar_w = quota as i64;
        if bar_w < tab_min_w && frame_w as i64 > tab_min_w {
            bar_w = tab_min_w;
        }

        let slack = bar_w - bdtotal - m * tmaxw;
        if slack > 0 {
            // No label truncation needed; pad labels evenly
            let pad = (slack / (m * 2)).min(TAB_MAX_TEXT_X_OFF);
            bar_w = (tmaxw + pad * 2) * m + bdtotal;
        }
        // Otherwise the labels get truncated to the tab widths

        bar_w.max(0) as u32
    }

    /// Regenerate every tab's label for the current bar width
    fn regenerate_titles(&mut self) {
        let Some(bar_brush) = self.frame.bar_brush().cloned() else {
            return;
        };
        let show_numbers = self.frame.flags.contains(FrameFlags::SHOW_NUMBERS);

        let titles: Vec<TabTitle> = self
            .frame
            .items()
            .enumerate()
            .map(|(i, (_, item))| {
                let iw = self.nth_tab_iw(i);
                let text = (iw > 0).then(|| {
                    if show_numbers {
                        bar_brush.make_label(&(i + 1).to_string(), iw)
                    } else {
                        bar_brush.make_label(item.display_name().unwrap_or(""), iw)
                    }
                });
                TabTitle { text, iw }
            })
            .collect();

        self.frame.replace_titles(titles);
    }

    /// Stickiness across workspaces.
    ///
    /// Not available for floating frames yet; always reports
    /// [`FrameError::Unsupported`].
    pub fn set_sticky(&mut self, sp: SetParam) -> Result<bool, FrameError> {
        log::warn!("set_sticky({}): temporarily unimplemented", sp);
        Err(FrameError::Unsupported("set_sticky"))
    }

    /// [`FloatFrame::set_sticky`] with a textual `set`/`unset`/`toggle`
    pub fn set_sticky_str(&mut self, how: &str) -> Result<bool, FrameError> {
        self.set_sticky(how.parse()?)
    }

    pub fn is_sticky(&self) -> Result<bool, FrameError> {
        log::warn!("is_sticky: temporarily unimplemented");
        Err(FrameError::Unsupported("is_sticky"))
    }
}

impl FrameOps for FloatFrame {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn bar_geom(&self) -> Rect {
        Rect::new(0, 0, self.bar_w, self.frame.visible_bar_h())
    }

    fn border_geom(&self) -> Rect {
        let geom = self.frame.geometry();
        let bar_h = self.frame.visible_bar_h();
        Rect::new(0, clamp_i32(bar_h), geom.width, geom.height.saturating_sub(bar_h))
    }

    fn border_inner_geom(&self) -> Rect {
        self.managed_geom()
    }

    fn managed_geom(&self) -> Rect {
        let geom = self.frame.geometry();
        let off = self.offsets();
        Rect {
            x: -off.x,
            y: -off.y,
            width: geom.width.saturating_sub(off.width),
            height: geom.height.saturating_sub(off.height),
        }
    }

    fn recalc_bar(&mut self) {
        if self.frame.bar_brush().is_none() {
            return;
        }

        let bar_w = self.compute_bar_w();
        if bar_w != self.bar_w {
            log::debug!("Floating frame bar width {} -> {}", self.bar_w, bar_w);
            self.bar_w = bar_w;
            self.set_shape();
        }

        if self.frame.mcount() == 0 {
            self.frame.replace_titles(Vec::new());
            return;
        }
        self.regenerate_titles();
    }

    fn size_changed(&mut self, wchg: bool, hchg: bool) {
        let bar_w = self.bar_w;

        if wchg {
            self.recalc_bar();
        }
        if hchg || (wchg && bar_w == self.bar_w) {
            self.set_shape();
        }
    }

    fn brushes_updated(&mut self) {
        self.tab_min_w = DEFAULT_TAB_MIN_W;
        self.bar_max_width_q = DEFAULT_BAR_MAX_W_Q;

        let Some(brush) = self.frame.brush() else {
            return;
        };

        if let Some(min_w) = brush.get_extra_int(TAB_MIN_W_KEY) {
            self.tab_min_w = if min_w <= 0 {
                log::warn!("{} = {} is not positive, using 1", TAB_MIN_W_KEY, min_w);
                1
            } else {
                min_w.min(u32::MAX as i64) as u32
            };
        }

        if let Some(q) = brush.get_extra_float(BAR_MAX_W_Q_KEY) {
            self.bar_max_width_q = if q <= 0.0 || q > 1.0 {
                log::warn!("{} = {} is outside (0, 1], using 1.0", BAR_MAX_W_Q_KEY, q);
                1.0
            } else {
                q
            };
        }
    }

    fn resize_hints(&self) -> SizeHints {
        let mut hints = self.frame.base_resize_hints(self.managed_geom());

        if self.frame.flags.contains(FrameFlags::SHADED) {
            // Only the bar is shown; the height is fixed to it
            let bar_h = self.frame.bar_h();
            let min_w = hints.min.map_or(0, |s| s.width);
            let base_w = hints.base.map_or(0, |s| s.width);
            let max_w = hints.max.map_or(u32::MAX, |s| s.width);
            hints.min = Some(Size::new(min_w, bar_h));
            hints.base = Some(Size::new(base_w, bar_h));
            hints.max = Some(Size::new(max_w, bar_h));
        }
        hints
    }

    fn get_configuration(&self) -> FrameConfiguration {
        let mut config = self.frame.base_configuration();
        config.bar_width = Some(self.bar_w);
        config.bar_height = Some(self.frame.visible_bar_h());
        config
    }
}

fn clamp_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::brush::testing::FakeBrush;
    use crate::brush::{BorderWidths, Brush, ExtraValue};

    /// left/right 2, top/bottom 3, tab separators 1 + 1
    fn borders() -> BorderWidths {
        BorderWidths {
            top: 3,
            bottom: 3,
            left: 2,
            right: 2,
            tb_ileft: 1,
            tb_iright: 1,
        }
    }

    fn brush() -> Rc<FakeBrush> {
        Rc::new(FakeBrush::new(borders()))
    }

    fn float_frame(width: u32, brush: &Rc<FakeBrush>) -> FloatFrame {
        let fp = FitParams::new(Rect::new(0, 0, width, 300));
        FloatFrame::new(&fp, Some(FrameBrushes::shared(brush.clone())))
    }

    #[test]
    fn test_initial_state_without_brush() {
        let fp = FitParams::new(Rect::new(5, 5, 320, 240));
        let mut ff = FloatFrame::new(&fp, None);
        assert_eq!(ff.bar_w(), 320);
        assert_eq!(ff.tab_min_w(), 0);
        assert_eq!(ff.bar_max_width_q(), 1.0);
        assert!(ff.frame().flags.contains(FrameFlags::DEST_EMPTY | FrameFlags::BAR_OUTSIDE));

        // No bar brush: recompute is a no-op
        ff.attach(ManagedItem::new("xterm"));
        assert_eq!(ff.bar_w(), 320);
        assert!(ff.frame().titles().is_empty());
    }

    #[test]
    fn test_theme_defaults() {
        let brush = brush();
        let ff = float_frame(400, &brush);
        assert_eq!(ff.tab_min_w(), DEFAULT_TAB_MIN_W);
        assert_eq!(ff.bar_max_width_q(), DEFAULT_BAR_MAX_W_Q);
        // font height 16 + top 3 + bottom 3
        assert_eq!(ff.frame().bar_h(), 22);
    }

    #[test]
    fn test_theme_values_clamped() {
        let brush = Rc::new(
            FakeBrush::new(borders())
                .with_extra(TAB_MIN_W_KEY, ExtraValue::Int(-5))
                .with_extra(BAR_MAX_W_Q_KEY, ExtraValue::Float(-1.0)),
        );
        let ff = float_frame(400, &brush);
        assert_eq!(ff.tab_min_w(), 1);
        assert_eq!(ff.bar_max_width_q(), 1.0);

        let brush = Rc::new(
            FakeBrush::new(borders())
                .with_extra(TAB_MIN_W_KEY, ExtraValue::Int(60))
                .with_extra(BAR_MAX_W_Q_KEY, ExtraValue::Float(1.5)),
        );
        let ff = float_frame(400, &brush);
        assert_eq!(ff.tab_min_w(), 60);
        assert_eq!(ff.bar_max_width_q(), 1.0);

        let brush = Rc::new(FakeBrush::new(borders()).with_extra(BAR_MAX_W_Q_KEY, ExtraValue::Float(0.5)));
        let ff = float_frame(400, &brush);
        assert_eq!(ff.bar_max_width_q(), 0.5);
    }

    #[test]
    fn test_zero_tabs() {
        let brush = brush();
        let ff = float_frame(400, &brush);
        assert_eq!(ff.bar_w(), 100);
        assert!(ff.frame().titles().is_empty());

        // Quota below the floor: 0.95 * 50 = 47.5
        let ff = float_frame(50, &brush);
        assert_eq!(ff.bar_w(), 47);
    }

    #[test]
    fn test_three_tabs_padded() {
        let brush = brush();
        let mut ff = float_frame(400, &brush);
        ff.attach(ManagedItem::new("abcd"));
        ff.attach(ManagedItem::new("abcdef"));
        ff.attach(ManagedItem::new("abcde"));

        // tmaxw = max(100, 60) = 100; bdtotal = 2 * 2 + 2 + 2 = 8
        // slack = 380 - 8 - 300 = 72; pad = min(72 / 6, 10) = 10
        assert_eq!(ff.bar_w(), (100 + 20) * 3 + 8);
        assert!(ff.bar_w() <= 380);

        let titles = ff.frame().titles();
        assert_eq!(titles.len(), 3);
        assert_eq!(titles[0].text.as_deref(), Some("abcd"));
        assert_eq!(titles[1].text.as_deref(), Some("abcdef"));
        assert_eq!(titles[2].text.as_deref(), Some("abcde"));
        let inner: u32 = titles.iter().map(|t| t.iw).sum();
        assert_eq!(inner + 8, ff.bar_w());
    }

    #[test]
    fn test_small_pad() {
        let brush = brush();
        let mut ff = float_frame(300, &brush);
        ff.attach(ManagedItem::new("a"));
        ff.attach(ManagedItem::new("b"));

        // quota 285; bdtotal 6; slack = 285 - 6 - 200 = 79; pad = 79 / 4 = 19 -> 10
        assert_eq!(ff.bar_w(), 246);

        let mut ff = float_frame(220, &brush);
        ff.attach(ManagedItem::new("a"));
        ff.attach(ManagedItem::new("b"));
        // quota 209; slack = 209 - 6 - 200 = 3; pad = 3 / 4 = 0
        assert_eq!(ff.bar_w(), 206);
    }

    #[test]
    fn test_truncation_keeps_quota() {
        let brush = brush();
        let mut ff = float_frame(400, &brush);
        ff.attach(ManagedItem::new("a".repeat(30)));
        ff.attach(ManagedItem::new("b".repeat(25)));

        // 300px labels do not fit in 380: the bar takes the whole quota
        assert_eq!(ff.bar_w(), 380);
        for title in ff.frame().titles() {
            let text = title.text.as_deref().unwrap();
            assert!(brush.text_width(text) <= title.iw);
        }
    }

    #[test]
    fn test_floor_override_only_with_room() {
        let brush = Rc::new(FakeBrush::new(BorderWidths::default()).with_extra(BAR_MAX_W_Q_KEY, ExtraValue::Float(0.1)));
        let mut ff = float_frame(400, &brush);
        ff.attach(ManagedItem::new("a".repeat(20)));
        // quota 40 < 100 and frame wider than 100: floor wins
        assert_eq!(ff.bar_w(), 100);

        let mut ff = float_frame(90, &brush);
        ff.attach(ManagedItem::new("a".repeat(20)));
        // frame narrower than the floor: quota 9 stands
        assert_eq!(ff.bar_w(), 9);
    }

    #[test]
    fn test_unnamed_items_take_a_slot() {
        let brush = brush();
        let mut ff = float_frame(1000, &brush);
        ff.attach(ManagedItem::unnamed());
        ff.attach(ManagedItem::new("x"));

        // slack = 950 - 6 - 200 > 0, pad capped at 10
        assert_eq!(ff.bar_w(), 120 * 2 + 6);
        let titles = ff.frame().titles();
        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0].text.as_deref(), Some(""));
    }

    #[test]
    fn test_show_numbers() {
        let brush = brush();
        let mut ff = float_frame(400, &brush);
        ff.attach(ManagedItem::new("emacs"));
        ff.attach(ManagedItem::new("xterm"));
        assert!(ff.set_show_numbers(SetParam::Set));

        let labels: Vec<_> = ff.frame().titles().iter().map(|t| t.text.clone()).collect();
        assert_eq!(labels, vec![Some("1".to_string()), Some("2".to_string())]);
    }

    #[test]
    fn test_titles_follow_membership() {
        let brush = brush();
        let mut ff = float_frame(400, &brush);
        let a = ff.attach(ManagedItem::new("a"));
        let b = ff.attach(ManagedItem::new("b"));
        assert_eq!(ff.frame().titles().len(), 2);

        assert!(ff.rename(b, Some("renamed".to_string())));
        assert_eq!(ff.frame().titles()[1].text.as_deref(), Some("renamed"));

        ff.detach(a);
        assert_eq!(ff.frame().titles().len(), 1);
        ff.detach(b);
        assert!(ff.frame().titles().is_empty());
        assert_eq!(ff.bar_w(), 100);
        assert!(ff.should_destroy());
    }

    #[test]
    fn test_shape_follows_bar() {
        let brush = brush();
        let mut ff = float_frame(400, &brush);
        ff.attach(ManagedItem::new("a"));

        let shape = brush.last_shape().unwrap();
        assert_eq!(shape, vec![Rect::new(0, 0, 124, 22), Rect::new(0, 22, 400, 278)]);

        ff.set_tab_hidden(SetParam::Set);
        let shape = brush.last_shape().unwrap();
        assert_eq!(shape, vec![Rect::new(0, 0, 400, 300)]);
    }

    #[test]
    fn test_size_changed_reshapes() {
        let brush = brush();
        let mut ff = float_frame(400, &brush);
        ff.attach(ManagedItem::new("a"));

        // Height only: bar unchanged, shape still redone
        let before = brush.shape_count();
        ff.fit(Rect::new(0, 0, 400, 500));
        assert_eq!(brush.shape_count(), before + 1);
        assert_eq!(brush.last_shape().unwrap()[1], Rect::new(0, 22, 400, 478));

        // Width change that leaves the bar alone still reshapes once
        let before = brush.shape_count();
        ff.fit(Rect::new(0, 0, 420, 500));
        assert_eq!(ff.bar_w(), 124);
        assert_eq!(brush.shape_count(), before + 1);
        assert_eq!(brush.last_shape().unwrap()[1].width, 420);

        // Width change that moves the bar reshapes from the recompute
        let before = brush.shape_count();
        ff.fit(Rect::new(0, 0, 120, 500));
        assert_eq!(ff.bar_w(), 114);
        assert_eq!(brush.shape_count(), before + 1);
    }

    #[test]
    fn test_geometry_accessors() {
        let brush = brush();
        let ff = float_frame(400, &brush);

        assert_eq!(ff.offsets(), Rect { x: -2, y: -25, width: 4, height: 28 });
        assert_eq!(ff.border_geom(), Rect::new(0, 22, 400, 278));
        assert_eq!(ff.bar_geom(), Rect::new(0, 0, 100, 22));
        assert_eq!(ff.managed_geom(), Rect::new(2, 25, 396, 272));
        assert_eq!(ff.border_inner_geom(), ff.managed_geom());
    }

    #[test]
    fn test_managed_geom_never_negative() {
        let brush = brush();
        let fp = FitParams::new(Rect::new(0, 0, 3, 10));
        let ff = FloatFrame::new(&fp, Some(FrameBrushes::shared(brush.clone())));
        let managed = ff.managed_geom();
        assert_eq!(managed.width, 0);
        assert_eq!(managed.height, 0);
        assert_eq!(ff.border_geom().height, 0);
    }

    #[test]
    fn test_tab_at_x() {
        let brush = brush();
        let mut ff = float_frame(400, &brush);
        ff.attach(ManagedItem::new("a"));
        assert_eq!(ff.tab_at_x(0), Some(0));
        assert_eq!(ff.tab_at_x(123), Some(0));
        assert_eq!(ff.tab_at_x(124), None);

        // 5px frame: the 4px bar is all border, no tab is hit
        let mut ff = float_frame(5, &brush);
        ff.attach(ManagedItem::new("a"));
        ff.attach(ManagedItem::new("b"));
        assert_eq!(ff.bar_w(), 4);
        assert_eq!(ff.nth_tab_w(0) + ff.nth_tab_w(1), 0);
        assert_eq!(ff.tab_at_x(0), None);
        assert_eq!(ff.tab_at_x(3), None);
    }

    #[test]
    fn test_extreme_borders_saturate() {
        let huge = BorderWidths {
            top: u32::MAX,
            bottom: u32::MAX,
            left: u32::MAX,
            right: u32::MAX,
            tb_ileft: u32::MAX,
            tb_iright: u32::MAX,
        };
        let brush = Rc::new(FakeBrush::new(huge));
        let mut ff = float_frame(400, &brush);
        ff.attach(ManagedItem::new("a"));
        ff.attach(ManagedItem::new("b"));

        assert_eq!(ff.frame().bar_h(), u32::MAX);
        assert_eq!(ff.bar_w(), 380);
        assert!(ff.frame().titles().iter().all(|t| t.text.is_none() && t.iw == 0));
        assert_eq!(
            ff.offsets(),
            Rect { x: -i32::MAX, y: -i32::MAX, width: u32::MAX, height: u32::MAX }
        );
        let managed = ff.managed_geom();
        assert_eq!((managed.width, managed.height), (0, 0));
        assert_eq!(ff.border_geom(), Rect::new(0, i32::MAX, 400, 0));
    }

    #[test]
    fn test_shaded_hints() {
        let brush = brush();
        let mut ff = float_frame(400, &brush);
        ff.attach(ManagedItem::new("a"));
        ff.set_shaded(SetParam::Set);

        let hints = ff.resize_hints();
        let bar_h = ff.frame().bar_h();
        assert_eq!(hints.min.unwrap().height, bar_h);
        assert_eq!(hints.base.unwrap().height, bar_h);
        assert_eq!(hints.max, Some(Size::new(u32::MAX, bar_h)));
    }

    #[test]
    fn test_unshaded_hints_include_decoration() {
        let brush = brush();
        let mut ff = float_frame(400, &brush);
        ff.attach(ManagedItem::new("a").with_size_hints(SizeHints {
            min: Some(Size::new(50, 50)),
            max: Some(Size::new(600, 600)),
            ..Default::default()
        }));

        let hints = ff.resize_hints();
        assert_eq!(hints.min, Some(Size::new(54, 78)));
        assert_eq!(hints.max, Some(Size::new(604, 628)));
        assert_eq!(hints.base, Some(Size::new(4, 28)));
    }

    #[test]
    fn test_sticky_is_unsupported() {
        let brush = brush();
        let mut ff = float_frame(400, &brush);
        assert!(matches!(ff.set_sticky(SetParam::Toggle), Err(FrameError::Unsupported(_))));
        assert!(matches!(ff.set_sticky_str("set"), Err(FrameError::Unsupported(_))));
        assert!(matches!(ff.set_sticky_str("bogus"), Err(FrameError::InvalidSetParam(_))));
        assert!(ff.is_sticky().is_err());
    }

    #[test]
    fn test_configuration_exposes_bar() {
        let brush = brush();
        let mut ff = float_frame(400, &brush);
        ff.attach(ManagedItem::new("a"));
        let config = ff.get_configuration();
        assert_eq!(config.bar_width, Some(124));
        assert_eq!(config.bar_height, Some(22));
        assert_eq!(config.managed.len(), 1);
        assert!(config.managed[0].current);
    }

    #[test]
    fn test_load_discards_empty() {
        let brush = brush();
        let fp = FitParams::new(Rect::new(0, 0, 400, 300));
        let config = FrameConfiguration::default();
        let loaded = FloatFrame::load(&fp, &config, Some(FrameBrushes::shared(brush.clone())), |_| {
            Some(ManagedItem::unnamed())
        });
        assert!(loaded.is_none());

        // Every saved tab is gone
        let config = FrameConfiguration {
            managed: vec![ManagedConfig::default(), ManagedConfig::default()],
            ..Default::default()
        };
        let loaded = FloatFrame::load(&fp, &config, Some(FrameBrushes::shared(brush)), |_| None);
        assert!(loaded.is_none());
    }
}
