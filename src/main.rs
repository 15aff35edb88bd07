//! tfwm - lay out a floating frame and report its geometry.
//!
//! Builds a floating frame from a saved layout, tab names or live client
//! windows, computes its tab bar and shape with the configured theme and
//! prints the result as JSON. Optionally applies the shape to an X11 window.
//!
//! # Examples
//!
//! ```bash
//! # Two named tabs in a 640x480 frame
//! tfwm --tab emacs --tab xterm --width 640 --height 480
//!
//! # Restore a saved layout, titles read from the live clients
//! tfwm --layout ~/frame.json
//!
//! # Shape an existing window like the frame and save the result
//! tfwm --client 0x1e00003 --shape-window 0x1c00001 --save /tmp/frame.json
//! ```

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use tfwm::config::Theme;
use tfwm::render::{FontBrush, FontRenderer};
use tfwm::x11::{self, Atoms, ShapeTarget};
use tfwm::{
    FitParams, FloatFrame, FrameBrushes, FrameConfiguration, FrameOps, ManagedConfig, ManagedItem,
    Rect, SetParam, SizeHints,
};

/// Default frame size when neither the layout nor the command line gives one
const DEFAULT_GEOMETRY: Rect = Rect {
    x: 0,
    y: 0,
    width: 640,
    height: 480,
};

/// tfwm - Lay out a floating tabbed frame
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Theme file (default: ~/.config/tfwm/theme.toml)
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Saved frame layout (JSON)
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Add a tab with this name (repeatable)
    #[arg(long = "tab")]
    tabs: Vec<String>,

    /// Add a tab for this client window, decimal or hex with 0x prefix (repeatable)
    #[arg(long = "client", value_parser = parse_window_id)]
    clients: Vec<u32>,

    /// Frame width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Frame height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Apply the computed shape to this window
    #[arg(long, value_parser = parse_window_id)]
    shape_window: Option<u32>,

    /// Label tabs with their number instead of their name
    #[arg(long)]
    numbers: bool,

    /// Hide the tab bar
    #[arg(long)]
    hide_tabs: bool,

    /// Shade the frame
    #[arg(long)]
    shade: bool,

    /// Save the resulting layout to this file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Output raw JSON without pretty-printing
    #[arg(long)]
    raw: bool,
}

/// Parse a window ID given in decimal or as 0x-prefixed hex
fn parse_window_id(s: &str) -> Result<u32, String> {
    match s.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16).map_err(|_| format!("Invalid hex window ID: {}", s)),
        None => s.parse().map_err(|_| format!("Invalid window ID: {}", s)),
    }
}

#[derive(Serialize)]
struct TabReport {
    name: Option<String>,
    window: Option<u32>,
    label: Option<String>,
    x: u32,
    width: u32,
    inner_width: u32,
    current: bool,
}

#[derive(Serialize)]
struct Report {
    geometry: Rect,
    bar: Rect,
    border: Rect,
    managed: Rect,
    offsets: Rect,
    tab_min_w: u32,
    bar_max_width_q: f64,
    hints: SizeHints,
    shape: Vec<Rect>,
    tabs: Vec<TabReport>,
}

impl Report {
    fn new(frame: &FloatFrame, shape: Vec<Rect>) -> Self {
        let base = frame.frame();
        let tabs = base
            .items()
            .enumerate()
            .map(|(i, (id, item))| {
                let title = base.titles().get(i);
                TabReport {
                    name: item.name.clone(),
                    window: item.window,
                    label: title.and_then(|t| t.text.clone()),
                    x: frame.nth_tab_x(i),
                    width: frame.nth_tab_w(i),
                    inner_width: title.map_or(0, |t| t.iw),
                    current: base.current() == Some(id),
                }
            })
            .collect();

        Self {
            geometry: base.geometry(),
            bar: frame.bar_geom(),
            border: frame.border_geom(),
            managed: frame.managed_geom(),
            offsets: frame.offsets(),
            tab_min_w: frame.tab_min_w(),
            bar_max_width_q: frame.bar_max_width_q(),
            hints: frame.resize_hints(),
            shape,
            tabs,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let cli = Cli::parse();

    let theme = match &cli.theme {
        Some(path) => Theme::load_from_path(path),
        None => Theme::load(),
    };
    let font = Rc::new(FontRenderer::new(&theme.font, theme.font_size)?);

    let mut config = match &cli.layout {
        Some(path) => FrameConfiguration::load_from_path(path)
            .with_context(|| format!("Failed to load layout {:?}", path))?,
        None => FrameConfiguration::default(),
    };
    config.managed.extend(cli.tabs.iter().map(|name| ManagedConfig {
        name: Some(name.clone()),
        ..Default::default()
    }));
    config.managed.extend(cli.clients.iter().map(|&window| ManagedConfig {
        window: Some(window),
        ..Default::default()
    }));

    let needs_x = cli.shape_window.is_some() || config.managed.iter().any(|m| m.window.is_some());
    let conn = if needs_x { Some(x11::connect()?) } else { None };
    let atoms = match conn.as_deref() {
        Some(c) => Some(Atoms::new(c)?),
        None => None,
    };

    let mut border_brush = FontBrush::new(Rc::clone(&font), theme.border, theme.extras.clone());
    if let (Some(window), Some(conn)) = (cli.shape_window, &conn) {
        border_brush = border_brush.with_target(ShapeTarget::new(Rc::clone(conn), window)?);
    }
    let border_brush = Rc::new(border_brush);
    let bar_brush = Rc::new(FontBrush::new(font, theme.bar_border, theme.extras.clone()));
    let brushes = FrameBrushes::new(border_brush.clone(), bar_brush);

    let mut geom = config.geom.unwrap_or(DEFAULT_GEOMETRY);
    if let Some(width) = cli.width {
        geom.width = width;
    }
    if let Some(height) = cli.height {
        geom.height = height;
    }

    let loader = |entry: &ManagedConfig| match (entry.window, conn.as_deref(), atoms.as_ref()) {
        (Some(window), Some(conn), Some(atoms)) => {
            let mut item = x11::managed_item_for(conn, atoms, window)?;
            if item.name.is_none() {
                item.name = entry.name.clone();
            }
            Some(item)
        }
        _ => Some(ManagedItem {
            name: entry.name.clone(),
            window: entry.window,
            size_hints: entry.size_hints,
        }),
    };

    let Some(mut frame) = FloatFrame::load(&FitParams::new(geom), &config, Some(brushes), loader) else {
        log::warn!("Nothing to manage, no frame created");
        println!("null");
        return Ok(());
    };

    if cli.numbers {
        frame.set_show_numbers(SetParam::Set);
    }
    if cli.hide_tabs {
        frame.set_tab_hidden(SetParam::Set);
    }
    if cli.shade {
        frame.set_shaded(SetParam::Set);
    }

    if let Some(path) = &cli.save {
        frame.get_configuration().save_to_path(path)?;
    }

    let report = Report::new(&frame, border_brush.last_shape());
    let output = if cli.raw {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", output);

    Ok(())
}
