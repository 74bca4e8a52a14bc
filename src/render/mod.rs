pub mod canvas;
mod svg;

pub use canvas::*;
pub use svg::SvgCanvas;

use crate::config::LayoutConfig;
#[cfg(feature = "png")]
use crate::config::RenderConfig;
use crate::layout::{ActionShape, Layout};
use crate::theme::Theme;
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Color -> marker pair memo, scoped to one render pass.
#[derive(Debug, Default)]
pub struct MarkerCache {
    pairs: HashMap<String, MarkerPair>,
}

impl MarkerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the markers for `color`, defining them on `canvas` the first
    /// time the color is seen.
    pub fn markers_for<C: Canvas + ?Sized>(&mut self, canvas: &mut C, color: &str) -> MarkerPair {
        if let Some(pair) = self.pairs.get(color) {
            return pair.clone();
        }
        let pair = canvas.define_markers(color);
        debug!(color, start = pair.start.as_str(), end = pair.end.as_str(), "defined markers");
        self.pairs.insert(color.to_string(), pair.clone());
        pair
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Emits the whole diagram onto `canvas`, which must already be sized to
/// `layout.width` x `layout.height`. Draw order: header, lanes, phases, actions.
pub fn render_to_canvas<C: Canvas + ?Sized>(
    layout: &Layout,
    theme: &Theme,
    config: &LayoutConfig,
    canvas: &mut C,
) {
    canvas.text(Text {
        x: layout.header.x,
        y: layout.header.y,
        content: layout.header.text.clone(),
        color: theme.header_color.clone(),
        anchor: TextAnchor::Start,
        font_size: theme.font_size,
        rotate: None,
    });

    for lane in &layout.lanes {
        canvas.text(Text {
            x: lane.x,
            y: lane.label_y,
            content: lane.name.clone(),
            color: theme.text_color.clone(),
            anchor: TextAnchor::Middle,
            font_size: theme.font_size,
            rotate: None,
        });
        canvas.line(Line {
            x1: lane.x,
            y1: lane.line_top,
            x2: lane.x,
            y2: lane.line_bottom,
            stroke: theme.lane_color.clone(),
            stroke_width: 1.0,
            dasharray: Some(config.lane_dasharray.clone()),
            marker_start: None,
            marker_end: None,
        });
    }

    for phase in &layout.phases {
        canvas.rect(Rect {
            x: phase.x,
            y: phase.y,
            width: phase.width,
            height: phase.height,
            fill: Some(Fill {
                color: phase.color.clone(),
                opacity: theme.phase_opacity,
            }),
            stroke: None,
        });
        canvas.rect(Rect {
            x: phase.x,
            y: phase.y,
            width: phase.width,
            height: phase.height,
            fill: None,
            stroke: Some(Stroke {
                color: phase.color.clone(),
                width: 1.0,
            }),
        });
        canvas.text(Text {
            x: phase.label_x,
            y: phase.label_y,
            content: phase.name.clone(),
            color: phase.color.clone(),
            anchor: TextAnchor::Middle,
            font_size: theme.font_size,
            rotate: Some(-90.0),
        });
    }

    let mut markers = MarkerCache::new();
    for action in &layout.actions {
        match action.shape {
            ActionShape::Dot { x } => canvas.circle(Circle {
                cx: x,
                cy: action.y,
                r: config.dot_radius,
                fill: action.color.clone(),
            }),
            ActionShape::Arrow { from_x, to_x } => {
                let pair = markers.markers_for(&mut *canvas, &action.color);
                canvas.line(Line {
                    x1: from_x,
                    y1: action.y,
                    x2: to_x,
                    y2: action.y,
                    stroke: action.color.clone(),
                    stroke_width: config.line_width,
                    dasharray: None,
                    marker_start: Some(pair.start),
                    marker_end: Some(pair.end),
                });
            }
        }
        canvas.text(Text {
            x: action.label_x,
            y: action.label_y,
            content: action.label.clone(),
            color: theme.text_color.clone(),
            anchor: TextAnchor::Middle,
            font_size: theme.font_size,
            rotate: None,
        });
    }
    debug!(colors = markers.len(), "rendered actions");
}

pub fn render_svg(layout: &Layout, theme: &Theme, config: &LayoutConfig) -> String {
    let mut canvas = SvgCanvas::new(layout.width, layout.height)
        .with_background(&theme.background)
        .with_font_family(&theme.font_family);
    render_to_canvas(layout, theme, config, &mut canvas);
    canvas.finish()
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt)?;
    let scale = if render_cfg.scale > 0.0 { render_cfg.scale } else { 1.0 };
    let size = tree.size().to_int_size();
    let width = (size.width() as f32 * scale).ceil() as u32;
    let height = (size.height() as f32 * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate {width}x{height} pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    pixmap.save_png(output)?;
    Ok(())
}
