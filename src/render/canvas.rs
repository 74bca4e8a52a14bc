//! Drawing-surface abstraction used by the renderer.
//!
//! The renderer only issues the primitives below; how they are encoded
//! (SVG text, a test recorder, ...) is up to the implementation.

/// Opaque handle to a marker defined on a canvas.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerId(String);

impl MarkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Start-dot and end-arrowhead decorations sharing one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    pub start: MarkerId,
    pub end: MarkerId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f32,
    pub y: f32,
    pub content: String,
    pub color: String,
    pub anchor: TextAnchor,
    pub font_size: f32,
    /// Rotation in degrees around `(x, y)`.
    pub rotate: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke: String,
    pub stroke_width: f32,
    pub dasharray: Option<String>,
    pub marker_start: Option<MarkerId>,
    pub marker_end: Option<MarkerId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub color: String,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

pub trait Canvas {
    /// Defines the dot/arrowhead marker pair for `color`. Every call defines
    /// new markers; deduplication is the caller's job.
    fn define_markers(&mut self, color: &str) -> MarkerPair;
    fn text(&mut self, text: Text);
    fn line(&mut self, line: Line);
    fn circle(&mut self, circle: Circle);
    fn rect(&mut self, rect: Rect);
}
