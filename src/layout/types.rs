#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// One actor column: its label and the dashed guide line below it.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneLayout {
    pub name: String,
    pub ordinal: usize,
    pub x: f32,
    pub label_y: f32,
    pub line_top: f32,
    pub line_bottom: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseLayout {
    pub name: String,
    pub color: String,
    pub start: usize,
    pub end: usize,
    pub depth: usize,
    pub min_ordinal: usize,
    pub max_ordinal: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Anchor of the label, which is rotated a quarter turn counter-clockwise.
    pub label_x: f32,
    pub label_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionShape {
    Arrow { from_x: f32, to_x: f32 },
    Dot { x: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionLayout {
    pub index: usize,
    pub from: usize,
    pub to: usize,
    pub label: String,
    pub color: String,
    pub y: f32,
    pub shape: ActionShape,
    pub label_x: f32,
    pub label_y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub header: TextLayout,
    pub lanes: Vec<LaneLayout>,
    pub phases: Vec<PhaseLayout>,
    pub actions: Vec<ActionLayout>,
}
