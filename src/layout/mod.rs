mod phase;
pub(crate) mod types;
pub use types::*;
use phase::*;

use crate::config::LayoutConfig;
use crate::ir::Sequence;
use crate::theme::Theme;
use tracing::{debug, warn};

/// Canvas size for `actors` columns and `actions` rows, one spare unit of each
/// as margin. The drawing surface is created with this size before any
/// drawing happens.
pub fn canvas_size(actors: usize, actions: usize, config: &LayoutConfig) -> (f32, f32) {
    (
        config.origin_x + (actors as f32 + 1.0) * config.column_width,
        config.origin_y + (actions as f32 + 1.0) * config.row_height,
    )
}

pub fn column_x(ordinal: usize, config: &LayoutConfig) -> f32 {
    config.origin_x + ordinal as f32 * config.column_width
}

/// Row `index` sits one row below the previous; row 0 is one row below the origin.
pub fn row_y(index: usize, config: &LayoutConfig) -> f32 {
    config.origin_y + (index as f32 + 1.0) * config.row_height
}

pub fn compute_layout(seq: &Sequence, title: &str, theme: &Theme, config: &LayoutConfig) -> Layout {
    let (width, height) = canvas_size(seq.actor_count(), seq.action_count(), config);
    debug!(
        actors = seq.actor_count(),
        actions = seq.action_count(),
        phases = seq.phases.len(),
        width,
        height,
        "computing layout"
    );

    let header = TextLayout {
        text: title.to_string(),
        x: config.header_x,
        y: config.header_y,
    };

    let lanes = seq
        .actors()
        .iter()
        .map(|actor| LaneLayout {
            name: actor.name.clone(),
            ordinal: actor.ordinal,
            x: column_x(actor.ordinal, config),
            label_y: config.origin_y,
            line_top: config.origin_y + config.text_offset,
            line_bottom: height,
        })
        .collect();

    let phases = compute_phase_layouts(seq, theme, config);

    let actions = seq
        .actions
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let y = row_y(index, config);
            let from_x = column_x(action.from, config);
            let to_x = column_x(action.to, config);
            let shape = if action.is_self() {
                ActionShape::Dot { x: from_x }
            } else {
                ActionShape::Arrow { from_x, to_x }
            };
            ActionLayout {
                index,
                from: action.from,
                to: action.to,
                label: action.label.clone(),
                color: action
                    .color
                    .clone()
                    .unwrap_or_else(|| theme.action_color.clone()),
                y,
                shape,
                label_x: (from_x + to_x) / 2.0,
                label_y: y - config.text_offset,
            }
        })
        .collect();

    Layout {
        width,
        height,
        header,
        lanes,
        phases,
        actions,
    }
}
