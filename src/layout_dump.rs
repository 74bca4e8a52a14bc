use crate::layout::{ActionShape, Layout};
use serde::Serialize;
use anyhow::Context;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub actors: Vec<ActorDump>,
    pub phases: Vec<PhaseDump>,
    pub actions: Vec<ActionDump>,
}

#[derive(Debug, Serialize)]
pub struct ActorDump {
    pub name: String,
    pub ordinal: usize,
    pub x: f32,
}

#[derive(Debug, Serialize)]
pub struct PhaseDump {
    pub name: String,
    pub color: String,
    pub start: usize,
    pub end: usize,
    pub depth: usize,
    pub ordinals: [usize; 2],
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Serialize)]
pub struct ActionDump {
    pub index: usize,
    pub from: usize,
    pub to: usize,
    pub label: String,
    pub color: String,
    pub self_action: bool,
    pub points: Vec<[f32; 2]>,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let actors = layout
            .lanes
            .iter()
            .map(|lane| ActorDump {
                name: lane.name.clone(),
                ordinal: lane.ordinal,
                x: lane.x,
            })
            .collect();

        let phases = layout
            .phases
            .iter()
            .map(|phase| PhaseDump {
                name: phase.name.clone(),
                color: phase.color.clone(),
                start: phase.start,
                end: phase.end,
                depth: phase.depth,
                ordinals: [phase.min_ordinal, phase.max_ordinal],
                x: phase.x,
                y: phase.y,
                width: phase.width,
                height: phase.height,
            })
            .collect();

        let actions = layout
            .actions
            .iter()
            .map(|action| {
                let (self_action, points) = match action.shape {
                    ActionShape::Dot { x } => (true, vec![[x, action.y]]),
                    ActionShape::Arrow { from_x, to_x } => {
                        (false, vec![[from_x, action.y], [to_x, action.y]])
                    }
                };
                ActionDump {
                    index: action.index,
                    from: action.from,
                    to: action.to,
                    label: action.label.clone(),
                    color: action.color.clone(),
                    self_action,
                    points,
                }
            })
            .collect();

        LayoutDump {
            title: layout.header.text.clone(),
            width: layout.width,
            height: layout.height,
            actors,
            phases,
            actions,
        }
    }
}

pub fn render_layout_dump(layout: &Layout) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&LayoutDump::from_layout(layout))?)
}

pub fn write_layout_dump(path: &Path, dump: &str) -> anyhow::Result<()> {
    std::fs::write(path, dump)
        .with_context(|| format!("failed to write layout dump {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::compute_layout;
    use crate::parser::parse_sequence;
    use crate::theme::Theme;

    #[test]
    fn dump_mirrors_layout() {
        let seq = parse_sequence("@phase Setup\nA, B, go\nB, B, think\n@endphase\n").unwrap();
        let layout = compute_layout(&seq, "dump.txt", &Theme::classic(), &LayoutConfig::default());
        let dump = LayoutDump::from_layout(&layout);
        let value = serde_json::to_value(&dump).unwrap();
        assert_eq!(value["title"], "dump.txt");
        assert_eq!(value["actors"].as_array().unwrap().len(), 2);
        assert_eq!(value["phases"][0]["ordinals"], serde_json::json!([0, 1]));
        assert_eq!(value["actions"][1]["self_action"], true);
        assert_eq!(value["actions"][0]["points"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn rendered_dump_is_pretty_json() {
        let seq = parse_sequence("A, B, go\n").unwrap();
        let layout = compute_layout(&seq, "flow.txt", &Theme::classic(), &LayoutConfig::default());
        let text = render_layout_dump(&layout).unwrap();
        assert!(text.contains("\n  \"title\": \"flow.txt\""));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["width"], 580.0);
    }
}
