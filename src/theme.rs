use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub text_color: String,
    /// Source file name shown above the actor row.
    pub header_color: String,
    pub lane_color: String,
    /// Used by actions that do not name a color.
    pub action_color: String,
    /// Used by phases that do not name a color.
    pub phase_color: String,
    pub phase_opacity: f32,
    pub background: String,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            font_size: 12.0,
            text_color: "#000000".to_string(),
            header_color: "#999999".to_string(),
            lane_color: "#808080".to_string(),
            action_color: "#000000".to_string(),
            phase_color: "#808080".to_string(),
            phase_opacity: 0.15,
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            text_color: "#1C2430".to_string(),
            header_color: "#7A8AA6".to_string(),
            lane_color: "#C7D2E5".to_string(),
            action_color: "#000000".to_string(),
            phase_color: "#7A8AA6".to_string(),
            phase_opacity: 0.12,
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "classic" | "default" => Some(Self::classic()),
            "modern" => Some(Self::modern()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncolored_actions_are_black_in_every_preset() {
        for name in ["classic", "modern"] {
            let theme = Theme::by_name(name).unwrap();
            assert_eq!(theme.action_color, "#000000", "{name}");
        }
    }
}
