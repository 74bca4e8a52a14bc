use crate::theme::Theme;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid geometry. Every coordinate in a layout is derived from these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub origin_x: f32,
    pub origin_y: f32,
    pub column_width: f32,
    pub row_height: f32,
    /// Gap between a label baseline and the line it annotates.
    pub text_offset: f32,
    pub header_x: f32,
    pub header_y: f32,
    /// Horizontal overhang of a phase bracket past its outermost lanes.
    pub phase_pad_x: f32,
    pub phase_inset_y: f32,
    /// Extra inset applied per nesting level.
    pub phase_nest_inset: f32,
    pub phase_label_offset: f32,
    pub dot_radius: f32,
    pub line_width: f32,
    pub lane_dasharray: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_x: 100.0,
            origin_y: 60.0,
            column_width: 160.0,
            row_height: 40.0,
            text_offset: 5.0,
            header_x: 10.0,
            header_y: 20.0,
            phase_pad_x: 60.0,
            phase_inset_y: 3.0,
            phase_nest_inset: 6.0,
            phase_label_offset: 12.0,
            dot_radius: 4.0,
            line_width: 1.5,
            lane_dasharray: "4 4".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Raster scale factor for PNG output.
    pub scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfig>,
    render: Option<RenderConfigFile>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<NumberOrString>,
    text_color: Option<String>,
    header_color: Option<String>,
    lane_color: Option<String>,
    action_color: Option<String>,
    phase_color: Option<String>,
    phase_opacity: Option<NumberOrString>,
    background: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    scale: Option<NumberOrString>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f32),
    String(String),
}

impl NumberOrString {
    fn as_f32(&self) -> Option<f32> {
        match self {
            NumberOrString::Number(val) => Some(*val),
            NumberOrString::String(val) => val.trim().trim_end_matches("px").parse::<f32>().ok(),
        }
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config file {}", path.display()))
}

/// Parses config text as JSON, falling back to JSON5 so comments and
/// trailing commas are accepted.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(contents).map_err(|_| json_err)?,
    };
    Ok(apply_config_file(Config::default(), parsed))
}

fn apply_config_file(mut config: Config, parsed: ConfigFile) -> Config {
    if let Some(theme_name) = parsed.theme.as_deref() {
        match Theme::by_name(theme_name) {
            Some(theme) => config.theme = theme,
            None => tracing::warn!(theme = theme_name, "unknown theme, keeping default"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size.as_ref().and_then(NumberOrString::as_f32) {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.text_color = v;
        }
        if let Some(v) = vars.header_color {
            config.theme.header_color = v;
        }
        if let Some(v) = vars.lane_color {
            config.theme.lane_color = v;
        }
        if let Some(v) = vars.action_color {
            config.theme.action_color = v;
        }
        if let Some(v) = vars.phase_color {
            config.theme.phase_color = v;
        }
        if let Some(v) = vars.phase_opacity.as_ref().and_then(NumberOrString::as_f32) {
            config.theme.phase_opacity = v.clamp(0.0, 1.0);
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }

    if let Some(layout) = parsed.layout {
        config.layout = layout;
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.scale.as_ref().and_then(NumberOrString::as_f32) {
            config.render.scale = v;
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.theme, Theme::classic());
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.render.scale, 1.0);
    }

    #[test]
    fn theme_variables_override_preset() {
        let config = parse_config(
            r##"{
                "theme": "modern",
                "themeVariables": { "actionColor": "#123456", "fontSize": "15px", "phaseOpacity": 3 }
            }"##,
        )
        .unwrap();
        assert_eq!(config.theme.font_family, Theme::modern().font_family);
        assert_eq!(config.theme.action_color, "#123456");
        assert_eq!(config.theme.font_size, 15.0);
        assert_eq!(config.theme.phase_opacity, 1.0);
    }

    #[test]
    fn partial_layout_keeps_other_defaults() {
        let config = parse_config(r#"{ "layout": { "columnWidth": 200, "rowHeight": 30 } }"#).unwrap();
        assert_eq!(config.layout.column_width, 200.0);
        assert_eq!(config.layout.row_height, 30.0);
        assert_eq!(config.layout.origin_x, LayoutConfig::default().origin_x);
    }

    #[test]
    fn json5_fallback_accepts_comments() {
        let config = parse_config(
            r#"{
                // bigger raster
                render: { scale: 2, },
            }"#,
        )
        .unwrap();
        assert_eq!(config.render.scale, 2.0);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_config("not a config").is_err());
    }

    #[test]
    fn load_config_reports_missing_file() {
        let err = load_config(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
