use seqflow::{LayoutConfig, RenderOptions, render_with_options};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SequenceRenderOptions {
    theme: Option<String>,
    title: Option<String>,
    font_family: Option<String>,
    font_size: Option<f32>,
    layout: Option<LayoutConfig>,
}

fn build_render_options(options: &SequenceRenderOptions) -> RenderOptions {
    let mut render_options = if options.theme.as_deref() == Some("modern") {
        RenderOptions::modern()
    } else {
        RenderOptions::classic()
    };

    if let Some(font_family) = &options.font_family {
        render_options.theme.font_family = font_family.clone();
    }
    if let Some(font_size) = options.font_size {
        render_options.theme.font_size = font_size;
    }
    if let Some(layout) = &options.layout {
        render_options.layout = layout.clone();
    }

    render_options
}

fn render(code: &str, options_json: Option<&str>) -> Result<String, String> {
    let options = match options_json {
        Some(raw) => serde_json::from_str::<SequenceRenderOptions>(raw).map_err(|e| e.to_string())?,
        None => SequenceRenderOptions::default(),
    };
    let title = options.title.as_deref().unwrap_or("sequence");
    render_with_options(code, title, &build_render_options(&options)).map_err(|e| e.to_string())
}

#[wasm_bindgen]
pub fn render_sequence_svg(code: &str, options_json: Option<String>) -> Result<String, JsValue> {
    render(code, options_json.as_deref()).map_err(|error| JsValue::from_str(&error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_phases_and_self_actions() {
        let code = "@order Client, Server
@phase Connect, #1565C0
Client, Server, hello
Server, Server, think
Server, Client, welcome
@endphase";

        let svg = render(code, Some(r#"{"theme":"modern","title":"demo"}"#))
            .expect("sequence with phase should render");

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Connect"));
        assert!(svg.contains("demo"));
        assert!(svg.contains("welcome"));
    }

    #[test]
    fn reports_parse_errors_as_text() {
        let err = render("A, B\n", None).unwrap_err();
        assert!(err.contains("line 1"));
    }

    #[test]
    fn layout_override_is_applied() {
        let options = SequenceRenderOptions {
            layout: Some(LayoutConfig {
                column_width: 10.0,
                ..LayoutConfig::default()
            }),
            ..Default::default()
        };
        assert_eq!(build_render_options(&options).layout.column_width, 10.0);
    }
}
