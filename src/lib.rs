#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, RenderConfig};
pub use error::{ErrorKind, ParseError};
pub use ir::Sequence;
pub use layout::{Layout, compute_layout};
pub use parser::parse_sequence;
pub use render::{Canvas, MarkerCache, SvgCanvas, render_svg, render_to_canvas};
pub use theme::Theme;

/// Theme and geometry for a one-shot render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

impl RenderOptions {
    pub fn classic() -> Self {
        Self {
            theme: Theme::classic(),
            layout: LayoutConfig::default(),
        }
    }

    pub fn modern() -> Self {
        Self {
            theme: Theme::modern(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Parse, lay out and render `input` to an SVG document. `title` is shown
/// in the diagram header.
pub fn render_with_options(
    input: &str,
    title: &str,
    options: &RenderOptions,
) -> Result<String, ParseError> {
    let seq = parse_sequence(input)?;
    let layout = compute_layout(&seq, title, &options.theme, &options.layout);
    Ok(render_svg(&layout, &options.theme, &options.layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_with_options_produces_svg() {
        let svg = render_with_options("A, B, hello\n", "inline", &RenderOptions::modern()).unwrap();
        assert!(svg.contains("hello"));
        assert!(svg.contains("inline"));
    }

    #[test]
    fn render_with_options_surfaces_parse_errors() {
        let err = render_with_options("@endphase\n", "inline", &RenderOptions::classic()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PhaseImbalance);
    }
}
