use super::canvas::{Canvas, Circle, Line, MarkerId, MarkerPair, Rect, Text};

/// SVG drawing surface. Markers go to `<defs>`, everything else to the body
/// in call order.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f32,
    height: f32,
    background: String,
    font_family: String,
    defs: String,
    body: String,
    markers: usize,
}

impl SvgCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            background: "#FFFFFF".to_string(),
            font_family: "sans-serif".to_string(),
            defs: String::new(),
            body: String::new(),
            markers: 0,
        }
    }

    pub fn with_background(mut self, color: &str) -> Self {
        self.background = color.to_string();
        self
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    pub fn marker_count(&self) -> usize {
        self.markers
    }

    pub fn finish(self) -> String {
        let width = self.width;
        let height = self.height;
        let mut svg = String::with_capacity(self.defs.len() + self.body.len() + 512);
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"0 0 {width:.2} {height:.2}\" font-family=\"{}\">",
            escape_xml(&self.font_family)
        ));
        svg.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            escape_xml(&self.background)
        ));
        if !self.defs.is_empty() {
            svg.push_str("<defs>");
            svg.push_str(&self.defs);
            svg.push_str("</defs>");
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }
}

impl Canvas for SvgCanvas {
    fn define_markers(&mut self, color: &str) -> MarkerPair {
        let idx = self.markers;
        self.markers += 1;
        let fill = escape_xml(color);
        let start = MarkerId::new(format!("seq-dot-{idx}"));
        let end = MarkerId::new(format!("seq-arrow-{idx}"));
        self.defs.push_str(&format!(
            "<marker id=\"{}\" viewBox=\"0 0 10 10\" refX=\"5\" refY=\"5\" markerWidth=\"5\" markerHeight=\"5\"><circle cx=\"5\" cy=\"5\" r=\"4\" fill=\"{fill}\"/></marker>",
            start.as_str()
        ));
        self.defs.push_str(&format!(
            "<marker id=\"{}\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" markerWidth=\"6\" markerHeight=\"6\" orient=\"auto-start-reverse\"><path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{fill}\"/></marker>",
            end.as_str()
        ));
        MarkerPair { start, end }
    }

    fn text(&mut self, text: Text) {
        let transform = match text.rotate {
            Some(deg) => format!(
                " transform=\"rotate({deg:.2} {:.2} {:.2})\"",
                text.x, text.y
            ),
            None => String::new(),
        };
        self.body.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\" font-size=\"{}\" fill=\"{}\"{transform}>{}</text>",
            text.x,
            text.y,
            text.anchor.as_str(),
            text.font_size,
            escape_xml(&text.color),
            escape_xml(&text.content)
        ));
    }

    fn line(&mut self, line: Line) {
        let mut extra = String::new();
        if let Some(dash) = &line.dasharray {
            extra.push_str(&format!(" stroke-dasharray=\"{}\"", escape_xml(dash)));
        }
        if let Some(marker) = &line.marker_start {
            extra.push_str(&format!(" marker-start=\"url(#{})\"", marker.as_str()));
        }
        if let Some(marker) = &line.marker_end {
            extra.push_str(&format!(" marker-end=\"url(#{})\"", marker.as_str()));
        }
        self.body.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"{extra}/>",
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            escape_xml(&line.stroke),
            line.stroke_width
        ));
    }

    fn circle(&mut self, circle: Circle) {
        self.body.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
            circle.cx,
            circle.cy,
            circle.r,
            escape_xml(&circle.fill)
        ));
    }

    fn rect(&mut self, rect: Rect) {
        let fill = match &rect.fill {
            Some(fill) => format!(
                "fill=\"{}\" fill-opacity=\"{}\"",
                escape_xml(&fill.color),
                fill.opacity
            ),
            None => "fill=\"none\"".to_string(),
        };
        let stroke = match &rect.stroke {
            Some(stroke) => format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                escape_xml(&stroke.color),
                stroke.width
            ),
            None => String::new(),
        };
        self.body.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {fill}{stroke}/>",
            rect.x, rect.y, rect.width, rect.height
        ));
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
