use crate::theme::Theme;

const PX_PER_UNIT: f32 = 72.0;
const TITLE_BAND: f32 = 48.0;
const LINE_HEIGHT: f32 = 1.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// A drawing surface with a user coordinate system: x grows right, y grows
/// up, both mapped onto SVG pixel space (y flipped). The figure size is given
/// in abstract units of 72px, the data range in user coordinates. A band at
/// the top is reserved for the title.
pub struct Canvas {
    width: f32,
    height: f32,
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
    theme: Theme,
    body: String,
    marker_colors: Vec<String>,
}

impl Canvas {
    pub fn new(fig_w: f32, fig_h: f32, x_range: (f32, f32), y_range: (f32, f32), theme: &Theme) -> Self {
        Self {
            width: fig_w * PX_PER_UNIT,
            height: fig_h * PX_PER_UNIT + TITLE_BAND,
            x_min: x_range.0,
            x_max: x_range.1,
            y_min: y_range.0,
            y_max: y_range.1,
            theme: theme.clone(),
            body: String::new(),
            marker_colors: Vec::new(),
        }
    }

    pub fn tx(&self, x: f32) -> f32 {
        (x - self.x_min) / (self.x_max - self.x_min) * self.width
    }

    pub fn ty(&self, y: f32) -> f32 {
        TITLE_BAND + (self.y_max - y) / (self.y_max - self.y_min) * (self.height - TITLE_BAND)
    }

    fn sx(&self, w: f32) -> f32 {
        w / (self.x_max - self.x_min) * self.width
    }

    fn sy(&self, h: f32) -> f32 {
        h / (self.y_max - self.y_min) * (self.height - TITLE_BAND)
    }

    pub fn title(&mut self, text: &str) {
        let x = self.width / 2.0;
        let y = TITLE_BAND * 0.62;
        self.body.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
            self.theme.font_family,
            self.theme.title_size,
            self.theme.ink,
            escape_xml(text)
        ));
    }

    /// Rounded rectangle anchored at its lower-left corner in user space.
    pub fn rounded_box(&mut self, x: f32, y: f32, w: f32, h: f32, fill: &str, stroke: &str, stroke_width: f32) {
        let px = self.tx(x);
        let py = self.ty(y + h);
        let pw = self.sx(w);
        let ph = self.sy(h);
        self.body.push_str(&format!(
            "<rect x=\"{px:.2}\" y=\"{py:.2}\" width=\"{pw:.2}\" height=\"{ph:.2}\" rx=\"8\" ry=\"8\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\"/>"
        ));
    }

    /// Rounded box with a bold label centered on it, the shared card helper
    /// used by most diagrams.
    pub fn box_with_label(&mut self, x: f32, y: f32, w: f32, h: f32, fill: &str, text: &str, size: f32) {
        let ink = self.theme.ink.clone();
        self.rounded_box(x, y, w, h, fill, &ink, 0.8);
        if !text.is_empty() {
            self.text_bold(x + w / 2.0, y + h / 2.0, text, size, &ink);
        }
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, fill: &str, stroke: &str, stroke_width: f32) {
        let px = self.tx(cx);
        let py = self.ty(cy);
        let pr = self.sx(r);
        self.body.push_str(&format!(
            "<circle cx=\"{px:.2}\" cy=\"{py:.2}\" r=\"{pr:.2}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\"/>"
        ));
    }

    pub fn text(&mut self, x: f32, y: f32, content: &str, size: f32, color: &str) {
        self.text_with(x, y, content, size, color, Anchor::Middle, false, false);
    }

    pub fn text_bold(&mut self, x: f32, y: f32, content: &str, size: f32, color: &str) {
        self.text_with(x, y, content, size, color, Anchor::Middle, true, false);
    }

    /// Multi-line text centered vertically on `y`; `\n` splits lines into
    /// tspans stepped by the line height.
    pub fn text_with(
        &mut self,
        x: f32,
        y: f32,
        content: &str,
        size: f32,
        color: &str,
        anchor: Anchor,
        bold: bool,
        italic: bool,
    ) {
        let px = self.tx(x);
        let py = self.ty(y);
        let lines: Vec<&str> = content.split('\n').collect();
        let total = lines.len() as f32 * size * LINE_HEIGHT;
        let start_y = py - total / 2.0 + size;
        let weight = if bold { " font-weight=\"bold\"" } else { "" };
        let style = if italic { " font-style=\"italic\"" } else { "" };
        self.body.push_str(&format!(
            "<text x=\"{px:.2}\" y=\"{start_y:.2}\" text-anchor=\"{}\" font-family=\"{}\" font-size=\"{size}\"{weight}{style} fill=\"{color}\">",
            anchor.as_str(),
            self.theme.font_family
        ));
        for (idx, line) in lines.iter().enumerate() {
            let dy = if idx == 0 { 0.0 } else { size * LINE_HEIGHT };
            self.body.push_str(&format!(
                "<tspan x=\"{px:.2}\" dy=\"{dy:.2}\">{}</tspan>",
                escape_xml(line)
            ));
        }
        self.body.push_str("</text>");
    }

    /// Straight connector with an arrowhead at the end. One `<marker>` per
    /// stroke color is collected and emitted in `<defs>` on finalize.
    pub fn arrow(&mut self, from: (f32, f32), to: (f32, f32), stroke: &str, stroke_width: f32) {
        let marker = self.marker_id(stroke);
        let (x1, y1) = (self.tx(from.0), self.ty(from.1));
        let (x2, y2) = (self.tx(to.0), self.ty(to.1));
        self.body.push_str(&format!(
            "<path d=\"M {x1:.2} {y1:.2} L {x2:.2} {y2:.2}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\" marker-end=\"url(#{marker})\"/>"
        ));
    }

    pub fn polyline(&mut self, points: &[(f32, f32)], stroke: &str, stroke_width: f32) {
        let d = self.points_to_path(points);
        self.body.push_str(&format!(
            "<path d=\"{d}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\"/>"
        ));
    }

    pub fn polygon(&mut self, points: &[(f32, f32)], fill: &str, fill_opacity: f32, stroke: &str, stroke_width: f32) {
        let d = self.points_to_path(points);
        self.body.push_str(&format!(
            "<path d=\"{d} Z\" fill=\"{fill}\" fill-opacity=\"{fill_opacity}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\"/>"
        ));
    }

    /// Axis-space rect for legend swatches, anchored at its top-left pixel
    /// offset from a user-space point.
    pub fn swatch(&mut self, x: f32, y: f32, size_px: f32, fill: &str) {
        let px = self.tx(x);
        let py = self.ty(y) - size_px / 2.0;
        self.body.push_str(&format!(
            "<rect x=\"{px:.2}\" y=\"{py:.2}\" width=\"{size_px:.2}\" height=\"{size_px:.2}\" fill=\"{fill}\" stroke=\"{}\" stroke-width=\"0.5\"/>",
            self.theme.ink
        ));
    }

    fn points_to_path(&self, points: &[(f32, f32)]) -> String {
        let mut d = String::new();
        for (idx, (x, y)) in points.iter().enumerate() {
            let cmd = if idx == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{}{:.2} {:.2} ", cmd, self.tx(*x), self.ty(*y)));
        }
        d.trim_end().to_string()
    }

    fn marker_id(&mut self, color: &str) -> String {
        let idx = match self.marker_colors.iter().position(|c| c == color) {
            Some(idx) => idx,
            None => {
                self.marker_colors.push(color.to_string());
                self.marker_colors.len() - 1
            }
        };
        format!("arrow-{idx}")
    }

    pub fn into_svg(self) -> String {
        let mut svg = String::new();
        let width = self.width;
        let height = self.height;
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.0} {height:.0}\">"
        ));
        svg.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            self.theme.background
        ));
        svg.push_str("<defs>");
        for (idx, color) in self.marker_colors.iter().enumerate() {
            svg.push_str(&format!(
                "<marker id=\"arrow-{idx}\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" markerWidth=\"6\" markerHeight=\"6\" orient=\"auto-start-reverse\"><path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{color}\"/></marker>"
            ));
        }
        svg.push_str("</defs>");
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(10.0, 4.0, (0.0, 10.0), (0.0, 4.0), &Theme::pastel())
    }

    #[test]
    fn y_axis_flips() {
        let c = canvas();
        assert!(c.ty(0.0) > c.ty(4.0));
        assert_eq!(c.ty(4.0), TITLE_BAND);
    }

    #[test]
    fn x_axis_spans_width() {
        let c = canvas();
        assert_eq!(c.tx(0.0), 0.0);
        assert_eq!(c.tx(10.0), 720.0);
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape_xml("a<b&'\"c>"), "a&lt;b&amp;&apos;&quot;c&gt;");
    }

    #[test]
    fn multiline_text_emits_one_tspan_per_line() {
        let mut c = canvas();
        c.text(5.0, 2.0, "첫 줄\n둘째 줄", 9.0, "#333333");
        let svg = c.into_svg();
        assert_eq!(svg.matches("<tspan").count(), 2);
        assert!(svg.contains("첫 줄"));
    }

    #[test]
    fn one_marker_per_arrow_color() {
        let mut c = canvas();
        c.arrow((0.0, 1.0), (2.0, 1.0), "#333333", 1.5);
        c.arrow((0.0, 2.0), (2.0, 2.0), "#BDBDBD", 1.5);
        c.arrow((0.0, 3.0), (2.0, 3.0), "#333333", 2.0);
        let svg = c.into_svg();
        assert_eq!(svg.matches("<marker").count(), 2);
        assert!(svg.contains("url(#arrow-0)"));
        assert!(svg.contains("url(#arrow-1)"));
    }

    #[test]
    fn box_with_label_draws_rect_and_text() {
        let mut c = canvas();
        c.box_with_label(1.0, 1.0, 3.0, 1.0, "#A8C8E8", "카드", 11.0);
        let svg = c.into_svg();
        assert!(svg.contains("<rect"));
        assert!(svg.contains("카드"));
        assert!(svg.contains("font-weight=\"bold\""));
    }
}
