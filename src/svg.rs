//! SVG backend for [`Surface`], used for headless export of a constellation.

use std::fmt::Write as _;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Pixel, SurfaceSize};
use crate::surface::{Font, FontFamily, Stroke, Surface};

/// Background painted behind every pass so translucent edges and labels
/// stay readable.
pub const BACKGROUND: Rgba = Rgba::rgb(5, 6, 12);

#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: SurfaceSize,
    body: String,
}

impl SvgSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    /// The complete document.
    pub fn finish(&self) -> String {
        let mut doc = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.width,
            h = self.size.height
        );
        doc.push('\n');
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc
    }
}

/// `fill`/`stroke` attribute pair for a color with alpha.
fn paint(attr: &str, color: Rgba) -> String {
    let rgb = Rgba { a: 1.0, ..color }.to_css();
    if color.a >= 1.0 {
        format!(r#"{attr}="{rgb}""#)
    } else {
        format!(r#"{attr}="{rgb}" {attr}-opacity="{}""#, color.a)
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) -> Result<()> {
        self.body.clear();
        writeln!(
            self.body,
            "<defs><filter id=\"glow\" x=\"-200%\" y=\"-200%\" width=\"500%\" height=\"500%\">\
<feGaussianBlur stdDeviation=\"4\" result=\"blur\"/>\
<feMerge><feMergeNode in=\"blur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge>\
</filter></defs>"
        )
        .map_err(|e| Error::Render(e.to_string()))?;
        writeln!(
            self.body,
            r#"<rect width="100%" height="100%" {}/>"#,
            paint("fill", BACKGROUND)
        )
        .map_err(|e| Error::Render(e.to_string()))
    }

    fn line(&mut self, from: Pixel, to: Pixel, stroke: Stroke) -> Result<()> {
        writeln!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {} stroke-width="{}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            paint("stroke", stroke.color),
            stroke.width
        )
        .map_err(|e| Error::Render(e.to_string()))
    }

    fn glow_circle(&mut self, center: Pixel, radius: f64, fill: Rgba, glow: f64) -> Result<()> {
        let filter = if glow > 0.0 { r#" filter="url(#glow)""# } else { "" };
        writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" {}{}/>"#,
            center.x,
            center.y,
            radius,
            paint("fill", fill),
            filter
        )
        .map_err(|e| Error::Render(e.to_string()))
    }

    fn text(&mut self, pos: Pixel, text: &str, font: Font, color: Rgba) -> Result<()> {
        let family = match font.family {
            FontFamily::Monospace => "monospace",
            FontFamily::Proportional => "sans-serif",
        };
        writeln!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{}" {}>{}</text>"#,
            pos.x,
            pos.y,
            family,
            font.size,
            paint("fill", color),
            html_escape::encode_text(text)
        )
        .map_err(|e| Error::Render(e.to_string()))
    }
}
