#![cfg(feature = "egui")]

use eframe::egui::{self, Align2, Color32, FontId, Rect, Stroke as EguiStroke};

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::{Pixel, SurfaceSize};
use crate::surface::{Font, FontFamily, Stroke, Surface};

use super::geometry::{surface_size, to_pos2};

/// Canvas background, painted on every clear.
const BACKGROUND: Color32 = Color32::from_rgb(5, 6, 12);

/// Number of translucent rings used to fake a blurred halo.
const GLOW_RINGS: usize = 4;

pub fn rgba_to_color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.alpha_u8())
}

/// [`Surface`] adapter over an egui painter clipped to `rect`.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn pos(&self, p: Pixel) -> egui::Pos2 {
        to_pos2(self.rect.min, p)
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> SurfaceSize {
        surface_size(self.rect)
    }

    fn clear(&mut self) -> Result<()> {
        self.painter.rect_filled(self.rect, 0.0, BACKGROUND);
        Ok(())
    }

    fn line(&mut self, from: Pixel, to: Pixel, stroke: Stroke) -> Result<()> {
        self.painter.line_segment(
            [self.pos(from), self.pos(to)],
            EguiStroke::new(stroke.width as f32, rgba_to_color32(stroke.color)),
        );
        Ok(())
    }

    fn glow_circle(&mut self, center: Pixel, radius: f64, fill: Rgba, glow: f64) -> Result<()> {
        let c = self.pos(center);
        let r = radius as f32;
        if glow > 0.0 {
            let step = glow as f32 / GLOW_RINGS as f32;
            for k in (1..=GLOW_RINGS).rev() {
                let halo = fill.with_alpha(fill.a * 0.08);
                self.painter
                    .circle_filled(c, r + step * k as f32, rgba_to_color32(halo));
            }
        }
        self.painter.circle_filled(c, r, rgba_to_color32(fill));
        Ok(())
    }

    fn text(&mut self, pos: Pixel, text: &str, font: Font, color: Rgba) -> Result<()> {
        let font_id = match font.family {
            FontFamily::Monospace => FontId::monospace(font.size as f32),
            FontFamily::Proportional => FontId::proportional(font.size as f32),
        };
        self.painter.text(
            self.pos(pos),
            Align2::LEFT_BOTTOM,
            text,
            font_id,
            rgba_to_color32(color),
        );
        Ok(())
    }
}
