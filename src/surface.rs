//! Drawing-surface abstraction.
//!
//! Renderers draw through [`Surface`] and never through a concrete backend.
//! [`DisplayList`] records every call as a [`DrawCommand`]; the egui viewer
//! replays a recorded list into its painter each frame and tests inspect it
//! directly.

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::{Pixel, SurfaceSize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Rgba,
}

impl Stroke {
    pub const fn new(width: f64, color: Rgba) -> Self {
        Self { width, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Monospace,
    Proportional,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Size in pixels.
    pub size: f64,
    pub family: FontFamily,
}

impl Font {
    pub const fn monospace(size: f64) -> Self {
        Self {
            size,
            family: FontFamily::Monospace,
        }
    }
}

/// A 2D target that can be cleared and drawn on.
///
/// Coordinates are surface pixels with the origin at the top-left corner.
pub trait Surface {
    /// Current pixel size. Read on every pass, never cached.
    fn size(&self) -> SurfaceSize;

    /// Erase everything previously drawn.
    fn clear(&mut self) -> Result<()>;

    fn line(&mut self, from: Pixel, to: Pixel, stroke: Stroke) -> Result<()>;

    /// Filled circle with a soft halo of `glow` pixels in the fill color.
    fn glow_circle(&mut self, center: Pixel, radius: f64, fill: Rgba, glow: f64) -> Result<()>;

    /// Text with its baseline starting at `pos`.
    fn text(&mut self, pos: Pixel, text: &str, font: Font, color: Rgba) -> Result<()>;
}

// ────────────────────────────────────────────────────────────────────────────
// DisplayList
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line {
        from: Pixel,
        to: Pixel,
        stroke: Stroke,
    },
    Circle {
        center: Pixel,
        radius: f64,
        fill: Rgba,
        glow: f64,
    },
    Text {
        pos: Pixel,
        text: String,
        font: Font,
        color: Rgba,
    },
}

/// Surface that records draw calls instead of rasterizing them.
///
/// `clear` drops everything recorded so far and leaves a single
/// [`DrawCommand::Clear`] at the head, so a list always holds exactly one
/// pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    size: SurfaceSize,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Clear))
    }

    pub fn line_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circle_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    /// Text of every label, in draw order.
    pub fn labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Issue every recorded command against `target`, in order.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) -> Result<()> {
        for command in &self.commands {
            match command {
                DrawCommand::Clear => target.clear()?,
                DrawCommand::Line { from, to, stroke } => target.line(*from, *to, *stroke)?,
                DrawCommand::Circle {
                    center,
                    radius,
                    fill,
                    glow,
                } => target.glow_circle(*center, *radius, *fill, *glow)?,
                DrawCommand::Text {
                    pos,
                    text,
                    font,
                    color,
                } => target.text(*pos, text, *font, *color)?,
            }
        }
        Ok(())
    }
}

impl Surface for DisplayList {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) -> Result<()> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn line(&mut self, from: Pixel, to: Pixel, stroke: Stroke) -> Result<()> {
        self.commands.push(DrawCommand::Line { from, to, stroke });
        Ok(())
    }

    fn glow_circle(&mut self, center: Pixel, radius: f64, fill: Rgba, glow: f64) -> Result<()> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            glow,
        });
        Ok(())
    }

    fn text(&mut self, pos: Pixel, text: &str, font: Font, color: Rgba) -> Result<()> {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            font,
            color,
        });
        Ok(())
    }
}
