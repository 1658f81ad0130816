//! Point and edge renderer for geometry responses.
//!
//! One pass draws, in layering order:
//! 1. a full clear,
//! 2. one faint edge per texture point, to the orientation point at the same
//!    index modulo the orientation count,
//! 3. every orientation point, then every texture point, each a glowing disc
//!    with its label beside it.
//!
//! Edges go first so the discs sit on top of them.

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::CoordinateMapper;
use crate::model::{Geometry, Point};
use crate::surface::{Font, Stroke, Surface};

/// Visual parameters of a constellation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationStyle {
    pub orientation_color: Rgba,
    pub texture_color: Rgba,
    pub point_radius: f64,
    /// Halo size around each disc, in pixels.
    pub glow: f64,
    pub edge: Stroke,
    pub label_font: Font,
    pub label_color: Rgba,
    /// Label baseline offset from the disc center.
    pub label_offset: (f64, f64),
}

impl ConstellationStyle {
    pub const DEFAULT: ConstellationStyle = ConstellationStyle {
        orientation_color: Rgba::GOLD,
        texture_color: Rgba::CYAN,
        point_radius: 5.0,
        glow: 12.0,
        edge: Stroke::new(1.0, Rgba::rgba(255, 255, 255, 0.08)),
        label_font: Font::monospace(12.0),
        label_color: Rgba::rgba(255, 255, 255, 0.65),
        label_offset: (10.0, 3.0),
    };
}

impl Default for ConstellationStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What a pass put on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstellationStats {
    pub orientation_points: usize,
    pub texture_points: usize,
    pub edges: usize,
}

impl ConstellationStats {
    pub fn points(&self) -> usize {
        self.orientation_points + self.texture_points
    }
}

/// Clear `surface` and draw `geometry` on it.
pub fn draw_constellation<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &Geometry,
    style: &ConstellationStyle,
) -> Result<ConstellationStats> {
    let mapper = CoordinateMapper::new(surface.size());
    surface.clear()?;

    let mut stats = ConstellationStats::default();

    // An empty orientation list has nothing to pair with.
    for (i, t) in geometry.texture.iter().enumerate() {
        let Some(o) = geometry.partner_of(i) else {
            break;
        };
        surface.line(mapper.map(o.x, o.y), mapper.map(t.x, t.y), style.edge)?;
        stats.edges += 1;
    }

    for point in &geometry.orientation {
        draw_node(surface, &mapper, point, style.orientation_color, style)?;
        stats.orientation_points += 1;
    }
    for point in &geometry.texture {
        draw_node(surface, &mapper, point, style.texture_color, style)?;
        stats.texture_points += 1;
    }

    log::debug!(
        "constellation pass at {}x{}: {} orientation, {} texture, {} edges",
        mapper.size().width,
        mapper.size().height,
        stats.orientation_points,
        stats.texture_points,
        stats.edges
    );
    Ok(stats)
}

fn draw_node<S: Surface + ?Sized>(
    surface: &mut S,
    mapper: &CoordinateMapper,
    point: &Point,
    color: Rgba,
    style: &ConstellationStyle,
) -> Result<()> {
    let center = mapper.map(point.x, point.y);
    surface.glow_circle(center, style.point_radius, color, style.glow)?;
    let (dx, dy) = style.label_offset;
    surface.text(
        center.offset(dx, dy),
        point.label(),
        style.label_font,
        style.label_color,
    )
}
