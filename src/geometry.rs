//! Mapping from normalized constellation coordinates to surface pixels.

use serde::{Deserialize, Serialize};

/// Fraction of the full surface dimension covered by one normalized unit.
/// A point at `±1` lands at 35% of the width/height away from the center,
/// which keeps edge points and their labels inside the surface.
pub const SPREAD: f64 = 0.35;

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: Pixel) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// A position in surface pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Stateless projection for one surface size. Build a fresh mapper for every
/// pass; sizes are never cached across a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    size: SurfaceSize,
}

impl CoordinateMapper {
    pub fn new(size: SurfaceSize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn map_x(&self, x: f64) -> f64 {
        self.size.width / 2.0 + x * (self.size.width * SPREAD)
    }

    pub fn map_y(&self, y: f64) -> f64 {
        self.size.height / 2.0 + y * (self.size.height * SPREAD)
    }

    pub fn map(&self, x: f64, y: f64) -> Pixel {
        Pixel::new(self.map_x(x), self.map_y(y))
    }
}

/// Shorthand for a one-off projection.
pub fn map_point(x: f64, y: f64, size: SurfaceSize) -> Pixel {
    CoordinateMapper::new(size).map(x, y)
}
