#![cfg(feature = "egui")]

use eframe::egui::{Pos2, Rect};

use crate::geometry::{Pixel, SurfaceSize};

/// Pixel size of a canvas rectangle.
pub fn surface_size(rect: Rect) -> SurfaceSize {
    SurfaceSize::new(f64::from(rect.width()), f64::from(rect.height()))
}

/// Convert a surface pixel to screen space for a canvas whose top-left corner
/// sits at `origin`.
pub fn to_pos2(origin: Pos2, p: Pixel) -> Pos2 {
    Pos2::new(origin.x + p.x as f32, origin.y + p.y as f32)
}
