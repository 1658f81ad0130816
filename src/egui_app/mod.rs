//! Egui-based interactive viewer for query-bridge responses (feature = "egui").
//!
//! The viewer hosts the three regions the core renders into: a status line, a
//! scrollable output panel and a constellation canvas. Queries run on worker
//! threads; results are applied on the UI thread when they arrive.

#![cfg(feature = "egui")]

mod geometry;
mod render;
mod state;
mod text;
mod ui;

pub use geometry::{surface_size, to_pos2};
pub use render::{PainterSurface, rgba_to_color32};
pub use state::AtlasApp;
pub use text::{fragments_job, message_job};
pub use ui::update;
