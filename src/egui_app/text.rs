#![cfg(feature = "egui")]

use eframe::egui::{self, FontId, TextFormat};
use egui::text::LayoutJob;

use crate::fragments::VisualFragment;

use super::render::rgba_to_color32;

/// Build a LayoutJob for the output panel, one row per fragment, styled by
/// category.
pub fn fragments_job(fragments: &[VisualFragment]) -> LayoutJob {
    let mut job = LayoutJob::default();
    for (i, fragment) in fragments.iter().enumerate() {
        let style = fragment.category.style();
        let size = if style.header { 15.0 } else { 13.0 };
        let font_id = if style.monospace {
            FontId::monospace(size)
        } else {
            FontId::proportional(size)
        };
        let format = TextFormat {
            font_id,
            color: rgba_to_color32(style.color),
            italics: style.italic,
            ..Default::default()
        };
        // Header rows get breathing room above them, except at the top.
        if style.header && i > 0 {
            job.append("\n", 0.0, TextFormat::default());
        }
        job.append(&fragment.text, 0.0, format);
        job.append("\n", 0.0, TextFormat::default());
    }
    job
}

/// Plain message in the default text style.
pub fn message_job(message: &str) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.append(message, 0.0, TextFormat::default());
    job
}
