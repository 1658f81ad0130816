#![cfg(feature = "egui")]

use std::time::Duration;

use eframe::egui::{self, RichText, Sense};

use crate::color::Rgba;
use crate::dispatch::{OutputContent, Status};

use super::geometry::surface_size;
use super::render::{PainterSurface, rgba_to_color32};
use super::state::AtlasApp;
use super::text::{fragments_job, message_job};

/// Poll interval while a query is outstanding.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn status_color(status: Status) -> egui::Color32 {
    match status {
        Status::Error => egui::Color32::from_rgb(230, 90, 90),
        s if s.is_success() => rgba_to_color32(Rgba::LIMEGREEN),
        _ => egui::Color32::from_rgb(200, 200, 200),
    }
}

/// Draw the viewer into `ui`: query bar and status on top, output panel on
/// the right, constellation canvas in the remaining space.
pub fn update(app: &mut AtlasApp, ui: &mut egui::Ui) {
    app.poll();
    if app.in_flight() > 0 {
        ui.ctx().request_repaint_after(POLL_INTERVAL);
    }

    egui::TopBottomPanel::top("query_bar").show_inside(ui, |ui| {
        ui.horizontal(|ui| {
            let width = (ui.available_width() - 80.0).max(120.0);
            let edit = ui.add(
                egui::TextEdit::singleline(&mut app.query)
                    .hint_text("Ask the field…")
                    .desired_width(width),
            );
            let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Ask").clicked() || enter {
                app.submit();
            }
        });
        let status = app.status.current();
        ui.label(RichText::new(status.text()).color(status_color(status)));
    });

    egui::SidePanel::right("output")
        .resizable(true)
        .default_width(420.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match app.output.content() {
                    OutputContent::Empty => {}
                    OutputContent::Formatted { fragments, .. } => {
                        ui.label(fragments_job(fragments));
                    }
                    OutputContent::Message(message) => {
                        ui.label(message_job(message));
                    }
                });
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = response.rect;
        app.ensure_size(surface_size(rect));
        let mut surface = PainterSurface::new(&painter, rect);
        if let Err(err) = app.display.replay(&mut surface) {
            log::warn!("canvas replay failed: {err}");
        }
    });
}

impl eframe::App for AtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| update(self, ui));
    }
}
