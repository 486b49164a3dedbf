use crate::PaintApp;

use super::{PANEL_BORDER, PANEL_FILL};

/// Bottom bar echoing the view state and the canvas size.
pub fn status_bar(app: &PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::none()
        .fill(PANEL_FILL)
        .inner_margin(egui::Margin::symmetric(24.0, 10.0))
        .stroke(egui::Stroke::new(1.0, PANEL_BORDER));

    egui::TopBottomPanel::bottom("status_bar")
        .frame(frame)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for text in app.status_items() {
                    ui.label(text);
                    ui.add_space(12.0);
                }
                if let Some(message) = app.status_message() {
                    ui.separator();
                    ui.label(egui::RichText::new(message).italics());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(app.canvas_size_label());
                });
            });
        });
}
