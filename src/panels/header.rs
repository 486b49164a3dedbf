use crate::PaintApp;

const HEADER_FILL: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);

/// Title bar with the download and clear actions.
pub fn header_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::none()
        .fill(HEADER_FILL)
        .inner_margin(egui::Margin::symmetric(24.0, 14.0));

    egui::TopBottomPanel::top("header_panel")
        .frame(frame)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("🎨")
                        .size(22.0)
                        .color(egui::Color32::from_rgb(96, 165, 250)),
                );
                ui.label(
                    egui::RichText::new("Modern Paint")
                        .size(20.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let clear = egui::Button::new(egui::RichText::new("Clear").color(egui::Color32::WHITE))
                        .frame(false);
                    if ui.add(clear).clicked() {
                        app.clear_canvas();
                    }

                    let download = egui::Button::new(egui::RichText::new("⬇").color(egui::Color32::WHITE))
                        .frame(false);
                    if ui.add(download).on_hover_text("Download").clicked() {
                        app.export_drawing();
                    }
                });
            });
        });
}
