use crate::PaintApp;
use crate::components::ColorSwatch;
use crate::palette::PALETTE;

use super::{PANEL_BORDER, PANEL_FILL};

/// Left column with the palette grid and the current color.
pub fn palette_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::none()
        .fill(PANEL_FILL)
        .inner_margin(egui::Margin::same(12.0))
        .stroke(egui::Stroke::new(1.0, PANEL_BORDER));

    egui::SidePanel::left("palette_panel")
        .frame(frame)
        .resizable(false)
        .exact_width(88.0)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("Colors").small().strong());
            ui.add_space(8.0);

            egui::Grid::new("palette_grid")
                .num_columns(2)
                .spacing([4.0, 4.0])
                .show(ui, |ui| {
                    for (index, color) in PALETTE.iter().enumerate() {
                        let selected = app.view().color() == *color;
                        if ColorSwatch::new(*color, selected).show(ui).clicked() {
                            app.view_mut().set_color(*color);
                        }
                        if index % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });

            ui.add_space(16.0);
            egui::Frame::none()
                .fill(egui::Color32::WHITE)
                .stroke(egui::Stroke::new(1.0, PANEL_BORDER))
                .rounding(8.0)
                .inner_margin(egui::Margin::same(8.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Current").small());
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), 32.0),
                        egui::Sense::hover(),
                    );
                    ui.painter().rect_filled(rect, 4.0, app.view().color().color());
                    ui.painter()
                        .rect_stroke(rect, 4.0, egui::Stroke::new(1.0, PANEL_BORDER));
                });
        });
}
