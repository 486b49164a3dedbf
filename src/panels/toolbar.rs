use crate::PaintApp;
use crate::components::ToolButton;
use crate::state::{BrushSize, Tool};

use super::{PANEL_BORDER, PANEL_FILL};

/// Tool selection, brush size and the history buttons.
pub fn toolbar_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::none()
        .fill(PANEL_FILL)
        .inner_margin(egui::Margin::same(16.0))
        .stroke(egui::Stroke::new(1.0, PANEL_BORDER));

    egui::TopBottomPanel::top("toolbar_panel")
        .frame(frame)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                group(ui, |ui| {
                    for tool in Tool::ALL {
                        let selected = app.view().tool() == tool;
                        if ToolButton::new(tool, selected).show(ui).clicked() {
                            app.view_mut().set_tool(tool);
                        }
                    }
                });

                ui.add_space(16.0);

                group(ui, |ui| {
                    ui.label(egui::RichText::new("Size:").strong());
                    let mut size = app.view().brush_size().get();
                    let slider = egui::Slider::new(&mut size, BrushSize::MIN..=BrushSize::MAX)
                        .show_value(false);
                    if ui.add(slider).changed() {
                        app.view_mut().set_brush_size(BrushSize::new(size));
                    }
                    ui.label(size.to_string());
                });

                // History is not implemented; the buttons are placeholders.
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let _ = ui.button("⟳").on_hover_text("Redo");
                    let _ = ui.button("⟲").on_hover_text("Undo");
                });
            });
        });
}

fn group(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, PANEL_BORDER))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.horizontal(add_contents);
        });
}
