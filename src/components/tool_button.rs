use eframe::egui;

use crate::state::Tool;

const SELECTED_FILL: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
const SELECTED_BORDER: egui::Color32 = egui::Color32::from_rgb(51, 65, 85);

/// Toolbar button for a drawing tool; the selected tool is drawn filled.
pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(88.0, 30.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                SELECTED_FILL
            } else if response.hovered() {
                egui::Color32::from_gray(226)
            } else {
                egui::Color32::TRANSPARENT
            };
            ui.painter().rect_filled(rect, 6.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::WHITE
            } else {
                egui::Color32::from_gray(30)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("{} {}", self.tool.icon(), self.tool.label()),
                egui::FontId::proportional(14.0),
                text_color,
            );

            if self.selected {
                ui.painter()
                    .rect_stroke(rect, 6.0, egui::Stroke::new(1.0, SELECTED_BORDER));
            }
        }

        response.on_hover_text(self.tool.label())
    }
}
