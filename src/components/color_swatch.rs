use eframe::egui;

use crate::palette::PaletteColor;

const SWATCH_SIZE: f32 = 28.0;

/// Clickable square filled with a palette color.
pub struct ColorSwatch {
    pub color: PaletteColor,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: PaletteColor, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            // Grow slightly on hover
            let rect = if response.hovered() {
                rect.expand(2.0)
            } else {
                rect
            };
            ui.painter().rect_filled(rect, 6.0, self.color.color());

            let border = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(148, 163, 184))
            } else {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(226, 232, 240))
            };
            ui.painter().rect_stroke(rect, 6.0, border);
        }

        response.on_hover_text(self.color.hex())
    }
}
