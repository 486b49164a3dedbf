use crate::PaintApp;

use super::PANEL_BORDER;

/// The drawing area. Pointer input over the canvas is routed to the app here.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .inner_margin(egui::Margin::same(16.0));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let size = app.canvas().config().size_vec();
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        app.handle_canvas_input(ctx, rect);

        if let Some(texture_id) = app.canvas_texture_id(ctx) {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ui.painter().image(texture_id, rect, uv, egui::Color32::WHITE);
        }
        ui.painter()
            .rect_stroke(rect.expand(2.0), 8.0, egui::Stroke::new(2.0, PANEL_BORDER));

        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });
}
