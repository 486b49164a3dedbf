use egui::Color32;

/// Fixed canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 800;
/// Fixed canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 600;
/// File name used for every export.
pub const EXPORT_FILE_NAME: &str = "my-drawing.png";

/// Static settings for the drawing surface and its export.
///
/// There is no config file; `Default` carries the only supported values. The
/// struct exists so tests and the app shell can talk about the canvas without
/// repeating literals.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Color the surface is filled with on mount and on clear.
    /// The eraser paints with this color too.
    pub background: Color32,
    pub export_file_name: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background: Color32::WHITE,
            export_file_name: EXPORT_FILE_NAME.to_owned(),
        }
    }
}

impl CanvasConfig {
    /// Canvas size in egui points, displayed 1:1 with surface pixels.
    pub fn size_vec(&self) -> egui::Vec2 {
        egui::vec2(self.width as f32, self.height as f32)
    }
}
