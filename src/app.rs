use crate::canvas::Canvas;
use crate::config::CanvasConfig;
use crate::export::{self, ExportOutcome, ExportSink};
use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::state::ViewState;
use crate::texture_manager::CanvasTexture;

/// The whole drawing widget: toolbar state, canvas and export target.
///
/// Nothing here is persisted; the state lives as long as the app does.
pub struct PaintApp {
    view: ViewState,
    canvas: Canvas,
    texture: CanvasTexture,
    input: InputHandler,
    sink: Box<dyn ExportSink>,
    /// Outcome of the last export, shown in the status bar
    status_message: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_sink(export::platform_sink())
    }

    /// An app with a mounted canvas that exports into `sink`.
    pub fn with_sink(sink: Box<dyn ExportSink>) -> Self {
        Self {
            view: ViewState::new(),
            canvas: Canvas::mounted(CanvasConfig::default()),
            texture: CanvasTexture::new(),
            input: InputHandler::new(),
            sink,
            status_message: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
        self.status_message = None;
    }

    /// Exports the canvas and records the outcome for the status bar.
    pub fn export_drawing(&mut self) {
        let file_name = self.canvas.config().export_file_name.clone();
        self.status_message = match self.canvas.export(self.sink.as_ref()) {
            Ok(Some(ExportOutcome::Saved(path))) => Some(format!("Saved {}", path.display())),
            Ok(Some(ExportOutcome::Downloaded)) => Some(format!("Downloaded {file_name}")),
            Ok(None) => None,
            Err(err) => {
                log::error!("Export failed: {err}");
                Some(format!("Export failed: {err}"))
            }
        };
    }

    /// Applies pointer events with the stroke style of the current tool.
    pub fn handle_pointer_events(&mut self, events: &[InputEvent]) {
        let style = self.view.stroke_style(self.canvas.config().background);
        for event in events {
            self.canvas.apply(event, style);
        }
    }

    /// Reads this frame's pointer state for the canvas at `canvas_rect`.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        let events = self.input.process_input(ctx, canvas_rect);
        self.handle_pointer_events(&events);
    }

    /// Texture showing the current surface, uploading it first if it changed.
    pub fn canvas_texture_id(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        let surface = self.canvas.surface()?;
        Some(self.texture.texture_id(ctx, surface))
    }

    /// `Tool`, `Size` and `Color` labels for the status bar.
    pub fn status_items(&self) -> [String; 3] {
        [
            format!("Tool: {}", self.view.tool().label()),
            format!("Size: {}px", self.view.brush_size().get()),
            format!("Color: {}", self.view.color()),
        ]
    }

    pub fn canvas_size_label(&self) -> String {
        let config = self.canvas.config();
        format!("Canvas: {} × {}px", config.width, config.height)
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Edge panels first so the central panel gets the remaining space
        panels::header_panel(self, ctx);
        panels::toolbar_panel(self, ctx);
        panels::status_bar(self, ctx);
        panels::palette_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
