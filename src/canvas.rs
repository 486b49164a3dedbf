use egui::Pos2;

use crate::config::CanvasConfig;
use crate::error::PaintResult;
use crate::export::{self, ExportOutcome, ExportSink};
use crate::input::InputEvent;
use crate::stroke::{StrokeSession, StrokeStyle};
use crate::surface::RasterSurface;

/// Owns the raster surface and turns stroke gestures into pixels.
///
/// Until [`Canvas::mount`] is called there is no surface and every operation is
/// a silent no-op.
pub struct Canvas {
    config: CanvasConfig,
    surface: Option<RasterSurface>,
    session: StrokeSession,
}

impl Canvas {
    /// A canvas with no surface yet.
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            surface: None,
            session: StrokeSession::new(),
        }
    }

    /// A canvas whose surface is already allocated and filled with the background.
    pub fn mounted(config: CanvasConfig) -> Self {
        let mut canvas = Self::new(config);
        canvas.mount();
        canvas
    }

    /// Allocates the surface. Mounting twice keeps the existing pixels.
    pub fn mount(&mut self) {
        if self.surface.is_none() {
            log::debug!("Mounting {}x{} surface", self.config.width, self.config.height);
            self.surface = Some(RasterSurface::new(
                self.config.width,
                self.config.height,
                self.config.background,
            ));
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn surface(&self) -> Option<&RasterSurface> {
        self.surface.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.session.is_drawing()
    }

    pub fn begin_stroke(&mut self, point: Pos2) {
        if self.surface.is_none() {
            log::trace!("begin_stroke skipped: surface not mounted");
            return;
        }
        self.session.begin(point);
    }

    /// Draws from the previous sample to `point`. Ignored when no stroke is active.
    pub fn continue_stroke(&mut self, point: Pos2, style: StrokeStyle) {
        let Some(surface) = self.surface.as_mut() else {
            log::trace!("continue_stroke skipped: surface not mounted");
            return;
        };
        if let Some((from, to)) = self.session.advance(point) {
            surface.draw_segment(from, to, style);
        }
    }

    pub fn end_stroke(&mut self) {
        self.session.end();
    }

    /// Fills the whole surface with the background. Not undoable.
    pub fn clear(&mut self) {
        match self.surface.as_mut() {
            Some(surface) => {
                log::info!("Clearing canvas");
                surface.clear();
            }
            None => log::debug!("clear skipped: surface not mounted"),
        }
    }

    /// Current pixels as PNG bytes, or `None` when unmounted.
    pub fn encode(&self) -> PaintResult<Option<Vec<u8>>> {
        self.surface.as_ref().map(export::encode_png).transpose()
    }

    /// Encodes the surface and hands it to `sink` under the configured file name.
    ///
    /// Returns `Ok(None)` without touching the sink when unmounted.
    pub fn export(&self, sink: &dyn ExportSink) -> PaintResult<Option<ExportOutcome>> {
        let Some(bytes) = self.encode()? else {
            log::debug!("export skipped: surface not mounted");
            return Ok(None);
        };
        sink.deliver(&self.config.export_file_name, &bytes).map(Some)
    }

    /// Runs the stroke operation matching a pointer event.
    pub fn apply(&mut self, event: &InputEvent, style: StrokeStyle) {
        match *event {
            InputEvent::PointerDown { position } => self.begin_stroke(position),
            InputEvent::PointerMove { position } => self.continue_stroke(position, style),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => self.end_stroke(),
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}
