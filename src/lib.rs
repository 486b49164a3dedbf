#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod palette;
pub mod panels;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod texture_manager;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use error::{PaintError, PaintResult};
pub use export::{ExportOutcome, ExportSink};
pub use input::{InputEvent, InputHandler};
pub use palette::{PALETTE, PaletteColor};
pub use state::{BrushSize, Tool, ViewState};
pub use stroke::StrokeStyle;
pub use surface::RasterSurface;
