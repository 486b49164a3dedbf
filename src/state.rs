use egui::Color32;

use crate::palette::PaletteColor;
use crate::stroke::StrokeStyle;

/// Eraser strokes are this many times wider than brush strokes.
pub const ERASER_WIDTH_FACTOR: u32 = 3;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::Brush, Tool::Eraser];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::Brush => "🖌",
            Tool::Eraser => "⌫",
        }
    }
}

/// Brush width in pixels, always within `MIN..=MAX`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct BrushSize(u32);

impl BrushSize {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 20;

    /// Clamps `size` into the slider range.
    pub fn new(size: u32) -> Self {
        Self(size.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(3)
    }
}

/// Tool, color and size selected in the toolbar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    tool: Tool,
    color: PaletteColor,
    brush_size: BrushSize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool selected: {}", tool.label());
        }
        self.tool = tool;
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn set_color(&mut self, color: PaletteColor) {
        log::debug!("Color selected: {}", color);
        self.color = color;
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    pub fn set_brush_size(&mut self, size: BrushSize) {
        self.brush_size = size;
    }

    /// Color and width the next segment is drawn with.
    ///
    /// The eraser ignores the active color and paints `background` at triple width.
    pub fn stroke_style(&self, background: Color32) -> StrokeStyle {
        match self.tool {
            Tool::Brush => StrokeStyle::new(self.color.color(), self.brush_size.get() as f32),
            Tool::Eraser => StrokeStyle::new(
                background,
                (self.brush_size.get() * ERASER_WIDTH_FACTOR) as f32,
            ),
        }
    }
}
