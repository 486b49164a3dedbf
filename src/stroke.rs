use egui::{Color32, Pos2};

/// Color and width applied to a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
}

impl StrokeStyle {
    pub fn new(color: Color32, width: f32) -> Self {
        Self { color, width }
    }
}

/// Transient state of the gesture in progress.
///
/// Only the last sampled point is kept; segments are committed to the
/// surface as soon as they are drawn.
#[derive(Debug, Clone, Default)]
pub struct StrokeSession {
    last_point: Option<Pos2>,
}

impl StrokeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.last_point.is_some()
    }

    pub fn last_point(&self) -> Option<Pos2> {
        self.last_point
    }

    pub fn begin(&mut self, point: Pos2) {
        self.last_point = Some(point);
    }

    /// Records `point` and returns the segment ending there, or `None` when idle.
    pub fn advance(&mut self, point: Pos2) -> Option<(Pos2, Pos2)> {
        let from = self.last_point?;
        self.last_point = Some(point);
        Some((from, point))
    }

    pub fn end(&mut self) {
        self.last_point = None;
    }
}
