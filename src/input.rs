use egui::{Context, Event, PointerButton, Pos2, Rect};

/// Pointer events relevant to drawing, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while over the canvas (button state irrelevant)
    PointerMove { position: Pos2 },
    /// Primary button released over the canvas
    PointerUp { position: Pos2 },
    /// Pointer stopped hovering the canvas
    PointerLeave,
}

/// Converts raw egui pointer events into canvas [`InputEvent`]s.
///
/// Every raw event of a frame is visited in order, so a press, a drag and a
/// release batched into one frame still yield the press point and each move
/// sample. The last position over the canvas is tracked so repeated samples
/// are dropped and a leave is reported exactly once.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_canvas_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads this frame's raw events from `ctx`.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let raw = ctx.input(|input| input.events.clone());
        self.process(&raw, canvas_rect)
    }

    /// Translates `raw` in arrival order. Non-pointer events are ignored.
    pub fn process(&mut self, raw: &[Event], canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in raw {
            match *event {
                Event::PointerMoved(pos) if canvas_rect.contains(pos) => {
                    if self.last_canvas_pos != Some(pos) {
                        events.push(InputEvent::PointerMove {
                            position: to_surface(pos, canvas_rect),
                        });
                    }
                    self.last_canvas_pos = Some(pos);
                }
                Event::PointerMoved(_) | Event::PointerGone => {
                    if self.last_canvas_pos.take().is_some() {
                        events.push(InputEvent::PointerLeave);
                    }
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } if canvas_rect.contains(pos) => {
                    let position = to_surface(pos, canvas_rect);
                    events.push(if pressed {
                        InputEvent::PointerDown { position }
                    } else {
                        InputEvent::PointerUp { position }
                    });
                    self.last_canvas_pos = Some(pos);
                }
                _ => {}
            }
        }

        events
    }
}

/// Screen position to surface pixel coordinates, relative to the canvas' on-screen rect.
pub fn to_surface(screen: Pos2, canvas_rect: Rect) -> Pos2 {
    (screen - canvas_rect.min).to_pos2()
}
