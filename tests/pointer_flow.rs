use egui::{Color32, Event, PointerButton, Pos2, Rect};
use modern_paint::export::ExportSink;
use modern_paint::{ExportOutcome, InputEvent, InputHandler, PaintApp, PaintResult};

struct NullSink;

impl ExportSink for NullSink {
    fn deliver(&self, _file_name: &str, _bytes: &[u8]) -> PaintResult<ExportOutcome> {
        Ok(ExportOutcome::Downloaded)
    }
}

fn canvas_rect() -> Rect {
    Rect::from_min_size(Pos2::new(104.0, 140.0), egui::vec2(800.0, 600.0))
}

fn moved(x: f32, y: f32) -> Event {
    Event::PointerMoved(Pos2::new(x, y))
}

fn primary(x: f32, y: f32, pressed: bool) -> Event {
    Event::PointerButton {
        pos: Pos2::new(x, y),
        button: PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

fn run_frames(app: &mut PaintApp, handler: &mut InputHandler, frames: &[Vec<Event>]) {
    for raw in frames {
        let events = handler.process(raw, canvas_rect());
        app.handle_pointer_events(&events);
    }
}

/// Feeds each frame through a real egui pass, the way `PaintApp` reads input.
fn run_context_frames(app: &mut PaintApp, frames: Vec<Vec<Event>>) {
    let ctx = egui::Context::default();
    for events in frames {
        let raw_input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(raw_input, |ctx| app.handle_canvas_input(ctx, canvas_rect()));
    }
}

fn pixel(app: &PaintApp, x: u32, y: u32) -> Option<Color32> {
    app.canvas().surface().and_then(|surface| surface.pixel(x, y))
}

#[test]
fn test_drag_paints_in_surface_coordinates() {
    let mut app = PaintApp::with_sink(Box::new(NullSink));
    let mut handler = InputHandler::new();

    // Screen (204.0, 240.5) is surface (100.0, 100.5)
    run_frames(
        &mut app,
        &mut handler,
        &[
            vec![moved(204.0, 240.5), primary(204.0, 240.5, true)],
            vec![moved(304.0, 240.5)],
            vec![primary(304.0, 240.5, false)],
        ],
    );

    assert!(!app.canvas().is_drawing());
    assert_eq!(pixel(&app, 150, 100), Some(Color32::BLACK));
    assert_eq!(pixel(&app, 150, 240), Some(Color32::WHITE));
}

#[test]
fn test_press_and_drag_in_one_frame_paints_from_press_point() {
    let mut app = PaintApp::with_sink(Box::new(NullSink));

    run_context_frames(
        &mut app,
        vec![
            vec![moved(204.0, 240.5), primary(204.0, 240.5, true), moved(404.0, 240.5)],
            vec![primary(404.0, 240.5, false)],
        ],
    );

    assert!(!app.canvas().is_drawing());
    assert_eq!(pixel(&app, 101, 100), Some(Color32::BLACK));
    assert_eq!(pixel(&app, 200, 100), Some(Color32::BLACK));
    assert_eq!(pixel(&app, 299, 100), Some(Color32::BLACK));
}

#[test]
fn test_whole_gesture_in_one_frame_paints() {
    let mut app = PaintApp::with_sink(Box::new(NullSink));

    run_context_frames(
        &mut app,
        vec![vec![
            moved(204.0, 240.5),
            primary(204.0, 240.5, true),
            moved(304.0, 240.5),
            moved(404.0, 240.5),
            primary(404.0, 240.5, false),
        ]],
    );

    assert!(!app.canvas().is_drawing());
    assert_eq!(pixel(&app, 150, 100), Some(Color32::BLACK));
    assert_eq!(pixel(&app, 250, 100), Some(Color32::BLACK));
}

#[test]
fn test_leave_ends_stroke_without_pointer_up() {
    let mut app = PaintApp::with_sink(Box::new(NullSink));
    let mut handler = InputHandler::new();

    run_frames(
        &mut app,
        &mut handler,
        &[
            vec![moved(204.0, 240.5), primary(204.0, 240.5, true)],
            vec![moved(254.0, 240.5)],
        ],
    );
    assert!(app.canvas().is_drawing());

    // Out of the canvas with the button still held
    run_frames(&mut app, &mut handler, &[vec![moved(50.0, 50.0)]]);
    assert!(!app.canvas().is_drawing());

    let revision = app.canvas().surface().unwrap().revision();

    // Back over the canvas without a new press: no drawing
    run_frames(
        &mut app,
        &mut handler,
        &[vec![moved(404.0, 440.5)], vec![moved(504.0, 440.5)]],
    );
    assert!(!app.canvas().is_drawing());
    assert_eq!(app.canvas().surface().unwrap().revision(), revision);
    assert_eq!(pixel(&app, 350, 300), Some(Color32::WHITE));
}

#[test]
fn test_move_after_up_draws_nothing() {
    let mut app = PaintApp::with_sink(Box::new(NullSink));
    app.handle_pointer_events(&[
        InputEvent::PointerDown { position: Pos2::new(10.0, 10.0) },
        InputEvent::PointerUp { position: Pos2::new(10.0, 10.0) },
        InputEvent::PointerMove { position: Pos2::new(90.0, 90.0) },
    ]);
    assert_eq!(app.canvas().surface().unwrap().revision(), 0);
}
