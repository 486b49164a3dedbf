use egui::{Color32, Pos2};
use modern_paint::{BrushSize, Canvas, CanvasConfig, PALETTE, Tool, ViewState};

fn fresh_canvas() -> Canvas {
    Canvas::mounted(CanvasConfig::default())
}

fn fresh_png() -> Vec<u8> {
    fresh_canvas().encode().unwrap().unwrap()
}

/// Draws a polyline through `points` as one stroke.
fn draw_stroke(canvas: &mut Canvas, view: &ViewState, points: &[Pos2]) {
    let style = view.stroke_style(canvas.config().background);
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    canvas.begin_stroke(*first);
    for point in rest {
        canvas.continue_stroke(*point, style);
    }
    canvas.end_stroke();
}

/// Rows of column `x` whose pixel equals `color`.
fn rows_with_color(canvas: &Canvas, x: u32, color: Color32) -> Vec<u32> {
    let surface = canvas.surface().unwrap();
    (0..surface.height())
        .filter(|&y| surface.pixel(x, y) == Some(color))
        .collect()
}

/// Horizontal line whose width is an exact pixel count for size `b`:
/// odd widths are centered on a pixel, even widths on a pixel boundary.
fn horizontal_line(b: u32, y: f32) -> [Pos2; 2] {
    let y = if b % 2 == 1 { y + 0.5 } else { y };
    [Pos2::new(100.0, y), Pos2::new(500.0, y)]
}

#[test]
fn test_brush_width_matches_size() {
    for b in BrushSize::MIN..=BrushSize::MAX {
        let mut canvas = fresh_canvas();
        let mut view = ViewState::new();
        view.set_brush_size(BrushSize::new(b));

        draw_stroke(&mut canvas, &view, &horizontal_line(b, 300.0));

        let painted = rows_with_color(&canvas, 300, Color32::BLACK);
        assert_eq!(painted.len() as u32, b, "brush size {b}");
        let untouched = rows_with_color(&canvas, 300, Color32::WHITE);
        assert_eq!(untouched.len() as u32, 600 - b, "brush size {b} left blended pixels");
    }
}

#[test]
fn test_eraser_width_is_triple_size() {
    for b in BrushSize::MIN..=BrushSize::MAX {
        let mut canvas = fresh_canvas();
        let mut view = ViewState::new();

        // Wide black band to erase into
        view.set_brush_size(BrushSize::new(20));
        for offset in [-30.0, -10.0, 10.0, 30.0] {
            draw_stroke(&mut canvas, &view, &horizontal_line(20, 300.0 + offset));
        }

        view.set_tool(Tool::Eraser);
        view.set_brush_size(BrushSize::new(b));
        draw_stroke(&mut canvas, &view, &horizontal_line(3 * b, 300.0));

        let erased: Vec<u32> = rows_with_color(&canvas, 300, Color32::WHITE)
            .into_iter()
            .filter(|y| (260..340).contains(y))
            .collect();
        assert_eq!(erased.len() as u32, 3 * b, "eraser size {b}");
    }
}

#[test]
fn test_clear_matches_fresh_canvas() {
    let mut canvas = fresh_canvas();
    let mut view = ViewState::new();
    view.set_color(PALETTE[7]);
    view.set_brush_size(BrushSize::new(12));
    draw_stroke(
        &mut canvas,
        &view,
        &[Pos2::new(10.0, 10.0), Pos2::new(400.0, 300.0), Pos2::new(790.0, 20.0)],
    );
    assert_ne!(canvas.encode().unwrap().unwrap(), fresh_png());

    canvas.clear();
    assert_eq!(canvas.encode().unwrap().unwrap(), fresh_png());
}

#[test]
fn test_stroke_without_moves_changes_nothing() {
    let mut canvas = fresh_canvas();
    canvas.begin_stroke(Pos2::new(200.0, 200.0));
    canvas.end_stroke();

    assert_eq!(canvas.surface().unwrap().revision(), 0);
    assert_eq!(canvas.encode().unwrap().unwrap(), fresh_png());
}

#[test]
fn test_eraser_restores_background_exactly() {
    let path = [
        Pos2::new(120.0, 80.0),
        Pos2::new(180.5, 140.25),
        Pos2::new(260.0, 150.0),
        Pos2::new(330.75, 90.5),
        Pos2::new(400.0, 200.0),
    ];

    for color in PALETTE {
        let mut canvas = fresh_canvas();
        let mut view = ViewState::new();
        view.set_color(color);
        view.set_brush_size(BrushSize::new(5));
        draw_stroke(&mut canvas, &view, &path);

        view.set_tool(Tool::Eraser);
        draw_stroke(&mut canvas, &view, &path);

        assert_eq!(
            canvas.encode().unwrap().unwrap(),
            fresh_png(),
            "eraser left traces of {color}"
        );
    }
}

#[test]
fn test_repeated_export_is_byte_identical() {
    let mut canvas = fresh_canvas();
    let view = ViewState::new();
    draw_stroke(&mut canvas, &view, &[Pos2::new(0.0, 0.0), Pos2::new(800.0, 600.0)]);

    let first = canvas.encode().unwrap().unwrap();
    let second = canvas.encode().unwrap().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_palette_color_is_painted_exactly() {
    let mut canvas = fresh_canvas();
    let mut view = ViewState::new();
    view.set_brush_size(BrushSize::new(9));

    for (index, color) in PALETTE.iter().enumerate() {
        let y = 20.5 + index as f32 * 24.0;
        view.set_color(*color);
        draw_stroke(&mut canvas, &view, &[Pos2::new(50.0, y), Pos2::new(750.0, y)]);

        let surface = canvas.surface().unwrap();
        assert_eq!(surface.pixel(400, y as u32), Some(color.color()), "color {color}");
        assert_eq!(surface.pixel(400, y as u32 + 3), Some(color.color()), "color {color}");
    }
}
