use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

use crate::stroke::StrokeStyle;

/// Fixed-size RGBA bitmap the strokes are painted into.
///
/// The bitmap is the document: every committed segment lives only in these pixels.
pub struct RasterSurface {
    pixels: RgbaImage,
    background: Color32,
    /// Bumped on every pixel mutation so the display texture can be refreshed lazily
    revision: u64,
}

impl RasterSurface {
    /// Creates a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, to_rgba(background)),
            background,
            revision: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Color at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixels.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Color32::from_rgba_unmultiplied(r, g, b, a)
        })
    }

    pub fn fill(&mut self, color: Color32) {
        let rgba = to_rgba(color);
        for pixel in self.pixels.pixels_mut() {
            *pixel = rgba;
        }
        self.revision += 1;
    }

    /// Resets every pixel to the background color.
    pub fn clear(&mut self) {
        self.fill(self.background);
    }

    /// Paints a straight segment with round caps.
    ///
    /// Each pixel is covered by `clamp(w/2 - d + 0.5, 0, 1)` where `d` is the distance
    /// from its center to the segment, so interior pixels get the exact stroke color and
    /// only the outermost ring is blended. Returns `false` if nothing was painted.
    pub fn draw_segment(&mut self, from: Pos2, to: Pos2, style: StrokeStyle) -> bool {
        if from == to || style.width.is_nan() || style.width <= 0.0 {
            return false;
        }

        let radius = style.width / 2.0;
        let reach = radius + 1.0;
        let min_x = (from.x.min(to.x) - reach).floor().max(0.0);
        let min_y = (from.y.min(to.y) - reach).floor().max(0.0);
        let max_x = (from.x.max(to.x) + reach).ceil().min(self.width() as f32 - 1.0);
        let max_y = (from.y.max(to.y) + reach).ceil().min(self.height() as f32 - 1.0);
        if min_x > max_x || min_y > max_y {
            return false;
        }

        let src = style.color.to_srgba_unmultiplied();
        let mut touched = false;
        for y in min_y as u32..=max_y as u32 {
            for x in min_x as u32..=max_x as u32 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (radius - distance_to_segment(center, from, to) + 0.5).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let pixel = self.pixels.get_pixel_mut(x, y);
                if coverage >= 1.0 {
                    pixel.0 = src;
                } else {
                    for (dst, channel) in pixel.0.iter_mut().zip(src) {
                        *dst = (channel as f32 * coverage + *dst as f32 * (1.0 - coverage)).round() as u8;
                    }
                }
                touched = true;
            }
        }

        if touched {
            self.revision += 1;
        }
        touched
    }

    /// Snapshot for uploading into an egui texture.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    let t = if len_sq > 0.0 {
        ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (a + ab * t).distance(p)
}
