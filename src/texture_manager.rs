use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::surface::RasterSurface;

const TEXTURE_NAME: &str = "canvas_surface";

/// Keeps the GPU copy of the raster surface in sync.
///
/// The surface is re-uploaded only when its revision differs from the one last
/// uploaded, so idle frames cost nothing.
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `surface` has changed since the last upload.
    pub fn is_stale(&self, surface: &RasterSurface) -> bool {
        self.handle.is_none() || self.uploaded_revision != Some(surface.revision())
    }

    /// Uploads the surface if needed and returns the texture to paint.
    pub fn texture_id(&mut self, ctx: &Context, surface: &RasterSurface) -> TextureId {
        let stale = self.is_stale(surface);
        let handle = match self.handle.take() {
            Some(mut handle) => {
                if stale {
                    handle.set(surface.to_color_image(), TextureOptions::NEAREST);
                }
                handle
            }
            None => ctx.load_texture(TEXTURE_NAME, surface.to_color_image(), TextureOptions::NEAREST),
        };
        if stale {
            log::trace!("Uploaded canvas texture at revision {}", surface.revision());
        }
        let id = handle.id();
        self.handle = Some(handle);
        self.uploaded_revision = Some(surface.revision());
        id
    }
}
