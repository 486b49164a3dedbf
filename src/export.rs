use std::path::PathBuf;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

#[cfg(target_arch = "wasm32")]
use crate::error::PaintError;
use crate::error::PaintResult;
use crate::surface::RasterSurface;

/// Where an export ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// Written to disk (native builds)
    Saved(PathBuf),
    /// Handed to the browser as a download
    Downloaded,
}

/// Destination for encoded image bytes.
pub trait ExportSink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> PaintResult<ExportOutcome>;
}

/// Encodes the surface as a lossless RGBA PNG.
///
/// The encoder is deterministic: identical pixels produce identical bytes.
pub fn encode_png(surface: &RasterSurface) -> PaintResult<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        surface.pixels().as_raw(),
        surface.width(),
        surface.height(),
        ExtendedColorType::Rgba8,
    )?;
    log::debug!(
        "Encoded {}x{} surface as PNG ({} bytes)",
        surface.width(),
        surface.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// The sink matching the build target.
pub fn platform_sink() -> Box<dyn ExportSink> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(FileSink::downloads())
    }

    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserDownload::default())
    }
}

/// Writes exports into a directory, overwriting any previous file of the same name.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSink {
    directory: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The user's download directory, or the working directory if there is none.
    pub fn downloads() -> Self {
        let directory = dirs::download_dir()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(directory)
    }

    pub fn directory(&self) -> &std::path::Path {
        &self.directory
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ExportSink for FileSink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> PaintResult<ExportOutcome> {
        if !self.directory.exists() {
            log::info!("Creating export directory: {}", self.directory.display());
            std::fs::create_dir_all(&self.directory)?;
        }

        let path = self.directory.join(file_name);
        std::fs::write(&path, bytes)?;
        log::info!("Saved drawing to {} ({} bytes)", path.display(), bytes.len());
        Ok(ExportOutcome::Saved(path))
    }
}

/// Triggers a browser download through a temporary `<a download>` element.
///
/// The object URL stays alive for `revoke_delay_ms` after the click; revoking it
/// in the same task cancels the download in Firefox and Safari.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy)]
pub struct BrowserDownload {
    revoke_delay_ms: i32,
}

#[cfg(target_arch = "wasm32")]
impl Default for BrowserDownload {
    fn default() -> Self {
        Self::with_revoke_delay(1000)
    }
}

#[cfg(target_arch = "wasm32")]
impl BrowserDownload {
    pub fn with_revoke_delay(revoke_delay_ms: i32) -> Self {
        Self { revoke_delay_ms }
    }

    /// Clicks the download link and schedules the revoke. Returns the object URL.
    pub fn start(&self, file_name: &str, bytes: &[u8]) -> PaintResult<String> {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let window = web_sys::window().ok_or_else(|| PaintError::Download("no window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| PaintError::Download("no document".to_owned()))?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let anchor = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| PaintError::Download("<a> is not an anchor element".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        let revoked = url.clone();
        let revoke = Closure::once_into_js(move || {
            if let Err(err) = web_sys::Url::revoke_object_url(&revoked) {
                log::warn!("Failed to revoke download URL: {err:?}");
            }
        });
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                revoke.unchecked_ref(),
                self.revoke_delay_ms,
            )
            .map_err(js_error)?;

        Ok(url)
    }
}

#[cfg(target_arch = "wasm32")]
impl ExportSink for BrowserDownload {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> PaintResult<ExportOutcome> {
        self.start(file_name, bytes)?;
        log::info!("Started download of {} ({} bytes)", file_name, bytes.len());
        Ok(ExportOutcome::Downloaded)
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> PaintError {
    PaintError::Download(format!("{err:?}"))
}
