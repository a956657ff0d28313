use super::{loader, Engine, EngineDiag, Surface};
use crate::config::Config;
use crate::error::ConvertError;
use anyhow::Result;
use image::{DynamicImage, ImageFormat, RgbaImage};
use pdfium_render::prelude::*;
use std::io::Cursor;
use tracing::{debug, warn};

/// Fixed rasterization scale: quadruple the page's native size in points.
/// High enough for downstream OCR and legibility; not configurable.
pub const RENDER_SCALE: f32 = 4.0;

pub struct PdfiumEngine {
    cfg: Config,
}

impl PdfiumEngine {
    pub fn new(cfg: &Config) -> Self {
        Self { cfg: cfg.clone() }
    }
}

impl Engine for PdfiumEngine {
    fn doctor(&self) -> Result<EngineDiag> {
        let searched = loader::search_paths(&self.cfg.engine)
            .iter()
            .map(|p| p.display().to_string())
            .collect();

        let (ok, error) = match loader::acquire(&self.cfg.engine) {
            Ok(_) => (true, None),
            Err(e) => (false, Some(e.to_string())),
        };

        Ok(EngineDiag {
            searched,
            allow_system_fallback: self.cfg.engine.allow_system_fallback,
            ok,
            error,
        })
    }

    fn render_first_page(&self, bytes: &[u8]) -> Result<Surface, ConvertError> {
        let pdfium = loader::acquire(&self.cfg.engine)
            .map_err(|e| ConvertError::EngineUnavailable(e.to_string()))?;

        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(|e| ConvertError::Decode(e.to_string()))?;

        let page = document
            .pages()
            .first()
            .map_err(|e| ConvertError::Decode(e.to_string()))?;

        // Viewport: native page size in points, scaled.
        let width = (page.width().value * RENDER_SCALE).round() as i64;
        let height = (page.height().value * RENDER_SCALE).round() as i64;

        if width < 1
            || height < 1
            || width > i32::MAX as i64
            || height > i32::MAX as i64
            || width as u64 * height as u64 > self.cfg.render.max_surface_pixels
        {
            warn!("viewport {width}x{height} refused, no surface allocated");
            return Err(ConvertError::SurfaceUnavailable);
        }

        let render_config = PdfRenderConfig::new()
            .set_target_width(width as i32)
            .set_target_height(height as i32);

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| ConvertError::Unexpected(e.to_string()))?;

        let image = bitmap.as_image().into_rgba8();
        debug!(
            width = image.width(),
            height = image.height(),
            "rendered first page"
        );

        Ok(Surface {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
        })
    }

    fn encode_png(&self, surface: Surface) -> Result<Vec<u8>, ConvertError> {
        let Surface {
            width,
            height,
            pixels,
        } = surface;

        let image = RgbaImage::from_raw(width, height, pixels).ok_or(ConvertError::Encode)?;

        let mut out = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .map_err(|e| {
                warn!("png encode failed: {e}");
                ConvertError::Encode
            })?;

        Ok(out)
    }
}
