pub mod loader;
pub mod pdfium;
pub mod types;

use crate::error::ConvertError;
use anyhow::Result;

pub use pdfium::{PdfiumEngine, RENDER_SCALE};
pub use types::{EngineDiag, Surface};

/// Seam between the conversion pipeline and the rendering backend.
///
/// The production implementation is [`PdfiumEngine`]; tests substitute their
/// own to drive individual pipeline stages into failure.
pub trait Engine {
    fn doctor(&self) -> Result<EngineDiag>;
    fn render_first_page(&self, bytes: &[u8]) -> Result<Surface, ConvertError>;
    fn encode_png(&self, surface: Surface) -> Result<Vec<u8>, ConvertError>;
}
