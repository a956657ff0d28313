use crate::{engine::Engine, error::ConvertError, naming};
use base64::Engine as _;
use tracing::info;

pub const IMAGE_MIME: &str = "image/png";

/// One PDF to convert: an immutable byte buffer plus the display name the
/// artifact name is derived from.
pub struct ConversionRequest<'a> {
    pub name: &'a str,
    pub bytes: &'a [u8],
}

/// The named, typed binary file object produced on success.
#[derive(Debug, Clone)]
pub struct ImageArtifact {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Outcome of one conversion. Exactly one side is populated: on success a
/// displayable handle plus the artifact, on failure a message in `error`
/// with an empty handle and no artifact.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub image_handle: String,
    pub artifact: Option<ImageArtifact>,
    pub error: Option<String>,
}

impl Conversion {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    fn failed(message: String) -> Self {
        Self {
            image_handle: String::new(),
            artifact: None,
            error: Some(message),
        }
    }
}

pub struct Converter<E: Engine> {
    engine: E,
}

impl<E: Engine> Converter<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Render the first page and encode it as a PNG artifact.
    ///
    /// Never fails outward: every stage fault is folded into the result's
    /// `error` field and callers branch on its presence only.
    pub fn convert(&self, req: &ConversionRequest<'_>) -> Conversion {
        match self.run(req) {
            Ok(conversion) => conversion,
            Err(err) => Conversion::failed(err.to_string()),
        }
    }

    fn run(&self, req: &ConversionRequest<'_>) -> Result<Conversion, ConvertError> {
        let surface = self.engine.render_first_page(req.bytes)?;
        let png = self.engine.encode_png(surface)?;
        if png.is_empty() {
            return Err(ConvertError::Encode);
        }

        let name = naming::image_name(req.name);
        let handle = format!(
            "data:{IMAGE_MIME};base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&png)
        );
        info!("converted {} -> {} ({} bytes)", req.name, name, png.len());

        Ok(Conversion {
            image_handle: handle,
            artifact: Some(ImageArtifact {
                name,
                mime: IMAGE_MIME.to_string(),
                bytes: png,
            }),
            error: None,
        })
    }
}
