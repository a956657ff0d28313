use pdf2img::{
    convert::{ConversionRequest, Converter, IMAGE_MIME},
    engine::{Engine, EngineDiag, Surface},
    error::ConvertError,
};
use base64::Engine as _;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy)]
enum Mode {
    Ok,
    DecodeFail,
    SurfaceFail,
    EmptyEncode,
}

struct FakeEngine {
    mode: Mode,
    encode_called: Rc<Cell<bool>>,
}

impl FakeEngine {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            encode_called: Rc::new(Cell::new(false)),
        }
    }
}

impl Engine for FakeEngine {
    fn doctor(&self) -> anyhow::Result<EngineDiag> {
        Ok(EngineDiag {
            searched: Vec::new(),
            allow_system_fallback: false,
            ok: true,
            error: None,
        })
    }

    fn render_first_page(&self, _bytes: &[u8]) -> Result<Surface, ConvertError> {
        match self.mode {
            Mode::DecodeFail => Err(ConvertError::Decode("bad xref table".into())),
            Mode::SurfaceFail => Err(ConvertError::SurfaceUnavailable),
            _ => Ok(Surface {
                width: 2,
                height: 2,
                pixels: vec![255; 16],
            }),
        }
    }

    fn encode_png(&self, _surface: Surface) -> Result<Vec<u8>, ConvertError> {
        self.encode_called.set(true);
        match self.mode {
            Mode::EmptyEncode => Ok(Vec::new()),
            _ => Ok(vec![0x89, b'P', b'N', b'G', 1, 2, 3]),
        }
    }
}

#[test]
fn malformed_input_yields_decode_error() {
    let converter = Converter::new(FakeEngine::new(Mode::DecodeFail));
    let out = converter.convert(&ConversionRequest {
        name: "broken.pdf",
        bytes: &[],
    });

    let err = out.error.expect("error populated");
    assert!(err.contains("Failed to convert PDF"));
    assert!(err.contains("bad xref table"));
    assert_eq!(out.image_handle, "");
    assert!(out.artifact.is_none());
}

#[test]
fn surface_failure_uses_fixed_message_and_skips_encode() {
    let engine = FakeEngine::new(Mode::SurfaceFail);
    let encode_called = engine.encode_called.clone();
    let converter = Converter::new(engine);

    let out = converter.convert(&ConversionRequest {
        name: "doc.pdf",
        bytes: b"%PDF-1.7",
    });

    assert_eq!(out.error.as_deref(), Some("Canvas context could not be created"));
    assert_eq!(out.image_handle, "");
    assert!(out.artifact.is_none());
    assert!(!encode_called.get());
}

#[test]
fn empty_encode_yields_blob_error() {
    let converter = Converter::new(FakeEngine::new(Mode::EmptyEncode));
    let out = converter.convert(&ConversionRequest {
        name: "doc.pdf",
        bytes: b"%PDF-1.7",
    });

    assert_eq!(out.error.as_deref(), Some("Failed to create image blob"));
    assert_eq!(out.image_handle, "");
    assert!(out.artifact.is_none());
}

#[test]
fn success_produces_named_artifact_and_handle() {
    let converter = Converter::new(FakeEngine::new(Mode::Ok));
    let out = converter.convert(&ConversionRequest {
        name: "Quarterly Report.PDF",
        bytes: b"%PDF-1.7",
    });

    assert!(out.is_ok());
    assert!(out.error.is_none());

    let artifact = out.artifact.expect("artifact present");
    assert_eq!(artifact.name, "Quarterly Report.png");
    assert_eq!(artifact.mime, IMAGE_MIME);
    assert!(!artifact.bytes.is_empty());

    // The handle references the same byte stream as the artifact.
    let encoded = out
        .image_handle
        .strip_prefix("data:image/png;base64,")
        .expect("data url handle");
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .expect("valid base64");
    assert_eq!(decoded, artifact.bytes);
}

#[test]
fn suffixless_name_keeps_full_stem() {
    let converter = Converter::new(FakeEngine::new(Mode::Ok));
    let out = converter.convert(&ConversionRequest {
        name: "scanned-page",
        bytes: b"%PDF-1.7",
    });

    assert_eq!(out.artifact.expect("artifact present").name, "scanned-page.png");
}
