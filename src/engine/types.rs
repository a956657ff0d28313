use serde::{Deserialize, Serialize};

/// A rendered page: RGBA pixels sized exactly to the 4x viewport. Lives for
/// one conversion call and is consumed by the encode step.
#[derive(Debug, Clone)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineDiag {
    pub searched: Vec<String>,
    pub allow_system_fallback: bool,
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}
