//! Process-wide pdfium acquisition.
//!
//! The library is heavyweight and bound at most once: all callers converge on
//! the cell below, concurrent first-use blocks on a single initialization,
//! and a failed bind leaves the cell empty so a later call can retry.

use crate::config;
use crate::error::EngineError;
use once_cell::sync::OnceCell;
use pdfium_render::prelude::*;
use std::path::PathBuf;

static ENGINE: OnceCell<Pdfium> = OnceCell::new();

/// Environment override for the pdfium library location.
pub const LIBRARY_ENV: &str = "PDF2IMG_PDFIUM";

/// Return the memoized engine, binding the library on first use.
pub fn acquire(cfg: &config::Engine) -> Result<&'static Pdfium, EngineError> {
    ENGINE.get_or_try_init(|| bind(cfg))
}

/// Candidate library locations, in binding order.
///
/// A non-empty `engine.library_path` is used exclusively. Otherwise:
/// `PDF2IMG_PDFIUM`, the platform library name next to the executable, then
/// under `./lib`. The system library is a separate fallback controlled by
/// `engine.allow_system_fallback`.
pub fn search_paths(cfg: &config::Engine) -> Vec<PathBuf> {
    if !cfg.library_path.is_empty() {
        return vec![PathBuf::from(&cfg.library_path)];
    }

    let mut paths = Vec::new();

    if let Ok(env_val) = std::env::var(LIBRARY_ENV) {
        if !env_val.is_empty() {
            paths.push(PathBuf::from(env_val));
        }
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            paths.push(Pdfium::pdfium_platform_library_name_at_path(dir));
        }
    }

    paths.push(Pdfium::pdfium_platform_library_name_at_path("./lib"));

    paths
}

fn bind(cfg: &config::Engine) -> Result<Pdfium, EngineError> {
    for path in search_paths(cfg) {
        if path.exists() {
            if let Ok(bindings) = Pdfium::bind_to_library(&path) {
                tracing::debug!("bound pdfium at {}", path.display());
                return Ok(Pdfium::new(bindings));
            }
        }
    }

    if cfg.allow_system_fallback {
        return Pdfium::bind_to_system_library()
            .map(Pdfium::new)
            .map_err(|e| EngineError::Unavailable(e.to_string()));
    }

    Err(EngineError::Unavailable(format!(
        "no pdfium library found in {} search path(s) and system fallback is disabled",
        search_paths(cfg).len()
    )))
}
