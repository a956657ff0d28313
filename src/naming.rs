use once_cell::sync::Lazy;
use regex::Regex;

static PDF_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.pdf$").expect("static pattern"));

/// Derive the artifact name from the input's display name: one trailing
/// `.pdf` (any case) is stripped, then `.png` is appended. Names without the
/// suffix keep their full stem.
pub fn image_name(original: &str) -> String {
    format!("{}.png", PDF_SUFFIX.replace(original, ""))
}
