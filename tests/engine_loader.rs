use pdf2img::config;
use pdf2img::engine::loader::{acquire, search_paths};
use std::path::PathBuf;

#[test]
fn config_override_is_exclusive() {
    let cfg = config::Engine {
        library_path: "/opt/custom/libpdfium.so".into(),
        allow_system_fallback: true,
    };
    assert_eq!(
        search_paths(&cfg),
        vec![PathBuf::from("/opt/custom/libpdfium.so")]
    );
}

#[test]
fn default_chain_ends_with_cwd_lib() {
    let cfg = config::Engine::default();
    let paths = search_paths(&cfg);
    assert!(!paths.is_empty());
    assert!(paths.last().unwrap().starts_with("./lib"));
}

#[test]
fn failed_acquire_is_not_memoized() {
    let cfg = config::Engine {
        library_path: "/nonexistent/libpdfium.so".into(),
        allow_system_fallback: false,
    };

    let first = acquire(&cfg);
    assert!(first.is_err());

    // A failed bind must leave the cell empty: the second call re-runs the
    // bind and reports the same failure instead of observing poisoned state.
    match acquire(&cfg) {
        Err(e) => assert!(e.to_string().contains("pdfium")),
        Ok(_) => panic!("acquire succeeded against a nonexistent library"),
    }
}
