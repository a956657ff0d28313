//! First-page PDF rasterization.
//!
//! The library turns one PDF byte buffer into one PNG artifact: a lazily
//! acquired pdfium engine renders page 1 at a fixed 4x scale, the surface is
//! encoded as PNG, and every failure mode is folded into a single result
//! shape the caller branches on. The binary in `main.rs` is a thin
//! config-driven front over [`convert::Converter`].

pub mod cli;
pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod naming;
pub mod report;
pub mod util;
