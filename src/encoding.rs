//! QR encoding subsystem
//!
//! Turns request text into rendered artifact bytes in every supported
//! output format.
//!
//! Components:
//! - `format`: the supported output formats and their metadata.
//! - `encoder_trait`: the Encoder trait the orchestrator depends on.
//! - `qr_encoder`: qirust-backed implementation producing the QR symbol.
//! - `matrix`: owned copy of a symbol's module grid for the renderers.
//! - `raster`: PNG rendering.
//! - `postscript`: EPS rendering.
//! - `pdf`: PDF rendering.

pub mod encoder_trait;
pub mod format;
pub mod matrix;
pub mod pdf;
pub mod postscript;
pub mod qr_encoder;
pub mod raster;
