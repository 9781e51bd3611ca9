//! # Domain Models
//!
//! Pure shell types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, rendering, or routing runtime, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod navigation;
