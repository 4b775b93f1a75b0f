//! Offline generators for procedural texture assets: a repeating
//! pinstripe and a layered-noise skin, written out as PNG files.

pub mod config;
pub mod pattern;
pub mod sink;
pub mod utils;
