#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// 8-bit grayscale PNG export.
pub mod png;

/// plain-text grid format reader and writer.
pub mod txt;

pub use crate::error::IoError;
