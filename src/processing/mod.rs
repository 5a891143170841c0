//! # Processing Module
//!
//! Decode, resample and composite stages of an atlas build. The imaging crates
//! sit behind the [`ImageCodec`] and [`Resampler`] traits so [`AtlasBuilder`]
//! only sequences the work.

pub mod atlas;
pub mod codec;
pub mod resample;

// Re-export commonly used types for convenience
pub use atlas::{AtlasBuilder, AtlasSummary};
pub use codec::{ImageCodec, PngCodec};
pub use resample::{FirResampler, ImageopsResampler, Resampler};
