//! # Mip Atlas Library
//!
//! Turns one square texture into a single tall PNG holding every mip level,
//! stacked top to bottom.
//!
//! ## Architecture
//!
//! - `config`: run configuration and validation
//! - `processing`: codec and resampler capabilities plus the [`AtlasBuilder`]
//! - `error`: the [`AtlasError`] taxonomy
//!
//! Level layout lives in the `atlas-scale` workspace crate so it can be planned
//! without decoding anything.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mip_atlas::{build_atlas, config::AtlasConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AtlasConfig::new("terrain_8k.png", "atlases/terrain.png");
//! let summary = build_atlas(&config)?;
//! assert_eq!(summary.levels, 14);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod processing;

/// Re-export error types for convenience
pub use error::{AtlasError, AtlasResult, ErrorKind, HasRecoverySuggestion};
pub use processing::{AtlasBuilder, AtlasSummary};

use config::AtlasConfig;

/// Main entry point for atlas generation.
///
/// Validates `config`, then decodes, resizes and writes the atlas with the
/// configured filter and backend.
///
/// # Errors
///
/// - `Config` if the configuration is unusable
/// - `InvalidInput` if the source is not `source_size` square
/// - `Io` if the input cannot be read or the output cannot be written
pub fn build_atlas(config: &AtlasConfig) -> AtlasResult<AtlasSummary> {
    config.validate()?;
    log::debug!(
        "building atlas: filter={} backend={:?} source_size={}",
        config.filter,
        config.backend,
        config.source_size
    );
    config.to_builder().build(&config.input, &config.output)
}
