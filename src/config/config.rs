//! # Configuration Module
//!
//! This module provides the configuration structure and validation for one
//! atlas build. It is the common interface between the `mip-atlas` CLI and
//! library callers.
//!
//! ## Configuration Parameters
//!
//! | Parameter | Type | Range | Description |
//! |-----------|------|-------|-------------|
//! | `input` | `PathBuf` | Existing image file | Source texture |
//! | `output` | `PathBuf` | Any writable file path | Destination PNG |
//! | `source_size` | `u32` | Power of two | Required source side length (8192 on the CLI) |
//! | `filter` | `ResampleFilter` | nearest … lanczos3 | Downsampling filter |
//! | `backend` | `ResampleBackend` | simd / image | Which resampler performs the resize |
//!
//! ## Examples
//!
//! ```rust
//! use mip_atlas::config::AtlasConfig;
//!
//! let config = AtlasConfig::new("textures/terrain_8k.png", "out/terrain_atlas.png");
//! assert_eq!(config.source_size, 8192);
//! assert!(config.validate().is_ok());
//!
//! let broken = AtlasConfig::new("same.png", "same.png");
//! assert!(broken.validate().is_err());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use atlas_scale::cpu::ResampleFilter;
use atlas_scale::mip::ATLAS_SOURCE_SIZE;

use crate::error::{AtlasError, AtlasResult};
use crate::processing::{AtlasBuilder, FirResampler, ImageopsResampler, PngCodec, Resampler};

/// Which resampler implementation performs the per-level resize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResampleBackend {
    /// `fast_image_resize` (SIMD)
    #[default]
    Simd,
    /// `image::imageops::resize`
    Image,
}

impl FromStr for ResampleBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simd" | "fir" => Ok(ResampleBackend::Simd),
            "image" | "imageops" => Ok(ResampleBackend::Image),
            _ => Err(format!("Invalid backend: {}. Use: simd, image", s)),
        }
    }
}

/// Configuration structure for one atlas build.
///
/// # Examples
///
/// ```rust
/// use mip_atlas::config::{AtlasConfig, ResampleBackend};
/// use atlas_scale::cpu::ResampleFilter;
///
/// let config = AtlasConfig::new("in.png", "out.png")
///     .with_filter(ResampleFilter::CatmullRom)
///     .with_backend(ResampleBackend::Image);
/// assert_eq!(config.filter, ResampleFilter::CatmullRom);
/// ```
#[derive(Debug, Clone)]
pub struct AtlasConfig {
    /// Source texture path.
    ///
    /// Any format the `image` crate can sniff is accepted; only the pixel
    /// dimensions are constrained.
    pub input: PathBuf,

    /// Destination path. Always written as PNG regardless of extension.
    /// Missing parent directories are created.
    pub output: PathBuf,

    /// Side length the source must have.
    pub source_size: u32,

    /// Downsampling filter applied to every level.
    pub filter: ResampleFilter,

    /// Resampler implementation.
    pub backend: ResampleBackend,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("texture_8k.png"),
            output: PathBuf::from("texture_atlas.png"),
            source_size: ATLAS_SOURCE_SIZE,
            filter: ResampleFilter::default(),
            backend: ResampleBackend::default(),
        }
    }
}

impl AtlasConfig {
    /// Creates a configuration for `input` → `output` with default settings.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn with_source_size(mut self, source_size: u32) -> Self {
        self.source_size = source_size;
        self
    }

    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_backend(mut self, backend: ResampleBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Validates the configuration parameters.
    ///
    /// Paths are only resolved to tell whether `input` and `output` name the
    /// same file; a missing input file is reported as an I/O error by the
    /// build itself.
    pub fn validate(&self) -> AtlasResult<()> {
        if self.input.as_os_str().is_empty() {
            return Err(AtlasError::config("input", "", "input path must not be empty"));
        }
        if self.output.as_os_str().is_empty() || self.output.file_name().is_none() {
            return Err(AtlasError::config(
                "output",
                self.output.display().to_string(),
                "output path must name a file",
            ));
        }
        if resolve(&self.input) == resolve(&self.output) {
            return Err(AtlasError::config(
                "output",
                self.output.display().to_string(),
                "output would overwrite the input texture",
            ));
        }
        if !self.source_size.is_power_of_two() {
            return Err(AtlasError::config(
                "source_size",
                self.source_size.to_string(),
                "must be a non-zero power of two",
            ));
        }
        if self.backend == ResampleBackend::Image && self.filter == ResampleFilter::Mitchell {
            return Err(AtlasError::config(
                "filter",
                self.filter.name(),
                "not available with the image backend; use the simd backend or another filter",
            ));
        }
        Ok(())
    }

    /// Builds an [`AtlasBuilder`] wired to the configured resampler.
    pub fn to_builder(&self) -> AtlasBuilder<PngCodec, Box<dyn Resampler>> {
        let resampler: Box<dyn Resampler> = match self.backend {
            ResampleBackend::Simd => Box::new(FirResampler::new(self.filter)),
            ResampleBackend::Image => Box::new(ImageopsResampler::new(self.filter)),
        };
        AtlasBuilder::new(PngCodec, resampler).with_source_size(self.source_size)
    }
}

/// Absolute form of `path` for comparing two config paths.
///
/// Existing files are canonicalized. For a file that does not exist yet the
/// parent directory is canonicalized instead, and failing that the path is
/// made absolute lexically.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if let (Ok(dir), Some(name)) = (fs::canonicalize(parent), path.file_name()) {
        return dir.join(name);
    }
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
