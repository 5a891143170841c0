//! Common test utilities for the atlas integration tests
//!
//! Fixture textures are generated on the fly into temporary directories so the
//! suite needs no checked-in images.

#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Side length used for full builds; small enough to keep tests fast.
pub const TEST_SIDE: u32 = 32;

/// Deterministic texture with a different value in every texel.
pub fn gradient_texture(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x ^ y) & 0xff) as u8,
            255,
        ])
    })
}

/// Temporary workspace holding a source texture.
pub struct Fixture {
    pub dir: TempDir,
    pub input: PathBuf,
    pub source: RgbaImage,
}

impl Fixture {
    /// Write a `width x height` gradient PNG into a fresh temp dir.
    pub fn new(width: u32, height: u32) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("source.png");
        let source = gradient_texture(width, height);
        source.save(&input).expect("write fixture texture");
        Self { dir, input, source }
    }

    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Path inside the fixture directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Decode a PNG written by the builder.
pub fn load_rgba(path: &Path) -> RgbaImage {
    image::open(path).expect("decode atlas").into_rgba8()
}
