//! # Atlas Builder
//!
//! Sequences one atlas build:
//!
//! 1. read the source header and reject anything that is not `source_size` square
//! 2. decode the full source
//! 3. for every mip level, resize the *original* source to the level size and
//!    paste it at the level's vertical offset
//! 4. drop the source and encode the canvas
//!
//! Nothing is written until step 4, so a rejected or unreadable input never
//! produces an output file.

use std::path::{Path, PathBuf};

use atlas_scale::mip::{ATLAS_SOURCE_SIZE, MipChain, Size, build_chain};
use image::{RgbaImage, imageops};

use crate::error::{AtlasError, AtlasResult};
use crate::processing::codec::ImageCodec;
use crate::processing::resample::Resampler;

/// What a finished build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub levels: usize,
    pub atlas: Size,
}

/// Builds a vertically stacked mip atlas from one square texture.
pub struct AtlasBuilder<C, R> {
    codec: C,
    resampler: R,
    source_size: u32,
}

impl<C: ImageCodec, R: Resampler> AtlasBuilder<C, R> {
    /// Builder requiring the standard 8192x8192 source.
    pub fn new(codec: C, resampler: R) -> Self {
        Self {
            codec,
            resampler,
            source_size: ATLAS_SOURCE_SIZE,
        }
    }

    /// Require a different square source side.
    pub fn with_source_size(mut self, source_size: u32) -> Self {
        self.source_size = source_size;
        self
    }

    pub fn source_size(&self) -> u32 {
        self.source_size
    }

    /// Layout the build will produce for a valid source.
    pub fn plan(&self) -> MipChain {
        build_chain(Size::square(self.source_size))
    }

    fn check_dimensions(&self, width: u32, height: u32) -> AtlasResult<()> {
        if width != self.source_size || height != self.source_size {
            return Err(AtlasError::invalid_input(self.source_size, width, height));
        }
        Ok(())
    }

    /// Build the atlas for `input` and write it to `output`.
    pub fn build(&mut self, input: &Path, output: &Path) -> AtlasResult<AtlasSummary> {
        let (width, height) = self.codec.dimensions(input)?;
        self.check_dimensions(width, height)
            .map_err(|e| e.with_context(format!("header of {}", input.display())))?;

        let source = self.codec.decode(input)?;
        self.check_dimensions(source.width(), source.height())?;
        log::info!("decoded {} ({}x{})", input.display(), width, height);

        let (atlas, chain) = self.compose(&source)?;
        drop(source);

        self.codec.encode(&atlas, output)?;
        log::info!(
            "encoded {}x{} atlas with {} levels ({} rows used) to {}",
            chain.atlas.w,
            chain.atlas.h,
            chain.len(),
            chain.used_height(),
            output.display()
        );

        Ok(AtlasSummary {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            levels: chain.len(),
            atlas: chain.atlas,
        })
    }

    /// Resize every level from `source` and paste it into a fresh canvas.
    ///
    /// Does not check `source_size`; callers going through [`build`](Self::build)
    /// have already been validated.
    pub fn compose(&mut self, source: &RgbaImage) -> AtlasResult<(RgbaImage, MipChain)> {
        let chain = build_chain(Size {
            w: source.width(),
            h: source.height(),
        });
        let mut atlas = RgbaImage::new(chain.atlas.w, chain.atlas.h);

        for level in &chain.levels {
            let resized = self
                .resampler
                .resize(source, level.size)
                .map_err(|e| AtlasError::resize(level.index, e))?;
            log::debug!(
                "level {:>2}: {} at y={}",
                level.index,
                level.size,
                level.offset_y
            );
            imageops::replace(&mut atlas, &resized, 0, i64::from(level.offset_y));
        }

        Ok((atlas, chain))
    }
}
