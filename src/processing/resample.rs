//! Resize capability and the two shipped resamplers.

use atlas_scale::cpu::{ResampleFilter, ScaleError, rgba_len, scale_rgba_cpu};
use atlas_scale::mip::Size;
use fast_image_resize::Resizer;
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Abstract resize interface.
///
/// Every call receives the full-resolution source; implementations must not
/// assume they are fed the previous level.
pub trait Resampler {
    /// Resize `source` to exactly `size`.
    fn resize(&mut self, source: &RgbaImage, size: Size) -> Result<RgbaImage, ScaleError>;
}

impl<R: Resampler + ?Sized> Resampler for Box<R> {
    fn resize(&mut self, source: &RgbaImage, size: Size) -> Result<RgbaImage, ScaleError> {
        (**self).resize(source, size)
    }
}

fn source_size(source: &RgbaImage) -> Size {
    Size {
        w: source.width(),
        h: source.height(),
    }
}

/// SIMD resampler on `fast_image_resize`. Keeps one `Resizer` for the whole
/// chain so its scratch buffers are reused between levels.
pub struct FirResampler {
    resizer: Resizer,
    filter: ResampleFilter,
}

impl FirResampler {
    pub fn new(filter: ResampleFilter) -> Self {
        Self {
            resizer: Resizer::new(),
            filter,
        }
    }
}

impl Default for FirResampler {
    fn default() -> Self {
        Self::new(ResampleFilter::default())
    }
}

impl Resampler for FirResampler {
    fn resize(&mut self, source: &RgbaImage, size: Size) -> Result<RgbaImage, ScaleError> {
        let src = source_size(source);
        // Identity level: copy so level 0 is bit-exact with the input.
        if src == size {
            return Ok(source.clone());
        }

        let needed = rgba_len(size);
        let mut buf = vec![0u8; needed];
        scale_rgba_cpu(&mut self.resizer, source.as_raw(), src, &mut buf, size, self.filter)?;
        RgbaImage::from_raw(size.w, size.h, buf)
            .ok_or(ScaleError::BufferTooSmall { needed, got: 0 })
    }
}

/// Pure `image` resampler, slower but with no SIMD dependency in the path.
pub struct ImageopsResampler {
    filter: FilterType,
}

impl ImageopsResampler {
    pub fn new(filter: ResampleFilter) -> Self {
        let filter = match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Bilinear => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            // imageops has no Mitchell kernel; AtlasConfig::validate rejects
            // this pairing, direct callers get the nearest cubic.
            ResampleFilter::Mitchell => FilterType::CatmullRom,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        };
        Self { filter }
    }
}

impl Resampler for ImageopsResampler {
    fn resize(&mut self, source: &RgbaImage, size: Size) -> Result<RgbaImage, ScaleError> {
        if size.w == 0 || size.h == 0 {
            return Err(ScaleError::EmptyImage);
        }
        if source_size(source) == size {
            return Ok(source.clone());
        }
        Ok(imageops::resize(source, size.w, size.h, self.filter))
    }
}
