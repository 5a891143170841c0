// SPDX-License-Identifier: MIT
// CPU scaler built on fast_image_resize (SIMD-accelerated).
// RGBA8 in → RGBA8 out, direct write into caller-provided dst buffer.

use std::str::FromStr;

use fast_image_resize as fir;
use fir::images::{TypedImage, TypedImageRef};
use fir::pixels::U8x4;
use fir::{ResizeAlg, ResizeOptions, Resizer};

use crate::mip::Size;

#[derive(Debug)]
pub enum ScaleError {
    BufferTooSmall { needed: usize, got: usize },
    EmptyImage,
    Fir(fir::ResizeError),
    ImageBuf(fir::ImageBufferError),
}

impl From<fir::ResizeError> for ScaleError { fn from(e: fir::ResizeError) -> Self { Self::Fir(e) } }
impl From<fir::ImageBufferError> for ScaleError { fn from(e: fir::ImageBufferError) -> Self { Self::ImageBuf(e) } }

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::BufferTooSmall { needed, got } => {
                write!(f, "Buffer too small: need {} bytes, got {}", needed, got)
            }
            ScaleError::EmptyImage => write!(f, "Cannot scale an image with a zero-length side"),
            ScaleError::Fir(e) => write!(f, "Fast image resize error: {}", e),
            ScaleError::ImageBuf(e) => write!(f, "Image buffer error: {}", e),
        }
    }
}

impl std::error::Error for ScaleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaleError::Fir(e) => Some(e),
            ScaleError::ImageBuf(e) => Some(e),
            _ => None,
        }
    }
}

/// Resampling filter used for every level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    Mitchell,
    /// Sharpest of the convolution filters; matches a classic "antialias" downscale.
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    pub const ALL: [ResampleFilter; 5] = [
        ResampleFilter::Nearest,
        ResampleFilter::Bilinear,
        ResampleFilter::CatmullRom,
        ResampleFilter::Mitchell,
        ResampleFilter::Lanczos3,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResampleFilter::Nearest => "nearest",
            ResampleFilter::Bilinear => "bilinear",
            ResampleFilter::CatmullRom => "catmull-rom",
            ResampleFilter::Mitchell => "mitchell",
            ResampleFilter::Lanczos3 => "lanczos3",
        }
    }

    pub fn to_alg(self) -> ResizeAlg {
        match self {
            ResampleFilter::Nearest => ResizeAlg::Nearest,
            ResampleFilter::Bilinear => ResizeAlg::Convolution(fir::FilterType::Bilinear),
            ResampleFilter::CatmullRom => ResizeAlg::Convolution(fir::FilterType::CatmullRom),
            ResampleFilter::Mitchell => ResizeAlg::Convolution(fir::FilterType::Mitchell),
            ResampleFilter::Lanczos3 => ResizeAlg::Convolution(fir::FilterType::Lanczos3),
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResampleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" => Ok(ResampleFilter::Nearest),
            "bilinear" | "triangle" => Ok(ResampleFilter::Bilinear),
            "catmull-rom" | "catmullrom" | "cubic" => Ok(ResampleFilter::CatmullRom),
            "mitchell" => Ok(ResampleFilter::Mitchell),
            "lanczos3" | "lanczos" | "antialias" => Ok(ResampleFilter::Lanczos3),
            _ => Err(format!(
                "Invalid filter: {}. Use: nearest, bilinear, catmull-rom, mitchell, lanczos3",
                s
            )),
        }
    }
}

/// Bytes needed for a tightly packed RGBA8 buffer of `size`.
#[inline]
pub fn rgba_len(size: Size) -> usize {
    size.area() as usize * 4
}

/// Main scaling entry point.
/// `src_rgba` and `dst` are tightly packed RGBA8 rows.
/// `dst` must hold at least `dst_size.w * dst_size.h * 4` bytes; only that prefix is written.
pub fn scale_rgba_cpu(
    resizer: &mut Resizer,
    src_rgba: &[u8],
    src: Size,
    dst: &mut [u8],
    dst_size: Size,
    filter: ResampleFilter,
) -> Result<(), ScaleError> {
    if src.w == 0 || src.h == 0 || dst_size.w == 0 || dst_size.h == 0 {
        return Err(ScaleError::EmptyImage);
    }

    let src_len = rgba_len(src);
    if src_rgba.len() < src_len {
        return Err(ScaleError::BufferTooSmall { needed: src_len, got: src_rgba.len() });
    }
    let dst_len = rgba_len(dst_size);
    if dst.len() < dst_len {
        return Err(ScaleError::BufferTooSmall { needed: dst_len, got: dst.len() });
    }

    let src_view = TypedImageRef::<U8x4>::from_buffer(src.w, src.h, &src_rgba[..src_len])?;
    let mut dst_image = TypedImage::<U8x4>::from_buffer(dst_size.w, dst_size.h, &mut dst[..dst_len])?;

    // Straight (non-premultiplied) alpha in the source, so let fir premultiply
    // before filtering to keep transparent texels from bleeding colour.
    let opts = ResizeOptions::new()
        .resize_alg(filter.to_alg())
        .use_alpha(true);

    resizer.resize_typed::<U8x4>(&src_view, &mut dst_image, &opts)?;

    Ok(())
}
