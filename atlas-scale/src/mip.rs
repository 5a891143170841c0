// SPDX-License-Identifier: MIT
//! # Mip Chain Planning
//!
//! Computes the level list for a stacked mipmap atlas without touching any
//! pixels. Everything here is plain integer arithmetic, so the full 8192x8192
//! plan can be checked in tests without allocating a single image.
//!
//! ## Level Count
//!
//! The count starts at 1 for the base level and increments once per halving
//! while *both* sides are still larger than 1. For a power-of-two square of
//! side `2^n` this gives `n + 1` levels (14 for 8192).
//!
//! ## Offsets
//!
//! Level `i` is placed at `x = 0`, `y = sum(height of levels 0..i)`. Because each
//! height is at most half of the previous one, the running sum never exceeds
//! `2h - 1`, so a `w x 2h` canvas always holds the whole chain.

/// Side length every CLI input must have.
pub const ATLAS_SOURCE_SIZE: u32 = 8192;

/// Represents a 2D size with width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    /// Square size helper.
    pub const fn square(side: u32) -> Self {
        Self { w: side, h: side }
    }

    /// Number of pixels covered by this size.
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Both sides divided by two, floored.
    pub fn halved(&self) -> Self {
        Self {
            w: self.w / 2,
            h: self.h / 2,
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// A single level of the chain and where it sits in the atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MipLevel {
    /// 0 is full resolution.
    pub index: u32,
    /// Source size shifted right by `index`.
    pub size: Size,
    /// Row of the atlas where this level's top edge is pasted.
    pub offset_y: u32,
}

/// Complete layout computed from the source size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MipChain {
    /// Original input dimensions
    pub source: Size,
    /// Levels in paste order, base level first
    pub levels: Vec<MipLevel>,
    /// Output canvas dimensions
    pub atlas: Size,
}

impl MipChain {
    /// Number of levels in the chain.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: even a 1x1 source has its base level.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Rows actually covered by pasted levels.
    pub fn used_height(&self) -> u32 {
        self.levels.iter().map(|l| l.size.h).sum()
    }
}

/// Count the levels of the chain for `source`, base level included.
pub fn level_count(source: Size) -> u32 {
    let mut levels = 1;
    let mut current = source;
    while current.w > 1 && current.h > 1 {
        levels += 1;
        current = current.halved();
    }
    levels
}

/// Compute every level's size and offset plus the atlas canvas size.
pub fn build_chain(source: Size) -> MipChain {
    let count = level_count(source);
    let mut levels = Vec::with_capacity(count as usize);
    let mut current = source;
    let mut offset_y = 0;

    for index in 0..count {
        levels.push(MipLevel {
            index,
            size: current,
            offset_y,
        });
        offset_y += current.h;
        current = current.halved();
    }

    MipChain {
        source,
        levels,
        atlas: Size {
            w: source.w,
            h: source.h.saturating_mul(2),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_k_source_has_fourteen_levels() {
        assert_eq!(level_count(Size::square(ATLAS_SOURCE_SIZE)), 14);
    }

    #[test]
    fn eight_k_atlas_is_twice_as_tall() {
        let chain = build_chain(Size::square(ATLAS_SOURCE_SIZE));
        assert_eq!(chain.atlas, Size { w: 8192, h: 16384 });
        assert_eq!(chain.len(), 14);
    }

    #[test]
    fn eight_k_levels_halve_and_stack() {
        let chain = build_chain(Size::square(ATLAS_SOURCE_SIZE));
        let mut expected_offset = 0;
        for (i, level) in chain.levels.iter().enumerate() {
            assert_eq!(level.index, i as u32);
            assert_eq!(level.size, Size::square(8192 >> i));
            assert_eq!(level.offset_y, expected_offset);
            expected_offset += level.size.h;
        }
        assert_eq!(chain.levels.last().map(|l| l.size), Some(Size::square(1)));
        assert_eq!(chain.levels[13].offset_y, 16382);
    }

    #[test]
    fn chain_fits_inside_canvas() {
        for side in [1u32, 2, 3, 7, 64, 100, 1000, 8192] {
            let chain = build_chain(Size::square(side));
            assert!(chain.used_height() <= chain.atlas.h, "side {side}");
            for level in &chain.levels {
                assert!(level.size.w <= chain.atlas.w);
                assert!(level.offset_y + level.size.h <= chain.atlas.h);
            }
        }
    }

    #[test]
    fn single_pixel_source_has_only_base_level() {
        let chain = build_chain(Size::square(1));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.atlas, Size { w: 1, h: 2 });
        assert!(!chain.is_empty());
    }

    #[test]
    fn non_square_stops_when_short_side_reaches_one() {
        assert_eq!(level_count(Size { w: 8192, h: 4096 }), 13);
        let chain = build_chain(Size { w: 8, h: 2 });
        let sizes: Vec<Size> = chain.levels.iter().map(|l| l.size).collect();
        assert_eq!(sizes, vec![Size { w: 8, h: 2 }, Size { w: 4, h: 1 }]);
    }

    #[test]
    fn size_formats_as_dimensions() {
        assert_eq!(Size { w: 8192, h: 4096 }.to_string(), "8192x4096");
        assert_eq!(Size::square(16).area(), 256);
    }
}
