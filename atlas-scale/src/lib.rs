// SPDX-License-Identifier: MIT
//! # atlas-scale: Mip Chain Planning and CPU Downscaling
//!
//! This crate holds the pixel-free half of the atlas generator: working out how
//! many mip levels a texture has, where each level lands inside the stacked
//! atlas, and resizing RGBA8 buffers with `fast_image_resize`.
//!
//! ## Key Components
//!
//! - [`mip`]: Level counting, per-level sizes and vertical offsets
//! - [`cpu`]: SIMD-accelerated RGBA8 scaler with selectable filters
//!
//! ## Atlas Layout
//!
//! Levels are stacked top to bottom, each one left-aligned:
//!
//! ```text
//! +----------------+  y = 0
//! |    level 0     |
//! |    (w x h)     |
//! +--------+-------+  y = h
//! | lvl 1  |
//! +----+---+          y = h + h/2
//! | 2  |
//! +-+--+
//! ...
//! ```
//!
//! The canvas is always `w x 2h`; a power-of-two chain fills all but its last row.
//!
//! ## Usage Example
//!
//! ```rust
//! use atlas_scale::mip::{build_chain, Size};
//!
//! let chain = build_chain(Size { w: 8192, h: 8192 });
//! assert_eq!(chain.levels.len(), 14);
//! assert_eq!(chain.atlas, Size { w: 8192, h: 16384 });
//! assert_eq!(chain.levels[1].offset_y, 8192);
//! ```

pub mod cpu;
pub mod mip;
