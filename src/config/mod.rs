//! # Configuration Module
//!
//! This module provides the run configuration for atlas generation.

pub mod config;

pub use config::{AtlasConfig, ResampleBackend};
