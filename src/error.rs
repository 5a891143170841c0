//! # Atlas Error Handling
//!
//! Error types for the atlas generator. Every failure is fatal: the builder
//! never retries and never falls back, so the taxonomy is small and exists to
//! tell the user *what* went wrong and what to try next.
//!
//! ## Error Kinds
//!
//! - `InvalidInput`: the decoded source is not the required square size
//! - `Io`: the input could not be read or decoded, or the output could not be written
//! - `Config`: the run was configured with unusable values
//! - `Resize`: the resampler rejected a level
//!
//! ## Usage
//!
//! ```rust
//! use mip_atlas::error::{AtlasError, ErrorKind, HasRecoverySuggestion};
//!
//! let error = AtlasError::invalid_input(8192, 4096, 4096)
//!     .with_context("validating source texture");
//!
//! assert_eq!(error.kind(), ErrorKind::InvalidInput);
//! assert!(error.to_string().starts_with("Input image is not 8K resolution (8192x8192)"));
//! assert!(error.recovery_suggestion().is_some());
//! ```

use std::{
    error::Error as StdError,
    fmt,
    path::{Path, PathBuf},
};

use atlas_scale::cpu::ScaleError;
use atlas_scale::mip::ATLAS_SOURCE_SIZE;

/// Coarse classification of an [`AtlasError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Io,
    Config,
    Resize,
}

/// Metadata about where an error occurred
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed when the error occurred
    pub operation: Option<String>,
    /// Additional context about the error
    pub context: Option<String>,
    /// Suggested recovery action
    pub recovery_suggestion: Option<String>,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operation that was being performed
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Add additional context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set recovery suggestion
    pub fn with_recovery_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.recovery_suggestion = Some(suggestion.into());
        self
    }
}

/// Base error type for the atlas generator
#[derive(Debug)]
pub enum AtlasError {
    /// Source dimensions differ from the required square size
    InvalidInput {
        expected: u32,
        width: u32,
        height: u32,
        context: ErrorContext,
    },
    /// Reading, decoding, encoding or writing failed
    Io {
        operation: String,
        path: PathBuf,
        source: Box<dyn StdError + Send + Sync>,
        context: ErrorContext,
    },
    /// Configuration validation errors
    Config {
        field: String,
        value: String,
        reason: String,
        context: ErrorContext,
    },
    /// Resampling a level failed
    Resize {
        level: u32,
        source: ScaleError,
        context: ErrorContext,
    },
}

impl AtlasError {
    /// Create a dimension mismatch error
    pub fn invalid_input(expected: u32, width: u32, height: u32) -> Self {
        Self::InvalidInput {
            expected,
            width,
            height,
            context: ErrorContext::new().with_recovery_suggestion(format!(
                "Provide a {0}x{0} source texture",
                expected
            )),
        }
    }

    /// Create an I/O error for `path`
    pub fn io(
        operation: impl Into<String>,
        path: impl AsRef<Path>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        let operation = operation.into();
        Self::Io {
            context: ErrorContext::new().with_operation(operation.clone()),
            operation,
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }

    /// Create a configuration error
    pub fn config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Config {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a resize error for mip `level`
    pub fn resize(level: u32, source: ScaleError) -> Self {
        Self::Resize {
            level,
            source,
            context: ErrorContext::new().with_operation("resize"),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AtlasError::InvalidInput { .. } => ErrorKind::InvalidInput,
            AtlasError::Io { .. } => ErrorKind::Io,
            AtlasError::Config { .. } => ErrorKind::Config,
            AtlasError::Resize { .. } => ErrorKind::Resize,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            AtlasError::InvalidInput { context, .. }
            | AtlasError::Io { context, .. }
            | AtlasError::Config { context, .. }
            | AtlasError::Resize { context, .. } => context,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            AtlasError::InvalidInput { context, .. }
            | AtlasError::Io { context, .. }
            | AtlasError::Config { context, .. }
            | AtlasError::Resize { context, .. } => context,
        }
    }

    /// Add context text
    pub fn with_context(mut self, text: impl Into<String>) -> Self {
        self.context_mut().context = Some(text.into());
        self
    }

    /// Set recovery suggestion
    pub fn with_recovery_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.context_mut().recovery_suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::InvalidInput {
                expected,
                width,
                height,
                ..
            } => {
                if *expected == ATLAS_SOURCE_SIZE {
                    write!(f, "Input image is not 8K resolution (8192x8192)")?;
                } else {
                    write!(f, "Input image is not {0}x{0} resolution", expected)?;
                }
                write!(f, ", got {}x{}", width, height)
            }
            AtlasError::Io {
                operation,
                path,
                source,
                ..
            } => {
                write!(f, "Failed to {} '{}': {}", operation, path.display(), source)
            }
            AtlasError::Config {
                field,
                value,
                reason,
                ..
            } => {
                write!(
                    f,
                    "Configuration error in '{}': {} (value: {})",
                    field, reason, value
                )
            }
            AtlasError::Resize { level, source, .. } => {
                write!(f, "Resizing mip level {} failed: {}", level, source)
            }
        }?;

        if let Some(context) = &self.context().context {
            write!(f, " ({})", context)?;
        }
        Ok(())
    }
}

impl StdError for AtlasError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            AtlasError::Io { source, .. } => Some(source.as_ref()),
            AtlasError::Resize { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for atlas operations
pub type AtlasResult<T> = Result<T, AtlasError>;

/// Trait for errors that provide recovery suggestions
pub trait HasRecoverySuggestion {
    /// Get recovery suggestion for this error
    fn recovery_suggestion(&self) -> Option<&str>;
}

impl HasRecoverySuggestion for AtlasError {
    fn recovery_suggestion(&self) -> Option<&str> {
        self.context().recovery_suggestion.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_k_message() {
        let error = AtlasError::invalid_input(8192, 4096, 4096);
        assert_eq!(
            error.to_string(),
            "Input image is not 8K resolution (8192x8192), got 4096x4096"
        );
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_custom_size_message() {
        let error = AtlasError::invalid_input(64, 32, 64);
        assert_eq!(
            error.to_string(),
            "Input image is not 64x64 resolution, got 32x64"
        );
        assert_eq!(error.recovery_suggestion(), Some("Provide a 64x64 source texture"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = AtlasError::io("read", "/nope/in.png", missing);

        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(error.to_string().contains("/nope/in.png"));
        assert!(error.source().is_some());
        assert_eq!(error.context().operation.as_deref(), Some("read"));
    }

    #[test]
    fn test_error_with_context() {
        let error = AtlasError::config("source_size", "100", "must be a power of two")
            .with_context("loading defaults")
            .with_recovery_suggestion("use 8192");

        assert_eq!(error.kind(), ErrorKind::Config);
        assert!(error.to_string().ends_with("(loading defaults)"));
        assert_eq!(error.recovery_suggestion(), Some("use 8192"));
    }

    #[test]
    fn test_resize_error_chains_scale_error() {
        let error = AtlasError::resize(3, ScaleError::EmptyImage);
        assert_eq!(error.kind(), ErrorKind::Resize);
        assert!(error.to_string().starts_with("Resizing mip level 3 failed"));
        assert!(error.source().is_some());
    }
}
