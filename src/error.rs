//! Unified error types for vehicle-catalog.
//!
//! The query engine itself is total: nothing in `catalog` or `compare`
//! returns these errors. They cover the edges of the system, where datasets
//! are read from disk, configuration is loaded and reports are written.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vehicle-catalog operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    /// Errors while loading a dataset or reports index
    #[error("Failed to load dataset: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {0}")]
    Report(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON array of vehicle records")]
    NotAnArray,

    #[error("Duplicate vehicle name: {0}")]
    DuplicateName(String),

    #[error("Record {index} has an empty name")]
    EmptyName { index: usize },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for vehicle-catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CatalogError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::load(
            "JSON deserialization",
            LoadErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outward-in, so the final message reads like a path
/// through the call stack: `loading reports: reading file: ...`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<CatalogError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: CatalogError, new_ctx: &str) -> CatalogError {
    match err {
        CatalogError::Load {
            context: existing,
            source,
        } => CatalogError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CatalogError::Io {
            path,
            message,
            source,
        } => CatalogError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        CatalogError::Report(msg) => CatalogError::Report(chain_context(new_ctx, &msg)),
        CatalogError::Config(msg) => CatalogError::Config(chain_context(new_ctx, &msg)),
        CatalogError::Validation(msg) => CatalogError::Validation(chain_context(new_ctx, &msg)),
    }
}

fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| CatalogError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| CatalogError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::load("vehicles.json", LoadErrorKind::NotAnArray);
        let display = err.to_string();
        assert!(display.contains("vehicles.json"), "{display}");

        let err = CatalogError::load(
            "vehicles.json",
            LoadErrorKind::DuplicateName("Honda Civic 2022".to_string()),
        );
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Duplicate vehicle name: Honda Civic 2022")
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CatalogError::io("/data/vehicles.json", io_err);
        assert!(err.to_string().contains("/data/vehicles.json"));
    }

    #[test]
    fn test_context_chaining() {
        let initial: Result<()> = Err(CatalogError::load(
            "initial context",
            LoadErrorKind::NotAnArray,
        ));

        match initial.context("outer context") {
            Err(CatalogError::Load { context, .. }) => {
                assert_eq!(context, "outer context: initial context");
            }
            other => panic!("Expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_is_lazy() {
        let ok: std::result::Result<u8, std::io::Error> = Ok(1);
        let value = ok
            .with_context(|| -> String { panic!("closure must not run on Ok") })
            .expect("ok value");
        assert_eq!(value, 1);
    }

    #[test]
    fn test_option_context() {
        let missing: Option<u8> = None;
        let err = missing.context_none("vehicle not found").unwrap_err();
        assert!(matches!(err, CatalogError::Validation(ref m) if m == "vehicle not found"));
    }

    #[test]
    fn test_serde_json_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CatalogError = parse_err.into();
        assert!(matches!(
            err,
            CatalogError::Load {
                source: LoadErrorKind::InvalidJson(_),
                ..
            }
        ));
    }
}
