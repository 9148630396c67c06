//! Error types for the icon code generator.
//!
//! All fatal conditions in the pipeline map to one variant of [`Error`],
//! each carrying enough context (path or identifier) to diagnose the
//! offending asset. A theme lacking a given icon is *not* an error and
//! never surfaces here; it is skipped during materialization.
//!
//! # Examples
//!
//! ```
//! use icongen_core::{Error, Result};
//!
//! fn check_jobs(jobs: usize) -> Result<()> {
//!     if jobs == 0 {
//!         return Err(Error::Config {
//!             message: "concurrency must be at least 1".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_jobs(0).unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the icon generation pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when the build configuration is invalid, e.g. a zero
    /// worker bound or an empty source directory path.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// A source file could not be read.
    #[error("Failed to read source file: {path}")]
    Read {
        /// Path of the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Raw SVG markup could not be optimized or parsed into an
    /// abstract tree.
    ///
    /// Fatal to the run: a malformed icon indicates a data-quality
    /// defect that must not silently ship.
    #[error("Failed to optimize or parse SVG '{path}': {message}")]
    Optimize {
        /// Path of the offending source file
        path: PathBuf,
        /// Description of the optimizer or parser failure
        message: String,
    },

    /// An icon source filename does not map to a valid identifier.
    ///
    /// The name normalizer skips such files; this variant exists for
    /// callers that construct [`crate::IconName`] values directly.
    #[error("Invalid icon name '{name}': {reason}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Why the name was rejected
        reason: String,
    },

    /// Template registration or rendering failed.
    #[error("Template '{name}' failed: {message}")]
    Template {
        /// Name of the template
        name: String,
        /// Description of the failure
        message: String,
    },

    /// Generated source failed reformatting.
    ///
    /// Fatal to the run, tagged with the module identifier whose
    /// generated source was rejected.
    #[error("Failed to format generated module '{identifier}': {message}")]
    Format {
        /// Module identifier of the offending icon
        identifier: String,
        /// Description of the formatting failure
        message: String,
    },

    /// Serialization of an icon definition or manifest failed.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure
        message: String,
    },

    /// A generated file could not be written to disk.
    #[error("Failed to write output file: {path}")]
    Write {
        /// Path of the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns `true` if this is an optimizer or parser failure.
    #[must_use]
    pub const fn is_optimize_error(&self) -> bool {
        matches!(self, Self::Optimize { .. })
    }

    /// Returns `true` if this is a formatting failure.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Returns `true` if this is a filesystem write failure.
    #[must_use]
    pub const fn is_write_error(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

/// Result type alias using the pipeline [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
