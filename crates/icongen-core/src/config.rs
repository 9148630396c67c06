//! Pipeline configuration.
//!
//! All process-wide state (paths, optimizer options, worker bound) is
//! carried in one explicit [`BuildConfig`] passed into the pipeline
//! entry point and threaded through each component call, so multiple
//! runs (e.g. in tests) never share mutable state.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Default bound on concurrent materialization and write tasks.
const DEFAULT_CONCURRENCY: usize = 8;

/// Options passed through to the SVG optimizer.
///
/// `strip_fill` is an implicit override applied for single-color
/// themes regardless of the configured value; see
/// [`OptimizerOptions::for_single_color`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizerOptions {
    /// Remove `fill` attributes from every element.
    pub strip_fill: bool,
}

impl OptimizerOptions {
    /// Returns a copy of these options with `strip_fill` forced on,
    /// as used for the fill and outline themes.
    #[must_use]
    pub fn for_single_color(&self) -> Self {
        Self { strip_fill: true }
    }
}

/// Configuration for one icon generation run.
///
/// # Examples
///
/// ```
/// use icongen_core::BuildConfig;
///
/// let config = BuildConfig::new("assets/svg", "src/icons");
/// assert!(config.index_path().ends_with("index.ts"));
/// assert!(config.manifest_path().ends_with("manifest.ts"));
/// ```
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory containing per-theme SVG source subdirectories.
    pub source_dir: PathBuf,
    /// Directory receiving per-theme generated module subdirectories.
    pub output_dir: PathBuf,
    /// Override path for the generated index module.
    pub index_path: Option<PathBuf>,
    /// Override path for the generated manifest module.
    pub manifest_path: Option<PathBuf>,
    /// Directory holding template files that override the built-in
    /// templates, keyed by file name.
    pub template_dir: Option<PathBuf>,
    /// Pass-through optimizer options.
    pub optimizer: OptimizerOptions,
    /// Bound on concurrent per-icon tasks.
    pub concurrency: usize,
}

impl BuildConfig {
    /// Creates a configuration with default options for the given
    /// source and output directories.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            index_path: None,
            manifest_path: None,
            template_dir: None,
            optimizer: OptimizerOptions::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Resolved path of the index module.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.index_path
            .clone()
            .unwrap_or_else(|| self.output_dir.join("index.ts"))
    }

    /// Resolved path of the manifest module.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.manifest_path
            .clone()
            .unwrap_or_else(|| self.output_dir.join("manifest.ts"))
    }

    /// Resolved source directory for a theme.
    #[must_use]
    pub fn theme_source_dir(&self, theme: crate::ThemeType) -> PathBuf {
        self.source_dir.join(theme.as_str())
    }

    /// Resolved output directory for a theme.
    #[must_use]
    pub fn theme_output_dir(&self, theme: crate::ThemeType) -> PathBuf {
        self.output_dir.join(theme.as_str())
    }

    /// Validates the configuration surface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a path is empty or the worker
    /// bound is zero.
    pub fn validate(&self) -> Result<()> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(Error::Config {
                message: "source directory must not be empty".to_string(),
            });
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::Config {
                message: "output directory must not be empty".to_string(),
            });
        }
        if self.concurrency == 0 {
            return Err(Error::Config {
                message: "concurrency must be at least 1".to_string(),
            });
        }
        if self.output_dir == Path::new("/") {
            return Err(Error::Config {
                message: "refusing to use filesystem root as output directory".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThemeType;

    #[test]
    fn test_default_paths() {
        let config = BuildConfig::new("svg", "out");
        assert_eq!(config.index_path(), PathBuf::from("out/index.ts"));
        assert_eq!(config.manifest_path(), PathBuf::from("out/manifest.ts"));
        assert_eq!(
            config.theme_source_dir(ThemeType::Twotone),
            PathBuf::from("svg/twotone")
        );
        assert_eq!(
            config.theme_output_dir(ThemeType::Fill),
            PathBuf::from("out/fill")
        );
    }

    #[test]
    fn test_path_overrides() {
        let mut config = BuildConfig::new("svg", "out");
        config.index_path = Some(PathBuf::from("es/index.ts"));
        config.manifest_path = Some(PathBuf::from("es/manifest.ts"));
        assert_eq!(config.index_path(), PathBuf::from("es/index.ts"));
        assert_eq!(config.manifest_path(), PathBuf::from("es/manifest.ts"));
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let mut config = BuildConfig::new("svg", "out");
        config.concurrency = 0;
        assert!(config.validate().unwrap_err().is_config_error());
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        assert!(BuildConfig::new("", "out").validate().is_err());
        assert!(BuildConfig::new("svg", "").validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(BuildConfig::new("svg", "out").validate().is_ok());
    }

    #[test]
    fn test_single_color_optimizer_override() {
        let options = OptimizerOptions { strip_fill: false };
        assert!(options.for_single_color().strip_fill);
    }
}
