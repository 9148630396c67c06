//! Icon name normalization.
//!
//! Produces the canonical, deduplicated, order-stable list of base
//! icon names shared across all themes. Ordering is lexicographic via
//! `BTreeSet`, so the result is independent of filesystem enumeration
//! order. Filenames that cannot map to a valid kebab-case identifier
//! are skipped with a warning rather than corrupting identifier
//! derivation downstream.

use icongen_core::{BuildConfig, Error, IconName, Result, ThemeType};
use std::collections::BTreeSet;
use std::path::Path;

/// Normalizes an enumeration of source filenames into canonical names.
///
/// Accepts bare file names (e.g. `home.svg`); entries without a `.svg`
/// extension or with a malformed stem are skipped.
///
/// # Examples
///
/// ```
/// use icongen_codegen::names::normalize_names;
///
/// let names = normalize_names(["user.svg", "home.svg", "user.svg", "README.md"]);
/// let strs: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
/// assert_eq!(strs, ["home", "user"]);
/// ```
pub fn normalize_names<I, S>(files: I) -> Vec<IconName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = BTreeSet::new();
    for file in files {
        let file = file.as_ref();
        let Some(stem) = file.strip_suffix(".svg") else {
            tracing::warn!("Skipping non-SVG source file: {file}");
            continue;
        };
        match IconName::parse(stem) {
            Ok(name) => {
                names.insert(name);
            }
            Err(err) => {
                tracing::warn!("Skipping malformed icon filename '{file}': {err}");
            }
        }
    }
    names.into_iter().collect()
}

/// Collects and normalizes source filenames across all theme
/// subdirectories of the configured source root.
///
/// A missing theme subdirectory contributes no names and is not an
/// error; a theme need not define every icon, or any at all.
///
/// # Errors
///
/// Returns [`Error::Read`] if an existing theme directory cannot be
/// enumerated.
pub async fn collect_names(config: &BuildConfig) -> Result<Vec<IconName>> {
    let mut files = Vec::new();
    for theme in ThemeType::ALL {
        let dir = config.theme_source_dir(theme);
        read_file_names(&dir, &mut files).await?;
    }
    let names = normalize_names(files);
    tracing::debug!("Normalized {} canonical icon names", names.len());
    Ok(names)
}

async fn read_file_names(dir: &Path, out: &mut Vec<String>) -> Result<()> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Theme directory {} does not exist", dir.display());
            return Ok(());
        }
        Err(source) => {
            return Err(Error::Read {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    loop {
        let entry = entries.next_entry().await.map_err(|source| Error::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let Some(entry) = entry else { break };
        if let Some(name) = entry.file_name().to_str() {
            out.push(name.to_string());
        }
    }
    Ok(())
}
