//! Icon materialization: raw SVG file to `BuildTimeIconMeta`.
//!
//! For each `(theme, name)` pair the source file is presumed to live
//! at `{source_dir}/{theme}/{name}.svg`; existence is checked first
//! and an absent file skips the pair silently, since a theme need not
//! define every icon. Optimizer or parser failure aborts the run.

use crate::svg::tree::abstract_tree;
use crate::svg::Optimizer;
use icongen_core::{
    BuildConfig, BuildTimeIconMeta, Error, IconDefinition, IconName, Result, ThemeType,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Materializes a single `(theme, name)` pair.
///
/// Returns `Ok(None)` when the source file does not exist.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file exists but cannot be read and
/// [`Error::Optimize`] if its markup cannot be optimized or parsed.
pub async fn materialize_icon(
    path: PathBuf,
    theme: ThemeType,
    name: IconName,
    optimizer: Arc<Optimizer>,
) -> Result<Option<BuildTimeIconMeta>> {
    let exists = tokio::fs::try_exists(&path)
        .await
        .map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
    if !exists {
        tracing::debug!("No {theme} source for '{name}', skipping");
        return Ok(None);
    }

    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;

    let optimized = optimizer.optimize(&path, &raw)?;
    let icon = abstract_tree(&path, &optimized)?;

    let identifier = name.module_identifier(theme);
    tracing::debug!("Materialized {identifier} from {}", path.display());

    Ok(Some(BuildTimeIconMeta {
        identifier,
        icon: IconDefinition { name, theme, icon },
    }))
}

/// Materializes every applicable icon of one theme with bounded
/// concurrency.
///
/// Results come back in canonical name order (the order of `names`)
/// regardless of which task finished first; missing assets are
/// dropped from the sequence.
///
/// # Errors
///
/// Propagates the first materialization failure; remaining in-flight
/// tasks are aborted.
pub async fn materialize_theme(
    config: &BuildConfig,
    theme: ThemeType,
    names: &[IconName],
    limit: Arc<Semaphore>,
) -> Result<Vec<BuildTimeIconMeta>> {
    let optimizer = Arc::new(Optimizer::for_theme(&config.optimizer, theme));
    let theme_dir = config.theme_source_dir(theme);

    let mut tasks = JoinSet::new();
    for (index, name) in names.iter().enumerate() {
        let path = theme_dir.join(format!("{name}.svg"));
        let name = name.clone();
        let optimizer = Arc::clone(&optimizer);
        let limit = Arc::clone(&limit);
        tasks.spawn(async move {
            let _permit = limit.acquire_owned().await.expect("semaphore closed");
            (index, materialize_icon(path, theme, name, optimizer).await)
        });
    }

    // Slots keyed by input index keep the canonical order stable no
    // matter the completion order.
    let mut slots: Vec<Option<BuildTimeIconMeta>> = vec![None; names.len()];
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = joined.expect("materialization task panicked");
        if let Some(meta) = result? {
            slots[index] = Some(meta);
        }
    }

    let metas: Vec<_> = slots.into_iter().flatten().collect();
    tracing::debug!("Materialized {} {theme} icons", metas.len());
    Ok(metas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use icongen_core::OptimizerOptions;

    const HOME_SVG: &str =
        r##"<svg viewBox="0 0 16 16"><path fill="#000" d="M0 0h8v8H0z"/></svg>"##;

    fn write_icon(dir: &std::path::Path, theme: &str, name: &str, content: &str) {
        let theme_dir = dir.join(theme);
        std::fs::create_dir_all(&theme_dir).unwrap();
        std::fs::write(theme_dir.join(format!("{name}.svg")), content).unwrap();
    }

    #[tokio::test]
    async fn test_materialize_existing_icon() {
        let dir = tempfile::tempdir().unwrap();
        write_icon(dir.path(), "fill", "home", HOME_SVG);

        let optimizer = Arc::new(Optimizer::for_theme(
            &OptimizerOptions::default(),
            ThemeType::Fill,
        ));
        let meta = materialize_icon(
            dir.path().join("fill/home.svg"),
            ThemeType::Fill,
            IconName::parse("home").unwrap(),
            optimizer,
        )
        .await
        .unwrap()
        .expect("icon should materialize");

        assert_eq!(meta.identifier, "HomeFill");
        assert_eq!(meta.icon.theme, ThemeType::Fill);
        assert_eq!(meta.icon.icon.tag, "svg");
        // Single-color themes never carry a fill attribute.
        assert!(!meta.icon.icon.any_node_has_attr("fill"));
    }

    #[tokio::test]
    async fn test_missing_asset_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let optimizer = Arc::new(Optimizer::new(OptimizerOptions::default()));
        let result = materialize_icon(
            dir.path().join("outline/home.svg"),
            ThemeType::Outline,
            IconName::parse("home").unwrap(),
            optimizer,
        )
        .await
        .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_malformed_source_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_icon(dir.path(), "fill", "broken", "<svg><path></svg>");

        let optimizer = Arc::new(Optimizer::new(OptimizerOptions::default()));
        let err = materialize_icon(
            dir.path().join("fill/broken.svg"),
            ThemeType::Fill,
            IconName::parse("broken").unwrap(),
            optimizer,
        )
        .await
        .unwrap_err();
        assert!(err.is_optimize_error());
    }

    #[tokio::test]
    async fn test_theme_results_follow_canonical_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zebra", "apple", "mango"] {
            write_icon(dir.path(), "fill", name, HOME_SVG);
        }

        let config = BuildConfig::new(dir.path(), dir.path().join("out"));
        let names: Vec<IconName> = ["apple", "mango", "zebra"]
            .into_iter()
            .map(|n| IconName::parse(n).unwrap())
            .collect();

        let metas = materialize_theme(
            &config,
            ThemeType::Fill,
            &names,
            Arc::new(Semaphore::new(2)),
        )
        .await
        .unwrap();

        let ids: Vec<&str> = metas.iter().map(|m| m.identifier.as_str()).collect();
        assert_eq!(ids, ["AppleFill", "MangoFill", "ZebraFill"]);
    }

    #[tokio::test]
    async fn test_theme_with_partial_coverage() {
        let dir = tempfile::tempdir().unwrap();
        write_icon(dir.path(), "twotone", "home", HOME_SVG);

        let config = BuildConfig::new(dir.path(), dir.path().join("out"));
        let names: Vec<IconName> = ["home", "user"]
            .into_iter()
            .map(|n| IconName::parse(n).unwrap())
            .collect();

        let metas = materialize_theme(
            &config,
            ThemeType::Twotone,
            &names,
            Arc::new(Semaphore::new(4)),
        )
        .await
        .unwrap();

        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].identifier, "HomeTwoTone");
        // Twotone keeps its baked fill values at materialization time.
        assert!(metas[0].icon.icon.any_node_has_attr("fill"));
    }
}
