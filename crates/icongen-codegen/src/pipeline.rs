//! Pipeline orchestrator.
//!
//! Sequences the whole build: clear output, normalize names,
//! materialize per theme, fix up and emit per icon, derive the
//! manifest and index from the completed collection, then execute all
//! file writes. The run succeeds only if every task completes; the
//! first fatal error aborts everything in flight. There is no
//! transactional rollback — the pre-run clear step is what keeps stale
//! output from lingering.

use crate::emit::{build_manifest, emit_icon_module, emit_index_module, emit_manifest_module};
use crate::fixup::apply_theme_fixup;
use crate::format::{Formatter, TsFormatter};
use crate::materialize::materialize_theme;
use crate::names::collect_names;
use crate::template_engine::TemplateEngine;
use icongen_core::{BuildConfig, BuildTimeIconMeta, Error, Result, ThemeType, WriteFileMeta};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of generated icon modules
    pub icon_count: usize,
    /// Total number of files written (icons + manifest + index)
    pub files_written: usize,
}

/// The icon generation pipeline.
///
/// Owns the configuration, the loaded templates and the formatter as
/// explicit state so that multiple runs (e.g. in tests) never share
/// anything mutable.
///
/// # Examples
///
/// ```no_run
/// use icongen_codegen::Pipeline;
/// use icongen_core::BuildConfig;
///
/// # async fn example() -> icongen_core::Result<()> {
/// let config = BuildConfig::new("assets/svg", "src/icons");
/// let pipeline = Pipeline::new(config)?;
/// let report = pipeline.run().await?;
/// println!("wrote {} files", report.files_written);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pipeline {
    config: BuildConfig,
    engine: TemplateEngine<'static>,
    formatter: Box<dyn Formatter>,
}

impl Pipeline {
    /// Creates a pipeline with the default formatter.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or template
    /// loading fails.
    pub fn new(config: BuildConfig) -> Result<Self> {
        Self::with_formatter(config, Box::new(TsFormatter))
    }

    /// Creates a pipeline with a custom formatter.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or template
    /// loading fails.
    pub fn with_formatter(config: BuildConfig, formatter: Box<dyn Formatter>) -> Result<Self> {
        config.validate()?;

        let mut engine = TemplateEngine::new()?;
        if let Some(dir) = &config.template_dir {
            engine.load_overrides(dir)?;
        }

        Ok(Self {
            config,
            engine,
            formatter,
        })
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    ///
    /// Propagates the first fatal error from any stage; no partial
    /// output directory state is guaranteed valid afterwards.
    pub async fn run(&self) -> Result<BuildReport> {
        self.clear_output().await?;

        let names = collect_names(&self.config).await?;
        tracing::info!("Generating modules for {} icon names", names.len());

        // Materialization for a theme must be fully known before the
        // aggregates run, so each theme group is collected eagerly.
        let limit = Arc::new(Semaphore::new(self.config.concurrency));
        let mut metas: Vec<BuildTimeIconMeta> = Vec::new();
        for theme in ThemeType::ALL {
            let group =
                materialize_theme(&self.config, theme, &names, Arc::clone(&limit)).await?;
            metas.extend(group);
        }

        let mut writes = Vec::with_capacity(metas.len() + 2);
        for meta in &metas {
            let fixed = BuildTimeIconMeta {
                identifier: meta.identifier.clone(),
                icon: apply_theme_fixup(&meta.icon),
            };
            let content = emit_icon_module(&self.engine, self.formatter.as_ref(), &fixed)?;
            writes.push(WriteFileMeta {
                path: self
                    .config
                    .theme_output_dir(meta.icon.theme)
                    .join(format!("{}.ts", meta.identifier)),
                content,
            });
        }

        let manifest = build_manifest(&metas);
        writes.push(WriteFileMeta {
            path: self.config.manifest_path(),
            content: emit_manifest_module(&self.engine, self.formatter.as_ref(), &manifest)?,
        });
        writes.push(WriteFileMeta {
            path: self.config.index_path(),
            content: emit_index_module(&self.engine, self.formatter.as_ref(), &metas)?,
        });

        let files_written = writes.len();
        self.execute_writes(writes, &limit).await?;

        tracing::info!(
            "Generated {} icon modules plus manifest and index",
            metas.len()
        );
        Ok(BuildReport {
            icon_count: metas.len(),
            files_written,
        })
    }

    /// Clears previous output so stale modules never linger.
    async fn clear_output(&self) -> Result<()> {
        let output_dir = &self.config.output_dir;
        match tokio::fs::remove_dir_all(output_dir).await {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(Error::Write {
                    path: output_dir.clone(),
                    source,
                });
            }
        }
        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|source| Error::Write {
                path: output_dir.clone(),
                source,
            })
    }

    /// Executes all write tasks with bounded concurrency.
    async fn execute_writes(
        &self,
        writes: Vec<WriteFileMeta>,
        limit: &Arc<Semaphore>,
    ) -> Result<()> {
        let mut tasks = JoinSet::new();
        for write in writes {
            let limit = Arc::clone(limit);
            tasks.spawn(async move {
                let _permit = limit.acquire_owned().await.expect("semaphore closed");
                write_file(write).await
            });
        }
        while let Some(joined) = tasks.join_next().await {
            joined.expect("write task panicked")?;
        }
        Ok(())
    }
}

async fn write_file(write: WriteFileMeta) -> Result<()> {
    if let Some(parent) = write.path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| Error::Write {
                path: write.path.clone(),
                source,
            })?;
    }
    tokio::fs::write(&write.path, &write.content)
        .await
        .map_err(|source| Error::Write {
            path: write.path.clone(),
            source,
        })?;
    tracing::info!("Wrote {}", write.path.display());
    Ok(())
}
