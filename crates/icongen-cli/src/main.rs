//! Icon code generation CLI.
//!
//! Command-line wrapper around the generation pipeline.
//!
//! # Examples
//!
//! ```bash
//! # Generate icon modules from assets/svg into src/icons
//! icongen generate --source-dir assets/svg --output-dir src/icons
//!
//! # With template overrides and a custom worker bound
//! icongen generate --source-dir assets/svg --output-dir src/icons \
//!     --templates-dir templates --jobs 4
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use icongen_codegen::Pipeline;
use icongen_core::BuildConfig;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// SVG icon code generator.
///
/// Converts a directory tree of raw SVG icon files into generated
/// TypeScript source modules, an index module and a manifest module.
#[derive(Parser, Debug)]
#[command(name = "icongen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate icon modules, manifest and index from SVG sources.
    ///
    /// Expects per-theme subdirectories (fill, outline, twotone)
    /// under the source directory, each holding kebab-case `.svg`
    /// files. Previous output is cleared before generation.
    Generate {
        /// Directory containing per-theme SVG subdirectories
        #[arg(long, default_value = "svg")]
        source_dir: PathBuf,

        /// Directory receiving generated modules
        #[arg(long, default_value = "icons")]
        output_dir: PathBuf,

        /// Override path for the generated index module
        #[arg(long)]
        index_path: Option<PathBuf>,

        /// Override path for the generated manifest module
        #[arg(long)]
        manifest_path: Option<PathBuf>,

        /// Directory with template files overriding the built-ins
        #[arg(long)]
        templates_dir: Option<PathBuf>,

        /// Bound on concurrent per-icon tasks
        #[arg(long, default_value_t = 8)]
        jobs: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command).await {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
}

/// Initializes tracing with a level derived from the verbosity flag.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Executes the selected subcommand.
async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            source_dir,
            output_dir,
            index_path,
            manifest_path,
            templates_dir,
            jobs,
        } => {
            let mut config = BuildConfig::new(source_dir, output_dir);
            config.index_path = index_path;
            config.manifest_path = manifest_path;
            config.template_dir = templates_dir;
            config.concurrency = jobs;

            let report = Pipeline::new(config)?.run().await?;
            tracing::info!(
                "Done: {} icon modules, {} files written",
                report.icon_count,
                report.files_written
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_generate_defaults() {
        let cli = Cli::parse_from(["icongen", "generate"]);
        let Commands::Generate {
            source_dir,
            output_dir,
            jobs,
            ..
        } = cli.command;
        assert_eq!(source_dir, PathBuf::from("svg"));
        assert_eq!(output_dir, PathBuf::from("icons"));
        assert_eq!(jobs, 8);
    }

    #[test]
    fn test_cli_parsing_generate_custom() {
        let cli = Cli::parse_from([
            "icongen",
            "generate",
            "--source-dir",
            "assets/svg",
            "--output-dir",
            "src/icons",
            "--templates-dir",
            "tpl",
            "--jobs",
            "2",
        ]);
        let Commands::Generate {
            source_dir,
            templates_dir,
            jobs,
            ..
        } = cli.command;
        assert_eq!(source_dir, PathBuf::from("assets/svg"));
        assert_eq!(templates_dir, Some(PathBuf::from("tpl")));
        assert_eq!(jobs, 2);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["icongen", "--verbose", "generate"]);
        assert!(cli.verbose);
    }

    #[tokio::test]
    async fn test_run_generate_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let fill = dir.path().join("svg/fill");
        std::fs::create_dir_all(&fill).unwrap();
        std::fs::write(
            fill.join("home.svg"),
            r#"<svg viewBox="0 0 16 16"><path d="M0 0h8"/></svg>"#,
        )
        .unwrap();

        let command = Commands::Generate {
            source_dir: dir.path().join("svg"),
            output_dir: dir.path().join("out"),
            index_path: None,
            manifest_path: None,
            templates_dir: None,
            jobs: 2,
        };
        run(command).await.unwrap();
        assert!(dir.path().join("out/fill/HomeFill.ts").exists());
        assert!(dir.path().join("out/index.ts").exists());
        assert!(dir.path().join("out/manifest.ts").exists());
    }
}
