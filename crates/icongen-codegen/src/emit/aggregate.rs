//! Aggregate emitters: the index and manifest modules.
//!
//! Both are derived from the one completed collection of materialized
//! icons, never from a stream, so their ordering only depends on the
//! fixed theme order and the canonical name order.

use crate::format::Formatter;
use crate::template_engine::TemplateEngine;
use icongen_core::{BuildTimeIconMeta, Error, Manifest, Result};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Serialize)]
struct IndexContext {
    export_lines: String,
}

#[derive(Debug, Serialize)]
struct ManifestContext {
    manifest_json: String,
}

/// Renders the index module: one re-export line per materialized icon,
/// in the order of `metas` (theme order, then canonical name order),
/// each referencing `./{theme}/{identifier}`.
///
/// # Errors
///
/// Returns [`Error::Template`] on rendering failure or
/// [`Error::Format`] if the assembled module fails reformatting.
pub fn emit_index_module(
    engine: &TemplateEngine<'_>,
    formatter: &dyn Formatter,
    metas: &[BuildTimeIconMeta],
) -> Result<String> {
    let mut export_lines = String::new();
    for meta in metas {
        let _ = writeln!(
            export_lines,
            "export {{ default as {id} }} from './{theme}/{id}';",
            id = meta.identifier,
            theme = meta.icon.theme.as_str(),
        );
    }

    let rendered = engine.render(
        TemplateEngine::INDEX,
        &IndexContext {
            export_lines: export_lines.trim_end().to_string(),
        },
    )?;
    formatter
        .format(&rendered)
        .map_err(|message| Error::Format {
            identifier: "index".to_string(),
            message,
        })
}

/// Assembles the manifest from the completed materialized collection.
///
/// `metas` must already be in theme-then-canonical-name order; each
/// theme's name sequence then automatically matches the normalizer's
/// canonical ordering filtered by per-theme existence.
#[must_use]
pub fn build_manifest(metas: &[BuildTimeIconMeta]) -> Manifest {
    let mut manifest = Manifest::default();
    for meta in metas {
        manifest.push(meta.icon.theme, &meta.icon.name);
    }
    manifest
}

/// Renders the manifest module.
///
/// # Errors
///
/// Returns [`Error::Template`], [`Error::Serialization`] or
/// [`Error::Format`] as the respective step fails.
pub fn emit_manifest_module(
    engine: &TemplateEngine<'_>,
    formatter: &dyn Formatter,
    manifest: &Manifest,
) -> Result<String> {
    let manifest_json =
        serde_json::to_string_pretty(manifest).map_err(|err| Error::Serialization {
            message: err.to_string(),
        })?;

    let rendered = engine.render(TemplateEngine::MANIFEST, &ManifestContext { manifest_json })?;
    formatter
        .format(&rendered)
        .map_err(|message| Error::Format {
            identifier: "manifest".to_string(),
            message,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::TsFormatter;
    use icongen_core::{AbstractNode, IconDefinition, IconName, ThemeType};

    fn meta(name: &str, theme: ThemeType) -> BuildTimeIconMeta {
        let name = IconName::parse(name).unwrap();
        BuildTimeIconMeta {
            identifier: name.module_identifier(theme),
            icon: IconDefinition {
                name,
                theme,
                icon: AbstractNode::new("svg"),
            },
        }
    }

    fn scenario_metas() -> Vec<BuildTimeIconMeta> {
        vec![
            meta("home", ThemeType::Fill),
            meta("user", ThemeType::Fill),
            meta("home", ThemeType::Twotone),
        ]
    }

    #[test]
    fn test_index_lines_and_order() {
        let engine = TemplateEngine::new().unwrap();
        let module = emit_index_module(&engine, &TsFormatter, &scenario_metas()).unwrap();

        let lines: Vec<&str> = module
            .lines()
            .filter(|l| l.starts_with("export"))
            .collect();
        assert_eq!(
            lines,
            [
                "export { default as HomeFill } from './fill/HomeFill';",
                "export { default as UserFill } from './fill/UserFill';",
                "export { default as HomeTwoTone } from './twotone/HomeTwoTone';",
            ]
        );
    }

    #[test]
    fn test_index_empty_collection() {
        let engine = TemplateEngine::new().unwrap();
        let module = emit_index_module(&engine, &TsFormatter, &[]).unwrap();
        assert!(!module.contains("export {"));
    }

    #[test]
    fn test_build_manifest_per_theme() {
        let manifest = build_manifest(&scenario_metas());
        assert_eq!(manifest.fill, ["home", "user"]);
        assert!(manifest.outline.is_empty());
        assert_eq!(manifest.twotone, ["home"]);
    }

    #[test]
    fn test_manifest_module_content() {
        let engine = TemplateEngine::new().unwrap();
        let manifest = build_manifest(&scenario_metas());
        let module = emit_manifest_module(&engine, &TsFormatter, &manifest).unwrap();

        assert!(module.contains("const manifest ="));
        assert!(module.contains("export default manifest;"));

        let start = module.find("= {").unwrap() + 2;
        let end = module.rfind('}').unwrap() + 1;
        let parsed: Manifest = serde_json::from_str(&module[start..end]).unwrap();
        assert_eq!(parsed, manifest);
    }
}
