//! Template engine for module generation using Handlebars.
//!
//! Wraps Handlebars with the four built-in templates (single-tone
//! icon, dual-tone icon, index, manifest) pre-registered. Each
//! template can be overridden by a file of the same name in a
//! configured template directory.
//!
//! # Examples
//!
//! ```
//! use icongen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({
//!     "identifier": "HomeFill",
//!     "icon_json": "{}",
//! });
//! let rendered = engine.render(TemplateEngine::ICON, &context).unwrap();
//! assert!(rendered.contains("HomeFill"));
//! ```

use handlebars::Handlebars;
use icongen_core::{Error, Result};
use serde::Serialize;
use std::path::Path;

/// Template engine for generated icon modules.
///
/// # Thread Safety
///
/// `Send` and `Sync`; safe to share across materialization tasks as a
/// read-only resource.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Name of the single-tone icon module template.
    pub const ICON: &'static str = "icon";
    /// Name of the dual-tone icon module template.
    pub const ICON_TWOTONE: &'static str = "icon-twotone";
    /// Name of the index module template.
    pub const INDEX: &'static str = "index";
    /// Name of the manifest module template.
    pub const MANIFEST: &'static str = "manifest";

    const BUILT_IN: [(&'static str, &'static str); 4] = [
        (Self::ICON, include_str!("../templates/icon.ts.hbs")),
        (
            Self::ICON_TWOTONE,
            include_str!("../templates/icon-twotone.ts.hbs"),
        ),
        (Self::INDEX, include_str!("../templates/index.ts.hbs")),
        (Self::MANIFEST, include_str!("../templates/manifest.ts.hbs")),
    ];

    /// Creates a new engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not
    /// happen with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        for (name, source) in Self::BUILT_IN {
            handlebars
                .register_template_string(name, source)
                .map_err(|err| Error::Template {
                    name: name.to_string(),
                    message: format!("failed to register built-in template: {err}"),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Loads template overrides from a directory.
    ///
    /// For each known template name, a file `{name}.ts.hbs` in `dir`
    /// replaces the built-in template; missing files keep the
    /// built-in. This is the whole contract of the template-file
    /// loading collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if an override file exists but is
    /// unreadable or not valid Handlebars.
    pub fn load_overrides(&mut self, dir: &Path) -> Result<()> {
        for (name, _) in Self::BUILT_IN {
            let path = dir.join(format!("{name}.ts.hbs"));
            if !path.exists() {
                continue;
            }
            self.handlebars
                .register_template_file(name, &path)
                .map_err(|err| Error::Template {
                    name: name.to_string(),
                    message: format!("failed to load override {}: {err}", path.display()),
                })?;
            tracing::debug!("Loaded template override: {}", path.display());
        }
        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if the template is unknown, the
    /// context does not serialize, or rendering fails.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|err| Error::Template {
                name: template_name.to_string(),
                message: format!("rendering failed: {err}"),
            })
    }
}
