//! Per-icon module emitter.

use crate::fixup::{PRIMARY_COLOR_PLACEHOLDER, SECONDARY_COLOR_PLACEHOLDERS};
use crate::format::Formatter;
use crate::template_engine::TemplateEngine;
use icongen_core::{BuildTimeIconMeta, Error, Result, ThemeType};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct IconContext<'a> {
    identifier: &'a str,
    icon_json: String,
}

#[derive(Debug, Serialize)]
struct TwotoneContext<'a> {
    identifier: &'a str,
    name: &'a str,
    theme: &'a str,
    icon_body: String,
}

/// Renders one icon into a source-module string.
///
/// Single-tone icons serialize the whole definition into the JSON-data
/// slot of the single-tone template. Dual-tone icons serialize only
/// the drawable tree, rewrite the recognized placeholder color
/// literals into the `primaryColor`/`secondaryColor` function
/// parameters, and splice the resulting function body together with
/// name and theme into the dual-tone template. Every rendered module
/// is reformatted before being returned.
///
/// # Errors
///
/// Returns [`Error::Template`] on rendering failure,
/// [`Error::Serialization`] if the definition does not serialize, and
/// [`Error::Format`] tagged with the module identifier if the
/// generated source fails reformatting.
pub fn emit_icon_module(
    engine: &TemplateEngine<'_>,
    formatter: &dyn Formatter,
    meta: &BuildTimeIconMeta,
) -> Result<String> {
    let rendered = if meta.icon.theme == ThemeType::Twotone {
        let icon_json = to_json(&meta.icon.icon)?;
        let context = TwotoneContext {
            identifier: &meta.identifier,
            name: meta.icon.name.as_str(),
            theme: meta.icon.theme.as_str(),
            icon_body: substitute_color_literals(&icon_json),
        };
        engine.render(TemplateEngine::ICON_TWOTONE, &context)?
    } else {
        let context = IconContext {
            identifier: &meta.identifier,
            icon_json: to_json(&meta.icon)?,
        };
        engine.render(TemplateEngine::ICON, &context)?
    };

    formatter
        .format(&rendered)
        .map_err(|message| Error::Format {
            identifier: meta.identifier.clone(),
            message,
        })
}

/// Rewrites the fixed set of recognized color literals in serialized
/// icon JSON into function parameter references.
///
/// The substitution is purely textual and only recognizes the exact
/// quoted literal strings; any other color literal passes through
/// unchanged. This is a documented limitation of the dual-tone
/// emitter, locked in by the test suite.
pub(crate) fn substitute_color_literals(json: &str) -> String {
    let mut out = json.replace(
        &format!("\"{PRIMARY_COLOR_PLACEHOLDER}\""),
        "primaryColor",
    );
    for literal in SECONDARY_COLOR_PLACEHOLDERS {
        out = out.replace(&format!("\"{literal}\""), "secondaryColor");
    }
    out
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|err| Error::Serialization {
        message: err.to_string(),
    })
}
