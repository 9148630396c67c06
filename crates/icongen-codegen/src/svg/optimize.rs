//! SVG markup optimizer.
//!
//! A deliberately small optimizer: it parses the raw markup with
//! `roxmltree`, drops non-drawable elements and editor metadata
//! attributes, optionally strips `fill` attributes, and re-serializes
//! minimal markup. Comments and processing instructions disappear as a
//! side effect of walking elements only.

use icongen_core::{Error, OptimizerOptions, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Elements that carry no drawable structure and are dropped outright.
const DROPPED_ELEMENTS: [&str; 5] = ["title", "desc", "metadata", "style", "script"];

/// Attributes dropped from every element.
const DROPPED_ATTRS: [&str; 4] = ["class", "style", "id", "version"];

/// SVG optimizer configured for one theme's requirements.
///
/// # Examples
///
/// ```
/// use icongen_codegen::svg::Optimizer;
/// use icongen_core::{OptimizerOptions, ThemeType};
/// use std::path::Path;
///
/// let base = OptimizerOptions::default();
/// let optimizer = Optimizer::for_theme(&base, ThemeType::Fill);
/// let out = optimizer
///     .optimize(Path::new("home.svg"), r##"<svg fill="#000"><path d="M0 0h8"/></svg>"##)
///     .unwrap();
/// assert!(!out.contains("fill"));
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer {
    options: OptimizerOptions,
}

impl Optimizer {
    /// Creates an optimizer with explicit options.
    #[must_use]
    pub fn new(options: OptimizerOptions) -> Self {
        Self { options }
    }

    /// Creates the optimizer variant for a theme.
    ///
    /// Single-color themes (fill, outline) get a variant that strips
    /// every `fill` attribute; these themes convey color purely
    /// through CSS/`currentColor`. Twotone uses the configured options
    /// unchanged since it legitimately carries baked color values.
    #[must_use]
    pub fn for_theme(base: &OptimizerOptions, theme: icongen_core::ThemeType) -> Self {
        if theme.is_single_color() {
            Self::new(base.for_single_color())
        } else {
            Self::new(base.clone())
        }
    }

    /// Optimizes raw SVG markup into minimal normalized markup.
    ///
    /// `path` is only used to tag errors with the offending file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Optimize`] if the markup is not well-formed
    /// XML or has no element content.
    pub fn optimize(&self, path: &Path, raw: &str) -> Result<String> {
        let doc = roxmltree::Document::parse(raw).map_err(|err| Error::Optimize {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        let mut out = String::with_capacity(raw.len());
        self.write_element(&mut out, doc.root_element());
        Ok(out)
    }

    fn write_element(&self, out: &mut String, node: roxmltree::Node<'_, '_>) {
        let tag = node.tag_name().name();
        let _ = write!(out, "<{tag}");

        for attr in node.attributes() {
            // Namespaced attributes (xml:space, xlink:href, ...) are
            // editor or linking metadata the abstract tree never uses.
            if attr.namespace().is_some() {
                continue;
            }
            let name = attr.name();
            if DROPPED_ATTRS.contains(&name) {
                continue;
            }
            if self.options.strip_fill && name == "fill" {
                continue;
            }
            let _ = write!(out, " {name}=\"{}\"", escape_attr(attr.value()));
        }

        let children: Vec<_> = node
            .children()
            .filter(|c| c.is_element() && !DROPPED_ELEMENTS.contains(&c.tag_name().name()))
            .collect();

        if children.is_empty() {
            out.push_str("/>");
        } else {
            out.push('>');
            for child in children {
                self.write_element(out, child);
            }
            let _ = write!(out, "</{tag}>");
        }
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use icongen_core::ThemeType;

    fn optimize(options: OptimizerOptions, raw: &str) -> String {
        Optimizer::new(options)
            .optimize(Path::new("test.svg"), raw)
            .unwrap()
    }

    #[test]
    fn test_drops_comments_and_metadata() {
        let raw = r#"<svg viewBox="0 0 16 16"><!-- editor --><title>x</title><path d="M0 0"/></svg>"#;
        let out = optimize(OptimizerOptions::default(), raw);
        assert_eq!(out, r#"<svg viewBox="0 0 16 16"><path d="M0 0"/></svg>"#);
    }

    #[test]
    fn test_drops_editor_attributes() {
        let raw = r#"<svg class="icon" id="i1" version="1.1" viewBox="0 0 16 16"/>"#;
        let out = optimize(OptimizerOptions::default(), raw);
        assert_eq!(out, r#"<svg viewBox="0 0 16 16"/>"#);
    }

    #[test]
    fn test_strip_fill_removes_every_fill() {
        let raw = r##"<svg fill="#000"><g fill="#111"><path fill="#222" d="M0 0"/></g></svg>"##;
        let out = optimize(OptimizerOptions { strip_fill: true }, raw);
        assert!(!out.contains("fill"));
        assert!(out.contains(r#"d="M0 0""#));
    }

    #[test]
    fn test_twotone_keeps_fill() {
        let raw = r##"<svg><path fill="#E6E6E6" d="M0 0"/></svg>"##;
        let optimizer = Optimizer::for_theme(&OptimizerOptions::default(), ThemeType::Twotone);
        let out = optimizer.optimize(Path::new("t.svg"), raw).unwrap();
        assert!(out.contains(r##"fill="#E6E6E6""##));
    }

    #[test]
    fn test_single_color_theme_forces_strip() {
        let optimizer = Optimizer::for_theme(&OptimizerOptions::default(), ThemeType::Outline);
        let out = optimizer
            .optimize(Path::new("t.svg"), r##"<svg><path fill="#000" d="M1 1"/></svg>"##)
            .unwrap();
        assert!(!out.contains("fill"));
    }

    #[test]
    fn test_malformed_markup_is_fatal() {
        let err = Optimizer::new(OptimizerOptions::default())
            .optimize(Path::new("bad.svg"), "<svg><path></svg>")
            .unwrap_err();
        assert!(err.is_optimize_error());
        assert!(format!("{err}").contains("bad.svg"));
    }

    #[test]
    fn test_attr_values_are_escaped() {
        let raw = r#"<svg aria-label="a&amp;b"/>"#;
        let out = optimize(OptimizerOptions::default(), raw);
        assert_eq!(out, r#"<svg aria-label="a&amp;b"/>"#);
    }
}
