//! Theme-specific post-processing of materialized icons.

use icongen_core::{IconDefinition, ThemeType};

/// Placeholder fill assigned to twotone path nodes and later rewritten
/// to the `primaryColor` parameter by the dual-tone emitter.
pub const PRIMARY_COLOR_PLACEHOLDER: &str = "#333";

/// Secondary color literals recognized by the dual-tone emitter.
/// Distinct literal strings, all mapped to the `secondaryColor`
/// parameter.
pub const SECONDARY_COLOR_PLACEHOLDERS: [&str; 3] = ["#E6E6E6", "#D9D9D9", "#D8D8D8"];

/// Applies theme-specific fixups, returning an independent copy.
///
/// Only twotone icons are modified: every immediate `path` child
/// missing a `fill` attribute is assigned the primary-color
/// placeholder. Some source assets omit an explicit fill expecting a
/// default, and the dual-tone color substitution requires every
/// twotone path to carry an explicit, recognized placeholder. Other
/// themes pass through unchanged.
///
/// # Examples
///
/// ```
/// use icongen_codegen::fixup::{apply_theme_fixup, PRIMARY_COLOR_PLACEHOLDER};
/// use icongen_core::{AbstractNode, IconDefinition, IconName, ThemeType};
///
/// let mut icon = AbstractNode::new("svg");
/// icon.children.push(AbstractNode::new("path"));
///
/// let definition = IconDefinition {
///     name: IconName::parse("home").unwrap(),
///     theme: ThemeType::Twotone,
///     icon,
/// };
/// let fixed = apply_theme_fixup(&definition);
/// assert_eq!(
///     fixed.icon.children[0].attrs["fill"],
///     PRIMARY_COLOR_PLACEHOLDER
/// );
/// // The input is untouched.
/// assert!(!definition.icon.children[0].attrs.contains_key("fill"));
/// ```
#[must_use]
pub fn apply_theme_fixup(definition: &IconDefinition) -> IconDefinition {
    let mut fixed = definition.clone();
    if fixed.theme != ThemeType::Twotone {
        return fixed;
    }

    for child in &mut fixed.icon.children {
        if child.tag == "path" && !child.attrs.contains_key("fill") {
            child
                .attrs
                .insert("fill".to_string(), PRIMARY_COLOR_PLACEHOLDER.to_string());
        }
    }
    fixed
}
