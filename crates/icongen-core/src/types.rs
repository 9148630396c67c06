//! The abstract icon data model.
//!
//! All entities here are immutable value data created and consumed
//! within a single build invocation; nothing is shared mutable state
//! across runs.

use crate::{Error, Result, ThemeType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Canonical icon base name (newtype over a kebab-case String).
///
/// Using a strong type prevents mixing raw filename stems with
/// validated identifiers; every `IconName` is guaranteed to be
/// non-empty kebab-case (`[a-z0-9]` segments joined by single dashes).
///
/// # Examples
///
/// ```
/// use icongen_core::IconName;
///
/// let name = IconName::parse("account-book").unwrap();
/// assert_eq!(name.as_str(), "account-book");
/// assert_eq!(name.to_pascal_case(), "AccountBook");
///
/// assert!(IconName::parse("Account Book").is_err());
/// assert!(IconName::parse("-leading").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IconName(String);

impl IconName {
    /// Parses and validates a kebab-case icon name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty, contains
    /// characters outside `[a-z0-9-]`, or has leading, trailing or
    /// doubled dashes.
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let reject = |reason: &str| Error::InvalidName {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(reject("name is empty"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(reject("only lowercase ascii, digits and '-' are allowed"));
        }
        if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
            return Err(reject("dashes must separate non-empty segments"));
        }

        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the kebab-case name to UpperCamelCase.
    ///
    /// # Examples
    ///
    /// ```
    /// use icongen_core::IconName;
    ///
    /// let name = IconName::parse("arrow-up").unwrap();
    /// assert_eq!(name.to_pascal_case(), "ArrowUp");
    /// ```
    #[must_use]
    pub fn to_pascal_case(&self) -> String {
        self.0
            .split('-')
            .map(|segment| {
                let mut chars = segment.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                }
            })
            .collect()
    }

    /// Derives the generated module identifier for this name under a
    /// theme: `UpperCamelCase(name) + themeSuffix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use icongen_core::{IconName, ThemeType};
    ///
    /// let name = IconName::parse("home").unwrap();
    /// assert_eq!(name.module_identifier(ThemeType::Twotone), "HomeTwoTone");
    /// ```
    #[must_use]
    pub fn module_identifier(&self, theme: ThemeType) -> String {
        self.to_pascal_case() + theme.identifier_suffix()
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for IconName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<IconName> for String {
    fn from(name: IconName) -> Self {
        name.0
    }
}

/// One markup element of an icon's drawable structure.
///
/// Invariants: `tag` is non-empty; `attrs` never contains an
/// absent-marker value — an absent attribute means the key is not
/// present. Attributes use a `BTreeMap` so serialization order is
/// deterministic regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractNode {
    /// Element tag name (e.g. `svg`, `path`)
    pub tag: String,
    /// Element attributes
    pub attrs: BTreeMap<String, String>,
    /// Child elements in document order
    #[serde(default)]
    pub children: Vec<AbstractNode>,
}

impl AbstractNode {
    /// Creates a new node with the given tag and no attributes or
    /// children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Returns `true` if any node in this subtree carries the given
    /// attribute.
    #[must_use]
    pub fn any_node_has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
            || self.children.iter().any(|c| c.any_node_has_attr(key))
    }
}

/// A materialized icon: an abstract tree tagged with its canonical
/// name and theme.
///
/// The `(name, theme)` pair is unique within one build run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDefinition {
    /// Canonical base identifier (kebab-case)
    pub name: IconName,
    /// Visual theme this definition belongs to
    pub theme: ThemeType,
    /// Drawable structure
    pub icon: AbstractNode,
}

/// Transient pairing of a generated module identifier and its icon.
///
/// Created per `(theme, name)` during materialization and consumed
/// immediately by the emitters; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTimeIconMeta {
    /// Generated module identifier, e.g. `HomeTwoTone`
    pub identifier: String,
    /// The materialized icon definition
    pub icon: IconDefinition,
}

/// Per-theme listing of the icon base names that exist on disk.
///
/// Each sequence follows the name normalizer's canonical ordering
/// filtered by per-theme existence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Names available in the fill theme
    pub fill: Vec<String>,
    /// Names available in the outline theme
    pub outline: Vec<String>,
    /// Names available in the twotone theme
    pub twotone: Vec<String>,
}

impl Manifest {
    /// Returns the name sequence for a theme.
    #[must_use]
    pub fn names(&self, theme: ThemeType) -> &[String] {
        match theme {
            ThemeType::Fill => &self.fill,
            ThemeType::Outline => &self.outline,
            ThemeType::Twotone => &self.twotone,
        }
    }

    /// Appends a name to a theme's sequence.
    pub fn push(&mut self, theme: ThemeType, name: &IconName) {
        let list = match theme {
            ThemeType::Fill => &mut self.fill,
            ThemeType::Outline => &mut self.outline,
            ThemeType::Twotone => &mut self.twotone,
        };
        list.push(name.as_str().to_string());
    }
}

/// One pending file write: the only unit the orchestrator writes.
///
/// No other disk mutation occurs outside the pre-run output clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFileMeta {
    /// Absolute target path
    pub path: PathBuf,
    /// Full file content
    pub content: String,
}
