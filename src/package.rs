//! Package records as reported by `brew info --json`.
//!
//! Every type here is a plain value: it is built once by [`crate::decode`] and
//! never mutated afterwards. Field names match the external JSON keys except
//! where a `rename` says otherwise.
//!
//! # Presence rules
//!
//! - Scalars that are missing or `null` take their zero value (`""`, `0`, `false`).
//! - Lists and maps that are missing or `null` are empty; a `null` list
//!   element becomes the element's default (`""` for strings).
//! - Fields typed `Option<String>` are `None` when missing or `null`.
//! - Keys not listed here are ignored.

use crate::serde_helpers::{null_as_default, null_elements_as_default};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Variant key under which Homebrew publishes the bottle for the stable spec
pub const STABLE_BOTTLE: &str = "stable";

/// One formula as reported by `brew info --json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Package {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Fully-qualified name, prefixed with `user/repo/` for tapped formulae
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub homepage: String,
    /// Name the formula was known by before a rename
    #[serde(default)]
    pub oldname: Option<String>,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub aliases: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Versions,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revision: i32,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub installed: Vec<InstalledVersion>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linked_keg: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pinned: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub outdated: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keg_only: bool,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub dependencies: Vec<String>,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub recommended_dependencies: Vec<String>,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub optional_dependencies: Vec<String>,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub build_dependencies: Vec<String>,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub conflicts_with: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caveats: String,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub requirements: Vec<Requirement>,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub options: Vec<BuildOption>,
    /// Bottle descriptors keyed by spec variant (usually just `"stable"`)
    #[serde(default, deserialize_with = "null_as_default")]
    pub bottle: BTreeMap<String, Bottle>,
}

impl Package {
    /// Tap (`user/repo`) the formula comes from, if it is not from the default tap.
    ///
    /// ```
    /// let pkg = brewinfo::Package {
    ///     name: "wercker-cli".to_string(),
    ///     full_name: "wercker/wercker/wercker-cli".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(pkg.tap(), Some("wercker/wercker"));
    /// ```
    pub fn tap(&self) -> Option<&str> {
        let (tap, _) = self.full_name.rsplit_once('/')?;
        (!tap.is_empty()).then_some(tap)
    }

    /// Whether any version of this formula is present in the Cellar
    pub fn is_installed(&self) -> bool {
        !self.installed.is_empty()
    }

    /// The installed entry currently linked into the prefix
    pub fn linked_install(&self) -> Option<&InstalledVersion> {
        if self.linked_keg.is_empty() {
            return None;
        }
        self.installed
            .iter()
            .find(|install| install.version == self.linked_keg)
    }

    /// Bottle descriptor for the stable spec
    pub fn stable_bottle(&self) -> Option<&Bottle> {
        self.bottle.get(STABLE_BOTTLE)
    }
}

/// Known version labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Versions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub stable: String,
    /// Whether a bottle exists for the stable version
    #[serde(default, deserialize_with = "null_as_default")]
    pub bottle: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub devel: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub head: String,
}

/// A keg present in the Cellar
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstalledVersion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub used_options: Vec<String>,
    /// The keg was built in a bottle-compatible way.
    ///
    /// Independent of `poured_from_bottle`: a keg can be bottle-capable and
    /// still have been compiled locally.
    #[serde(default, deserialize_with = "null_as_default")]
    pub built_as_bottle: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poured_from_bottle: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub installed_as_dependency: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub installed_on_request: bool,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub runtime_dependencies: Vec<RuntimeDependency>,
}

/// Runtime dependency recorded in the keg's install receipt
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuntimeDependency {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
}

/// Non-formula install requirement (e.g. a minimum macOS version)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Requirement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Formula that can satisfy the requirement
    #[serde(default)]
    pub default_formula: Option<String>,
    #[serde(default)]
    pub cask: Option<String>,
    #[serde(default)]
    pub download: Option<String>,
}

/// A `--with-x` / `--without-x` build switch
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BuildOption {
    #[serde(default, deserialize_with = "null_as_default")]
    pub option: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Precompiled binary release for one spec variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BottleFields")]
pub struct Bottle {
    /// Bottle rebuild number, unrelated to [`Package::revision`].
    ///
    /// Read from `option`; producers that omit it may publish `revision` or
    /// `rebuild` instead. The first of the three present wins.
    pub revision: i32,
    pub cellar: String,
    pub prefix: String,
    pub root_url: String,
    /// Downloads keyed by platform tag (`el_capitan`, `arm64_sonoma`, ...)
    pub files: BTreeMap<String, File>,
}

/// Wire shape of [`Bottle`], with each candidate revision key kept apart
#[derive(Deserialize)]
struct BottleFields {
    #[serde(default)]
    option: Option<i32>,
    #[serde(default)]
    revision: Option<i32>,
    #[serde(default)]
    rebuild: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    cellar: String,
    #[serde(default, deserialize_with = "null_as_default")]
    prefix: String,
    #[serde(default, deserialize_with = "null_as_default")]
    root_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    files: BTreeMap<String, File>,
}

impl From<BottleFields> for Bottle {
    fn from(fields: BottleFields) -> Self {
        Self {
            revision: fields
                .option
                .or(fields.revision)
                .or(fields.rebuild)
                .unwrap_or_default(),
            cellar: fields.cellar,
            prefix: fields.prefix,
            root_url: fields.root_url,
            files: fields.files,
        }
    }
}

impl Bottle {
    pub fn file(&self, tag: &str) -> Option<&File> {
        self.files.get(tag)
    }
}

/// A downloadable bottle archive
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct File {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Hex-encoded SHA-256 of the archive
    #[serde(default, deserialize_with = "null_as_default")]
    pub sha256: String,
}
