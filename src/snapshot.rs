//! Loading the installed-package snapshot and the leaf list.
//!
//! The snapshot is the document printed by `brew info --json=v2 --installed`:
//!
//! ```text
//! {
//!   "formulae": [ { "name", "desc", "homepage", "installed": [ { "version", "installed_on_request" } ] } ],
//!   "casks":    [ { "token", "name": [..], "desc", "homepage" } ]
//! }
//! ```
//!
//! Only the fields used by the report are modelled; everything else Homebrew
//! emits is ignored. Homebrew writes `null` for absent descriptions and
//! homepages, so every field tolerates both a missing key and an explicit
//! `null`.
//!
//! The leaf list is the plaintext output of `brew leaves`, one name per line.
//!
//! # Examples
//!
//! ```no_run
//! use brewdigest::snapshot;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let (snapshot, leaves) =
//!         snapshot::load(Path::new("brew_data.json"), Path::new("brew_leaves.txt"))?;
//!     println!("{} formulae, {} leaves", snapshot.formulae.len(), leaves.len());
//!     Ok(())
//! }
//! ```

use crate::error::{DigestError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Treat an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One keg of an installed formula
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstalledVersion {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub installed_on_request: bool,
}

/// Installed formula metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Formula {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub installed: Vec<InstalledVersion>,
}

impl Formula {
    /// The most recent installation record, if any
    pub fn latest_install(&self) -> Option<&InstalledVersion> {
        self.installed.last()
    }
}

/// Installed cask metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cask {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: Vec<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
}

/// Everything installed, as reported by Homebrew
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub formulae: Vec<Formula>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub casks: Vec<Cask>,
}

impl Snapshot {
    /// Parse a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file. Missing or malformed files are errors.
    pub fn read(path: &Path) -> Result<Self> {
        tracing::debug!("Reading brew snapshot from {}", path.display());

        let json = fs::read_to_string(path).map_err(|source| DigestError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| DigestError::ParseSnapshot {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Names the user explicitly asked for (`brew leaves`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafSet {
    names: BTreeSet<String>,
}

impl LeafSet {
    /// Build a leaf set from `brew leaves` output.
    ///
    /// Lines are trimmed and blank lines skipped.
    pub fn parse(text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    /// Read a leaf list. A missing file is an empty set, not an error.
    pub fn read(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let leaves = Self::parse(&text);
                tracing::debug!("Read {} leaves from {}", leaves.len(), path.display());
                Ok(leaves)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No leaf list at {}, assuming none", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(DigestError::ReadInput {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// True if `name` is listed, or appears inside any listed entry.
    ///
    /// The substring rule lets tap-qualified entries such as
    /// `homebrew/core/ripgrep` mark `ripgrep` as a leaf.
    pub fn matches(&self, name: &str) -> bool {
        self.names.contains(name) || self.names.iter().any(|leaf| leaf.contains(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LeafSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Load both inputs for a report run
pub fn load(data_path: &Path, leaves_path: &Path) -> Result<(Snapshot, LeafSet)> {
    let snapshot = Snapshot::read(data_path)?;
    let leaves = LeafSet::read(leaves_path)?;
    Ok((snapshot, leaves))
}
