//! Formula classification and cask summaries.
//!
//! Turns the raw [`Snapshot`] records into report-ready rows: missing fields
//! are defaulted, each formula gets a [`Category`] and a leaf flag, and leaf
//! libraries are collected as cleanup candidates.

use crate::category::{Category, categorize};
use crate::snapshot::{Cask, Formula, LeafSet, Snapshot};
use std::collections::BTreeMap;

pub const UNKNOWN_NAME: &str = "unknown";
pub const NO_DESCRIPTION: &str = "No description available";
pub const UNKNOWN_VERSION: &str = "?";

/// A classified formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub desc: String,
    /// Empty when the formula has no homepage
    pub homepage: String,
    /// Listed in `brew leaves` or installed on request
    pub is_leaf: bool,
    pub installed_on_request: bool,
    pub category: Category,
}

impl Package {
    /// Classify a single formula against the leaf list
    pub fn from_formula(formula: &Formula, leaves: &LeafSet) -> Self {
        let name = formula.name.as_deref().unwrap_or(UNKNOWN_NAME).to_string();
        let desc = formula.desc.as_deref().unwrap_or(NO_DESCRIPTION).to_string();
        let homepage = formula.homepage.clone().unwrap_or_default();

        let latest = formula.latest_install();
        let version = latest
            .and_then(|keg| keg.version.clone())
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
        let installed_on_request = latest.is_some_and(|keg| keg.installed_on_request);

        let is_leaf = leaves.matches(&name) || installed_on_request;
        let category = categorize(&name, &desc);

        Self {
            name,
            version,
            desc,
            homepage,
            is_leaf,
            installed_on_request,
            category,
        }
    }

    /// A leaf that looks like a library is unusual to install directly
    pub fn is_cleanup_candidate(&self) -> bool {
        self.is_leaf && self.category == Category::Libraries
    }
}

/// Display fields for an installed cask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaskSummary {
    pub token: String,
    pub display_name: String,
    pub desc: String,
    pub homepage: String,
}

impl CaskSummary {
    pub fn from_cask(cask: &Cask) -> Self {
        let token = cask.token.as_deref().unwrap_or(UNKNOWN_NAME).to_string();
        let display_name = cask.name.first().cloned().unwrap_or_else(|| token.clone());

        Self {
            display_name,
            desc: cask.desc.as_deref().unwrap_or(NO_DESCRIPTION).to_string(),
            homepage: cask.homepage.clone().unwrap_or_default(),
            token,
        }
    }
}

/// Result of classifying every formula in a snapshot
#[derive(Debug, Clone, Default)]
pub struct FormulaAnalysis {
    /// All formulae, in snapshot order
    pub packages: Vec<Package>,
    /// Leaf libraries, in snapshot order
    pub cleanup_candidates: Vec<Package>,
}

impl FormulaAnalysis {
    pub fn total(&self) -> usize {
        self.packages.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.packages.iter().filter(|pkg| pkg.is_leaf).count()
    }

    pub fn dependency_count(&self) -> usize {
        self.total() - self.leaf_count()
    }

    /// Packages grouped by category heading, headings in alphabetical order.
    ///
    /// Only categories with at least one package matching `filter` appear.
    /// Packages within a category are sorted by name; equal names keep
    /// snapshot order.
    pub fn grouped<F>(&self, filter: F) -> BTreeMap<&'static str, Vec<&Package>>
    where
        F: Fn(&Package) -> bool,
    {
        let mut groups: BTreeMap<&'static str, Vec<&Package>> = BTreeMap::new();
        for pkg in self.packages.iter().filter(|&pkg| filter(pkg)) {
            groups.entry(pkg.category.name()).or_default().push(pkg);
        }
        for pkgs in groups.values_mut() {
            pkgs.sort_by(|a, b| a.name.cmp(&b.name));
        }
        groups
    }

    /// Leaves grouped by category
    pub fn leaves_by_category(&self) -> BTreeMap<&'static str, Vec<&Package>> {
        self.grouped(|pkg| pkg.is_leaf)
    }

    /// Dependencies grouped by category
    pub fn dependencies_by_category(&self) -> BTreeMap<&'static str, Vec<&Package>> {
        self.grouped(|pkg| !pkg.is_leaf)
    }
}

/// Classify every formula, collecting cleanup candidates along the way
pub fn analyze_formulae(formulae: &[Formula], leaves: &LeafSet) -> FormulaAnalysis {
    let mut analysis = FormulaAnalysis::default();

    for formula in formulae {
        let pkg = Package::from_formula(formula, leaves);
        if pkg.is_cleanup_candidate() {
            analysis.cleanup_candidates.push(pkg.clone());
        }
        analysis.packages.push(pkg);
    }

    tracing::debug!(
        "Classified {} formulae ({} leaves, {} cleanup candidates)",
        analysis.total(),
        analysis.leaf_count(),
        analysis.cleanup_candidates.len()
    );

    analysis
}

/// Summarize casks in snapshot order
pub fn analyze_casks(casks: &[Cask]) -> Vec<CaskSummary> {
    let summaries: Vec<_> = casks.iter().map(CaskSummary::from_cask).collect();
    tracing::debug!("Summarized {} casks", summaries.len());
    summaries
}

/// Everything the report needs
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub formulae: FormulaAnalysis,
    pub casks: Vec<CaskSummary>,
}

impl Analysis {
    pub fn new(snapshot: &Snapshot, leaves: &LeafSet) -> Self {
        Self {
            formulae: analyze_formulae(&snapshot.formulae, leaves),
            casks: analyze_casks(&snapshot.casks),
        }
    }
}
