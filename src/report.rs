//! Markdown report rendering.
//!
//! The report layout is fixed:
//!
//! ```text
//! # Brew Analysis Report
//! ## Executive Summary          totals table
//! ## Cleanup Candidates         leaf libraries, or an all-clear line
//! ## Leaves (User Installed)    per category, alphabetical
//! ## Dependencies               per category, alphabetical
//! ## Casks (GUI Applications)   only when casks are installed
//! ---
//! ```
//!
//! Rendering is a pure function of the [`Analysis`], so identical inputs give
//! byte-identical output.

use crate::analysis::{Analysis, Package};
use crate::error::{DigestError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const TITLE: &str = "# Brew Analysis Report";
pub const FOOTER: &str = "*Report generated by brewdigest*";

/// Render the full report. Lines are joined with `\n`, no trailing newline.
pub fn render(analysis: &Analysis) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(TITLE.to_string());
    lines.push(String::new());
    lines.push("*Auto-generated analysis of installed Homebrew packages*".to_string());
    lines.push(String::new());

    render_summary(&mut lines, analysis);
    render_cleanup_candidates(&mut lines, &analysis.formulae.cleanup_candidates);

    lines.push("## Leaves (User Installed)".to_string());
    lines.push(String::new());
    lines.push(
        "These are packages you explicitly installed (not pulled in as dependencies):".to_string(),
    );
    lines.push(String::new());
    render_categories(&mut lines, &analysis.formulae.leaves_by_category(), true);

    lines.push("## Dependencies".to_string());
    lines.push(String::new());
    lines.push("These packages were installed automatically as dependencies:".to_string());
    lines.push(String::new());
    render_categories(&mut lines, &analysis.formulae.dependencies_by_category(), false);

    render_casks(&mut lines, analysis);

    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(FOOTER.to_string());

    lines.join("\n")
}

fn render_summary(lines: &mut Vec<String>, analysis: &Analysis) {
    let formulae = &analysis.formulae;

    lines.push("## Executive Summary".to_string());
    lines.push(String::new());
    lines.push("| Metric | Count |".to_string());
    lines.push("|--------|-------|".to_string());
    lines.push(format!("| **Total Formulae** | {} |", formulae.total()));
    lines.push(format!(
        "| **User-Installed (Leaves)** | {} |",
        formulae.leaf_count()
    ));
    lines.push(format!(
        "| **Dependencies** | {} |",
        formulae.dependency_count()
    ));
    lines.push(format!("| **Casks (GUI Apps)** | {} |", analysis.casks.len()));
    lines.push(format!(
        "| **Cleanup Candidates** | {} |",
        formulae.cleanup_candidates.len()
    ));
    lines.push(String::new());
}

fn render_cleanup_candidates(lines: &mut Vec<String>, candidates: &[Package]) {
    lines.push("## Cleanup Candidates".to_string());
    lines.push(String::new());

    if candidates.is_empty() {
        lines.push("✅ No suspicious packages found. Your setup looks clean!".to_string());
    } else {
        lines.push(
            "These are packages you explicitly installed that look like libraries (unusual for direct installation):"
                .to_string(),
        );
        lines.push(String::new());
        for pkg in candidates {
            lines.push(package_line(pkg, false));
        }
        lines.push(String::new());
        lines.push(
            "> **Note**: Review these before removing. They may be needed for development."
                .to_string(),
        );
    }
    lines.push(String::new());
}

fn render_categories(
    lines: &mut Vec<String>,
    groups: &BTreeMap<&'static str, Vec<&Package>>,
    with_homepage: bool,
) {
    for (category, pkgs) in groups {
        lines.push(format!("### {}", category));
        lines.push(String::new());
        for pkg in pkgs {
            lines.push(package_line(pkg, with_homepage));
        }
        lines.push(String::new());
    }
}

fn render_casks(lines: &mut Vec<String>, analysis: &Analysis) {
    if analysis.casks.is_empty() {
        return;
    }

    let mut casks: Vec<_> = analysis.casks.iter().collect();
    casks.sort_by(|a, b| a.token.cmp(&b.token));

    lines.push("## Casks (GUI Applications)".to_string());
    lines.push(String::new());
    for cask in casks {
        lines.push(format!(
            "- **{}** (`{}`): {}",
            cask.display_name, cask.token, cask.desc
        ));
    }
    lines.push(String::new());
}

/// `- **name** (vVERSION): desc`, optionally followed by ` [homepage]`
fn package_line(pkg: &Package, with_homepage: bool) -> String {
    let mut line = format!("- **{}** (v{}): {}", pkg.name, pkg.version, pkg.desc);
    if with_homepage && !pkg.homepage.is_empty() {
        line.push_str(&format!(" [{}]", pkg.homepage));
    }
    line
}

/// Write the report, replacing any existing file
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report).map_err(|source| DigestError::WriteReport {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {} bytes to {}", report.len(), path.display());
    Ok(())
}
