//! Directory walks and the unreferenced-page diff.
//!
//! Two independent walks run over the same root. The inventory walk skips
//! excluded directory names; the reference walk does not, so links written
//! inside an excluded directory still count even though the pages living
//! there are not inventoried.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::link::LinkMarkers;

/// Result of one scan. All three sets hold bare file names.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub inventory: BTreeSet<String>,
    pub references: BTreeSet<String>,
    pub unreferenced: BTreeSet<String>,
}

/// Run the full pipeline: inventory walk, reference walk, diff.
pub fn scan(config: &ScanConfig) -> Result<ScanReport> {
    if !config.root.is_dir() {
        anyhow::bail!("root directory not found: {}", config.root.display());
    }

    let inventory = collect_inventory(&config.root, &config.exclude_dirs, &config.markers)?;
    let references = collect_references(&config.root, &config.markers)?;
    let unreferenced = compute_unreferenced(&inventory, &references);

    info!(
        root = %config.root.display(),
        inventory = inventory.len(),
        references = references.len(),
        unreferenced = unreferenced.len(),
        "scan complete"
    );

    Ok(ScanReport {
        inventory,
        references,
        unreferenced,
    })
}

/// Bare names of every markdown file under `root`, skipping subdirectories
/// named in `exclude_dirs`.
pub fn collect_inventory(
    root: &Path,
    exclude_dirs: &[String],
    markers: &LinkMarkers,
) -> Result<BTreeSet<String>> {
    let mut inventory = BTreeSet::new();
    walk(
        root,
        |name| exclude_dirs.iter().any(|d| d == name),
        |_path, name| {
            if markers.is_markdown(name) {
                inventory.insert(name.to_string());
            }
            Ok(())
        },
    )?;
    Ok(inventory)
}

/// Bare names of every markdown page linked from any markdown file under
/// `root`. Every subdirectory is visited.
pub fn collect_references(root: &Path, markers: &LinkMarkers) -> Result<BTreeSet<String>> {
    let mut references = BTreeSet::new();
    walk(
        root,
        |_name| false,
        |path, name| {
            if markers.is_markdown(name) {
                references_in_file(path, markers, &mut references)?;
            }
            Ok(())
        },
    )?;
    Ok(references)
}

/// `inventory - references`.
pub fn compute_unreferenced(
    inventory: &BTreeSet<String>,
    references: &BTreeSet<String>,
) -> BTreeSet<String> {
    inventory.difference(references).cloned().collect()
}

fn references_in_file(
    path: &Path,
    markers: &LinkMarkers,
    references: &mut BTreeSet<String>,
) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let before = references.len();
    // Lines end at `\n`, `\r\n` or a lone `\r`.
    for line in content.split(['\n', '\r']) {
        if let Some(target) = markers.extract_link_target(line) {
            references.insert(target.to_string());
        }
    }
    debug!(
        file = %path.display(),
        new_references = references.len() - before,
        "scanned"
    );
    Ok(())
}

/// Walk `root`, calling `visit` with the path and file name of every
/// non-directory entry. Subdirectories for which `skip_dir` returns true are
/// not entered. Symlinks are followed; a symlink back to an ancestor is
/// skipped.
fn walk<S, V>(root: &Path, skip_dir: S, mut visit: V) -> Result<()>
where
    S: Fn(&str) -> bool,
    V: FnMut(&Path, &str) -> Result<()>,
{
    let entries = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            let excluded = e.depth() > 0
                && e.file_type().is_dir()
                && skip_dir(&*e.file_name().to_string_lossy());
            if excluded {
                debug!(dir = %e.path().display(), "excluded");
            }
            !excluded
        });

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.loop_ancestor().is_some() => {
                debug!(path = ?err.path(), "symlink loop, skipping");
                continue;
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                return Err(err).with_context(|| format!("failed to walk {}", path.display()));
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        visit(entry.path(), &*entry.file_name().to_string_lossy())?;
    }
    Ok(())
}
