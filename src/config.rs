use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::link::LinkMarkers;

const LOCAL_CONFIG: &str = "orphan-docs.toml";

/// On-disk configuration. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub exclude_dirs: Option<Vec<String>>,
    #[serde(default)]
    pub open_marker: Option<String>,
    #[serde(default)]
    pub close_marker: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
}

/// Resolved settings handed to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub root: PathBuf,
    /// Directory names skipped by the inventory walk only.
    pub exclude_dirs: Vec<String>,
    pub markers: LinkMarkers,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("docs"),
            exclude_dirs: vec!["common".to_string()],
            markers: LinkMarkers::default(),
        }
    }
}

impl Config {
    /// Resolve against defaults. `root_override` wins over the file's `root`.
    pub fn resolve(self, root_override: Option<&Path>) -> Result<ScanConfig> {
        let defaults = ScanConfig::default();
        let markers = LinkMarkers {
            open: single_char("open_marker", self.open_marker, defaults.markers.open)?,
            close: single_char("close_marker", self.close_marker, defaults.markers.close)?,
            extension: self.extension.unwrap_or(defaults.markers.extension),
        };
        if markers.extension.is_empty() {
            anyhow::bail!("extension must not be empty");
        }
        let root = root_override
            .map(Path::to_path_buf)
            .or(self.root)
            .unwrap_or(defaults.root);
        Ok(ScanConfig {
            root,
            exclude_dirs: self.exclude_dirs.unwrap_or(defaults.exclude_dirs),
            markers,
        })
    }
}

fn single_char(field: &str, value: Option<String>, default: char) -> Result<char> {
    let Some(value) = value else {
        return Ok(default);
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => anyhow::bail!("{field} must be a single character, got {value:?}"),
    }
}

/// Load config from ./orphan-docs.toml, then ~/.config/orphan-docs/config.toml,
/// or return defaults.
pub fn load() -> Result<Config> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return load_from(&local);
    }
    let global = config_path();
    if global.exists() {
        return load_from(&global);
    }
    Ok(Config::default())
}

pub fn load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

fn config_path() -> PathBuf {
    dirs_config_dir().join("orphan-docs").join("config.toml")
}

fn dirs_config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
}
