//! Configuration file support for pydepgraph.
//!
//! Provides YAML-based configuration through `pydepgraph.config.yml` files,
//! including data structures, file loading, and validation. Command-line
//! options always win over values from the file.

use anyhow::{bail, Context};
use pydepgraph::application::dto::SourceKind;
use pydepgraph::graph_resolution::domain::FigureSize;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pydepgraph::shared::Result;

pub const CONFIG_FILENAME: &str = "pydepgraph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub cache_file: Option<PathBuf>,
    pub source: Option<String>,
    pub index_url: Option<String>,
    pub python: Option<PathBuf>,
    /// Canvas size in inches as `[width, height]`
    pub figsize: Option<Vec<f64>>,
    /// Label nodes with package sizes
    pub sizes: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured metadata source, if any. Only call after validation.
    pub fn source_kind(&self) -> Option<SourceKind> {
        self.source.as_deref().and_then(|s| s.parse().ok())
    }

    /// The configured figure size, if any. Only call after validation.
    pub fn figure_size(&self) -> Option<FigureSize> {
        match self.figsize.as_deref() {
            Some([width, height]) => FigureSize::new(*width, *height).ok(),
            _ => None,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null, which means "no settings"
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref source) = config.source {
        if let Err(e) = source.parse::<SourceKind>() {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref index_url) = config.index_url {
        if !(index_url.starts_with("https://") || index_url.starts_with("http://")) {
            bail!(
                "Invalid config: index_url must start with http:// or https:// (got '{}').",
                index_url
            );
        }
    }

    if let Some(ref figsize) = config.figsize {
        let valid = matches!(
            figsize.as_slice(),
            [w, h] if w.is_finite() && h.is_finite() && *w > 0.0 && *h > 0.0
        );
        if !valid {
            bail!(
                "Invalid config: figsize must be two positive numbers.\n\n\
                 💡 Hint: Use e.g. `figsize: [20, 10]` for a 20x10 inch canvas."
            );
        }
    }

    if let Some(ref cache_file) = config.cache_file {
        if cache_file.as_os_str().is_empty() {
            bail!("Invalid config: cache_file must not be empty.");
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
