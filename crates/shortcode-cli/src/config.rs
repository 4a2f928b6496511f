//! Config file loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use shortcode_core::{FieldTypeSpec, ShortcodeCatalog};
use shortcode_ui::IdParsing;

/// Address `serve` listens on when neither the config nor `--bind` sets one.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Contents of the JSON config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Field type overrides, merged over the built-in table.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldTypeSpec>,

    /// Shortcodes and their attributes.
    #[serde(default)]
    pub shortcodes: ShortcodeCatalog,

    /// How hydration parses id lists.
    #[serde(default)]
    pub id_parsing: IdParsing,

    /// Post store root; relative paths resolve against the config file.
    #[serde(default)]
    pub store: Option<PathBuf>,

    /// Page size for queries that leave `posts_per_page` unset.
    #[serde(default)]
    pub posts_per_page: Option<i64>,

    /// Listen address for `serve`.
    #[serde(default)]
    pub bind: Option<String>,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Config {
    /// Load the config from `path`, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields an empty
    /// config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path()?, false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        config.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!(
            path = %path.display(),
            shortcodes = config.shortcodes.len(),
            "Loaded config"
        );

        Ok(config)
    }

    /// Root directory of the post store.
    pub fn store_root(&self) -> Result<PathBuf> {
        match &self.store {
            Some(store) if store.is_relative() => Ok(self
                .base_dir
                .as_deref()
                .map(|base| base.join(store))
                .unwrap_or_else(|| store.clone())),
            Some(store) => Ok(store.clone()),
            None => Ok(project_dirs()?.data_dir().join("store")),
        }
    }

    /// Listen address for `serve`.
    pub fn bind(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "shortcode-ui").context("Could not determine config directory")
}

fn default_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.json"))
}
