//! Wiring shared by the commands: config, token authority, registry, store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use shortcode_file::FilePostStore;
use shortcode_ui::{Gateway, GatewayConfig, HmacTokenAuthority, Registry};

use crate::config::Config;

/// Gateway over the local post store.
pub type FileGateway = Gateway<FilePostStore, HmacTokenAuthority>;

/// Global options every command resolves its dependencies from.
#[derive(Debug)]
pub struct Context {
    config_path: Option<PathBuf>,
    secret: Option<String>,
}

impl Context {
    pub fn new(config_path: Option<PathBuf>, secret: Option<String>) -> Self {
        Self {
            config_path,
            secret,
        }
    }

    pub fn config(&self) -> Result<Config> {
        Config::load(self.config_path.as_deref())
    }

    pub fn authority(&self) -> Result<HmacTokenAuthority> {
        let secret = self
            .secret
            .as_deref()
            .context("No secret configured. Pass --secret or set SHORTCODE_UI_SECRET.")?;
        HmacTokenAuthority::new(secret).context("Invalid secret")
    }

    pub fn store(&self, config: &Config) -> Result<FilePostStore> {
        let mut store = FilePostStore::new(config.store_root()?);
        if let Some(page_size) = config.posts_per_page {
            store = store.with_default_page_size(page_size);
        }
        Ok(store)
    }

    pub fn registry(&self, config: &Config, authority: &HmacTokenAuthority) -> Result<Registry> {
        let registry = Registry::builder()
            .extend(&config.fields)
            .context("Invalid field type override")?
            .build(&config.shortcodes, authority);
        Ok(registry)
    }

    /// Build the full gateway from config, secret and store.
    pub fn gateway(&self, config: &Config) -> Result<FileGateway> {
        let authority = self.authority()?;
        let registry = Arc::new(self.registry(config, &authority)?);
        let store = self.store(config)?;

        Ok(Gateway::new(registry, store, authority).with_config(GatewayConfig {
            id_parsing: config.id_parsing,
        }))
    }
}
