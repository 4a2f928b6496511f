//! Shared fixtures for gateway tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::json;

use shortcode_core::error::{Error, StoreError};
use shortcode_core::{
    ContentStore, FieldKey, PostId, PostQuery, QueryPage, Result, ShortcodeCatalog,
    TokenAuthority,
};
use shortcode_ui::{Gateway, HmacTokenAuthority, Registry};

pub const SECRET: &str = "gateway-test-secret";

/// In-memory store that answers every query with a fixed page and records
/// the last query it saw.
#[derive(Default)]
pub struct MemoryStore {
    pub titles: BTreeMap<PostId, String>,
    pub page: QueryPage,
    pub last_query: std::sync::Mutex<Option<PostQuery>>,
    pub broken: AtomicBool,
}

impl MemoryStore {
    pub fn with_titles(titles: &[(PostId, &str)]) -> Self {
        Self {
            titles: titles.iter().map(|(id, t)| (*id, t.to_string())).collect(),
            ..Self::default()
        }
    }

    pub fn last_query(&self) -> Option<PostQuery> {
        self.last_query.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(Error::Store(StoreError::Io {
                message: "store offline".to_string(),
            }));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn query(&self, query: &PostQuery) -> Result<QueryPage> {
        self.check()?;
        *self.last_query.lock().unwrap() = Some(query.clone());
        Ok(self.page.clone())
    }

    async fn title(&self, id: PostId) -> Result<Option<String>> {
        self.check()?;
        Ok(self.titles.get(&id).cloned())
    }
}

pub fn catalog() -> ShortcodeCatalog {
    serde_json::from_value(json!({
        "gallery": {
            "label": "Gallery",
            "attrs": [
                {"attr": "ids", "type": "post", "query": {"post_type": "attachment", "posts_per_page": 5}},
                {"attr": "columns", "type": "number"}
            ]
        },
        "button": {
            "attrs": [{"attr": "href", "type": "url"}]
        }
    }))
    .unwrap()
}

pub fn authority() -> HmacTokenAuthority {
    HmacTokenAuthority::new(SECRET).unwrap()
}

pub fn token_for(shortcode: &str, attr: &str) -> String {
    authority()
        .derive(&FieldKey::new(shortcode, attr))
        .as_str()
        .to_string()
}

pub fn gateway(store: Arc<MemoryStore>) -> Gateway<Arc<MemoryStore>, HmacTokenAuthority> {
    let authority = authority();
    let registry = Arc::new(Registry::builder().build(&catalog(), &authority));
    Gateway::new(registry, store, authority)
}
