//! Post field query gateway.
//!
//! Backs the two AJAX calls a post picker makes: searching for posts as
//! the user types, and turning a stored comma-separated id list back into
//! labelled options when the editor opens.
//!
//! Both handlers fail closed. A refused request becomes a failure envelope
//! carrying an empty payload; only content store faults surface as `Err`.

mod envelope;
mod params;

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

use shortcode_core::error::RequestError;
use shortcode_core::{ContentStore, Error, FieldKey, PostId, Result, TokenAuthority};

use crate::registry::Registry;

pub use envelope::{AjaxResponse, HydrateResult, PostOption, SearchResult};
pub use params::{IdParsing, absint, parse_ids, sanitize_text};

/// Parameters of a post search call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    pub nonce: Option<String>,
    pub shortcode: Option<String>,
    pub attr: Option<String>,
    pub page: Option<String>,
    pub s: Option<String>,
}

/// Parameters of a value hydration call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HydrateRequest {
    pub nonce: Option<String>,
    pub shortcode: Option<String>,
    pub attr: Option<String>,
    pub value: Option<String>,
}

/// Gateway behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct GatewayConfig {
    /// How hydration parses id lists.
    #[serde(default)]
    pub id_parsing: IdParsing,
}

/// Validates post field requests and answers them from the content store.
#[derive(Debug)]
pub struct Gateway<S, A> {
    registry: Arc<Registry>,
    store: S,
    authority: A,
    config: GatewayConfig,
}

fn sanitized(param: Option<&str>) -> Option<String> {
    param.map(sanitize_text)
}

fn field_key(shortcode: Option<&str>, attr: Option<&str>) -> FieldKey {
    FieldKey::new(
        sanitized(shortcode).unwrap_or_default(),
        sanitized(attr).unwrap_or_default(),
    )
}

/// Split a handler result into an envelope or a store fault.
fn into_response<T: Default>(result: Result<T>) -> Result<AjaxResponse<T>> {
    match result {
        Ok(data) => Ok(AjaxResponse::success(data)),
        Err(Error::Request(rejection)) => {
            debug!(reason = %rejection, "Post field request refused");
            Ok(AjaxResponse::failure(rejection, T::default()))
        }
        Err(other) => Err(other),
    }
}

impl<S, A> Gateway<S, A>
where
    S: ContentStore,
    A: TokenAuthority,
{
    /// Create a gateway over a built registry.
    ///
    /// `authority` must be the one the registry's tokens were derived with.
    pub fn new(registry: Arc<Registry>, store: S, authority: A) -> Self {
        Self {
            registry,
            store,
            authority,
            config: GatewayConfig::default(),
        }
    }

    /// Replace the behavior switches.
    pub fn with_config(mut self, config: GatewayConfig) -> Self {
        self.config = config;
        self
    }

    /// The registry this gateway answers for.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The content store this gateway reads from.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn check_token(&self, key: &FieldKey, nonce: Option<&str>) -> Result<()> {
        let nonce = sanitized(nonce).unwrap_or_default();
        if nonce.is_empty() || !self.authority.verify(key, &nonce) {
            return Err(RequestError::InvalidToken.into());
        }
        Ok(())
    }

    async fn post_option(&self, id: PostId) -> Result<PostOption> {
        let title = self.store.title(id).await?.unwrap_or_default();
        Ok(PostOption {
            id,
            text: html_escape::decode_html_entities(&title).into_owned(),
        })
    }

    /// Search the posts a field may pick from.
    #[instrument(skip(self, request), fields(shortcode = ?request.shortcode, attr = ?request.attr))]
    pub async fn search_posts(&self, request: &SearchRequest) -> Result<AjaxResponse<SearchResult>> {
        into_response(self.try_search_posts(request).await)
    }

    async fn try_search_posts(&self, request: &SearchRequest) -> Result<SearchResult> {
        let key = field_key(request.shortcode.as_deref(), request.attr.as_deref());
        self.check_token(&key, request.nonce.as_deref())?;

        let field = self
            .registry
            .post_field(&key)
            .ok_or_else(|| RequestError::UnknownField {
                shortcode: key.shortcode.clone(),
                attr: key.attr.clone(),
            })?;

        let mut query = field.query.clone().ids_only();

        if let Some(page) = sanitized(request.page.as_deref()) {
            query = query.with_page(absint(&page));
        }

        if let Some(search) = sanitized(request.s.as_deref()).filter(|s| !s.is_empty()) {
            query = query.with_search(search);
        }

        let page = self.store.query(&query).await?;

        let mut posts = Vec::with_capacity(page.ids.len());
        for id in page.ids {
            posts.push(self.post_option(id).await?);
        }

        debug!(
            returned = posts.len(),
            found = page.found_posts,
            "Post search answered"
        );

        Ok(SearchResult {
            posts,
            found_posts: page.found_posts,
            posts_per_page: page.posts_per_page,
        })
    }

    /// Label the ids already stored in a field.
    #[instrument(skip(self, request), fields(shortcode = ?request.shortcode, attr = ?request.attr))]
    pub async fn hydrate_values(
        &self,
        request: &HydrateRequest,
    ) -> Result<AjaxResponse<HydrateResult>> {
        into_response(self.try_hydrate_values(request).await)
    }

    async fn try_hydrate_values(&self, request: &HydrateRequest) -> Result<HydrateResult> {
        let value = sanitized(request.value.as_deref()).unwrap_or_default();
        // "0" counts as empty, as it does for the host's emptiness check.
        if value.is_empty() || value == "0" {
            return Err(RequestError::EmptyValue.into());
        }

        let key = field_key(request.shortcode.as_deref(), request.attr.as_deref());
        self.check_token(&key, request.nonce.as_deref())?;

        let ids = parse_ids(&value, self.config.id_parsing)?;

        let mut posts = Vec::with_capacity(ids.len());
        for id in ids {
            posts.push(self.post_option(id).await?);
        }

        Ok(HydrateResult { posts })
    }
}
