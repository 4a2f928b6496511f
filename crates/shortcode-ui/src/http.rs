//! HTTP API for the post field gateway.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use shortcode_core::{ContentStore, Error, TokenAuthority};

use crate::gateway::{Gateway, HydrateRequest, SearchRequest};

/// Path both AJAX actions are served on.
pub const AJAX_PATH: &str = "/admin-ajax";

/// Action name for post search.
pub const SEARCH_ACTION: &str = "search_posts";

/// Action name for value hydration.
pub const HYDRATE_ACTION: &str = "init_post_field_values";

/// Query string of an AJAX call; which fields matter depends on `action`.
#[derive(Debug, Default, PartialEq)]
struct AjaxParams {
    action: Option<String>,
    nonce: Option<String>,
    shortcode: Option<String>,
    attr: Option<String>,
    page: Option<String>,
    s: Option<String>,
    value: Option<String>,
}

impl AjaxParams {
    /// Collect known keys; a repeated key keeps its last value.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "action" => &mut params.action,
                "nonce" => &mut params.nonce,
                "shortcode" => &mut params.shortcode,
                "attr" => &mut params.attr,
                "page" => &mut params.page,
                "s" => &mut params.s,
                "value" => &mut params.value,
                _ => continue,
            };
            *slot = Some(value);
        }
        params
    }

    fn into_search(self) -> SearchRequest {
        SearchRequest {
            nonce: self.nonce,
            shortcode: self.shortcode,
            attr: self.attr,
            page: self.page,
            s: self.s,
        }
    }

    fn into_hydrate(self) -> HydrateRequest {
        HydrateRequest {
            nonce: self.nonce,
            shortcode: self.shortcode,
            attr: self.attr,
            value: self.value,
        }
    }
}

fn failure(status: StatusCode) -> Response {
    (status, Json(json!({"success": false, "data": null}))).into_response()
}

fn store_fault(err: Error) -> Response {
    warn!(error = %err, "Post field request failed");
    failure(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn ajax_handler<S, A>(
    State(gateway): State<Arc<Gateway<S, A>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response
where
    S: ContentStore + 'static,
    A: TokenAuthority + 'static,
{
    let params = match query {
        Ok(Query(pairs)) => AjaxParams::from_pairs(pairs),
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable query string");
            return failure(StatusCode::BAD_REQUEST);
        }
    };

    match params.action.as_deref() {
        Some(SEARCH_ACTION | "shortcode_ui_post_field") => {
            match gateway.search_posts(&params.into_search()).await {
                Ok(response) => Json(response).into_response(),
                Err(err) => store_fault(err),
            }
        }
        Some(HYDRATE_ACTION | "shortcode_ui_post_field_init_values") => {
            match gateway.hydrate_values(&params.into_hydrate()).await {
                Ok(response) => Json(response).into_response(),
                Err(err) => store_fault(err),
            }
        }
        _ => failure(StatusCode::BAD_REQUEST),
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// Build the HTTP API router around a gateway.
pub fn build_router<S, A>(gateway: Arc<Gateway<S, A>>) -> Router
where
    S: ContentStore + 'static,
    A: TokenAuthority + 'static,
{
    Router::new()
        .route(AJAX_PATH, get(ajax_handler::<S, A>))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_keys_keep_last_value() {
        let params = AjaxParams::from_pairs(pairs(&[
            ("action", "search_posts"),
            ("nonce", "first"),
            ("nonce", "second"),
        ]));
        assert_eq!(params.nonce.as_deref(), Some("second"));
        assert_eq!(params.action.as_deref(), Some(SEARCH_ACTION));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params = AjaxParams::from_pairs(pairs(&[("_", "1700000000"), ("value", "1,2")]));
        assert_eq!(
            params,
            AjaxParams {
                value: Some("1,2".to_string()),
                ..AjaxParams::default()
            }
        );
    }
}
