//! shortcode-ui - Shortcode attribute field registry and post field gateway.
//!
//! A [`Registry`] is built once at startup from the built-in field types,
//! any overrides, and the shortcode catalog. A [`Gateway`] then answers the
//! post picker's search and hydration calls against a
//! [`ContentStore`](shortcode_core::ContentStore), and [`build_router`]
//! exposes it over HTTP.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use shortcode_core::{ContentStore, ShortcodeCatalog};
//! use shortcode_ui::{Gateway, HmacTokenAuthority, Registry, SearchRequest};
//!
//! # async fn example(store: impl ContentStore) -> Result<(), shortcode_core::Error> {
//! let catalog: ShortcodeCatalog = serde_json::from_str(
//!     r#"{"gallery": {"attrs": [{"attr": "ids", "type": "post"}]}}"#,
//! ).unwrap();
//! let authority = HmacTokenAuthority::new("site secret")?;
//! let registry = Arc::new(Registry::builder().build(&catalog, &authority));
//!
//! let gateway = Gateway::new(registry, store, authority);
//! let response = gateway
//!     .search_posts(&SearchRequest {
//!         nonce: Some("token-from-page".into()),
//!         shortcode: Some("gallery".into()),
//!         attr: Some("ids".into()),
//!         ..SearchRequest::default()
//!     })
//!     .await?;
//!
//! for post in response.data.posts {
//!     println!("{}: {}", post.id, post.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod gateway;
pub mod http;
pub mod registry;

// Re-export primary types at crate root for convenience
pub use auth::HmacTokenAuthority;
pub use gateway::{
    AjaxResponse, Gateway, GatewayConfig, HydrateRequest, HydrateResult, IdParsing, PostOption,
    SearchRequest, SearchResult,
};
pub use http::build_router;
pub use registry::{ClientData, Registry, RegistryBuilder};
pub use shortcode_core::{Error, Result};
