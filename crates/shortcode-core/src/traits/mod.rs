//! Core traits for content stores and token authorities.

mod content_store;
mod token_authority;

pub use content_store::ContentStore;
pub use token_authority::TokenAuthority;
