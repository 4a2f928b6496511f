//! Field access tokens.
//!
//! Tokens are never stored for verification. The gateway recomputes the
//! token for the field a request claims and compares it with the one the
//! browser sent.

mod signer;

pub use signer::{HmacTokenAuthority, scope_string};
