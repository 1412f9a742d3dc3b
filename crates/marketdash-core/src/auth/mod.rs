//! Authentication token access.
//!
//! This module provides `TokenStore`, the durable home of the opaque bearer
//! token. The token is read once per bootstrap; an absent token means
//! requests go out unauthenticated and no live sockets are opened.

pub mod token;

pub use token::{TokenStore, SERVICE_NAME, TOKEN_KEY, TOKEN_ENV_VAR};
