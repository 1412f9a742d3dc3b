//! Dashboard orchestration.
//!
//! - `Dashboard`: per-load bootstrap (parallel fetch, cache, render, wiring)
//! - `ReferralAction`: the deferred "copy referral link" control
//! - `CategoriesLoader`: the standalone categories page flow

pub mod bootstrap;
pub mod categories;
pub mod referral;

#[cfg(test)]
pub(crate) mod fake;

pub use bootstrap::{Dashboard, LoadedPage, COPY_REFERRAL_ID};
pub use categories::{CategoriesLoader, CATEGORIES_PATH};
pub use referral::{ReferralAction, REFERRAL_COPIED, REFERRAL_COPY_FAILED};

use thiserror::Error;

use crate::api::ApiError;
use crate::clipboard::ClipboardError;
use crate::dom::RenderError;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}
