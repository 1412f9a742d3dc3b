//! marketdash core library.
//!
//! This crate provides the building blocks of the marketplace dashboard:
//!
//! - `api`: HTTP fetch wrapper with timeout and bearer token support
//! - `storage` / `cache`: key-value storage backends and the TTL session cache
//! - `auth`: persisted auth token access
//! - `resources`: the fixed resource table and the immutable resource bundle
//! - `models`: lenient typed views over backend JSON
//! - `dom`, `render`, `reveal`: the page document and its render routines
//! - `dashboard`: the bootstrapper, referral action and categories loader
//! - `notify`, `live`: toasts and the WebSocket live-update layer

pub mod api;
pub mod auth;
pub mod cache;
pub mod clipboard;
pub mod config;
pub mod dashboard;
pub mod dom;
pub mod live;
pub mod models;
pub mod nav;
pub mod notify;
pub mod render;
pub mod resources;
pub mod reveal;
pub mod storage;
pub mod utils;

pub use api::{ApiClient, ApiError, ResourceSource};
pub use cache::SessionCache;
pub use config::Config;
pub use dashboard::{CategoriesLoader, Dashboard, DashboardError, LoadedPage, ReferralAction};
pub use dom::Document;
pub use notify::{Toast, ToastKind, Toaster};
pub use resources::{ResourceBundle, ResourceKey};
pub use storage::{FileStore, KeyringStore, MemoryStore, Storage, StorageError};
