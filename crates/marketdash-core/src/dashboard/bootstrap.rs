//! Page bootstrap: fetch every resource in parallel, render, then wire up
//! the interactive parts of the page.

use std::sync::Arc;

use futures::future::join_all;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::api::ResourceSource;
use crate::auth::TokenStore;
use crate::cache::SessionCache;
use crate::dom::Document;
use crate::live::LiveFeed;
use crate::notify::{Toaster, LOAD_FAILED_MESSAGE};
use crate::render::{render_all, unread_notifications};
use crate::resources::{ResourceBundle, ResourceKey};
use crate::reveal::RevealObserver;

use super::{DashboardError, ReferralAction};

/// Id of the referral copy control
pub const COPY_REFERRAL_ID: &str = "copyReferral";

pub struct Dashboard<S> {
    source: Arc<S>,
    cache: SessionCache,
    tokens: TokenStore,
    origin: String,
}

/// Everything a successful bootstrap leaves running on the page.
pub struct LoadedPage<S> {
    pub bundle: Arc<ResourceBundle>,
    /// Present when the page has a referral control
    pub referral: Option<ReferralAction<S>>,
    pub reveal: RevealObserver,
    /// Present when a token was available
    pub live: Option<LiveFeed>,
}

impl<S> LoadedPage<S> {
    /// Turn live events into toasts until both sockets close.
    pub async fn forward_live(&mut self, toaster: &Toaster) {
        let Some(live) = self.live.as_mut() else {
            debug!("No live feed to forward");
            return;
        };
        while let Some(event) = live.next_event().await {
            toaster.dispatch_live(event);
        }
    }
}

impl<S: ResourceSource> Dashboard<S> {
    pub fn new(source: S, cache: SessionCache, tokens: TokenStore, origin: impl Into<String>) -> Self {
        Self {
            source: Arc::new(source),
            cache,
            tokens,
            origin: origin.into(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// One resource: a fresh cache entry wins, otherwise fetch and cache a
    /// non-empty result. Failures are logged and read as absent.
    async fn load_resource(&self, key: ResourceKey, token: Option<&str>) -> (ResourceKey, Option<Value>) {
        if let Some(cached) = self.cache.read(key.as_str(), self.cache.ttl()) {
            debug!(resource = %key, "Cache hit");
            return (key, Some(cached));
        }

        match self.source.get_json(key.path(), token).await {
            Ok(Some(value)) => {
                self.cache.write(key.as_str(), &value);
                (key, Some(value))
            }
            Ok(None) => {
                debug!(resource = %key, "Empty response");
                (key, None)
            }
            Err(e) => {
                warn!(resource = %key, error = %e, "Resource fetch failed");
                (key, None)
            }
        }
    }

    /// Fetch all resources concurrently and wait for every one of them to
    /// settle. A failing resource never affects the others.
    pub async fn load_bundle(&self, token: Option<&str>) -> ResourceBundle {
        let loads = ResourceKey::ALL.iter().map(|&key| self.load_resource(key, token));
        let bundle: ResourceBundle = join_all(loads).await.into_iter().collect();
        info!(
            loaded = bundle.len(),
            total = ResourceKey::ALL.len(),
            "Resources loaded"
        );
        bundle
    }

    /// Load, render and wire the page.
    pub async fn bootstrap(&self, doc: &mut Document) -> Result<LoadedPage<S>, DashboardError> {
        let token = self.tokens.load();
        let bundle = Arc::new(self.load_bundle(token.as_deref()).await);

        render_all(&bundle, doc)?;

        if let Some(unread) = unread_notifications(&bundle) {
            info!(unread, "Unread notifications");
        }

        let referral = doc.contains(COPY_REFERRAL_ID).then(|| {
            ReferralAction::new(
                Arc::clone(&self.source),
                Arc::clone(&bundle),
                token.clone(),
                self.origin.clone(),
            )
        });

        let live = LiveFeed::start(&self.origin, token.as_deref());
        let reveal = RevealObserver::observe_cards(doc);

        Ok(LoadedPage {
            bundle,
            referral,
            reveal,
            live,
        })
    }

    /// `bootstrap`, reporting any failure as a single error toast.
    pub async fn run(&self, doc: &mut Document, toaster: &Toaster) -> Option<LoadedPage<S>> {
        match self.bootstrap(doc).await {
            Ok(page) => Some(page),
            Err(e) => {
                error!(error = %e, "Dashboard bootstrap failed");
                toaster.error(LOAD_FAILED_MESSAGE);
                None
            }
        }
    }
}
