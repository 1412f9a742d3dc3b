use std::sync::Arc;

use tracing::{error, info};

use crate::api::ResourceSource;
use crate::clipboard::Clipboard;
use crate::models::Referral;
use crate::notify::Toaster;
use crate::resources::{ResourceBundle, ResourceKey};

use super::DashboardError;

pub const REFERRAL_COPIED: &str = "Referral link copied";
pub const REFERRAL_COPY_FAILED: &str = "Could not copy referral";

/// The "copy referral link" control, bound to one loaded page.
///
/// Uses the referral record from the bundle when there is one; otherwise the
/// record is fetched on demand, uncached.
pub struct ReferralAction<S> {
    source: Arc<S>,
    bundle: Arc<ResourceBundle>,
    token: Option<String>,
    origin: String,
}

impl<S: ResourceSource> ReferralAction<S> {
    pub fn new(
        source: Arc<S>,
        bundle: Arc<ResourceBundle>,
        token: Option<String>,
        origin: String,
    ) -> Self {
        Self {
            source,
            bundle,
            token,
            origin,
        }
    }

    async fn referral(&self) -> Result<Referral, DashboardError> {
        let value = match self.bundle.get(ResourceKey::Referrals) {
            Some(value) => Some(value.clone()),
            None => {
                self.source
                    .get_json(ResourceKey::Referrals.path(), self.token.as_deref())
                    .await?
            }
        };

        // A record without url or code still yields a placeholder link.
        Ok(value
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default())
    }

    /// Build the referral link and write it to the clipboard.
    pub async fn try_copy(&self, clipboard: &dyn Clipboard) -> Result<String, DashboardError> {
        let link = self.referral().await?.link(&self.origin);
        clipboard.write_text(&link).await?;
        Ok(link)
    }

    /// Handle a click: copy the link and report the outcome as a toast.
    pub async fn copy(&self, clipboard: &dyn Clipboard, toaster: &Toaster) -> Option<String> {
        match self.try_copy(clipboard).await {
            Ok(link) => {
                info!(%link, "Referral link copied");
                toaster.info(REFERRAL_COPIED);
                Some(link)
            }
            Err(e) => {
                error!(error = %e, "Referral copy failed");
                toaster.error(REFERRAL_COPY_FAILED);
                None
            }
        }
    }
}
