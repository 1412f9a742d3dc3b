//! The fixed resource table and the per-load resource bundle.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// One of the backend resources the dashboard loads on every bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKey {
    AccountsMe,
    AnalyticsStats,
    FeaturedProjects,
    Wallet,
    Recommendations,
    Categories,
    Referrals,
    ReviewsLatest,
    NotificationsCount,
    Subscriptions,
    SupportRecent,
    DisputesOpen,
    FreelancersTop,
}

impl ResourceKey {
    pub const ALL: [ResourceKey; 13] = [
        ResourceKey::AccountsMe,
        ResourceKey::AnalyticsStats,
        ResourceKey::FeaturedProjects,
        ResourceKey::Wallet,
        ResourceKey::Recommendations,
        ResourceKey::Categories,
        ResourceKey::Referrals,
        ResourceKey::ReviewsLatest,
        ResourceKey::NotificationsCount,
        ResourceKey::Subscriptions,
        ResourceKey::SupportRecent,
        ResourceKey::DisputesOpen,
        ResourceKey::FreelancersTop,
    ];

    /// Stable name, also used as the session cache slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKey::AccountsMe => "accounts_me",
            ResourceKey::AnalyticsStats => "analytics_stats",
            ResourceKey::FeaturedProjects => "featured_projects",
            ResourceKey::Wallet => "wallet",
            ResourceKey::Recommendations => "recommendations",
            ResourceKey::Categories => "categories",
            ResourceKey::Referrals => "referrals",
            ResourceKey::ReviewsLatest => "reviews_latest",
            ResourceKey::NotificationsCount => "notifications_count",
            ResourceKey::Subscriptions => "subscriptions",
            ResourceKey::SupportRecent => "support_recent",
            ResourceKey::DisputesOpen => "disputes_open",
            ResourceKey::FreelancersTop => "freelancers_top",
        }
    }

    /// Path relative to the API base.
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKey::AccountsMe => "/accounts/me/",
            ResourceKey::AnalyticsStats => "/analytics/stats/",
            ResourceKey::FeaturedProjects => "/marketplace/projects/?featured=true&limit=6",
            ResourceKey::Wallet => "/payments/wallet/",
            ResourceKey::Recommendations => "/recommendations/projects/?limit=6",
            ResourceKey::Categories => "/categories/top/?limit=9",
            ResourceKey::Referrals => "/referrals/me/",
            ResourceKey::ReviewsLatest => "/reviews/latest/?limit=6",
            ResourceKey::NotificationsCount => "/notifications/unread_count/",
            ResourceKey::Subscriptions => "/subscriptions/me/",
            ResourceKey::SupportRecent => "/support/tickets/recent/",
            ResourceKey::DisputesOpen => "/disputes/open/?limit=5",
            ResourceKey::FreelancersTop => "/freelancers/top/?limit=6",
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetched, cached or failed values for every resource of one bootstrap pass.
///
/// Built once by the fan-out and read-only afterwards. Failed and empty
/// resources are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceBundle {
    values: HashMap<ResourceKey, Value>,
}

impl ResourceBundle {
    pub fn get(&self, key: ResourceKey) -> Option<&Value> {
        self.values.get(&key)
    }

    pub fn contains(&self, key: ResourceKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Deserialize a resource, treating malformed data as absent.
    pub fn parse<T: DeserializeOwned>(&self, key: ResourceKey) -> Option<T> {
        self.get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(ResourceKey, Option<Value>)> for ResourceBundle {
    fn from_iter<I: IntoIterator<Item = (ResourceKey, Option<Value>)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .filter_map(|(key, value)| match value {
                Some(Value::Null) | None => None,
                Some(v) => Some((key, v)),
            })
            .collect();
        Self { values }
    }
}
