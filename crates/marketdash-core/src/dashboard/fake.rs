//! In-memory `ResourceSource` for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::{ApiError, ResourceSource};
use crate::resources::ResourceKey;

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Empty,
    Status(u16),
    Timeout,
}

/// Replies per path are consumed in order; the last one repeats.
#[derive(Default)]
pub struct FakeSource {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source answering every resource with a plausible payload.
    pub fn healthy() -> Self {
        let fake = Self::new();
        for key in ResourceKey::ALL {
            fake.push(key.path(), Reply::Json(sample(key)));
        }
        fake
    }

    pub fn push(&self, path: &str, reply: Reply) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    /// Replace all replies for `path`.
    pub fn set(&self, path: &str, reply: Reply) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), VecDeque::from([reply]));
        self
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls().iter().filter(|(p, _)| p == path).count()
    }
}

#[async_trait]
impl ResourceSource for FakeSource {
    async fn get_json(&self, path: &str, token: Option<&str>) -> Result<Option<Value>, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), token.map(str::to_string)));

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            match replies.get_mut(path) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match reply {
            Some(Reply::Json(value)) => Ok(Some(value)),
            Some(Reply::Empty) => Ok(None),
            Some(Reply::Status(status)) => Err(ApiError::RequestFailed {
                status,
                body: json!({ "error": "http", "status": status }),
            }),
            Some(Reply::Timeout) => Err(ApiError::Timeout),
            None => Err(ApiError::RequestFailed {
                status: 404,
                body: json!({ "detail": "Not found." }),
            }),
        }
    }
}

pub fn sample(key: ResourceKey) -> Value {
    match key {
        ResourceKey::AccountsMe => json!({ "username": "sam", "email": "sam@example.com" }),
        ResourceKey::AnalyticsStats => {
            json!({ "total_projects": 1200, "total_freelancers": 340, "total_paid": 98000 })
        }
        ResourceKey::FeaturedProjects => json!({
            "count": 1,
            "results": [{ "id": 7, "title": "Logo design", "budget_max": 500, "budget_min": 200 }]
        }),
        ResourceKey::Wallet => json!({ "balance": 1500 }),
        ResourceKey::Recommendations => json!([
            { "id": 11, "title": "Product photos", "budget_min": 50, "posted_days_ago": 1 },
            { "id": 12, "title": "Translate app", "budget_min": 120, "posted_days_ago": 3 }
        ]),
        ResourceKey::Categories => json!([{ "name": "Design" }, { "name": "Writing" }]),
        ResourceKey::Referrals => json!({ "code": "SAM42" }),
        ResourceKey::ReviewsLatest => json!([{ "comment": "Delivered early", "user_display": "Rina" }]),
        ResourceKey::NotificationsCount => json!({ "unread": 2 }),
        ResourceKey::Subscriptions => json!({ "plan": "Pro" }),
        ResourceKey::SupportRecent => json!([]),
        ResourceKey::DisputesOpen => json!([]),
        ResourceKey::FreelancersTop => json!([{ "username": "mina", "title": "Illustrator" }]),
    }
}
