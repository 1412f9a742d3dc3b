use serde::{Deserialize, Serialize};

use super::Scalar;

/// A project/job posting from the marketplace or recommendation services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, deserialize_with = "super::lenient")]
    pub id: Option<Scalar>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub budget_min: Option<Scalar>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub budget_max: Option<Scalar>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub posted_days_ago: Option<Scalar>,
}

impl Job {
    /// Link to the job detail page.
    pub fn href(&self) -> String {
        let id = self.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        format!("/pages/jobs.html?id={}", urlencoding::encode(&id))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Freelancer {
    #[serde(default, deserialize_with = "super::lenient")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "super::lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "super::lenient")]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub user_display: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub user: Option<Scalar>,
}

impl Review {
    /// Attribution line: display name, then user, then "Client".
    pub fn author(&self) -> String {
        if let Some(name) = super::non_empty(&self.user_display) {
            return name.to_string();
        }
        match super::scalar::truthy(&self.user) {
            Some(user) => user.to_string(),
            None => "Client".to_string(),
        }
    }
}
