use serde::{Deserialize, Serialize};

use super::Scalar;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, deserialize_with = "super::lenient")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub email: Option<String>,
}

impl Account {
    /// Username, then email, then "User".
    pub fn display_name(&self) -> &str {
        super::non_empty(&self.username)
            .or_else(|| super::non_empty(&self.email))
            .unwrap_or("User")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default, deserialize_with = "super::lenient")]
    pub balance: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default, deserialize_with = "super::lenient")]
    pub plan: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Referral {
    #[serde(default, deserialize_with = "super::lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub code: Option<Scalar>,
}

impl Referral {
    /// The shareable link: `url` when set, otherwise `<origin>/r/<code>`.
    pub fn link(&self, origin: &str) -> String {
        if let Some(url) = super::non_empty(&self.url) {
            return url.to_string();
        }
        let code = super::scalar::truthy(&self.code)
            .map(|c| c.to_string())
            .unwrap_or_else(|| "yourcode".to_string());
        format!("{}/r/{}", origin.trim_end_matches('/'), code)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsStats {
    #[serde(default, deserialize_with = "super::lenient")]
    pub total_projects: Option<Scalar>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub projects: Option<Scalar>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub total_freelancers: Option<Scalar>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub total_paid: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnreadCount {
    #[serde(default, deserialize_with = "super::lenient")]
    pub unread: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_display_name() {
        let sam: Account = serde_json::from_value(json!({ "username": "sam" })).unwrap();
        assert_eq!(sam.display_name(), "sam");

        let email_only: Account =
            serde_json::from_value(json!({ "username": "", "email": "a@b.c" })).unwrap();
        assert_eq!(email_only.display_name(), "a@b.c");

        assert_eq!(Account::default().display_name(), "User");
    }

    #[test]
    fn test_referral_link() {
        let with_url: Referral =
            serde_json::from_value(json!({ "url": "https://x.test/r/abc", "code": "abc" })).unwrap();
        assert_eq!(with_url.link("https://gigs.example"), "https://x.test/r/abc");

        let code_only: Referral = serde_json::from_value(json!({ "code": "K9" })).unwrap();
        assert_eq!(code_only.link("https://gigs.example/"), "https://gigs.example/r/K9");

        assert_eq!(Referral::default().link("https://gigs.example"), "https://gigs.example/r/yourcode");
    }

    #[test]
    fn test_unread_count_requires_number() {
        let count: UnreadCount = serde_json::from_value(json!({ "unread": 3 })).unwrap();
        assert_eq!(count.unread, Some(3.0));
        let text: UnreadCount = serde_json::from_value(json!({ "unread": "3" })).unwrap();
        assert_eq!(text.unread, None);
    }

    #[test]
    fn test_wrong_typed_field_keeps_the_rest() {
        let account: Account =
            serde_json::from_value(json!({ "username": "sam", "email": 5 })).unwrap();
        assert_eq!(account.display_name(), "sam");
        assert_eq!(account.email, None);

        let wallet: Wallet = serde_json::from_value(json!({ "balance": { "amount": 3 } })).unwrap();
        assert!(wallet.balance.is_none());

        let stats: AnalyticsStats =
            serde_json::from_value(json!({ "total_projects": null, "projects": [1], "total_paid": 10 }))
                .unwrap();
        assert!(stats.total_projects.is_none());
        assert!(stats.projects.is_none());
        assert_eq!(stats.total_paid.unwrap().to_string(), "10");
    }
}
