use crate::dom::{Document, RenderError};
use crate::models::scalar::truthy;
use crate::models::{
    first_item, list_items, Account, AnalyticsStats, Category, Freelancer, Job, Review,
    Subscription, UnreadCount, Wallet,
};
use crate::resources::{ResourceBundle, ResourceKey};
use crate::utils::{money, or_dash, DASH};

use super::templates;

/// Summary line shown when nothing personal is known
pub const SIGNED_OUT_SUMMARY: &str = "Sign in to see personalized summary";

const SUMMARY_SEPARATOR: &str = " • ";

/// KPI stats: project count, freelancer count, total paid.
pub fn render_stats(bundle: &ResourceBundle, doc: &mut Document) -> Result<(), RenderError> {
    let stats: AnalyticsStats = bundle
        .parse(ResourceKey::AnalyticsStats)
        .unwrap_or_default();

    let projects = stats.total_projects.as_ref().or(stats.projects.as_ref());
    doc.set_text("stat_projects", or_dash(projects))?;
    doc.set_text("stat_freelancers", or_dash(stats.total_freelancers.as_ref()))?;
    doc.set_text("stat_paid", money(truthy(&stats.total_paid)))?;
    Ok(())
}

fn featured_jobs(bundle: &ResourceBundle) -> Option<Vec<Job>> {
    bundle.get(ResourceKey::FeaturedProjects).and_then(list_items)
}

/// Featured item: the first featured project.
///
/// With no featured project the title and price show placeholders; the link
/// and the card's visibility are left as they are.
pub fn render_featured(bundle: &ResourceBundle, doc: &mut Document) -> Result<(), RenderError> {
    let first: Option<Job> = bundle
        .get(ResourceKey::FeaturedProjects)
        .and_then(first_item);

    let job = match first {
        Some(job) => job,
        None => {
            doc.set_text("featured_title", DASH)?;
            doc.set_text("featured_price", money(None::<&str>))?;
            return Ok(());
        }
    };

    let title = crate::models::non_empty(&job.title).unwrap_or(DASH);
    doc.set_text("featured_title", title)?;
    doc.set_text("featured_price", money(truthy(&job.budget_max)))?;
    doc.set_href("featured_link", job.href())?;
    doc.add_class("featured", "visible")?;
    Ok(())
}

/// Jobs grid: recommendations, falling back to the featured list.
pub fn render_jobs(bundle: &ResourceBundle, doc: &mut Document) -> Result<(), RenderError> {
    let jobs: Option<Vec<Job>> = match bundle.get(ResourceKey::Recommendations) {
        Some(recommendations) => list_items(recommendations),
        None => featured_jobs(bundle),
    };

    let html = match jobs {
        Some(jobs) if !jobs.is_empty() => jobs
            .iter()
            .map(templates::job_card)
            .collect::<Vec<_>>()
            .join(""),
        _ => templates::no_jobs().to_string(),
    };
    doc.set_html("jobsGrid", html)
}

fn render_list<T, F>(
    bundle: &ResourceBundle,
    doc: &mut Document,
    key: ResourceKey,
    region: &str,
    template: F,
) -> Result<(), RenderError>
where
    T: serde::de::DeserializeOwned,
    F: Fn(&T) -> String,
{
    let items: Vec<T> = bundle.get(key).and_then(list_items).unwrap_or_default();
    let html = items.iter().map(template).collect::<Vec<_>>().join("");
    doc.set_html(region, html)
}

/// People list: top freelancers.
pub fn render_freelancers(bundle: &ResourceBundle, doc: &mut Document) -> Result<(), RenderError> {
    render_list::<Freelancer, _>(
        bundle,
        doc,
        ResourceKey::FreelancersTop,
        "freelancers",
        templates::freelancer_item,
    )
}

/// Category chips: top categories.
pub fn render_categories(bundle: &ResourceBundle, doc: &mut Document) -> Result<(), RenderError> {
    render_list::<Category, _>(
        bundle,
        doc,
        ResourceKey::Categories,
        "categories",
        templates::category_chip,
    )
}

/// Testimonial quotes: latest reviews.
pub fn render_testimonials(bundle: &ResourceBundle, doc: &mut Document) -> Result<(), RenderError> {
    render_list::<Review, _>(
        bundle,
        doc,
        ResourceKey::ReviewsLatest,
        "testimonials",
        templates::testimonial,
    )
}

/// Personalized summary line built from account, wallet and subscription.
pub fn render_summary(bundle: &ResourceBundle, doc: &mut Document) -> Result<(), RenderError> {
    let mut parts = Vec::new();

    if bundle.contains(ResourceKey::AccountsMe) {
        let account: Account = bundle.parse(ResourceKey::AccountsMe).unwrap_or_default();
        parts.push(format!("Hi, {}", account.display_name()));
    }

    let wallet: Option<Wallet> = bundle.parse(ResourceKey::Wallet);
    if let Some(balance) = wallet.and_then(|w| w.balance) {
        parts.push(format!("Balance: {}", money(Some(balance))));
    }

    let subscription: Option<Subscription> = bundle.parse(ResourceKey::Subscriptions);
    if let Some(plan) = subscription.as_ref().and_then(|s| truthy(&s.plan)) {
        parts.push(format!("Plan: {}", plan));
    }

    let summary = if parts.is_empty() {
        SIGNED_OUT_SUMMARY.to_string()
    } else {
        parts.join(SUMMARY_SEPARATOR)
    };
    doc.set_text("miniSummary", summary)
}

/// Unread notification count, when the backend reports a number.
pub fn unread_notifications(bundle: &ResourceBundle) -> Option<f64> {
    bundle
        .parse::<UnreadCount>(ResourceKey::NotificationsCount)
        .and_then(|count| count.unread)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn bundle(entries: Vec<(ResourceKey, Value)>) -> ResourceBundle {
        entries.into_iter().map(|(k, v)| (k, Some(v))).collect()
    }

    #[test]
    fn test_featured_scenario() {
        let bundle = bundle(vec![(
            ResourceKey::FeaturedProjects,
            json!({ "results": [{ "id": 7, "title": "Logo design", "budget_max": 500 }] }),
        )]);
        let mut doc = Document::skeleton();
        render_featured(&bundle, &mut doc).unwrap();

        assert_eq!(doc.text("featured_title"), Some("Logo design"));
        assert_eq!(doc.text("featured_price"), Some("৳500"));
        assert_eq!(doc.href("featured_link"), Some("/pages/jobs.html?id=7"));
        assert!(doc.has_class("featured", "visible"));
    }

    #[test]
    fn test_featured_without_jobs_keeps_link() {
        let bundle = bundle(vec![(ResourceKey::FeaturedProjects, json!([]))]);
        let mut doc = Document::skeleton();
        render_featured(&bundle, &mut doc).unwrap();

        assert_eq!(doc.text("featured_title"), Some("—"));
        assert_eq!(doc.text("featured_price"), Some("৳—"));
        assert_eq!(doc.href("featured_link"), Some("#"));
        assert!(!doc.has_class("featured", "visible"));
    }

    #[test]
    fn test_featured_uses_only_the_first_job() {
        let mistyped = bundle(vec![(
            ResourceKey::FeaturedProjects,
            json!([
                { "id": 1, "title": 123, "budget_max": 900 },
                { "id": 2, "title": "Second", "budget_max": 50 }
            ]),
        )]);
        let mut doc = Document::skeleton();
        render_featured(&mistyped, &mut doc).unwrap();
        assert_eq!(doc.text("featured_title"), Some("—"));
        assert_eq!(doc.text("featured_price"), Some("৳900"));
        assert_eq!(doc.href("featured_link"), Some("/pages/jobs.html?id=1"));

        let malformed = bundle(vec![(
            ResourceKey::FeaturedProjects,
            json!([42, { "id": 2, "title": "Second", "budget_max": 50 }]),
        )]);
        let mut doc = Document::skeleton();
        render_featured(&malformed, &mut doc).unwrap();
        assert_eq!(doc.text("featured_title"), Some("—"));
        assert_eq!(doc.text("featured_price"), Some("৳—"));
        assert_eq!(doc.href("featured_link"), Some("#"));
        assert!(!doc.has_class("featured", "visible"));
    }

    #[test]
    fn test_summary_without_wallet() {
        let bundle = bundle(vec![(ResourceKey::AccountsMe, json!({ "username": "sam" }))]);
        let mut doc = Document::skeleton();
        render_summary(&bundle, &mut doc).unwrap();
        assert_eq!(doc.text("miniSummary"), Some("Hi, sam"));
    }

    #[test]
    fn test_summary_all_parts() {
        let bundle = bundle(vec![
            (ResourceKey::AccountsMe, json!({ "email": "sam@example.com" })),
            (ResourceKey::Wallet, json!({ "balance": 0 })),
            (ResourceKey::Subscriptions, json!({ "plan": "Pro" })),
        ]);
        let mut doc = Document::skeleton();
        render_summary(&bundle, &mut doc).unwrap();
        assert_eq!(
            doc.text("miniSummary"),
            Some("Hi, sam@example.com • Balance: ৳0 • Plan: Pro")
        );
    }

    #[test]
    fn test_summary_ignores_wrong_typed_email() {
        let bundle = bundle(vec![(
            ResourceKey::AccountsMe,
            json!({ "username": "sam", "email": 5 }),
        )]);
        let mut doc = Document::skeleton();
        render_summary(&bundle, &mut doc).unwrap();
        assert_eq!(doc.text("miniSummary"), Some("Hi, sam"));
    }

    #[test]
    fn test_testimonial_with_nested_user_is_rendered() {
        let bundle = bundle(vec![(
            ResourceKey::ReviewsLatest,
            json!([{ "comment": "Great", "user": { "id": 3, "username": "tariq" } }]),
        )]);
        let mut doc = Document::skeleton();
        render_testimonials(&bundle, &mut doc).unwrap();

        let html = doc.inner_html("testimonials").unwrap();
        assert!(html.contains("Great"));
        assert!(html.contains("Client"));
    }

    #[test]
    fn test_summary_signed_out() {
        let mut doc = Document::skeleton();
        render_summary(&ResourceBundle::default(), &mut doc).unwrap();
        assert_eq!(doc.text("miniSummary"), Some(SIGNED_OUT_SUMMARY));
    }

    #[test]
    fn test_stats_fallbacks_and_values() {
        let mut doc = Document::skeleton();
        render_stats(&ResourceBundle::default(), &mut doc).unwrap();
        assert_eq!(doc.text("stat_projects"), Some("—"));
        assert_eq!(doc.text("stat_freelancers"), Some("—"));
        assert_eq!(doc.text("stat_paid"), Some("৳—"));

        let stats = bundle(vec![(
            ResourceKey::AnalyticsStats,
            json!({ "projects": 0, "total_freelancers": 88, "total_paid": 125000 }),
        )]);
        render_stats(&stats, &mut doc).unwrap();
        assert_eq!(doc.text("stat_projects"), Some("0"));
        assert_eq!(doc.text("stat_freelancers"), Some("88"));
        assert_eq!(doc.text("stat_paid"), Some("৳125000"));
    }

    #[test]
    fn test_jobs_fall_back_to_featured() {
        let featured = bundle(vec![(
            ResourceKey::FeaturedProjects,
            json!([{ "id": 1, "title": "Featured gig" }]),
        )]);
        let mut doc = Document::skeleton();
        render_jobs(&featured, &mut doc).unwrap();
        assert!(doc.inner_html("jobsGrid").unwrap().contains("Featured gig"));
    }

    #[test]
    fn test_empty_recommendations_do_not_fall_back() {
        let both = bundle(vec![
            (ResourceKey::Recommendations, json!([])),
            (ResourceKey::FeaturedProjects, json!([{ "id": 1, "title": "Featured gig" }])),
        ]);
        let mut doc = Document::skeleton();
        render_jobs(&both, &mut doc).unwrap();
        assert!(doc.inner_html("jobsGrid").unwrap().contains("No jobs found"));
    }

    #[test]
    fn test_lists_render_empty_on_bad_data() {
        let bad = bundle(vec![
            (ResourceKey::FreelancersTop, json!({ "detail": "error" })),
            (ResourceKey::Categories, json!("nope")),
        ]);
        let mut doc = Document::skeleton();
        doc.set_html("freelancers", "<p>skeleton</p>").unwrap();
        render_freelancers(&bad, &mut doc).unwrap();
        render_categories(&bad, &mut doc).unwrap();
        render_testimonials(&bad, &mut doc).unwrap();
        assert_eq!(doc.inner_html("freelancers").unwrap(), "");
        assert_eq!(doc.inner_html("categories").unwrap(), "");
        assert_eq!(doc.inner_html("testimonials").unwrap(), "");
    }

    #[test]
    fn test_render_all_is_idempotent() {
        let bundle = bundle(vec![
            (ResourceKey::Categories, json!([{ "name": "Design" }, { "name": "Writing" }])),
            (ResourceKey::ReviewsLatest, json!([{ "comment": "Fast", "user": "rafi" }])),
            (ResourceKey::FeaturedProjects, json!([{ "id": 3, "title": "Icons" }])),
        ]);
        let mut doc = Document::skeleton();
        super::super::render_all(&bundle, &mut doc).unwrap();
        let first = doc.clone();
        super::super::render_all(&bundle, &mut doc).unwrap();
        assert_eq!(doc, first);
        assert_eq!(doc.inner_html("categories").unwrap().matches("Design").count(), 1);
    }

    #[test]
    fn test_render_all_reports_missing_region() {
        let mut doc = Document::new();
        assert!(matches!(
            super::super::render_all(&ResourceBundle::default(), &mut doc),
            Err(RenderError::MissingElement(_))
        ));
    }

    #[test]
    fn test_unread_notifications() {
        let counted = bundle(vec![(ResourceKey::NotificationsCount, json!({ "unread": 4 }))]);
        assert_eq!(unread_notifications(&counted), Some(4.0));

        let text = bundle(vec![(ResourceKey::NotificationsCount, json!({ "unread": "4" }))]);
        assert_eq!(unread_notifications(&text), None);
    }
}
