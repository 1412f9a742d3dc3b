use serde_json::Value;
use tracing::{info, warn};

use crate::api::{ApiError, ResourceSource};
use crate::dom::Document;
use crate::models::Category;
use crate::render::templates::category_card;

use super::DashboardError;

/// Full category list for the standalone categories page
pub const CATEGORIES_PATH: &str = "/categories/";

/// Region the categories page renders into
const CATEGORIES_REGION: &str = "categories";

/// Loads the full category list: anonymous, uncached, no fallback.
pub struct CategoriesLoader<S> {
    source: S,
}

impl<S: ResourceSource> CategoriesLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch and render every category as a card. Returns the number of
    /// cards rendered. A non-list response is an error.
    pub async fn load(&self, doc: &mut Document) -> Result<usize, DashboardError> {
        let items = match self.source.get_json(CATEGORIES_PATH, None).await? {
            Some(Value::Array(items)) => items,
            other => {
                warn!(response = ?other, "Categories response is not a list");
                return Err(ApiError::InvalidResponse("expected a list of categories".to_string()).into());
            }
        };

        let categories: Vec<Category> = items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect();

        let html = categories
            .iter()
            .map(category_card)
            .collect::<Vec<_>>()
            .join("");
        doc.set_html(CATEGORIES_REGION, html)?;

        info!(count = categories.len(), "Categories rendered");
        Ok(categories.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::fake::{FakeSource, Reply};
    use serde_json::json;

    #[tokio::test]
    async fn test_renders_cards_without_token() {
        let source = FakeSource::new();
        source.set(
            CATEGORIES_PATH,
            Reply::Json(json!([
                { "name": "Design", "description": "Logos & branding" },
                { "name": "Writing" }
            ])),
        );
        let loader = CategoriesLoader::new(source);
        let mut doc = Document::skeleton();

        assert_eq!(loader.load(&mut doc).await.unwrap(), 2);

        let html = doc.inner_html("categories").unwrap();
        assert!(html.contains("Design"));
        assert!(html.contains("Logos &amp; branding"));
        assert!(html.contains("Writing"));
        assert_eq!(
            loader.source.calls(),
            vec![(CATEGORIES_PATH.to_string(), None)]
        );
    }

    #[tokio::test]
    async fn test_every_load_fetches() {
        let source = FakeSource::new();
        source.set(CATEGORIES_PATH, Reply::Json(json!([])));
        let loader = CategoriesLoader::new(source);
        let mut doc = Document::skeleton();

        loader.load(&mut doc).await.unwrap();
        loader.load(&mut doc).await.unwrap();
        assert_eq!(loader.source.calls_to(CATEGORIES_PATH), 2);
        assert_eq!(doc.inner_html("categories").unwrap(), "");
    }

    #[tokio::test]
    async fn test_non_list_is_an_error() {
        let source = FakeSource::new();
        source.set(CATEGORIES_PATH, Reply::Json(json!({ "results": [] })));
        let loader = CategoriesLoader::new(source);
        let mut doc = Document::skeleton();

        assert!(matches!(
            loader.load(&mut doc).await,
            Err(DashboardError::Api(ApiError::InvalidResponse(_)))
        ));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_an_error() {
        let source = FakeSource::new();
        source.set(CATEGORIES_PATH, Reply::Status(500));
        let loader = CategoriesLoader::new(source);
        let mut doc = Document::skeleton();

        assert!(matches!(
            loader.load(&mut doc).await,
            Err(DashboardError::Api(ApiError::RequestFailed { status: 500, .. }))
        ));
    }
}
