//! In-memory page document.
//!
//! The dashboard renders into a pre-existing page skeleton whose display
//! regions are addressed by element id. `Document` models exactly that
//! contract: a flat, ordered set of elements with text or HTML content, an
//! optional link target and a class list.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::utils::escape_html;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Element #{0} not found in document")]
    MissingElement(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Html(String),
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub tag: String,
    pub content: Content,
    pub href: Option<String>,
    classes: BTreeSet<String>,
}

impl Element {
    pub fn new(tag: &str, id: &str) -> Self {
        Self {
            id: id.to_string(),
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.content = Content::Text(text.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Content as the browser would serialize it.
    pub fn inner_html(&self) -> String {
        match self.content {
            Content::Text(ref text) => escape_html(text),
            Content::Html(ref html) => html.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut attrs = format!(r#" id="{}""#, escape_html(&self.id));
        if !self.classes.is_empty() {
            let classes: Vec<&str> = self.classes().collect();
            attrs.push_str(&format!(r#" class="{}""#, escape_html(&classes.join(" "))));
        }
        if let Some(ref href) = self.href {
            attrs.push_str(&format!(r#" href="{}""#, escape_html(href)));
        }
        format!("<{tag}{attrs}>{}</{tag}>", self.inner_html(), tag = self.tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dashboard page skeleton with every region the renderers expect.
    pub fn skeleton() -> Self {
        let mut doc = Self::new();
        doc.insert(Element::new("header", "siteHeader"));
        doc.insert(Element::new("nav", "siteNav").with_class("hidden"));
        doc.insert(Element::new("button", "mobileMenu").with_text("Menu"));
        doc.insert(Element::new("span", "stat_projects").with_text("—"));
        doc.insert(Element::new("span", "stat_freelancers").with_text("—"));
        doc.insert(Element::new("span", "stat_paid").with_text("৳—"));
        doc.insert(Element::new("article", "featured").with_class("card-hover"));
        doc.insert(Element::new("h3", "featured_title").with_text("Loading…"));
        doc.insert(Element::new("span", "featured_price").with_text("৳—"));
        let mut link = Element::new("a", "featured_link").with_text("View project");
        link.href = Some("#".to_string());
        doc.insert(link);
        doc.insert(Element::new("div", "jobsGrid"));
        doc.insert(Element::new("section", "freelancersCard"));
        doc.insert(Element::new("div", "freelancers"));
        doc.insert(Element::new("section", "categoriesCard"));
        doc.insert(Element::new("div", "categories"));
        doc.insert(Element::new("section", "testimonialsCard"));
        doc.insert(Element::new("div", "testimonials"));
        doc.insert(Element::new("p", "miniSummary"));
        doc.insert(Element::new("button", "copyReferral").with_text("Copy referral link"));
        doc
    }

    /// Insert an element, replacing any element with the same id.
    pub fn insert(&mut self, element: Element) {
        match self.elements.iter_mut().find(|e| e.id == element.id) {
            Some(existing) => *existing = element,
            None => self.elements.push(element),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn require(&mut self, id: &str) -> Result<&mut Element, RenderError> {
        self.elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RenderError::MissingElement(id.to_string()))
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), RenderError> {
        self.require(id)?.content = Content::Text(text.into());
        Ok(())
    }

    pub fn set_html(&mut self, id: &str, html: impl Into<String>) -> Result<(), RenderError> {
        self.require(id)?.content = Content::Html(html.into());
        Ok(())
    }

    pub fn set_href(&mut self, id: &str, href: impl Into<String>) -> Result<(), RenderError> {
        self.require(id)?.href = Some(href.into());
        Ok(())
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> Result<(), RenderError> {
        self.require(id)?.classes.insert(class.to_string());
        Ok(())
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> Result<(), RenderError> {
        self.require(id)?.classes.remove(class);
        Ok(())
    }

    /// Flip `class` on an element; returns whether it is now present.
    pub fn toggle_class(&mut self, id: &str, class: &str) -> Result<bool, RenderError> {
        let element = self.require(id)?;
        if element.classes.remove(class) {
            Ok(false)
        } else {
            element.classes.insert(class.to_string());
            Ok(true)
        }
    }

    /// Id of the first element with the given tag.
    pub fn first_with_tag(&self, tag: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.tag == tag)
            .map(|e| e.id.as_str())
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).map(|e| e.has_class(class)).unwrap_or(false)
    }

    /// Text content of a text element, `None` for missing or HTML elements.
    pub fn text(&self, id: &str) -> Option<&str> {
        match self.get(id)?.content {
            Content::Text(ref text) => Some(text),
            Content::Html(_) => None,
        }
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.get(id).map(Element::inner_html)
    }

    pub fn href(&self, id: &str) -> Option<&str> {
        self.get(id)?.href.as_deref()
    }

    /// Ids of all elements carrying `class`, in document order.
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.has_class(class))
            .map(|e| e.id.clone())
            .collect()
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn to_html(&self) -> String {
        self.elements
            .iter()
            .map(Element::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
