//! Render layer.
//!
//! One routine per display region, each reading the immutable
//! `ResourceBundle` and writing only its own elements. Routines never fail on
//! bad data: missing or malformed resources render the region's fallback.
//! The only error is a region element missing from the document.

pub mod regions;
pub mod templates;

pub use crate::dom::RenderError;
pub use regions::{
    render_categories, render_featured, render_freelancers, render_jobs, render_stats,
    render_summary, render_testimonials, unread_notifications, SIGNED_OUT_SUMMARY,
};

use crate::dom::Document;
use crate::resources::ResourceBundle;

/// Render every region of the dashboard.
pub fn render_all(bundle: &ResourceBundle, doc: &mut Document) -> Result<(), RenderError> {
    render_stats(bundle, doc)?;
    render_featured(bundle, doc)?;
    render_jobs(bundle, doc)?;
    render_freelancers(bundle, doc)?;
    render_categories(bundle, doc)?;
    render_testimonials(bundle, doc)?;
    render_summary(bundle, doc)?;
    Ok(())
}
