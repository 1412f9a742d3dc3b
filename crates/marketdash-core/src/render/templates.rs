//! HTML templates for list items.

use crate::models::scalar::truthy;
use crate::models::{Category, Freelancer, Job, Review};
use crate::utils::{escape_html, money, or_dash};

pub fn job_card(job: &Job) -> String {
    let title = escape_html(job.title.as_deref().unwrap_or_default());
    let description = escape_html(job.short_description.as_deref().unwrap_or_default());
    let budget = escape_html(&money(truthy(&job.budget_min)));
    let posted = escape_html(&or_dash(job.posted_days_ago.as_ref()));
    let href = escape_html(&job.href());

    format!(
        r#"<article class="p-5 bg-white rounded-2xl shadow-sm card-hover">
  <div class="flex items-start justify-between">
    <div class="max-w-[70%]">
      <h3 class="font-semibold text-lg">{title}</h3>
      <p class="text-sm text-slate-500 mt-1">{description}</p>
    </div>
    <div class="text-emerald-600 font-bold">{budget}</div>
  </div>
  <div class="mt-4 flex items-center justify-between text-xs text-slate-400">
    <div>Posted • {posted} days</div>
    <a href="{href}" class="text-emerald-600">View →</a>
  </div>
</article>"#
    )
}

pub fn no_jobs() -> &'static str {
    r#"<div class="p-6 bg-white rounded-2xl text-center">No jobs found</div>"#
}

pub fn freelancer_item(freelancer: &Freelancer) -> String {
    let username = escape_html(freelancer.username.as_deref().unwrap_or_default());
    let title = escape_html(freelancer.title.as_deref().unwrap_or_default());
    let avatar = match crate::models::non_empty(&freelancer.avatar) {
        Some(src) => format!(r#"<img src="{}" alt="{}">"#, escape_html(src), username),
        None => String::new(),
    };

    format!(
        r#"<div class="flex items-center gap-3">
  <div class="w-10 h-10 rounded-full bg-slate-100 overflow-hidden">{avatar}</div>
  <div><div class="font-semibold text-sm">{username}</div><div class="text-xs text-slate-400">{title}</div></div>
</div>"#
    )
}

pub fn testimonial(review: &Review) -> String {
    let comment = escape_html(review.comment.as_deref().unwrap_or_default());
    let author = escape_html(&review.author());

    format!(
        r#"<blockquote class="p-4 bg-slate-50 rounded-lg text-sm">
  <p class="italic">“{comment}”</p>
  <div class="mt-2 text-xs text-slate-500">— {author}</div>
</blockquote>"#
    )
}

pub fn category_chip(category: &Category) -> String {
    format!(
        r#"<div class="p-3 bg-white rounded-lg shadow-sm text-center text-sm">{}</div>"#,
        escape_html(category.name.as_deref().unwrap_or_default())
    )
}

/// Full category card used by the standalone categories page.
pub fn category_card(category: &Category) -> String {
    let name = escape_html(category.name.as_deref().unwrap_or_default());
    let description = escape_html(category.description.as_deref().unwrap_or_default());

    format!(
        r#"<div class="p-4 bg-white rounded-xl shadow hover:shadow-lg transition">
  <h3 class="font-semibold text-lg">{name}</h3>
  <p class="text-gray-500">{description}</p>
</div>"#
    )
}
