//! Server-rendered marketing pages over the static content catalog.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tera::Context;

use crate::content;
use crate::errors::AppError;
use crate::handlers::AppState;
use crate::sitemap;

/// Builds the template engine from the compiled-in template set.
pub fn templates() -> Result<tera::Tera, AppError> {
    let mut tera = tera::Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("services.html", include_str!("../templates/services.html")),
        (
            "service_detail.html",
            include_str!("../templates/service_detail.html"),
        ),
        ("gallery.html", include_str!("../templates/gallery.html")),
        ("contact.html", include_str!("../templates/contact.html")),
        ("privacy.html", include_str!("../templates/privacy.html")),
        ("terms.html", include_str!("../templates/terms.html")),
        ("404.html", include_str!("../templates/404.html")),
    ])?;
    Ok(tera)
}

/// Home page: hero plus the full services overview.
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("title", "Hello Turf | Austin's Artificial Turf Specialists");
    context.insert("current_page", "home");
    context.insert("services", content::all_services());
    render(&state, "index.html", &context)
}

/// Services index page.
pub async fn services_index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("title", "Our Services | Hello Turf");
    context.insert("current_page", "services");
    context.insert("services", content::all_services());
    render(&state, "services.html", &context)
}

/// Service detail page; unknown slugs get the 404 page.
pub async fn service_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Some(service) = content::service_by_slug(&slug) else {
        tracing::debug!("Unknown service slug: {}", slug);
        return not_found_page(
            &state,
            &format!("/services/{}", slug),
            "404 - Service Not Found",
        );
    };

    let mut context = Context::new();
    context.insert("title", &format!("{} | Hello Turf", service.name));
    context.insert("current_page", "services");
    context.insert("service", service);
    context.insert("all_services", content::all_services());
    let page = render(&state, "service_detail.html", &context)?;
    Ok(page.into_response())
}

/// Gallery page.
pub async fn gallery(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("title", "Our Work Gallery | Hello Turf");
    context.insert("current_page", "gallery");
    context.insert("gallery_items", content::gallery_items());
    render(&state, "gallery.html", &context)
}

/// Query flags set by the non-JS form fallback redirect.
#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    success: Option<String>,
    error: Option<String>,
}

/// Contact page with the quote form.
pub async fn contact(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContactQuery>,
) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("title", "Contact Us - Get Free Quote | Hello Turf");
    context.insert("current_page", "contact");
    context.insert("success", &(query.success.as_deref() == Some("true")));
    context.insert("error", &(query.error.as_deref() == Some("true")));
    render(&state, "contact.html", &context)
}

/// Quote form page; same template as the contact page.
pub async fn quote_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("title", "Get a Free Quote | Hello Turf");
    context.insert("current_page", "contact");
    context.insert("success", &false);
    context.insert("error", &false);
    render(&state, "contact.html", &context)
}

/// Privacy policy page.
pub async fn privacy(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("title", "Privacy Policy | Hello Turf");
    context.insert("current_page", "privacy");
    render(&state, "privacy.html", &context)
}

/// Terms of service page.
pub async fn terms(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("title", "Terms of Service | Hello Turf");
    context.insert("current_page", "terms");
    render(&state, "terms.html", &context)
}

/// XML sitemap over the public routes and every service detail page.
pub async fn sitemap_xml(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let xml = sitemap::generate(&state.config.base_url);
    ([(header::CONTENT_TYPE, "application/xml")], xml)
}

/// Fallback for unmatched routes.
pub async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    match not_found_page(&state, uri.path(), "404 - Page Not Found") {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

fn not_found_page(state: &AppState, path: &str, title: &str) -> Result<Response, AppError> {
    let mut context = Context::new();
    context.insert("title", title);
    context.insert("current_page", "");
    context.insert("path", path);
    let html = state.templates.render("404.html", &context)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

fn render(state: &AppState, template: &str, context: &Context) -> Result<Html<String>, AppError> {
    let html = state.templates.render(template, context)?;
    Ok(Html(html))
}
