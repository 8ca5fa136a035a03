use crate::config::Config;
use crate::enrichment::RequestContext;
use crate::geo::GeoService;
use crate::mailer::Mailer;
use crate::models::SubmissionResult;
use crate::pipeline;
use crate::validation::QuoteForm;
use axum::{
    extract::{ConnectInfo, Form, FromRequest, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tera::Tera;

/// Shared application state injected into handlers.
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// IP geolocation (local database + remote fallback).
    pub geo: GeoService,
    /// Mail transport client; `None` when the mail API is not configured.
    pub mailer: Option<Mailer>,
    /// Compiled page templates.
    pub templates: Tera,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "hello-turf",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// POST /quote/submit
///
/// The quote form endpoint. Accepts the flat field payload as JSON or as a
/// URL-encoded browser form post and runs the submission pipeline.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `peer` - Direct connection address (IP fallback when no proxy headers).
/// * `headers` - Request headers feeding metadata enrichment.
/// * `form` - The submitted quote fields.
///
/// # Returns
///
/// * `(StatusCode, Json<SubmissionResult>)` - 200 on success, 400 on validation
///   rejection, 500 on a post-validation failure.
pub async fn submit_quote(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    JsonOrForm(form): JsonOrForm<QuoteForm>,
) -> (StatusCode, Json<SubmissionResult>) {
    let ctx = RequestContext::from_request(&headers, Some(peer));
    let result = pipeline::process_submission(&state, form, ctx).await;

    let status = if result.success {
        StatusCode::OK
    } else if result.errors.is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(result))
}

/// Extractor accepting a payload as JSON or URL-encoded form data, dispatched
/// on the Content-Type header, so browser posts and API calls share one route.
pub struct JsonOrForm<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self(value));
        }

        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(Self(value))
    }
}
