/// Integration tests for the quote submission pipeline with mocked external APIs
/// Exercises the full validate → enrich → notify flow without real network calls
use axum::http::{HeaderMap, HeaderValue};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hello_turf::config::Config;
use hello_turf::enrichment::RequestContext;
use hello_turf::geo::GeoService;
use hello_turf::handlers::AppState;
use hello_turf::mailer::Mailer;
use hello_turf::models::{REJECTION_MESSAGE, SUCCESS_MESSAGE};
use hello_turf::pages;
use hello_turf::pipeline::process_submission;
use hello_turf::validation::QuoteForm;

/// Helper function to create test config
fn test_config(geoip_api_url: String, mail_api_url: Option<String>) -> Config {
    let mail_api_token = mail_api_url.as_ref().map(|_| "test_token".to_string());
    Config {
        port: 3000,
        base_url: "https://helloturf.com".to_string(),
        mail_api_url,
        mail_api_token,
        email_from: "Hello Turf <no-reply@helloturf.com>".to_string(),
        email_to: "quotes@helloturf.com".to_string(),
        geoip_db_path: None,
        geoip_api_url,
    }
}

/// Assembles application state the way main does, minus the listener.
fn test_state(config: Config) -> AppState {
    let geo = GeoService::new(&config);
    let mailer = match (&config.mail_api_url, &config.mail_api_token) {
        (Some(url), Some(token)) => Some(
            Mailer::new(url.clone(), token.clone(), config.email_from.clone())
                .expect("mail client"),
        ),
        _ => None,
    };
    let templates = pages::templates().expect("templates");

    AppState {
        config,
        geo,
        mailer,
        templates,
    }
}

fn valid_form() -> QuoteForm {
    QuoteForm {
        full_name: Some("Jane Doe".to_string()),
        phone: Some("(512) 317-5400".to_string()),
        ..QuoteForm::default()
    }
}

fn ctx_from_ip(ip: &'static str) -> RequestContext {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static(ip));
    RequestContext::from_request(&headers, None)
}

fn geo_success_payload() -> serde_json::Value {
    serde_json::json!({
        "status": "success",
        "country": "United States",
        "regionName": "Texas",
        "city": "Austin",
        "lat": 30.2672,
        "lon": -97.7431,
        "timezone": "America/Chicago",
        "isp": "Example ISP"
    })
}

fn mail_accepted() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "msg-123"}))
}

#[tokio::test]
async fn test_valid_quote_without_email_sends_business_alert_only() {
    let geo_api = MockServer::start().await;
    let mail_api = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/203.0.113.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geo_success_payload()))
        .expect(1)
        .mount(&geo_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("Authorization", "Bearer test_token"))
        .and(body_partial_json(serde_json::json!({
            "to": "quotes@helloturf.com",
            "from": "Hello Turf <no-reply@helloturf.com>",
            "priority": "high"
        })))
        .respond_with(mail_accepted())
        .expect(1)
        .mount(&mail_api)
        .await;

    let state = test_state(test_config(geo_api.uri(), Some(mail_api.uri())));
    let result = process_submission(&state, valid_form(), ctx_from_ip("203.0.113.7")).await;

    assert!(result.success);
    assert_eq!(result.message, SUCCESS_MESSAGE);
    assert!(result.errors.is_none());
}

#[tokio::test]
async fn test_valid_quote_with_email_also_sends_confirmation() {
    let geo_api = MockServer::start().await;
    let mail_api = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geo_success_payload()))
        .mount(&geo_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(body_partial_json(serde_json::json!({"to": "quotes@helloturf.com"})))
        .respond_with(mail_accepted())
        .expect(1)
        .mount(&mail_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(body_partial_json(serde_json::json!({
            "to": "jane@example.com",
            "priority": "normal"
        })))
        .respond_with(mail_accepted())
        .expect(1)
        .mount(&mail_api)
        .await;

    let form = QuoteForm {
        email: Some("jane@example.com".to_string()),
        ..valid_form()
    };

    let state = test_state(test_config(geo_api.uri(), Some(mail_api.uri())));
    let result = process_submission(&state, form, ctx_from_ip("203.0.113.7")).await;

    assert!(result.success);
}

#[tokio::test]
async fn test_invalid_quote_rejected_before_any_network_calls() {
    let geo_api = MockServer::start().await;
    let mail_api = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geo_success_payload()))
        .expect(0)
        .mount(&geo_api)
        .await;

    Mock::given(method("POST"))
        .respond_with(mail_accepted())
        .expect(0)
        .mount(&mail_api)
        .await;

    let state = test_state(test_config(geo_api.uri(), Some(mail_api.uri())));
    let result = process_submission(&state, QuoteForm::default(), ctx_from_ip("203.0.113.7")).await;

    assert!(!result.success);
    assert_eq!(result.message, REJECTION_MESSAGE);

    let errors = result.errors.unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["fullName", "phone"]);
}

#[tokio::test]
async fn test_geo_api_failure_degrades_to_success() {
    let geo_api = MockServer::start().await;
    let mail_api = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&geo_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(mail_accepted())
        .expect(1)
        .mount(&mail_api)
        .await;

    let state = test_state(test_config(geo_api.uri(), Some(mail_api.uri())));
    let result = process_submission(&state, valid_form(), ctx_from_ip("203.0.113.7")).await;

    assert!(result.success);
    assert_eq!(result.message, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn test_mail_api_failure_still_reports_success() {
    let geo_api = MockServer::start().await;
    let mail_api = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geo_success_payload()))
        .mount(&geo_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&mail_api)
        .await;

    let state = test_state(test_config(geo_api.uri(), Some(mail_api.uri())));
    let result = process_submission(&state, valid_form(), ctx_from_ip("203.0.113.7")).await;

    assert!(result.success);
    assert_eq!(result.message, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn test_unconfigured_mailer_still_captures_lead() {
    let geo_api = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geo_success_payload()))
        .expect(1)
        .mount(&geo_api)
        .await;

    let state = test_state(test_config(geo_api.uri(), None));
    assert!(state.mailer.is_none());

    let result = process_submission(&state, valid_form(), ctx_from_ip("203.0.113.7")).await;

    assert!(result.success);
    assert_eq!(result.message, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn test_loopback_ip_skips_remote_geolocation() {
    let geo_api = MockServer::start().await;
    let mail_api = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geo_success_payload()))
        .expect(0)
        .mount(&geo_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(mail_accepted())
        .expect(1)
        .mount(&mail_api)
        .await;

    let state = test_state(test_config(geo_api.uri(), Some(mail_api.uri())));
    let result = process_submission(&state, valid_form(), ctx_from_ip("127.0.0.1")).await;

    assert!(result.success);
}
