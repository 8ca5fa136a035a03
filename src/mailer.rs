use crate::errors::AppError;
use crate::models::NotificationMessage;
use serde_json::{json, Value};
use std::time::Duration;

/// Client for the transactional mail HTTP API.
///
/// One JSON POST per message, bearer-token auth, delivery id in the response.
/// Transport failures surface as `AppError`; the dispatcher decides what to do
/// with them (log and continue).
#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    base_url: String,
    token: String,
    from: String,
}

impl Mailer {
    /// Creates a new `Mailer`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the mail API.
    /// * `token` - The API token for authentication.
    /// * `from` - Sender address stamped on every message.
    pub fn new(base_url: String, token: String, from: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create mail client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            token,
            from,
        })
    }

    /// Sends one rendered message.
    ///
    /// # Arguments
    ///
    /// * `message` - The fully rendered notification to deliver.
    ///
    /// # Returns
    ///
    /// * `Result<String, AppError>` - The transport's delivery identifier.
    pub async fn send(&self, message: &NotificationMessage) -> Result<String, AppError> {
        let url = format!("{}/emails", self.base_url);
        tracing::info!("Sending '{}' to {}", message.subject, message.to);

        let mut payload = serde_json::Map::new();
        payload.insert("from".to_string(), json!(self.from));
        payload.insert("to".to_string(), json!(message.to));
        payload.insert("subject".to_string(), json!(message.subject));
        payload.insert("html".to_string(), json!(message.html));
        payload.insert("text".to_string(), json!(message.text));
        payload.insert("priority".to_string(), json!(message.priority.as_str()));

        if !message.headers.is_empty() {
            let headers: serde_json::Map<String, Value> = message
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), json!(value)))
                .collect();
            payload.insert("headers".to_string(), Value::Object(headers));
        }

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&Value::Object(payload))
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Mail API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Mail API returned {}: {}",
                status, error_text
            )));
        }

        let response_data: Value = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse mail API response: {}", e))
        })?;

        // Try to get the delivery id from the possible response shapes
        let delivery_id = if let Some(id) = response_data.get("id").and_then(|i| i.as_str()) {
            id.to_string()
        } else if let Some(id) = response_data.get("message_id").and_then(|i| i.as_str()) {
            id.to_string()
        } else if let Some(id) = response_data.get("id").and_then(|i| i.as_i64()) {
            id.to_string()
        } else {
            tracing::warn!("Unexpected mail API response format: {:?}", response_data);
            return Err(AppError::ExternalApiError(
                "Mail API response missing 'id' field".to_string(),
            ));
        };

        tracing::info!("✓ Email dispatched to {} (id {})", message.to, delivery_id);
        Ok(delivery_id)
    }
}
