use serde::Serialize;

/// Acknowledgment shown to the visitor when a submission goes through.
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your quote request! We'll contact you within 24 hours.";

/// Fallback shown when something breaks after validation; points at a human.
pub const FAILURE_MESSAGE: &str =
    "Sorry, something went wrong. Please call us directly at (512) 317-5400.";

/// Generic caption for the rejected outcome; the per-field errors carry the detail.
pub const REJECTION_MESSAGE: &str = "Please correct the errors below.";

// ============ Quote Models ============

/// A validated quote request. Immutable once constructed by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    /// Submitter's name, trimmed, 2-100 characters.
    pub full_name: String,
    /// Optional reply address, trimmed and lowercased.
    pub email: Option<String>,
    /// Contact phone, trimmed; digits/spaces/hyphens/parentheses only.
    pub phone: String,
    /// Optional installation address, at most 200 characters.
    pub address: Option<String>,
    /// Optional project size description, at most 50 characters.
    pub project_size: Option<String>,
    /// Optional free-form message, at most 1000 characters.
    pub message: Option<String>,
}

/// A single field-level validation violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the offending field (e.g. "fullName").
    pub field: String,
    /// User-facing description of the problem.
    #[serde(rename = "msg")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The single value returned across the submission boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    /// Whether the lead was captured.
    pub success: bool,
    /// Fixed user-facing outcome message.
    pub message: String,
    /// Per-field violations; present only for the rejected outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl SubmissionResult {
    /// Submission captured; enrichment/notification degradations do not change this.
    pub fn succeeded() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            errors: None,
        }
    }

    /// Validation turned the submission away; violations surfaced verbatim.
    pub fn rejected(errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message: REJECTION_MESSAGE.to_string(),
            errors: Some(errors),
        }
    }

    /// Post-validation failure; generic apology, detail stays in the log.
    pub fn failed() -> Self {
        Self {
            success: false,
            message: FAILURE_MESSAGE.to_string(),
            errors: None,
        }
    }
}

// ============ Notification Models ============

/// Delivery priority for an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Normal,
    High,
}

impl Priority {
    /// Wire representation expected by the mail API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

/// One outbound email, fully rendered. At most two are produced per submission:
/// the business alert (always) and the customer confirmation (only when the
/// submitter left an address).
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Plain-text body.
    pub text: String,
    /// Delivery priority; the business alert goes out high.
    pub priority: Priority,
    /// Extra transport headers (name, value).
    pub headers: Vec<(String, String)>,
}
