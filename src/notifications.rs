//! Quote notification rendering and dispatch.
//!
//! Two messages per submission at most: the business alert (always) and the
//! customer confirmation (only when the submitter left an email address).
//! Each send is an independent best-effort attempt; failures are logged and
//! swallowed so a mail hiccup never costs us the lead.

use crate::config::Config;
use crate::enrichment::RequestContext;
use crate::errors::ResultExt;
use crate::mailer::Mailer;
use crate::models::{NotificationMessage, Priority, QuoteRequest};

/// What the dispatcher actually attempted and what got through. Informational
/// only; the pipeline outcome does not depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Business alert handed to the transport.
    pub business_attempted: bool,
    /// Business alert accepted by the transport.
    pub business_delivered: bool,
    /// Customer confirmation handed to the transport.
    pub customer_attempted: bool,
    /// Customer confirmation accepted by the transport.
    pub customer_delivered: bool,
}

/// Renders and sends both messages, best-effort and in order.
///
/// A business-send failure does not stop the customer confirmation, and no
/// failure here escapes to the caller.
pub async fn dispatch(
    mailer: Option<&Mailer>,
    config: &Config,
    quote: &QuoteRequest,
    ctx: &RequestContext,
) -> DispatchReport {
    let mut report = DispatchReport::default();

    let Some(mailer) = mailer else {
        tracing::warn!(
            "Mail transport not configured; skipping notifications for quote from {}",
            quote.full_name
        );
        return report;
    };

    let business = business_notification(quote, ctx, &config.email_to);
    report.business_attempted = true;
    match mailer
        .send(&business)
        .await
        .context("Business notification send failed")
    {
        Ok(id) => {
            report.business_delivered = true;
            tracing::info!("Business alert delivered for {} (id {})", quote.full_name, id);
        }
        Err(e) => {
            // Keep going; the customer confirmation is independent
            tracing::error!("✗ {}", e);
        }
    }

    if let Some(confirmation) = customer_confirmation(quote) {
        report.customer_attempted = true;
        match mailer
            .send(&confirmation)
            .await
            .context("Customer confirmation send failed")
        {
            Ok(id) => {
                report.customer_delivered = true;
                tracing::info!("Customer confirmation delivered to {} (id {})", confirmation.to, id);
            }
            Err(e) => {
                tracing::error!("✗ {}", e);
            }
        }
    } else {
        tracing::debug!("No email supplied; customer confirmation skipped");
    }

    report
}

/// The high-priority alert sent to the configured operator address.
pub fn business_notification(
    quote: &QuoteRequest,
    ctx: &RequestContext,
    email_to: &str,
) -> NotificationMessage {
    NotificationMessage {
        to: email_to.to_string(),
        subject: format!("New Quote Request - {}", quote.full_name),
        html: business_html(quote, ctx),
        text: business_text(quote, ctx),
        priority: Priority::High,
        headers: vec![("X-Priority".to_string(), "1".to_string())],
    }
}

/// The receipt confirmation for the submitter; `None` without an email address.
pub fn customer_confirmation(quote: &QuoteRequest) -> Option<NotificationMessage> {
    let email = quote.email.as_ref()?;

    Some(NotificationMessage {
        to: email.clone(),
        subject: "Thank you for your quote request - Hello Turf".to_string(),
        html: confirmation_html(quote),
        text: confirmation_text(quote),
        priority: Priority::Normal,
        headers: Vec::new(),
    })
}

fn field_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().unwrap_or(fallback)
}

fn business_html(quote: &QuoteRequest, ctx: &RequestContext) -> String {
    let mut html = String::from("<h2>New Quote Request</h2>\n");

    let field = |label: &str, value: &str| {
        format!(
            "<p><strong>{}:</strong> {}</p>\n",
            label,
            escape_html(value)
        )
    };

    html.push_str(&field("Name", &quote.full_name));
    html.push_str(&field("Email", field_or(&quote.email, "Not provided")));
    html.push_str(&field("Phone", &quote.phone));
    html.push_str(&field("Address", field_or(&quote.address, "Not provided")));
    html.push_str(&field(
        "Project Size",
        field_or(&quote.project_size, "Not specified"),
    ));
    html.push_str(&field(
        "Message",
        field_or(&quote.message, "No additional message"),
    ));

    html.push_str("<hr>\n<h3>Request Metadata</h3>\n");
    html.push_str(&field(
        "Submitted",
        &ctx.submitted_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    ));
    html.push_str(&field("IP Address", &ctx.ip));
    match &ctx.geo {
        Some(geo) => {
            html.push_str(&field("Location", &geo.summary()));
            if let Some(tz) = &geo.timezone {
                html.push_str(&field("Timezone", tz));
            }
            if let Some(isp) = &geo.isp {
                html.push_str(&field("ISP", isp));
            }
        }
        None => html.push_str(&field("Location", "Unknown")),
    }
    html.push_str(&field("Browser", &ctx.client.summary()));
    html.push_str(&field("Referrer", &ctx.referrer));
    html.push_str(&field("Language", &ctx.accept_language));

    html
}

fn business_text(quote: &QuoteRequest, ctx: &RequestContext) -> String {
    let mut text = String::from("New Quote Request\n\n");

    text.push_str(&format!("Name: {}\n", quote.full_name));
    text.push_str(&format!(
        "Email: {}\n",
        field_or(&quote.email, "Not provided")
    ));
    text.push_str(&format!("Phone: {}\n", quote.phone));
    text.push_str(&format!(
        "Address: {}\n",
        field_or(&quote.address, "Not provided")
    ));
    text.push_str(&format!(
        "Project Size: {}\n",
        field_or(&quote.project_size, "Not specified")
    ));
    text.push_str(&format!(
        "Message: {}\n",
        field_or(&quote.message, "No additional message")
    ));

    text.push_str("\nRequest Metadata\n");
    text.push_str(&format!(
        "Submitted: {}\n",
        ctx.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    text.push_str(&format!("IP Address: {}\n", ctx.ip));
    match &ctx.geo {
        Some(geo) => {
            text.push_str(&format!("Location: {}\n", geo.summary()));
            if let Some(tz) = &geo.timezone {
                text.push_str(&format!("Timezone: {}\n", tz));
            }
            if let Some(isp) = &geo.isp {
                text.push_str(&format!("ISP: {}\n", isp));
            }
        }
        None => text.push_str("Location: Unknown\n"),
    }
    text.push_str(&format!("Browser: {}\n", ctx.client.summary()));
    text.push_str(&format!("Referrer: {}\n", ctx.referrer));
    text.push_str(&format!("Language: {}\n", ctx.accept_language));

    text
}

fn confirmation_html(quote: &QuoteRequest) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<h2>Thanks, {}!</h2>\n",
        escape_html(&quote.full_name)
    ));
    html.push_str(
        "<p>We received your quote request and will contact you within 24 hours.</p>\n",
    );
    html.push_str(&format!(
        "<p>We'll reach out at <strong>{}</strong>",
        escape_html(&quote.phone)
    ));
    if let Some(email) = &quote.email {
        html.push_str(&format!(" or <strong>{}</strong>", escape_html(email)));
    }
    html.push_str(".</p>\n");
    html.push_str(
        "<p>Need us sooner? Call <strong>(512) 317-5400</strong>.</p>\n\
         <p>- The Hello Turf Team</p>\n",
    );
    html
}

fn confirmation_text(quote: &QuoteRequest) -> String {
    let mut text = String::new();
    text.push_str(&format!("Thanks, {}!\n\n", quote.full_name));
    text.push_str("We received your quote request and will contact you within 24 hours.\n");
    text.push_str(&format!("We'll reach out at {}", quote.phone));
    if let Some(email) = &quote.email {
        text.push_str(&format!(" or {}", email));
    }
    text.push_str(".\n\nNeed us sooner? Call (512) 317-5400.\n\n- The Hello Turf Team\n");
    text
}

/// Minimal HTML escaping for user-supplied values interpolated into bodies.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
