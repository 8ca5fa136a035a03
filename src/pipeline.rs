//! The quote submission pipeline.
//!
//! Linear state machine, no loops:
//! RECEIVED → VALIDATING → (VALID → ENRICHING → NOTIFYING → SUCCEEDED)
//!                       | (INVALID → REJECTED)
//!
//! Only validation detail ever crosses the boundary. Everything after VALID is
//! built to degrade, and whatever still manages to fail is caught here and
//! mapped to the generic FAILED outcome.

use crate::enrichment::RequestContext;
use crate::errors::AppError;
use crate::handlers::AppState;
use crate::models::{QuoteRequest, SubmissionResult};
use crate::notifications;
use crate::validation::{validate_quote, QuoteForm};

/// Runs one submission to a terminal outcome. Never fails; the caller always
/// gets exactly one of REJECTED, SUCCEEDED, or FAILED.
pub async fn process_submission(
    state: &AppState,
    form: QuoteForm,
    mut ctx: RequestContext,
) -> SubmissionResult {
    tracing::info!("📝 New quote submission from {}", ctx.ip);

    // Step 1: Validate; violations go back to the caller verbatim
    let quote = match validate_quote(&form) {
        Ok(quote) => quote,
        Err(errors) => {
            tracing::info!(
                "Submission rejected: {} field violation(s): {:?}",
                errors.len(),
                errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>()
            );
            return SubmissionResult::rejected(errors);
        }
    };

    tracing::info!("✓ Quote validated for {} ({})", quote.full_name, quote.phone);

    // Steps 2-3 run behind the pipeline boundary: an unexpected failure maps
    // to the fixed FAILED outcome, with detail kept server-side
    match enrich_and_notify(state, &quote, &mut ctx).await {
        Ok(()) => SubmissionResult::succeeded(),
        Err(e) => {
            tracing::error!(
                "Quote pipeline failed after validation for {}: {}",
                quote.full_name,
                e
            );
            SubmissionResult::failed()
        }
    }
}

/// The post-validation stages. Each is individually degrading; the `Result`
/// exists so anything non-degrading still hits the boundary above.
async fn enrich_and_notify(
    state: &AppState,
    quote: &QuoteRequest,
    ctx: &mut RequestContext,
) -> Result<(), AppError> {
    // Step 2: Enrich with geolocation; lookups that miss or fail leave it unset
    ctx.geo = state.geo.resolve(&ctx.ip).await;

    // Step 3: Notify; both sends are independent best-effort attempts
    let report = notifications::dispatch(state.mailer.as_ref(), &state.config, quote, ctx).await;
    tracing::info!(
        "Dispatch for {}: business {}/{}, customer {}/{}",
        quote.full_name,
        if report.business_attempted { "attempted" } else { "skipped" },
        if report.business_delivered { "delivered" } else { "not delivered" },
        if report.customer_attempted { "attempted" } else { "skipped" },
        if report.customer_delivered { "delivered" } else { "not delivered" },
    );

    Ok(())
}
