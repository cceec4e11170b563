//! Common utilities for the Ranger admin client
//!
//! Span bookkeeping and error-body parsing shared by every operation.

use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::Span;

/// Error document returned by Ranger's REST layer (`VXResponse`)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RangerErrorResponse {
    #[serde(default)]
    msg_desc: Option<String>,
}

/// Extract a human-readable message from an error response body
///
/// Uses Ranger's `msgDesc` when present, then the raw body, then the
/// status's canonical reason.
pub fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<RangerErrorResponse>(body) {
        if let Some(msg) = parsed.msg_desc.filter(|m| !m.trim().is_empty()) {
            return msg;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

/// Records operation span attributes for a successful operation
pub fn record_success(span: &Span, duration: Duration) {
    span.record("operation.success", true);
    span.record("operation.duration_ms", duration_ms(duration));
}

/// Records operation span attributes for a failed operation
pub fn record_error(span: &Span, error_message: &str, duration: Duration) {
    span.record("operation.success", false);
    span.record("error.message", error_message);
    span.record("operation.duration_ms", duration_ms(duration));
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Helper struct for tracking operation state
///
/// The span must declare `operation.success`, `operation.duration_ms` and
/// `error.message` fields, otherwise the recorded values are dropped.
#[derive(Debug)]
pub struct OperationTracker {
    start: Instant,
    span: Span,
}

impl OperationTracker {
    pub fn new(span: Span) -> Self {
        Self {
            start: Instant::now(),
            span,
        }
    }

    pub fn record_success(&self) {
        record_success(&self.span, self.start.elapsed());
    }

    pub fn record_error(&self, error_message: &str) {
        record_error(&self.span, error_message, self.start.elapsed());
    }

    /// Record whether a lookup found its target
    pub fn record_found(&self, found: bool) {
        self.span.record("operation.found", found);
    }
}
