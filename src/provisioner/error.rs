//! Provisioning batch errors

use thiserror::Error;

/// Errors that stop a provisioning batch before it starts.
///
/// Per-service failures never surface here; they are reported as
/// [`ProvisionOutcome::Failed`](super::ProvisionOutcome::Failed).
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("service name '{0}' appears more than once in the batch")]
    DuplicateName(String),
}
