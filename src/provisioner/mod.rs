//! # Provisioner
//!
//! Idempotent create-if-absent pass over a list of service descriptors.
//!
//! ## Flow
//!
//! For each descriptor, in input order:
//!
//! 1. **Check**: look the name up through [`ServiceAdmin::get_service`] and
//!    classify the answer as a [`ServiceCheck`].
//! 2. **Decide**: `Exists` ends the descriptor; `Absent` moves on to creation;
//!    `CheckFailed` is resolved by the configured [`CheckFailurePolicy`].
//! 3. **Create**: submit the descriptor through [`ServiceAdmin::create_service`].
//! 4. **Report**: write a confirmation line for each created service and an
//!    error line for each failure. A failure never stops the batch.
//!
//! Descriptors are processed one at a time; nothing runs concurrently.

mod error;
mod report;

pub use error::ProvisionError;
pub use report::{ProvisionOutcome, ProvisionReport};

use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::field::Empty;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::constants::OUTPUT_PREFIX;
use crate::model::{RangerService, ServiceDescriptor};
use crate::provider::{AdminError, ServiceAdmin};

/// Result of an existence check
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCheck {
    /// The endpoint returned a service record
    Exists(Box<RangerService>),
    /// The endpoint reported no such service
    Absent,
    /// The response could not be parsed; holds the parse error
    CheckFailed(String),
}

/// What a [`ServiceCheck::CheckFailed`] means for the descriptor
///
/// `TreatAsAbsent` keeps the long-standing behaviour of the fixture setup:
/// an unparsable answer is taken as "not there" and creation is attempted.
/// If the service does exist the endpoint rejects the duplicate, which is
/// then reported as a failure for that descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckFailurePolicy {
    #[default]
    TreatAsAbsent,
    /// Record the descriptor as failed without attempting creation
    Skip,
}

impl FromStr for CheckFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "absent" | "treat-as-absent" => Ok(CheckFailurePolicy::TreatAsAbsent),
            "skip" => Ok(CheckFailurePolicy::Skip),
            other => Err(format!(
                "unknown check failure policy '{other}' (expected absent or skip)"
            )),
        }
    }
}

/// Creates missing services through a [`ServiceAdmin`]
#[derive(Debug)]
pub struct Provisioner<A> {
    admin: A,
    check_failure_policy: CheckFailurePolicy,
}

impl<A: ServiceAdmin> Provisioner<A> {
    pub fn new(admin: A) -> Self {
        Self {
            admin,
            check_failure_policy: CheckFailurePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_check_failure_policy(mut self, policy: CheckFailurePolicy) -> Self {
        self.check_failure_policy = policy;
        self
    }

    pub fn admin(&self) -> &A {
        &self.admin
    }

    pub fn check_failure_policy(&self) -> CheckFailurePolicy {
        self.check_failure_policy
    }

    /// Classify whether a service named `name` is registered
    ///
    /// # Errors
    /// Transport failures and unexpected statuses are returned as errors;
    /// only parse failures become [`ServiceCheck::CheckFailed`].
    pub async fn check(&self, name: &str) -> Result<ServiceCheck, AdminError> {
        match self.admin.get_service(name).await {
            Ok(Some(record)) => Ok(ServiceCheck::Exists(Box::new(record))),
            Ok(None) => Ok(ServiceCheck::Absent),
            Err(e) if e.is_decode() => Ok(ServiceCheck::CheckFailed(e.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Drive one descriptor to a terminal state
    pub async fn provision_one(&self, descriptor: &ServiceDescriptor) -> ProvisionOutcome {
        match self.check(&descriptor.name).await {
            Ok(ServiceCheck::Exists(_)) => {
                debug!("Service {} already exists, nothing to do", descriptor.name);
                return ProvisionOutcome::Exists;
            }
            Ok(ServiceCheck::Absent) => {}
            Ok(ServiceCheck::CheckFailed(reason)) => match self.check_failure_policy {
                CheckFailurePolicy::TreatAsAbsent => {
                    warn!(
                        "Existence check for {} returned an unparsable response, treating it as absent: {}",
                        descriptor.name, reason
                    );
                }
                CheckFailurePolicy::Skip => {
                    warn!(
                        "Existence check for {} returned an unparsable response, skipping: {}",
                        descriptor.name, reason
                    );
                    return ProvisionOutcome::Failed(format!("existence check failed: {reason}"));
                }
            },
            Err(e) => return ProvisionOutcome::Failed(e.to_string()),
        }

        match self.admin.create_service(descriptor).await {
            Ok(record) => ProvisionOutcome::Created(record),
            Err(e) => ProvisionOutcome::Failed(e.to_string()),
        }
    }

    /// Provision every descriptor in order, writing progress lines to `out`
    ///
    /// A progress line that cannot be written is logged and counted in
    /// [`ProvisionReport::output_errors`]; the batch carries on.
    ///
    /// # Errors
    /// Returns [`ProvisionError::DuplicateName`] before contacting the
    /// endpoint if two descriptors share a name.
    pub async fn run<W: Write>(
        &self,
        descriptors: &[ServiceDescriptor],
        out: &mut W,
    ) -> Result<ProvisionReport, ProvisionError> {
        ensure_unique_names(descriptors)?;

        let mut report = ProvisionReport::default();
        emit(
            out,
            &mut report,
            format_args!("{OUTPUT_PREFIX}: connecting to ranger admin..."),
        );
        info!("Provisioning {} Ranger services", descriptors.len());

        for descriptor in descriptors {
            let span = info_span!(
                "provision.service",
                service.name = %descriptor.name,
                service.kind = %descriptor.service_type,
                outcome = Empty,
            );
            let outcome = self
                .provision_one(descriptor)
                .instrument(span.clone())
                .await;

            match &outcome {
                ProvisionOutcome::Exists => {
                    span.record("outcome", "exists");
                }
                ProvisionOutcome::Created(_) => {
                    span.record("outcome", "created");
                    emit(
                        out,
                        &mut report,
                        format_args!("{OUTPUT_PREFIX}: {} service created!", descriptor.name),
                    );
                }
                ProvisionOutcome::Failed(detail) => {
                    span.record("outcome", "failed");
                    warn!("Failed to provision service {}: {}", descriptor.name, detail);
                    emit(
                        out,
                        &mut report,
                        format_args!(
                            "{OUTPUT_PREFIX}: An exception occurred while provisioning {}: {detail}",
                            descriptor.name
                        ),
                    );
                }
            }
            report.push(descriptor.name.clone(), outcome);
        }

        info!(
            "Provisioning finished: {} created, {} already present, {} failed",
            report.created(),
            report.existing(),
            report.failed()
        );
        Ok(report)
    }
}

/// Write and flush one progress line
fn emit<W: Write>(out: &mut W, report: &mut ProvisionReport, line: fmt::Arguments<'_>) {
    let written = writeln!(out, "{line}").and_then(|()| out.flush());
    if let Err(e) = written {
        warn!("Failed to write progress line '{}': {}", line, e);
        report.record_output_error();
    }
}

fn ensure_unique_names(descriptors: &[ServiceDescriptor]) -> Result<(), ProvisionError> {
    let mut seen = HashSet::new();
    for descriptor in descriptors {
        if !seen.insert(descriptor.name.as_str()) {
            return Err(ProvisionError::DuplicateName(descriptor.name.clone()));
        }
    }
    Ok(())
}
