//! # Provisioning Report
//!
//! Terminal state of every descriptor in a batch, in input order.

use crate::model::RangerService;

/// Terminal state of one descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum ProvisionOutcome {
    /// The service was already registered; nothing was sent
    Exists,
    /// The service was created; holds the record the endpoint returned
    Created(RangerService),
    /// Checking or creating failed; holds the error detail
    Failed(String),
}

impl ProvisionOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, ProvisionOutcome::Created(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProvisionOutcome::Failed(_))
    }
}

/// Outcome of a provisioning batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProvisionReport {
    entries: Vec<(String, ProvisionOutcome)>,
    output_errors: usize,
}

impl ProvisionReport {
    pub(crate) fn push(&mut self, name: impl Into<String>, outcome: ProvisionOutcome) {
        self.entries.push((name.into(), outcome));
    }

    pub(crate) fn record_output_error(&mut self) {
        self.output_errors += 1;
    }

    /// `(name, outcome)` pairs in input order
    pub fn entries(&self) -> &[(String, ProvisionOutcome)] {
        &self.entries
    }

    /// Outcome for a service name
    pub fn outcome(&self, name: &str) -> Option<&ProvisionOutcome> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, outcome)| outcome)
    }

    pub fn created(&self) -> usize {
        self.count(ProvisionOutcome::is_created)
    }

    pub fn existing(&self) -> usize {
        self.count(|o| matches!(o, ProvisionOutcome::Exists))
    }

    pub fn failed(&self) -> usize {
        self.count(ProvisionOutcome::is_failed)
    }

    /// Progress lines that could not be written to the output sink
    pub fn output_errors(&self) -> usize {
        self.output_errors
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn count(&self, predicate: impl Fn(&ProvisionOutcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| predicate(o)).count()
    }
}
