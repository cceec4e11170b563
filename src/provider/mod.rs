//! # Provider Modules
//!
//! Abstract interface for the access-control admin endpoint, and the
//! implementations behind it.
//!
//! The provisioner only talks to [`ServiceAdmin`], so tests can swap the
//! HTTP client for an in-memory fake.

use async_trait::async_trait;

use crate::model::{RangerService, ServiceDescriptor};

pub mod error;

pub use error::AdminError;

/// Admin endpoint operations needed to provision services
#[async_trait]
pub trait ServiceAdmin: Send + Sync {
    /// Look up a service by name
    ///
    /// Returns `Ok(None)` when the endpoint reports that no such service exists.
    /// A response that cannot be parsed is reported as [`AdminError::Decode`].
    async fn get_service(&self, name: &str) -> Result<Option<RangerService>, AdminError>;

    /// Create a service from a descriptor, returning the stored record
    async fn create_service(
        &self,
        descriptor: &ServiceDescriptor,
    ) -> Result<RangerService, AdminError>;
}

// Provider implementations
pub mod ranger;
