//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ```rust
//! use ranger_fixtures::prelude::*;
//! ```

pub use crate::config::{LogFormat, ProvisionerConfig};
pub use crate::fixtures::{fixture_services, select_fixtures};
pub use crate::model::{RangerService, ServiceDescriptor, ServiceType};
pub use crate::provider::ranger::RangerAdminREST;
pub use crate::provider::{AdminError, ServiceAdmin};
pub use crate::provisioner::{
    CheckFailurePolicy, ProvisionError, ProvisionOutcome, ProvisionReport, Provisioner,
    ServiceCheck,
};
