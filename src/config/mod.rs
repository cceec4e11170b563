//! # Configuration
//!
//! Provisioner settings: admin endpoint, credentials, timeouts and logging.

mod provisioner;

pub use provisioner::{LogFormat, ProvisionerConfig};
