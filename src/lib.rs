//! Ranger Fixtures Library
//!
//! Provisions the Apache Ranger service definitions an integration test
//! suite relies on. Every service is created only if the admin endpoint does
//! not already know it, so running the provisioner repeatedly is safe.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ranger_fixtures::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ProvisionerConfig::from_env();
//! let admin = RangerAdminREST::new(&config)?;
//! let provisioner = Provisioner::new(admin);
//! let report = provisioner
//!     .run(&fixture_services(), &mut std::io::stdout())
//!     .await?;
//! println!("{} created", report.created());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod fixtures;
pub mod model;
pub mod observability;
pub mod prelude;
pub mod provider;
pub mod provisioner;
