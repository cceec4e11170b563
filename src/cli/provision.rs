//! # Provision Command
//!
//! Runs the create-if-absent pass over the fixture services.

use anyhow::{Context, Result};
use ranger_fixtures::config::ProvisionerConfig;
use ranger_fixtures::fixtures::{fixture_services, select_fixtures};
use ranger_fixtures::provider::ranger::RangerAdminREST;
use ranger_fixtures::provisioner::Provisioner;
use tracing::info;

/// Provision the fixture services (all of them, or only those named in `only`)
///
/// Per-service failures are reported on stdout and do not change the exit
/// status. Setup problems and unwritable progress output return an error.
pub async fn provision_command(config: &ProvisionerConfig, only: &[String]) -> Result<()> {
    let descriptors = if only.is_empty() {
        fixture_services()
    } else {
        select_fixtures(only).map_err(|unknown| {
            anyhow::anyhow!(
                "Unknown fixture service(s): {}\n\nRun `create-ranger-services list` to see the available names.",
                unknown.join(", ")
            )
        })?
    };

    let admin = RangerAdminREST::new(config).context("Failed to create Ranger admin client")?;
    let provisioner = Provisioner::new(admin).with_check_failure_policy(config.check_failure_policy);

    let mut stdout = std::io::stdout().lock();
    let report = provisioner
        .run(&descriptors, &mut stdout)
        .await
        .context("Provisioning run aborted")?;

    info!(
        "{} of {} services created, {} already present, {} failed",
        report.created(),
        report.len(),
        report.existing(),
        report.failed()
    );

    if report.output_errors() > 0 {
        anyhow::bail!(
            "{} progress line(s) could not be written to stdout",
            report.output_errors()
        );
    }
    Ok(())
}
