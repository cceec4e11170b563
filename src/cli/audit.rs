//! # Audit Count Command
//!
//! Reports how many access audit entries the Ranger admin has stored.

use anyhow::{Context, Result};
use ranger_fixtures::config::ProvisionerConfig;
use ranger_fixtures::provider::ranger::RangerAdminREST;

/// Print the access audit entry count
pub async fn audit_count_command(config: &ProvisionerConfig) -> Result<()> {
    let admin = RangerAdminREST::new(config).context("Failed to create Ranger admin client")?;
    let count = admin
        .access_audit_count()
        .await
        .with_context(|| format!("Failed to read access audit count from {}", admin.base_url()))?;
    println!("{count}");
    Ok(())
}
