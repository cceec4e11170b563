//! # create-ranger-services
//!
//! Command-line front-end for provisioning the Ranger fixture services.
//!
//! ## Usage
//!
//! ```bash
//! # Create every missing fixture service on the local Ranger admin
//! create-ranger-services
//!
//! # Same, against another admin endpoint
//! create-ranger-services provision --url http://ranger:6080 --username admin --password secret
//!
//! # Only some fixtures
//! create-ranger-services provision --only ut_hdfs --only ut_trino
//!
//! # Show the fixture set without contacting Ranger
//! create-ranger-services list
//!
//! # Count access audit entries
//! create-ranger-services audit-count
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ranger_fixtures::config::ProvisionerConfig;
use ranger_fixtures::observability;
use ranger_fixtures::provisioner::CheckFailurePolicy;
use tracing::info;

mod audit;
mod list;
mod provision;

/// Ranger fixture service provisioner
#[derive(Parser)]
#[command(name = "create-ranger-services", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    endpoint: EndpointArgs,
}

/// Admin endpoint overrides (environment variables are used when omitted)
#[derive(Args)]
struct EndpointArgs {
    /// Ranger admin base URL [env: RANGER_ADMIN_URL]
    #[arg(long, global = true)]
    url: Option<String>,

    /// Ranger admin username [env: RANGER_ADMIN_USERNAME]
    #[arg(long, global = true)]
    username: Option<String>,

    /// Ranger admin password [env: RANGER_ADMIN_PASSWORD]
    #[arg(long, global = true)]
    password: Option<String>,

    /// Per-request timeout in seconds, 0 for the client default [env: RANGER_REQUEST_TIMEOUT_SECS]
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create every fixture service the admin endpoint does not know yet (default)
    Provision {
        /// Only provision the named fixture (repeatable)
        #[arg(long = "only", value_name = "NAME")]
        only: Vec<String>,

        /// How to treat an existence check whose response cannot be parsed
        #[arg(long, value_enum)]
        on_check_failure: Option<CheckFailureArg>,
    },
    /// Print the fixture services without contacting Ranger
    List,
    /// Print the number of entries in Ranger's access audit store
    #[command(name = "audit-count")]
    AuditCount,
}

/// Command-line spelling of [`CheckFailurePolicy`]
#[derive(Clone, Copy, ValueEnum)]
enum CheckFailureArg {
    /// Attempt creation anyway
    Absent,
    /// Report the service as failed and move on
    Skip,
}

impl From<CheckFailureArg> for CheckFailurePolicy {
    fn from(arg: CheckFailureArg) -> Self {
        match arg {
            CheckFailureArg::Absent => CheckFailurePolicy::TreatAsAbsent,
            CheckFailureArg::Skip => CheckFailurePolicy::Skip,
        }
    }
}

impl EndpointArgs {
    /// Layer command-line overrides on top of environment configuration
    fn apply(self, config: &mut ProvisionerConfig) {
        if let Some(url) = self.url {
            config.admin_url = url;
        }
        if let Some(username) = self.username {
            config.username = username;
        }
        if let Some(password) = self.password {
            config.password = password;
        }
        if let Some(timeout) = self.timeout_secs {
            config.request_timeout_secs = timeout;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configure rustls crypto provider FIRST, before any HTTP client is built
    // We use ring as the crypto provider
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        eprintln!("rustls crypto provider was already installed");
    }

    let cli = Cli::parse();

    let mut config = ProvisionerConfig::from_env();
    cli.endpoint.apply(&mut config);

    observability::init_tracing(config.log_format);
    info!(
        "create-ranger-services {} (git {}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_GIT_HASH"),
        env!("BUILD_DATETIME")
    );

    match cli.command.unwrap_or(Commands::Provision {
        only: Vec::new(),
        on_check_failure: None,
    }) {
        Commands::Provision {
            only,
            on_check_failure,
        } => {
            if let Some(policy) = on_check_failure {
                config.check_failure_policy = policy.into();
            }
            provision::provision_command(&config, &only).await
        }
        Commands::List => list::list_command(),
        Commands::AuditCount => audit::audit_count_command(&config).await,
    }
}
