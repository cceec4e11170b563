//! # Constants
//!
//! Shared constants used throughout the provisioner.
//!
//! The endpoint and credential defaults match the Ranger admin container the
//! integration tests start; they can be overridden via configuration or
//! environment variables.

/// Default base URL of the Ranger admin service (`policymgr_external_url`)
pub const DEFAULT_RANGER_ADMIN_URL: &str = "http://localhost:6080";

/// Default Ranger admin username
pub const DEFAULT_RANGER_ADMIN_USERNAME: &str = "admin";

/// Default Ranger admin password
pub const DEFAULT_RANGER_ADMIN_PASSWORD: &str = "Rangeradmin1";

/// Default request timeout in seconds. Zero leaves the HTTP client default in place.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 0;

/// Public v2 API path for service lookups by name (name is appended)
pub const SERVICE_BY_NAME_PATH: &str = "service/public/v2/api/service/name";

/// Public v2 API path for service creation
pub const SERVICE_PATH: &str = "service/public/v2/api/service";

/// Access audit count endpoint
pub const ACCESS_AUDIT_COUNT_PATH: &str = "service/xaudit/access_audit/count";

/// Prefix of every progress line written to stdout.
///
/// The test harness waits for `<service>.*service created` on the container
/// log, so the line format is part of the external contract.
pub const OUTPUT_PREFIX: &str = "create-ranger-services";

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "create_ranger_services=info,ranger_fixtures=info";
