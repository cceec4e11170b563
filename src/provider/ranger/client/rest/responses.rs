//! # Response Types
//!
//! Ranger admin API response structures that are not service records.
//! Service records themselves are [`RangerService`](crate::model::RangerService).

use serde::Deserialize;

/// Response of `GET /service/xaudit/access_audit/count` (Ranger `VXLong`)
#[derive(Debug, Deserialize)]
pub struct CountResponse {
    pub value: u64,
}
