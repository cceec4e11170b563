//! # Service Model
//!
//! Declarative fixture descriptors and the service record returned by the
//! Ranger admin API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of system a Ranger service definition guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Hdfs,
    Hive,
    Kafka,
    Yarn,
    Hbase,
    Kms,
    Trino,
}

impl ServiceType {
    /// Wire name of the service type, as Ranger's service-def registry knows it
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::Hdfs => "hdfs",
            ServiceType::Hive => "hive",
            ServiceType::Kafka => "kafka",
            ServiceType::Yarn => "yarn",
            ServiceType::Hbase => "hbase",
            ServiceType::Kms => "kms",
            ServiceType::Trino => "trino",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service to provision: its unique name, type and connection configs.
///
/// Built in-process right before use and never mutated; the remote admin
/// service owns the durable record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub service_type: ServiceType,
    pub configs: BTreeMap<String, String>,
}

impl ServiceDescriptor {
    /// Create a descriptor from `(key, value)` config pairs
    pub fn new<I, K, V>(name: impl Into<String>, service_type: ServiceType, configs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            service_type,
            configs: configs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Service record as returned by the Ranger public v2 API.
///
/// Only `name` is guaranteed; Ranger adds audit fields and may know service
/// types beyond [`ServiceType`], so `type` stays a plain string here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangerService {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub guid: Option<String>,
    pub name: String,
    #[serde(rename = "type", default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_enabled: Option<bool>,
    #[serde(default)]
    pub configs: BTreeMap<String, String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: Option<i64>,
}
