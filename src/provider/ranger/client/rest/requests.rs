//! # Request Types
//!
//! Ranger public v2 API request structures.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{ServiceDescriptor, ServiceType};

/// Request body for creating a service
///
/// Used in `POST /service/public/v2/api/service`. Ranger assigns `id`,
/// `guid` and the audit fields itself.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub configs: &'a BTreeMap<String, String>,
    pub is_enabled: bool,
}

impl<'a> From<&'a ServiceDescriptor> for CreateServiceRequest<'a> {
    fn from(descriptor: &'a ServiceDescriptor) -> Self {
        Self {
            name: &descriptor.name,
            service_type: descriptor.service_type,
            configs: &descriptor.configs,
            is_enabled: true,
        }
    }
}
