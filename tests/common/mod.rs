//! Common test utilities
//!
//! Provides rustls crypto provider setup for the Pact tests and an in-memory
//! `ServiceAdmin` standing in for the Ranger admin endpoint.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use async_trait::async_trait;
use ranger_fixtures::model::{RangerService, ServiceDescriptor};
use ranger_fixtures::provider::{AdminError, ServiceAdmin};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, Once};

static RUSTLS_INIT: Once = Once::new();

/// Initialize rustls crypto provider for tests
///
/// Uses a `Once` to ensure it's only called once across all tests.
pub fn init_rustls() {
    RUSTLS_INIT.call_once(|| {
        rustls::crypto::ring::default_provider()
            .install_default()
            .expect("Failed to install rustls crypto provider");
    });
}

/// In-memory admin endpoint with call recording and injectable failures
#[derive(Debug, Default)]
pub struct FakeAdmin {
    store: Mutex<BTreeMap<String, RangerService>>,
    next_id: AtomicI64,
    lookups: Mutex<Vec<String>>,
    creates: Mutex<Vec<String>>,
    malformed_lookups: HashSet<String>,
    failing_lookups: HashSet<String>,
    failing_creates: HashMap<String, String>,
}

impl FakeAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register a service, as if an earlier run had created it
    pub fn with_existing(self, name: &str) -> Self {
        let record = self.record(name, Some("hdfs"));
        self.store
            .lock()
            .unwrap()
            .insert(name.to_string(), record);
        self
    }

    /// Answer lookups of `name` with an unparsable body
    pub fn with_malformed_lookup(mut self, name: &str) -> Self {
        self.malformed_lookups.insert(name.to_string());
        self
    }

    /// Answer lookups of `name` with an HTTP 500
    pub fn with_failing_lookup(mut self, name: &str) -> Self {
        self.failing_lookups.insert(name.to_string());
        self
    }

    /// Reject creation of `name` with an HTTP 400 carrying `message`
    pub fn with_failing_create(mut self, name: &str, message: &str) -> Self {
        self.failing_creates
            .insert(name.to_string(), message.to_string());
        self
    }

    /// Names passed to `create_service`, in call order
    pub fn create_calls(&self) -> Vec<String> {
        self.creates.lock().unwrap().clone()
    }

    /// Names passed to `get_service`, in call order
    pub fn lookup_calls(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn stored_names(&self) -> Vec<String> {
        self.store.lock().unwrap().keys().cloned().collect()
    }

    pub fn stored(&self, name: &str) -> Option<RangerService> {
        self.store.lock().unwrap().get(name).cloned()
    }

    pub fn reset_calls(&self) {
        self.lookups.lock().unwrap().clear();
        self.creates.lock().unwrap().clear();
    }

    fn record(&self, name: &str, service_type: Option<&str>) -> RangerService {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "type": service_type,
            "isEnabled": true,
        }))
        .expect("valid service record")
    }
}

fn decode_error(name: &str) -> AdminError {
    AdminError::Decode {
        url: format!("http://fake/service/public/v2/api/service/name/{name}"),
        source: serde_json::from_str::<serde_json::Value>("").unwrap_err(),
    }
}

#[async_trait]
impl ServiceAdmin for FakeAdmin {
    async fn get_service(&self, name: &str) -> Result<Option<RangerService>, AdminError> {
        self.lookups.lock().unwrap().push(name.to_string());
        if self.malformed_lookups.contains(name) {
            return Err(decode_error(name));
        }
        if self.failing_lookups.contains(name) {
            return Err(AdminError::Api {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(self.store.lock().unwrap().get(name).cloned())
    }

    async fn create_service(
        &self,
        descriptor: &ServiceDescriptor,
    ) -> Result<RangerService, AdminError> {
        self.creates.lock().unwrap().push(descriptor.name.clone());
        if let Some(message) = self.failing_creates.get(&descriptor.name) {
            return Err(AdminError::Api {
                status: 400,
                message: message.clone(),
            });
        }
        if self.store.lock().unwrap().contains_key(&descriptor.name) {
            return Err(AdminError::Api {
                status: 400,
                message: format!("Duplicate service name: name={}", descriptor.name),
            });
        }
        let mut record = self.record(&descriptor.name, Some(descriptor.service_type.as_str()));
        record.configs = descriptor.configs.clone();
        self.store
            .lock()
            .unwrap()
            .insert(descriptor.name.clone(), record.clone());
        Ok(record)
    }
}

/// Split captured progress output into lines
pub fn output_lines(buffer: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buffer)
        .lines()
        .map(str::to_string)
        .collect()
}
