//! # Fixture Services
//!
//! The fixed set of Ranger services the integration test suite expects.
//! Hostnames refer to the network aliases of the companion test containers.

use crate::model::{ServiceDescriptor, ServiceType};

/// All fixture services, in provisioning order
pub fn fixture_services() -> Vec<ServiceDescriptor> {
    vec![hdfs(), yarn(), hive(), hbase(), kafka(), kms(), trino()]
}

/// Fixture services restricted to the given names, keeping provisioning order.
///
/// Returns the names that matched no fixture as the error.
pub fn select_fixtures(names: &[String]) -> Result<Vec<ServiceDescriptor>, Vec<String>> {
    let all = fixture_services();
    let unknown: Vec<String> = names
        .iter()
        .filter(|name| !all.iter().any(|d| &d.name == *name))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(unknown);
    }
    Ok(all
        .into_iter()
        .filter(|d| names.iter().any(|name| name == &d.name))
        .collect())
}

fn hdfs() -> ServiceDescriptor {
    ServiceDescriptor::new(
        "ut_hdfs",
        ServiceType::Hdfs,
        [
            ("username", "hdfs"),
            ("password", "hdfs"),
            ("fs.default.name", "hdfs://ranger-hadoop:9000"),
            ("hadoop.security.authentication", "simple"),
            ("hadoop.security.authorization", "true"),
        ],
    )
}

fn yarn() -> ServiceDescriptor {
    ServiceDescriptor::new(
        "ut_yarn",
        ServiceType::Yarn,
        [
            ("username", "yarn"),
            ("password", "yarn"),
            ("yarn.url", "http://ranger-hadoop:8088"),
        ],
    )
}

fn hive() -> ServiceDescriptor {
    ServiceDescriptor::new(
        "ut_hive",
        ServiceType::Hive,
        [
            ("username", "hive"),
            ("password", "hive"),
            ("jdbc.driverClassName", "org.apache.hive.jdbc.HiveDriver"),
            ("jdbc.url", "jdbc:hive2://ranger-hive:10000"),
            ("hadoop.security.authorization", "true"),
        ],
    )
}

fn hbase() -> ServiceDescriptor {
    ServiceDescriptor::new(
        "ut_hbase",
        ServiceType::Hbase,
        [
            ("username", "hbase"),
            ("password", "hbase"),
            ("hadoop.security.authentication", "simple"),
            ("hbase.security.authentication", "simple"),
            ("hadoop.security.authorization", "true"),
            ("hbase.zookeeper.property.clientPort", "2181"),
            ("hbase.zookeeper.quorum", "ranger-zk"),
            ("zookeeper.znode.parent", "/hbase"),
        ],
    )
}

fn kafka() -> ServiceDescriptor {
    ServiceDescriptor::new(
        "ut_kafka",
        ServiceType::Kafka,
        [
            ("username", "kafka"),
            ("password", "kafka"),
            ("zookeeper.connect", "ranger-zk.example.com:2181"),
        ],
    )
}

fn kms() -> ServiceDescriptor {
    ServiceDescriptor::new(
        "ut_kms",
        ServiceType::Kms,
        [
            ("username", "keyadmin"),
            ("password", "rangerR0cks!"),
            ("provider", "http://ranger-kms:9292"),
        ],
    )
}

fn trino() -> ServiceDescriptor {
    ServiceDescriptor::new(
        "ut_trino",
        ServiceType::Trino,
        [
            ("username", "trino"),
            ("password", "trino"),
            ("jdbc.driverClassName", "io.trino.jdbc.TrinoDriver"),
            ("jdbc.url", "jdbc:trino://ranger-trino:8080"),
        ],
    )
}
