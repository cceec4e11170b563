//! # Provisioner Tests
//!
//! Create-if-absent behaviour of the provisioner against an in-memory admin
//! endpoint: idempotency, ordering, and per-service failure isolation.

mod common;

use common::{output_lines, FakeAdmin};
use ranger_fixtures::prelude::*;

const CONNECTING: &str = "create-ranger-services: connecting to ranger admin...";

fn created_line(name: &str) -> String {
    format!("create-ranger-services: {name} service created!")
}

fn descriptor(name: &str, service_type: ServiceType) -> ServiceDescriptor {
    ServiceDescriptor::new(name, service_type, [("username", "u"), ("password", "p")])
}

async fn run(
    provisioner: &Provisioner<FakeAdmin>,
    descriptors: &[ServiceDescriptor],
) -> (ProvisionReport, Vec<String>) {
    let mut out = Vec::new();
    let report = provisioner
        .run(descriptors, &mut out)
        .await
        .expect("provisioning run should not abort");
    (report, output_lines(&out))
}

#[tokio::test]
async fn test_absent_service_is_created_once() {
    let provisioner = Provisioner::new(FakeAdmin::new());
    let services = vec![descriptor("ut_hdfs", ServiceType::Hdfs)];

    let (report, lines) = run(&provisioner, &services).await;

    assert_eq!(provisioner.admin().create_calls(), vec!["ut_hdfs"]);
    assert_eq!(lines, vec![CONNECTING.to_string(), created_line("ut_hdfs")]);
    assert!(report.outcome("ut_hdfs").unwrap().is_created());
}

#[tokio::test]
async fn test_existing_service_is_left_alone() {
    let provisioner = Provisioner::new(FakeAdmin::new().with_existing("ut_hdfs"));
    let services = vec![descriptor("ut_hdfs", ServiceType::Hdfs)];

    let (report, lines) = run(&provisioner, &services).await;

    assert!(provisioner.admin().create_calls().is_empty());
    assert_eq!(lines, vec![CONNECTING.to_string()]);
    assert_eq!(report.outcome("ut_hdfs"), Some(&ProvisionOutcome::Exists));
}

#[tokio::test]
async fn test_fixture_set_against_empty_store() {
    let provisioner = Provisioner::new(FakeAdmin::new());
    let fixtures = fixture_services();

    let (report, lines) = run(&provisioner, &fixtures).await;

    let expected_names = vec![
        "ut_hdfs", "ut_yarn", "ut_hive", "ut_hbase", "ut_kafka", "ut_kms", "ut_trino",
    ];
    assert_eq!(provisioner.admin().create_calls(), expected_names);
    assert_eq!(report.created(), 7);

    let mut expected_lines = vec![CONNECTING.to_string()];
    expected_lines.extend(expected_names.iter().map(|name| created_line(name)));
    assert_eq!(lines, expected_lines);
}

#[tokio::test]
async fn test_second_run_is_idempotent() {
    let provisioner = Provisioner::new(FakeAdmin::new());
    let fixtures = fixture_services();

    let (first, _) = run(&provisioner, &fixtures).await;
    assert_eq!(first.created(), 7);

    provisioner.admin().reset_calls();
    let (second, lines) = run(&provisioner, &fixtures).await;

    assert!(provisioner.admin().create_calls().is_empty());
    assert_eq!(provisioner.admin().lookup_calls().len(), 7);
    assert_eq!(second.existing(), 7);
    assert_eq!(lines, vec![CONNECTING.to_string()]);
}

#[tokio::test]
async fn test_created_record_carries_descriptor_configs() {
    let provisioner = Provisioner::new(FakeAdmin::new());
    let fixtures = fixture_services();

    run(&provisioner, &fixtures).await;

    let hbase = provisioner.admin().stored("ut_hbase").unwrap();
    assert_eq!(hbase.service_type.as_deref(), Some("hbase"));
    assert_eq!(hbase.configs["zookeeper.znode.parent"], "/hbase");
}

#[tokio::test]
async fn test_malformed_check_still_attempts_creation() {
    let admin = FakeAdmin::new().with_malformed_lookup("ut_yarn");
    let provisioner = Provisioner::new(admin);
    let services = vec![
        descriptor("ut_yarn", ServiceType::Yarn),
        descriptor("ut_hive", ServiceType::Hive),
    ];

    let (report, lines) = run(&provisioner, &services).await;

    assert_eq!(provisioner.admin().create_calls(), vec!["ut_yarn", "ut_hive"]);
    assert_eq!(report.created(), 2);
    assert_eq!(
        lines,
        vec![
            CONNECTING.to_string(),
            created_line("ut_yarn"),
            created_line("ut_hive"),
        ]
    );
}

#[tokio::test]
async fn test_malformed_check_on_existing_service_reports_duplicate() {
    // An unparsable lookup masks an existing service; the endpoint then
    // rejects the duplicate and the batch carries on.
    let admin = FakeAdmin::new()
        .with_existing("ut_kafka")
        .with_malformed_lookup("ut_kafka");
    let provisioner = Provisioner::new(admin);
    let services = vec![
        descriptor("ut_kafka", ServiceType::Kafka),
        descriptor("ut_kms", ServiceType::Kms),
    ];

    let (report, lines) = run(&provisioner, &services).await;

    assert_eq!(provisioner.admin().create_calls(), vec!["ut_kafka", "ut_kms"]);
    assert!(report.outcome("ut_kafka").unwrap().is_failed());
    assert!(report.outcome("ut_kms").unwrap().is_created());
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("create-ranger-services: An exception occurred"));
    assert!(lines[1].contains("Duplicate service name"), "{}", lines[1]);
    assert_eq!(lines[2], created_line("ut_kms"));
}

#[tokio::test]
async fn test_skip_policy_does_not_create_after_malformed_check() {
    let admin = FakeAdmin::new().with_malformed_lookup("ut_yarn");
    let provisioner =
        Provisioner::new(admin).with_check_failure_policy(CheckFailurePolicy::Skip);
    let services = vec![
        descriptor("ut_yarn", ServiceType::Yarn),
        descriptor("ut_hive", ServiceType::Hive),
    ];

    let (report, lines) = run(&provisioner, &services).await;

    assert_eq!(provisioner.admin().create_calls(), vec!["ut_hive"]);
    assert!(report.outcome("ut_yarn").unwrap().is_failed());
    assert!(lines[1].contains("ut_yarn"));
    assert!(lines[1].contains("existence check failed"));
    assert_eq!(lines[2], created_line("ut_hive"));
}

#[tokio::test]
async fn test_creation_failure_does_not_stop_batch() {
    let admin = FakeAdmin::new().with_failing_create("ut_hive", "Service-def not found: hive");
    let provisioner = Provisioner::new(admin);
    let fixtures = fixture_services();

    let (report, lines) = run(&provisioner, &fixtures).await;

    assert_eq!(provisioner.admin().create_calls().len(), 7);
    assert_eq!(report.created(), 6);
    assert_eq!(report.failed(), 1);
    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[3],
        "create-ranger-services: An exception occurred while provisioning ut_hive: HTTP 400: Service-def not found: hive"
    );
    assert_eq!(lines[7], created_line("ut_trino"));
    assert!(provisioner.admin().stored("ut_hive").is_none());
}

#[tokio::test]
async fn test_lookup_failure_skips_creation_and_continues() {
    let admin = FakeAdmin::new().with_failing_lookup("ut_hdfs");
    let provisioner = Provisioner::new(admin);
    let services = vec![
        descriptor("ut_hdfs", ServiceType::Hdfs),
        descriptor("ut_trino", ServiceType::Trino),
    ];

    let (report, lines) = run(&provisioner, &services).await;

    assert_eq!(provisioner.admin().create_calls(), vec!["ut_trino"]);
    assert_eq!(
        report.outcome("ut_hdfs"),
        Some(&ProvisionOutcome::Failed(
            "HTTP 500: Internal Server Error".to_string()
        ))
    );
    assert!(lines[1].contains("ut_hdfs"));
    assert_eq!(lines[2], created_line("ut_trino"));
}

#[tokio::test]
async fn test_mixed_store_only_creates_missing() {
    let admin = FakeAdmin::new()
        .with_existing("ut_hdfs")
        .with_existing("ut_kms");
    let provisioner = Provisioner::new(admin);
    let fixtures = fixture_services();

    let (report, lines) = run(&provisioner, &fixtures).await;

    assert_eq!(
        provisioner.admin().create_calls(),
        vec!["ut_yarn", "ut_hive", "ut_hbase", "ut_kafka", "ut_trino"]
    );
    assert_eq!(report.existing(), 2);
    assert_eq!(report.created(), 5);
    assert_eq!(lines.len(), 6);
    assert_eq!(provisioner.admin().stored_names().len(), 7);
}

#[tokio::test]
async fn test_duplicate_names_rejected_before_any_call() {
    let provisioner = Provisioner::new(FakeAdmin::new());
    let services = vec![
        descriptor("ut_hdfs", ServiceType::Hdfs),
        descriptor("ut_hdfs", ServiceType::Hive),
    ];
    let mut out = Vec::new();

    let err = provisioner.run(&services, &mut out).await.unwrap_err();

    assert!(matches!(err, ProvisionError::DuplicateName(ref name) if name == "ut_hdfs"));
    assert!(provisioner.admin().lookup_calls().is_empty());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_check_classifies_outcomes() {
    let admin = FakeAdmin::new()
        .with_existing("ut_hdfs")
        .with_malformed_lookup("ut_yarn")
        .with_failing_lookup("ut_hive");
    let provisioner = Provisioner::new(admin);

    assert!(matches!(
        provisioner.check("ut_hdfs").await.unwrap(),
        ServiceCheck::Exists(record) if record.name == "ut_hdfs"
    ));
    assert_eq!(
        provisioner.check("ut_kafka").await.unwrap(),
        ServiceCheck::Absent
    );
    assert!(matches!(
        provisioner.check("ut_yarn").await.unwrap(),
        ServiceCheck::CheckFailed(_)
    ));
    assert!(matches!(
        provisioner.check("ut_hive").await.unwrap_err(),
        AdminError::Api { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_unwritable_output_does_not_stop_batch() {
    struct BrokenPipe;
    impl std::io::Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    let provisioner = Provisioner::new(FakeAdmin::new().with_existing("ut_kms"));
    let fixtures = fixture_services();

    let report = provisioner
        .run(&fixtures, &mut BrokenPipe)
        .await
        .expect("write failures should not abort the run");

    assert_eq!(provisioner.admin().create_calls().len(), 6);
    assert_eq!(report.created(), 6);
    assert_eq!(report.existing(), 1);
    // connecting line plus one confirmation per created service
    assert_eq!(report.output_errors(), 7);
}

#[tokio::test]
async fn test_check_failure_policy_follows_config() {
    let config = ProvisionerConfig::from_lookup(|key| {
        (key == "RANGER_CHECK_FAILURE_POLICY").then(|| "skip".to_string())
    });
    let provisioner = Provisioner::new(FakeAdmin::new().with_malformed_lookup("ut_hive"))
        .with_check_failure_policy(config.check_failure_policy);

    assert_eq!(provisioner.check_failure_policy(), CheckFailurePolicy::Skip);
    assert_eq!(
        Provisioner::new(FakeAdmin::new()).check_failure_policy(),
        CheckFailurePolicy::TreatAsAbsent
    );

    let (report, _) = run(&provisioner, &[descriptor("ut_hive", ServiceType::Hive)]).await;
    assert!(provisioner.admin().create_calls().is_empty());
    assert!(report.outcome("ut_hive").unwrap().is_failed());
}
