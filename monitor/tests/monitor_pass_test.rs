//! Integration Test: 監視パス
//!
//! モックエンドポイントに対して監視パスを実行し、レポート行を検証する。

use api_monitor::health::HealthProber;
use api_monitor::runner::{MonitorRunner, PassSummary};
use api_monitor::{Environment, MonitorConfig, MonitorError};
use serde_json::json;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_source(dir: &Path, environment: Environment, urls: &[String]) {
    std::fs::write(dir.join(environment.file_name()), urls.join("\n"))
        .expect("failed to write URL source file");
}

fn runner_for(dir: &Path, strict_decode: bool) -> MonitorRunner {
    let config = MonitorConfig {
        source_dir: dir.to_path_buf(),
        request_timeout_secs: Some(5),
        strict_decode,
    };
    let prober = HealthProber::new(&config).expect("failed to build prober");
    MonitorRunner::new(prober, config.source_dir)
}

async fn mount_health(mock: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .expect(1)
        .mount(mock)
        .await;
}

/// 空いているローカルポート（接続拒否用）
fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to reserve port");
    let port = listener.local_addr().expect("failed to read port").port();
    drop(listener);
    format!("http://127.0.0.1:{}/health", port)
}

#[tokio::test]
async fn test_reports_each_url_in_file_order() {
    let mock = MockServer::start().await;
    mount_health(
        &mock,
        "/a",
        ResponseTemplate::new(200).set_body_json(json!({"IsHealthy": true})),
    )
    .await;
    mount_health(
        &mock,
        "/b",
        ResponseTemplate::new(200).set_body_json(json!({"IsHealthy": false, "Version": "1.2"})),
    )
    .await;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let urls = vec![format!("{}/b", mock.uri()), format!("{}/a", mock.uri())];
    write_source(dir.path(), Environment::Sandbox, &urls);

    let mut out = Vec::new();
    let summary = runner_for(dir.path(), false)
        .run_pass(Environment::Sandbox, &mut out)
        .await
        .unwrap();

    assert_eq!(
        summary,
        PassSummary {
            total: 2,
            healthy: 1,
            unhealthy: 1,
            failed: 0,
        }
    );

    let output = String::from_utf8(out).unwrap();
    let reports: Vec<&str> = output.lines().filter(|l| l.starts_with("API: ")).collect();
    assert_eq!(
        reports,
        vec![
            format!("API: {}/b  - IsHealthy: false", mock.uri()),
            format!("API: {}/a  - IsHealthy: true", mock.uri()),
        ]
    );
}

#[tokio::test]
async fn test_reads_file_for_selected_environment() {
    let mock = MockServer::start().await;
    mount_health(
        &mock,
        "/prod",
        ResponseTemplate::new(200).set_body_json(json!({"IsHealthy": true})),
    )
    .await;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_source(
        dir.path(),
        Environment::Production,
        &[format!("{}/prod", mock.uri())],
    );
    write_source(
        dir.path(),
        Environment::Sandbox,
        &[format!("{}/sandbox", mock.uri())],
    );

    let mut out = Vec::new();
    let summary = runner_for(dir.path(), false)
        .run_pass(Environment::Production, &mut out)
        .await
        .unwrap();

    assert_eq!(summary.total, 1);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains(&format!("API: {}/prod  - IsHealthy: true", mock.uri())));
    assert!(!output.contains("/sandbox"));
}

#[tokio::test]
async fn test_status_code_is_not_inspected() {
    let mock = MockServer::start().await;
    mount_health(
        &mock,
        "/degraded",
        ResponseTemplate::new(503).set_body_json(json!({"IsHealthy": true})),
    )
    .await;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_source(
        dir.path(),
        Environment::Sandbox,
        &[format!("{}/degraded", mock.uri())],
    );

    let mut out = Vec::new();
    runner_for(dir.path(), false)
        .run_pass(Environment::Sandbox, &mut out)
        .await
        .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("IsHealthy: true"));
}

#[tokio::test]
async fn test_camel_case_health_key_is_recognized() {
    let mock = MockServer::start().await;
    mount_health(
        &mock,
        "/camel",
        ResponseTemplate::new(200).set_body_json(json!({"isHealthy": true, "service": "billing"})),
    )
    .await;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_source(
        dir.path(),
        Environment::Sandbox,
        &[format!("{}/camel", mock.uri())],
    );

    let mut out = Vec::new();
    let summary = runner_for(dir.path(), false)
        .run_pass(Environment::Sandbox, &mut out)
        .await
        .unwrap();

    assert_eq!(summary.healthy, 1);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains(&format!("API: {}/camel  - IsHealthy: true", mock.uri())));
}

#[tokio::test]
async fn test_non_json_body_is_reported_unhealthy() {
    let mock = MockServer::start().await;
    mount_health(
        &mock,
        "/html",
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_source(
        dir.path(),
        Environment::Sandbox,
        &[format!("{}/html", mock.uri())],
    );

    let mut out = Vec::new();
    let summary = runner_for(dir.path(), false)
        .run_pass(Environment::Sandbox, &mut out)
        .await
        .unwrap();

    assert_eq!(summary.unhealthy, 1);
    assert_eq!(summary.failed, 0);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains(&format!("API: {}/html  - IsHealthy: false", mock.uri())));
    assert!(!output.contains("Error:"));
}

#[tokio::test]
async fn test_strict_decode_reports_non_json_body_as_error() {
    let mock = MockServer::start().await;
    mount_health(
        &mock,
        "/html",
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!("{}/html", mock.uri());
    write_source(dir.path(), Environment::Sandbox, &[url.clone()]);

    let mut out = Vec::new();
    let summary = runner_for(dir.path(), true)
        .run_pass(Environment::Sandbox, &mut out)
        .await
        .unwrap();

    assert_eq!(summary.failed, 1);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains(&format!("Error: {} - Body decode failed", url)));
    assert!(!output.contains("API: "));
}

#[tokio::test]
async fn test_unreachable_endpoint_does_not_stop_pass() {
    let mock = MockServer::start().await;
    mount_health(
        &mock,
        "/ok",
        ResponseTemplate::new(200).set_body_json(json!({"IsHealthy": true})),
    )
    .await;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let refused = refused_url();
    let urls = vec![
        refused.clone(),
        "not a url".to_string(),
        format!("{}/ok", mock.uri()),
    ];
    write_source(dir.path(), Environment::Production, &urls);

    let mut out = Vec::new();
    let summary = runner_for(dir.path(), false)
        .run_pass(Environment::Production, &mut out)
        .await
        .unwrap();

    assert_eq!(
        summary,
        PassSummary {
            total: 3,
            healthy: 1,
            unhealthy: 0,
            failed: 2,
        }
    );

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains(&format!("Error: {} - ", refused)));
    assert!(output.contains("Error: not a url - "));
    assert!(output.contains(&format!("API: {}/ok  - IsHealthy: true", mock.uri())));
    assert!(output.trim_end().ends_with("-- API MONITOR ENDED --"));
}

#[tokio::test]
async fn test_missing_source_file_probes_nothing() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock)
        .await;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_source(
        dir.path(),
        Environment::Sandbox,
        &[format!("{}/health", mock.uri())],
    );

    let mut out = Vec::new();
    let err = runner_for(dir.path(), false)
        .run_pass(Environment::Production, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, MonitorError::SourceFileUnavailable { .. }));
}

#[tokio::test]
async fn test_invalid_utf8_line_is_a_per_endpoint_error() {
    let mock = MockServer::start().await;
    mount_health(
        &mock,
        "/ok",
        ResponseTemplate::new(200).set_body_json(json!({"IsHealthy": true})),
    )
    .await;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let mut contents = b"\xff\xfe\n".to_vec();
    contents.extend_from_slice(format!("{}/ok\n", mock.uri()).as_bytes());
    std::fs::write(dir.path().join("sandbox.txt"), contents)
        .expect("failed to write sandbox.txt");

    let mut out = Vec::new();
    let summary = runner_for(dir.path(), false)
        .run_pass(Environment::Sandbox, &mut out)
        .await
        .unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.healthy, 1);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Error: \u{fffd}\u{fffd} - "));
    assert!(output.contains(&format!("API: {}/ok  - IsHealthy: true", mock.uri())));
}
