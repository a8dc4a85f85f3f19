//! Global subscriber installation.
//!
//! `init_subscriber` sets the process-wide default, so these checks run in
//! their own test binary and never share a process with `tracing-test`.

use advantage::telemetry::{OutputFormat, SubscriberConfig, init_subscriber};

#[test]
fn file_subscriber_writes_events_and_tolerates_reinstall() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("advantage.log");

    let config = SubscriberConfig::builder()
        .log_level(tracing::Level::DEBUG)
        .output_format(OutputFormat::JsonCompact)
        .log_file(log_path.clone())
        .build();
    let guard = init_subscriber(config).unwrap();
    assert!(guard.is_some());

    tracing::info!(target: "advantage::http", request_id = "req_test", "response received");

    // A second install leaves the first subscriber in place.
    let again = init_subscriber(SubscriberConfig::debug()).unwrap();
    assert!(again.is_none());

    // Dropping the guard flushes the non-blocking writer.
    drop(guard);
    let written = std::fs::read_to_string(&log_path).unwrap();
    assert!(written.contains("response received"));
    assert!(written.contains("req_test"));
}
