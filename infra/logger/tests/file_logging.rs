use gshop_logger::{LogConfig, LogFormat, LogRotation, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_logging_writes_structured_records() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let settings = LogConfig {
        console: false,
        format: LogFormat::Json,
        directory: Some(log_dir.clone()),
        rotation: LogRotation::Never,
        ..LogConfig::default()
    };

    let logger = Logger::builder().name("integration-file-logging").settings(&settings).init()?;

    tracing::info!(username = "alice", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("\"username\":\"alice\""), "unexpected log contents: {contents}");

    Ok(())
}
