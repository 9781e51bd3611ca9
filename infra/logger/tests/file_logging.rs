use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use vcb_domain::config::LogConfig;
use vcb_logger::Logger;

#[test]
fn json_file_logging_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LogConfig {
        level: "debug".to_owned(),
        path: Some(log_dir.clone()),
        json: true,
        max_files: 2,
        ..LogConfig::default()
    };

    let logger = Logger::from_config("integration-file-logging", &config)?;
    assert!(logger.guard().is_some(), "file logging should hold a worker guard");

    tracing::info!(view = "calls", "view mounted");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents
        .lines()
        .find(|line| line.contains("view mounted"))
        .expect("event should be written");
    assert!(line.starts_with('{'), "json output expected, got: {line}");
    assert!(line.contains("\"view\":\"calls\""));

    Ok(())
}
