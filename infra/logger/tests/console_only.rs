use vcb_domain::config::LogConfig;
use vcb_logger::Logger;

#[test]
fn console_only_config_has_no_guard() {
    let logger = Logger::from_config("integration-console-only", &LogConfig::default())
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
