use gshop_logger::{LogConfig, LogFormat, Logger};

#[test]
fn init_console_only_has_no_guard() {
    let settings = LogConfig { format: LogFormat::Pretty, ..LogConfig::default() };

    let logger = Logger::builder()
        .name("integration-console-only")
        .settings(&settings)
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
