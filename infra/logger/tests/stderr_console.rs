use aasm_logger::{LevelFilter, Logger};

#[test]
fn stderr_console_logger_initializes() {
    let logger = Logger::builder()
        .name("aasm-stderr")
        .level(LevelFilter::WARN)
        .stderr(true)
        .init()
        .expect("logger should initialize");

    tracing::warn!(member = "Alvise Sommariva", "no committee entry");
    assert!(!logger.writes_files());
}
