use tss_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_logger_in_one_process_is_refused() {
    let first = Logger::builder().name("ts-scaffolder").level(LevelFilter::DEBUG).init();
    let _first = first.expect("console logger should start");

    let second = Logger::builder().name("ts-scaffolder").ansi(false).init();
    match second {
        Err(LoggerError::Subscriber { context, .. }) => assert!(context.is_none()),
        other => panic!("expected a subscriber error, got {other:?}"),
    }
}
