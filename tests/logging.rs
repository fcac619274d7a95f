use log::{Level, LevelFilter, Metadata, Record};
use mu::{check, suite, Args, ColorConfig, Outcome, Session};
use std::sync::{Mutex, Once};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

fn install_logger() {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Debug);
    });
}

fn take_records() -> Vec<(Level, String)> {
    RECORDS.lock().unwrap().split_off(0)
}

fn passes() -> Outcome {
    check!(1 + 1 == 2);
    Outcome::passed()
}

fn fails() -> Outcome {
    check!(false, "B failed");
    Outcome::passed()
}

// log::set_logger is process-global, so every observation lives in a single
// test function.
#[test]
fn assertion_and_trace_logging() {
    install_logger();

    // A true condition leaves no trace.
    let outcome = passes();
    assert!(outcome.is_passed());
    assert!(take_records().is_empty());

    // A false condition logs the message exactly once, at error level.
    let outcome = fails();
    assert!(!outcome.is_passed());
    assert_eq!(take_records(), vec![(Level::Error, "B failed".to_string())]);

    // The session traces each test by name before invoking it.
    let tests = suite![passes];
    let mut session = Session::new(Args {
        color: ColorConfig::Never,
        ..Args::default()
    });
    let report = session.run_suite(&tests);
    assert!(report.is_passed());
    assert_eq!(
        take_records(),
        vec![(Level::Debug, "----- passes".to_string())]
    );
}
