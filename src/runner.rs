use crate::{cli::ExitStatus, session::Session, test::TestCase};

/// Run the given tests and terminate the process with the resulting status.
///
/// This is the only place the harness exits the process; everything below it
/// reports through return values.
pub fn run_tests(tests: &[TestCase]) {
    run_tests_inner(tests).exit();
}

fn run_tests_inner(tests: &[TestCase]) -> ExitStatus {
    let mut session = match Session::from_env() {
        Ok(session) => session,
        Err(status) => return status,
    };

    log::debug!(
        "----- RUNNING: {}",
        std::env::args().next().unwrap_or_default()
    );

    session.run(tests)
}
