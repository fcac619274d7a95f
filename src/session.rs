use crate::{
    cli::{Args, ExitStatus, Printer},
    report::{FailedTest, Report},
    test::TestCase,
};
use std::collections::HashSet;

/// The context for a single suite run.
///
/// The session owns the test counter: it is incremented once per invoked
/// test, whatever the outcome, and keeps its value when the run stops at a
/// failure. Filtered-out tests are never invoked and never counted.
pub struct Session {
    args: Args,
    printer: Printer,
    tests_run: usize,
}

impl Session {
    /// Create a session from the command line environment.
    pub fn from_env() -> Result<Self, ExitStatus> {
        let args = Args::from_env()?;
        Ok(Self::new(args))
    }

    /// Create a session with explicit arguments.
    pub fn new(args: Args) -> Self {
        let printer = Printer::new(args.color);
        Self {
            args,
            printer,
            tests_run: 0,
        }
    }

    /// Return the number of tests invoked so far.
    #[inline]
    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    /// Run the suite with the full command line behavior and return the
    /// status the process should exit with.
    pub fn run(&mut self, tests: &[TestCase]) -> ExitStatus {
        if let Err(status) = self.verify_unique_names(tests) {
            return status;
        }

        let pending = self.pending(tests);
        let filtered_out = tests.len() - pending.len();

        if self.args.list_tests {
            let _ = self.printer.print_list(&pending);
            return ExitStatus::OK;
        }

        let _ = self.printer.print_running(pending.len());
        let report = self.run_pending(&pending, filtered_out);
        let _ = self.printer.print_report(&report);
        report.status()
    }

    /// Run the suite and return the report without printing anything.
    ///
    /// Tests execute sequentially in declaration order; the run stops at the
    /// first failure and the remaining tests are never invoked.
    pub fn run_suite(&mut self, tests: &[TestCase]) -> Report {
        let pending = self.pending(tests);
        let filtered_out = tests.len() - pending.len();
        self.run_pending(&pending, filtered_out)
    }

    fn run_pending(&mut self, pending: &[&TestCase], filtered_out: usize) -> Report {
        let mut failed = None;

        for test in pending {
            log::debug!("----- {}", test.name());
            self.tests_run += 1;

            let outcome = (test.test_fn)();
            if !outcome.is_passed() {
                failed = Some(FailedTest {
                    name: test.name(),
                    message: outcome.into_message(),
                });
                break;
            }
        }

        Report {
            tests_run: self.tests_run,
            failed,
            filtered_out,
        }
    }

    fn pending<'a>(&self, tests: &'a [TestCase]) -> Vec<&'a TestCase> {
        tests
            .iter()
            .filter(|test| !self.args.is_filtered_out(test.name()))
            .collect()
    }

    fn verify_unique_names(&self, tests: &[TestCase]) -> Result<(), ExitStatus> {
        let mut unique_test_names = HashSet::new();
        for test in tests {
            if !unique_test_names.insert(test.name()) {
                eprintln!(
                    "the test name '{}' is conflicted (declared at {})",
                    test.name(),
                    test.desc.location
                );
                return Err(ExitStatus::FAILED);
            }
        }
        Ok(())
    }
}
