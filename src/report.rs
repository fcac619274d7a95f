use crate::cli::ExitStatus;
use std::borrow::Cow;

/// A report on suite execution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Report {
    /// The number of tests invoked before the run stopped.
    pub tests_run: usize,

    /// The first failed test, if any.
    ///
    /// The run halts as soon as a test fails, so at most one failure is ever
    /// recorded.
    pub failed: Option<FailedTest>,

    /// The number of tests excluded by the command line filter.
    pub filtered_out: usize,
}

/// The failure that stopped a suite run.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedTest {
    /// The name of the failed test.
    pub name: &'static str,

    /// The message recorded by the failing assertion.
    pub message: Option<Cow<'static, str>>,
}

impl Report {
    /// Return whether every invoked test passed.
    pub fn is_passed(&self) -> bool {
        self.failed.is_none()
    }

    /// Return an exit status used as a result of the test process.
    pub fn status(&self) -> ExitStatus {
        if self.is_passed() {
            ExitStatus::OK
        } else {
            ExitStatus::FAILED
        }
    }
}
