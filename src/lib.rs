/*!
A minimal unit testing harness with first-failure semantics.

Tests are plain functions returning an [`Outcome`]. The [`check!`] macro
verifies a condition and fails the enclosing test immediately when it does
not hold; the suite stops at the first failing test. [`test_main!`] generates
the entry point of the test binary, which prints a colored pass/fail banner
together with the number of tests run and exits with a non-zero status on
failure.

```no_run
use mu::{check, Outcome};

fn arithmetic() -> Outcome {
    check!(2 + 2 == 4);
    Outcome::passed()
}

fn strings() -> Outcome {
    let joined = ["a", "b"].join("-");
    check!(joined == "a-b", "unexpected join: {}", joined);
    Outcome::passed()
}

mu::test_main![arithmetic, strings];
```

Failure messages and the per-test trace lines are routed through the `log`
facade; install a logger in the test binary to see them.
!*/

#[macro_use]
mod macros;

mod cli;
mod outcome;
mod report;
mod runner;
mod session;

pub use crate::{
    cli::{Args, ColorConfig, ExitStatus},
    outcome::Outcome,
    report::{FailedTest, Report},
    runner::run_tests,
    session::Session,
    test::{Location, TestCase, TestDesc, TestFn},
};

hidden_item! {
    /// Re-exported items for the macros in this crate.
    pub mod _macro_reexports {
        pub use crate::test::{Location, TestCase, TestDesc};
        pub use log;
        pub use std::{column, file, format, line, stringify};
    }
}
