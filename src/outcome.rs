use std::borrow::Cow;

/// The outcome of performing a single test.
///
/// Test functions return an `Outcome` instead of signalling through panics;
/// a failed outcome carries the message recorded by the assertion that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    kind: OutcomeKind,
    message: Option<Cow<'static, str>>,
}

impl Outcome {
    #[inline]
    fn new(kind: OutcomeKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Create an `Outcome` representing that the test passed.
    #[inline]
    pub fn passed() -> Self {
        Self::new(OutcomeKind::Passed)
    }

    /// Create an `Outcome` representing that the test failed.
    pub fn failed() -> Self {
        Self::new(OutcomeKind::Failed)
    }

    /// Specify the error message.
    pub fn error_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: Some(message.into()),
            ..self
        }
    }

    /// Return whether the test passed or not.
    pub fn is_passed(&self) -> bool {
        match self.kind {
            OutcomeKind::Passed => true,
            OutcomeKind::Failed => false,
        }
    }

    /// Return the failure message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn into_message(self) -> Option<Cow<'static, str>> {
        self.message
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum OutcomeKind {
    Passed,
    Failed,
}
