use crate::runner::session::Asserter;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Boxed future returned by a test function
pub type TestFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

/// A group's test function. It receives the assertion handle for its group.
pub type TestFn = Box<dyn FnOnce(Asserter) -> TestFuture + Send>;

/// Passed/failed pair shared between asserters
#[derive(Debug, Default)]
pub struct Counters {
    passed: AtomicUsize,
    failed: AtomicUsize,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&self) {
        self.passed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_fail(&self) {
        self.failed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Tally {
        Tally {
            passed: self.passed.load(Ordering::SeqCst),
            failed: self.failed.load(Ordering::SeqCst),
        }
    }

    /// Read and zero both counters
    pub fn take(&self) -> Tally {
        Tally {
            passed: self.passed.swap(0, Ordering::SeqCst),
            failed: self.failed.swap(0, Ordering::SeqCst),
        }
    }
}

/// Point-in-time counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn new(passed: usize, failed: usize) -> Self {
        Self { passed, failed }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Options for one test group
#[derive(Default)]
pub struct TestGroup {
    pub name: Option<String>,
    pub test_fn: Option<TestFn>,
    /// Recorded but never executed
    pub before: Option<String>,
    /// Recorded but never executed
    pub after: Option<String>,
}

impl TestGroup {
    pub const DEFAULT_NAME: &'static str = "Unknown";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Attach an async test function
    pub fn test<F, Fut>(mut self, f: F) -> Self
    where
        F: FnOnce(Asserter) -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let test_fn: TestFn = Box::new(move |t: Asserter| -> TestFuture { Box::pin(f(t)) });
        self.test_fn = Some(test_fn);
        self
    }

    /// Attach a synchronous test function
    pub fn test_sync<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Asserter) -> anyhow::Result<()> + Send + 'static,
    {
        let test_fn: TestFn =
            Box::new(move |t: Asserter| -> TestFuture { Box::pin(async move { f(t) }) });
        self.test_fn = Some(test_fn);
        self
    }

    pub fn before(mut self, hook: impl Into<String>) -> Self {
        self.before = Some(hook.into());
        self
    }

    pub fn after(mut self, hook: impl Into<String>) -> Self {
        self.after = Some(hook.into());
        self
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => Self::DEFAULT_NAME,
        }
    }
}

impl fmt::Debug for TestGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestGroup")
            .field("name", &self.name)
            .field("test_fn", &self.test_fn.as_ref().map(|_| "<fn>"))
            .field("before", &self.before)
            .field("after", &self.after)
            .finish()
    }
}

/// Why a test function did not complete normally
#[derive(Debug, thiserror::Error)]
pub enum GroupFailure {
    #[error("{0:#}")]
    Error(anyhow::Error),

    #[error("Test function panicked: {0}")]
    Panicked(String),

    #[error("Test function was cancelled")]
    Cancelled,
}

#[derive(Debug)]
pub enum GroupOutcome {
    Completed,
    /// No test function was supplied
    Skipped,
    Failed(GroupFailure),
}

/// Result of one group run; always produced, even when the test function fails
#[derive(Debug)]
pub struct GroupSummary {
    pub name: String,
    pub tally: Tally,
    pub outcome: GroupOutcome,
}

impl GroupSummary {
    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, GroupOutcome::Skipped)
    }

    pub fn failure(&self) -> Option<&GroupFailure> {
        match &self.outcome {
            GroupOutcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
