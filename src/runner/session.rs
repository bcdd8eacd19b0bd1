use crate::assertion::{AssertKind, AssertOutcome, Value, evaluate_assertion};
use crate::config::{ConfigLoader, McTestConfig, ReportConfig};
use crate::runner::executor::execute_test_fn;
use crate::runner::reporter::TestReporter;
use crate::runner::types::{Counters, GroupOutcome, GroupSummary, Tally, TestGroup};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, warn};

/// Assertion handle for one group.
///
/// Every assertion counts into the group's counters and the session's
/// aggregate counters, and prints its result line.
#[derive(Clone)]
pub struct Asserter {
    group: Arc<Counters>,
    aggregate: Arc<Counters>,
    reporter: Arc<TestReporter>,
}

impl Asserter {
    /// Identity / primitive equality
    pub fn assert_equals<'m>(
        &self,
        expr: impl Into<Value>,
        result: impl Into<Value>,
        message: impl Into<Option<&'m str>>,
    ) -> AssertOutcome {
        self.check(AssertKind::Equals, expr.into(), result.into(), message.into())
    }

    pub fn assert_not_equals<'m>(
        &self,
        expr: impl Into<Value>,
        result: impl Into<Value>,
        message: impl Into<Option<&'m str>>,
    ) -> AssertOutcome {
        self.check(
            AssertKind::NotEquals,
            expr.into(),
            result.into(),
            message.into(),
        )
    }

    /// Structural equality
    pub fn assert_strict_equals<'m>(
        &self,
        expr: impl Into<Value>,
        result: impl Into<Value>,
        message: impl Into<Option<&'m str>>,
    ) -> AssertOutcome {
        self.check(
            AssertKind::StrictEquals,
            expr.into(),
            result.into(),
            message.into(),
        )
    }

    pub fn assert_not_strict_equals<'m>(
        &self,
        expr: impl Into<Value>,
        result: impl Into<Value>,
        message: impl Into<Option<&'m str>>,
    ) -> AssertOutcome {
        self.check(
            AssertKind::NotStrictEquals,
            expr.into(),
            result.into(),
            message.into(),
        )
    }

    /// Counts for this group so far
    pub fn tally(&self) -> Tally {
        self.group.snapshot()
    }

    fn check(
        &self,
        kind: AssertKind,
        expr: Value,
        result: Value,
        message: Option<&str>,
    ) -> AssertOutcome {
        let outcome = evaluate_assertion(kind, &expr, &result, message);

        match &outcome {
            AssertOutcome::Passed => {
                self.reporter.print_passed();
                self.group.record_pass();
                self.aggregate.record_pass();
            }
            AssertOutcome::Failed(line) => {
                self.reporter.print_failed(line);
                self.group.record_fail();
                self.aggregate.record_fail();
            }
            AssertOutcome::Errored(e) => {
                warn!("{} could not compare values: {}", kind, e);
                self.reporter.print_assert_error(e);
                self.group.record_fail();
                self.aggregate.record_fail();
            }
        }

        outcome
    }
}

/// Owns the aggregate counters and the reporter for a run
#[derive(Clone)]
pub struct TestSession {
    aggregate: Arc<Counters>,
    reporter: Arc<TestReporter>,
}

impl TestSession {
    pub fn new(reporter: TestReporter) -> Self {
        Self {
            aggregate: Arc::new(Counters::new()),
            reporter: Arc::new(reporter),
        }
    }

    pub fn from_config(config: &McTestConfig) -> Self {
        Self::new(TestReporter::new(&config.report))
    }

    /// Session whose output is recorded rather than printed
    pub fn capturing() -> Self {
        Self::new(TestReporter::capturing(&ReportConfig::default()))
    }

    pub fn reporter(&self) -> &TestReporter {
        &self.reporter
    }

    /// Aggregate counts since the last report
    pub fn aggregate(&self) -> Tally {
        self.aggregate.snapshot()
    }

    /// Asserter bound to a fresh, detached group
    pub fn asserter(&self) -> Asserter {
        Asserter {
            group: Arc::new(Counters::new()),
            aggregate: Arc::clone(&self.aggregate),
            reporter: Arc::clone(&self.reporter),
        }
    }

    /// Run one test group and print its summary.
    ///
    /// Always resolves: a failing or panicking test function is reported and
    /// recorded in the returned summary.
    ///
    /// Must be awaited inside a tokio runtime, since the test function runs on
    /// a spawned task. Outside one (e.g. a bare `block_on`) this panics.
    pub async fn run_group(&self, group: TestGroup) -> GroupSummary {
        let name = group.display_name().to_string();
        let asserter = self.asserter();
        let group_counters = Arc::clone(&asserter.group);

        self.reporter.print_group_header(&name);
        debug!(
            group = %name,
            before = ?group.before,
            after = ?group.after,
            "Starting test group"
        );

        let outcome = match group.test_fn {
            Some(test_fn) => match execute_test_fn(test_fn, asserter).await {
                Ok(()) => GroupOutcome::Completed,
                Err(failure) => {
                    warn!("Test group {} failed: {}", name, failure);
                    self.reporter.print_group_error(&failure);
                    GroupOutcome::Failed(failure)
                }
            },
            None => {
                warn!("Test group {} has no test function", name);
                self.reporter.print_skipped();
                GroupOutcome::Skipped
            }
        };

        let tally = group_counters.snapshot();
        self.reporter.print_group_summary(&name, tally);

        GroupSummary {
            name,
            tally,
            outcome,
        }
    }

    /// Print the aggregate banner and reset the aggregate counters
    pub fn post_test_result(&self) -> Tally {
        let tally = self.aggregate.take();
        self.reporter.print_aggregate(tally);
        tally
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new(TestReporter::default())
    }
}

static DEFAULT_SESSION: Lazy<TestSession> =
    Lazy::new(|| TestSession::from_config(&ConfigLoader::find_and_load()));

/// Process-wide session used by [`mc_test`] and [`post_test_result`]
pub fn session() -> &'static TestSession {
    &DEFAULT_SESSION
}

/// Run a group on the process-wide session.
///
/// Like [`TestSession::run_group`], this requires a tokio runtime.
pub async fn mc_test(group: TestGroup) -> GroupSummary {
    session().run_group(group).await
}

/// Report and reset the process-wide session's aggregate counters
pub fn post_test_result() -> Tally {
    session().post_test_result()
}
