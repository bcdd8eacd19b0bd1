pub mod delay;
pub mod executor;
pub mod reporter;
pub mod session;
pub mod types;

pub use delay::delay;
pub use executor::execute_test_fn;
pub use reporter::{ReportLine, Stream, TestReporter};
pub use session::{Asserter, TestSession, mc_test, post_test_result, session};
pub use types::{
    Counters, GroupFailure, GroupOutcome, GroupSummary, Tally, TestFn, TestFuture, TestGroup,
};
