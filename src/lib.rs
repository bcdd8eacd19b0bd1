//! Equality assertions, named test groups with per-group counts, and an
//! aggregate summary report.
//!
//! ```no_run
//! use mctest::{TestGroup, TestSession};
//!
//! # async fn run() {
//! let session = TestSession::default();
//! session
//!     .run_group(TestGroup::new("math").test_sync(|t| {
//!         t.assert_equals(2 + 2, 4, "addition");
//!         Ok(())
//!     }))
//!     .await;
//! session.post_test_result();
//! # }
//! ```

pub mod assertion;
pub mod config;
pub mod error;
pub mod logger;
pub mod runner;

// Re-export commonly used types
pub use assertion::{AssertOutcome, Value};
pub use error::{McTestError, Result};
pub use runner::{
    Asserter, GroupSummary, Tally, TestGroup, TestSession, delay, mc_test, post_test_result,
    session,
};
