/// Assertion module: comparable values, equality flavours and outcomes
mod compare;
mod evaluator;
mod types;
mod value;

pub use compare::{deep_equal, identical};
pub use evaluator::{evaluate_assertion, format_failure};
pub use types::{AssertError, AssertKind, AssertOutcome};
pub use value::Value;
