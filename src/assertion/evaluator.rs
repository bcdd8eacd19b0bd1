use crate::assertion::compare::{deep_equal, identical};
use crate::assertion::types::{AssertKind, AssertOutcome};
use crate::assertion::value::Value;

/// Evaluate one assertion. Counting and printing are left to the caller.
pub fn evaluate_assertion(
    kind: AssertKind,
    expr: &Value,
    result: &Value,
    message: Option<&str>,
) -> AssertOutcome {
    let equal = if kind.is_structural() {
        match deep_equal(expr, result) {
            Ok(equal) => equal,
            Err(e) => return AssertOutcome::Errored(e),
        }
    } else {
        identical(expr, result)
    };

    if equal == kind.expects_equal() {
        AssertOutcome::Passed
    } else {
        AssertOutcome::Failed(format_failure(expr, result, message))
    }
}

/// `Failed: <message> =>  Expected <result>, Got <expr>`
///
/// A missing message renders as an empty string, so the line reads
/// `Failed:  =>  ...` rather than carrying a placeholder word.
pub fn format_failure(expr: &Value, result: &Value, message: Option<&str>) -> String {
    format!(
        "Failed: {} =>  Expected {}, Got {}",
        message.unwrap_or_default(),
        result,
        expr
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_equals_success() {
        let outcome = evaluate_assertion(
            AssertKind::Equals,
            &Value::from(2 + 2),
            &Value::from(4),
            None,
        );
        assert_eq!(outcome, AssertOutcome::Passed);
    }

    #[test]
    fn test_evaluate_equals_failure() {
        let outcome = evaluate_assertion(
            AssertKind::Equals,
            &Value::from(2 + 2),
            &Value::from(5),
            Some("math check"),
        );
        assert_eq!(outcome.as_str(), "Failed: math check =>  Expected 5, Got 4");
    }

    #[test]
    fn test_evaluate_not_equals() {
        let same = Value::from("abc");
        let outcome = evaluate_assertion(AssertKind::NotEquals, &same, &same, Some("same"));
        assert_eq!(outcome.as_str(), "Failed: same =>  Expected abc, Got abc");

        let outcome = evaluate_assertion(
            AssertKind::NotEquals,
            &Value::from(1),
            &Value::from(2),
            None,
        );
        assert!(outcome.is_passed());
    }

    #[test]
    fn test_distinct_instances_equal_only_structurally() {
        let a = Value::object([("x", 1)]);
        let b = Value::object([("x", 1)]);

        let identity = evaluate_assertion(AssertKind::Equals, &a, &b, None);
        assert_eq!(
            identity.as_str(),
            "Failed:  =>  Expected [object Object], Got [object Object]"
        );

        let deep = evaluate_assertion(AssertKind::StrictEquals, &a, &b, None);
        assert!(deep.is_passed());

        let not_deep = evaluate_assertion(AssertKind::NotStrictEquals, &a, &b, None);
        assert!(!not_deep.is_passed());
    }

    #[test]
    fn test_missing_message_renders_empty() {
        assert_eq!(
            format_failure(&Value::from(1), &Value::from(2), None),
            "Failed:  =>  Expected 2, Got 1"
        );
        assert_eq!(
            format_failure(&Value::from(1), &Value::from(2), Some("")),
            format_failure(&Value::from(1), &Value::from(2), None)
        );
    }

    #[test]
    fn test_structural_error_yields_empty_string() {
        let a = Value::function("callback");
        let outcome = evaluate_assertion(AssertKind::NotStrictEquals, &a, &Value::Null, None);
        assert!(matches!(outcome, AssertOutcome::Errored(_)));
        assert_eq!(outcome.as_str(), "");
    }
}
