use std::fmt;

/// Errors raised while evaluating an assertion
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssertError {
    #[error("Value at {path} cannot be compared structurally: {kind} values are opaque")]
    Unserializable { path: String, kind: &'static str },
}

/// The four comparison flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertKind {
    /// Identity / primitive equality
    Equals,
    NotEquals,
    /// Structural (deep) equality
    StrictEquals,
    NotStrictEquals,
}

impl AssertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "assert_equals",
            Self::NotEquals => "assert_not_equals",
            Self::StrictEquals => "assert_strict_equals",
            Self::NotStrictEquals => "assert_not_strict_equals",
        }
    }

    /// Whether a positive comparison means the assertion passed
    pub fn expects_equal(&self) -> bool {
        matches!(self, Self::Equals | Self::StrictEquals)
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, Self::StrictEquals | Self::NotStrictEquals)
    }
}

impl fmt::Display for AssertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a single assertion
#[derive(Debug, Clone, PartialEq)]
pub enum AssertOutcome {
    Passed,
    /// Carries the full failure line
    Failed(String),
    /// The comparison itself could not be carried out
    Errored(AssertError),
}

impl AssertOutcome {
    pub const PASSED: &'static str = "Passed";

    /// `"Passed"`, the failure line, or an empty string for an errored comparison
    pub fn as_str(&self) -> &str {
        match self {
            AssertOutcome::Passed => Self::PASSED,
            AssertOutcome::Failed(line) => line,
            AssertOutcome::Errored(_) => "",
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, AssertOutcome::Passed)
    }
}

impl fmt::Display for AssertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for AssertOutcome {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
