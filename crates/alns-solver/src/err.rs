// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use alns_core::operator::{OperatorError, OperatorKind};
use std::fmt;

/// Rejected configuration, detected at or before the first iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    MissingDestroyOperators,
    MissingRepairOperators,
    DuplicateOperatorName {
        kind: OperatorKind,
        name: String,
    },
    OperatorCountMismatch {
        kind: OperatorKind,
        registered: usize,
        expected: usize,
    },
    MissingSolutionContext {
        selector: String,
    },
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },
}

impl ConfigurationError {
    pub fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDestroyOperators => write!(f, "no destroy operators registered"),
            Self::MissingRepairOperators => write!(f, "no repair operators registered"),
            Self::DuplicateOperatorName { kind, name } => {
                write!(f, "{kind} operator name {name:?} is registered twice")
            }
            Self::OperatorCountMismatch {
                kind,
                registered,
                expected,
            } => write!(
                f,
                "selection scheme expects {expected} {kind} operators but {registered} are registered"
            ),
            Self::MissingSolutionContext { selector } => write!(
                f,
                "selection scheme {selector} requires solution states to provide a context vector"
            ),
            Self::InvalidParameter { parameter, message } => {
                write!(f, "invalid {parameter}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// A candidate evaluated to a non-finite objective value.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidObjectiveError {
    pub iteration: usize,
    pub destroy: String,
    pub repair: String,
    pub value: f64,
}

impl fmt::Display for InvalidObjectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iteration {}: candidate objective {} produced by {:?}/{:?} is not finite",
            self.iteration, self.value, self.destroy, self.repair
        )
    }
}

impl std::error::Error for InvalidObjectiveError {}

/// Fatal error raised by user operator code, carrying the iteration index
/// and the operator that failed.
#[derive(Debug)]
pub struct UserOperatorError {
    pub iteration: usize,
    pub operator: String,
    pub kind: OperatorKind,
    pub source: OperatorError,
}

impl fmt::Display for UserOperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iteration {}: {} operator {:?} failed: {}",
            self.iteration, self.kind, self.operator, self.source
        )
    }
}

impl std::error::Error for UserOperatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Everything that can abort a search.
#[derive(Debug)]
pub enum SearchError {
    Configuration(ConfigurationError),
    InvalidObjective(InvalidObjectiveError),
    Operator(UserOperatorError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "{e}"),
            Self::InvalidObjective(e) => write!(f, "{e}"),
            Self::Operator(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::InvalidObjective(e) => Some(e),
            Self::Operator(e) => Some(e),
        }
    }
}

impl From<ConfigurationError> for SearchError {
    fn from(value: ConfigurationError) -> Self {
        Self::Configuration(value)
    }
}

impl From<InvalidObjectiveError> for SearchError {
    fn from(value: InvalidObjectiveError) -> Self {
        Self::InvalidObjective(value)
    }
}

impl From<UserOperatorError> for SearchError {
    fn from(value: UserOperatorError) -> Self {
        Self::Operator(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_messages_name_the_problem() {
        let e = ConfigurationError::OperatorCountMismatch {
            kind: OperatorKind::Destroy,
            registered: 2,
            expected: 3,
        };
        assert_eq!(
            e.to_string(),
            "selection scheme expects 3 destroy operators but 2 are registered"
        );

        let e = ConfigurationError::invalid_parameter("decay", "0.0..=1.0 required, got 1.5");
        assert_eq!(e.to_string(), "invalid decay: 0.0..=1.0 required, got 1.5");
    }

    #[test]
    fn operator_error_chains_its_source() {
        let e = UserOperatorError {
            iteration: 12,
            operator: "greedy_insert".into(),
            kind: OperatorKind::Repair,
            source: "capacity exceeded".into(),
        };
        assert!(e.to_string().contains("iteration 12"));
        assert!(e.to_string().contains("greedy_insert"));
        assert_eq!(
            std::error::Error::source(&e).unwrap().to_string(),
            "capacity exceeded"
        );
    }

    #[test]
    fn search_error_wraps_all_kinds() {
        let e: SearchError = ConfigurationError::MissingDestroyOperators.into();
        assert!(matches!(e, SearchError::Configuration(_)));

        let e: SearchError = InvalidObjectiveError {
            iteration: 3,
            destroy: "d".into(),
            repair: "r".into(),
            value: f64::NAN,
        }
        .into();
        assert!(e.to_string().contains("not finite"));
    }
}
