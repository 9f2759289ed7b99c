//! Error taxonomy for equivalence checking.

use std::fmt;

use crate::eval::{CompileError, EvalError};

/// Errors surfaced by [`check_equivalence`][crate::check::check_equivalence] and its building blocks.
///
/// A pair of expressions that simply disagree on some assignment is *not* an error:
/// that outcome is reported as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A comparator/literal pair does not have the `variable <cmp> 0|1` shape.
    Format { expression: String, detail: String },
    /// A logical operator other than `&&` or `||`.
    Combinator { expression: String, operator: String },
    /// A character outside the expression alphabet.
    InvalidCharacter {
        expression: String,
        character: char,
        position: usize,
    },
    /// The expression does not name a single variable.
    EmptyExpression { expression: String },
    /// The expressions reference different numbers of distinct variables.
    ParameterCountMismatch { params1: Vec<String>, params2: Vec<String> },
    /// Same number of distinct variables, but not the same ones.
    ParameterSetMismatch { params1: Vec<String>, params2: Vec<String> },
    /// More distinct variables than the configured limit allows.
    TooManyVariables { count: usize, limit: usize },
    /// The evaluator could not parse an expression.
    Compile(CompileError),
    /// The evaluator failed on a particular assignment.
    Eval(EvalError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<CompileError> for Error {
    fn from(e: CompileError) -> Self {
        Error::Compile(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Error::Eval(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Format { expression, detail } => write!(
                f,
                "invalid expression `{}`, required format 'variable == 1 or 0': {}",
                expression, detail
            ),
            Error::Combinator { expression, operator } => write!(
                f,
                "invalid expression `{}`, allowed combinators && or ||, found `{}`",
                expression, operator
            ),
            Error::InvalidCharacter {
                expression,
                character,
                position,
            } => write!(
                f,
                "invalid expression `{}`, invalid character {:?} at offset {}",
                expression, character, position
            ),
            Error::EmptyExpression { expression } => {
                write!(f, "expression `{}` does not reference any variable", expression)
            }
            Error::ParameterCountMismatch { params1, params2 } => write!(
                f,
                "expressions have different number of parameters, params1: {:?}, params2: {:?}",
                params1, params2
            ),
            Error::ParameterSetMismatch { params1, params2 } => write!(
                f,
                "expressions have different parameters, params1: {:?}, params2: {:?}",
                params1, params2
            ),
            Error::TooManyVariables { count, limit } => write!(
                f,
                "expressions reference {} distinct variables, limit is {}",
                count, limit
            ),
            Error::Compile(e) => write!(f, "unable to compile expression: {}", e),
            Error::Eval(e) => write!(f, "unable to evaluate expression: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Compile(e) => Some(e),
            Error::Eval(e) => Some(e),
            _ => None,
        }
    }
}
