//! # expr-equiv: truth-table equivalence of boolean filter rules
//!
//! **`expr-equiv`** decides whether two boolean expressions are logically equivalent.
//! It is meant for spotting duplicate targeting/filter rules that only differ in operand
//! order or grouping, e.g. `a == 1 && b == 1` versus `b == 1 && a == 1`.
//!
//! ## Expression syntax
//!
//! - Atoms compare a variable against a binary literal: `name <cmp> 0|1`, where `<cmp>` is
//!   one of `==`, `!=`, `>=`, `<=`.
//! - Variable names may contain letters, digits, `_`, `-` and `.` (but may not start with a digit).
//! - Atoms are combined with `&&` and `||` (`&&` binds tighter) and grouped with parentheses.
//!
//! ## How it works
//!
//! Both expressions are validated and their variables extracted. The two variable sets
//! must be identical, otherwise the comparison fails with
//! [`Error::ParameterCountMismatch`] or [`Error::ParameterSetMismatch`].
//! The combined expression `(expr1) == (expr2)` is then evaluated under all `2^n`
//! assignments of the `n` shared variables; the expressions are equivalent iff every
//! assignment yields `true`.
//!
//! The cost is exponential in the number of distinct variables. Use
//! [`CheckerConfig::max_variables`] to put a bound on it.
//!
//! ## Basic Usage
//!
//! ```rust
//! use expr_equiv::{check_equivalence, Error};
//!
//! // Same rule, different grouping and order.
//! let same = check_equivalence(
//!     "(a == 1 || b == 1) && c == 0",
//!     "c == 0 && (b == 1 || a == 1)",
//! )?;
//! assert!(same);
//!
//! // Same variables, different meaning.
//! let same = check_equivalence(
//!     "(a == 1 || b == 1) && (c == 0 || a == 1)",
//!     "(a == 0 || c == 0) && (b == 1 || a == 1)",
//! )?;
//! assert!(!same);
//!
//! // Malformed input is rejected before anything is evaluated.
//! assert!(matches!(check_equivalence("a === 1", "a == 1"), Err(Error::Format { .. })));
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`validate`]**: syntactic validation and variable extraction.
//! - **[`reconcile`]**: reconciling the variable sets of two expressions.
//! - **[`truth_table`]**: enumeration of all binary assignments.
//! - **[`eval`]**: the expression evaluation engine.
//! - **[`check`]**: the decision procedure tying it all together.

pub mod ast;
pub mod check;
pub mod env;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod reconcile;
pub mod truth_table;
pub mod validate;

pub use check::{check_equivalence, Checker, CheckerConfig, Comparison};
pub use error::{Error, Result};
