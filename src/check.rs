//! Equivalence decision.
//!
//! Two expressions are equivalent iff `(expr1) == (expr2)` holds under every
//! assignment of 0/1 to the variables they share. The pipeline is:
//!
//! 1. [validate][crate::validate] both expressions,
//! 2. [reconcile][crate::reconcile] their variable sets into the canonical list,
//! 3. [compile][crate::eval::compile] the combined expression once,
//! 4. [walk][crate::truth_table::walk] all `2^n` assignments, evaluating the combined expression at each.
//!
//! # Examples
//!
//! ```
//! use expr_equiv::check::{Checker, CheckerConfig};
//!
//! let checker = Checker::new(CheckerConfig {
//!     max_variables: Some(16),
//!     ..CheckerConfig::default()
//! });
//!
//! let cmp = checker
//!     .compare("(a == 1 || b == 1) && c == 0", "c == 0 && (b == 1 || a == 1)")
//!     .unwrap();
//! assert!(cmp.equivalent);
//! assert_eq!(cmp.evaluated, 8);
//! ```

use std::ops::ControlFlow;

use log::{debug, trace, warn};

use crate::env::Environment;
use crate::error::{Error, Result};
use crate::eval;
use crate::reconcile::reconcile;
use crate::truth_table;
use crate::validate::Expression;

/// Configuration for a [`Checker`].
#[derive(Debug, Clone, Default)]
pub struct CheckerConfig {
    /// Upper bound on the number of distinct variables (default: none).
    ///
    /// The check costs `2^n` evaluations. When set, larger inputs are rejected with
    /// [`Error::TooManyVariables`] before any evaluation happens.
    pub max_variables: Option<usize>,
    /// Stop at the first disagreeing assignment (default: false).
    ///
    /// The verdict is the same either way; only [`Comparison::evaluated`] and
    /// [`Comparison::agreeing`] reflect the shorter walk.
    pub stop_at_first_mismatch: bool,
}

/// Outcome of comparing two expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Whether the expressions agree on every assignment.
    pub equivalent: bool,
    /// Canonical variables, in first-occurrence order of the first expression.
    pub variables: Vec<String>,
    /// Number of assignments evaluated.
    pub evaluated: u64,
    /// Number of assignments on which the expressions agree.
    pub agreeing: u64,
    /// First assignment on which the expressions disagree.
    pub counterexample: Option<Environment>,
}

impl Comparison {
    pub fn disagreeing(&self) -> u64 {
        self.evaluated - self.agreeing
    }
}

#[derive(Debug, Clone, Default)]
pub struct Checker {
    config: CheckerConfig,
}

impl Checker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Returns `Ok(true)` iff `expr1` and `expr2` are logically equivalent.
    pub fn check(&self, expr1: &str, expr2: &str) -> Result<bool> {
        Ok(self.compare(expr1, expr2)?.equivalent)
    }

    /// Compares `expr1` and `expr2` over their full truth table.
    ///
    /// # Errors
    ///
    /// Validation, reconciliation and evaluation errors are returned unchanged.
    /// Disagreement is not an error: it yields `equivalent == false`.
    pub fn compare(&self, expr1: &str, expr2: &str) -> Result<Comparison> {
        let lhs = Expression::parse(expr1)?;
        let rhs = Expression::parse(expr2)?;
        let variables = reconcile(lhs.variables(), rhs.variables())?;

        if let Some(limit) = self.config.max_variables {
            if variables.len() > limit {
                warn!("refusing to enumerate {} variables (limit {})", variables.len(), limit);
                return Err(Error::TooManyVariables {
                    count: variables.len(),
                    limit,
                });
            }
        }

        // Each side must be well-formed on its own, otherwise a stray parenthesis
        // could regroup the combined expression across the `==`.
        eval::compile(lhs.raw())?;
        eval::compile(rhs.raw())?;
        let combined = eval::compile(&format!("({}) == ({})", lhs.raw(), rhs.raw()))?;
        debug!(
            "compare: combined = {}, depth = {}, variables = {:?}",
            combined.source(),
            combined.depth(),
            variables
        );
        match truth_table::row_count(variables.len()) {
            Some(rows) => debug!("compare: {} assignments to evaluate", rows),
            None => warn!("compare: 2^{} assignments overflow the counters", variables.len()),
        }

        let mut evaluated = 0u64;
        let mut agreeing = 0u64;
        let mut counterexample = None;
        let stop_early = self.config.stop_at_first_mismatch;

        let flow = truth_table::walk(&variables, |env: &Environment| -> Result<ControlFlow<()>> {
            let agrees = combined.evaluate(env)?;
            trace!("{} -> {}", env, agrees);
            evaluated += 1;
            if agrees {
                agreeing += 1;
            } else if counterexample.is_none() {
                counterexample = Some(env.clone());
                if stop_early {
                    return Ok(ControlFlow::Break(()));
                }
            }
            Ok(ControlFlow::Continue(()))
        })?;
        if flow.is_break() {
            debug!("compare: stopped at first mismatch after {} assignments", evaluated);
        }

        let equivalent = counterexample.is_none();
        debug!(
            "compare: {}/{} assignments agree, equivalent = {}",
            agreeing, evaluated, equivalent
        );

        Ok(Comparison {
            equivalent,
            variables,
            evaluated,
            agreeing,
            counterexample,
        })
    }
}

/// Checks whether `expr1` and `expr2` are logically equivalent, using the default configuration.
///
/// ```
/// use expr_equiv::check_equivalence;
///
/// assert!(check_equivalence("a == 1 && b == 1", "b == 1 && a == 1").unwrap());
/// assert!(!check_equivalence("a == 1 && b == 1", "a == 1 || b == 1").unwrap());
/// assert!(check_equivalence("a == 1", "a == 1 || b == 0").is_err());
/// ```
pub fn check_equivalence(expr1: &str, expr2: &str) -> Result<bool> {
    Checker::default().check(expr1, expr2)
}
