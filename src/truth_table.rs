//! Exhaustive enumeration of binary assignments.
//!
//! For `n` variables there are `2^n` rows. Two traversals are provided:
//!
//! - [`walk`] / [`enumerate`]: depth-first recursion over a single [`Environment`]
//!   that is mutated in place. Variable `i` is set to 1 first, then to 0.
//! - [`assignments`]: an iterator counting `k` over `0..2^n`, reading the bits of `k`
//!   as the assignment. It visits rows in the same order as [`walk`].

use std::ops::ControlFlow;

use crate::env::Environment;

/// Visits every assignment of `vars`, stopping early if `visit` breaks.
///
/// Returns `Break` if the walk was cut short. Errors from `visit` abort the walk
/// immediately and are passed through.
pub fn walk<E, F>(vars: &[String], mut visit: F) -> Result<ControlFlow<()>, E>
where
    F: FnMut(&Environment) -> Result<ControlFlow<()>, E>,
{
    let mut env = Environment::new(vars.to_vec());
    descend(&mut env, 0, &mut visit)
}

fn descend<E, F>(env: &mut Environment, depth: usize, visit: &mut F) -> Result<ControlFlow<()>, E>
where
    F: FnMut(&Environment) -> Result<ControlFlow<()>, E>,
{
    if depth == env.len() {
        return visit(env);
    }

    for value in [true, false] {
        env.set(depth, value);
        if descend(env, depth + 1, visit)?.is_break() {
            return Ok(ControlFlow::Break(()));
        }
    }

    Ok(ControlFlow::Continue(()))
}

/// Evaluates `evaluate` on every assignment of `vars` and collects the outcomes.
///
/// Fail-fast: the first error discards all outcomes gathered so far.
pub fn enumerate<E, F>(vars: &[String], mut evaluate: F) -> Result<Vec<bool>, E>
where
    F: FnMut(&Environment) -> Result<bool, E>,
{
    let mut outcomes = Vec::new();
    let flow = walk::<E, _>(vars, |env| {
        outcomes.push(evaluate(env)?);
        Ok(ControlFlow::Continue(()))
    })?;
    debug_assert!(flow.is_continue());
    Ok(outcomes)
}

/// Number of rows in the truth table over `n` variables, if it fits in a `u64`.
pub fn row_count(n: usize) -> Option<u64> {
    u32::try_from(n).ok().and_then(|n| 1u64.checked_shl(n))
}

/// Iterates over all assignments of `vars` by counting.
///
/// # Panics
///
/// Panics if there are 64 or more variables.
pub fn assignments(vars: &[String]) -> Assignments {
    assert!(vars.len() < 64, "cannot count {} variables in a u64", vars.len());
    Assignments {
        env: Environment::new(vars.to_vec()),
        row: 0,
        total: 1 << vars.len(),
    }
}

pub struct Assignments {
    env: Environment,
    row: u64,
    total: u64,
}

impl Iterator for Assignments {
    type Item = Environment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.total {
            return None;
        }

        // Row 0 is all ones; the first variable is the most significant bit.
        let n = self.env.len();
        for i in 0..n {
            let bit = (self.row >> (n - 1 - i)) & 1;
            self.env.set(i, bit == 0);
        }
        self.row += 1;

        Some(self.env.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.total - self.row).ok();
        (left.unwrap_or(usize::MAX), left)
    }
}
