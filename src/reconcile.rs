//! Reconciliation of the variable sets of two expressions.

use std::collections::HashSet;

use log::debug;

use crate::error::{Error, Result};

/// Removes duplicates from `names`, keeping the first occurrence of each.
pub fn dedup<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Checks that both token sequences reference the same distinct variables and
/// returns them in first-occurrence order of `tokens1`.
///
/// Names are returned verbatim: the evaluator accepts the whole name alphabet,
/// dots included.
///
/// # Errors
///
/// - [`Error::ParameterCountMismatch`] if the numbers of distinct variables differ.
/// - [`Error::ParameterSetMismatch`] if the counts agree but the names do not.
pub fn reconcile<S: AsRef<str>>(tokens1: &[S], tokens2: &[S]) -> Result<Vec<String>> {
    let params1 = dedup(tokens1);
    let params2 = dedup(tokens2);

    if params1.len() != params2.len() {
        return Err(Error::ParameterCountMismatch { params1, params2 });
    }

    let set1: HashSet<&str> = params1.iter().map(String::as_str).collect();
    let set2: HashSet<&str> = params2.iter().map(String::as_str).collect();
    // Equal lengths alone do not rule out disjoint lists, so check both directions.
    if !set1.is_subset(&set2) || !set2.is_subset(&set1) {
        return Err(Error::ParameterSetMismatch { params1, params2 });
    }

    debug!("reconcile: canonical variables = {:?}", params1);
    Ok(params1)
}
