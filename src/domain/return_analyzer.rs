//! Method-Return Analyzer: contributors flowing out of a method's
//! return expressions.

use std::collections::HashSet;

use crate::domain::contributor::{extract, InvocationMap};
use crate::domain::ports::SemanticOracle;
use crate::domain::symbol::SymbolId;

/// `None` when `M` has no declaring syntax (extern/metadata-only) — emit no
/// outgoing edges in that case.
pub fn return_contributors(
    method_id: &SymbolId,
    oracle: &dyn SemanticOracle,
    invocation_of: &mut InvocationMap,
) -> Option<Vec<SymbolId>> {
    let body = oracle.method_body(method_id)?;
    let mut contributors = Vec::new();
    let mut seen = HashSet::new();
    for expr in &body.return_expressions {
        for contributor in extract(expr, oracle, invocation_of) {
            if seen.insert(contributor.clone()) {
                contributors.push(contributor);
            }
        }
    }
    Some(contributors)
}
