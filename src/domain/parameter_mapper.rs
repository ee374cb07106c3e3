//! Parameter Mapper: resolves a parameter to its call-site argument.

use crate::domain::contributor::InvocationMap;
use crate::domain::expr::{first_identifier, BoundExpr};
use crate::domain::ports::{CallSite, SemanticOracle};
use crate::domain::symbol::{is_analyzable, Symbol, SymbolDetails, SymbolId};

/// `None` when `invocationOf[M]` is unset, the index is out of range, or no
/// analyzable identifier can be found under the argument — each of these is
/// "skip the mapping", not an error.
pub fn map_parameter(
    param: &Symbol,
    invocation_of: &InvocationMap,
    oracle: &dyn SemanticOracle,
) -> Option<(SymbolId, CallSite)> {
    let SymbolDetails::Parameter(details) = &param.details else {
        return None;
    };
    let Some(call_site) = invocation_of.get(&details.containing_method) else {
        tracing::debug!(
            method = %details.containing_method,
            "no call site observed for method; skipping parameter mapping"
        );
        return None;
    };
    let Some(argument) = call_site.arguments.get(details.index) else {
        tracing::debug!(
            method = %details.containing_method,
            index = details.index,
            argument_count = call_site.arguments.len(),
            "parameter index out of range for call site; skipping mapping"
        );
        return None;
    };
    let candidate = match argument {
        BoundExpr::Identifier(id) => Some(id),
        other => first_identifier(other),
    }?;
    let candidate_symbol = oracle.symbol_by_id(candidate)?;
    if !is_analyzable(candidate_symbol.kind) {
        return None;
    }
    Some((candidate.clone(), call_site.clone()))
}
