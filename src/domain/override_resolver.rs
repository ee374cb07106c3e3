//! Override Resolver: sibling overrides across every type reachable
//! from the virtual/abstract base.

use crate::domain::ports::SemanticOracle;
use crate::domain::symbol::{Symbol, SymbolDetails, SymbolId};

/// Walks `overridden_method` links until none remain — the top of the
/// override chain (the virtual/abstract base), per the glossary's
/// "override chain" definition.
fn top_of_override_chain(symbol: &Symbol, oracle: &dyn SemanticOracle) -> SymbolId {
    let mut current = symbol.clone();
    loop {
        let next = match &current.details {
            SymbolDetails::Method(details) => details.overridden_method.clone(),
            _ => None,
        };
        match next.and_then(|id| oracle.symbol_by_id(&id)) {
            Some(base) => current = base,
            None => return current.id,
        }
    }
}

/// True iff `candidate`'s base-type chain passes through `ancestor`,
/// excluding `candidate == ancestor` itself (strict derivation).
fn is_strict_subtype(candidate: &str, ancestor: &str, oracle: &dyn SemanticOracle) -> bool {
    let mut current = candidate.to_string();
    loop {
        match oracle.base_type(&current) {
            Some(base) if base == ancestor => return true,
            Some(base) => current = base,
            None => return false,
        }
    }
}

/// Every override `O` of `M`'s virtual/abstract base, found across all
/// named types in the workspace. Skips a type whose member lookup or
/// override-chain walk fails rather than aborting the whole enumeration
/// (an override-enumeration failure for one compilation is skipped, not fatal).
pub fn resolve_overrides(method: &Symbol, oracle: &dyn SemanticOracle) -> Vec<SymbolId> {
    let base_id = top_of_override_chain(method, oracle);
    let Some(base) = oracle.symbol_by_id(&base_id) else {
        return Vec::new();
    };
    let Some(base_type) = base.containing_type.clone() else {
        return Vec::new();
    };

    let mut overrides = Vec::new();
    for type_name in oracle.all_types() {
        if type_name == base_type || !is_strict_subtype(&type_name, &base_type, oracle) {
            continue;
        }
        for member_id in oracle.members(&type_name) {
            let Some(member) = oracle.symbol_by_id(&member_id) else {
                tracing::debug!(
                    type_name = %type_name,
                    member = %member_id,
                    "member symbol unresolvable; skipping override-enumeration for this member"
                );
                continue;
            };
            let SymbolDetails::Method(details) = &member.details else {
                continue;
            };
            if details.is_override && top_of_override_chain(&member, oracle) == base_id {
                overrides.push(member_id);
            }
        }
    }
    overrides
}
