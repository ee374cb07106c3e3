//! Contributor Extractor: walks an RHS `BoundExpr`, excluding
//! invocation arguments and receivers, and returns the ordered, dedup'd
//! contributor list plus `invocationOf` updates.

use crate::domain::expr::BoundExpr;
use crate::domain::ports::{CallSite, SemanticOracle};
use crate::domain::symbol::{is_analyzable, SymbolId};
use std::collections::HashSet;

/// Insertion-ordered `method -> call site` table (`invocationOf`).
/// Backed by a `Vec` rather than a `HashMap` so "first matching entry"
/// lookups are reproducible across runs, not just "some" entry.
#[derive(Debug, Default)]
pub struct InvocationMap {
    entries: Vec<(SymbolId, CallSite)>,
}

impl InvocationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites any existing entry for `method`, matching the
    /// "most recently observed" call-site semantics.
    pub fn insert(&mut self, method: SymbolId, call_site: CallSite) {
        if let Some(existing) = self.entries.iter_mut().find(|(m, _)| *m == method) {
            existing.1 = call_site;
        } else {
            self.entries.push((method, call_site));
        }
    }

    pub fn get(&self, method: &SymbolId) -> Option<&CallSite> {
        self.entries.iter().find(|(m, _)| m == method).map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(SymbolId, CallSite)> {
        self.entries.iter()
    }
}

/// Extracts the ordered, dedup'd contributor list for RHS expression `expr`,
/// recording any invocations seen into `invocation_of`.
pub fn extract(
    expr: &BoundExpr,
    oracle: &dyn SemanticOracle,
    invocation_of: &mut InvocationMap,
) -> Vec<SymbolId> {
    let mut identifiers = Vec::new();
    let mut invocations = Vec::new();
    collect(expr, false, &mut identifiers, &mut invocations);

    let mut contributors = Vec::new();
    let mut seen = HashSet::new();

    for id in identifiers {
        let analyzable = oracle
            .symbol_by_id(&id)
            .map(|s| is_analyzable(s.kind))
            .unwrap_or(false);
        if analyzable && seen.insert(id.clone()) {
            contributors.push(id);
        }
    }

    for call_site in invocations {
        let method = call_site.method.clone();
        let analyzable = oracle
            .symbol_by_id(&method)
            .map(|s| is_analyzable(s.kind))
            .unwrap_or(false);
        if !analyzable {
            continue;
        }
        invocation_of.insert(method.clone(), call_site);
        if seen.insert(method.clone()) {
            contributors.push(method);
        }
    }

    contributors
}

/// Collects every identifier not under an excluded region, and every
/// invocation anywhere in the tree (regardless of exclusion), per
/// steps 2-4. The method name identifier never appears as a `BoundExpr`
/// node of its own — `Invocation.method` carries it directly — so step 3's
/// "skip the callee identifier" rule falls out of the IR shape for free.
fn collect(
    expr: &BoundExpr,
    excluded: bool,
    identifiers: &mut Vec<SymbolId>,
    invocations: &mut Vec<CallSite>,
) {
    match expr {
        BoundExpr::Identifier(id) => {
            if !excluded {
                identifiers.push(id.clone());
            }
        }
        BoundExpr::Literal | BoundExpr::Other => {}
        BoundExpr::Binary(l, r) => {
            collect(l, excluded, identifiers, invocations);
            collect(r, excluded, identifiers, invocations);
        }
        BoundExpr::Invocation {
            receiver,
            method,
            arguments,
            location,
        } => {
            if let Some(method) = method {
                invocations.push(CallSite {
                    method: method.clone(),
                    receiver: receiver.clone(),
                    arguments: arguments.clone(),
                    location: location.clone(),
                });
            }
            if let Some(receiver) = receiver {
                collect(receiver, true, identifiers, invocations);
            }
            for arg in arguments {
                collect(arg, true, identifiers, invocations);
            }
        }
        BoundExpr::ObjectCreation { initializers, .. } => {
            for (_, value) in initializers {
                collect(value, excluded, identifiers, invocations);
            }
        }
    }
}
