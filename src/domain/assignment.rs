//! Assignment Finder: write sites for locals and static members.

use crate::domain::expr::BoundExpr;
use crate::domain::graph::EdgeRelation;
use crate::domain::ports::{ReferenceRole, SemanticOracle};
use crate::domain::symbol::{SourceLocation, SymbolId};

pub struct WriteSite {
    pub location: SourceLocation,
    pub rhs: BoundExpr,
    pub relation: EdgeRelation,
}

/// Declarations-with-initializers and assignment-expression LHS references,
/// across every reference the oracle reports for `symbol_id`. Missing
/// bindings are simply absent from `references` — best-effort, not an error.
pub fn find_write_sites(symbol_id: &SymbolId, oracle: &dyn SemanticOracle) -> Vec<WriteSite> {
    oracle
        .references(symbol_id)
        .into_iter()
        .filter_map(|reference| match reference.role {
            ReferenceRole::Declaration {
                initializer: Some(rhs),
            } => Some(WriteSite {
                location: reference.location,
                rhs,
                relation: EdgeRelation::Initialization,
            }),
            ReferenceRole::Assignment { rhs } => Some(WriteSite {
                location: reference.location,
                rhs,
                relation: EdgeRelation::Assignment,
            }),
            ReferenceRole::Declaration { initializer: None } | ReferenceRole::Read => {
                tracing::trace!(symbol = %symbol_id, location = ?reference.location, "skipping non-write reference");
                None
            }
        })
        .collect()
}
