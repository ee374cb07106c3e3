//! Bound-expression IR: the already-bound shape the oracle hands back for a
//! write site's RHS or a method's return expressions. Not a C# AST — no
//! lexing or parsing happens in this crate; the oracle is assumed to have
//! already resolved every identifier to a [`SymbolId`].

use serde::{Deserialize, Serialize};

use crate::domain::symbol::{SourceLocation, SymbolId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundExpr {
    Identifier(SymbolId),
    Literal,
    Invocation {
        receiver: Option<Box<BoundExpr>>,
        method: Option<SymbolId>,
        arguments: Vec<BoundExpr>,
        location: SourceLocation,
    },
    ObjectCreation {
        type_name: String,
        initializers: Vec<(SymbolId, BoundExpr)>,
        location: SourceLocation,
    },
    Binary(Box<BoundExpr>, Box<BoundExpr>),
    /// Anything else the oracle hands back that carries no analyzable
    /// sub-structure for this core (unary ops, casts, literals of other
    /// shapes, ...).
    Other,
}

/// Depth-first search for the first identifier binding to an analyzable
/// symbol anywhere under `expr`. Used by the Parameter Mapper when an
/// argument does not bind directly to an identifier.
pub fn first_identifier(expr: &BoundExpr) -> Option<&SymbolId> {
    match expr {
        BoundExpr::Identifier(id) => Some(id),
        BoundExpr::Binary(l, r) => first_identifier(l).or_else(|| first_identifier(r)),
        BoundExpr::Invocation {
            receiver,
            arguments,
            ..
        } => receiver
            .as_deref()
            .and_then(first_identifier)
            .or_else(|| arguments.iter().find_map(first_identifier)),
        BoundExpr::ObjectCreation { initializers, .. } => {
            initializers.iter().find_map(|(_, v)| first_identifier(v))
        }
        BoundExpr::Literal | BoundExpr::Other => None,
    }
}
