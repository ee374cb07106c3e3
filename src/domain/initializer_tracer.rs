//! Object-Initializer Tracer: traces an instance field/property back
//! to the value its enclosing call's receiver assigned at construction,
//! guarded by receiver/field type compatibility.

use crate::domain::contributor::InvocationMap;
use crate::domain::expr::BoundExpr;
use crate::domain::graph::EdgeRelation;
use crate::domain::ports::{ReferenceRole, SemanticOracle};
use crate::domain::symbol::{is_analyzable, SourceLocation, Symbol, SymbolId};

pub struct InitializerTrace {
    pub relation: EdgeRelation,
    pub target: SymbolId,
    pub recurse: bool,
    pub origin_location: SourceLocation,
}

/// `None` when no candidate invocation applies, the receiver-type guard
/// fails, or no initializer is present for `field` — each "no edges" per
/// the field's containing type, not an error.
pub fn trace(
    field: &Symbol,
    invocation_of: &InvocationMap,
    oracle: &dyn SemanticOracle,
) -> Option<InitializerTrace> {
    let field_type = field.containing_type.as_deref()?;

    let (_, call_site) = invocation_of.iter().find(|(method_id, _)| {
        oracle
            .symbol_by_id(method_id)
            .map(|m| m.containing_type.as_deref() == Some(field_type) && !m.is_static)
            .unwrap_or(false)
    })?;

    let BoundExpr::Identifier(receiver_id) = call_site.receiver.as_deref()? else {
        return None;
    };
    let receiver_symbol = oracle.symbol_by_id(receiver_id)?;

    let object_creation = oracle
        .references(receiver_id)
        .into_iter()
        .find_map(|reference| match reference.role {
            ReferenceRole::Declaration {
                initializer:
                    Some(
                        expr @ BoundExpr::ObjectCreation {
                            ..
                        },
                    ),
            } => Some(expr),
            _ => None,
        });

    let concrete_type = match &object_creation {
        Some(BoundExpr::ObjectCreation { type_name, .. }) => type_name.clone(),
        _ => receiver_symbol.declared_type.clone(),
    };
    if concrete_type != *field_type {
        return None;
    }

    let BoundExpr::ObjectCreation {
        initializers,
        location,
        ..
    } = object_creation?
    else {
        unreachable!("filtered to ObjectCreation above")
    };

    // No assignment for `F` inside the initializer: still records the
    // construction site, without chasing a value that isn't there.
    let Some((_, value)) = initializers.into_iter().find(|(f, _)| f == &field.id) else {
        return Some(InitializerTrace {
            relation: EdgeRelation::ObjectInitializer,
            target: receiver_id.clone(),
            recurse: false,
            origin_location: location,
        });
    };

    match value {
        BoundExpr::Identifier(target) => {
            let recurse_ok = oracle
                .symbol_by_id(&target)
                .map(|s| is_analyzable(s.kind))
                .unwrap_or(false);
            if recurse_ok {
                Some(InitializerTrace {
                    relation: EdgeRelation::ObjectInitializer,
                    target,
                    recurse: true,
                    origin_location: location,
                })
            } else {
                Some(InitializerTrace {
                    relation: EdgeRelation::ObjectInitializer,
                    target: receiver_id.clone(),
                    recurse: false,
                    origin_location: location,
                })
            }
        }
        _ => Some(InitializerTrace {
            relation: EdgeRelation::ObjectInitializer,
            target: receiver_id.clone(),
            recurse: false,
            origin_location: location,
        }),
    }
}
