//! The oracle contract: everything the core needs from "the C# parser
//! and semantic resolver", treated as an external, already-bound collaborator.

use serde::{Deserialize, Serialize};

use crate::domain::expr::BoundExpr;
use crate::domain::symbol::{SourceLocation, Symbol, SymbolId};

/// A syntax position resolved by `token_at`, opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxRef(pub String);

/// Why a reference to a symbol exists at a given location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceRole {
    /// The declarator itself, with its initializer expression if any.
    Declaration { initializer: Option<BoundExpr> },
    /// The LHS of an assignment or compound-assignment expression.
    Assignment { rhs: BoundExpr },
    /// A read that is neither of the above; not a write site.
    Read,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub location: SourceLocation,
    pub role: ReferenceRole,
}

/// A method's body, reduced to what the Method-Return Analyzer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodBody {
    pub return_expressions: Vec<BoundExpr>,
    pub is_expression_bodied: bool,
}

/// An invocation syntax node observed during RHS extraction — the
/// `invocationOf` map's value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub method: SymbolId,
    pub receiver: Option<Box<BoundExpr>>,
    pub arguments: Vec<BoundExpr>,
    pub location: SourceLocation,
}

/// The oracle contract, expressed as a trait. A production adapter
/// would back this with Roslyn; this crate ships only the fixture adapter
/// in `adapters::fixture`, since the parser/resolver itself is out of scope.
pub trait SemanticOracle {
    fn token_at(&self, file: &str, line: u32, column: u32) -> Option<SyntaxRef>;
    fn symbol_of(&self, syntax: &SyntaxRef) -> Option<SymbolId>;
    fn symbol_by_id(&self, id: &SymbolId) -> Option<Symbol>;

    /// All references to `id` across the workspace, each tagged with its role.
    fn references(&self, id: &SymbolId) -> Vec<Reference>;

    /// `None` when the method has no declaring syntax (extern/metadata-only).
    fn method_body(&self, id: &SymbolId) -> Option<MethodBody>;

    /// Every named type in every compilation in the workspace.
    fn all_types(&self) -> Vec<String>;
    fn base_type(&self, type_name: &str) -> Option<String>;
    fn members(&self, type_name: &str) -> Vec<SymbolId>;

    /// The source text of the line at `location`, for the node excerpt.
    fn source_line(&self, location: &SourceLocation) -> Option<String>;
}
