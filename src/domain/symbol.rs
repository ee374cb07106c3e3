//! The symbol model the oracle hands back: kind, location, and the
//! method/parameter details the driver needs for dispatch.

use serde::{Deserialize, Serialize};

/// Stable identity assigned by the oracle. Opaque to the core beyond equality.
pub type SymbolId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SymbolKind {
    Local,
    Parameter,
    Field,
    Property,
    Method,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
    /// Byte offset and length within `file`, when the oracle can supply one.
    #[serde(default)]
    pub span: Option<(u32, u32)>,
}

impl SourceLocation {
    /// Renders as `basename:line`, dropping the directory and column.
    pub fn location_string(&self) -> String {
        let basename = self.file.rsplit('/').next().unwrap_or(&self.file);
        format!("{basename}:{}", self.line)
    }
}

/// Method-specific facts: override chain, static/instance is carried on
/// `Symbol.is_static`, parameter list by id in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDetails {
    pub is_virtual: bool,
    pub is_abstract: bool,
    pub is_override: bool,
    pub overridden_method: Option<SymbolId>,
    pub parameters: Vec<SymbolId>,
    pub has_declaring_syntax: bool,
}

/// Parameter-specific facts: which method it belongs to, and its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDetails {
    pub containing_method: SymbolId,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolDetails {
    None,
    Parameter(ParameterDetails),
    Method(MethodDetails),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: String,
    pub kind: SymbolKind,
    pub declared_type: String,
    pub is_static: bool,
    /// Fully-qualified containing type name, e.g. `"Shape"`. `None` for locals.
    pub containing_type: Option<String>,
    /// Oracle-reported locations; the first is the primary declaration site.
    pub locations: Vec<SourceLocation>,
    pub details: SymbolDetails,
}

impl Symbol {
    pub fn primary_location(&self) -> Option<&SourceLocation> {
        self.locations.first()
    }

    /// `Type.Name` when a containing type is known, else just `Name` — the
    /// oracle's `displayString`.
    pub fn display_string(&self) -> String {
        match &self.containing_type {
            Some(t) => format!("{t}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// A symbol is analyzable iff its kind is one the driver knows how to expand.
pub fn is_analyzable(kind: SymbolKind) -> bool {
    !matches!(kind, SymbolKind::Other)
}
