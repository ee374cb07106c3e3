//! Shared symbol-construction helpers for the scenario tests. Not a
//! test binary itself — included by the scenario test files.
#![allow(dead_code)]

use variable_insight::domain::symbol::{
    MethodDetails, ParameterDetails, SourceLocation, Symbol, SymbolDetails, SymbolKind,
};

pub fn loc(file: &str, line: u32, column: u32) -> SourceLocation {
    SourceLocation {
        file: file.to_string(),
        line,
        column,
        span: None,
    }
}

pub fn local(id: &str, declared_type: &str, location: SourceLocation) -> Symbol {
    Symbol {
        id: id.to_string(),
        name: id.to_string(),
        kind: SymbolKind::Local,
        declared_type: declared_type.to_string(),
        is_static: false,
        containing_type: None,
        locations: vec![location],
        details: SymbolDetails::None,
    }
}

pub fn field(
    id: &str,
    name: &str,
    containing_type: &str,
    declared_type: &str,
    location: SourceLocation,
) -> Symbol {
    Symbol {
        id: id.to_string(),
        name: name.to_string(),
        kind: SymbolKind::Field,
        declared_type: declared_type.to_string(),
        is_static: false,
        containing_type: Some(containing_type.to_string()),
        locations: vec![location],
        details: SymbolDetails::None,
    }
}

pub fn parameter(
    id: &str,
    name: &str,
    containing_method: &str,
    index: usize,
    location: SourceLocation,
) -> Symbol {
    Symbol {
        id: id.to_string(),
        name: name.to_string(),
        kind: SymbolKind::Parameter,
        declared_type: "int".to_string(),
        is_static: false,
        containing_type: None,
        locations: vec![location],
        details: SymbolDetails::Parameter(ParameterDetails {
            containing_method: containing_method.to_string(),
            index,
        }),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn method(
    id: &str,
    name: &str,
    containing_type: Option<&str>,
    is_static: bool,
    is_virtual: bool,
    is_abstract: bool,
    is_override: bool,
    overridden_method: Option<&str>,
    parameters: Vec<&str>,
    location: SourceLocation,
) -> Symbol {
    Symbol {
        id: id.to_string(),
        name: name.to_string(),
        kind: SymbolKind::Method,
        declared_type: "void".to_string(),
        is_static,
        containing_type: containing_type.map(str::to_string),
        locations: vec![location],
        details: SymbolDetails::Method(MethodDetails {
            is_virtual,
            is_abstract,
            is_override,
            overridden_method: overridden_method.map(str::to_string),
            parameters: parameters.into_iter().map(str::to_string).collect(),
            has_declaring_syntax: true,
        }),
    }
}

/// Mirrors `classifier::node_id` for symbols built by this module, where
/// `id` always equals `display_string()` by construction — lets scenario
/// tests predict a node's id without reaching into driver internals.
pub fn node_id(id: &str, file: &str, line: u32) -> String {
    format!("{id}@{file}:{line}")
}
