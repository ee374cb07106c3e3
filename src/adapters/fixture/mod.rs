//! Fixture oracle adapter: a [`SemanticOracle`] backed by in-memory
//! tables instead of Roslyn. This is the only oracle this crate ships — the
//! real parser/resolver is out of scope for this crate — but it is a complete,
//! independently loadable implementation of the contract, not a test double
//! wired into the driver directly.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{MethodBody, Reference, SemanticOracle, SyntaxRef};
use crate::domain::symbol::{SourceLocation, Symbol, SymbolId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TypeEntry {
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    members: Vec<SymbolId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenEntry {
    file: String,
    line: u32,
    column: u32,
    symbol: SymbolId,
}

/// On-disk shape for a fixture: everything a [`FixtureOracle`] needs,
/// flattened into JSON-friendly collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FixtureData {
    #[serde(default)]
    symbols: Vec<Symbol>,
    #[serde(default)]
    references: HashMap<SymbolId, Vec<Reference>>,
    #[serde(default)]
    method_bodies: HashMap<SymbolId, MethodBody>,
    #[serde(default)]
    types: HashMap<String, TypeEntry>,
    #[serde(default)]
    source_lines: HashMap<String, Vec<String>>,
    #[serde(default)]
    tokens: Vec<TokenEntry>,
}

/// A fixed-up-front semantic world: every table the oracle contract needs,
/// keyed the way a real adapter would key them, but populated by hand or
/// from a JSON file rather than by resolving actual C# source.
#[derive(Debug, Clone, Default)]
pub struct FixtureOracle {
    symbols: HashMap<SymbolId, Symbol>,
    references: HashMap<SymbolId, Vec<Reference>>,
    method_bodies: HashMap<SymbolId, MethodBody>,
    types: HashMap<String, TypeEntry>,
    source_lines: HashMap<String, Vec<String>>,
    tokens: HashMap<(String, u32, u32), SymbolId>,
}

impl FixtureOracle {
    pub fn builder() -> FixtureOracleBuilder {
        FixtureOracleBuilder::default()
    }

    /// Loads a fixture from a JSON file in the on-disk fixture shape.
    pub fn load_from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture file: {}", path.display()))?;
        let data: FixtureData = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse fixture JSON: {}", path.display()))?;
        Ok(Self::from_data(data))
    }

    fn from_data(data: FixtureData) -> Self {
        let symbols = data
            .symbols
            .into_iter()
            .map(|s| (s.id.clone(), s))
            .collect();
        let mut tokens = HashMap::new();
        for entry in data.tokens {
            tokens.insert((entry.file, entry.line, entry.column), entry.symbol);
        }
        Self {
            symbols,
            references: data.references,
            method_bodies: data.method_bodies,
            types: data.types,
            source_lines: data.source_lines,
            tokens,
        }
    }
}

impl SemanticOracle for FixtureOracle {
    fn token_at(&self, file: &str, line: u32, column: u32) -> Option<SyntaxRef> {
        self.tokens
            .get(&(file.to_string(), line, column))
            .map(|id| SyntaxRef(id.clone()))
    }

    /// The fixture bakes resolution into `token_at` itself, so `symbol_of`
    /// is the identity projection — a real Roslyn adapter would instead
    /// carry an opaque syntax-node handle through this step.
    fn symbol_of(&self, syntax: &SyntaxRef) -> Option<SymbolId> {
        Some(syntax.0.clone())
    }

    fn symbol_by_id(&self, id: &SymbolId) -> Option<Symbol> {
        self.symbols.get(id).cloned()
    }

    fn references(&self, id: &SymbolId) -> Vec<Reference> {
        self.references.get(id).cloned().unwrap_or_default()
    }

    fn method_body(&self, id: &SymbolId) -> Option<MethodBody> {
        self.method_bodies.get(id).cloned()
    }

    fn all_types(&self) -> Vec<String> {
        self.types.keys().cloned().collect()
    }

    fn base_type(&self, type_name: &str) -> Option<String> {
        self.types.get(type_name).and_then(|t| t.base.clone())
    }

    fn members(&self, type_name: &str) -> Vec<SymbolId> {
        self.types
            .get(type_name)
            .map(|t| t.members.clone())
            .unwrap_or_default()
    }

    fn source_line(&self, location: &SourceLocation) -> Option<String> {
        self.source_lines
            .get(&location.file)
            .and_then(|lines| lines.get(location.line as usize))
            .cloned()
    }
}

/// Programmatic builder, mainly for tests: assembles the same tables
/// [`FixtureOracle::load_from_json`] would, without going through JSON.
#[derive(Debug, Clone, Default)]
pub struct FixtureOracleBuilder {
    data: FixtureData,
}

impl FixtureOracleBuilder {
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.data.symbols.push(symbol);
        self
    }

    pub fn reference(mut self, id: impl Into<SymbolId>, reference: Reference) -> Self {
        self.data.references.entry(id.into()).or_default().push(reference);
        self
    }

    pub fn method_body(mut self, id: impl Into<SymbolId>, body: MethodBody) -> Self {
        self.data.method_bodies.insert(id.into(), body);
        self
    }

    pub fn type_hierarchy(
        mut self,
        type_name: impl Into<String>,
        base: Option<String>,
        members: Vec<SymbolId>,
    ) -> Self {
        self.data
            .types
            .insert(type_name.into(), TypeEntry { base, members });
        self
    }

    pub fn source_line(mut self, file: impl Into<String>, line: u32, text: impl Into<String>) -> Self {
        let file = file.into();
        let lines = self.data.source_lines.entry(file).or_default();
        let idx = line as usize;
        if lines.len() <= idx {
            lines.resize(idx + 1, String::new());
        }
        lines[idx] = text.into();
        self
    }

    pub fn token(
        mut self,
        file: impl Into<String>,
        line: u32,
        column: u32,
        symbol: impl Into<SymbolId>,
    ) -> Self {
        self.data.tokens.push(TokenEntry {
            file: file.into(),
            line,
            column,
            symbol: symbol.into(),
        });
        self
    }

    pub fn build(self) -> FixtureOracle {
        FixtureOracle::from_data(self.data)
    }
}
