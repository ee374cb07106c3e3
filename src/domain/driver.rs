//! Traversal Driver: orchestrates the backward expansion from the
//! selected root symbol, dispatching by kind and enforcing the depth bound
//! and visited-set termination.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;

use crate::domain::assignment::find_write_sites;
use crate::domain::classifier::{is_analyzable, node_id};
use crate::domain::contributor::{extract, InvocationMap};
use crate::domain::graph::{EdgeRelation, InsightNode, NodeKind, VariableInsightGraph};
use crate::domain::initializer_tracer::trace as trace_initializer;
use crate::domain::override_resolver::resolve_overrides;
use crate::domain::parameter_mapper::map_parameter;
use crate::domain::ports::SemanticOracle;
use crate::domain::return_analyzer::return_contributors;
use crate::domain::symbol::{SourceLocation, Symbol, SymbolDetails, SymbolKind, SymbolId};

/// Hard safety ceiling on recursion depth; combined with the visited
/// set this guarantees termination.
const MAX_DEPTH: usize = 15;

pub struct Graph {
    pub root: NodeIndex,
    pub graph: VariableInsightGraph,
    pub total_references: usize,
}

/// Orchestrates one `analyze` invocation. Owns all traversal-scoped working
/// state (`visited`, `nodeOf` via the graph, `invocationOf`); nothing
/// here is shared across invocations.
pub struct Driver<'a> {
    oracle: &'a dyn SemanticOracle,
    graph: VariableInsightGraph,
    visited: HashSet<SymbolId>,
    invocation_of: InvocationMap,
    cancelled: &'a dyn Fn() -> bool,
}

fn never_cancelled() -> bool {
    false
}

impl<'a> Driver<'a> {
    pub fn new(oracle: &'a dyn SemanticOracle) -> Self {
        Self {
            oracle,
            graph: VariableInsightGraph::new(),
            visited: HashSet::new(),
            invocation_of: InvocationMap::new(),
            cancelled: &never_cancelled,
        }
    }

    pub fn with_cancellation(mut self, cancelled: &'a dyn Fn() -> bool) -> Self {
        self.cancelled = cancelled;
        self
    }

    /// `analyze(document, position)` — returns `None` if the cursor does not
    /// resolve to an analyzable symbol, or if cancelled before any work.
    pub fn analyze(mut self, file: &str, line: u32, column: u32) -> Option<Graph> {
        let syntax = self.oracle.token_at(file, line, column)?;
        let symbol_id = self.oracle.symbol_of(&syntax)?;
        let symbol = self.oracle.symbol_by_id(&symbol_id)?;
        if !is_analyzable(symbol.kind) {
            return None;
        }

        let root_idx = self.node_for(&symbol);
        self.graph.set_root(root_idx);
        self.expand(&symbol, root_idx, 0);

        let total_references = self.graph.node_count().saturating_sub(1);
        Some(Graph {
            root: root_idx,
            graph: self.graph,
            total_references,
        })
    }

    fn node_kind(kind: SymbolKind) -> NodeKind {
        match kind {
            SymbolKind::Local => NodeKind::Variable,
            SymbolKind::Parameter => NodeKind::Parameter,
            SymbolKind::Field => NodeKind::Field,
            SymbolKind::Property => NodeKind::Property,
            SymbolKind::Method => NodeKind::Method,
            SymbolKind::Other => NodeKind::Expression,
        }
    }

    fn node_for(&mut self, symbol: &Symbol) -> NodeIndex {
        if let Some(idx) = self.graph.node_by_symbol(&symbol.id) {
            return idx;
        }
        let location = symbol.primary_location().cloned().unwrap_or(SourceLocation {
            file: String::new(),
            line: 0,
            column: 0,
            span: None,
        });
        let source_excerpt = self
            .oracle
            .source_line(&location)
            .unwrap_or_default();
        let node = InsightNode {
            id: node_id(symbol),
            name: symbol.name.clone(),
            type_string: symbol.declared_type.clone(),
            location,
            source_excerpt,
            kind: Self::node_kind(symbol.kind),
        };
        self.graph.get_or_create_node(&symbol.id, node)
    }

    /// Recursive expansion `expand(S, N, d)`.
    fn expand(&mut self, symbol: &Symbol, node_idx: NodeIndex, depth: usize) {
        if depth > MAX_DEPTH || self.cancelled() || self.visited.contains(&symbol.id) {
            return;
        }
        self.visited.insert(symbol.id.clone());

        match &symbol.details {
            SymbolDetails::Method(method_details) => {
                self.expand_method_return(symbol, node_idx, depth);
                if method_details.is_virtual || method_details.is_abstract || method_details.is_override {
                    self.expand_overrides(symbol, node_idx, depth);
                }
            }
            SymbolDetails::Parameter(_) => self.expand_parameter(symbol, node_idx, depth),
            SymbolDetails::None
                if matches!(symbol.kind, SymbolKind::Field | SymbolKind::Property)
                    && !symbol.is_static
                    && self.has_matching_invocation(symbol) =>
            {
                self.expand_object_initializer(symbol, node_idx, depth);
            }
            SymbolDetails::None => self.expand_assignment(symbol, node_idx, depth),
        }
    }

    fn cancelled(&self) -> bool {
        (self.cancelled)()
    }

    /// Locals, static fields/properties, or instance members with no
    /// matching invocation context.
    fn expand_assignment(&mut self, symbol: &Symbol, node_idx: NodeIndex, depth: usize) {
        for site in find_write_sites(&symbol.id, self.oracle) {
            if self.cancelled() {
                return;
            }
            let contributors = extract(&site.rhs, self.oracle, &mut self.invocation_of);
            for contributor_id in contributors {
                if contributor_id == symbol.id {
                    continue; // no self-loops.
                }
                self.emit_and_recurse(
                    node_idx,
                    &contributor_id,
                    site.relation,
                    site.location.clone(),
                    depth,
                );
            }
        }
    }

    /// Parameter Mapper.
    fn expand_parameter(&mut self, symbol: &Symbol, node_idx: NodeIndex, depth: usize) {
        let Some((argument_id, call_site)) = map_parameter(symbol, &self.invocation_of, self.oracle) else {
            return;
        };
        if argument_id == symbol.id {
            return;
        }
        self.emit_and_recurse(
            node_idx,
            &argument_id,
            EdgeRelation::ParameterMapping,
            call_site.location,
            depth,
        );
    }

    /// Method-Return Analyzer.
    fn expand_method_return(&mut self, symbol: &Symbol, node_idx: NodeIndex, depth: usize) {
        let Some(contributors) = return_contributors(&symbol.id, self.oracle, &mut self.invocation_of) else {
            return;
        };
        let origin = symbol.primary_location().cloned().unwrap_or(SourceLocation {
            file: String::new(),
            line: 0,
            column: 0,
            span: None,
        });
        for contributor_id in contributors {
            if contributor_id == symbol.id {
                continue;
            }
            self.emit_and_recurse(
                node_idx,
                &contributor_id,
                EdgeRelation::ReturnContributor,
                origin.clone(),
                depth,
            );
        }
    }

    /// Override Resolver. Overrides are expanded directly through the
    /// Method-Return Analyzer rather than the generic dispatch, so override
    /// resolution structurally cannot re-trigger for `O`.
    fn expand_overrides(&mut self, symbol: &Symbol, node_idx: NodeIndex, depth: usize) {
        if depth > MAX_DEPTH {
            return;
        }
        for override_id in resolve_overrides(symbol, self.oracle) {
            let Some(override_symbol) = self.oracle.symbol_by_id(&override_id) else {
                continue;
            };
            let override_idx = self.node_for(&override_symbol);
            let origin = override_symbol
                .primary_location()
                .cloned()
                .unwrap_or(SourceLocation {
                    file: String::new(),
                    line: 0,
                    column: 0,
                    span: None,
                });
            self.graph
                .add_edge_dedup(node_idx, override_idx, EdgeRelation::Override, origin);

            if let Some(call_site) = self.invocation_of.get(&symbol.id).cloned() {
                if self.invocation_of.get(&override_id).is_none() {
                    self.invocation_of.insert(override_id.clone(), call_site);
                }
            }

            if !self.visited.contains(&override_id) {
                self.visited.insert(override_id.clone());
                self.expand_method_return(&override_symbol, override_idx, depth + 1);
            }
        }
    }

    /// Object-Initializer Tracer.
    fn expand_object_initializer(&mut self, symbol: &Symbol, node_idx: NodeIndex, depth: usize) {
        let Some(result) = trace_initializer(symbol, &self.invocation_of, self.oracle) else {
            return;
        };
        if result.target == symbol.id {
            return;
        }
        let target_idx = match self.oracle.symbol_by_id(&result.target) {
            Some(target_symbol) => self.node_for(&target_symbol),
            None => return,
        };
        self.graph.add_edge_dedup(
            node_idx,
            target_idx,
            result.relation,
            result.origin_location,
        );
        if result.recurse {
            if let Some(target_symbol) = self.oracle.symbol_by_id(&result.target) {
                self.expand(&target_symbol, target_idx, depth + 1);
            }
        }
    }

    fn has_matching_invocation(&self, symbol: &Symbol) -> bool {
        let Some(field_type) = &symbol.containing_type else {
            return false;
        };
        self.invocation_of.iter().any(|(method_id, _)| {
            self.oracle
                .symbol_by_id(method_id)
                .map(|m| m.containing_type.as_deref() == Some(field_type.as_str()) && !m.is_static)
                .unwrap_or(false)
        })
    }

    fn emit_and_recurse(
        &mut self,
        from_idx: NodeIndex,
        contributor_id: &SymbolId,
        relation: EdgeRelation,
        origin_location: SourceLocation,
        depth: usize,
    ) {
        let Some(contributor_symbol) = self.oracle.symbol_by_id(contributor_id) else {
            return;
        };
        let to_idx = self.node_for(&contributor_symbol);
        self.graph
            .add_edge_dedup(from_idx, to_idx, relation, origin_location);
        // `expand` itself is the visited-set gate, whether or not the edge
        // was new — a contributor reached twice via different relations
        // still needs expanding only once.
        self.expand(&contributor_symbol, to_idx, depth + 1);
    }
}

/// `analyze(document, position, cancellationToken) -> Graph | none`.
pub fn analyze<'a>(
    oracle: &'a dyn SemanticOracle,
    file: &str,
    line: u32,
    column: u32,
    cancelled: Option<&'a dyn Fn() -> bool>,
) -> Option<Graph> {
    let mut driver = Driver::new(oracle);
    if let Some(cancelled) = cancelled {
        driver = driver.with_cancellation(cancelled);
    }
    driver.analyze(file, line, column)
}
