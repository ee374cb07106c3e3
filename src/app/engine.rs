//! Insight Engine: a thin facade composing an oracle with the
//! Traversal Driver and converting its result into the Driver API DTOs.
//! Loads a fixture once and can be queried many times, without any
//! `Arc<RwLock<_>>` sharing, since this crate's only caller is the
//! one-shot CLI rather than a long-lived server process.

use anyhow::{anyhow, Context, Result};

use crate::adapters::fixture::FixtureOracle;
use crate::app::dto::{to_graph_dto, GraphDto};
use crate::domain::driver;
use crate::domain::ports::SemanticOracle;

pub struct InsightEngine {
    oracle: Box<dyn SemanticOracle>,
}

impl InsightEngine {
    pub fn new(oracle: Box<dyn SemanticOracle>) -> Self {
        Self { oracle }
    }

    pub fn from_fixture_file(path: &std::path::Path) -> Result<Self> {
        let oracle = FixtureOracle::load_from_json(path)
            .with_context(|| format!("failed to load fixture: {}", path.display()))?;
        Ok(Self::new(Box::new(oracle)))
    }

    /// Runs `analyze` at the given cursor and converts the result to the
    /// Driver API DTO. `Ok(None)` is the ordinary "cursor did not resolve to
    /// an analyzable symbol" outcome (this also covers cancellation before
    /// any work started); `Err` only for the internal inconsistency of a
    /// graph somehow built with no root. `cancelled` is polled between write
    /// sites and expansions and stops the traversal early when it returns
    /// `true`.
    pub fn analyze(
        &self,
        file: &str,
        line: u32,
        column: u32,
        cancelled: Option<&dyn Fn() -> bool>,
    ) -> Result<Option<GraphDto>> {
        let Some(result) = driver::analyze(self.oracle.as_ref(), file, line, column, cancelled)
        else {
            return Ok(None);
        };
        let dto = to_graph_dto(&result.graph)
            .ok_or_else(|| anyhow!("internal error: analyzed graph has no root"))?;
        Ok(Some(dto))
    }
}
