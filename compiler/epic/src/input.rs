//! Declaration graph input.

use std::fs;
use std::path::Path;

use epi_ir::{DeclGraph, GraphInput};

use crate::CliError;

/// Read a `{ "types": [...] }` JSON file and build the graph over the prelude.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_graph(path: &Path) -> Result<DeclGraph, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let input: GraphInput = serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let declared = input.types.len();
    let graph = DeclGraph::from_input(input).map_err(|source| CliError::Graph {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(declared, total = graph.len(), "declaration graph loaded");
    Ok(graph)
}
