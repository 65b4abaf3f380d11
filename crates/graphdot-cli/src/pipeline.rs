//! Core processing pipeline: load document → build graph → serialize.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use graphdot_core::{Graph, GraphDocument, NAME_ATTR};
use graphdot_dot::serialize;
use graphdot_error::Result;

use crate::GraphdotOptions;
use crate::profile::profile_phase;

/// A serialized input, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub path: String,
    pub text: String,
}

/// Load a single document and apply the CLI overrides.
pub fn load_graph(opts: &GraphdotOptions, path: &str) -> Result<Graph> {
    let mut graph = GraphDocument::load(path)?.into_graph()?;
    if let Some(name) = &opts.name {
        graph.attrs_mut().set(NAME_ATTR, name.clone());
    }
    Ok(graph)
}

/// Serialize every input file.
///
/// Files are processed in parallel; the result keeps input order, and the
/// run stops at the first error encountered.
pub fn process_files(opts: &GraphdotOptions, files: &[String]) -> Result<Vec<Script>> {
    let start = Instant::now();
    info!("Serializing {} graph documents", files.len());

    let scripts = profile_phase("serialize", || {
        files
            .par_iter()
            .map(|path| -> Result<Script> {
                let graph = load_graph(opts, path)?;
                let text = serialize(&graph);
                debug!(path = %path, bytes = text.len(), "serialized");
                Ok(Script {
                    path: path.clone(),
                    text,
                })
            })
            .collect::<Result<Vec<_>>>()
    })?;

    info!("Serialization: {:.2}s", start.elapsed().as_secs_f64());
    Ok(scripts)
}
