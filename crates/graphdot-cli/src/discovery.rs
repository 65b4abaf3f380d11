//! Input discovery for graphdot.

use std::collections::HashSet;
use std::time::Instant;

use ignore::WalkBuilder;
use tracing::info;

use graphdot_error::{Error, ErrorKind, Result};

use crate::GraphdotOptions;

/// Extension of graph documents picked up from directories.
pub const DOCUMENT_EXTENSION: &str = "json";

/// Directories to skip during discovery.
fn should_skip_dir(name: &str) -> bool {
    matches!(
        name,
        "target" | "build" | "dist" | "out" | "vendor" | "node_modules" | "third_party"
    )
}

/// Collect graph documents: explicit `opts.files` first, then every `.json`
/// found under `opts.dirs`, each path once, in walk order.
pub fn discover_files(opts: &GraphdotOptions) -> Result<Vec<String>> {
    let discovery_start = Instant::now();

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    let mut add_path = |path: String| {
        if seen.insert(path.clone()) {
            files.push(path);
        }
    };

    for file in &opts.files {
        add_path(file.clone());
    }

    for dir in &opts.dirs {
        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(true)
            .follow_links(false)
            .sort_by_file_path(|a, b| a.cmp(b))
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                if !is_dir {
                    return true;
                }
                let Some(name) = entry.file_name().to_str() else {
                    return true;
                };
                !should_skip_dir(&name.to_ascii_lowercase())
            });

        for entry in builder.build() {
            let entry = entry.map_err(|e| {
                Error::new(ErrorKind::TraversalFailed, format!("failed to walk {dir}: {e}"))
                    .with_operation("discovery::discover_files")
                    .with_context("dir", dir.clone())
                    .set_source(e)
            })?;

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some(DOCUMENT_EXTENSION) {
                add_path(path.to_string_lossy().into_owned());
            }
        }
    }

    info!(
        "Input discovery: {:.2}s ({} files)",
        discovery_start.elapsed().as_secs_f64(),
        files.len()
    );

    if files.is_empty() {
        return Err(Error::invalid_argument(
            "No graph documents found. Pass --file or a --dir containing .json files.",
        )
        .with_operation("discovery::discover_files"));
    }

    Ok(files)
}
