//! graphdot command-line interface.
//!
pub mod discovery;
pub mod options;
pub mod output;
pub mod pipeline;
pub mod profile;

use graphdot_error::Result;

pub use options::{RenderArgs, SCRIPT_FORMAT};
pub use pipeline::process_files;
pub use profile::profile_phase;

/// Options for running graphdot.
#[derive(Debug, Clone, Default)]
pub struct GraphdotOptions {
    pub files: Vec<String>,
    pub dirs: Vec<String>,
    pub output: Option<String>,
    /// Replaces the `name` attribute of every input graph.
    pub name: Option<String>,
    pub render: RenderArgs,
}

/// Main entry point.
///
/// Returns the bytes to print or write, or `None` when the output was
/// handed to the viewer instead.
pub fn run_main(opts: &GraphdotOptions) -> Result<Option<Vec<u8>>> {
    let files = discovery::discover_files(opts)?;
    let scripts = process_files(opts, &files)?;
    output::generate_output(opts, &scripts)
}
