//! Shared CLI options for graphdot.
//!
//! Rendering flags are grouped so they can be flattened into any binary
//! that turns graphs into pictures.

use clap::Args;

use graphdot_render::DEFAULT_PROGRAM;

/// Output format that skips the layout engine and emits the script itself.
pub const SCRIPT_FORMAT: &str = "dot";

/// Options controlling how a serialized graph is rendered and shown.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Output format passed to the engine as `-T<FORMAT>`; `dot` prints the script
    #[arg(short = 'T', long = "format", value_name = "FORMAT", default_value = SCRIPT_FORMAT)]
    pub format: String,

    /// Layout engine executable
    #[arg(long = "engine", value_name = "PROGRAM", default_value = DEFAULT_PROGRAM)]
    pub engine: String,

    /// Open the rendered output in the system viewer
    #[arg(long = "open", conflicts_with = "data_uri")]
    pub open: bool,

    /// Print the rendered output as a base64 `data:` URI
    #[arg(long = "data-uri")]
    pub data_uri: bool,

    /// Minimum milliseconds between two viewer launches
    #[arg(long = "throttle-ms", value_name = "MS", default_value_t = 2000)]
    pub throttle_ms: u64,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            format: SCRIPT_FORMAT.to_string(),
            engine: DEFAULT_PROGRAM.to_string(),
            open: false,
            data_uri: false,
            throttle_ms: 2000,
        }
    }
}

impl RenderArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    pub fn with_data_uri(mut self, data_uri: bool) -> Self {
        self.data_uri = data_uri;
        self
    }

    /// Whether the layout engine has to run at all.
    pub fn needs_engine(&self) -> bool {
        self.format != SCRIPT_FORMAT || self.open || self.data_uri
    }
}
