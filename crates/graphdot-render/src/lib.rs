//! Everything downstream of the DOT script.
//!
//! - [`renderer`]: run an external layout engine over a script
//! - [`viewer`]: open rendered output in a desktop viewer, throttled
//! - [`embed`]: base64 `data:` URIs for inline embedding

pub mod embed;
pub mod renderer;
pub mod viewer;

pub use embed::{data_uri, mime_type};
pub use renderer::{DEFAULT_PROGRAM, GraphvizRenderer, Renderer};
pub use viewer::{DEFAULT_THROTTLE, Viewer};
