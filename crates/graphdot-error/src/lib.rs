//! # graphdot-error
//!
//! Unified error handling for graphdot, in the OpenDAL style.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., RenderProcessFailed, InvalidVertexRef)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use graphdot_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::RenderProcessFailed, "syntax error in line 3")
//!         .with_operation("render::graphviz")
//!         .with_context("program", "dot")
//!         .with_context("exit_code", "1"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, graphdot_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using graphdot Error
pub type Result<T> = std::result::Result<T, Error>;
