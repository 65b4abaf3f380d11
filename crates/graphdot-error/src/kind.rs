//! Error kinds for graphdot operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on ErrorKind to tell a broken graph apart from a failed
/// render or an unusable temp directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument passed to function
    InvalidArgument,

    // =========================================================================
    // Graph errors
    // =========================================================================
    /// An edge endpoint refers to a vertex the graph never issued
    InvalidVertexRef,

    // =========================================================================
    // Document errors
    // =========================================================================
    /// A graph document could not be decoded
    DeserializationFailed,

    /// A graph document could not be encoded
    SerializationFailed,

    // =========================================================================
    // Render errors
    // =========================================================================
    /// A scoped temporary file or directory could not be acquired
    TempResourceFailed,

    /// Writing a script or rendered output failed
    WriteFailed,

    /// The external layout engine failed or exited with a non-zero status
    RenderProcessFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Directory traversal failed
    TraversalFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(
            ErrorKind::RenderProcessFailed.to_string(),
            "RenderProcessFailed"
        );
        assert_eq!(ErrorKind::InvalidVertexRef.as_str(), "InvalidVertexRef");
    }
}
