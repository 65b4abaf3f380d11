//! Invoking the external layout engine.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use tempfile::{NamedTempFile, TempDir};
use tracing::{debug, info};

use graphdot_error::{Error, ErrorKind, Result};

/// Engine used when none is configured.
pub const DEFAULT_PROGRAM: &str = "dot";

/// Turns a DOT script into rendered bytes of the requested format.
pub trait Renderer {
    fn render(&self, script: &str, format: &str) -> Result<Vec<u8>>;
}

/// Runs a Graphviz-compatible executable as `<program> -T<format> <in> -o <out>`.
///
/// The script is written to a temp file and the output lands in a temp
/// directory; both are removed when `render` returns, whether or not the
/// engine succeeded.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: PathBuf,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn write_script(&self, script: &str) -> Result<NamedTempFile> {
        let mut input = tempfile::Builder::new()
            .prefix("graphdot-")
            .suffix(".dot")
            .tempfile()
            .map_err(|e| {
                Error::temp_resource(format!("cannot create script file: {e}"))
                    .with_operation("render::write_script")
                    .set_source(e)
            })?;

        input
            .write_all(script.as_bytes())
            .and_then(|()| input.flush())
            .map_err(|e| {
                Error::write_failed(input.path().display().to_string())
                    .with_operation("render::write_script")
                    .set_source(e)
            })?;
        Ok(input)
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, script: &str, format: &str) -> Result<Vec<u8>> {
        validate_format(format)?;
        let start = Instant::now();

        let input = self.write_script(script)?;
        let out_dir: TempDir = tempfile::Builder::new()
            .prefix("graphdot-")
            .tempdir()
            .map_err(|e| {
                Error::temp_resource(format!("cannot create output directory: {e}"))
                    .with_operation("render::graphviz")
                    .set_source(e)
            })?;
        let out_path = out_dir.path().join("rendered");

        debug!(program = %self.program.display(), format, input = %input.path().display(), "running layout engine");
        let output = Command::new(&self.program)
            .arg(format!("-T{format}"))
            .arg(input.path())
            .arg("-o")
            .arg(&out_path)
            .output()
            .map_err(|e| {
                Error::new(
                    ErrorKind::RenderProcessFailed,
                    format!("failed to start layout engine: {e}"),
                )
                .with_operation("render::graphviz")
                .with_context("program", self.program_name())
                .set_source(e)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(
                Error::render_process(self.program_name(), output.status.code(), stderr.trim())
                    .with_operation("render::graphviz")
                    .with_context("format", format),
            );
        }

        let bytes = std::fs::read(&out_path).map_err(|e| {
            Error::new(
                ErrorKind::IoFailed,
                format!("layout engine output unreadable: {e}"),
            )
            .with_operation("render::graphviz")
            .with_context("program", self.program_name())
            .set_source(e)
        })?;

        info!(
            format,
            bytes = bytes.len(),
            "Rendering: {:.2}s",
            start.elapsed().as_secs_f64()
        );
        Ok(bytes)
    }
}

/// Formats become a `-T` flag, so only plain tokens like `svg` or `png:cairo` pass.
fn validate_format(format: &str) -> Result<()> {
    let valid = !format.is_empty()
        && format
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ':' | '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!("invalid output format '{format}'"))
            .with_operation("render::graphviz"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_format() {
        assert!(validate_format("svg").is_ok());
        assert!(validate_format("png:cairo").is_ok());
        assert!(validate_format("").is_err());
        assert_eq!(
            validate_format("svg -o /etc/passwd").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_default_program() {
        assert_eq!(GraphvizRenderer::default().program(), Path::new("dot"));
    }

    #[test]
    fn test_missing_program_is_render_failure() {
        let renderer = GraphvizRenderer::new("/nonexistent/graphdot-engine");
        let err = renderer.render("graph {\n}\n", "svg").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderProcessFailed);
        assert_eq!(
            err.context_value("program"),
            Some("/nonexistent/graphdot-engine")
        );
    }
}
