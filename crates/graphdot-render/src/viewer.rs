//! Handing rendered output to a desktop viewer.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use graphdot_error::{Error, ErrorKind, Result};

/// Minimum time between two viewer launches.
pub const DEFAULT_THROTTLE: Duration = Duration::from_secs(2);

type Opener = Box<dyn Fn(&Path) -> std::io::Result<()> + Send + Sync>;

/// Writes rendered bytes to a file and opens it with the platform viewer.
///
/// Launches are throttled: a successful `display` records its time, and calls
/// arriving within the throttle interval of the last launch are skipped. A
/// failed launch leaves the throttle untouched.
/// The state lives as long as the `Viewer`; share one value to throttle
/// across threads.
pub struct Viewer {
    dir: PathBuf,
    throttle: Duration,
    last_shown: Mutex<Option<Instant>>,
    opener: Opener,
}

impl std::fmt::Debug for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("dir", &self.dir)
            .field("throttle", &self.throttle)
            .field("last_shown", &*self.last_shown.lock())
            .finish_non_exhaustive()
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

impl Viewer {
    /// A viewer writing into `dir` and opening files with the system handler.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            throttle: DEFAULT_THROTTLE,
            last_shown: Mutex::new(None),
            opener: Box::new(|path: &Path| open::that(path)),
        }
    }

    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// Replace the system handler, e.g. to launch a specific program.
    pub fn with_opener<F>(mut self, opener: F) -> Self
    where
        F: Fn(&Path) -> std::io::Result<()> + Send + Sync + 'static,
    {
        self.opener = Box::new(opener);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Show `bytes` as a `.<format>` file.
    ///
    /// Returns the written path, or `None` when the call was throttled.
    /// The file is left in place for the viewer to read.
    pub fn display(&self, bytes: &[u8], format: &str) -> Result<Option<PathBuf>> {
        // Held until the opener returns so concurrent callers see the launch.
        let mut last = self.last_shown.lock();
        if let Some(at) = *last {
            let since = at.elapsed();
            if since < self.throttle {
                debug!(since_ms = since.as_millis() as u64, "viewer throttled");
                return Ok(None);
            }
        }

        let path = self.persist(bytes, format)?;
        (self.opener)(&path).map_err(|e| {
            Error::new(ErrorKind::IoFailed, format!("cannot open viewer: {e}"))
                .with_operation("viewer::display")
                .with_context("path", path.display().to_string())
                .set_source(e)
        })?;
        *last = Some(Instant::now());

        debug!(path = %path.display(), "viewer opened");
        Ok(Some(path))
    }

    fn persist(&self, bytes: &[u8], format: &str) -> Result<PathBuf> {
        let mut file = tempfile::Builder::new()
            .prefix("graphdot-")
            .suffix(&format!(".{format}"))
            .tempfile_in(&self.dir)
            .map_err(|e| {
                Error::temp_resource(format!("cannot create viewer file: {e}"))
                    .with_operation("viewer::display")
                    .with_context("dir", self.dir.display().to_string())
                    .set_source(e)
            })?;

        file.write_all(bytes).and_then(|()| file.flush()).map_err(|e| {
            Error::write_failed(file.path().display().to_string())
                .with_operation("viewer::display")
                .set_source(e)
        })?;

        let (_, path) = file.keep().map_err(|e| {
            Error::temp_resource(format!("cannot keep viewer file: {}", e.error))
                .with_operation("viewer::display")
        })?;
        Ok(path)
    }
}
