//! Profiling utilities.

#[cfg(feature = "profile")]
use std::fs::File;

#[cfg(feature = "profile")]
use tracing::{info, warn};

/// Run a phase and write `graphdot-<name>.svg` as a flamegraph (when profiling is enabled).
///
/// Profiler failures are logged and never fail the phase.
#[cfg(feature = "profile")]
pub fn profile_phase<F, R>(name: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    use pprof::ProfilerGuard;

    let guard = match ProfilerGuard::new(1000) {
        Ok(guard) => guard,
        Err(e) => {
            warn!(phase = name, error = %e, "profiler unavailable");
            return f();
        }
    };
    let result = f();

    let filename = format!("graphdot-{name}.svg");
    let written = guard
        .report()
        .build()
        .map_err(|e| e.to_string())
        .and_then(|report| {
            let file = File::create(&filename).map_err(|e| e.to_string())?;
            report.flamegraph(file).map_err(|e| e.to_string())
        });
    match written {
        Ok(()) => info!("Flamegraph saved to {}", filename),
        Err(e) => warn!(phase = name, error = %e, "flamegraph not written"),
    }

    result
}

/// No-op profiling when feature is disabled.
#[cfg(not(feature = "profile"))]
pub fn profile_phase<F, R>(_name: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    f()
}
