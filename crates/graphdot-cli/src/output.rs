//! Output generation: raw scripts, rendered bytes, data URIs or the viewer.

use std::time::{Duration, Instant};

use tracing::info;

use graphdot_error::{Error, Result};
use graphdot_render::{GraphvizRenderer, Renderer, Viewer, data_uri};

use crate::GraphdotOptions;
use crate::pipeline::Script;

/// Produce the final output for a run.
///
/// Without an engine the scripts are concatenated, separated by a blank
/// line. With one, each script is rendered; data URIs are printed one per
/// line and `--open` hands each rendering to the viewer.
pub fn generate_output(opts: &GraphdotOptions, scripts: &[Script]) -> Result<Option<Vec<u8>>> {
    let render = &opts.render;
    if !render.needs_engine() {
        return Ok(Some(merge_scripts(scripts).into_bytes()));
    }

    if scripts.len() > 1 && !render.open && !render.data_uri {
        return Err(Error::invalid_argument(format!(
            "cannot write {} rendered graphs as one {} file; use --open or --data-uri",
            scripts.len(),
            render.format
        ))
        .with_operation("output::generate_output"));
    }

    let renderer = GraphvizRenderer::new(&render.engine);
    render_scripts(opts, &renderer, scripts)
}

/// Render through any [`Renderer`]; split out so tests can stub the engine.
pub fn render_scripts(
    opts: &GraphdotOptions,
    renderer: &dyn Renderer,
    scripts: &[Script],
) -> Result<Option<Vec<u8>>> {
    let render = &opts.render;
    let render_start = Instant::now();

    let viewer = render.open.then(|| {
        Viewer::default().with_throttle(Duration::from_millis(render.throttle_ms))
    });
    let mut uris = Vec::new();
    let mut last = None;

    for script in scripts {
        let bytes = renderer
            .render(&script.text, &render.format)
            .map_err(|e| e.with_context("input", script.path.clone()))?;

        if let Some(viewer) = &viewer {
            match viewer.display(&bytes, &render.format)? {
                Some(path) => info!(input = %script.path, path = %path.display(), "opened in viewer"),
                None => info!(input = %script.path, "viewer throttled, rendering not shown"),
            }
        } else if render.data_uri {
            uris.push(data_uri(&bytes, &render.format));
        } else {
            last = Some(bytes);
        }
    }

    info!(
        "Rendering {} graphs: {:.2}s",
        scripts.len(),
        render_start.elapsed().as_secs_f64()
    );

    if viewer.is_some() {
        Ok(None)
    } else if render.data_uri {
        let mut text = uris.join("\n");
        text.push('\n');
        Ok(Some(text.into_bytes()))
    } else {
        Ok(last)
    }
}

/// Join scripts into one text, separated by blank lines.
pub fn merge_scripts(scripts: &[Script]) -> String {
    scripts
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
