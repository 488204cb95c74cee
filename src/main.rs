use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::info;

use printtrace::{animation, init_logging, mesh_document};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("usage: printtrace <toolpath.gcode> [output-dir]");
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));

    let source = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read toolpath file {input}"))?;
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let obj = mesh_document(&source).context("mesh reconstruction failed")?;
    let obj_path = out_dir.join("model.obj");
    std::fs::write(&obj_path, &obj)
        .with_context(|| format!("failed to write {}", obj_path.display()))?;
    info!(path = %obj_path.display(), bytes = obj.len(), "wrote mesh document");

    let gif = animation(&source).context("animation rendering failed")?;
    let gif_path = out_dir.join("model_animation.gif");
    std::fs::write(&gif_path, &gif)
        .with_context(|| format!("failed to write {}", gif_path.display()))?;
    info!(path = %gif_path.display(), bytes = gif.len(), "wrote animation");

    Ok(())
}
