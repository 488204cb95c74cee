//! # Printtrace
//!
//! Converts a 3D-printer toolpath (a sequence of linear motion commands)
//! into two derived artifacts:
//!
//! - a Wavefront OBJ mesh tracing the printed object's path, and
//! - a layer-by-layer GIF animation of the print.
//!
//! ## Architecture
//!
//! Printtrace is organized as a workspace:
//!
//! 1. **printtrace-core** — command parsing, mesh reconstruction, OBJ emitter
//! 2. **printtrace-render** — layer rasterization and GIF animation encoding
//! 3. **printtrace** — the CLI binary tying both pipelines together
//!
//! Both pipelines are pure over the toolpath source: [`mesh_document`] and
//! [`animation`] each re-parse the source independently, so callers may run
//! them in any order or concurrently for independent inputs.

pub use printtrace_core::{
    create_faces, generate_mesh, mesh_document, parse_vertex_records, write_obj, Error, Mesh,
    Movement, PartialPosition, Position, ToolpathParser, DEFAULT_LAYER_HEIGHT,
};

pub use printtrace_render::{
    animation, encode_gif, group_layers, render_frames, viridis, Bounds, RenderContext,
    RenderError, RenderOptions,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG` environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
