//! # Printtrace Render
//!
//! Layer-by-layer toolpath rasterization and GIF animation for Printtrace.
//!
//! The rasterizer derives its own read-only view over the movement trace
//! produced by `printtrace-core`: movements are quantized into Z layers,
//! each layer is stroked onto one persistent drawing surface in a viridis
//! gradient color, and every layer yields one cumulative frame. The frame
//! sequence encodes to a looping GIF.

pub mod animate;
pub mod color;
pub mod context;
pub mod error;
pub mod gif;

pub use animate::{animation, group_layers, render_frames};
pub use color::viridis;
pub use context::{Bounds, RenderContext, RenderOptions};
pub use error::{RenderError, Result};
pub use gif::encode_gif;
