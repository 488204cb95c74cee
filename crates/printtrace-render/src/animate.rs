//! Layer grouping and cumulative frame rendering.
//!
//! Movements are bucketed by Z rounded to a fixed tolerance and rendered in
//! ascending Z order onto one persistent surface, one captured frame per
//! layer. This grouping is deliberately separate from the mesh builder's
//! floor-divide layers: the animation walks the print bottom-up by actual
//! height, while mesh faces follow insertion order.

use std::collections::BTreeMap;

use image::RgbaImage;
use tracing::debug;

use printtrace_core::Movement;

use crate::color::viridis;
use crate::context::{Bounds, RenderContext, RenderOptions};
use crate::error::{RenderError, Result};

/// Group movements by Z rounded to `tolerance`, in ascending key order
///
/// The key is `round(z / tolerance)`; movements within a group keep their
/// toolpath order.
pub fn group_layers(movements: &[Movement], tolerance: f64) -> BTreeMap<i64, Vec<Movement>> {
    let mut layers: BTreeMap<i64, Vec<Movement>> = BTreeMap::new();
    for movement in movements {
        let key = (movement.z / tolerance).round() as i64;
        layers.entry(key).or_default().push(*movement);
    }
    layers
}

/// Render one cumulative frame per animation layer
///
/// Fails with [`RenderError::EmptyToolpath`] when there are no movements,
/// since global axis bounds over zero points are undefined. The drawing
/// surface is scoped to this call and released on every exit path.
pub fn render_frames(movements: &[Movement], options: &RenderOptions) -> Result<Vec<RgbaImage>> {
    let bounds = Bounds::of(movements).ok_or(RenderError::EmptyToolpath)?;
    let layers = group_layers(movements, options.tolerance);
    let total = layers.len();

    let mut context = RenderContext::new(bounds, options)?;
    let mut frames = Vec::with_capacity(total);
    for (ordinal, points) in layers.values().enumerate() {
        let rgb = viridis(ordinal as f64 / total as f64);
        context.draw_polyline(points, rgb);
        context.draw_axis_frame();
        frames.push(context.capture());
    }
    debug!(layers = total, frames = frames.len(), "rendered layer frames");
    Ok(frames)
}

/// Convert a toolpath source into a looping GIF animation
///
/// Re-parses the source independently of the mesh path, renders the layer
/// frames with default options and encodes them in ascending Z order.
pub fn animation(source: &str) -> Result<Vec<u8>> {
    let movements = printtrace_core::ToolpathParser::new().parse(source)?;
    let options = RenderOptions::default();
    let frames = render_frames(&movements, &options)?;
    crate::gif::encode_gif(frames, options.frame_delay_ms)
}
