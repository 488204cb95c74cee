//! Persistent drawing surface for cumulative layer rendering.
//!
//! A [`RenderContext`] owns one `tiny_skia` pixmap for the whole
//! rasterization call. Layers are stroked onto it without ever clearing, so
//! each captured frame is a superset of the previous one. The context is a
//! plain owned value: dropping it releases the surface on every exit path.

use glam::{DVec2, DVec3};
use image::{Rgba, RgbaImage};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use printtrace_core::{Movement, Position};

use crate::error::{RenderError, Result};

/// Fixed camera azimuth in degrees, matching a conventional 3D plot view
const AZIMUTH_DEG: f64 = -60.0;
/// Fixed camera elevation in degrees
const ELEVATION_DEG: f64 = 30.0;
/// Fraction of the canvas left empty around the projected toolpath
const MARGIN: f64 = 0.08;

fn background_color() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}
fn frame_color() -> Color {
    Color::from_rgba8(176, 176, 176, 255)
}

/// Rendering options for the layer rasterizer
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Z quantization tolerance for animation layer grouping
    pub tolerance: f64,
    /// Stroke width for layer polylines, in pixels
    pub line_width: f32,
    /// Display duration of each animation frame, in milliseconds
    pub frame_delay_ms: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            tolerance: 0.01,
            line_width: 2.0,
            frame_delay_ms: 500,
        }
    }
}

impl RenderOptions {
    /// Set the canvas size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the Z quantization tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the per-frame display duration in milliseconds
    pub fn with_frame_delay_ms(mut self, delay_ms: u32) -> Self {
        self.frame_delay_ms = delay_ms;
        self
    }
}

/// Shared axis bounds for an equal-aspect render
///
/// A single min and max across all X, Y and Z coordinates, so the render
/// keeps the same scale on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest coordinate over all axes of all movements
    pub min: f64,
    /// Largest coordinate over all axes of all movements
    pub max: f64,
}

impl Bounds {
    /// Compute the shared bounds of a movement sequence
    ///
    /// Returns `None` for an empty sequence: bounds over zero points are
    /// undefined and callers must surface that as an input error.
    pub fn of(movements: &[Movement]) -> Option<Self> {
        let mut it = movements.iter().flat_map(|m| [m.x, m.y, m.z]);
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    fn extent(&self) -> f64 {
        // Degenerate single-point traces still need a non-zero cube.
        (self.max - self.min).max(f64::EPSILON)
    }
}

/// Project a point onto the fixed axonometric view plane
fn project(p: DVec3) -> DVec2 {
    let azimuth = AZIMUTH_DEG.to_radians();
    let elevation = ELEVATION_DEG.to_radians();
    let x = p.x * azimuth.cos() + p.y * azimuth.sin();
    let depth = -p.x * azimuth.sin() + p.y * azimuth.cos();
    DVec2::new(x, p.z * elevation.cos() - depth * elevation.sin())
}

/// One persistent drawing surface, exclusively owned by a rasterization call
pub struct RenderContext {
    pixmap: Pixmap,
    bounds: Bounds,
    width: u32,
    height: u32,
    line_width: f32,
    scale: f64,
    offset: DVec2,
}

impl RenderContext {
    /// Allocate the surface and fix the screen transform for `bounds`
    ///
    /// The transform is computed once from the projected corners of the
    /// bounds cube and held fixed for every frame.
    pub fn new(bounds: Bounds, options: &RenderOptions) -> Result<Self> {
        let mut pixmap =
            Pixmap::new(options.width, options.height).ok_or(RenderError::Surface {
                width: options.width,
                height: options.height,
            })?;
        pixmap.fill(background_color());

        // Screen-space extent of the projected bounds cube.
        let corners = cube_corners(bounds).map(project);
        let (mut lo, mut hi) = (corners[0], corners[0]);
        for c in &corners[1..] {
            lo = lo.min(*c);
            hi = hi.max(*c);
        }
        let span = (hi - lo).max(DVec2::splat(f64::EPSILON));

        let usable_w = options.width as f64 * (1.0 - 2.0 * MARGIN);
        let usable_h = options.height as f64 * (1.0 - 2.0 * MARGIN);
        let scale = (usable_w / span.x).min(usable_h / span.y);

        // Center the projected cube on the canvas.
        let center = (lo + hi) * 0.5;
        let offset = DVec2::new(
            options.width as f64 * 0.5 - center.x * scale,
            options.height as f64 * 0.5 + center.y * scale,
        );

        Ok(Self {
            pixmap,
            bounds,
            width: options.width,
            height: options.height,
            line_width: options.line_width,
            scale,
            offset,
        })
    }

    /// Map a toolpath position to canvas pixel coordinates
    fn to_pixel(&self, p: &Position) -> (f32, f32) {
        let projected = project(DVec3::new(p.x, p.y, p.z));
        // Pixel Y grows downward.
        let x = projected.x * self.scale + self.offset.x;
        let y = self.offset.y - projected.y * self.scale;
        (x as f32, y as f32)
    }

    /// Stroke one layer's polyline onto the surface in `rgb`
    ///
    /// The surface is never cleared, so successive layers accumulate.
    pub fn draw_polyline(&mut self, points: &[Position], rgb: [u8; 3]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut paint = Paint::default();
        let [r, g, b] = rgb;
        paint.set_color(Color::from_rgba8(r, g, b, 255));
        paint.anti_alias = true;

        let (x, y) = self.to_pixel(first);
        if rest.is_empty() {
            // A single-point layer leaves a symmetric dot the width of the
            // stroke.
            if let Some(dot) = PathBuilder::from_circle(x, y, self.line_width * 0.5) {
                self.pixmap
                    .fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
            }
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(x, y);
        for point in rest {
            let (x, y) = self.to_pixel(point);
            pb.line_to(x, y);
        }
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width: self.line_width,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Redraw the projected bounds cube as the axis frame
    ///
    /// Re-applied before every capture so the visible limits stay identical
    /// across successive frames.
    pub fn draw_axis_frame(&mut self) {
        const EDGES: [(usize, usize); 12] = [
            (0, 1),
            (0, 2),
            (0, 4),
            (1, 3),
            (1, 5),
            (2, 3),
            (2, 6),
            (3, 7),
            (4, 5),
            (4, 6),
            (5, 7),
            (6, 7),
        ];
        let corners = cube_corners(self.bounds);
        let mut pb = PathBuilder::new();
        for (a, b) in EDGES {
            let pa = self.corner_pixel(corners[a]);
            let pb_point = self.corner_pixel(corners[b]);
            pb.move_to(pa.0, pa.1);
            pb.line_to(pb_point.0, pb_point.1);
        }
        let Some(path) = pb.finish() else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(frame_color());
        paint.anti_alias = false;
        let stroke = Stroke {
            width: 1.0,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn corner_pixel(&self, corner: DVec3) -> (f32, f32) {
        self.to_pixel(&Position::new(corner.x, corner.y, corner.z))
    }

    /// Capture the current surface state as one animation frame
    pub fn capture(&self) -> RgbaImage {
        let data = self.pixmap.data();
        let width = self.width;
        RgbaImage::from_fn(width, self.height, |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            Rgba([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]])
        })
    }

    /// Shared axis bounds this surface was fixed to
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

fn cube_corners(bounds: Bounds) -> [DVec3; 8] {
    let lo = bounds.min;
    let hi = bounds.min + bounds.extent();
    [
        DVec3::new(lo, lo, lo),
        DVec3::new(hi, lo, lo),
        DVec3::new(lo, hi, lo),
        DVec3::new(hi, hi, lo),
        DVec3::new(lo, lo, hi),
        DVec3::new(hi, lo, hi),
        DVec3::new(lo, hi, hi),
        DVec3::new(hi, hi, hi),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_share_one_min_max_across_axes() {
        let movements = vec![
            Position::new(-1.0, 2.0, 0.5),
            Position::new(3.0, 0.0, 9.0),
        ];
        let bounds = Bounds::of(&movements).unwrap();
        assert_eq!(bounds, Bounds { min: -1.0, max: 9.0 });
    }

    #[test]
    fn bounds_of_empty_sequence_are_undefined() {
        assert!(Bounds::of(&[]).is_none());
    }

    #[test]
    fn single_point_layer_draws_a_symmetric_dot() {
        let bounds = Bounds { min: 0.0, max: 10.0 };
        let options = RenderOptions::default().with_size(64, 64);
        let mut ctx = RenderContext::new(bounds, &options).unwrap();

        let blank = ctx.capture();
        // The bounds-cube center projects to the canvas center.
        ctx.draw_polyline(&[Position::new(5.0, 5.0, 5.0)], [0, 0, 0]);
        let drawn = ctx.capture();

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (u32::MAX, 0u32, u32::MAX, 0u32);
        for (x, y, pixel) in drawn.enumerate_pixels() {
            if blank.get_pixel(x, y) != pixel {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }
        assert!(min_x <= max_x, "dot must leave a mark");
        assert_eq!(max_x - min_x, max_y - min_y, "dot must be symmetric");
    }

    #[test]
    fn capture_reflects_accumulated_drawing() {
        let bounds = Bounds { min: 0.0, max: 10.0 };
        let options = RenderOptions::default().with_size(64, 64);
        let mut ctx = RenderContext::new(bounds, &options).unwrap();

        let blank = ctx.capture();
        ctx.draw_polyline(
            &[Position::new(0.0, 0.0, 0.0), Position::new(10.0, 10.0, 10.0)],
            [255, 0, 0],
        );
        let drawn = ctx.capture();

        assert_eq!(blank.dimensions(), (64, 64));
        assert_ne!(blank.as_raw(), drawn.as_raw());
    }
}
