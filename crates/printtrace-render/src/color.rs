//! Perceptual color gradient for layer ordering.

/// Anchor colors sampled along the viridis colormap at equal intervals.
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [253, 231, 37],
];

/// Sample the viridis gradient at `t`, clamped to [0, 1]
///
/// Linear interpolation between the anchor colors. Layer ordinals normalized
/// by the total layer count index into this gradient, so early layers render
/// dark purple and late layers bright yellow.
pub fn viridis(t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0) * (VIRIDIS.len() - 1) as f64;
    let lower = t.floor() as usize;
    let upper = (lower + 1).min(VIRIDIS.len() - 1);
    let frac = t - lower as f64;

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let a = VIRIDIS[lower][i] as f64;
        let b = VIRIDIS[upper][i] as f64;
        *channel = (a + (b - a) * frac).round() as u8;
    }
    rgb
}
