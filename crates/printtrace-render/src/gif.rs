//! GIF animation encoding.

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use tracing::debug;

use crate::error::Result;

/// Encode an ordered frame sequence as a looping GIF
///
/// Frames are written in the order given, each displayed for `delay_ms`
/// milliseconds, and the animation repeats forever. The encoded bytes are
/// collected in memory; no scratch files are used.
pub fn encode_gif(frames: Vec<RgbaImage>, delay_ms: u32) -> Result<Vec<u8>> {
    let frame_count = frames.len();
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        encoder.set_repeat(Repeat::Infinite)?;
        for image in frames {
            let delay = Delay::from_numer_denom_ms(delay_ms, 1);
            encoder.encode_frame(Frame::from_parts(image, 0, 0, delay))?;
        }
    }
    debug!(frames = frame_count, bytes = bytes.len(), "encoded animation");
    Ok(bytes)
}
