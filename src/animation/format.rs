//! Conversions between frame buffers and GIF frames.

use crate::compute::{FrameBuffer, Rgba};

use super::AnimationError;

/// Signature at the start of every file the encoder writes.
pub const GIF_MAGIC: &[u8; 6] = b"GIF89a";

/// LZW/quantizer speed passed to the GIF encoder (1 = best, 30 = fastest).
pub const QUANTIZE_SPEED: i32 = 10;

/// Delay between frames, in hundredths of a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameDelay(u16);

impl FrameDelay {
    pub const fn from_centis(centis: u16) -> Self {
        Self(centis)
    }

    pub const fn as_centis(self) -> u16 {
        self.0
    }

    pub const fn as_millis(self) -> u64 {
        self.0 as u64 * 10
    }
}

impl Default for FrameDelay {
    fn default() -> Self {
        Self(15)
    }
}

/// Build a full-canvas GIF frame from a rendered buffer.
pub fn encode_frame(
    frame: &FrameBuffer,
    delay: FrameDelay,
) -> Result<gif::Frame<'static>, AnimationError> {
    let (width, height) = gif_dimensions(frame.width, frame.height)?;
    let mut bytes = frame.to_rgba_bytes();

    let mut gif_frame = gif::Frame::from_rgba_speed(width, height, &mut bytes, QUANTIZE_SPEED);
    gif_frame.delay = delay.as_centis();
    // Unlit pixels are transparent; clear them between frames instead of
    // letting the previous frame show through.
    gif_frame.dispose = gif::DisposalMethod::Background;
    Ok(gif_frame)
}

/// Decode packed RGBA bytes into a buffer of the given size.
pub fn decode_frame(
    bytes: &[u8],
    width: usize,
    height: usize,
) -> Result<FrameBuffer, AnimationError> {
    if bytes.len() != width * height * 4 {
        return Err(AnimationError::FrameDataMismatch {
            bytes: bytes.len(),
            width,
            height,
        });
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|p| Rgba {
            r: p[0],
            g: p[1],
            b: p[2],
            a: p[3],
        })
        .collect();
    Ok(FrameBuffer {
        width,
        height,
        pixels,
    })
}

/// Check that a canvas fits the 16-bit GIF logical screen.
pub fn gif_dimensions(width: usize, height: usize) -> Result<(u16, u16), AnimationError> {
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(AnimationError::UnsupportedDimensions { width, height }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{Row, render};

    #[test]
    fn test_frame_delay_units() {
        let delay = FrameDelay::from_centis(15);
        assert_eq!(delay.as_centis(), 15);
        assert_eq!(delay.as_millis(), 150);
        assert_eq!(FrameDelay::default(), delay);
    }

    #[test]
    fn test_encode_frame_sets_timing() {
        let buffer = render(&[Row::new(6, 0)], 0, 8, 8);
        let frame = encode_frame(&buffer, FrameDelay::from_centis(15)).unwrap();
        assert_eq!(frame.width, 8);
        assert_eq!(frame.height, 8);
        assert_eq!(frame.left, 0);
        assert_eq!(frame.top, 0);
        assert_eq!(frame.delay, 15);
        assert_eq!(frame.dispose, gif::DisposalMethod::Background);
    }

    #[test]
    fn test_decode_frame() {
        let buffer = render(&[Row::new(3, 1)], 2, 8, 2);
        let decoded = decode_frame(&buffer.to_rgba_bytes(), 8, 2).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_decode_frame_size_mismatch() {
        let result = decode_frame(&[0u8; 12], 2, 2);
        assert!(matches!(
            result,
            Err(AnimationError::FrameDataMismatch { bytes: 12, .. })
        ));
    }

    #[test]
    fn test_gif_dimensions() {
        assert_eq!(gif_dimensions(8, 8).unwrap(), (8, 8));
        assert!(gif_dimensions(0, 8).is_err());
        assert!(gif_dimensions(70_000, 8).is_err());
    }
}
