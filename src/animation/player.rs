//! Animation player for reading back recorded GIFs.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::encoder::AnimationError;
use super::format::{FrameDelay, decode_frame};
use crate::compute::FrameBuffer;

/// One decoded frame, composited onto the full canvas.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    pub buffer: FrameBuffer,
    pub delay: FrameDelay,
}

/// Animation player for recorded GIF files.
///
/// Usage:
/// ```ignore
/// let player = AnimationPlayer::open("tornado.gif")?;
/// println!("Animation has {} frames", player.frame_count());
/// for frame in player.frames() {
///     // Use frame.buffer...
/// }
/// ```
pub struct AnimationPlayer {
    width: usize,
    height: usize,
    frames: Vec<DecodedFrame>,
}

impl AnimationPlayer {
    /// Open an animation file for playback.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AnimationError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Decode every frame from a GIF stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AnimationError> {
        let mut options = gif::DecodeOptions::new();
        options.set_color_output(gif::ColorOutput::RGBA);
        let mut decoder = options.read_info(reader)?;

        let width = decoder.width() as usize;
        let height = decoder.height() as usize;

        let mut frames = Vec::new();
        while let Some(frame) = decoder.read_next_frame()? {
            let patch = decode_frame(&frame.buffer, frame.width as usize, frame.height as usize)?;

            // Frames may cover only part of the canvas; the rest is background.
            let mut buffer = FrameBuffer::new(width, height);
            let (left, top) = (frame.left as usize, frame.top as usize);
            for y in 0..patch.height.min(height.saturating_sub(top)) {
                for x in 0..patch.width.min(width.saturating_sub(left)) {
                    buffer.set(left + x, top + y, patch.get(x, y));
                }
            }

            frames.push(DecodedFrame {
                buffer,
                delay: FrameDelay::from_centis(frame.delay),
            });
        }

        Ok(Self {
            width,
            height,
            frames,
        })
    }

    /// Get canvas dimensions.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get total number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Get a specific frame.
    pub fn frame(&self, index: usize) -> Option<&DecodedFrame> {
        self.frames.get(index)
    }

    /// Iterate frames in playback order.
    pub fn frames(&self) -> impl Iterator<Item = &DecodedFrame> {
        self.frames.iter()
    }

    /// Playback length of one loop in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.frames.iter().map(|f| f.delay.as_millis()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::render_to_gif;
    use crate::schema::AnimationConfig;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_player_reads_recording() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("playback.gif");
        let config = AnimationConfig {
            output_path: path.clone(),
            frame_budget: 10,
            random_seed: Some(9),
            ..Default::default()
        };
        render_to_gif(&config).unwrap();

        let player = AnimationPlayer::open(&path).unwrap();
        assert_eq!(player.dimensions(), (8, 8));
        assert_eq!(player.frame_count(), 10);
        assert_eq!(player.duration_ms(), 1500);
        for frame in player.frames() {
            assert_eq!(frame.delay, FrameDelay::from_centis(15));
            assert_eq!(frame.buffer.lit_count(), 32);
        }
        assert!(player.frame(10).is_none());
    }

    #[test]
    fn test_player_rejects_garbage() {
        let result = AnimationPlayer::from_reader(Cursor::new(b"not a gif".to_vec()));
        assert!(matches!(result, Err(AnimationError::Decode(_))));
    }

    #[test]
    fn test_player_missing_file() {
        let dir = tempdir().unwrap();
        let result = AnimationPlayer::open(dir.path().join("absent.gif"));
        assert!(matches!(result, Err(AnimationError::Io(_))));
    }
}
