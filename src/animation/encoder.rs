//! Animation encoders - sinks that turn a sequence of frames into a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::format::{FrameDelay, encode_frame, gif_dimensions};
use crate::compute::FrameBuffer;
use crate::schema::ConfigError;

/// Errors raised while producing or reading an animation.
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to open animation output {path}")]
    EncoderOpen {
        path: PathBuf,
        #[source]
        source: gif::EncodingError,
    },
    #[error("Failed to write frame {frame}")]
    EncoderWrite {
        frame: u64,
        #[source]
        source: gif::EncodingError,
    },
    #[error("Failed to finalize animation output {path}")]
    EncoderClose {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Encoder is already closed")]
    EncoderClosed,
    #[error("Frame is {actual_width}x{actual_height}, animation is {width}x{height}")]
    FrameSizeMismatch {
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },
    #[error("Canvas {width}x{height} cannot be stored as a GIF")]
    UnsupportedDimensions { width: usize, height: usize },
    #[error("Frame data is {bytes} bytes, expected {width}x{height} RGBA")]
    FrameDataMismatch {
        bytes: usize,
        width: usize,
        height: usize,
    },
    #[error("Failed to decode animation: {0}")]
    Decode(#[from] gif::DecodingError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Sink for rendered frames.
///
/// Opening is the implementation's constructor. `close` finalizes the
/// artifact; calling it again is a no-op.
pub trait AnimationEncoder {
    /// Append one frame, shown for `delay`.
    fn append_frame(&mut self, frame: &FrameBuffer, delay: FrameDelay)
    -> Result<(), AnimationError>;

    /// Finalize the output.
    fn close(&mut self) -> Result<(), AnimationError>;
}

/// Looping animated GIF written to a file.
pub struct GifAnimationEncoder {
    path: PathBuf,
    width: usize,
    height: usize,
    delay: FrameDelay,
    /// `None` once closed.
    encoder: Option<gif::Encoder<BufWriter<File>>>,
    frames_written: u64,
}

impl GifAnimationEncoder {
    /// Create the output file and write the GIF header.
    pub fn open<P: AsRef<Path>>(
        path: P,
        width: usize,
        height: usize,
        delay: FrameDelay,
    ) -> Result<Self, AnimationError> {
        let path = path.as_ref().to_path_buf();
        let (gif_width, gif_height) = gif_dimensions(width, height)?;

        let open_error = |source: gif::EncodingError| AnimationError::EncoderOpen {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(|e| open_error(e.into()))?;
        let mut encoder =
            gif::Encoder::new(BufWriter::new(file), gif_width, gif_height, &[]).map_err(open_error)?;
        encoder
            .set_repeat(gif::Repeat::Infinite)
            .map_err(open_error)?;

        info!(
            "Opened {} ({}x{}, {} ms/frame)",
            path.display(),
            width,
            height,
            delay.as_millis()
        );

        Ok(Self {
            path,
            width,
            height,
            delay,
            encoder: Some(encoder),
            frames_written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default delay this encoder was opened with.
    pub fn delay(&self) -> FrameDelay {
        self.delay
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn is_closed(&self) -> bool {
        self.encoder.is_none()
    }
}

impl AnimationEncoder for GifAnimationEncoder {
    fn append_frame(
        &mut self,
        frame: &FrameBuffer,
        delay: FrameDelay,
    ) -> Result<(), AnimationError> {
        if frame.width != self.width || frame.height != self.height {
            return Err(AnimationError::FrameSizeMismatch {
                width: self.width,
                height: self.height,
                actual_width: frame.width,
                actual_height: frame.height,
            });
        }
        let encoder = self.encoder.as_mut().ok_or(AnimationError::EncoderClosed)?;

        let gif_frame = encode_frame(frame, delay)?;
        encoder
            .write_frame(&gif_frame)
            .map_err(|source| AnimationError::EncoderWrite {
                frame: self.frames_written,
                source,
            })?;
        self.frames_written += 1;
        debug!("Wrote frame {} to {}", self.frames_written, self.path.display());
        Ok(())
    }

    fn close(&mut self) -> Result<(), AnimationError> {
        let Some(encoder) = self.encoder.take() else {
            return Ok(());
        };

        let close_error = |source: io::Error| AnimationError::EncoderClose {
            path: self.path.clone(),
            source,
        };
        // Writes the GIF trailer.
        let mut writer = encoder.into_inner().map_err(close_error)?;
        writer.flush().map_err(close_error)?;

        info!(
            "Closed {} after {} frames",
            self.path.display(),
            self.frames_written
        );
        Ok(())
    }
}
