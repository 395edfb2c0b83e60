//! Animation recorder - drives the simulator and feeds frames to an encoder.

use std::fs;

use log::{info, warn};

use super::encoder::{AnimationEncoder, AnimationError, GifAnimationEncoder};
use super::format::FrameDelay;
use crate::compute::{FrameBuffer, RowSimulator, render};
use crate::schema::AnimationConfig;

/// Owns an encoder and closes it exactly once.
///
/// `finish` closes explicitly and reports the result. Any other way out
/// (an early `?` return or a panic) closes from `Drop`, where a failure
/// can only be logged.
///
/// Usage:
/// ```ignore
/// let mut session = AnimationSession::new(GifAnimationEncoder::open("out.gif", 8, 8, delay)?);
/// session.append_frame(&frame, delay)?;
/// session.finish()?;
/// ```
pub struct AnimationSession<E: AnimationEncoder> {
    encoder: E,
    closed: bool,
    frames_written: u64,
}

impl<E: AnimationEncoder> AnimationSession<E> {
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            closed: false,
            frames_written: 0,
        }
    }

    /// Forward one frame to the encoder.
    pub fn append_frame(
        &mut self,
        frame: &FrameBuffer,
        delay: FrameDelay,
    ) -> Result<(), AnimationError> {
        if self.closed {
            return Err(AnimationError::EncoderClosed);
        }
        self.encoder.append_frame(frame, delay)?;
        self.frames_written += 1;
        Ok(())
    }

    /// Close the encoder and surface any finalization error.
    pub fn finish(mut self) -> Result<u64, AnimationError> {
        self.close_once()?;
        Ok(self.frames_written)
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    fn close_once(&mut self) -> Result<(), AnimationError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.encoder.close()
    }
}

impl<E: AnimationEncoder> Drop for AnimationSession<E> {
    fn drop(&mut self) {
        if let Err(e) = self.close_once() {
            warn!("Failed to close animation after {} frames: {}", self.frames_written, e);
        }
    }
}

/// Statistics from a recording session.
#[derive(Debug, Clone)]
pub struct RecordingStats {
    /// Frames handed to the encoder.
    pub frame_count: u64,
    /// Playback length of one loop in milliseconds.
    pub duration_ms: u64,
    /// Size of the written file, when the encoder wrote one.
    pub total_bytes: Option<u64>,
}

impl std::fmt::Display for RecordingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} frames, {:.2}s per loop",
            self.frame_count,
            self.duration_ms as f64 / 1000.0
        )?;
        if let Some(bytes) = self.total_bytes {
            write!(f, ", {} bytes", bytes)?;
        }
        Ok(())
    }
}

/// Run the simulator to completion, rendering and appending one frame per
/// successful step.
///
/// The encoder is closed exactly once on every exit path. A failed append
/// closes the partial animation before the error is returned.
pub fn record_animation<E: AnimationEncoder>(
    simulator: &mut RowSimulator,
    encoder: E,
    delay: FrameDelay,
) -> Result<RecordingStats, AnimationError> {
    let mut session = AnimationSession::new(encoder);

    while simulator.step() {
        let frame = render(
            simulator.rows(),
            simulator.frame(),
            simulator.width(),
            simulator.height(),
        );
        // On error the session drops here, which closes the encoder.
        session.append_frame(&frame, delay)?;
    }

    let frame_count = session.finish()?;
    Ok(RecordingStats {
        frame_count,
        duration_ms: frame_count * delay.as_millis(),
        total_bytes: None,
    })
}

/// Validate `config`, then record the whole animation to
/// `config.output_path` as a looping GIF.
pub fn render_to_gif(config: &AnimationConfig) -> Result<RecordingStats, AnimationError> {
    config.validate()?;
    let mut simulator = RowSimulator::from_config(config)?;
    let delay = FrameDelay::from_centis(config.frame_delay);

    let encoder =
        GifAnimationEncoder::open(&config.output_path, config.width, config.height, delay)?;
    let mut stats = record_animation(&mut simulator, encoder, delay)?;
    stats.total_bytes = fs::metadata(&config.output_path).ok().map(|m| m.len());

    info!("Recorded {}: {}", config.output_path.display(), stats);
    Ok(stats)
}
