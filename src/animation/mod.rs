//! Animation output for the tornado simulation.
//!
//! Frames are written as a looping GIF89a. Unlit pixels are transparent
//! and every frame is disposed to background before the next, so each
//! frame shows only its own row stack.
//!
//! ```text
//! RowSimulator::step ──► render ──► AnimationEncoder::append_frame
//!        ▲                                   │
//!        └──────────── until budget ─────────┘
//!                                            ▼
//!                               AnimationEncoder::close (exactly once)
//! ```

mod encoder;
mod format;
mod player;
mod recorder;

pub use encoder::{AnimationEncoder, AnimationError, GifAnimationEncoder};
pub use format::{FrameDelay, GIF_MAGIC, QUANTIZE_SPEED, decode_frame, encode_frame};
pub use player::{AnimationPlayer, DecodedFrame};
pub use recorder::{AnimationSession, RecordingStats, record_animation, render_to_gif};
