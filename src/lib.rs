//! Tornado - a procedural swaying-bar animation encoded as a looping GIF.
//!
//! A stack of horizontal bars drifts left and right one column at a time.
//! Neighbouring bars never end up more than one column apart, and the lit
//! pixels shimmer through a cyclic grayscale palette.
//!
//! # Architecture
//!
//! - `schema`: Configuration and the initial row stack
//! - `compute`: Row motion simulator and frame compositor
//! - `animation`: GIF encoding, the recording loop and read back
//!
//! # Example
//!
//! ```rust,no_run
//! use tornado_anim::{
//!     animation::{FrameDelay, GifAnimationEncoder, record_animation},
//!     compute::{MotionRng, RowSimulator},
//!     schema::AnimationConfig,
//! };
//!
//! let config = AnimationConfig::default();
//! let mut simulator = RowSimulator::new(&config, MotionRng::new(42))?;
//!
//! let delay = FrameDelay::from_centis(config.frame_delay);
//! let encoder = GifAnimationEncoder::open("tornado.gif", config.width, config.height, delay)?;
//! let stats = record_animation(&mut simulator, encoder, delay)?;
//!
//! println!("Recorded {}", stats);
//! # Ok::<(), tornado_anim::animation::AnimationError>(())
//! ```

pub mod animation;
pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use animation::{AnimationError, RecordingStats, render_to_gif};
pub use compute::{FrameBuffer, Row, RowSimulator, render};
pub use schema::{AnimationConfig, RowSpec};
