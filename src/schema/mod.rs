//! Schema module - Configuration and initial row stack for the animation.

mod config;
mod rows;

pub use config::*;
pub use rows::*;
