//! Compute module - Row motion and frame composition.

mod compositor;
mod rng;
mod row;
mod simulator;

pub use compositor::*;
pub use rng::*;
pub use row::*;
pub use simulator::*;
