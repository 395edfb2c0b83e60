//! Row motion simulator - constrained random walk of the row stack.
//!
//! Each step scans the rows top to bottom, drawing a candidate move of
//! -1, 0 or +1 columns per row. The first candidate that keeps the row on
//! the canvas and within one column of both vertical neighbours is applied
//! and the scan stops, so at most one row moves per step.

use log::{debug, trace};

use crate::schema::{AnimationConfig, ConfigError};

use super::{MotionRng, Row};

/// Owns the row stack and advances it one frame at a time.
pub struct RowSimulator {
    rows: Vec<Row>,
    width: i32,
    height: usize,
    /// Frames produced so far.
    frame: u64,
    frame_budget: u64,
    rng: MotionRng,
}

impl RowSimulator {
    /// Create a simulator with an explicit randomness source.
    pub fn new(config: &AnimationConfig, rng: MotionRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rows: config.rows.iter().map(Row::from).collect(),
            width: config.width as i32,
            height: config.height,
            frame: 0,
            frame_budget: config.frame_budget,
            rng,
        })
    }

    /// Create a simulator seeded from `config.random_seed` (or entropy).
    pub fn from_config(config: &AnimationConfig) -> Result<Self, ConfigError> {
        Self::new(config, MotionRng::from_seed(config.random_seed))
    }

    /// Advance by one frame.
    ///
    /// Returns false once the frame budget is spent; no state changes
    /// after that point.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.frame += 1;

        match self.try_move() {
            Some((index, distance)) => {
                debug!(
                    "frame {}: row {} moved {:+} to offset {}",
                    self.frame, index, distance, self.rows[index].offset
                );
            }
            None => trace!("frame {}: no row moved", self.frame),
        }
        true
    }

    /// Scan rows in order and apply the first legal candidate move.
    fn try_move(&mut self) -> Option<(usize, i32)> {
        for index in 0..self.rows.len() {
            let distance = self.rng.displacement();
            if distance == 0 {
                continue;
            }
            if self.can_move(index, distance) {
                self.rows[index].offset += distance;
                return Some((index, distance));
            }
        }
        None
    }

    /// Check a candidate against the canvas edges and both neighbours'
    /// current offsets.
    fn can_move(&self, index: usize, distance: i32) -> bool {
        let moved = self.rows[index].shifted(distance);
        if !moved.fits(self.width) {
            return false;
        }

        let within_one = |neighbour: &Row| (neighbour.offset - moved.offset).abs() <= 1;

        if index > 0 && !within_one(&self.rows[index - 1]) {
            return false;
        }
        if let Some(below) = self.rows.get(index + 1) {
            if !within_one(below) {
                return false;
            }
        }
        true
    }

    /// Current row stack, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Frames produced so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn frame_budget(&self) -> u64 {
        self.frame_budget
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the next `step` will report completion.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.frame >= self.frame_budget
    }
}
