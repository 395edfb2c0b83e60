//! Configuration types for the tornado animation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{RowSpec, row_span, tornado_rows};

/// Largest canvas edge the GIF container can describe.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

fn default_output_path() -> PathBuf {
    PathBuf::from("tornado.gif")
}

/// Top-level animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Where the animated GIF is written.
    pub output_path: PathBuf,
    /// Delay between frames in hundredths of a second.
    pub frame_delay: u16,
    /// Number of frames produced before the simulator reports completion.
    pub frame_budget: u64,
    /// Row stack, top to bottom.
    pub rows: Vec<RowSpec>,
    /// Seed for row motion. `None` draws one from OS entropy.
    pub random_seed: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            output_path: default_output_path(),
            frame_delay: 15,
            frame_budget: 200,
            rows: tornado_rows(),
            random_seed: None,
        }
    }
}

impl AnimationConfig {
    /// Get total pixel count (width * height).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.rows.len() > self.height {
            return Err(ConfigError::TooManyRows {
                rows: self.rows.len(),
                height: self.height,
            });
        }

        let width = self.width as i32;
        for (i, row) in self.rows.iter().enumerate() {
            if row.length == 0 {
                return Err(ConfigError::EmptyRow { row: i });
            }
            // Either of these alone guarantees the row cannot fit.
            if row.length as usize > self.width || row.offset.unsigned_abs() as usize > self.width
            {
                return Err(ConfigError::RowOutOfBounds {
                    row: i,
                    length: row.length,
                    offset: row.offset,
                });
            }
            let (left, right) = row_span(width, row.length, row.offset);
            if left < 0 || right > width {
                return Err(ConfigError::RowOutOfBounds {
                    row: i,
                    length: row.length,
                    offset: row.offset,
                });
            }
        }

        for (i, pair) in self.rows.windows(2).enumerate() {
            if (pair[0].offset - pair[1].offset).abs() > 1 {
                return Err(ConfigError::MisalignedRows {
                    upper: i,
                    lower: i + 1,
                });
            }
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Canvas dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Canvas {width}x{height} exceeds the 65535 pixel GIF limit")]
    DimensionsTooLarge { width: usize, height: usize },
    #[error("{rows} rows do not fit on a canvas {height} pixels tall")]
    TooManyRows { rows: usize, height: usize },
    #[error("Row {row} has zero length")]
    EmptyRow { row: usize },
    #[error("Row {row} (length {length}, offset {offset}) does not fit on the canvas")]
    RowOutOfBounds { row: usize, length: u32, offset: i32 },
    #[error("Rows {upper} and {lower} start more than one column apart")]
    MisalignedRows { upper: usize, lower: usize },
}
