//! Frame compositor - turns row state into a grayscale pixel buffer.

use super::Row;

/// Brightness palette cycled across lit pixels.
pub const COLOR_CYCLE: [u8; 8] = [150, 150, 200, 200, 90, 90, 60, 90];

/// A single RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Unlit background pixel.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Fully opaque gray of the given brightness.
    #[inline]
    pub const fn gray(brightness: u8) -> Self {
        Self {
            r: brightness,
            g: brightness,
            b: brightness,
            a: u8::MAX,
        }
    }

    #[inline]
    pub fn is_lit(&self) -> bool {
        self.a != 0
    }
}

/// Row-major pixel buffer for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Rgba>,
}

impl FrameBuffer {
    /// Fully transparent buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: Rgba) {
        self.pixels[y * self.width + x] = pixel;
    }

    /// Number of non-background pixels.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_lit()).count()
    }

    /// Pack as `[r, g, b, a, r, g, b, a, ...]` in row-major order.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect()
    }
}

/// Render the row stack for `frame`.
///
/// The palette cursor starts at `frame % 8` and advances once before every
/// lit pixel, carrying over from one row to the next, which gives the
/// diagonal shimmer. Row `i` is drawn on pixel row `i`.
pub fn render(rows: &[Row], frame: u64, width: usize, height: usize) -> FrameBuffer {
    let mut buffer = FrameBuffer::new(width, height);
    let mut cursor = (frame % COLOR_CYCLE.len() as u64) as usize;

    for (y, row) in rows.iter().enumerate().take(height) {
        let left = row.left(width as i32).max(0) as usize;
        let right = (row.right(width as i32).max(0) as usize).min(width);
        for x in left..right {
            cursor = (cursor + 1) % COLOR_CYCLE.len();
            buffer.set(x, y, Rgba::gray(COLOR_CYCLE[cursor]));
        }
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{MotionRng, RowSimulator};
    use crate::schema::AnimationConfig;

    #[test]
    fn test_palette_cycle_single_row() {
        let rows = [Row::new(6, 0)];
        let frame = render(&rows, 0, 8, 1);

        assert_eq!(frame.get(0, 0), Rgba::TRANSPARENT);
        assert_eq!(frame.get(7, 0), Rgba::TRANSPARENT);
        for x in 1..=6 {
            assert_eq!(frame.get(x, 0), Rgba::gray(COLOR_CYCLE[x]));
        }
        let brightness: Vec<u8> = (1..=6).map(|x| frame.get(x, 0).r).collect();
        assert_eq!(brightness, vec![150, 200, 200, 90, 90, 60]);
    }

    #[test]
    fn test_cursor_carries_across_rows() {
        let rows = [Row::new(6, 0), Row::new(5, 0)];
        let frame = render(&rows, 0, 8, 2);

        // Row 0 used cursor positions 1..=6, so row 1 starts at 7 and wraps.
        let second: Vec<u8> = (2..7).map(|x| frame.get(x, 1).r).collect();
        assert_eq!(
            second,
            vec![
                COLOR_CYCLE[7],
                COLOR_CYCLE[0],
                COLOR_CYCLE[1],
                COLOR_CYCLE[2],
                COLOR_CYCLE[3]
            ]
        );
    }

    #[test]
    fn test_frame_counter_shifts_palette() {
        let rows = [Row::new(1, 0)];
        for frame in 0..16u64 {
            let buffer = render(&rows, frame, 8, 1);
            let expected = COLOR_CYCLE[(frame as usize + 1) % COLOR_CYCLE.len()];
            assert_eq!(buffer.get(4, 0), Rgba::gray(expected));
        }
    }

    #[test]
    fn test_offset_moves_span() {
        let rows = [Row::new(2, -1)];
        let frame = render(&rows, 0, 8, 1);
        let lit: Vec<usize> = (0..8).filter(|&x| frame.get(x, 0).is_lit()).collect();
        assert_eq!(lit, vec![2, 3]);
    }

    #[test]
    fn test_lit_pixels_are_opaque_gray() {
        let config = AnimationConfig::default();
        let rows: Vec<Row> = config.rows.iter().map(Row::from).collect();
        let frame = render(&rows, 3, 8, 8);

        assert_eq!(frame.pixels.len(), 64);
        assert_eq!(frame.lit_count(), 6 + 6 + 5 + 5 + 4 + 3 + 2 + 1);
        for p in frame.pixels.iter().filter(|p| p.is_lit()) {
            assert_eq!(p.a, 255);
            assert_eq!(p.r, p.g);
            assert_eq!(p.g, p.b);
            assert!(COLOR_CYCLE.contains(&p.r));
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = AnimationConfig {
            random_seed: Some(8),
            ..Default::default()
        };
        let mut sim = RowSimulator::new(&config, MotionRng::new(8)).unwrap();
        for _ in 0..50 {
            sim.step();
        }
        let a = render(sim.rows(), sim.frame(), 8, 8);
        let b = render(sim.rows(), sim.frame(), 8, 8);
        assert_eq!(a, b);
        assert_eq!(a.to_rgba_bytes(), b.to_rgba_bytes());
    }

    #[test]
    fn test_rgba_bytes_layout() {
        let frame = render(&[Row::new(1, 0)], 0, 8, 1);
        let bytes = frame.to_rgba_bytes();
        assert_eq!(bytes.len(), 8 * 4);
        assert_eq!(&bytes[16..20], &[150, 150, 150, 255]);
        assert!(bytes[..16].iter().all(|&b| b == 0));
    }
}
