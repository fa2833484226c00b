use std::io::{self, Write};

use voxspace_core::types::Rgb;

/// Caller-owned RGB pixel grid, stored row-major (`y * width + x`).
///
/// The renderer overwrites every pixel on each call; nothing from a previous
/// frame survives.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    /// Allocate a black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Paint rows `top..bottom` of column `x`.
    #[inline]
    pub(crate) fn fill_column(&mut self, x: usize, top: usize, bottom: usize, color: Rgb) {
        let stride = self.width as usize;
        for y in top..bottom {
            self.pixels[y * stride + x] = color;
        }
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Packed RGB8 bytes, row-major, ready for texture upload or image export.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// First row (from the top) of column `x` whose pixel differs from `sky`,
    /// or `height` if the whole column is sky.
    pub fn column_threshold(&self, x: u32, sky: Rgb) -> u32 {
        (0..self.height)
            .find(|&y| self.get(x, y) != sky)
            .unwrap_or(self.height)
    }

    /// Write the buffer as a binary PPM (P6) image.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        out.write_all(self.as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.size(), (4, 3));
        assert_eq!(fb.pixels().len(), 12);
        assert!(fb.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_set_get_row_major() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.set(1, 2, Rgb::new(1, 2, 3));
        assert_eq!(fb.get(1, 2), Rgb::new(1, 2, 3));
        assert_eq!(fb.pixels()[2 * 4 + 1], Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_fill_column_span() {
        let mut fb = FrameBuffer::new(3, 5);
        fb.fill_column(1, 2, 4, Rgb::new(9, 9, 9));
        for y in 0..5 {
            let expected = if (2..4).contains(&y) {
                Rgb::new(9, 9, 9)
            } else {
                Rgb::BLACK
            };
            assert_eq!(fb.get(1, y), expected, "row {y}");
            assert_eq!(fb.get(0, y), Rgb::BLACK);
            assert_eq!(fb.get(2, y), Rgb::BLACK);
        }
    }

    #[test]
    fn test_column_threshold() {
        let sky = Rgb::new(1, 1, 1);
        let mut fb = FrameBuffer::new(2, 4);
        fb.fill(sky);
        assert_eq!(fb.column_threshold(0, sky), 4);
        fb.fill_column(0, 3, 4, Rgb::BLACK);
        assert_eq!(fb.column_threshold(0, sky), 3);
        assert_eq!(fb.column_threshold(1, sky), 4);
    }

    #[test]
    fn test_as_bytes() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set(0, 0, Rgb::new(10, 20, 30));
        fb.set(1, 0, Rgb::new(40, 50, 60));
        assert_eq!(fb.as_bytes(), &[10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_write_ppm() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.fill(Rgb::new(7, 8, 9));
        let mut out = Vec::new();
        fb.write_ppm(&mut out).unwrap();
        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[7, 8, 9, 7, 8, 9]);
        assert_eq!(out, expected);
    }
}
