use crate::buffer::PixelBuffer;

/// Per-pixel brightness derived once from a [`PixelBuffer`]: the rounded,
/// unweighted average of the three color channels, alpha discarded.
///
/// Flat `y * width + x` layout. Read-only after construction.
#[derive(Clone, Debug)]
pub struct BrightnessMap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl BrightnessMap {
    /// Compute the brightness map for a buffer.
    pub fn from_buffer(buffer: &PixelBuffer) -> Self {
        let width = buffer.width();
        let height = buffer.height();
        let src = buffer.data();
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for px in src.chunks_exact(4) {
            let sum = u16::from(px[0]) + u16::from(px[1]) + u16::from(px[2]);
            // (sum + 1) / 3 == round(sum / 3); a /3 quotient never lands on .5.
            data.push(((sum + 1) / 3) as u8);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Brightness at real-valued coordinates, rounded to the nearest pixel.
    ///
    /// Out-of-bounds reads are fully light (255), so cost scoring never
    /// prefers a destination outside the canvas.
    pub fn at(&self, x: f64, y: f64) -> u8 {
        let ix = x.round();
        let iy = y.round();
        if ix < 0.0 || iy < 0.0 || ix >= f64::from(self.width) || iy >= f64::from(self.height) {
            return 255;
        }
        self.data[iy as usize * self.width as usize + ix as usize]
    }

    /// Whether the nearest pixel is darker than `threshold`.
    ///
    /// Out-of-bounds is never dark.
    pub fn is_dark(&self, x: f64, y: f64, threshold: u8) -> bool {
        self.at(x, y) < threshold
    }

    /// Coordinates of every pixel darker than `threshold`, raster order.
    pub fn dark_points(&self, threshold: u8) -> Vec<(u32, u32)> {
        let mut points = Vec::new();
        for y in 0..self.height {
            let row = y as usize * self.width as usize;
            for x in 0..self.width {
                if self.data[row + x as usize] < threshold {
                    points.push((x, y));
                }
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_1x2(top: [u8; 4], bottom: [u8; 4]) -> PixelBuffer {
        let mut data = Vec::new();
        data.extend_from_slice(&top);
        data.extend_from_slice(&bottom);
        PixelBuffer::new(1, 2, data).unwrap()
    }

    #[test]
    fn brightness_is_rounded_channel_average() {
        let buf = buffer_1x2([10, 20, 31, 0], [255, 255, 254, 255]);
        let map = BrightnessMap::from_buffer(&buf);
        // (10+20+31)/3 = 20.33 -> 20; (255+255+254)/3 = 254.67 -> 255
        assert_eq!(map.at(0.0, 0.0), 20);
        assert_eq!(map.at(0.0, 1.0), 255);
    }

    #[test]
    fn alpha_is_ignored() {
        let buf = buffer_1x2([0, 0, 0, 0], [0, 0, 0, 255]);
        let map = BrightnessMap::from_buffer(&buf);
        assert_eq!(map.at(0.0, 0.0), 0);
        assert_eq!(map.at(0.0, 1.0), 0);
    }

    #[test]
    fn out_of_bounds_reads_as_light() {
        let buf = buffer_1x2([0, 0, 0, 255], [0, 0, 0, 255]);
        let map = BrightnessMap::from_buffer(&buf);
        assert_eq!(map.at(-1.0, 0.0), 255);
        assert_eq!(map.at(0.0, 2.0), 255);
        assert!(!map.is_dark(0.6, 0.0, 128)); // rounds to x=1, off-raster
        assert!(map.is_dark(0.4, 0.0, 128));
    }

    #[test]
    fn dark_points_are_raster_ordered() {
        let buf = PixelBuffer::new(
            2,
            2,
            vec![
                0, 0, 0, 255, // (0,0) dark
                255, 255, 255, 255, // (1,0) light
                255, 255, 255, 255, // (0,1) light
                10, 10, 10, 255, // (1,1) dark
            ],
        )
        .unwrap();
        let map = BrightnessMap::from_buffer(&buf);
        assert_eq!(map.dark_points(128), vec![(0, 0), (1, 1)]);
        assert!(map.dark_points(0).is_empty());
    }
}
