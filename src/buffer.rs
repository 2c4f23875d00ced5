use crate::foundation::core::Canvas;
use crate::foundation::error::{InkwalkError, InkwalkResult};

/// A decoded raster image: straight-alpha RGBA8, row-major, top-to-bottom.
///
/// Immutable for the duration of a generation pass. Construction is the
/// boundary where malformed input is rejected; everything downstream may
/// index without re-checking lengths.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer, validating dimensions against the byte length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> InkwalkResult<Self> {
        if width == 0 || height == 0 {
            return Err(InkwalkError::validation(
                "pixel buffer width/height must be > 0",
            ));
        }
        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| InkwalkError::validation("pixel buffer size overflow"))?;
        if data.len() != expected_len {
            return Err(InkwalkError::validation(format!(
                "pixel buffer expects {expected_len} bytes (width*height*4), got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Adapt a decoded `image` buffer.
    pub fn from_image(img: image::RgbaImage) -> InkwalkResult<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Raw RGBA8 bytes, tightly packed.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGBA of the pixel at in-bounds integer coordinates.
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);
        let off = ((y as usize * self.width as usize) + x as usize) * 4;
        [
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        ]
    }
}
