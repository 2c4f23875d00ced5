use std::path::Path;

use anyhow::Context;

use crate::InkwalkResult;
use crate::buffer::PixelBuffer;

/// Decode image bytes (any format `image` supports) into a [`PixelBuffer`].
pub fn decode_image(bytes: &[u8]) -> InkwalkResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    PixelBuffer::from_image(dyn_img.to_rgba8())
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> InkwalkResult<PixelBuffer> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes)
}
