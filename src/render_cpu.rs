use crate::foundation::core::{Canvas, Segment};
use crate::foundation::error::{InkwalkError, InkwalkResult};

/// A rendered frame as RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha. With the default opaque
    /// background and ink this makes no numeric difference.
    pub premultiplied: bool,
}

/// Colors for segment rasterization.
#[derive(Clone, Copy, Debug)]
pub struct RenderOpts {
    /// Background fill, RGBA8.
    pub background_rgba: [u8; 4],
    /// Stroke color, RGBA8.
    pub ink_rgba: [u8; 4],
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            background_rgba: [255, 255, 255, 255],
            ink_rgba: [0, 0, 0, 255],
        }
    }
}

/// Rasterize `segments` onto an opaque canvas with round caps and joins,
/// each segment stroked at its own `line_width`.
///
/// Passing a prefix of a plan's segment list renders one playback frame;
/// passing the whole list renders the finished sketch. Canvas dimensions
/// beyond `u16::MAX` exceed the pixmap limit and are rejected.
pub fn render_segments(
    canvas: Canvas,
    segments: &[Segment],
    opts: &RenderOpts,
) -> InkwalkResult<FrameRGBA> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(InkwalkError::validation("canvas width/height must be > 0"));
    }
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| InkwalkError::render("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| InkwalkError::render("canvas height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);

    let bg = opts.background_rgba;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        bg[0], bg[1], bg[2], bg[3],
    ));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(canvas.width),
        f64::from(canvas.height),
    ));

    let ink = opts.ink_rgba;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        ink[0], ink[1], ink[2], ink[3],
    ));
    for seg in segments {
        let stroke = vello_cpu::kurbo::Stroke::new(seg.line_width)
            .with_caps(vello_cpu::kurbo::Cap::Round)
            .with_join(vello_cpu::kurbo::Join::Round);
        ctx.set_stroke(stroke);

        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to((seg.x1, seg.y1));
        path.line_to((seg.x2, seg.y2));
        ctx.stroke_path(&path);
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}
