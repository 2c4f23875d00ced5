use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Context;

use crate::foundation::core::{Canvas, Segment};
use crate::foundation::error::{InkwalkError, InkwalkResult};

/// The output document of a generation pass: canvas dimensions, the seed
/// that produced it, and the ordered segment list.
///
/// JSON round-trippable; consumers replay `segments` in order.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SketchPlan {
    /// Dimensions of the source image, which is also the coordinate space
    /// of every segment.
    pub canvas: Canvas,
    /// Seed the plan was generated with.
    pub seed: u64,
    /// Segments in emission order.
    pub segments: Vec<Segment>,
}

impl SketchPlan {
    /// Reject structurally broken plans: zero canvas, non-finite or
    /// out-of-bounds endpoints, non-positive widths.
    pub fn validate(&self) -> InkwalkResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(InkwalkError::validation("canvas width/height must be > 0"));
        }
        let w = f64::from(self.canvas.width);
        let h = f64::from(self.canvas.height);
        for (i, seg) in self.segments.iter().enumerate() {
            let coords = [seg.x1, seg.y1, seg.x2, seg.y2];
            if coords.iter().any(|c| !c.is_finite()) {
                return Err(InkwalkError::validation(format!(
                    "segment {i} has non-finite coordinates"
                )));
            }
            let in_bounds = |x: f64, y: f64| x >= 0.0 && x < w && y >= 0.0 && y < h;
            if !in_bounds(seg.x1, seg.y1) || !in_bounds(seg.x2, seg.y2) {
                return Err(InkwalkError::validation(format!(
                    "segment {i} lies outside the {w}x{h} canvas"
                )));
            }
            if !(seg.line_width.is_finite() && seg.line_width > 0.0) {
                return Err(InkwalkError::validation(format!(
                    "segment {i} line_width must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    /// Read and validate a plan from a JSON file.
    pub fn from_path(path: &Path) -> InkwalkResult<Self> {
        let f =
            File::open(path).with_context(|| format!("open sketch plan '{}'", path.display()))?;
        let plan: SketchPlan = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| InkwalkError::serde(format!("parse sketch plan JSON: {e}")))?;
        plan.validate()?;
        Ok(plan)
    }

    /// Write the plan as pretty-printed JSON.
    pub fn write_to_path(&self, path: &Path) -> InkwalkResult<()> {
        let f = File::create(path)
            .with_context(|| format!("create sketch plan '{}'", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(f), self)
            .map_err(|e| InkwalkError::serde(format!("write sketch plan JSON: {e}")))?;
        Ok(())
    }
}
