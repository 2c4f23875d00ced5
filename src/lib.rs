//! Inkwalk turns a raster image into an ordered list of pen-stroke line
//! segments that replay as a hand-sketched reveal.
//!
//! A generation pass plants strokes on dark, uncovered pixels and walks each
//! one across the image's dark regions, so cumulative rendering reads as a
//! pen sketching the picture rather than a pixel fill. The pipeline:
//!
//! - Decode an image into a [`PixelBuffer`]
//! - [`generate`] a [`SketchPlan`] of ordered [`Segment`]s (deterministic
//!   per seed)
//! - Pace the reveal with a [`PlaybackSchedule`]
//! - Rasterize any prefix with [`render_segments`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Input-side asset handling (image decoding).
pub mod assets;
/// Per-pixel brightness map and dark-point collection.
pub mod brightness;
/// Validated RGBA pixel buffer input.
pub mod buffer;
/// Tunable generation parameters.
pub mod config;
/// Monotonic inked-pixel coverage map.
pub mod coverage;
/// The stroke path generator.
pub mod generate;
/// Serializable sketch plan document.
pub mod plan;
/// Fixed-rate reveal pacing.
pub mod playback;
/// CPU rasterization of segment lists.
pub mod render_cpu;

pub use crate::foundation::core::{Canvas, Fps, Point, Segment, Vec2};
pub use crate::foundation::error::{InkwalkError, InkwalkResult};

pub use crate::buffer::PixelBuffer;
pub use crate::config::SketchConfig;
pub use crate::generate::{GenerateStats, generate, generate_with_stats};
pub use crate::plan::SketchPlan;
pub use crate::playback::PlaybackSchedule;
pub use crate::render_cpu::{FrameRGBA, RenderOpts, render_segments};
