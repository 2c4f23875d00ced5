use std::f64::consts::{PI, TAU};

use crate::brightness::BrightnessMap;
use crate::buffer::PixelBuffer;
use crate::config::SketchConfig;
use crate::coverage::CoverageMap;
use crate::foundation::core::{Canvas, Segment};
use crate::foundation::error::InkwalkResult;
use crate::foundation::math::{Rng64, angle_diff};
use crate::plan::SketchPlan;

/// Counters reported by a generation pass.
#[derive(Clone, Copy, Debug)]
pub struct GenerateStats {
    /// Pixels below the darkness threshold before any stroke was planted.
    pub dark_points: usize,
    /// Strokes planted (each contributes at least its seed segment).
    pub strokes: u32,
    /// Segments emitted in total.
    pub segments: usize,
    /// Dark points still uncovered when the pass ended. Zero means the image
    /// was fully inked before the stroke cap hit.
    pub residual_dark: usize,
}

/// Generate a sketch plan for `buffer`.
///
/// See [`generate_with_stats`] for the same pass with counters.
pub fn generate(
    buffer: &PixelBuffer,
    config: &SketchConfig,
    seed: u64,
) -> InkwalkResult<SketchPlan> {
    generate_with_stats(buffer, config, seed).map(|(plan, _)| plan)
}

/// Generate a sketch plan for `buffer`, returning pass counters alongside.
///
/// The pass is pure and deterministic: the same buffer, config, and seed
/// yield a byte-identical plan. An image with no dark pixels yields an empty
/// plan, not an error. Output order is the emission order and is meaningful
/// to consumers.
#[tracing::instrument(skip(buffer, config), fields(width = buffer.width(), height = buffer.height()))]
pub fn generate_with_stats(
    buffer: &PixelBuffer,
    config: &SketchConfig,
    seed: u64,
) -> InkwalkResult<(SketchPlan, GenerateStats)> {
    config.validate()?;

    let canvas = buffer.canvas();
    let mut rng = Rng64::new(seed);

    let brightness = BrightnessMap::from_buffer(buffer);
    let mut dark = brightness.dark_points(config.dark_threshold);
    let dark_points = dark.len();
    shuffle(&mut dark, &mut rng);

    let mut covered = CoverageMap::new(canvas.width, canvas.height);
    let mut segments = Vec::new();
    let mut cursor = 0usize;
    let mut strokes = 0u32;

    for _ in 0..config.max_strokes {
        // Next uncovered dark point becomes the stroke start. The cursor
        // only ever advances: each shuffled position is a candidate once.
        while cursor < dark.len()
            && covered.is_covered(f64::from(dark[cursor].0), f64::from(dark[cursor].1))
        {
            cursor += 1;
        }
        let Some(&(sx, sy)) = dark.get(cursor) else {
            break;
        };
        cursor += 1;
        strokes += 1;

        walk_stroke(
            &brightness,
            &mut covered,
            config,
            &mut rng,
            canvas,
            (sx, sy),
            &mut segments,
        );
    }

    let residual_dark = dark
        .iter()
        .filter(|&&(x, y)| !covered.is_covered(f64::from(x), f64::from(y)))
        .count();

    let stats = GenerateStats {
        dark_points,
        strokes,
        segments: segments.len(),
        residual_dark,
    };
    tracing::debug!(
        dark_points = stats.dark_points,
        strokes = stats.strokes,
        segments = stats.segments,
        residual_dark = stats.residual_dark,
        "sketch pass complete"
    );

    let plan = SketchPlan {
        canvas,
        seed,
        segments,
    };
    Ok((plan, stats))
}

/// One simulated pen motion: a seed mark at the start, then a directed
/// random walk that follows dark, uncovered pixels until its step budget
/// runs out or it wanders off the ink.
fn walk_stroke(
    brightness: &BrightnessMap,
    covered: &mut CoverageMap,
    config: &SketchConfig,
    rng: &mut Rng64,
    canvas: Canvas,
    start: (u32, u32),
    out: &mut Vec<Segment>,
) {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    let mut x = f64::from(start.0);
    let mut y = f64::from(start.1);
    let mut heading = rng.next_f64_01() * TAU;

    let step_span = f64::from(config.steps_max - config.steps_min);
    let max_steps = config.steps_min + (rng.next_f64_01() * step_span) as u32;
    let base_width = rng.next_f64_range(config.width_min, config.width_max);
    let mut off_ink = 0u32;

    // The seed mark guarantees every stroke leaves something visible even if
    // the walk lifts immediately.
    covered.mark_disc(x, y, base_width / 2.0);
    out.push(Segment {
        x1: x,
        y1: y,
        x2: x + 0.5,
        y2: y + 0.5,
        line_width: base_width,
    });

    for i in 0..max_steps {
        let t = f64::from(i) / f64::from(max_steps);
        let pressure = config.pressure_floor + (1.0 - config.pressure_floor) * (t * PI).sin();
        let line_width = base_width * pressure;
        let (prev_x, prev_y) = (x, y);

        // Sample headings over the full circle; prefer dark, uncovered,
        // forward-facing destinations. Candidates that would leave the
        // canvas are skipped; when all are skipped the heading is kept.
        let mut best_heading = heading;
        let mut best_score = f64::INFINITY;
        let n = config.candidate_headings;
        for a in 0..n {
            let candidate = heading + (f64::from(a) / f64::from(n)) * TAU - PI;
            let tx = x + candidate.cos() * config.step_len;
            let ty = y + candidate.sin() * config.step_len;
            if tx < 0.0 || tx >= w || ty < 0.0 || ty >= h {
                continue;
            }

            let mut score = f64::from(brightness.at(tx, ty))
                + angle_diff(heading, candidate).abs() * config.turn_penalty;
            if covered.is_covered(tx, ty) {
                score += config.coverage_penalty;
            }
            if score < best_score {
                best_score = score;
                best_heading = candidate;
            }
        }

        heading = best_heading + (rng.next_f64_01() - 0.5) * 2.0 * config.heading_jitter;
        x += heading.cos() * config.step_len;
        y += heading.sin() * config.step_len;
        // min-then-max keeps 1-2px canvases from producing a crossed clamp
        // range; positions pinned off-raster read as light and covered, so
        // the off-ink counter ends the stroke.
        x = x.min(w - 2.0).max(1.0);
        y = y.min(h - 2.0).max(1.0);

        if brightness.is_dark(x, y, config.dark_threshold) {
            off_ink = 0;
            covered.mark_disc(x, y, line_width / 2.0);
            out.push(Segment {
                x1: prev_x,
                y1: prev_y,
                x2: x,
                y2: y,
                line_width,
            });
        } else {
            off_ink += 1;
            if off_ink > config.off_ink_limit {
                break;
            }
        }
    }
}

/// Uniform Fisher-Yates shuffle so stroke starts are not raster-ordered,
/// which would read as a top-to-bottom fill during playback.
fn shuffle(points: &mut [(u32, u32)], rng: &mut Rng64) {
    for i in (1..points.len()).rev() {
        let j = rng.next_index(i + 1);
        points.swap(i, j);
    }
}
