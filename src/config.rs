use crate::foundation::error::{InkwalkError, InkwalkResult};

/// Tunable parameters of a generation pass.
///
/// The cost weights, candidate count, and off-ink tolerance are empirically
/// tuned for visual appeal rather than derived from a model; treat the
/// defaults as a starting point, not invariants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Brightness below this counts as ink (0..=255).
    pub dark_threshold: u8,
    /// Walk step length in pixels.
    pub step_len: f64,
    /// Hard cap on strokes planted per pass; circuit breaker against
    /// runaway generation on pathological inputs.
    pub max_strokes: u32,
    /// Per-stroke step budget is drawn uniformly from `[steps_min, steps_max)`.
    pub steps_min: u32,
    /// Exclusive upper bound of the step budget.
    pub steps_max: u32,
    /// Base line width is drawn uniformly from `[width_min, width_max)`.
    pub width_min: f64,
    /// Exclusive upper bound of the base line width.
    pub width_max: f64,
    /// Number of headings sampled per step, spread over the full circle.
    pub candidate_headings: u32,
    /// Cost per radian of deviation from the current heading.
    pub turn_penalty: f64,
    /// Flat cost for stepping onto an already covered pixel.
    pub coverage_penalty: f64,
    /// Consecutive light landings tolerated before the pen lifts.
    pub off_ink_limit: u32,
    /// Uniform heading noise amplitude in radians, applied after the
    /// winning candidate is chosen.
    pub heading_jitter: f64,
    /// Minimum of the half-sine pressure curve, in (0, 1].
    pub pressure_floor: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            dark_threshold: 128,
            step_len: 3.0,
            max_strokes: 3000,
            steps_min: 50,
            steps_max: 200,
            width_min: 5.0,
            width_max: 9.0,
            candidate_headings: 12,
            turn_penalty: 30.0,
            coverage_penalty: 150.0,
            off_ink_limit: 6,
            heading_jitter: 0.05,
            pressure_floor: 0.4,
        }
    }
}

impl SketchConfig {
    /// Reject contradictory or non-finite parameters.
    pub fn validate(&self) -> InkwalkResult<()> {
        if !(self.step_len.is_finite() && self.step_len > 0.0) {
            return Err(InkwalkError::validation("step_len must be finite and > 0"));
        }
        if self.max_strokes == 0 {
            return Err(InkwalkError::validation("max_strokes must be > 0"));
        }
        if self.steps_min == 0 || self.steps_min > self.steps_max {
            return Err(InkwalkError::validation(
                "step budget requires 0 < steps_min <= steps_max",
            ));
        }
        if !(self.width_min.is_finite() && self.width_max.is_finite())
            || self.width_min <= 0.0
            || self.width_min > self.width_max
        {
            return Err(InkwalkError::validation(
                "line width requires 0 < width_min <= width_max, finite",
            ));
        }
        if self.candidate_headings == 0 {
            return Err(InkwalkError::validation("candidate_headings must be > 0"));
        }
        if !(self.turn_penalty.is_finite() && self.turn_penalty >= 0.0) {
            return Err(InkwalkError::validation(
                "turn_penalty must be finite and >= 0",
            ));
        }
        if !(self.coverage_penalty.is_finite() && self.coverage_penalty >= 0.0) {
            return Err(InkwalkError::validation(
                "coverage_penalty must be finite and >= 0",
            ));
        }
        if !(self.heading_jitter.is_finite() && self.heading_jitter >= 0.0) {
            return Err(InkwalkError::validation(
                "heading_jitter must be finite and >= 0",
            ));
        }
        if !self.pressure_floor.is_finite()
            || self.pressure_floor <= 0.0
            || self.pressure_floor > 1.0
        {
            return Err(InkwalkError::validation("pressure_floor must be in (0, 1]"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        SketchConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_bad_ranges() {
        let bad = [
            SketchConfig {
                steps_min: 300,
                ..Default::default()
            },
            SketchConfig {
                width_min: 0.0,
                ..Default::default()
            },
            SketchConfig {
                step_len: f64::NAN,
                ..Default::default()
            },
            SketchConfig {
                pressure_floor: 1.5,
                ..Default::default()
            },
            SketchConfig {
                candidate_headings: 0,
                ..Default::default()
            },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: SketchConfig = serde_json::from_str(r#"{"max_strokes": 10}"#).unwrap();
        assert_eq!(c.max_strokes, 10);
        assert_eq!(c.dark_threshold, 128);
        assert_eq!(c.step_len, 3.0);
    }
}
