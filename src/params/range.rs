//! Slider ranges for the debug panel.

/// Inclusive numeric range with a step, as exposed by one panel slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Clamp into `[min, max]` and snap to the nearest step counted from `min`.
    ///
    /// NaN maps to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        let value = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return value;
        }
        // Decimal steps (0.05, 0.01, ...) divide by their integral inverse so
        // that values already on a step come back bit-identical.
        let inverse = 1.0 / self.step as f64;
        let steps = ((value - self.min) as f64 * inverse).round();
        let offset = if (inverse - inverse.round()).abs() < 1e-3 {
            steps / inverse.round()
        } else {
            steps * self.step as f64
        };
        ((self.min as f64 + offset) as f32).min(self.max)
    }
}

/// Panel ranges per parameter
pub mod ranges {
    use super::ParamRange;

    pub const BIG_WAVE_ELEVATION: ParamRange = ParamRange::new(0.0, 1.0, 0.05);
    pub const BIG_WAVE_FREQUENCY: ParamRange = ParamRange::new(0.0, 10.0, 0.05);
    pub const BIG_WAVE_SPEED: ParamRange = ParamRange::new(0.0, 10.0, 0.05);

    pub const SMALL_WAVE_ELEVATION: ParamRange = ParamRange::new(0.0, 1.0, 0.01);
    pub const SMALL_WAVE_FREQUENCY: ParamRange = ParamRange::new(0.0, 30.0, 0.1);
    pub const SMALL_WAVE_SPEED: ParamRange = ParamRange::new(0.0, 4.0, 0.05);

    /// Cost scales linearly with the iteration count
    pub const MAX_SMALL_WAVE_ITERATIONS: u32 = 10;

    pub const COLOR_OFFSET: ParamRange = ParamRange::new(0.0, 1.0, 0.01);
    pub const COLOR_MULTIPLIER: ParamRange = ParamRange::new(0.0, 10.0, 0.2);

    pub const FOG_DISTANCE: ParamRange = ParamRange::new(0.0, 100.0, 0.1);
    pub const FOG_DENSITY: ParamRange = ParamRange::new(0.0, 2.0, 0.01);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        let range = ParamRange::new(0.0, 10.0, 0.2);
        assert_eq!(range.clamp(-3.0), 0.0);
        assert_eq!(range.clamp(42.0), 10.0);
        assert_eq!(range.clamp(f32::INFINITY), 10.0);
        assert_eq!(range.clamp(f32::NAN), 0.0);
    }

    #[test]
    fn test_clamp_snaps_to_step() {
        let range = ParamRange::new(0.0, 1.0, 0.05);
        assert!((range.clamp(0.17) - 0.15).abs() < 1e-6);
        assert!((range.clamp(0.18) - 0.2).abs() < 1e-6);

        // Steps count from min, not from zero
        let offset = ParamRange::new(0.5, 2.0, 1.0);
        assert_eq!(offset.clamp(1.2), 1.5);
    }

    #[test]
    fn test_zero_step_only_clamps() {
        let range = ParamRange::new(0.0, 1.0, 0.0);
        assert_eq!(range.clamp(0.123), 0.123);
    }
}
