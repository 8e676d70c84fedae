use validator::{Validate, ValidationError};

fn validate_schedule(s: &TemperatureSchedule) -> Result<(), ValidationError> {
    if s.num_pts < 1 {
        return Err(ValidationError::new("schedule num_pts must be >= 1"));
    }
    if !s.t_min.is_finite() || !s.t_max.is_finite() {
        return Err(ValidationError::new("schedule bounds must be finite"));
    }
    if s.t_min <= 0.0 {
        return Err(ValidationError::new("schedule t_min must be > 0"));
    }
    if s.num_pts >= 2 && s.t_max <= s.t_min {
        return Err(ValidationError::new(
            "schedule t_max must be > t_min when num_pts >= 2",
        ));
    }
    Ok(())
}

/// Linearly spaced temperatures on `[t_min, t_max]`, endpoints included.
#[derive(Debug, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_schedule"))]
pub struct TemperatureSchedule {
    pub t_min: f64,
    pub t_max: f64,
    pub num_pts: usize,
}

impl TemperatureSchedule {
    pub fn linspace(t_min: f64, t_max: f64, num_pts: usize) -> Self {
        Self {
            t_min,
            t_max,
            num_pts,
        }
    }

    /// Materialize the schedule. The last entry is exactly `t_max`.
    pub fn values(&self) -> Vec<f64> {
        let n = self.num_pts;
        if n == 1 {
            return vec![self.t_min];
        }
        let step = (self.t_max - self.t_min) / (n - 1) as f64;
        (0..n)
            .map(|k| {
                if k == n - 1 {
                    self.t_max
                } else {
                    self.t_min + k as f64 * step
                }
            })
            .collect()
    }
}

impl Default for TemperatureSchedule {
    fn default() -> Self {
        Self::linspace(0.01, 5.0, 40)
    }
}
