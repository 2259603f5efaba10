use thiserror::Error;

/// Horizon and step size of a simulation run.
///
/// Ticks happen at `t = 0, dt, dt + dt, ...` for as long as the accumulated
/// time stays at or below `duration`. Because `t` is a running floating-point
/// sum, the number of ticks is `floor(duration / dt) + 1` only when the sum
/// rounds favorably: `duration = 10, dt = 1` gives 11 ticks and so does
/// `duration = 1, dt = 0.1`, but `duration = 0.3, dt = 0.1` gives 3 because
/// `0.1 + 0.1 + 0.1` exceeds `0.3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    duration: f64,
    dt: f64,
}

/// Errors that can occur when validating a simulation config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("duration must be finite and non-negative")]
    Duration,

    #[error("dt must be finite and positive")]
    StepSize,
}

impl Default for Config {
    /// A 600 minute run with a 0.1 minute step.
    fn default() -> Self {
        Self {
            duration: 600.0,
            dt: 0.1,
        }
    }
}

impl Config {
    const MAX_TICK_HINT: usize = 1 << 20;

    /// Creates a new config with a validated horizon and step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `duration` is negative or non-finite, or if `dt` is
    /// not strictly positive and finite.
    pub fn new(duration: f64, dt: f64) -> Result<Self, ConfigError> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(ConfigError::Duration);
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::StepSize);
        }

        Ok(Self { duration, dt })
    }

    /// Returns the simulated horizon.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns the step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the tick times of a run.
    pub(crate) fn ticks(&self) -> impl Iterator<Item = f64> + use<> {
        let Self { duration, dt } = *self;
        std::iter::successors(Some(0.0), move |t| Some(t + dt)).take_while(move |t| *t <= duration)
    }

    /// Returns a capacity hint for per-tick buffers.
    ///
    /// Capped at [`Self::MAX_TICK_HINT`]; longer runs grow their buffers.
    pub(crate) fn tick_hint(&self) -> usize {
        // Truncation is intended; the hint only has to be close.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = (self.duration / self.dt) as usize;
        whole.saturating_add(2).min(Self::MAX_TICK_HINT)
    }
}
