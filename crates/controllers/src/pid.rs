use glysim_core::{Action, Controller, Observation};

/// Gains of a [`Pid`] controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gains {
    /// Proportional gain.
    pub p: f64,

    /// Integral gain.
    pub i: f64,

    /// Derivative gain.
    pub d: f64,
}

/// A discrete PID controller driving glucose toward a target.
///
/// Each [`policy`](Controller::policy) call computes
///
/// ```text
/// basal = P * (bg - target) + I * integral + D * (bg - previous) / sample_time
/// ```
///
/// and only then updates its memory: `previous` becomes `bg` and `integral`
/// grows by `(bg - target) * sample_time`. The integral used in a call therefore
/// covers strictly earlier calls (a left-endpoint Riemann sum), and the
/// derivative is a backward difference against the previous call.
///
/// Both memories start at zero, so the first call after construction or
/// [`reset`](Controller::reset) sees `previous = 0` and produces a large
/// derivative transient whenever `D` is nonzero.
///
/// Gains and target are fixed for the lifetime of the controller.
///
/// # Example
///
/// ```
/// use glysim_controllers::Pid;
/// use glysim_core::{Controller, Observation};
///
/// let mut pid = Pid::new(1.0, 0.0, 0.0, 100.0);
/// let action = pid.policy(&Observation::new(150.0), 1.0);
/// assert_eq!(action.basal, 50.0);
/// assert_eq!(action.bolus, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pid {
    gains: Gains,
    target: f64,
    integral: f64,
    previous: f64,
}

impl Pid {
    /// Creates a controller with zeroed history.
    #[must_use]
    pub fn new(p: f64, i: f64, d: f64, target: f64) -> Self {
        Self {
            gains: Gains { p, i, d },
            target,
            integral: 0.0,
            previous: 0.0,
        }
    }

    /// Returns the controller gains.
    #[must_use]
    pub fn gains(&self) -> Gains {
        self.gains
    }

    /// Returns the glucose target.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns the accumulated integral of the tracking error.
    #[must_use]
    pub fn integral(&self) -> f64 {
        self.integral
    }

    /// Returns the glucose seen by the previous call, or zero after a reset.
    #[must_use]
    pub fn previous(&self) -> f64 {
        self.previous
    }
}

impl Default for Pid {
    /// Proportional-only control toward 140.
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0, 140.0)
    }
}

impl Controller for Pid {
    fn policy(&mut self, observation: &Observation, sample_time: f64) -> Action {
        let Gains { p, i, d } = self.gains;
        let bg = observation.cgm;

        let control_input = p * (bg - self.target)
            + i * self.integral
            + d * (bg - self.previous) / sample_time;

        self.previous = bg;
        self.integral += (bg - self.target) * sample_time;

        Action::basal(control_input)
    }

    fn reset(&mut self) {
        self.integral = 0.0;
        self.previous = 0.0;
    }
}
