use glysim_model::State;

/// Event emitted by the closed-loop simulator once per tick.
///
/// The event describes the tick before its integration step: `state` is the
/// state the controller observed and `insulin` is the rate about to be held
/// over the step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Tick number, starting at 0.
    pub step: usize,

    /// Accumulated simulation time.
    pub time: f64,

    /// State before the integration step.
    pub state: &'a State,

    /// Basal rate returned by the controller.
    pub requested: f64,

    /// Rate actually applied, after clamping at zero.
    pub insulin: f64,
}

impl Event<'_> {
    /// Returns the observed plasma glucose.
    #[must_use]
    pub fn glucose(&self) -> f64 {
        self.state.plasma_glucose()
    }

    /// Returns `true` if the controller asked for negative insulin.
    #[must_use]
    pub fn was_clamped(&self) -> bool {
        self.insulin != self.requested
    }
}
