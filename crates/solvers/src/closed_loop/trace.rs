use glysim_model::State;

/// Time-aligned results of a closed-loop run.
///
/// `time`, `glucose`, and `insulin` always have the same length. Entry `k`
/// holds the tick time, the plasma glucose read before that tick's integration
/// step, and the clamped insulin rate applied during the step.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Accumulated tick times.
    pub time: Vec<f64>,

    /// Plasma glucose observed at each tick.
    pub glucose: Vec<f64>,

    /// Clamped insulin rate applied over each tick.
    pub insulin: Vec<f64>,

    /// State after the last integration step.
    pub final_state: State,
}

impl Trace {
    pub(crate) fn with_capacity(capacity: usize, initial: State) -> Self {
        Self {
            time: Vec::with_capacity(capacity),
            glucose: Vec::with_capacity(capacity),
            insulin: Vec::with_capacity(capacity),
            final_state: initial,
        }
    }

    pub(crate) fn record(&mut self, time: f64, glucose: f64, insulin: f64) {
        self.time.push(time);
        self.glucose.push(glucose);
        self.insulin.push(insulin);
    }

    /// Returns the number of recorded ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Iterates over `(time, glucose, insulin)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.time
            .iter()
            .zip(&self.glucose)
            .zip(&self.insulin)
            .map(|((t, g), u)| (*t, *g, *u))
    }
}
