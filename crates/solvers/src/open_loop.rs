//! Open-loop simulation with no insulin delivery.
//!
//! Uses the same model and integrator as [`closed_loop`](crate::closed_loop)
//! with the infusion rate fixed at zero, and records the full state at every
//! tick instead of a glucose/insulin trace.

use glysim_model::{Parameters, State, derivative};

use crate::{Config, rk4};

/// States recorded by an open-loop run.
///
/// Entry `k` of `states` is the state at `time[k]`, before that tick's
/// integration step.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    /// Accumulated tick times.
    pub time: Vec<f64>,

    /// Full state at each tick.
    pub states: Vec<State>,

    /// State after the last integration step.
    pub final_state: State,
}

impl History {
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

    /// Returns one compartment over time.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid compartment index.
    #[must_use]
    pub fn compartment(&self, index: usize) -> Vec<f64> {
        self.states.iter().map(|state| state[index]).collect()
    }
}

/// Runs the model forward without a controller.
#[must_use]
pub fn simulate(params: &Parameters, initial: State, config: &Config) -> History {
    let dt = config.dt();
    log::debug!(
        "open-loop run: duration={}, dt={dt}, meal={}",
        config.duration(),
        initial.stomach_solid()
    );

    let capacity = config.tick_hint();
    let mut time = Vec::with_capacity(capacity);
    let mut states = Vec::with_capacity(capacity);
    let mut state = initial;

    for t in config.ticks() {
        time.push(t);
        states.push(state);
        state = rk4::step(derivative, t, &state, dt, params, 0.0);
    }

    log::debug!("open-loop run finished: {} ticks", time.len());

    History {
        time,
        states,
        final_state: state,
    }
}
