/// A simulated continuous glucose monitor reading.
///
/// An observation is a read-only snapshot taken from the model state at the
/// start of a tick. It does not borrow the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Glucose value seen by the controller.
    pub cgm: f64,
}

impl Observation {
    /// Creates an observation from a glucose reading.
    #[must_use]
    pub fn new(cgm: f64) -> Self {
        Self { cgm }
    }
}

/// Insulin delivery requested by a [`Controller`].
///
/// Closed-loop simulation only applies the `basal` rate. A `bolus` is carried
/// for controllers that request one-time doses.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Action {
    /// Continuous infusion rate.
    pub basal: f64,

    /// One-time dose.
    pub bolus: f64,
}

impl Action {
    /// Creates an action with only a basal component.
    #[must_use]
    pub fn basal(rate: f64) -> Self {
        Self {
            basal: rate,
            bolus: 0.0,
        }
    }
}

/// A stateful feedback policy that decides insulin delivery.
///
/// A controller owns whatever memory it needs between calls and mutates it on
/// every [`policy`](Self::policy) call. Each run must use its own controller;
/// sharing one across concurrent runs is unsupported.
///
/// # Default Implementation
///
/// The unit type `()` implements [`Controller`] as a no-insulin policy that
/// always returns a zero [`Action`].
pub trait Controller {
    /// Computes the action for the current observation.
    ///
    /// `sample_time` is the time elapsed since the previous call and must be
    /// strictly positive.
    fn policy(&mut self, observation: &Observation, sample_time: f64) -> Action;

    /// Clears accumulated history.
    ///
    /// After a reset the next [`policy`](Self::policy) call must behave exactly
    /// like the first call on a freshly constructed controller.
    fn reset(&mut self);
}

impl Controller for () {
    fn policy(&mut self, _observation: &Observation, _sample_time: f64) -> Action {
        Action::default()
    }

    fn reset(&mut self) {}
}

impl<C: Controller + ?Sized> Controller for &mut C {
    fn policy(&mut self, observation: &Observation, sample_time: f64) -> Action {
        (**self).policy(observation, sample_time)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
