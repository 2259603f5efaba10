/// Observes solver events and optionally returns a control action.
///
/// Solvers emit an event at well-defined points of a run. What an observer is
/// allowed to do in response is decided by the solver through its action type
/// `A`. A solver that must always run to completion uses
/// [`Infallible`](std::convert::Infallible), so the only value an observer can
/// return is `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
