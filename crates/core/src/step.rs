/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait enables generic fixed-step integrators to work with
/// the type by stepping it via `state + derivative * delta`, where the
/// derivative is with respect to `Delta`.
///
/// Multi-stage methods like RK4 call [`step`](Self::step) once per stage with
/// a fractional step size, so an implementation must not assume that `delta`
/// is the full step of the surrounding loop.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}
