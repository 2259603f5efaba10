//! Classic fixed-step 4th-order Runge-Kutta.
//!
//! One step evaluates the derivative four times,
//!
//! ```text
//! k1 = f(t,          x,               p, u)
//! k2 = f(t + dt / 2, x + dt / 2 * k1, p, u)
//! k3 = f(t + dt / 2, x + dt / 2 * k2, p, u)
//! k4 = f(t + dt,     x + dt * k3,     p, u)
//! ```
//!
//! and returns `x + dt / 6 * (k1 + 2 k2 + 2 k3 + k4)`. The control input `u`
//! is held constant across the four stages. There is no error estimate and no
//! step rejection.

use std::ops::{Add, Mul};

use glysim_core::{DerivativeOf, StepIntegrable};

/// Advances `state` by one RK4 step of size `dt`.
///
/// `derivative` has the signature of a model evaluation:
/// `(time, state, parameters, control_input) -> derivative`. The same
/// `params` and `control` are passed to every stage.
///
/// The result depends only on the arguments, so repeated calls with the same
/// inputs return identical states.
///
/// # Example
///
/// ```
/// use glysim_solvers::rk4;
///
/// // dx/dt = u, exact for any step size.
/// let next = rk4::step(|_t, _x: &f64, _p: &(), u| u, 0.0, &1.0, 0.75, &(), 4.0);
/// assert_eq!(next, 4.0);
/// ```
#[must_use]
pub fn step<S, P, F>(derivative: F, time: f64, state: &S, dt: f64, params: &P, control: f64) -> S
where
    S: StepIntegrable<f64>,
    DerivativeOf<S, f64>: Clone
        + Add<Output = DerivativeOf<S, f64>>
        + Mul<f64, Output = DerivativeOf<S, f64>>,
    F: Fn(f64, &S, &P, f64) -> DerivativeOf<S, f64>,
{
    let half = dt / 2.0;

    let k1 = derivative(time, state, params, control);
    let k2 = derivative(time + half, &state.step(k1.clone(), half), params, control);
    let k3 = derivative(time + half, &state.step(k2.clone(), half), params, control);
    let k4 = derivative(time + dt, &state.step(k3.clone(), dt), params, control);

    state.step(k1 + k2 * 2.0 + k3 * 2.0 + k4, dt / 6.0)
}
