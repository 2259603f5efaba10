//! Core traits and types for closed-loop glucose-insulin simulation.
//!
//! This crate defines the shared abstractions that models, controllers, and
//! solvers build on:
//!
//! - [`StepIntegrable`] — a state that can be advanced by a derivative and a step size
//! - [`Controller`] — a stateful feedback policy mapping an [`Observation`] to an [`Action`]
//! - [`Observer`] — receives solver events and optionally returns control actions

mod control;
mod observer;
mod step;

pub use control::{Action, Controller, Observation};
pub use observer::Observer;
pub use step::{DerivativeOf, StepIntegrable};
