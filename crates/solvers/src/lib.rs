//! Fixed-step integration and closed-loop simulation.
//!
//! - [`rk4`] — one classic Runge-Kutta step for any [`StepIntegrable`] state
//! - [`closed_loop`] — couples a [`Controller`] to the glucose-insulin model
//! - [`open_loop`] — integrates the model with no insulin delivery
//!
//! Both simulators advance time by repeatedly adding `dt` and keep ticking
//! while the accumulated time is at most the configured duration. See
//! [`Config`] for the consequences of that rule.
//!
//! [`StepIntegrable`]: glysim_core::StepIntegrable
//! [`Controller`]: glysim_core::Controller

mod config;

pub mod closed_loop;
pub mod open_loop;
pub mod rk4;

#[cfg(test)]
mod test_utils;

pub use config::{Config, ConfigError};
