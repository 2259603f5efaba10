//! Insulin controllers for closed-loop simulation.
//!
//! Every controller implements [`glysim_core::Controller`], so the closed-loop
//! simulator can swap one control law for another without changes.
//!
//! - [`Pid`] — proportional-integral-derivative control toward a glucose target

mod pid;

pub use pid::{Gains, Pid};
