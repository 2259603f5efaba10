//! Type 1 diabetes variant of the Dalla Man glucose-insulin model.
//!
//! The model is a pure derivative function over a fixed 12-compartment
//! [`State`]. Pancreatic insulin secretion is absent; insulin enters only
//! through two subcutaneous depots driven by an exogenous infusion rate.
//!
//! - [`State`] and [`Rates`] — the ordered state vector and its time derivative
//! - [`Parameters`] — the named physiological constants of one patient
//! - [`derivative`] and [`Fluxes`] — the model equations

mod dalla_man;
mod error;
mod parameters;
mod state;

pub use dalla_man::{
    Fluxes, KA1, KA2, KD, LIQUID_EMPTYING_RATE, derivative, open_loop_derivative,
};
pub use error::ParameterError;
pub use parameters::Parameters;
pub use state::{Rates, STATE_LEN, State};
