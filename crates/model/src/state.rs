use std::ops::{Add, Index, Mul};

use glysim_core::StepIntegrable;

/// Number of compartments in the model state.
pub const STATE_LEN: usize = 12;

/// One instant of the glucose-insulin system.
///
/// The compartments are stored in a fixed order that never changes:
///
/// | index | compartment |
/// |---|---|
/// | 0 | `Gp`, plasma glucose mass |
/// | 1 | `Gt`, tissue glucose mass |
/// | 2 | `Il`, liver insulin |
/// | 3 | `Ip`, plasma insulin |
/// | 4 | `Qsto1`, solid-phase stomach glucose |
/// | 5 | `Qsto2`, liquid-phase stomach glucose |
/// | 6 | `Qgut`, gut glucose |
/// | 7 | `I1`, delayed insulin signal (stage 1) |
/// | 8 | `Id`, delayed insulin signal (stage 2) |
/// | 9 | `X`, remote insulin action |
/// | 10 | `Isc1`, subcutaneous insulin depot 1 |
/// | 11 | `Isc2`, subcutaneous insulin depot 2 |
///
/// No units conversion happens anywhere in the model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State([f64; STATE_LEN]);

/// Time derivative of a [`State`], in the same compartment order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rates([f64; STATE_LEN]);

/// Generates an index constant, a getter, and a `with_*` builder per compartment.
macro_rules! compartments {
    ($($(#[$doc:meta])* $index:ident = $i:literal => $getter:ident, $setter:ident;)*) => {
        impl State {
            $(
                #[doc = concat!("Position of `", stringify!($getter), "` in the state vector.")]
                pub const $index: usize = $i;

                $(#[$doc])*
                #[must_use]
                pub fn $getter(&self) -> f64 {
                    self.0[$i]
                }

                #[doc = concat!("Returns `self` with `", stringify!($getter), "` replaced.")]
                #[must_use]
                pub fn $setter(mut self, value: f64) -> Self {
                    self.0[$i] = value;
                    self
                }
            )*
        }
    };
}

compartments! {
    /// Plasma glucose mass (`Gp`).
    PLASMA_GLUCOSE = 0 => plasma_glucose, with_plasma_glucose;
    /// Tissue glucose mass (`Gt`).
    TISSUE_GLUCOSE = 1 => tissue_glucose, with_tissue_glucose;
    /// Liver insulin (`Il`).
    LIVER_INSULIN = 2 => liver_insulin, with_liver_insulin;
    /// Plasma insulin (`Ip`).
    PLASMA_INSULIN = 3 => plasma_insulin, with_plasma_insulin;
    /// Solid-phase stomach glucose (`Qsto1`).
    STOMACH_SOLID = 4 => stomach_solid, with_stomach_solid;
    /// Liquid-phase stomach glucose (`Qsto2`).
    STOMACH_LIQUID = 5 => stomach_liquid, with_stomach_liquid;
    /// Gut glucose (`Qgut`).
    GUT_GLUCOSE = 6 => gut_glucose, with_gut_glucose;
    /// First delay stage of the insulin signal (`I1`).
    INSULIN_DELAY_1 = 7 => insulin_delay_1, with_insulin_delay_1;
    /// Second delay stage of the insulin signal (`Id`).
    INSULIN_DELAY_2 = 8 => insulin_delay_2, with_insulin_delay_2;
    /// Remote insulin action (`X`).
    REMOTE_INSULIN_ACTION = 9 => remote_insulin_action, with_remote_insulin_action;
    /// Subcutaneous insulin depot 1 (`Isc1`).
    SUBCUTANEOUS_1 = 10 => subcutaneous_1, with_subcutaneous_1;
    /// Subcutaneous insulin depot 2 (`Isc2`).
    SUBCUTANEOUS_2 = 11 => subcutaneous_2, with_subcutaneous_2;
}

impl State {
    /// Returns `self` with a carbohydrate load added to the solid stomach.
    ///
    /// The meal is added on top of whatever is already in the compartment.
    #[must_use]
    pub fn with_meal(self, carbohydrates: f64) -> Self {
        let solid = self.stomach_solid() + carbohydrates;
        self.with_stomach_solid(solid)
    }

    /// Returns the compartments in their fixed order.
    #[must_use]
    pub fn as_array(&self) -> &[f64; STATE_LEN] {
        &self.0
    }
}

impl From<[f64; STATE_LEN]> for State {
    fn from(values: [f64; STATE_LEN]) -> Self {
        Self(values)
    }
}

impl From<State> for [f64; STATE_LEN] {
    fn from(state: State) -> Self {
        state.0
    }
}

impl Index<usize> for State {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl StepIntegrable<f64> for State {
    type Derivative = Rates;

    fn step(&self, derivative: Rates, delta: f64) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + derivative.0[i] * delta))
    }
}

impl Rates {
    /// Returns the rates in the state's compartment order.
    #[must_use]
    pub fn as_array(&self) -> &[f64; STATE_LEN] {
        &self.0
    }
}

impl From<[f64; STATE_LEN]> for Rates {
    fn from(values: [f64; STATE_LEN]) -> Self {
        Self(values)
    }
}

impl Index<usize> for Rates {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl Add for Rates {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Mul<f64> for Rates {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(std::array::from_fn(|i| self.0[i] * rhs))
    }
}
