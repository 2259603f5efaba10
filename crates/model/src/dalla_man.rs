//! Model equations.
//!
//! Glucose is produced by the liver (EGP), appears from the gut (Ra), and is
//! used in an insulin-independent and an insulin-dependent way. Insulin moves
//! between liver and plasma, is absorbed from two subcutaneous depots, and acts
//! on utilization through a two-stage delay and a remote action state `X`.

use crate::{Parameters, Rates, State};

/// Absorption rate from subcutaneous depot 1 into plasma.
pub const KA1: f64 = 0.01;

/// Absorption rate from subcutaneous depot 2 into plasma.
pub const KA2: f64 = 0.01;

/// Transfer rate from subcutaneous depot 1 to depot 2.
pub const KD: f64 = 0.01;

/// Emptying rate of the liquid stomach into the gut.
pub const LIQUID_EMPTYING_RATE: f64 = 0.05;

/// Intermediate fluxes of the model at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fluxes {
    /// Endogenous glucose production.
    pub egp: f64,

    /// Maximal insulin-dependent utilization, scaled by remote insulin action.
    pub max_utilization: f64,

    /// Insulin-dependent glucose utilization.
    pub insulin_dependent_utilization: f64,

    /// Rate of glucose appearance from the gut.
    pub appearance: f64,

    /// Plasma insulin concentration.
    pub insulin_concentration: f64,
}

impl Fluxes {
    /// Evaluates the fluxes for a state.
    #[must_use]
    pub fn evaluate(state: &State, params: &Parameters) -> Self {
        let egp = params.k_p1
            - params.k_p2 * state.plasma_glucose()
            - params.k_p3 * state.insulin_delay_2()
            - params.k_p4 * state.plasma_insulin();

        let max_utilization =
            (1.0 - params.part) * (params.v_m0 + params.v_mx * state.remote_insulin_action());
        let insulin_dependent_utilization =
            max_utilization * state.tissue_glucose() / (params.k_m0 + state.tissue_glucose());

        let appearance = params.f * params.k_abs * state.gut_glucose() / params.bw;

        Self {
            egp,
            max_utilization,
            insulin_dependent_utilization,
            appearance,
            insulin_concentration: state.plasma_insulin() / params.v_i,
        }
    }
}

/// Computes the state derivative of the T1DM Dalla Man model.
///
/// `insulin_rate` is the exogenous infusion into subcutaneous depot 1. The
/// model is autonomous, so `time` does not enter the equations; it is part of
/// the signature so any time-dependent derivative can share one integrator.
///
/// Nothing is clamped here. Negative or non-finite inputs flow straight into
/// the returned rates.
#[must_use]
pub fn derivative(_time: f64, state: &State, params: &Parameters, insulin_rate: f64) -> Rates {
    let Fluxes {
        egp,
        insulin_dependent_utilization: u_id,
        appearance: ra,
        insulin_concentration: i,
        ..
    } = Fluxes::evaluate(state, params);

    let [gp, gt, il, ip, q_sto1, q_sto2, q_gut, i1, id, x, isc1, isc2] = *state.as_array();

    // Glucose
    let d_gp = egp + ra - params.u_ii - params.k_1 * gp + params.k_2 * gt;
    let d_gt = -u_id + params.k_1 * gp - params.k_2 * gt;

    // Insulin kinetics
    let d_il = -params.m_1 * il + params.m_2 * ip;
    let d_ip = -params.m_2 * ip - params.m_4 * ip + params.m_1 * il + KA1 * isc1 + KA2 * isc2;

    // Gastrointestinal tract
    let d_q_sto1 = -params.k_gri * q_sto1;
    let d_q_sto2 = params.k_gri * q_sto1 - LIQUID_EMPTYING_RATE * q_sto2;
    let d_q_gut = -params.k_abs * q_gut + LIQUID_EMPTYING_RATE * q_sto2;

    // Insulin action
    let d_i1 = -params.k_i * (i1 - i);
    let d_id = -params.k_i * (id - i1);
    let d_x = -params.p_2u * x + params.p_2u * i;

    // Subcutaneous delivery
    let d_isc1 = insulin_rate - (KA1 + KD) * isc1;
    let d_isc2 = KD * isc1 - KA2 * isc2;

    Rates::from([
        d_gp, d_gt, d_il, d_ip, d_q_sto1, d_q_sto2, d_q_gut, d_i1, d_id, d_x, d_isc1, d_isc2,
    ])
}

/// Computes the state derivative with no exogenous insulin.
#[must_use]
pub fn open_loop_derivative(time: f64, state: &State, params: &Parameters) -> Rates {
    derivative(time, state, params, 0.0)
}
