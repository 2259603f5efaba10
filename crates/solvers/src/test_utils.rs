use glysim_model::{Parameters, State};

/// Adult-like parameter set for exercising the simulators.
pub(crate) fn parameters() -> Parameters {
    Parameters {
        v_g: 1.88,
        k_1: 0.065,
        k_2: 0.079,
        g_b: 95.0,
        v_i: 0.05,
        m_1: 0.19,
        m_2: 0.484,
        m_4: 0.194,
        k_abs: 0.057,
        k_gri: 0.0558,
        f: 0.9,
        bw: 78.0,
        k_p1: 2.7,
        k_p2: 0.0021,
        k_p3: 0.009,
        k_p4: 0.0618,
        k_i: 0.0079,
        u_ii: 1.0,
        v_m0: 2.5,
        v_mx: 0.047,
        k_m0: 225.59,
        p_2u: 0.0331,
        part: 0.2,
    }
}

/// Fasting state with some glucose above target and a pending meal.
pub(crate) fn initial_state() -> State {
    State::default()
        .with_plasma_glucose(180.0)
        .with_tissue_glucose(120.0)
        .with_liver_insulin(4.0)
        .with_plasma_insulin(1.5)
        .with_meal(20_000.0)
}
