use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ParameterError;

/// Physiological constants for one patient.
///
/// A parameter set is supplied from outside the model and stays constant for
/// a whole run. Field names follow the conventional Dalla Man symbols, which
/// are also the keys used by [`Parameters::from_map`] and by serde.
///
/// Values are not range checked. The saturation constant `K_m0` and the body
/// weight `BW` appear as divisors and `V_I` normalizes plasma insulin, so they
/// must be strictly positive for the model to produce finite derivatives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    /// Glucose distribution volume.
    #[serde(rename = "V_G")]
    pub v_g: f64,

    /// Plasma to tissue glucose transfer rate.
    pub k_1: f64,

    /// Tissue to plasma glucose transfer rate.
    pub k_2: f64,

    /// Basal plasma glucose.
    #[serde(rename = "G_b")]
    pub g_b: f64,

    /// Insulin distribution volume.
    #[serde(rename = "V_I")]
    pub v_i: f64,

    /// Liver insulin clearance into plasma.
    pub m_1: f64,

    /// Plasma insulin transfer to liver.
    pub m_2: f64,

    /// Peripheral insulin degradation.
    pub m_4: f64,

    /// Intestinal absorption rate.
    pub k_abs: f64,

    /// Grinding rate of the solid stomach.
    pub k_gri: f64,

    /// Fraction of intestinal absorption that appears in plasma.
    pub f: f64,

    /// Body weight.
    #[serde(rename = "BW")]
    pub bw: f64,

    /// Extrapolated endogenous glucose production at zero glucose and insulin.
    pub k_p1: f64,

    /// Liver glucose effectiveness.
    pub k_p2: f64,

    /// Delayed insulin action on the liver.
    pub k_p3: f64,

    /// Portal insulin action on the liver.
    pub k_p4: f64,

    /// Delay between insulin signal and action.
    pub k_i: f64,

    /// Insulin-independent glucose utilization.
    #[serde(rename = "U_ii")]
    pub u_ii: f64,

    /// Basal maximal insulin-dependent utilization.
    #[serde(rename = "V_m0")]
    pub v_m0: f64,

    /// Sensitivity of maximal utilization to remote insulin action.
    #[serde(rename = "V_mX")]
    pub v_mx: f64,

    /// Michaelis-Menten half-saturation constant.
    #[serde(rename = "K_m0")]
    pub k_m0: f64,

    /// Rate of remote insulin action.
    #[serde(rename = "p_2U")]
    pub p_2u: f64,

    /// Fraction of utilization that is insulin independent.
    pub part: f64,
}

impl Parameters {
    /// Every key a parameter set must provide.
    pub const KEYS: [&'static str; 23] = [
        "V_G", "k_1", "k_2", "G_b", "V_I", "m_1", "m_2", "m_4", "k_abs", "k_gri", "f", "BW",
        "k_p1", "k_p2", "k_p3", "k_p4", "k_i", "U_ii", "V_m0", "V_mX", "K_m0", "p_2U", "part",
    ];

    /// Builds a parameter set from a mapping of named constants.
    ///
    /// Keys not listed in [`Parameters::KEYS`] are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Missing`] for the first required key that is
    /// absent, or [`ParameterError::NonFinite`] for a NaN or infinite value.
    pub fn from_map(map: &HashMap<String, f64>) -> Result<Self, ParameterError> {
        let get = |name: &'static str| -> Result<f64, ParameterError> {
            let value = *map.get(name).ok_or(ParameterError::Missing { name })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(ParameterError::NonFinite { name, value })
            }
        };

        Ok(Self {
            v_g: get("V_G")?,
            k_1: get("k_1")?,
            k_2: get("k_2")?,
            g_b: get("G_b")?,
            v_i: get("V_I")?,
            m_1: get("m_1")?,
            m_2: get("m_2")?,
            m_4: get("m_4")?,
            k_abs: get("k_abs")?,
            k_gri: get("k_gri")?,
            f: get("f")?,
            bw: get("BW")?,
            k_p1: get("k_p1")?,
            k_p2: get("k_p2")?,
            k_p3: get("k_p3")?,
            k_p4: get("k_p4")?,
            k_i: get("k_i")?,
            u_ii: get("U_ii")?,
            v_m0: get("V_m0")?,
            v_mx: get("V_mX")?,
            k_m0: get("K_m0")?,
            p_2u: get("p_2U")?,
            part: get("part")?,
        })
    }

    /// Checks that every value is finite.
    ///
    /// Useful after deserializing, since formats like TOML can encode `nan`
    /// and `inf`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonFinite`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ParameterError> {
        match self
            .entries()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            Some((name, value)) => Err(ParameterError::NonFinite { name, value }),
            None => Ok(()),
        }
    }

    /// Returns every `(key, value)` pair in [`Parameters::KEYS`] order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 23] {
        let values = [
            self.v_g, self.k_1, self.k_2, self.g_b, self.v_i, self.m_1, self.m_2, self.m_4,
            self.k_abs, self.k_gri, self.f, self.bw, self.k_p1, self.k_p2, self.k_p3, self.k_p4,
            self.k_i, self.u_ii, self.v_m0, self.v_mx, self.k_m0, self.p_2u, self.part,
        ];
        std::array::from_fn(|i| (Self::KEYS[i], values[i]))
    }
}
