//! Shared fixtures for whole-system tests.

use std::collections::HashMap;

use glysim_model::{Parameters, State};

/// Reference adult parameter set, as TOML.
pub const ADULT_TOML: &str = include_str!("../fixtures/adult.toml");

/// Loads the reference adult parameter set.
///
/// # Panics
///
/// Panics if the bundled fixture is not a valid parameter set.
#[must_use]
pub fn adult() -> Parameters {
    let params: Parameters = toml::from_str(ADULT_TOML).expect("fixture should parse");
    params.validate().expect("fixture should be finite");
    params
}

/// Loads the reference adult parameter set as a plain name-to-value map.
///
/// # Panics
///
/// Panics if the bundled fixture is not a table of numbers.
#[must_use]
pub fn adult_map() -> HashMap<String, f64> {
    toml::from_str(ADULT_TOML).expect("fixture should be a table of numbers")
}

/// Fasting state above target with a meal in the stomach.
#[must_use]
pub fn post_meal(carbohydrates: f64) -> State {
    State::default()
        .with_plasma_glucose(170.0)
        .with_tissue_glucose(120.0)
        .with_liver_insulin(2.0)
        .with_plasma_insulin(1.0)
        .with_meal(carbohydrates)
}

/// Installs a test logger honoring `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
