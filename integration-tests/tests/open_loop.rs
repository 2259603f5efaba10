use glysim_model::State;
use glysim_solvers::{Config, closed_loop, open_loop};
use integration_tests::{adult, init_logging, post_meal};

#[test]
fn meal_response_rises_then_the_stomach_empties() {
    init_logging();
    let config = Config::new(600.0, 0.5).unwrap();
    let history = open_loop::simulate(&adult(), post_meal(78_000.0), &config);

    assert_eq!(history.len(), 1201);

    let stomach = history.compartment(State::STOMACH_SOLID);
    assert!(stomach.last().unwrap() < &(stomach[0] * 1e-6));

    let glucose = history.compartment(State::PLASMA_GLUCOSE);
    let peak = glucose.iter().copied().fold(f64::MIN, f64::max);
    assert!(peak > glucose[0]);
}

#[test]
fn open_loop_equals_closed_loop_without_insulin() {
    let params = adult();
    let config = Config::new(180.0, 0.25).unwrap();
    let start = post_meal(30_000.0);

    let open = open_loop::simulate(&params, start, &config);
    let closed = closed_loop::simulate_unobserved((), &params, start, &config);

    assert_eq!(open.time, closed.time);
    assert_eq!(open.compartment(State::PLASMA_GLUCOSE), closed.glucose);
    assert_eq!(open.final_state, closed.final_state);
}
