//! Closed-loop simulation of the glucose-insulin model.
//!
//! Each tick, starting at `t = 0`:
//!
//! 1. Read plasma glucose from the current state.
//! 2. Ask the controller for an action with `sample_time = dt`.
//! 3. Clamp the basal rate at zero.
//! 4. Record time, glucose, and the clamped rate.
//! 5. Advance the state one RK4 step with the clamped rate held constant.
//! 6. Add `dt` to `t` and continue while `t <= duration`.
//!
//! Negative insulin requests are not errors. They are silently replaced by
//! zero, and it is the replaced value that is both recorded and integrated.
//!
//! # Example
//!
//! ```ignore
//! use glysim_controllers::Pid;
//! use glysim_solvers::{Config, closed_loop};
//!
//! let config = Config::new(600.0, 0.1)?;
//! let pid = Pid::new(0.01, 0.0, 0.0, 140.0);
//! let trace = closed_loop::simulate_unobserved(pid, &params, initial, &config);
//!
//! for (t, glucose, insulin) in trace.rows() {
//!     println!("{t:.1}\t{glucose:.2}\t{insulin:.4}");
//! }
//! ```

mod event;
mod trace;

pub use event::Event;
pub use trace::Trace;

use std::convert::Infallible;

use glysim_core::{Controller, Observation, Observer};
use glysim_model::{Parameters, State, derivative};

use crate::{Config, rk4};

/// Runs a closed-loop simulation without an observer.
///
/// Pass `&mut controller` to keep the controller and inspect its history
/// after the run.
#[must_use]
pub fn simulate_unobserved<C>(
    controller: C,
    params: &Parameters,
    initial: State,
    config: &Config,
) -> Trace
where
    C: Controller,
{
    simulate(controller, params, initial, config, ())
}

/// Runs a closed-loop simulation, emitting an [`Event`] every tick.
///
/// The observer's action type is [`Infallible`]: it can watch the run but
/// cannot alter or stop it.
#[must_use]
pub fn simulate<C, Obs>(
    mut controller: C,
    params: &Parameters,
    initial: State,
    config: &Config,
    mut observer: Obs,
) -> Trace
where
    C: Controller,
    Obs: for<'a> Observer<Event<'a>, Infallible>,
{
    let dt = config.dt();
    log::debug!(
        "closed-loop run: duration={}, dt={dt}, initial glucose={}",
        config.duration(),
        initial.plasma_glucose()
    );

    let mut trace = Trace::with_capacity(config.tick_hint(), initial);
    let mut state = initial;

    for (step, time) in config.ticks().enumerate() {
        let glucose = state.plasma_glucose();
        let action = controller.policy(&Observation::new(glucose), dt);

        let requested = action.basal;
        let insulin = requested.max(0.0);
        if insulin != requested {
            log::debug!("t={time}: clamped requested insulin {requested} to {insulin}");
        }

        trace.record(time, glucose, insulin);

        let event = Event {
            step,
            time,
            state: &state,
            requested,
            insulin,
        };
        if let Some(never) = observer.observe(&event) {
            match never {}
        }

        log::trace!("t={time}: glucose={glucose}, insulin={insulin}");
        state = rk4::step(derivative, time, &state, dt, params, insulin);
    }

    trace.final_state = state;
    log::debug!(
        "closed-loop run finished: {} ticks, final glucose={}",
        trace.len(),
        state.plasma_glucose()
    );

    trace
}

#[cfg(test)]
mod tests {
    use glysim_controllers::Pid;
    use glysim_core::Action;

    use super::*;
    use crate::test_utils::{initial_state, parameters};

    fn config(duration: f64, dt: f64) -> Config {
        Config::new(duration, dt).expect("valid config")
    }

    #[test]
    fn whole_steps_record_every_end_point() {
        let trace = simulate_unobserved(
            Pid::default(),
            &parameters(),
            initial_state(),
            &config(10.0, 1.0),
        );

        assert_eq!(trace.len(), 11);
        assert_eq!(trace.glucose.len(), 11);
        assert_eq!(trace.insulin.len(), 11);
        assert_eq!(trace.time, (0..=10).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn accumulated_time_can_drop_the_nominal_end_point() {
        let trace = simulate_unobserved(
            Pid::default(),
            &parameters(),
            initial_state(),
            &config(0.3, 0.1),
        );

        assert_eq!(trace.time, vec![0.0, 0.1, 0.2]);
        assert_eq!(trace.glucose.len(), 3);
        assert_eq!(trace.insulin.len(), 3);
    }

    #[test]
    fn time_is_strictly_increasing_with_constant_spacing() {
        let dt = 0.5;
        let trace = simulate_unobserved(
            Pid::default(),
            &parameters(),
            initial_state(),
            &config(30.0, dt),
        );

        assert_eq!(trace.len(), 61);
        for pair in trace.time.windows(2) {
            assert!(pair[1] > pair[0]);
            assert_eq!(pair[1] - pair[0], dt);
        }
    }

    #[test]
    fn glucose_is_read_before_each_step() {
        let params = parameters();
        let initial = initial_state();
        let dt = 1.0;

        let trace = simulate_unobserved(Pid::default(), &params, initial, &config(2.0, dt));

        assert_eq!(trace.glucose[0], initial.plasma_glucose());

        let mut state = initial;
        for k in 0..trace.len() {
            assert_eq!(trace.glucose[k], state.plasma_glucose());
            state = rk4::step(derivative, trace.time[k], &state, dt, &params, trace.insulin[k]);
        }
        assert_eq!(trace.final_state, state);
    }

    #[test]
    fn negative_request_is_recorded_and_applied_as_zero() {
        let params = parameters();
        let initial = State::default().with_plasma_glucose(100.0);
        let dt = 1.0;

        let mut pid = Pid::new(1.0, 0.0, 0.0, 140.0);
        let mut requests = Vec::new();
        let trace = simulate(
            &mut pid,
            &params,
            initial,
            &config(0.0, dt),
            |event: &Event<'_>| -> Option<Infallible> {
                requests.push((event.requested, event.was_clamped()));
                None
            },
        );

        assert_eq!(requests, vec![(-40.0, true)]);
        assert_eq!(trace.insulin, vec![0.0]);
        assert_eq!(
            trace.final_state,
            rk4::step(derivative, 0.0, &initial, dt, &params, 0.0)
        );
    }

    #[test]
    fn insulin_is_never_negative() {
        let gains = [
            (-5.0, 0.0, 0.0),
            (1.0, 0.5, -20.0),
            (-0.3, -0.01, 4.0),
            (0.02, 0.0001, 0.5),
        ];

        for (p, i, d) in gains {
            let trace = simulate_unobserved(
                Pid::new(p, i, d, 120.0),
                &parameters(),
                initial_state(),
                &config(120.0, 0.5),
            );
            assert!(trace.insulin.iter().all(|u| *u >= 0.0), "gains {p}, {i}, {d}");
        }
    }

    #[test]
    fn identical_inputs_give_identical_traces() {
        let run = || {
            simulate_unobserved(
                Pid::new(0.02, 0.0001, 0.0, 130.0),
                &parameters(),
                initial_state(),
                &config(200.0, 0.1),
            )
        };

        let first = run();
        let second = run();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.rows().zip(second.rows()) {
            assert_eq!(a.0.to_bits(), b.0.to_bits());
            assert_eq!(a.1.to_bits(), b.1.to_bits());
            assert_eq!(a.2.to_bits(), b.2.to_bits());
        }
        for (a, b) in first
            .final_state
            .as_array()
            .iter()
            .zip(second.final_state.as_array())
        {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn borrowed_controller_keeps_its_history() {
        let mut pid = Pid::new(0.0, 1.0, 0.0, 100.0);
        let _ = simulate_unobserved(
            &mut pid,
            &parameters(),
            initial_state(),
            &config(3.0, 1.0),
        );

        assert_ne!(pid.integral(), 0.0);
        assert_ne!(pid.previous(), 0.0);
    }

    #[test]
    fn observer_sees_one_event_per_tick() {
        let mut steps = Vec::new();
        let trace = simulate(
            Pid::default(),
            &parameters(),
            initial_state(),
            &config(5.0, 1.0),
            |event: &Event<'_>| -> Option<Infallible> {
                steps.push((event.step, event.time, event.glucose(), event.insulin));
                None
            },
        );

        assert_eq!(steps.len(), trace.len());
        for (k, (step, time, glucose, insulin)) in steps.into_iter().enumerate() {
            assert_eq!(step, k);
            assert_eq!(time, trace.time[k]);
            assert_eq!(glucose, trace.glucose[k]);
            assert_eq!(insulin, trace.insulin[k]);
        }
    }

    #[test]
    fn unit_controller_delivers_no_insulin() {
        let trace = simulate_unobserved((), &parameters(), initial_state(), &config(20.0, 1.0));
        assert!(trace.insulin.iter().all(|u| *u == 0.0));
    }

    #[test]
    fn proportional_control_lowers_glucose() {
        let params = parameters();
        let cfg = config(300.0, 0.5);

        let untreated = simulate_unobserved((), &params, initial_state(), &cfg);
        let pid = Pid::new(0.05, 0.0, 0.0, 120.0);
        let treated = simulate_unobserved(pid, &params, initial_state(), &cfg);

        assert!(treated.insulin.iter().any(|u| *u > 0.0));
        assert!(
            treated.final_state.plasma_glucose() < untreated.final_state.plasma_glucose(),
            "treated {} vs untreated {}",
            treated.final_state.plasma_glucose(),
            untreated.final_state.plasma_glucose()
        );
    }

    #[test]
    fn non_finite_rates_corrupt_later_glucose() {
        let mut params = parameters();
        params.k_m0 = 0.0;
        let initial = initial_state().with_tissue_glucose(0.0);

        let trace = simulate_unobserved(Pid::default(), &params, initial, &config(3.0, 1.0));

        assert_eq!(trace.len(), 4);
        assert_eq!(trace.glucose[0], 180.0);
        assert!(trace.glucose[1..].iter().all(|g| g.is_nan()));
        assert_eq!(trace.insulin, vec![40.0, 0.0, 0.0, 0.0]);
        assert!(trace.final_state.plasma_glucose().is_nan());
    }

    struct NanController;

    impl Controller for NanController {
        fn policy(&mut self, _observation: &Observation, _sample_time: f64) -> Action {
            Action::basal(f64::NAN)
        }

        fn reset(&mut self) {}
    }

    #[test]
    fn nan_request_is_applied_as_zero() {
        let params = parameters();
        let mut clamped = Vec::new();
        let trace = simulate(
            NanController,
            &params,
            initial_state(),
            &config(2.0, 1.0),
            |event: &Event<'_>| -> Option<Infallible> {
                assert!(event.requested.is_nan());
                clamped.push(event.was_clamped());
                None
            },
        );

        assert_eq!(trace.insulin, vec![0.0, 0.0, 0.0]);
        assert_eq!(clamped, vec![true, true, true]);
        assert!(trace.glucose.iter().all(|g| g.is_finite()));

        let untreated = simulate_unobserved((), &params, initial_state(), &config(2.0, 1.0));
        assert_eq!(trace.final_state, untreated.final_state);
    }
}
