mod common;

use common::{Plant, ScriptedTilt};
use tracker::{
    config::LoopLimits,
    control::{estimate_burst_millis, move_to, AxisController, Outcome},
    motors::{BurstIntent, Direction},
    AngularVelocity, Axis, Error, TrackerConfig,
};

const PITCH_V: f32 = 4.5;
const ROLL_V: f32 = 8.0;

fn controller<A: tracker::motors::Actuator>(axis: Axis, actuator: A) -> AxisController<A> {
    AxisController::from_config(axis, actuator, &TrackerConfig::default()).unwrap()
}

#[test]
fn slow_actuator_converges_within_budget() {
    // The actuator only achieves 80% of the nominal speed.
    let plant = Plant::new(0.0, 0.0);
    let mut pitch = controller(Axis::Pitch, plant.actuator(Axis::Pitch, 0.8 * PITCH_V));
    let mut tilt = plant.tilt();

    let outcome = pitch.run_to(20.0, &mut tilt).unwrap();

    match outcome {
        Outcome::Converged {
            iterations,
            bursts,
            diff,
        } => {
            assert!(iterations <= 4);
            assert_eq!(bursts, 2);
            assert!(diff < 2.0);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!((plant.state().pitch_deg - 20.0).abs() < 2.0);
    assert_eq!(plant.state().reads, 3);
}

#[test]
fn very_slow_actuator_reports_convergence_not_reached() {
    let plant = Plant::new(0.0, 0.0);
    let mut pitch = controller(Axis::Pitch, plant.actuator(Axis::Pitch, 0.1 * PITCH_V));
    let mut tilt = plant.tilt();

    let outcome = pitch.run_to(20.0, &mut tilt).unwrap();

    assert!(matches!(
        outcome,
        Outcome::ConvergenceNotReached { bursts: 4, .. }
    ));
    assert_eq!(plant.state().bursts.len(), 4);
    // No measurement after the final burst.
    assert_eq!(plant.state().reads, 4);
}

#[test]
fn direction_rule_holds_on_every_iteration() {
    // Overshooting actuator flips the sign of the error each time.
    let plant = Plant::new(0.0, 0.0);
    let mut pitch = controller(Axis::Pitch, plant.actuator(Axis::Pitch, 1.8 * PITCH_V));
    let mut tilt = plant.tilt();
    let goal = 20.0;

    pitch.run_to(goal, &mut tilt).unwrap();

    let bursts = plant.state().bursts_for(Axis::Pitch);
    assert_eq!(bursts.len(), 4);
    let directions: Vec<_> = bursts.iter().map(|b| b.intent.direction).collect();
    assert_eq!(
        directions,
        [
            Direction::Retract,
            Direction::Extend,
            Direction::Retract,
            Direction::Extend
        ]
    );
    for b in &bursts {
        let expected = if b.angle_before > goal {
            Direction::Extend
        } else {
            Direction::Retract
        };
        assert_eq!(b.intent.direction, expected, "at {}", b.angle_before);
    }
}

#[test]
fn monotone_feedback_stops_once_inside_precision() {
    let mut pitch = controller(Axis::Pitch, common::Recorder::default().actuator(Axis::Pitch));
    let mut tilt = ScriptedTilt::pitch_angles(&[0.0, 6.0, 9.5]);

    let outcome = pitch.run_to(10.0, &mut tilt).unwrap();

    assert!(matches!(
        outcome,
        Outcome::Converged {
            iterations: 3,
            bursts: 2,
            ..
        }
    ));
}

#[test]
fn short_bursts_are_never_issued() {
    // At 20 deg/s a 3 degree error needs 150 ms, under the 250 ms minimum.
    let cfg = TrackerConfig::default().with_velocities(20.0, 20.0);
    let recorder = common::Recorder::default();
    let mut roll = AxisController::from_config(Axis::Roll, recorder.actuator(Axis::Roll), &cfg)
        .unwrap();
    let mut tilt = tracker::sensors::SimulatedTilt::from_angles(0.0, 3.0);

    let outcome = roll.run_to(0.0, &mut tilt).unwrap();

    match outcome {
        Outcome::BurstTooSmall {
            bursts,
            millis,
            diff,
        } => {
            assert_eq!(bursts, 0);
            assert_eq!(millis, 150);
            assert!((diff - 3.0).abs() < 1e-3);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(recorder.events().is_empty());
}

#[test]
fn burst_length_matches_axis_velocity() {
    let recorder = common::Recorder::default();
    let mut roll = controller(Axis::Roll, recorder.actuator(Axis::Roll));
    let mut tilt = tracker::sensors::SimulatedTilt::from_angles(0.0, 40.0);

    roll.run_to(0.0, &mut tilt).unwrap();

    // 40 degrees at 8 deg/s.
    assert_eq!(
        recorder.events()[0],
        (Axis::Roll, BurstIntent::new(Direction::Extend, 5000))
    );
}

#[test]
fn custom_iteration_budget_is_respected() {
    let cfg = TrackerConfig::default().with_limits(LoopLimits {
        max_iterations: 2,
        ..LoopLimits::default()
    });
    let recorder = common::Recorder::default();
    let mut pitch =
        AxisController::from_config(Axis::Pitch, recorder.actuator(Axis::Pitch), &cfg).unwrap();
    let mut tilt = tracker::sensors::SimulatedTilt::level();

    let outcome = pitch.run_to(30.0, &mut tilt).unwrap();

    assert_eq!(outcome.bursts(), 2);
    assert_eq!(recorder.events().len(), 2);
}

#[test]
fn moveto_runs_pitch_completely_before_roll() {
    let plant = Plant::new(0.0, 0.0);
    let mut pitch = controller(Axis::Pitch, plant.actuator(Axis::Pitch, 0.8 * PITCH_V));
    let mut roll = controller(Axis::Roll, plant.actuator(Axis::Roll, 0.8 * ROLL_V));
    let mut tilt = plant.tilt();

    let outcome = move_to(&mut pitch, &mut roll, &mut tilt, 15.0, -25.0).unwrap();

    assert!(outcome.pitch.unwrap().is_converged());
    assert!(outcome.roll.unwrap().is_converged());

    let state = plant.state();
    let axes: Vec<_> = state.bursts.iter().map(|b| b.axis).collect();
    let first_roll = axes.iter().position(|&a| a == Axis::Roll).unwrap();
    assert!(first_roll > 0);
    assert!(axes[first_roll..].iter().all(|&a| a == Axis::Roll));
    assert!((state.pitch_deg - 15.0).abs() < 2.0);
    assert!((state.roll_deg + 25.0).abs() < 2.0);
}

#[test]
fn moveto_with_one_zero_axis_still_runs() {
    let plant = Plant::new(0.0, 10.0);
    let mut pitch = controller(Axis::Pitch, plant.actuator(Axis::Pitch, PITCH_V));
    let mut roll = controller(Axis::Roll, plant.actuator(Axis::Roll, ROLL_V));
    let mut tilt = plant.tilt();

    let outcome = move_to(&mut pitch, &mut roll, &mut tilt, 0.0, -10.0).unwrap();

    assert_eq!(outcome.pitch.unwrap().bursts(), 0);
    assert!(outcome.roll.unwrap().bursts() >= 1);
    assert_eq!(pitch.goal().unwrap().target_deg, 0.0);
    assert_eq!(roll.goal().unwrap().target_deg, -10.0);
}

#[test]
fn degenerate_moveto_is_rejected_without_motion() {
    let plant = Plant::new(30.0, 30.0);
    let mut pitch = controller(Axis::Pitch, plant.actuator(Axis::Pitch, PITCH_V));
    let mut roll = controller(Axis::Roll, plant.actuator(Axis::Roll, ROLL_V));
    let mut tilt = plant.tilt();

    let result = move_to(&mut pitch, &mut roll, &mut tilt, 0.0, 0.0);

    assert_eq!(result, Err(Error::DegenerateMoveRequest));
    assert!(plant.state().bursts.is_empty());
    assert_eq!(plant.state().reads, 0);
}

#[test]
fn swapped_controllers_are_caught() {
    let recorder = common::Recorder::default();
    let mut a = controller(Axis::Roll, recorder.actuator(Axis::Roll));
    let mut b = controller(Axis::Pitch, recorder.actuator(Axis::Pitch));
    let mut tilt = tracker::sensors::SimulatedTilt::level();

    let outcome = move_to(&mut a, &mut b, &mut tilt, 10.0, 10.0).unwrap();

    assert_eq!(outcome.pitch, Err(Error::AxisUnknown(Axis::Pitch.id())));
    assert_eq!(outcome.roll, Err(Error::AxisUnknown(Axis::Roll.id())));
    assert!(recorder.events().is_empty());
}

#[test]
fn burst_estimate_rounds_and_ignores_sign() {
    let v = |deg_per_s| AngularVelocity::new(deg_per_s).unwrap();

    assert_eq!(estimate_burst_millis(4.5, v(4.5)), 1000);
    assert_eq!(estimate_burst_millis(-9.0, v(4.5)), 2000);
    assert_eq!(estimate_burst_millis(1.0, v(3.0)), 333);
    assert_eq!(estimate_burst_millis(2.0, v(3.0)), 667);
}

#[test]
fn huge_errors_saturate_the_burst_estimate() {
    let v = AngularVelocity::new(PITCH_V).unwrap();

    assert_eq!(estimate_burst_millis(1.0e30, v), u32::MAX);
    assert_eq!(estimate_burst_millis(-1.0e30, v), u32::MAX);
    assert_eq!(estimate_burst_millis(f32::INFINITY, v), u32::MAX);
    // Above i32::MAX but below u32::MAX.
    assert_eq!(estimate_burst_millis(13_500_000.0, v), 3_000_000_000);
}

#[test]
fn infinite_goal_never_drives_the_axis() {
    let plant = Plant::new(10.0, 0.0);
    let mut pitch = controller(Axis::Pitch, plant.actuator(Axis::Pitch, PITCH_V));
    let mut tilt = plant.tilt();

    assert_eq!(pitch.run_to(f32::INFINITY, &mut tilt), Err(Error::NonFiniteGoal));
    assert!(plant.state().bursts.is_empty());
    assert_eq!(plant.state().reads, 0);
}
