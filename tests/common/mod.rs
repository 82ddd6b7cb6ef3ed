//! Host-side fakes shared by the integration tests.

#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque, convert::Infallible, rc::Rc};

use tracker::{
    motors::{Actuator, BurstIntent, Direction},
    sensors::{RawAccel, Tilt},
    Axis,
};

/// Raw sample that derives to the given angles.
pub fn raw_for(pitch_deg: f32, roll_deg: f32) -> RawAccel {
    RawAccel::new(
        -pitch_deg.to_radians().tan(),
        -roll_deg.to_radians().tan(),
        1.0,
    )
}

/// One burst as seen by the plant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BurstRecord {
    pub axis: Axis,
    pub intent: BurstIntent,
    /// Axis angle when the burst started.
    pub angle_before: f32,
}

/// Simulated platform: two angles moved by actuator bursts.
#[derive(Debug, Default)]
pub struct PlantState {
    pub pitch_deg: f32,
    pub roll_deg: f32,
    pub bursts: Vec<BurstRecord>,
    pub reads: usize,
}

impl PlantState {
    fn angle_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::Pitch => &mut self.pitch_deg,
            Axis::Roll => &mut self.roll_deg,
        }
    }

    pub fn angle(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Pitch => self.pitch_deg,
            Axis::Roll => self.roll_deg,
        }
    }

    pub fn bursts_for(&self, axis: Axis) -> Vec<BurstRecord> {
        self.bursts.iter().copied().filter(|b| b.axis == axis).collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Plant(pub Rc<RefCell<PlantState>>);

impl Plant {
    pub fn new(pitch_deg: f32, roll_deg: f32) -> Self {
        Self(Rc::new(RefCell::new(PlantState {
            pitch_deg,
            roll_deg,
            ..PlantState::default()
        })))
    }

    pub fn tilt(&self) -> PlantTilt {
        PlantTilt(self.clone())
    }

    /// Actuator whose real speed is `rate_deg_per_s`. Extending lowers the angle.
    pub fn actuator(&self, axis: Axis, rate_deg_per_s: f32) -> PlantActuator {
        PlantActuator {
            axis,
            rate_deg_per_s,
            plant: self.clone(),
        }
    }

    pub fn state(&self) -> std::cell::Ref<'_, PlantState> {
        self.0.borrow()
    }
}

pub struct PlantTilt(Plant);

impl Tilt for PlantTilt {
    type Error = Infallible;

    fn read_raw(&mut self) -> Result<RawAccel, Infallible> {
        let mut state = self.0 .0.borrow_mut();
        state.reads += 1;
        Ok(raw_for(state.pitch_deg, state.roll_deg))
    }
}

pub struct PlantActuator {
    axis: Axis,
    rate_deg_per_s: f32,
    plant: Plant,
}

impl Actuator for PlantActuator {
    fn burst(&mut self, intent: BurstIntent) {
        let mut state = self.plant.0.borrow_mut();
        let angle_before = state.angle(self.axis);
        state.bursts.push(BurstRecord {
            axis: self.axis,
            intent,
            angle_before,
        });

        let travel = self.rate_deg_per_s * intent.millis as f32 / 1000.0;
        let angle = state.angle_mut(self.axis);
        match intent.direction {
            Direction::Extend => *angle -= travel,
            Direction::Retract => *angle += travel,
            Direction::Stop => {}
        }
    }

    fn stop(&mut self) {}
}

/// Returns queued samples in order, repeating the last one.
pub struct ScriptedTilt {
    samples: VecDeque<RawAccel>,
    last: RawAccel,
}

impl ScriptedTilt {
    pub fn pitch_angles(angles: &[f32]) -> Self {
        Self {
            samples: angles.iter().map(|&a| raw_for(a, 0.0)).collect(),
            last: raw_for(0.0, 0.0),
        }
    }
}

impl Tilt for ScriptedTilt {
    type Error = Infallible;

    fn read_raw(&mut self) -> Result<RawAccel, Infallible> {
        if let Some(sample) = self.samples.pop_front() {
            self.last = sample;
        }
        Ok(self.last)
    }
}

/// Sensor that fails every read, counting the attempts.
#[derive(Default)]
pub struct FailingTilt {
    pub attempts: usize,
}

impl Tilt for FailingTilt {
    type Error = ();

    fn read_raw(&mut self) -> Result<RawAccel, ()> {
        self.attempts += 1;
        Err(())
    }
}

/// Records bursts without moving anything.
#[derive(Clone, Default)]
pub struct Recorder(pub Rc<RefCell<Vec<(Axis, BurstIntent)>>>);

impl Recorder {
    pub fn actuator(&self, axis: Axis) -> RecordingActuator {
        RecordingActuator {
            axis,
            log: self.clone(),
        }
    }

    pub fn events(&self) -> Vec<(Axis, BurstIntent)> {
        self.0.borrow().clone()
    }
}

pub struct RecordingActuator {
    axis: Axis,
    log: Recorder,
}

impl Actuator for RecordingActuator {
    fn burst(&mut self, intent: BurstIntent) {
        self.log.0.borrow_mut().push((self.axis, intent));
    }

    fn stop(&mut self) {}
}
