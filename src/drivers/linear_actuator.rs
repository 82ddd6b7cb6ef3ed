// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Driver for a linear actuator behind a three-line H-bridge.
//!
//! Wiring:
//! - ENA: bridge enable, high while moving
//! - EXT: extend direction
//! - RET: retract direction
//!
//! The direction lines are set before enable goes high, and enable drops first on stop, so the
//! bridge is never enabled without exactly one direction selected.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::motors::{Actuator, BurstIntent, Direction};

/// Linear actuator driven by timed bursts.
pub struct LinearActuator<EN, EXT, RET, D> {
    enable: EN,
    extend: EXT,
    retract: RET,
    delay: D,
}

impl<EN, EXT, RET, D> LinearActuator<EN, EXT, RET, D>
where
    EN: OutputPin,
    EXT: OutputPin,
    RET: OutputPin,
    D: DelayNs,
{
    /// Construct the driver and drive all three lines low.
    pub fn new(enable: EN, extend: EXT, retract: RET, delay: D) -> Self {
        let mut actuator = Self {
            enable,
            extend,
            retract,
            delay,
        };
        actuator.stop();
        actuator
    }

    /// Release the pins and delay.
    pub fn free(self) -> (EN, EXT, RET, D) {
        (self.enable, self.extend, self.retract, self.delay)
    }
}

impl<EN, EXT, RET, D> Actuator for LinearActuator<EN, EXT, RET, D>
where
    EN: OutputPin,
    EXT: OutputPin,
    RET: OutputPin,
    D: DelayNs,
{
    fn burst(&mut self, intent: BurstIntent) {
        if intent.millis == 0 {
            self.stop();
            return;
        }

        // GPIO writes on the target cannot fail; errors are dropped.
        match intent.direction {
            Direction::Extend => {
                self.retract.set_low().ok();
                self.extend.set_high().ok();
            }
            Direction::Retract => {
                self.extend.set_low().ok();
                self.retract.set_high().ok();
            }
            Direction::Stop => {
                self.stop();
                return;
            }
        }
        self.enable.set_high().ok();

        trace!("burst {} {} ms", intent.direction, intent.millis);
        self.delay.delay_ms(intent.millis);

        self.stop();
    }

    fn stop(&mut self) {
        self.enable.set_low().ok();
        self.extend.set_low().ok();
        self.retract.set_low().ok();
    }
}
