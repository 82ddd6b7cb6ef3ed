// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F767ZI tracker board.

use stm32f7xx_hal::{
    gpio::{gpiob, gpiod, gpioe, Alternate, OpenDrain, Output, PushPull},
    pac,
    prelude::*,
};

/// Serial console baud rate.
pub const CONSOLE_BAUD: u32 = 115_200;

/// All board pins. Construct this once at startup using:
///
/// ```rust
/// let pins = BoardPins::new(dp.GPIOB, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub usart3: Usart3Pins,
    pub i2c1: I2c1Pins,
    pub pitch: PitchActuatorPins,
    pub roll: RollActuatorPins,
}

/// ST-LINK virtual COM port
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// ADXL345 bus
pub struct I2c1Pins {
    pub scl: gpiob::PB8<Alternate<4, OpenDrain>>,
    pub sda: gpiob::PB9<Alternate<4, OpenDrain>>,
}

/// Pitch actuator H-bridge lines
pub struct PitchActuatorPins {
    pub enable: gpioe::PE9<Output<PushPull>>,
    pub extend: gpioe::PE11<Output<PushPull>>,
    pub retract: gpioe::PE13<Output<PushPull>>,
}

/// Roll actuator H-bridge lines
pub struct RollActuatorPins {
    pub enable: gpiod::PD14<Output<PushPull>>,
    pub extend: gpiod::PD15<Output<PushPull>>,
    pub retract: gpiod::PD12<Output<PushPull>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals. Actuator lines start low.
    pub fn new(gpiob: pac::GPIOB, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            i2c1: I2c1Pins {
                scl: gpiob.pb8.into_alternate_open_drain::<4>(),
                sda: gpiob.pb9.into_alternate_open_drain::<4>(),
            },

            pitch: PitchActuatorPins {
                enable: gpioe.pe9.into_push_pull_output(),
                extend: gpioe.pe11.into_push_pull_output(),
                retract: gpioe.pe13.into_push_pull_output(),
            },

            roll: RollActuatorPins {
                enable: gpiod.pd14.into_push_pull_output(),
                extend: gpiod.pd15.into_push_pull_output(),
                retract: gpiod.pd12.into_push_pull_output(),
            },
        }
    }
}
