// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tracker firmware entry point.
//!
//! Reads command lines from the ST-LINK console and runs them one at a time.

#![no_main]
#![no_std]

use core::fmt::Write;

use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    i2c::{BlockingI2c, Mode},
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use nb::block;
use stm32f7xx_hal as hal;

mod hw;
use hw::{pins::CONSOLE_BAUD, BoardPins, CycleDelay, I2cCompat, OutPin, Usart};

use tracker::{
    drivers::{adxl345, Adxl345, LinearActuator},
    protocol::Parser,
    Dispatcher, TrackerConfig,
};

/// I2C data timeout, microseconds.
const I2C_TIMEOUT_US: u32 = 10_000;

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut apb1 = rcc.apb1;

    let pins = BoardPins::new(dp.GPIOB, dp.GPIOD, dp.GPIOE);

    // USART3 (ST-LINK VCP)
    let usart_cfg = Config {
        baud_rate: CONSOLE_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART3, (pins.usart3.tx, pins.usart3.rx), &clocks, usart_cfg);
    let (mut console, mut rx) = Usart::new(serial);
    console.println("tracker: boot");

    // I2C1 (ADXL345)
    let i2c = BlockingI2c::i2c1(
        dp.I2C1,
        (pins.i2c1.scl, pins.i2c1.sda),
        Mode::standard(100.kHz()),
        &clocks,
        &mut apb1,
        I2C_TIMEOUT_US,
    );
    let mut accel = Adxl345::new(I2cCompat::new(i2c), adxl345::ADDR_ALT_LOW);
    if let Err(e) = accel.init(adxl345::Range::G2) {
        let _ = write!(console, "adxl345 init failed: {:?}\r\n", e);
    }

    // Actuators
    let delay = CycleDelay::new(clocks.sysclk().raw());
    let pitch = LinearActuator::new(
        OutPin::new(pins.pitch.enable),
        OutPin::new(pins.pitch.extend),
        OutPin::new(pins.pitch.retract),
        delay,
    );
    let roll = LinearActuator::new(
        OutPin::new(pins.roll.enable),
        OutPin::new(pins.roll.extend),
        OutPin::new(pins.roll.retract),
        delay,
    );

    // The default configuration always validates.
    let mut tracker = Dispatcher::new(accel, pitch, roll, console, TrackerConfig::default())
        .unwrap();
    let mut parser = Parser::new();

    loop {
        let byte = match block!(rx.read()) {
            Ok(b) => b,
            // Framing/overrun errors: drop the byte.
            Err(_) => continue,
        };

        match parser.push(byte) {
            Some(Ok(line)) => {
                tracker.dispatch(&line);
            }
            Some(Err(e)) => {
                let _ = write!(tracker.console_mut(), "error: {}\r\n", e);
            }
            None => {}
        }
    }
}
