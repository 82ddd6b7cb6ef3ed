// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `embedded-hal` 1.0 adapters over the stm32f7xx-hal peripherals.
//!
//! The library drivers are written against `embedded-hal` 1.0; the HAL exposes inherent GPIO
//! methods and the 0.2 blocking I2C traits.

use core::convert::Infallible;

use embedded_hal::{
    delay::DelayNs,
    digital::{self, OutputPin},
    i2c::{self, ErrorKind, Operation},
};
use embedded_hal_02::blocking::i2c as i2c_02;
use stm32f7xx_hal::gpio::{Output, Pin, PushPull};

/// Push-pull output pin.
pub struct OutPin<const P: char, const N: u8>(Pin<P, N, Output<PushPull>>);

impl<const P: char, const N: u8> OutPin<P, N> {
    pub fn new(pin: Pin<P, N, Output<PushPull>>) -> Self {
        Self(pin)
    }
}

impl<const P: char, const N: u8> digital::ErrorType for OutPin<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> OutputPin for OutPin<P, N> {
    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set_low();
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set_high();
        Ok(())
    }
}

/// Busy-wait delay counted in core cycles. `Copy`, so each actuator gets its own.
#[derive(Copy, Clone)]
pub struct CycleDelay {
    cycles_per_us: u32,
}

impl CycleDelay {
    pub fn new(sysclk_hz: u32) -> Self {
        Self {
            cycles_per_us: (sysclk_hz / 1_000_000).max(1),
        }
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = (ns as u64 * self.cycles_per_us as u64 / 1_000).max(1);
        cortex_m::asm::delay(cycles.min(u32::MAX as u64) as u32);
    }

    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            cortex_m::asm::delay(self.cycles_per_us * 1_000);
        }
    }
}

/// Any I2C bus failure.
#[derive(Copy, Clone, Debug)]
pub struct I2cFault;

impl i2c::Error for I2cFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// `embedded-hal` 1.0 `I2c` over a 0.2 blocking bus.
pub struct I2cCompat<I>(I);

impl<I> I2cCompat<I> {
    pub fn new(bus: I) -> Self {
        Self(bus)
    }
}

impl<I> i2c::ErrorType for I2cCompat<I> {
    type Error = I2cFault;
}

impl<I> i2c::I2c for I2cCompat<I>
where
    I: i2c_02::Write + i2c_02::WriteRead + i2c_02::Read,
{
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), I2cFault> {
        // Register reads are a write followed by a repeated-start read.
        if let [Operation::Write(w), Operation::Read(r)] = operations {
            return self.0.write_read(address, w, r).map_err(|_| I2cFault);
        }

        for op in operations {
            match op {
                Operation::Write(w) => self.0.write(address, w).map_err(|_| I2cFault)?,
                Operation::Read(r) => self.0.read(address, r).map_err(|_| I2cFault)?,
            }
        }
        Ok(())
    }
}
