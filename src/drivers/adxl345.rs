// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! ADXL345 3-axis accelerometer over I2C.
//!
//! This module handles register access and sample scaling. The device runs in full-resolution
//! mode, where every range reports 3.9 mg/LSB, so samples come out in g regardless of range.

use embedded_hal::i2c::I2c;

use crate::sensors::{RawAccel, Tilt};

/// I2C address with ALT ADDRESS tied low.
pub const ADDR_ALT_LOW: u8 = 0x53;
/// I2C address with ALT ADDRESS tied high.
pub const ADDR_ALT_HIGH: u8 = 0x1D;

/// Value of the DEVID register.
pub const DEVICE_ID: u8 = 0xE5;

/// Full-resolution scale factor.
pub const G_PER_LSB: f32 = 0.0039;

// Register addresses
pub mod reg {
    pub const DEVID: u8 = 0x00;
    pub const BW_RATE: u8 = 0x2C;
    pub const POWER_CTL: u8 = 0x2D;
    pub const DATA_FORMAT: u8 = 0x31;
    pub const DATAX0: u8 = 0x32;
}

/// POWER_CTL: measurement mode.
const POWER_CTL_MEASURE: u8 = 1 << 3;
/// DATA_FORMAT: full resolution.
const DATA_FORMAT_FULL_RES: u8 = 1 << 3;
/// BW_RATE: 100 Hz output data rate.
const BW_RATE_100HZ: u8 = 0x0A;

/// Measurement range (DATA_FORMAT bits 1:0).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Range {
    G2 = 0b00,
    G4 = 0b01,
    G8 = 0b10,
    G16 = 0b11,
}

/// Driver errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Adxl345Error<E> {
    /// The bus transaction failed.
    Bus(E),
    /// DEVID did not read back as [`DEVICE_ID`].
    WrongDevice(u8),
}

/// ADXL345 bound to an I2C bus and address.
pub struct Adxl345<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Adxl345<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the bus.
    pub fn free(self) -> I2C {
        self.i2c
    }

    /// Check the device id, then configure range and rate and start measuring.
    pub fn init(&mut self, range: Range) -> Result<(), Adxl345Error<I2C::Error>> {
        let id = self.device_id()?;
        if id != DEVICE_ID {
            return Err(Adxl345Error::WrongDevice(id));
        }

        self.write_reg(reg::DATA_FORMAT, DATA_FORMAT_FULL_RES | range as u8)?;
        self.write_reg(reg::BW_RATE, BW_RATE_100HZ)?;
        self.write_reg(reg::POWER_CTL, POWER_CTL_MEASURE)?;
        debug!("adxl345 ready at {=u8:#x}", self.address);
        Ok(())
    }

    /// Read the DEVID register.
    pub fn device_id(&mut self) -> Result<u8, Adxl345Error<I2C::Error>> {
        self.read_reg(reg::DEVID)
    }

    /// Read the three axes as raw signed counts.
    pub fn read_counts(&mut self) -> Result<[i16; 3], Adxl345Error<I2C::Error>> {
        let mut buf = [0u8; 6];
        self.i2c
            .write_read(self.address, &[reg::DATAX0], &mut buf)
            .map_err(Adxl345Error::Bus)?;

        Ok([
            i16::from_le_bytes([buf[0], buf[1]]),
            i16::from_le_bytes([buf[2], buf[3]]),
            i16::from_le_bytes([buf[4], buf[5]]),
        ])
    }

    fn read_reg(&mut self, addr: u8) -> Result<u8, Adxl345Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[addr], &mut buf)
            .map_err(Adxl345Error::Bus)?;
        Ok(buf[0])
    }

    fn write_reg(&mut self, addr: u8, value: u8) -> Result<(), Adxl345Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[addr, value])
            .map_err(Adxl345Error::Bus)
    }
}

impl<I2C: I2c> Tilt for Adxl345<I2C> {
    type Error = Adxl345Error<I2C::Error>;

    fn read_raw(&mut self) -> Result<RawAccel, Self::Error> {
        let [x, y, z] = self.read_counts()?;
        Ok(RawAccel::new(
            x as f32 * G_PER_LSB,
            y as f32 * G_PER_LSB,
            z as f32 * G_PER_LSB,
        ))
    }
}
