// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! RV-2123 SPI real-time clock driver.
//!
//! Each register access is its own transaction: assert chip select, send the command byte, send
//! (write) or clock out (read) one data byte, deassert. The chip select is active-high. Every
//! operation switches the bus to MSB-first mode 0 for its transfers and restores whatever the bus
//! was configured for beforehand.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::time_date::{Fields, PartialTimeDate, TimeDate, SLOTS, TIME_SLOTS};
use crate::error::Error;
use crate::hw::spi::{with_config, BusConfig, ConfigurableSpi};
use crate::hw::ChipSelect;

// Register addresses
pub mod reg {
    pub const CONTROL_1: u8 = 0x00;
    pub const SECONDS: u8 = 0x02;
    pub const MINUTES: u8 = 0x03;
    pub const HOURS: u8 = 0x04;
    pub const DAYS: u8 = 0x05;
    pub const WEEKDAYS: u8 = 0x06;
    pub const MONTHS: u8 = 0x07;
    pub const YEARS: u8 = 0x08;
}

// Command bytes
pub mod cmd {
    /// OR'ed with a register address to write it.
    pub const WRITE: u8 = 0x10;
    /// OR'ed with a register address to read it.
    pub const READ: u8 = 0x90;
    /// Written to CONTROL_1.
    pub const SOFTWARE_RESET: u8 = 0x58;
}

/// Settle time after a software reset.
pub const RESET_DELAY_MS: u32 = 10;

/// MSB first, mode 0. The chip also accepts modes 1 and 3.
pub const BUS_CONFIG: BusConfig = BusConfig::MSB_MODE_0;

/// Write command for a time slot (`0x12` for seconds).
#[inline]
const fn write_command(slot: usize) -> u8 {
    cmd::WRITE | (reg::SECONDS + slot as u8)
}

/// Read command for a time slot (`0x92` for seconds).
#[inline]
const fn read_command(slot: usize) -> u8 {
    cmd::READ | (reg::SECONDS + slot as u8)
}

/// RV-2123 driver bound to its chip-select line.
///
/// The SPI bus is passed in as `&mut` to every method so the RTC can share the bus with other
/// devices.
pub struct Rv2123<PIN: OutputPin> {
    cs: ChipSelect<PIN>,
    initialized: bool,
}

impl<PIN: OutputPin> Rv2123<PIN> {
    /// Construct an uninitialized driver. Only [`init`](Self::init) or
    /// [`init_with_reset`](Self::init_with_reset) make it usable.
    pub fn new(cs: ChipSelect<PIN>) -> Self {
        Self {
            cs,
            initialized: false,
        }
    }

    /// Release the chip-select line.
    pub fn free(self) -> ChipSelect<PIN> {
        self.cs
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Idle the chip select and prepare the bus. No presence check is made: a missing chip shows
    /// up later as garbage reads, not as an error here.
    pub fn init<B>(&mut self, bus: &mut B) -> Result<(), Error>
    where
        B: ConfigurableSpi + ?Sized,
    {
        self.cs.init()?;
        with_config(bus, BUS_CONFIG, |_| Ok(()))?;
        self.initialized = true;
        debug!("rv2123: initialized");
        Ok(())
    }

    /// Like [`init`](Self::init), and additionally issue a software reset and wait for the chip
    /// to settle. Resetting clears the clock, so this is opt-in.
    pub fn init_with_reset<B, D>(&mut self, bus: &mut B, delay: &mut D) -> Result<(), Error>
    where
        B: ConfigurableSpi + ?Sized,
        D: DelayNs,
    {
        self.cs.init()?;
        with_config(bus, BUS_CONFIG, |bus| {
            self.transaction(bus, cmd::WRITE | reg::CONTROL_1, cmd::SOFTWARE_RESET)
                .map(|_| ())
        })?;
        delay.delay_ms(RESET_DELAY_MS);
        self.initialized = true;
        debug!("rv2123: initialized after software reset");
        Ok(())
    }

    /// Write date and time to the chip. Values are BCD-encoded without range checks.
    pub fn set_time_date<B>(&mut self, bus: &mut B, time: TimeDate) -> Result<(), Error>
    where
        B: ConfigurableSpi + ?Sized,
    {
        self.ensure_initialized()?;
        let regs = time.to_registers();

        with_config(bus, BUS_CONFIG, |bus| {
            for slot in TIME_SLOTS {
                self.transaction(bus, write_command(slot), regs[slot])?;
            }
            Ok(())
        })?;

        debug!("rv2123: time set");
        Ok(())
    }

    /// Read the requested fields. All six time registers are transferred regardless of `fields`.
    pub fn read_fields<B>(&mut self, bus: &mut B, fields: Fields) -> Result<PartialTimeDate, Error>
    where
        B: ConfigurableSpi + ?Sized,
    {
        Ok(self.read_time_date(bus)?.select(fields))
    }

    /// Read all six fields.
    pub fn read_time_date<B>(&mut self, bus: &mut B) -> Result<TimeDate, Error>
    where
        B: ConfigurableSpi + ?Sized,
    {
        let regs = self.read_registers(bus)?;
        Ok(TimeDate::from_registers(&regs))
    }

    pub fn day<B: ConfigurableSpi + ?Sized>(&mut self, bus: &mut B) -> Result<u8, Error> {
        Ok(self.read_time_date(bus)?.day)
    }

    pub fn month<B: ConfigurableSpi + ?Sized>(&mut self, bus: &mut B) -> Result<u8, Error> {
        Ok(self.read_time_date(bus)?.month)
    }

    pub fn year<B: ConfigurableSpi + ?Sized>(&mut self, bus: &mut B) -> Result<u8, Error> {
        Ok(self.read_time_date(bus)?.year)
    }

    pub fn hour<B: ConfigurableSpi + ?Sized>(&mut self, bus: &mut B) -> Result<u8, Error> {
        Ok(self.read_time_date(bus)?.hour)
    }

    pub fn minute<B: ConfigurableSpi + ?Sized>(&mut self, bus: &mut B) -> Result<u8, Error> {
        Ok(self.read_time_date(bus)?.minute)
    }

    pub fn second<B: ConfigurableSpi + ?Sized>(&mut self, bus: &mut B) -> Result<u8, Error> {
        Ok(self.read_time_date(bus)?.second)
    }

    /// Read the clock and write it to `out` as `D/M/Y   H:M:S` followed by CRLF.
    ///
    /// Nothing is written if the read fails.
    pub fn print_time_and_date<B, W>(&mut self, bus: &mut B, out: &mut W) -> Result<(), Error>
    where
        B: ConfigurableSpi + ?Sized,
        W: fmt::Write,
    {
        let now = self.read_time_date(bus)?;
        write!(out, "{now}\r\n")?;
        Ok(())
    }

    #[inline]
    fn ensure_initialized(&self) -> Result<(), Error> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn read_registers<B>(&mut self, bus: &mut B) -> Result<[u8; SLOTS], Error>
    where
        B: ConfigurableSpi + ?Sized,
    {
        self.ensure_initialized()?;

        with_config(bus, BUS_CONFIG, |bus| {
            let mut regs = [0u8; SLOTS];
            for slot in TIME_SLOTS {
                regs[slot] = self.transaction(bus, read_command(slot), 0x00)?;
            }
            Ok(regs)
        })
    }

    /// One select-framed exchange: command byte, then `data`. Returns the byte clocked in with
    /// `data`. The chip select is released even if a transfer fails.
    fn transaction<B>(&mut self, bus: &mut B, command: u8, data: u8) -> Result<u8, Error>
    where
        B: ConfigurableSpi + ?Sized,
    {
        self.cs.select()?;
        let result = bus
            .write_byte(command)
            .and_then(|()| bus.transfer_byte(data));
        let released = self.cs.deselect();

        let received = result.map_err(Error::spi)?;
        released?;
        trace!("rv2123: {=u8:#x} {=u8:#x} -> {=u8:#x}", command, data, received);
        Ok(received)
    }
}
