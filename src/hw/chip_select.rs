// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Manual chip-select control.
//!
//! Several devices share the SPI bus, so select lines are plain GPIO outputs toggled around each
//! transaction rather than a hardware-managed NSS. Some boards route a select signal to two pins
//! at once; the optional mirror line is driven in lockstep with the primary one.

use embedded_hal::digital::OutputPin;

use super::gpio::{ActiveLevel, Level, OutputLine};
use crate::error::Error;

pub struct ChipSelect<PIN: OutputPin> {
    line: OutputLine<PIN>,
    mirror: Option<OutputLine<PIN>>,
    active: ActiveLevel,
    asserted: bool,
}

impl<PIN: OutputPin> ChipSelect<PIN> {
    /// Create a chip select with the given polarity and drive it to the inactive level.
    pub fn new(pin: PIN, mirror: Option<PIN>, active: ActiveLevel) -> Result<Self, Error> {
        let line = OutputLine::new(pin)?;
        let mirror = match mirror {
            Some(pin) => Some(OutputLine::new(pin)?),
            None => None,
        };
        let mut cs = Self {
            line,
            mirror,
            active,
            asserted: false,
        };
        cs.init()?;
        Ok(cs)
    }

    /// Active-high chip select (asserted = high), as used by the RV-2123.
    pub fn active_high(pin: PIN, mirror: Option<PIN>) -> Result<Self, Error> {
        Self::new(pin, mirror, ActiveLevel::High)
    }

    /// Active-low chip select (asserted = low).
    pub fn active_low(pin: PIN, mirror: Option<PIN>) -> Result<Self, Error> {
        Self::new(pin, mirror, ActiveLevel::Low)
    }

    /// Drive the line(s) to the inactive level. Safe to call repeatedly.
    pub fn init(&mut self) -> Result<(), Error> {
        self.deselect()
    }

    /// Assert the chip select.
    ///
    /// If any line fails to assert, all lines are driven back to idle and the assert error is
    /// returned.
    pub fn select(&mut self) -> Result<(), Error> {
        if let Err(e) = self.drive(self.active.asserted()) {
            let _ = self.deselect();
            return Err(e);
        }
        self.asserted = true;
        Ok(())
    }

    /// Deassert the chip select.
    #[inline]
    pub fn deselect(&mut self) -> Result<(), Error> {
        self.drive(self.active.idle())?;
        self.asserted = false;
        Ok(())
    }

    /// `1` asserts, `0` deasserts. Any other value fails with [`Error::InvalidMode`] and leaves the
    /// line(s) untouched.
    pub fn set_mode(&mut self, mode: i8) -> Result<(), Error> {
        match Level::try_from(mode)? {
            Level::High => self.select(),
            Level::Low => self.deselect(),
        }
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.asserted
    }

    /// Level currently driven on the primary line.
    #[inline]
    pub fn level(&self) -> Level {
        self.line.level()
    }

    pub fn free(self) -> (PIN, Option<PIN>) {
        (self.line.free(), self.mirror.map(OutputLine::free))
    }

    fn drive(&mut self, level: Level) -> Result<(), Error> {
        self.line.set(level)?;
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.set(level)?;
        }
        Ok(())
    }
}
