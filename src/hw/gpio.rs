// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

use embedded_hal::digital::OutputPin;

use crate::error::Error;

/// Logic level of an output line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl TryFrom<i8> for Level {
    type Error = Error;

    /// `0` is low, `1` is high. Anything else is rejected.
    fn try_from(mode: i8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(Level::Low),
            1 => Ok(Level::High),
            other => Err(Error::InvalidMode(other)),
        }
    }
}

/// Whether a line is asserted by driving it high or low.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

impl ActiveLevel {
    #[inline]
    pub fn asserted(self) -> Level {
        match self {
            ActiveLevel::High => Level::High,
            ActiveLevel::Low => Level::Low,
        }
    }

    #[inline]
    pub fn idle(self) -> Level {
        match self {
            ActiveLevel::High => Level::Low,
            ActiveLevel::Low => Level::High,
        }
    }
}

/// Push-pull output that remembers the level it last drove.
pub struct OutputLine<PIN: OutputPin> {
    pin: PIN,
    level: Level,
}

impl<PIN: OutputPin> OutputLine<PIN> {
    /// Wrap an output pin and drive it low.
    pub fn new(pin: PIN) -> Result<Self, Error> {
        let mut line = Self {
            pin,
            level: Level::Low,
        };
        line.set(Level::Low)?;
        Ok(line)
    }

    pub fn set(&mut self, level: Level) -> Result<(), Error> {
        let res = match level {
            Level::High => self.pin.set_high(),
            Level::Low => self.pin.set_low(),
        };
        res.map_err(Error::pin)?;
        self.level = level;
        Ok(())
    }

    /// Drive the line from a numeric mode (0 low, 1 high). Invalid modes leave the line untouched.
    pub fn set_mode(&mut self, mode: i8) -> Result<(), Error> {
        let level = Level::try_from(mode)?;
        self.set(level)
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline]
    pub fn is_high(&self) -> bool {
        self.level == Level::High
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}
