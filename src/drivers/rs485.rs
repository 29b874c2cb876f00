// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! RS-485 transceiver direction control.
//!
//! Only the RE (receive enable) and DE (drive enable) lines are handled here; the UART carrying the
//! data is set up separately. RE and DE are independent: nothing stops a caller from enabling the
//! driver and the receiver at the same time.

use embedded_hal::digital::OutputPin;

use crate::error::Error;
use crate::hw::{BoardProfile, Level, OutputLine};

pub struct Rs485<PIN: OutputPin> {
    re: OutputLine<PIN>,
    de: OutputLine<PIN>,
}

impl<PIN: OutputPin> Rs485<PIN> {
    /// Take the RE and DE pins and drive both low.
    ///
    /// Fails with [`Error::UnsupportedBoard`] on boards without the RS-485 header.
    pub fn init(profile: &BoardProfile, re: PIN, de: PIN) -> Result<Self, Error> {
        if !profile.has_rs485() {
            return Err(Error::UnsupportedBoard);
        }
        let re = OutputLine::new(re)?;
        let de = OutputLine::new(de)?;
        debug!("rs485: RE/DE low");
        Ok(Self { re, de })
    }

    /// Drive RE high (`1`) or low (`0`). Other values fail with [`Error::InvalidMode`].
    pub fn switch_re(&mut self, mode: i8) -> Result<(), Error> {
        self.re.set_mode(mode)
    }

    /// Drive DE high (`1`) or low (`0`). Other values fail with [`Error::InvalidMode`].
    pub fn switch_de(&mut self, mode: i8) -> Result<(), Error> {
        self.de.set_mode(mode)
    }

    #[inline]
    pub fn set_re(&mut self, level: Level) -> Result<(), Error> {
        self.re.set(level)
    }

    #[inline]
    pub fn set_de(&mut self, level: Level) -> Result<(), Error> {
        self.de.set(level)
    }

    #[inline]
    pub fn re_level(&self) -> Level {
        self.re.level()
    }

    #[inline]
    pub fn de_level(&self) -> Level {
        self.de.level()
    }

    /// Release the (RE, DE) pins.
    pub fn free(self) -> (PIN, PIN) {
        (self.re.free(), self.de.free())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::BoardVariant;
    use crate::testutil::FakePin;

    fn transceiver() -> Rs485<FakePin> {
        Rs485::init(BoardVariant::Maxi.profile(), FakePin::new(), FakePin::new()).unwrap()
    }

    #[test]
    fn init_drives_both_low() {
        let re = FakePin::new();
        let de = FakePin::new();
        let (re_log, de_log) = (re.log(), de.log());

        let rs = Rs485::init(BoardVariant::Mega.profile(), re, de).unwrap();

        assert_eq!(rs.re_level(), Level::Low);
        assert_eq!(rs.de_level(), Level::Low);
        assert_eq!(re_log.borrow().writes, [false]);
        assert_eq!(de_log.borrow().writes, [false]);
    }

    #[test]
    fn mini_has_no_transceiver() {
        let res = Rs485::init(BoardVariant::Mini.profile(), FakePin::new(), FakePin::new());

        assert!(matches!(res, Err(Error::UnsupportedBoard)));
    }

    #[test]
    fn switch_lines_independently() {
        let mut rs = transceiver();

        rs.switch_de(1).unwrap();
        assert_eq!(rs.de_level(), Level::High);
        assert_eq!(rs.re_level(), Level::Low);

        rs.switch_re(1).unwrap();
        rs.switch_de(0).unwrap();
        assert_eq!(rs.re_level(), Level::High);
        assert_eq!(rs.de_level(), Level::Low);
    }

    #[test]
    fn invalid_modes_leave_gpio_unchanged() {
        let re = FakePin::new();
        let de = FakePin::new();
        let (re_log, de_log) = (re.log(), de.log());
        let mut rs = Rs485::init(BoardVariant::Maxi.profile(), re, de).unwrap();

        assert_eq!(rs.switch_re(2), Err(Error::InvalidMode(2)));
        assert_eq!(rs.switch_de(-1), Err(Error::InvalidMode(-1)));
        assert_eq!(rs.switch_re(2).unwrap_err().code(), -1);

        assert_eq!(re_log.borrow().writes, [false]);
        assert_eq!(de_log.borrow().writes, [false]);
    }

    #[test]
    fn both_enabled_is_not_prevented() {
        let mut rs = transceiver();

        rs.set_re(Level::High).unwrap();
        rs.set_de(Level::High).unwrap();

        assert_eq!(rs.re_level(), Level::High);
        assert_eq!(rs.de_level(), Level::High);
    }
}
