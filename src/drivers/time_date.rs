// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Calendar values exchanged with the RTC and their register image.

use core::fmt;

use bitflags::bitflags;

use super::bcd;

/// Number of registers in the time block, weekday included.
pub const SLOTS: usize = 7;

/// Slot of the weekday register. It is never read or written.
pub const WEEKDAY_SLOT: usize = 4;

/// Slots that carry a value, in chip order: second, minute, hour, day, month, year.
pub const TIME_SLOTS: [usize; 6] = [0, 1, 2, 3, 5, 6];

const SECOND: usize = 0;
const MINUTE: usize = 1;
const HOUR: usize = 2;
const DAY: usize = 3;
const MONTH: usize = 5;
const YEAR: usize = 6;

/// Date and time in plain decimal.
///
/// Nominal ranges: second and minute 0–59, hour 0–23, day 1–31, month 1–12, year 0–99 (within the
/// century). Values are not validated.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeDate {
    pub day: u8,
    pub month: u8,
    pub year: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeDate {
    pub const fn new(day: u8, month: u8, year: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            day,
            month,
            year,
            hour,
            minute,
            second,
        }
    }

    /// BCD register image. The weekday slot is left at 0.
    pub fn to_registers(&self) -> [u8; SLOTS] {
        let mut regs = [0u8; SLOTS];
        regs[SECOND] = bcd::encode(self.second);
        regs[MINUTE] = bcd::encode(self.minute);
        regs[HOUR] = bcd::encode(self.hour);
        regs[DAY] = bcd::encode(self.day);
        regs[MONTH] = bcd::encode(self.month);
        regs[YEAR] = bcd::encode(self.year);
        regs
    }

    /// Decode a register image as read back from the chip. The weekday slot is ignored.
    pub fn from_registers(regs: &[u8; SLOTS]) -> Self {
        Self {
            second: bcd::decode_sixty(regs[SECOND]),
            minute: bcd::decode_sixty(regs[MINUTE]),
            hour: bcd::decode_hours(regs[HOUR]),
            day: bcd::decode_day(regs[DAY]),
            month: bcd::decode_month(regs[MONTH]),
            year: bcd::decode_year(regs[YEAR]),
        }
    }

    /// Keep only the fields named in `fields`.
    pub fn select(&self, fields: Fields) -> PartialTimeDate {
        let pick = |flag: Fields, value: u8| fields.contains(flag).then_some(value);
        PartialTimeDate {
            day: pick(Fields::DAY, self.day),
            month: pick(Fields::MONTH, self.month),
            year: pick(Fields::YEAR, self.year),
            hour: pick(Fields::HOUR, self.hour),
            minute: pick(Fields::MINUTE, self.minute),
            second: pick(Fields::SECOND, self.second),
        }
    }
}

/// `D/M/Y   H:M:S`, plain decimal without padding.
impl fmt::Display for TimeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}   {}:{}:{}",
            self.day, self.month, self.year, self.hour, self.minute, self.second
        )
    }
}

bitflags! {
    /// Fields requested from a read.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Fields: u8 {
        const DAY    = 1 << 0;
        const MONTH  = 1 << 1;
        const YEAR   = 1 << 2;
        const HOUR   = 1 << 3;
        const MINUTE = 1 << 4;
        const SECOND = 1 << 5;

        const DATE = Self::DAY.bits() | Self::MONTH.bits() | Self::YEAR.bits();
        const TIME = Self::HOUR.bits() | Self::MINUTE.bits() | Self::SECOND.bits();
    }
}

/// Result of a read restricted to a set of [`Fields`]. Unrequested fields are `None`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PartialTimeDate {
    pub day: Option<u8>,
    pub month: Option<u8>,
    pub year: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
}

impl PartialTimeDate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// All six fields, if every one of them was requested.
    pub fn complete(&self) -> Option<TimeDate> {
        Some(TimeDate {
            day: self.day?,
            month: self.month?,
            year: self.year?,
            hour: self.hour?,
            minute: self.minute?,
            second: self.second?,
        })
    }
}
