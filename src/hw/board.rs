// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board variants and their pin routing.
//!
//! The three carrier variants differ only in where the RTC select line is routed and whether the
//! RS-485 header is populated. The variant is an ordinary value: pick it from Cargo features with
//! [`BoardVariant::configured`] or parse it at run time, then look up its [`BoardProfile`].

use core::fmt;
use core::str::FromStr;

use crate::error::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardVariant {
    Maxi,
    Mega,
    Mini,
}

impl BoardVariant {
    pub const ALL: [BoardVariant; 3] = [BoardVariant::Maxi, BoardVariant::Mega, BoardVariant::Mini];

    /// Variant selected by the `maxi`, `mega` or `mini` Cargo feature, in that order of
    /// precedence. `None` if no variant feature is enabled.
    pub const fn configured() -> Option<BoardVariant> {
        if cfg!(feature = "maxi") {
            Some(BoardVariant::Maxi)
        } else if cfg!(feature = "mega") {
            Some(BoardVariant::Mega)
        } else if cfg!(feature = "mini") {
            Some(BoardVariant::Mini)
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BoardVariant::Maxi => "maxi",
            BoardVariant::Mega => "mega",
            BoardVariant::Mini => "mini",
        }
    }

    #[inline]
    pub fn profile(self) -> &'static BoardProfile {
        &PROFILES[self as usize]
    }
}

impl FromStr for BoardVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardVariant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(Error::UnsupportedBoard)
    }
}

impl fmt::Display for BoardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// GPIO port letter and pin number, e.g. `PJ2`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    pub port: char,
    pub pin: u8,
}

impl PinId {
    pub const fn new(port: char, pin: u8) -> Self {
        Self { port, pin }
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port, self.pin)
    }
}

/// RS-485 transceiver direction lines.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rs485PinIds {
    /// Receive enable.
    pub re: PinId,
    /// Drive enable.
    pub de: PinId,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardProfile {
    pub variant: BoardVariant,
    /// RTC chip-select line.
    pub rtc_cs: PinId,
    /// Second pin driven together with `rtc_cs`, if the board routes the select signal to a header
    /// output as well.
    pub rtc_cs_mirror: Option<PinId>,
    /// `None` on boards without the RS-485 header.
    pub rs485: Option<Rs485PinIds>,
}

impl BoardProfile {
    /// Profile for `variant`, or [`Error::UnsupportedBoard`] when no variant is configured.
    pub fn lookup(variant: Option<BoardVariant>) -> Result<&'static BoardProfile, Error> {
        variant
            .map(BoardVariant::profile)
            .ok_or(Error::UnsupportedBoard)
    }

    #[inline]
    pub fn has_rs485(&self) -> bool {
        self.rs485.is_some()
    }
}

const RS485_J: Rs485PinIds = Rs485PinIds {
    re: PinId::new('J', 5),
    de: PinId::new('J', 6),
};

// Indexed by `BoardVariant as usize`.
static PROFILES: [BoardProfile; 3] = [
    BoardProfile {
        variant: BoardVariant::Maxi,
        rtc_cs: PinId::new('J', 2),
        rtc_cs_mirror: Some(PinId::new('E', 4)), // digital out 00
        rs485: Some(RS485_J),
    },
    BoardProfile {
        variant: BoardVariant::Mega,
        rtc_cs: PinId::new('J', 2),
        rtc_cs_mirror: Some(PinId::new('E', 4)), // digital out 00
        rs485: Some(RS485_J),
    },
    BoardProfile {
        variant: BoardVariant::Mini,
        rtc_cs: PinId::new('B', 2), // pin header SS
        rtc_cs_mirror: None,
        rs485: None,
    },
];
