// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Crate error type.
//!
//! Every fallible entry point returns [`Error`]. The firmware this crate replaces reported small
//! negative status codes instead; [`Error::code`] maps back onto them for callers that still speak
//! that protocol.

use core::fmt;

use embedded_hal::{digital, spi};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The RTC was used before `init` succeeded.
    NotInitialized,
    /// A GPIO switch was given a mode other than 0 (low) or 1 (high).
    InvalidMode(i8),
    /// No recognized board variant is configured, or the variant lacks the peripheral.
    UnsupportedBoard,
    /// The SPI implementation reported a transfer or configuration error.
    Spi(spi::ErrorKind),
    /// A GPIO implementation reported an error while driving a line.
    Pin(digital::ErrorKind),
    /// The text sink rejected formatted output.
    Output,
}

impl Error {
    /// Legacy status code for this error.
    ///
    /// | code | errors |
    /// | ---- | ------ |
    /// | -1 | `NotInitialized`, `InvalidMode` |
    /// | -2 | `UnsupportedBoard` |
    /// | -3 | `Spi`, `Pin` |
    /// | -4 | `Output` |
    pub fn code(&self) -> i8 {
        match self {
            Error::NotInitialized | Error::InvalidMode(_) => -1,
            Error::UnsupportedBoard => -2,
            Error::Spi(_) | Error::Pin(_) => -3,
            Error::Output => -4,
        }
    }

    #[inline]
    pub(crate) fn spi<E: spi::Error>(err: E) -> Self {
        Error::Spi(err.kind())
    }

    #[inline]
    pub(crate) fn pin<E: digital::Error>(err: E) -> Self {
        Error::Pin(err.kind())
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::Output
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInitialized => f.write_str("RTC not initialized"),
            Error::InvalidMode(mode) => write!(f, "unknown mode value {mode}"),
            Error::UnsupportedBoard => f.write_str("no supported board variant"),
            Error::Spi(kind) => write!(f, "SPI error: {kind}"),
            Error::Pin(kind) => write!(f, "GPIO error: {kind}"),
            Error::Output => f.write_str("output sink error"),
        }
    }
}

/// Status-code wrapper for results: `Ok` maps to 0, errors to [`Error::code`].
pub fn status<T>(result: &Result<T, Error>) -> i8 {
    match result {
        Ok(_) => 0,
        Err(e) => e.code(),
    }
}
