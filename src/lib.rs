// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # plcboard
//!
//! Board support for the PLC carrier: an RV-2123 real-time clock on the shared SPI bus and the
//! RE/DE direction lines of the RS-485 transceiver. Everything here is written against
//! `embedded-hal` traits so the same code runs on the target and in host tests.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Bus configuration, chip-select and GPIO line wrappers, board profiles |
//! | [`drivers`] | Device-level drivers (RV-2123, RS-485 transceiver) |
//! | [`error`] | Crate error type and legacy status codes |
//!
//! ## Usage
//!
//! ```ignore
//! let profile = BoardProfile::lookup(BoardVariant::configured())?;
//! let cs = ChipSelect::active_high(cs_pin, mirror_pin)?;
//! let mut rtc = Rv2123::new(cs);
//!
//! rtc.init(&mut spi_bus)?;
//! rtc.set_time_date(&mut spi_bus, TimeDate::new(15, 6, 24, 13, 45, 30))?;
//! let now = rtc.read_time_date(&mut spi_bus)?;
//! ```
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod drivers;
pub mod error;
pub mod hw;

#[cfg(test)]
mod testutil;

pub use drivers::{Fields, PartialTimeDate, Rs485, Rv2123, TimeDate};
pub use error::Error;
pub use hw::{BitOrder, BoardProfile, BoardVariant, BusConfig, ChipSelect, ConfigurableSpi};
