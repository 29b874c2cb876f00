// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! Drivers that sit above the `hw/` layer and below the application.
//!
//! ## Existing drivers
//!
//! - [`rv2123`] – Micro Crystal RV-2123 SPI real-time clock
//! - [`rs485`] – RE/DE direction control of the RS-485 transceiver

pub mod bcd;
pub mod rs485;
pub mod rv2123;
pub mod time_date;

pub use rs485::Rs485;
pub use rv2123::Rv2123;
pub use time_date::{Fields, PartialTimeDate, TimeDate};
