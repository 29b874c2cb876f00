// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod board;
pub mod chip_select;
pub mod gpio;
pub mod spi;

pub use board::{BoardProfile, BoardVariant, PinId, Rs485PinIds};
pub use chip_select::ChipSelect;
pub use gpio::{ActiveLevel, Level, OutputLine};
pub use spi::{with_config, BitOrder, BusConfig, ConfigurableSpi};
