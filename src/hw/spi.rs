// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial Peripheral Interface (SPI) abstraction layer.
//!
//! - `ConfigurableSpi` is a byte-synchronous SPI bus whose bit order and clock mode can be read
//!   back and changed at run time.
//! - `with_config` applies a device's bus settings for the duration of one operation and puts the
//!   previous settings back afterwards, so devices with different requirements can share the bus.

use embedded_hal::spi::{self, Mode, MODE_0};

use crate::error::Error;

/// Order in which the bits of each byte are shifted out.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Bit order and clock polarity/phase of the bus.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    pub bit_order: BitOrder,
    pub mode: Mode,
}

impl BusConfig {
    /// MSB first, CPOL=0, CPHA=0.
    pub const MSB_MODE_0: BusConfig = BusConfig {
        bit_order: BitOrder::MsbFirst,
        mode: MODE_0,
    };

    pub const fn new(bit_order: BitOrder, mode: Mode) -> Self {
        Self { bit_order, mode }
    }
}

/// SPI bus with run-time readable and writable configuration.
///
/// The bus is never owned by a device driver. It is passed in as `&mut` to each operation so that
/// several devices (each with its own chip select) can share it.
pub trait ConfigurableSpi: spi::ErrorType {
    /// Currently active bit order and mode.
    fn config(&self) -> BusConfig;

    /// Apply a new bit order and mode.
    fn set_config(&mut self, config: BusConfig) -> Result<(), Self::Error>;

    /// Perform a blocking, full-duplex transfer of one byte.
    fn transfer_byte(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Send a byte, ignoring the response.
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        let _ = self.transfer_byte(byte)?;
        Ok(())
    }

    /// Read a byte, sending 0x00.
    #[inline]
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.transfer_byte(0x00)
    }
}

impl<T: ConfigurableSpi + ?Sized> ConfigurableSpi for &mut T {
    fn config(&self) -> BusConfig {
        T::config(self)
    }

    fn set_config(&mut self, config: BusConfig) -> Result<(), Self::Error> {
        T::set_config(self, config)
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<u8, Self::Error> {
        T::transfer_byte(self, byte)
    }
}

/// Run `f` with `config` applied to `bus`, restoring the previous configuration before returning.
///
/// The restore happens whether or not `f` (or applying `config`) failed. If both the operation and
/// the restore fail, the operation's error is returned.
pub fn with_config<B, T, F>(bus: &mut B, config: BusConfig, f: F) -> Result<T, Error>
where
    B: ConfigurableSpi + ?Sized,
    F: FnOnce(&mut B) -> Result<T, Error>,
{
    let saved = bus.config();

    let result = match bus.set_config(config) {
        Ok(()) => f(bus),
        Err(e) => Err(Error::spi(e)),
    };

    let restored = bus.set_config(saved);

    let value = result?;
    restored.map_err(Error::spi)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{FailingBus, RecordingBus};
    use embedded_hal::spi::MODE_3;

    const OTHER: BusConfig = BusConfig::new(BitOrder::LsbFirst, MODE_3);

    #[test]
    fn config_applied_inside_and_restored_after() {
        let mut bus = RecordingBus::new(OTHER);

        let seen = with_config(&mut bus, BusConfig::MSB_MODE_0, |bus| Ok(bus.config())).unwrap();

        assert_eq!(seen, BusConfig::MSB_MODE_0);
        assert_eq!(bus.config(), OTHER);
    }

    #[test]
    fn config_restored_when_operation_fails() {
        let mut bus = RecordingBus::new(OTHER);

        let res: Result<(), Error> = with_config(&mut bus, BusConfig::MSB_MODE_0, |bus| {
            bus.write_byte(0xAA).map_err(Error::spi)?;
            Err(Error::NotInitialized)
        });

        assert_eq!(res, Err(Error::NotInitialized));
        assert_eq!(bus.config(), OTHER);
        assert_eq!(bus.sent(), &[0xAA]);
    }

    #[test]
    fn transfer_errors_map_to_spi_kind() {
        let mut bus = FailingBus::new(OTHER);

        let res = with_config(&mut bus, BusConfig::MSB_MODE_0, |bus| {
            bus.read_byte().map_err(Error::spi)
        });

        assert_eq!(res, Err(Error::Spi(spi::ErrorKind::ModeFault)));
        assert_eq!(bus.config(), OTHER);
    }

    #[test]
    fn read_byte_sends_dummy_zero() {
        let mut bus = RecordingBus::new(BusConfig::MSB_MODE_0);
        bus.queue_response(0x42);

        assert_eq!(bus.read_byte().unwrap(), 0x42);
        assert_eq!(bus.sent(), &[0x00]);
    }
}
