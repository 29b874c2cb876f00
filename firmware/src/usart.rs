// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART debug console.
//!
//! Line-oriented output for the bring-up binary: board banner, driver errors with their legacy status
//! codes, and the RTC's `print_time_and_date` output through `core::fmt::Write`.
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```
//! $ screen /dev/tty.usbmodem* 115200
//! ```

use core::fmt::{self, Write as _};
use nb::block;

use plcboard::{BoardProfile, Error};
use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

pub struct Console<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Console<U> {
    /// Take the TX half of a configured serial port. RX is not used.
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    /// Announce the board variant and where its peripherals are routed.
    pub fn banner(&mut self, profile: &BoardProfile) {
        let _ = write!(self, "plcboard: variant {}, RTC CS {}", profile.variant, profile.rtc_cs);
        if let Some(mirror) = profile.rtc_cs_mirror {
            let _ = write!(self, " (+{mirror})");
        }
        match profile.rs485 {
            Some(pins) => {
                let _ = write!(self, ", RS-485 RE {} DE {}\r\n", pins.re, pins.de);
            }
            None => {
                let _ = self.write_str(", no RS-485\r\n");
            }
        }
    }

    /// `<what>: <error> (<status code>)`
    pub fn report(&mut self, what: &str, err: Error) {
        let _ = write!(self, "{what}: {err} ({})\r\n", err.code());
        defmt::error!("{=str}: {}", what, err);
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }
}

impl<U: Instance> fmt::Write for Console<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
        Ok(())
    }
}
