// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host-side test doubles: fake GPIO pins, recording SPI buses, and a simulated RV-2123 that decodes
//! chip-select framed commands against a register file.

use std::cell::RefCell;
use std::fmt;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::{digital, spi};

use crate::hw::{BusConfig, ConfigurableSpi};

pub type Shared<T> = Rc<RefCell<T>>;

fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

// GPIO

#[derive(Debug, Default)]
pub struct PinLog {
    pub high: bool,
    pub writes: Vec<bool>,
}

#[derive(Copy, Clone, Debug)]
pub struct PinError;

impl digital::Error for PinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// Output pin recording every level it is driven to. A pin wired to a simulated chip acts as that
/// chip's active-high select input.
pub struct FakePin {
    log: Shared<PinLog>,
    chip: Option<Shared<Rv2123Sim>>,
    fail_low: bool,
    fail_high: bool,
}

impl FakePin {
    pub fn new() -> Self {
        Self {
            log: shared(PinLog::default()),
            chip: None,
            fail_low: false,
            fail_high: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_low: true,
            fail_high: true,
            ..Self::new()
        }
    }

    /// Pin that can be driven low but rejects `set_high`.
    pub fn failing_high() -> Self {
        Self {
            fail_high: true,
            ..Self::new()
        }
    }

    pub fn wired(chip: &Shared<Rv2123Sim>) -> Self {
        Self {
            chip: Some(chip.clone()),
            ..Self::new()
        }
    }

    pub fn log(&self) -> Shared<PinLog> {
        self.log.clone()
    }

    fn drive(&mut self, high: bool) -> Result<(), PinError> {
        if (high && self.fail_high) || (!high && self.fail_low) {
            return Err(PinError);
        }
        let mut log = self.log.borrow_mut();
        log.high = high;
        log.writes.push(high);
        if let Some(chip) = &self.chip {
            chip.borrow_mut().set_select(high);
        }
        Ok(())
    }
}

impl digital::ErrorType for FakePin {
    type Error = PinError;
}

impl digital::OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

// SPI

/// Bus that records what was sent and replays queued responses (0x00 once the queue is empty).
pub struct RecordingBus {
    config: BusConfig,
    sent: Vec<u8>,
    responses: VecDeque<u8>,
}

impl RecordingBus {
    pub fn new(config: BusConfig) -> Self {
        Self {
            config,
            sent: Vec::new(),
            responses: VecDeque::new(),
        }
    }

    pub fn queue_response(&mut self, byte: u8) {
        self.responses.push_back(byte);
    }

    pub fn sent(&self) -> &[u8] {
        &self.sent
    }
}

impl spi::ErrorType for RecordingBus {
    type Error = Infallible;
}

impl ConfigurableSpi for RecordingBus {
    fn config(&self) -> BusConfig {
        self.config
    }

    fn set_config(&mut self, config: BusConfig) -> Result<(), Self::Error> {
        self.config = config;
        Ok(())
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<u8, Self::Error> {
        self.sent.push(byte);
        Ok(self.responses.pop_front().unwrap_or(0x00))
    }
}

#[derive(Copy, Clone, Debug)]
pub struct BusError(pub spi::ErrorKind);

impl spi::Error for BusError {
    fn kind(&self) -> spi::ErrorKind {
        self.0
    }
}

/// Bus whose configuration works but every transfer fails with a mode fault.
pub struct FailingBus {
    config: BusConfig,
}

impl FailingBus {
    pub fn new(config: BusConfig) -> Self {
        Self { config }
    }
}

impl spi::ErrorType for FailingBus {
    type Error = BusError;
}

impl ConfigurableSpi for FailingBus {
    fn config(&self) -> BusConfig {
        self.config
    }

    fn set_config(&mut self, config: BusConfig) -> Result<(), Self::Error> {
        self.config = config;
        Ok(())
    }

    fn transfer_byte(&mut self, _byte: u8) -> Result<u8, Self::Error> {
        Err(BusError(spi::ErrorKind::ModeFault))
    }
}

// RV-2123

/// Register-level RV-2123 model.
///
/// The first byte after select is the command (bit 7 set = read, low nibble = register); each
/// following byte reads or writes that register and advances the address.
#[derive(Debug, Default)]
pub struct Rv2123Sim {
    pub regs: [u8; 16],
    pub commands: Vec<u8>,
    /// Bus configuration seen with each command byte.
    pub configs: Vec<BusConfig>,
    /// Bytes clocked while the chip was not selected.
    pub stray: usize,
    pub resets: usize,
    selected: bool,
    command: Option<u8>,
    addr: u8,
}

impl Rv2123Sim {
    pub fn new() -> Shared<Self> {
        shared(Self::default())
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_select(&mut self, high: bool) {
        if high != self.selected {
            self.command = None;
        }
        self.selected = high;
    }

    fn clock(&mut self, byte: u8, config: BusConfig) -> u8 {
        if !self.selected {
            self.stray += 1;
            return 0xFF;
        }
        match self.command {
            None => {
                self.command = Some(byte);
                self.addr = byte & 0x0F;
                self.commands.push(byte);
                self.configs.push(config);
                0x00
            }
            Some(cmd) if cmd & 0x80 != 0 => {
                let value = self.regs[self.addr as usize];
                self.addr = (self.addr + 1) & 0x0F;
                value
            }
            Some(_) => {
                if self.addr == 0x00 && byte == 0x58 {
                    self.resets += 1;
                } else {
                    self.regs[self.addr as usize] = byte;
                }
                self.addr = (self.addr + 1) & 0x0F;
                0x00
            }
        }
    }
}

/// Bus connected to a simulated RV-2123.
pub struct SimBus {
    chip: Shared<Rv2123Sim>,
    config: BusConfig,
    pub config_writes: usize,
}

impl SimBus {
    pub fn new(chip: &Shared<Rv2123Sim>, config: BusConfig) -> Self {
        Self {
            chip: chip.clone(),
            config,
            config_writes: 0,
        }
    }
}

impl spi::ErrorType for SimBus {
    type Error = Infallible;
}

impl ConfigurableSpi for SimBus {
    fn config(&self) -> BusConfig {
        self.config
    }

    fn set_config(&mut self, config: BusConfig) -> Result<(), Self::Error> {
        self.config = config;
        self.config_writes += 1;
        Ok(())
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<u8, Self::Error> {
        Ok(self.chip.borrow_mut().clock(byte, self.config))
    }
}

// Text output

/// `fmt::Write` sink that rejects every write.
pub struct FailingSink;

impl fmt::Write for FailingSink {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Err(fmt::Error)
    }
}

// Delay

#[derive(Debug, Default)]
pub struct FakeDelay {
    pub total_ns: u64,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
