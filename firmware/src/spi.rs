// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! STM32F7 bindings for the `plcboard` bus and GPIO traits.
//!
//! - `Spi4Bus` wraps the enabled SPI4 peripheral (8-bit words) and exposes its CR1 bit-order and
//!   clock-mode bits as a run-time `BusConfig`.
//! - `HalPin` adapts a type-erased HAL push-pull output to `embedded_hal::digital::OutputPin`.
//! - `SysDelay` adapts the SysTick delay to `embedded_hal::delay::DelayNs`.

use core::convert::Infallible;

use embedded_hal::{delay::DelayNs, digital, spi as ehal_spi};
use plcboard::{BitOrder, BusConfig, ConfigurableSpi};
use stm32f7xx_hal::{
    gpio::{self, ErasedPin, Output, PushPull},
    pac,
    prelude::*,
    spi::{self, Enabled, Spi},
};

/// SPI error from the HAL.
#[derive(Debug)]
pub struct BusError(pub spi::Error);

impl ehal_spi::Error for BusError {
    fn kind(&self) -> ehal_spi::ErrorKind {
        match self.0 {
            spi::Error::FrameFormat => ehal_spi::ErrorKind::FrameFormat,
            spi::Error::Overrun => ehal_spi::ErrorKind::Overrun,
            spi::Error::ModeFault => ehal_spi::ErrorKind::ModeFault,
            #[allow(unreachable_patterns)]
            _ => ehal_spi::ErrorKind::Other,
        }
    }
}

/// SPI4 shared by the RTC and any other devices on the header.
pub struct Spi4Bus<P> {
    spi: Spi<pac::SPI4, P, Enabled<u8>>,
}

impl<P> Spi4Bus<P>
where
    P: spi::Pins<pac::SPI4>,
{
    pub fn new(spi: Spi<pac::SPI4, P, Enabled<u8>>) -> Self {
        Self { spi }
    }

    #[inline]
    fn regs() -> &'static pac::spi1::RegisterBlock {
        // SAFETY: only CR1 mode bits are touched, while this wrapper holds the enabled peripheral.
        unsafe { &*pac::SPI4::ptr() }
    }
}

impl<P> ehal_spi::ErrorType for Spi4Bus<P> {
    type Error = BusError;
}

impl<P> ConfigurableSpi for Spi4Bus<P>
where
    P: spi::Pins<pac::SPI4>,
{
    fn config(&self) -> BusConfig {
        let cr1 = Self::regs().cr1.read();
        let bit_order = if cr1.lsbfirst().bit_is_set() {
            BitOrder::LsbFirst
        } else {
            BitOrder::MsbFirst
        };
        let mode = ehal_spi::Mode {
            polarity: if cr1.cpol().bit_is_set() {
                ehal_spi::Polarity::IdleHigh
            } else {
                ehal_spi::Polarity::IdleLow
            },
            phase: if cr1.cpha().bit_is_set() {
                ehal_spi::Phase::CaptureOnSecondTransition
            } else {
                ehal_spi::Phase::CaptureOnFirstTransition
            },
        };
        BusConfig::new(bit_order, mode)
    }

    fn set_config(&mut self, config: BusConfig) -> Result<(), Self::Error> {
        let regs = Self::regs();
        let lsb_first = config.bit_order == BitOrder::LsbFirst;
        let cpol = config.mode.polarity == ehal_spi::Polarity::IdleHigh;
        let cpha = config.mode.phase == ehal_spi::Phase::CaptureOnSecondTransition;

        // CPOL/CPHA/LSBFIRST may only change while the peripheral is disabled.
        while regs.sr.read().bsy().bit_is_set() {}
        regs.cr1.modify(|_, w| w.spe().clear_bit());
        regs.cr1
            .modify(|_, w| w.lsbfirst().bit(lsb_first).cpol().bit(cpol).cpha().bit(cpha));
        regs.cr1.modify(|_, w| w.spe().set_bit());
        Ok(())
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut tmp = [byte];
        self.spi.transfer(&mut tmp).map_err(BusError)?;
        Ok(tmp[0])
    }
}

/// Type-erased push-pull output usable as a chip select or transceiver control line.
pub struct HalPin {
    pin: ErasedPin<Output<PushPull>>,
}

impl HalPin {
    pub fn new<const P: char, const N: u8, MODE>(pin: gpio::Pin<P, N, MODE>) -> Self {
        Self {
            pin: pin.into_push_pull_output().erase(),
        }
    }
}

impl digital::ErrorType for HalPin {
    type Error = Infallible;
}

impl digital::OutputPin for HalPin {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low();
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high();
        Ok(())
    }
}

/// SysTick-based blocking delay.
pub struct SysDelay {
    delay: cortex_m::delay::Delay,
}

impl SysDelay {
    pub fn new(syst: cortex_m::peripheral::SYST, ahb_hz: u32) -> Self {
        Self {
            delay: cortex_m::delay::Delay::new(syst, ahb_hz),
        }
    }
}

impl DelayNs for SysDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_us(ns.div_ceil(1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
