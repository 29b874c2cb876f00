// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 controller board.
//!
//! The RTC and RS-485 lines depend on the board variant; the console and SPI4 pins are shared by all
//! variants.

use plcboard::{BoardProfile, BoardVariant};
use stm32f7xx_hal::{
    gpio::{gpioa, gpioe, Alternate},
    pac,
    prelude::*,
};

use crate::spi::HalPin;

/// All board pins. Construct this once at startup using:
///
/// ```rust
/// let pins = BoardPins::new(profile, dp.GPIOA, dp.GPIOB, dp.GPIOE, dp.GPIOJ);
/// ```
pub struct BoardPins {
    pub usart1: Usart1Pins,
    pub spi4: Spi4Pins,
    pub rtc: RtcPins,
    pub rs485: Option<Rs485Pins>,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// SPI4 SCK/MISO/MOSI
pub struct Spi4Pins {
    pub sck: gpioe::PE12<Alternate<5>>,
    pub miso: gpioe::PE13<Alternate<5>>,
    pub mosi: gpioe::PE14<Alternate<5>>,
}

/// RTC chip select, plus the digital output that mirrors it on Maxi/Mega.
pub struct RtcPins {
    pub cs: HalPin,
    pub cs_mirror: Option<HalPin>,
}

/// RS-485 transceiver direction lines
pub struct Rs485Pins {
    pub re: HalPin,
    pub de: HalPin,
}

impl BoardPins {
    /// Create the named pins for `profile` from raw GPIO peripherals.
    pub fn new(
        profile: &BoardProfile,
        gpioa: pac::GPIOA,
        gpiob: pac::GPIOB,
        gpioe: pac::GPIOE,
        gpioj: pac::GPIOJ,
    ) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioe = gpioe.split();
        let gpioj = gpioj.split();

        let (rtc, rs485) = match profile.variant {
            BoardVariant::Maxi | BoardVariant::Mega => (
                RtcPins {
                    cs: HalPin::new(gpioj.pj2),
                    cs_mirror: Some(HalPin::new(gpioe.pe4)),
                },
                Some(Rs485Pins {
                    re: HalPin::new(gpioj.pj5),
                    de: HalPin::new(gpioj.pj6),
                }),
            ),
            BoardVariant::Mini => (
                RtcPins {
                    cs: HalPin::new(gpiob.pb2),
                    cs_mirror: None,
                },
                None,
            ),
        };

        Self {
            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            spi4: Spi4Pins {
                sck: gpioe.pe12.into_alternate::<5>(),
                miso: gpioe.pe13.into_alternate::<5>(),
                mosi: gpioe.pe14.into_alternate::<5>(),
            },

            rtc,
            rs485,
        }
    }
}
