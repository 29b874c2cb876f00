// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bring-up binary: announce the board, start the RTC and print the time once a second.

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use defmt_rtt as _;
use panic_halt as _;

use embedded_hal::delay::DelayNs;
use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
    spi::{Mode, Phase, Polarity, Spi},
};
use stm32f7xx_hal as hal;

use plcboard::{BoardProfile, BoardVariant, ChipSelect, Rs485, Rv2123};

mod pins;
mod spi;
mod usart;

use pins::BoardPins;
use spi::{Spi4Bus, SysDelay};
use usart::Console;

/// Written to the RTC at startup when built with `set-clock`.
#[cfg(feature = "set-clock")]
const INITIAL_TIME: plcboard::TimeDate = plcboard::TimeDate::new(1, 1, 26, 0, 0, 0);

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut apb2 = rcc.apb2;
    let mut delay = SysDelay::new(cp.SYST, clocks.hclk().to_Hz());

    let profile = BoardProfile::lookup(BoardVariant::configured());
    let board = profile.unwrap_or(BoardVariant::Maxi.profile());
    let pins = BoardPins::new(board, dp.GPIOA, dp.GPIOB, dp.GPIOE, dp.GPIOJ);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        usart_cfg,
    );
    let mut console = Console::new(serial);

    let profile = match profile {
        Ok(profile) => profile,
        Err(e) => {
            console.report("board", e);
            console.flush();
            loop {
                cortex_m::asm::wfi();
            }
        }
    };
    console.banner(profile);

    // SPI4
    let spi_mode = Mode {
        polarity: Polarity::IdleLow,
        phase: Phase::CaptureOnFirstTransition,
    };
    let spi4_raw = Spi::new(dp.SPI4, (pins.spi4.sck, pins.spi4.miso, pins.spi4.mosi));
    let spi4_enabled = spi4_raw.enable::<u8>(spi_mode, 1.MHz(), &clocks, &mut apb2);
    let mut bus = Spi4Bus::new(spi4_enabled);

    // RTC
    let cs = match ChipSelect::active_high(pins.rtc.cs, pins.rtc.cs_mirror) {
        Ok(cs) => cs,
        Err(e) => {
            console.report("rtc cs", e);
            console.flush();
            loop {
                cortex_m::asm::wfi();
            }
        }
    };
    let mut rtc = Rv2123::new(cs);
    let started = if cfg!(feature = "rtc-reset") {
        rtc.init_with_reset(&mut bus, &mut delay)
    } else {
        rtc.init(&mut bus)
    };
    if let Err(e) = started {
        console.report("rtc init", e);
    }

    #[cfg(feature = "set-clock")]
    if let Err(e) = rtc.set_time_date(&mut bus, INITIAL_TIME) {
        console.report("rtc set", e);
    }

    // RS-485 idles with RE and DE low.
    let _rs485 = match pins.rs485 {
        Some(lines) => match Rs485::init(profile, lines.re, lines.de) {
            Ok(rs) => Some(rs),
            Err(e) => {
                console.report("rs485", e);
                None
            }
        },
        None => None,
    };

    loop {
        if let Err(e) = rtc.print_time_and_date(&mut bus, &mut console) {
            console.report("rtc read", e);
        }
        delay.delay_ms(1_000);
    }
}
