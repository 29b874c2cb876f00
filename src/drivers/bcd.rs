// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Binary-coded decimal conversion for the RV-2123 time registers.
//!
//! Encoding is the same for every field: tens digit in the high nibble, ones digit in the low
//! nibble. Decoding differs per register because the unused high bits carry flags (or nothing) and
//! must be masked off.

/// Encode a decimal value as packed BCD. No range check: values above 99 produce a byte whose high
/// nibble has wrapped.
#[inline]
pub const fn encode(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

#[inline]
const fn ones(raw: u8) -> u8 {
    raw & 0x0F
}

/// Seconds and minutes: tens in bits 4..=6, bit 7 ignored.
#[inline]
pub const fn decode_sixty(raw: u8) -> u8 {
    ones(raw) + ((raw & 0x70) >> 4) * 10
}

/// Hours, 24-hour mode. Bits 4..=5 select +10 (`0b01`) or +20 (`0b10`); `0b11` adds nothing.
#[inline]
pub const fn decode_hours(raw: u8) -> u8 {
    let tens = match (raw & 0x30) >> 4 {
        0b10 => 20,
        0b01 => 10,
        _ => 0,
    };
    ones(raw) + tens
}

/// Day of month: tens in bits 4..=5.
#[inline]
pub const fn decode_day(raw: u8) -> u8 {
    ones(raw) + ((raw & 0x30) >> 4) * 10
}

/// Month: tens is bit 4 alone.
#[inline]
pub const fn decode_month(raw: u8) -> u8 {
    ones(raw) + ((raw & 0x10) >> 4) * 10
}

/// Year within century: tens in bits 4..=7.
#[inline]
pub const fn decode_year(raw: u8) -> u8 {
    ones(raw) + ((raw & 0xF0) >> 4) * 10
}
