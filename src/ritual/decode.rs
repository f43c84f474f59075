//! Arithmetic decoder
//!
//! The instruction steps encode a birthdate as
//! `((day * 2 + 5) * 50) + month + 1765`, which simplifies to
//! `100 * day + month + 2015`. Decoding is the exact inverse.

use std::fmt;

use thiserror::Error;

use crate::consts::{DECODE_OFFSET, MAX_DAY, MAX_MONTH};

/// Three-letter English month abbreviations, January first
pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Decode failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The derived day or month falls outside the calendar bounds
    #[error("decoded day {day} / month {month} is out of range")]
    OutOfRange { day: i64, month: i64 },
}

/// A (day, month) pair recovered from the final number.
///
/// Fields are private: the only ways to obtain one go through the bounds
/// check, so `day` is always 1..=31 and `month` always 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedDate {
    day: u8,
    month: u8,
}

impl DecodedDate {
    /// Build a date, rejecting out-of-range fields
    pub fn new(day: i64, month: i64) -> Result<Self, DecodeError> {
        if !(1..=MAX_DAY).contains(&day) || !(1..=MAX_MONTH).contains(&month) {
            return Err(DecodeError::OutOfRange { day, month });
        }
        Ok(Self {
            day: day as u8,
            month: month as u8,
        })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Forward arithmetic: the number a user following the steps ends up with
    pub fn encode(&self) -> i64 {
        100 * i64::from(self.day) + i64::from(self.month) + DECODE_OFFSET
    }

    pub fn month_abbrev(&self) -> &'static str {
        MONTH_ABBREVS[usize::from(self.month) - 1]
    }

    /// Unpadded `"<day> <Mon>"` label, e.g. `"5 Jun"`
    pub fn dob_label(&self) -> String {
        format!("{} {}", self.day, self.month_abbrev())
    }
}

/// Renders as `"DD / Mon"` with a zero-padded day
impl fmt::Display for DecodedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} / {}", self.day, self.month_abbrev())
    }
}

/// Recover the birth (day, month) from the user's final number
pub fn decode(n: i64) -> Result<DecodedDate, DecodeError> {
    let magic = n.saturating_sub(DECODE_OFFSET);
    let day = magic.div_euclid(100);
    let month = magic.rem_euclid(100);
    DecodedDate::new(day, month)
}
