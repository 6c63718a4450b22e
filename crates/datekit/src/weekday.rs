//! Days of the week with a fixed, locale-independent numbering.
//!
//! The numeric value matches the raw weekday index used by calendars
//! (Sunday = 1, Monday = 2, …, Saturday = 7). It is an identity, not a
//! display order: use [`Weekday::index_monday_first`] or
//! [`Symbols::weekday_names`](crate::Symbols::weekday_names) to order days
//! for presentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::error::{DateKitError, Result};
use crate::symbols::{SymbolStyle, Symbols};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// All weekdays in raw-value order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Total constructor: out-of-range raw values map to `fallback`.
    pub fn safe(raw: u8, fallback: Weekday) -> Self {
        Self::try_from(raw).unwrap_or(fallback)
    }

    /// The raw calendar value (Sunday = 1 … Saturday = 7).
    pub fn raw_value(self) -> u8 {
        self as u8
    }

    /// Zero-based position in a Monday-first week (Monday = 0 … Sunday = 6).
    pub fn index_monday_first(self) -> usize {
        (usize::from(self.raw_value()) + 5) % 7
    }

    /// Zero-based index into Sunday-first symbol tables (Sunday = 0 … Saturday = 6).
    pub fn symbol_index(self) -> usize {
        usize::from(self.raw_value()) - 1
    }

    pub fn next(self) -> Self {
        match self {
            Weekday::Sunday => Weekday::Monday,
            Weekday::Monday => Weekday::Tuesday,
            Weekday::Tuesday => Weekday::Wednesday,
            Weekday::Wednesday => Weekday::Thursday,
            Weekday::Thursday => Weekday::Friday,
            Weekday::Friday => Weekday::Saturday,
            Weekday::Saturday => Weekday::Sunday,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Weekday::Sunday => Weekday::Saturday,
            Weekday::Monday => Weekday::Sunday,
            Weekday::Tuesday => Weekday::Monday,
            Weekday::Wednesday => Weekday::Tuesday,
            Weekday::Thursday => Weekday::Wednesday,
            Weekday::Friday => Weekday::Thursday,
            Weekday::Saturday => Weekday::Friday,
        }
    }

    /// Number of days from `start` forward to `self`, in `0..7`.
    pub fn days_since(self, start: Weekday) -> u8 {
        (self.raw_value() + 7 - start.raw_value()) % 7
    }

    /// Whether `point` falls on this weekday under `calendar`.
    pub fn is_today<C: Calendar + ?Sized>(self, point: DateTime<Utc>, calendar: &C) -> bool {
        calendar
            .components(&[], point)
            .weekday
            .is_some_and(|w| w == self)
    }

    /// Full symbol, e.g. "Monday".
    pub fn weekday_symbol(self, symbols: &Symbols) -> &str {
        symbols.weekday(self, SymbolStyle::Full)
    }

    /// Short symbol, e.g. "Mon".
    pub fn short_weekday_symbol(self, symbols: &Symbols) -> &str {
        symbols.weekday(self, SymbolStyle::Short)
    }

    /// Very short symbol, e.g. "M".
    pub fn very_short_weekday_symbol(self, symbols: &Symbols) -> &str {
        symbols.weekday(self, SymbolStyle::VeryShort)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateKitError;

    fn try_from(raw: u8) -> Result<Self> {
        match raw {
            1..=7 => Ok(Self::ALL[usize::from(raw) - 1]),
            _ => Err(DateKitError::InvalidWeekday(raw)),
        }
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.raw_value()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => chrono::Weekday::Sun,
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }
}
