//! Display symbols for weekdays and months.
//!
//! A [`Symbols`] value is built once (per locale) at the application boundary
//! and passed to the accessors that need it. Weekday tables are always stored
//! Sunday-first, matching [`Weekday::symbol_index`]; rotate with
//! [`Symbols::weekday_names`] for a locale week order.

use chrono::{Locale, NaiveDate};

use crate::weekday::Weekday;

const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Which weekday symbol table to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolStyle {
    /// "Monday"
    Full,
    /// "Mon"
    Short,
    /// "M"
    VeryShort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    weekdays: [String; 7],
    short_weekdays: [String; 7],
    very_short_weekdays: [String; 7],
    months: [String; 12],
}

impl Symbols {
    /// English symbols without consulting any locale data.
    pub fn english() -> Self {
        let weekdays = ENGLISH_WEEKDAYS.map(String::from);
        let short_weekdays = ENGLISH_WEEKDAYS.map(|name| name[..3].to_string());
        Self {
            very_short_weekdays: short_weekdays.clone().map(|s| very_short(&s)),
            weekdays,
            short_weekdays,
            months: ENGLISH_MONTHS.map(String::from),
        }
    }

    /// Symbols rendered through chrono's locale-aware formatting.
    ///
    /// A date that cannot be built renders as `"?"`.
    pub fn for_locale(locale: Locale) -> Self {
        // 2000-01-02 was a Sunday.
        let weekday_date = |i: usize| NaiveDate::from_ymd_opt(2000, 1, 2 + i as u32);
        let month_date = |i: usize| NaiveDate::from_ymd_opt(2000, 1 + i as u32, 1);

        let weekdays = std::array::from_fn(|i| localized(weekday_date(i), "%A", locale));
        let short_weekdays: [String; 7] =
            std::array::from_fn(|i| localized(weekday_date(i), "%a", locale));
        Self {
            very_short_weekdays: short_weekdays.clone().map(|s| very_short(&s)),
            weekdays,
            short_weekdays,
            months: std::array::from_fn(|i| localized(month_date(i), "%B", locale)),
        }
    }

    pub fn weekday(&self, weekday: Weekday, style: SymbolStyle) -> &str {
        let table = match style {
            SymbolStyle::Full => &self.weekdays,
            SymbolStyle::Short => &self.short_weekdays,
            SymbolStyle::VeryShort => &self.very_short_weekdays,
        };
        &table[weekday.symbol_index()]
    }

    /// Short weekday symbols ordered from `first_weekday`.
    pub fn weekday_names(&self, first_weekday: Weekday) -> Vec<String> {
        let mut names = self.short_weekdays.to_vec();
        names.rotate_left(first_weekday.symbol_index());
        names
    }

    /// Full month names, January first.
    pub fn month_names(&self) -> &[String] {
        &self.months
    }

    /// Full name of a 1-based month, `None` outside `1..=12`.
    pub fn month_name(&self, month: u32) -> Option<&str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.months.get(index).map(String::as_str)
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::english()
    }
}

fn localized(date: Option<NaiveDate>, format: &str, locale: Locale) -> String {
    date.and_then(|d| d.and_hms_opt(12, 0, 0))
        .map(|dt| dt.and_utc().format_localized(format, locale).to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn very_short(short: &str) -> String {
    short.chars().take(1).flat_map(char::to_uppercase).collect()
}
