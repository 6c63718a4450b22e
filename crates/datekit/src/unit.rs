//! Calendar units and partial date components.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::weekday::Weekday;

/// A granularity of time understood by a [`Calendar`](crate::Calendar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalendarUnit {
    Year,
    Month,
    WeekOfYear,
    WeekOfMonth,
    Day,
    Hour,
    Minute,
    Second,
    Nanosecond,
}

impl CalendarUnit {
    /// Units tried, most specific period first, when classifying an interval.
    pub const INTERVAL_CANDIDATES: [CalendarUnit; 7] = [
        CalendarUnit::Year,
        CalendarUnit::Month,
        CalendarUnit::WeekOfYear,
        CalendarUnit::Day,
        CalendarUnit::Hour,
        CalendarUnit::Minute,
        CalendarUnit::Second,
    ];

    /// Fixed length in nanoseconds for clock units, `None` for calendar units whose
    /// length depends on the date and time zone.
    pub fn fixed_nanoseconds(self) -> Option<i64> {
        match self {
            CalendarUnit::Hour => Some(3_600_000_000_000),
            CalendarUnit::Minute => Some(60_000_000_000),
            CalendarUnit::Second => Some(1_000_000_000),
            CalendarUnit::Nanosecond => Some(1),
            _ => None,
        }
    }

    /// The component set a point is truncated to when reduced to this granularity.
    ///
    /// Units coarser than a day (and weeks) truncate to the day.
    pub fn truncation_set(self) -> &'static [CalendarUnit] {
        use CalendarUnit::*;
        match self {
            Hour => &[Year, Month, Day, Hour],
            Minute => &[Year, Month, Day, Hour, Minute],
            Second => &[Year, Month, Day, Hour, Minute, Second],
            Nanosecond => &[Year, Month, Day, Hour, Minute, Second, Nanosecond],
            Year | Month | WeekOfYear | WeekOfMonth | Day => &[Year, Month, Day],
        }
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalendarUnit::Year => "year",
            CalendarUnit::Month => "month",
            CalendarUnit::WeekOfYear => "weekOfYear",
            CalendarUnit::WeekOfMonth => "weekOfMonth",
            CalendarUnit::Day => "day",
            CalendarUnit::Hour => "hour",
            CalendarUnit::Minute => "minute",
            CalendarUnit::Second => "second",
            CalendarUnit::Nanosecond => "nanosecond",
        };
        f.write_str(name)
    }
}

/// A partial set of civil date components.
///
/// Used both for components extracted from a point and for unit-wise
/// durations; fields that were not requested stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateComponents {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub week_of_year: Option<i64>,
    pub week_of_month: Option<i64>,
    pub day: Option<i64>,
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub second: Option<i64>,
    pub nanosecond: Option<i64>,
    pub weekday: Option<Weekday>,
}

impl DateComponents {
    pub fn get(&self, unit: CalendarUnit) -> Option<i64> {
        match unit {
            CalendarUnit::Year => self.year,
            CalendarUnit::Month => self.month,
            CalendarUnit::WeekOfYear => self.week_of_year,
            CalendarUnit::WeekOfMonth => self.week_of_month,
            CalendarUnit::Day => self.day,
            CalendarUnit::Hour => self.hour,
            CalendarUnit::Minute => self.minute,
            CalendarUnit::Second => self.second,
            CalendarUnit::Nanosecond => self.nanosecond,
        }
    }

    pub fn set(&mut self, unit: CalendarUnit, value: i64) {
        let slot = match unit {
            CalendarUnit::Year => &mut self.year,
            CalendarUnit::Month => &mut self.month,
            CalendarUnit::WeekOfYear => &mut self.week_of_year,
            CalendarUnit::WeekOfMonth => &mut self.week_of_month,
            CalendarUnit::Day => &mut self.day,
            CalendarUnit::Hour => &mut self.hour,
            CalendarUnit::Minute => &mut self.minute,
            CalendarUnit::Second => &mut self.second,
            CalendarUnit::Nanosecond => &mut self.nanosecond,
        };
        *slot = Some(value);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, unit: CalendarUnit, value: i64) -> Self {
        self.set(unit, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_set_for_day_and_coarser() {
        let day = [CalendarUnit::Year, CalendarUnit::Month, CalendarUnit::Day];
        assert_eq!(CalendarUnit::Day.truncation_set(), &day);
        assert_eq!(CalendarUnit::Month.truncation_set(), &day);
        assert_eq!(CalendarUnit::WeekOfYear.truncation_set(), &day);
    }

    #[test]
    fn test_truncation_set_keeps_requested_clock_fields() {
        assert_eq!(CalendarUnit::Minute.truncation_set().len(), 5);
        assert_eq!(
            CalendarUnit::Nanosecond.truncation_set().last(),
            Some(&CalendarUnit::Nanosecond)
        );
    }

    #[test]
    fn test_components_get_set() {
        let c = DateComponents::default()
            .with(CalendarUnit::Hour, 3)
            .with(CalendarUnit::Minute, 15);
        assert_eq!(c.get(CalendarUnit::Hour), Some(3));
        assert_eq!(c.get(CalendarUnit::Minute), Some(15));
        assert_eq!(c.get(CalendarUnit::Second), None);
    }

    #[test]
    fn test_unit_display_and_serde_names_agree() {
        let json = serde_json::to_string(&CalendarUnit::WeekOfYear).unwrap();
        assert_eq!(json, "\"weekOfYear\"");
        assert_eq!(CalendarUnit::WeekOfYear.to_string(), "weekOfYear");
    }
}
