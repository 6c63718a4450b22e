//! Civil-day identity for grouping points by calendar day.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::unit::CalendarUnit;

/// The calendar day a point falls on, under a given calendar.
///
/// Two points on the same day produce equal keys whose `id` is `YYYY-MM-DD`.
/// If the calendar cannot supply a non-zero year, month and day, the `id`
/// falls back to `invalid-<seconds>.<nanoseconds>` of the instant so that
/// unrelated points never collide on a shared placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateKey {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub id: String,
}

impl DateKey {
    pub fn new<C: Calendar + ?Sized>(point: DateTime<Utc>, calendar: &C) -> Self {
        let components = calendar.components(
            &[CalendarUnit::Year, CalendarUnit::Month, CalendarUnit::Day],
            point,
        );
        let year = components.year.unwrap_or(0);
        let month = components.month.unwrap_or(0);
        let day = components.day.unwrap_or(0);

        let id = if year == 0 || month == 0 || day == 0 {
            format!(
                "invalid-{}.{:09}",
                point.timestamp(),
                point.timestamp_subsec_nanos()
            )
        } else {
            format!("{year:04}-{month:02}-{day:02}")
        };

        Self {
            year,
            month,
            day,
            id,
        }
    }

    /// Whether the key was built from real components rather than the fallback.
    pub fn is_valid(&self) -> bool {
        self.year != 0 && self.month != 0 && self.day != 0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
