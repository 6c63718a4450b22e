//! Time intervals and calendar-aware interval navigation.
//!
//! A [`DateInterval`] is an ordered `(start, end)` pair. In navigation it is
//! read as half-open, `[start, end)`: the interval of a day ends at the first
//! instant of the next day, the interval of a month at the first instant of
//! the next month.
//!
//! # Navigation
//!
//! - [`DateInterval::calendar_component`] — which calendar unit, if any, the
//!   interval spans exactly
//! - [`DateInterval::next_interval`] / [`DateInterval::previous_interval`] —
//!   the adjacent interval of the same unit
//! - [`DateInterval::offset_by_same_length`] — pure duration shift, used when
//!   the interval matches no unit

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::unit::CalendarUnit;

/// Which way [`DateInterval::offset_by_same_length`] moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateInterval {
    /// Build an interval from two points in either order.
    pub fn new(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Build an interval from two optional points.
    ///
    /// Returns `None` if either point is missing or both are equal: a
    /// zero-length interval carries no period.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{DateTime, Utc};
    /// use datekit::DateInterval;
    ///
    /// let a: DateTime<Utc> = "2024-03-20T00:00:00Z".parse().unwrap();
    /// let b: DateTime<Utc> = "2024-03-21T00:00:00Z".parse().unwrap();
    /// assert_eq!(DateInterval::get(Some(b), Some(a)), DateInterval::get(Some(a), Some(b)));
    /// assert_eq!(DateInterval::get(Some(a), Some(a)), None);
    /// ```
    pub fn get(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Option<Self> {
        match (from, to) {
            (Some(from), Some(to)) if from != to => Some(Self::new(from, to)),
            _ => None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// Half-open containment: `start <= point < end`.
    pub fn contains(&self, point: DateTime<Utc>) -> bool {
        self.start <= point && point < self.end
    }

    /// The calendar unit this interval spans exactly, if any.
    ///
    /// Candidates are tried from year down to second; the first unit whose
    /// canonical interval at `start` equals `self` wins.
    pub fn calendar_component<C: Calendar + ?Sized>(&self, calendar: &C) -> Option<CalendarUnit> {
        let unit = CalendarUnit::INTERVAL_CANDIDATES
            .into_iter()
            .find(|&unit| calendar.interval_of(unit, self.start).as_ref() == Some(self));
        if unit.is_none() {
            tracing::trace!(interval = %self, "interval matches no calendar unit");
        }
        unit
    }

    /// The interval following this one.
    ///
    /// For a calendar-unit interval this is the unit interval containing
    /// `end` (so the next month after February is all of March); otherwise
    /// the interval is shifted forward by its own length.
    pub fn next_interval<C: Calendar + ?Sized>(&self, calendar: &C) -> Self {
        self.calendar_component(calendar)
            .and_then(|unit| calendar.interval_of(unit, self.end))
            .unwrap_or_else(|| self.offset_by_same_length(OffsetDirection::Forward))
    }

    /// The interval preceding this one.
    ///
    /// For a calendar-unit interval this is the unit interval containing
    /// `start - 1 unit`; otherwise, or if that subtraction fails, the interval
    /// is shifted backward by its own length.
    pub fn previous_interval<C: Calendar + ?Sized>(&self, calendar: &C) -> Self {
        self.calendar_component(calendar)
            .and_then(|unit| {
                let previous_start = calendar.adding(unit, -1, self.start)?;
                calendar.interval_of(unit, previous_start)
            })
            .unwrap_or_else(|| self.offset_by_same_length(OffsetDirection::Backward))
    }

    /// Shift by the interval's own duration: `[end, end + d)` forward,
    /// `[start - d, start)` backward.
    ///
    /// The moving endpoint saturates at `DateTime::<Utc>::MAX_UTC` or
    /// `DateTime::<Utc>::MIN_UTC`, so near the ends of the representable
    /// range the result can be shorter than `self`.
    pub fn offset_by_same_length(&self, direction: OffsetDirection) -> Self {
        let length = self.duration();
        match direction {
            OffsetDirection::Forward => Self {
                start: self.end,
                end: self
                    .end
                    .checked_add_signed(length)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC),
            },
            OffsetDirection::Backward => Self {
                start: self
                    .start
                    .checked_sub_signed(length)
                    .unwrap_or(DateTime::<Utc>::MIN_UTC),
                end: self.start,
            },
        }
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}
