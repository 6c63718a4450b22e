//! The calendar capability consumed by every datekit operation.
//!
//! [`Calendar`] is the seam between datekit's arithmetic and the rules that
//! decompose an instant into civil fields (time zone, week convention).
//! [`GregorianCalendar`] is the chrono/chrono-tz implementation; tests and
//! callers with unusual rules can supply their own.
//!
//! # Local time resolution
//!
//! Calendar arithmetic happens on wall-clock fields and is then mapped back to
//! an instant. Ambiguous local times (DST fall-back) resolve to the earliest
//! instant. Non-existent local times (DST spring-forward gap) are shifted
//! forward by the length of the gap, so a day that starts inside a gap begins
//! at the first valid instant.

use std::ops::Range;

use chrono::{
    DateTime, Datelike, Days, FixedOffset, LocalResult, Months, NaiveDate, NaiveDateTime,
    NaiveTime, Offset, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;

use crate::config::CalendarConfig;
use crate::error::{DateKitError, Result};
use crate::interval::DateInterval;
use crate::unit::{CalendarUnit, DateComponents};
use crate::weekday::Weekday;

/// Calendar rules used to interpret points in time.
///
/// Every method is total in the sense that it reports failure with `None`
/// instead of panicking; the [`DateExt`](crate::DateExt) layer turns those
/// into [`DateKitError`]s.
pub trait Calendar {
    /// The day that begins a week.
    fn first_weekday(&self) -> Weekday;

    /// Extract the requested components of `point`.
    ///
    /// Only the fields named in `units` are populated, except
    /// [`DateComponents::weekday`], which is always filled in unless the
    /// point has no representable local time.
    fn components(&self, units: &[CalendarUnit], point: DateTime<Utc>) -> DateComponents;

    /// Rebuild a point from components. `year` is required; missing month and
    /// day default to 1, missing clock fields to 0.
    fn date_from_components(&self, components: &DateComponents) -> Option<DateTime<Utc>>;

    /// The canonical interval of `unit` containing `point`.
    fn interval_of(&self, unit: CalendarUnit, point: DateTime<Utc>) -> Option<DateInterval>;

    /// Shift `point` by `value` units (negative values move backwards).
    fn adding(&self, unit: CalendarUnit, value: i64, point: DateTime<Utc>)
        -> Option<DateTime<Utc>>;

    /// The range of values `smaller` takes inside the `larger` unit containing
    /// `point`, e.g. `1..30` for days in April.
    fn range_of(
        &self,
        smaller: CalendarUnit,
        larger: CalendarUnit,
        point: DateTime<Utc>,
    ) -> Option<Range<u32>>;

    /// Whole units between `from` and `to`: the largest `n` (by magnitude) with
    /// `adding(unit, n, from)` not passing `to`.
    fn difference(&self, unit: CalendarUnit, from: DateTime<Utc>, to: DateTime<Utc>)
        -> Option<i64>;

    fn start_of_day(&self, point: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.interval_of(CalendarUnit::Day, point)
            .map(|interval| interval.start)
    }
}

/// The proleptic Gregorian calendar in a fixed IANA time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GregorianCalendar {
    time_zone: Tz,
    first_weekday: Weekday,
}

impl Default for GregorianCalendar {
    /// UTC with weeks starting on Sunday.
    fn default() -> Self {
        Self::new(Tz::UTC, Weekday::Sunday)
    }
}

impl GregorianCalendar {
    pub fn new(time_zone: Tz, first_weekday: Weekday) -> Self {
        Self {
            time_zone,
            first_weekday,
        }
    }

    /// Build a calendar from a [`CalendarConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`DateKitError::InvalidTimezone`] if `time_zone` is not a valid
    /// IANA timezone name.
    ///
    /// # Examples
    ///
    /// ```
    /// use datekit::{CalendarConfig, GregorianCalendar, Weekday};
    ///
    /// let config = CalendarConfig {
    ///     time_zone: "America/New_York".to_string(),
    ///     first_weekday: Weekday::Monday,
    /// };
    /// let calendar = GregorianCalendar::from_config(&config).unwrap();
    /// assert_eq!(calendar.time_zone(), chrono_tz::America::New_York);
    /// ```
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        let time_zone = config
            .time_zone
            .parse::<Tz>()
            .map_err(|_| DateKitError::InvalidTimezone(format!("'{}'", config.time_zone)))?;
        Ok(Self::new(time_zone, config.first_weekday))
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn with_first_weekday(self, first_weekday: Weekday) -> Self {
        Self {
            first_weekday,
            ..self
        }
    }

    fn offset_at(&self, point: DateTime<Utc>) -> FixedOffset {
        self.time_zone
            .offset_from_utc_datetime(&point.naive_utc())
            .fix()
    }

    /// Wall-clock time at `point`, or `None` when it lies outside the range
    /// `NaiveDateTime` can represent.
    fn local_naive(&self, point: DateTime<Utc>) -> Option<NaiveDateTime> {
        point.naive_utc().checked_add_offset(self.offset_at(point))
    }

    fn local_date(&self, point: DateTime<Utc>) -> Option<NaiveDate> {
        self.local_naive(point).map(|local| local.date())
    }

    /// Map wall-clock time back to an instant (see module docs).
    fn resolve(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        let at = |offset: FixedOffset| naive.checked_sub_offset(offset).map(|utc| utc.and_utc());
        match self.time_zone.offset_from_local_datetime(&naive) {
            LocalResult::Single(offset) => at(offset.fix()),
            LocalResult::Ambiguous(a, b) => Some(at(a.fix())?.min(at(b.fix())?)),
            LocalResult::None => {
                // Read the wall clock with the offset in force before the gap.
                let before = naive.checked_sub_days(Days::new(1))?;
                let offset = self
                    .time_zone
                    .offset_from_local_datetime(&before)
                    .earliest()?;
                at(offset.fix())
            }
        }
    }

    fn start_of_local_day(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.resolve(date.and_hms_opt(0, 0, 0)?)
    }

    fn day_span(&self, first: NaiveDate, end: NaiveDate) -> Option<DateInterval> {
        Some(DateInterval::new(
            self.start_of_local_day(first)?,
            self.start_of_local_day(end)?,
        ))
    }

    /// First day of the week containing `date`.
    fn week_start(&self, date: NaiveDate) -> Option<NaiveDate> {
        let offset = Weekday::from(date.weekday()).days_since(self.first_weekday);
        date.checked_sub_days(Days::new(offset.into()))
    }

    /// 1-based week of month; the week holding the 1st is week 1.
    fn week_of_month(&self, date: NaiveDate) -> Option<i64> {
        let first = date.with_day(1)?;
        let lead = Weekday::from(first.weekday()).days_since(self.first_weekday);
        Some(i64::from((date.day0() + u32::from(lead)) / 7 + 1))
    }

    /// 1-based week of year; the week holding January 1st is week 1, including
    /// when it starts in December of the previous year.
    fn week_of_year(&self, date: NaiveDate) -> Option<i64> {
        let week_start = self.week_start(date)?;
        let next_new_year = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)?;
        if next_new_year.signed_duration_since(week_start).num_days() < 7 {
            return Some(1);
        }
        let new_year = date.with_ordinal(1)?;
        let lead = Weekday::from(new_year.weekday()).days_since(self.first_weekday);
        Some(i64::from((date.ordinal0() + u32::from(lead)) / 7 + 1))
    }

    fn truncate_clock(&self, unit: CalendarUnit, point: DateTime<Utc>) -> Option<DateTime<Utc>> {
        // Truncate against the offset in force at `point` so that repeated
        // wall-clock hours keep their own instant.
        let offset = self.offset_at(point);
        let local = point.naive_utc().checked_add_offset(offset)?;
        let truncated = match unit {
            CalendarUnit::Hour => local.with_minute(0)?.with_second(0)?.with_nanosecond(0)?,
            CalendarUnit::Minute => local.with_second(0)?.with_nanosecond(0)?,
            CalendarUnit::Second => local.with_nanosecond(0)?,
            _ => return None,
        };
        Some(truncated.checked_sub_offset(offset)?.and_utc())
    }

    fn add_months(&self, months: i64, point: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let local = self.local_naive(point)?;
        let step = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
        let shifted = if months >= 0 {
            local.checked_add_months(step)?
        } else {
            local.checked_sub_months(step)?
        };
        self.resolve(shifted)
    }

    fn add_days(&self, days: i64, point: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let local = self.local_naive(point)?;
        let step = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            local.checked_add_days(step)?
        } else {
            local.checked_sub_days(step)?
        };
        self.resolve(shifted)
    }

    fn month_delta(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Option<i64> {
        let (a, b) = (self.local_date(from)?, self.local_date(to)?);
        Some(i64::from(b.year() - a.year()) * 12 + i64::from(b.month()) - i64::from(a.month()))
    }

    fn day_delta(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Option<i64> {
        Some(
            self.local_date(to)?
                .signed_duration_since(self.local_date(from)?)
                .num_days(),
        )
    }
}

impl Calendar for GregorianCalendar {
    fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    fn components(&self, units: &[CalendarUnit], point: DateTime<Utc>) -> DateComponents {
        let Some(local) = self.local_naive(point) else {
            return DateComponents::default();
        };
        let date = local.date();
        let mut components = DateComponents {
            weekday: Some(local.weekday().into()),
            ..DateComponents::default()
        };
        for &unit in units {
            let value = match unit {
                CalendarUnit::Year => Some(i64::from(local.year())),
                CalendarUnit::Month => Some(i64::from(local.month())),
                CalendarUnit::WeekOfYear => self.week_of_year(date),
                CalendarUnit::WeekOfMonth => self.week_of_month(date),
                CalendarUnit::Day => Some(i64::from(local.day())),
                CalendarUnit::Hour => Some(i64::from(local.hour())),
                CalendarUnit::Minute => Some(i64::from(local.minute())),
                CalendarUnit::Second => Some(i64::from(local.second())),
                CalendarUnit::Nanosecond => Some(i64::from(local.nanosecond())),
            };
            if let Some(value) = value {
                components.set(unit, value);
            }
        }
        components
    }

    fn date_from_components(&self, components: &DateComponents) -> Option<DateTime<Utc>> {
        let field = |value: Option<i64>, default: u32| -> Option<u32> {
            value.map_or(Some(default), |v| u32::try_from(v).ok())
        };
        let year = i32::try_from(components.year?).ok()?;
        let date = NaiveDate::from_ymd_opt(
            year,
            field(components.month, 1)?,
            field(components.day, 1)?,
        )?;
        let time = NaiveTime::from_hms_nano_opt(
            field(components.hour, 0)?,
            field(components.minute, 0)?,
            field(components.second, 0)?,
            field(components.nanosecond, 0)?,
        )?;
        self.resolve(date.and_time(time))
    }

    fn interval_of(&self, unit: CalendarUnit, point: DateTime<Utc>) -> Option<DateInterval> {
        let date = self.local_date(point)?;
        match unit {
            CalendarUnit::Year => self.day_span(
                NaiveDate::from_ymd_opt(date.year(), 1, 1)?,
                NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)?,
            ),
            CalendarUnit::Month => {
                let first = date.with_day(1)?;
                self.day_span(first, first.checked_add_months(Months::new(1))?)
            }
            CalendarUnit::WeekOfYear | CalendarUnit::WeekOfMonth => {
                let first = self.week_start(date)?;
                self.day_span(first, first.checked_add_days(Days::new(7))?)
            }
            CalendarUnit::Day => self.day_span(date, date.succ_opt()?),
            CalendarUnit::Hour | CalendarUnit::Minute | CalendarUnit::Second => {
                let start = self.truncate_clock(unit, point)?;
                let length = chrono::Duration::nanoseconds(unit.fixed_nanoseconds()?);
                Some(DateInterval::new(start, start.checked_add_signed(length)?))
            }
            CalendarUnit::Nanosecond => Some(DateInterval::new(
                point,
                point.checked_add_signed(chrono::Duration::nanoseconds(1))?,
            )),
        }
    }

    fn adding(
        &self,
        unit: CalendarUnit,
        value: i64,
        point: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        match unit {
            CalendarUnit::Year => self.add_months(value.checked_mul(12)?, point),
            CalendarUnit::Month => self.add_months(value, point),
            CalendarUnit::WeekOfYear | CalendarUnit::WeekOfMonth => {
                self.add_days(value.checked_mul(7)?, point)
            }
            CalendarUnit::Day => self.add_days(value, point),
            CalendarUnit::Hour
            | CalendarUnit::Minute
            | CalendarUnit::Second
            | CalendarUnit::Nanosecond => {
                let nanos = unit.fixed_nanoseconds()?.checked_mul(value)?;
                point.checked_add_signed(chrono::Duration::nanoseconds(nanos))
            }
        }
    }

    fn range_of(
        &self,
        smaller: CalendarUnit,
        larger: CalendarUnit,
        point: DateTime<Utc>,
    ) -> Option<Range<u32>> {
        use CalendarUnit::*;

        let date = self.local_date(point)?;
        let month_start = date.with_day(1)?;
        let next_month = month_start.checked_add_months(Months::new(1))?;
        let days_in_month = u32::try_from(next_month.signed_duration_since(month_start).num_days())
            .ok()?;

        match (smaller, larger) {
            (Day, Month) => Some(1..days_in_month + 1),
            (Day, Year) => {
                let new_year = date.with_ordinal(1)?;
                let days = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)?
                    .signed_duration_since(new_year)
                    .num_days();
                Some(1..u32::try_from(days).ok()? + 1)
            }
            (Day, WeekOfMonth) => {
                // Days of the week containing `point`, clipped to its month.
                let week_start = self.week_start(date)?.max(month_start);
                let week_end = self
                    .week_start(date)?
                    .checked_add_days(Days::new(6))?
                    .min(next_month.pred_opt()?);
                Some(week_start.day()..week_end.day() + 1)
            }
            (WeekOfMonth, Month) => {
                let weeks = self.week_of_month(next_month.pred_opt()?)?;
                Some(1..u32::try_from(weeks).ok()? + 1)
            }
            (Month, Year) => Some(1..13),
            (Hour, Day) => Some(0..24),
            (Minute, Hour) | (Second, Minute) => Some(0..60),
            _ => None,
        }
    }

    fn difference(
        &self,
        unit: CalendarUnit,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Option<i64> {
        let elapsed = to.signed_duration_since(from);
        let estimate = match unit {
            CalendarUnit::Nanosecond => return elapsed.num_nanoseconds(),
            CalendarUnit::Hour | CalendarUnit::Minute | CalendarUnit::Second => {
                let seconds = unit.fixed_nanoseconds()? / 1_000_000_000;
                return Some(elapsed.num_seconds() / seconds);
            }
            CalendarUnit::Year => self.month_delta(from, to)? / 12,
            CalendarUnit::Month => self.month_delta(from, to)?,
            CalendarUnit::WeekOfYear | CalendarUnit::WeekOfMonth => self.day_delta(from, to)? / 7,
            CalendarUnit::Day => self.day_delta(from, to)?,
        };

        // Field deltas ignore the smaller fields, so they can overshoot by one.
        let mut whole = estimate;
        for _ in 0..2 {
            let reached = self.adding(unit, whole, from)?;
            if whole > 0 && reached > to {
                whole -= 1;
            } else if whole < 0 && reached < to {
                whole += 1;
            } else {
                break;
            }
        }
        Some(whole)
    }
}
