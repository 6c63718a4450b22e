//! Calendar arithmetic on points in time.
//!
//! [`DateExt`] adds calendar-aware operations to `DateTime<Utc>`. Every
//! operation takes the [`Calendar`] explicitly; nothing reads a process-wide
//! calendar, time zone or clock. Callers that need "now" pass `Utc::now()`.
//!
//! Operations that depend on the calendar return [`Result`] and fail with
//! [`DateKitError::Calendar`] when the calendar cannot compute a step. The
//! `*_or_self` variants keep the lenient behaviour of returning the input
//! point unchanged instead.
//!
//! # Boundaries
//!
//! End boundaries are exclusive: [`DateExt::end_of_day`] is midnight starting
//! the next day and [`DateExt::end_of_month`] is the first instant of the next
//! month, so `[start_of_day, end_of_day)` is exactly the day interval.

use chrono::{DateTime, Utc};

use crate::calendar::Calendar;
use crate::error::{DateKitError, Result};
use crate::interval::DateInterval;
use crate::unit::{CalendarUnit, DateComponents};
use crate::weekday::Weekday;

/// Seconds in a standard 24-hour day. Calendar days may be shorter or longer
/// across DST transitions; use [`DateExt::adding`] for day arithmetic.
pub const SECONDS_IN_DAY: i64 = 24 * 60 * 60;

/// Units used by [`DateExt::duration_to`] when the caller has no preference.
pub const DEFAULT_DURATION_UNITS: [CalendarUnit; 3] = [
    CalendarUnit::Hour,
    CalendarUnit::Minute,
    CalendarUnit::Second,
];

/// Count whole calendar days from the day of `start` to the day of `end`.
///
/// Both points are normalised to the start of their day first, so the time of
/// day does not matter. Returns `0` when `end` does not fall on a later day.
///
/// # Errors
///
/// Returns [`DateKitError::Calendar`] if the calendar cannot compute a start
/// of day or the day difference.
pub fn count_whole_days_between<C: Calendar + ?Sized>(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    calendar: &C,
) -> Result<i64> {
    let start = start.start_of_day(calendar)?;
    let end = end.start_of_day(calendar)?;
    if start >= end {
        return Ok(0);
    }
    calendar
        .difference(CalendarUnit::Day, start, end)
        .ok_or(DateKitError::calendar("difference", CalendarUnit::Day))
}

pub trait DateExt: Sized + Copy {
    /// Shift by `value` units using the calendar's unit-aware addition.
    fn adding<C: Calendar + ?Sized>(self, unit: CalendarUnit, value: i64, calendar: &C)
        -> Result<Self>;

    /// [`adding`](Self::adding), keeping `self` when the calendar cannot add.
    fn adding_or_self<C: Calendar + ?Sized>(
        self,
        unit: CalendarUnit,
        value: i64,
        calendar: &C,
    ) -> Self;

    fn subtracting<C: Calendar + ?Sized>(
        self,
        unit: CalendarUnit,
        value: i64,
        calendar: &C,
    ) -> Result<Self>;

    /// Whole days from `self` to `other`; `0` if `other` is not on a later day.
    fn count_days_to<C: Calendar + ?Sized>(self, other: Self, calendar: &C) -> Result<i64>;

    /// Whole days from `other` to `self`; `0` if `other` is not on an earlier day.
    fn count_days_from<C: Calendar + ?Sized>(self, other: Self, calendar: &C) -> Result<i64>;

    fn start_of_day<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Self>;

    fn start_of_day_or_self<C: Calendar + ?Sized>(self, calendar: &C) -> Self;

    /// Midnight beginning the next day (exclusive end of this day).
    fn end_of_day<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Self>;

    fn start_of_month<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Self>;

    fn start_of_month_or_self<C: Calendar + ?Sized>(self, calendar: &C) -> Self;

    /// First instant of the next month (exclusive end of this month).
    fn end_of_month<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Self>;

    fn end_of_month_or_self<C: Calendar + ?Sized>(self, calendar: &C) -> Self;

    fn start_of_previous_month<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Self>;

    /// The first day of the week-row containing the 1st of this month, i.e. the
    /// leading cell of a month grid laid out from the calendar's first weekday.
    fn first_weekday_before_start_of_month<C: Calendar + ?Sized>(self, calendar: &C)
        -> Result<Self>;

    fn weekday_in<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Weekday>;

    fn day_number<C: Calendar + ?Sized>(self, calendar: &C) -> Result<i64>;

    fn month_number<C: Calendar + ?Sized>(self, calendar: &C) -> Result<i64>;

    fn year_number<C: Calendar + ?Sized>(self, calendar: &C) -> Result<i64>;

    fn number_of_days_in_month<C: Calendar + ?Sized>(self, calendar: &C) -> Result<u32>;

    /// Whole 7-day spans between the start of the month and its exclusive end.
    fn number_of_complete_weeks_in_month<C: Calendar + ?Sized>(self, calendar: &C)
        -> Result<u32>;

    /// `1` when the week holding the last day of the month has fewer than
    /// seven of its days inside the month, else `0`.
    fn number_of_incomplete_weeks_in_month<C: Calendar + ?Sized>(
        self,
        calendar: &C,
    ) -> Result<u32>;

    fn number_of_weeks_in_month<C: Calendar + ?Sized>(self, calendar: &C) -> Result<u32>;

    /// Unit-wise breakdown of the time between `self` and `other`, largest
    /// unit first. Order of the two points does not matter; every field is
    /// non-negative.
    fn duration_to<C: Calendar + ?Sized>(
        self,
        other: Self,
        units: &[CalendarUnit],
        calendar: &C,
    ) -> Result<DateComponents>;

    /// `start <= self <= end`. An inverted range contains nothing.
    fn is_between(self, start: Self, end: Self) -> bool;

    /// `start <= self < end`. An inverted range contains nothing.
    fn is_between_until(self, start: Self, end: Self) -> bool;

    fn is_past(self, relative_to: Self) -> bool;

    fn is_future(self, relative_to: Self) -> bool;

    /// Whether both points fall in the same `granularity` interval.
    /// A missing `other` is never the same.
    fn is_same<C: Calendar + ?Sized>(
        self,
        other: Option<Self>,
        granularity: CalendarUnit,
        calendar: &C,
    ) -> Result<bool>;

    /// Truncate to `granularity` (see [`CalendarUnit::truncation_set`]) and
    /// step back one day.
    fn yesterday<C: Calendar + ?Sized>(self, granularity: CalendarUnit, calendar: &C)
        -> Result<Self>;

    fn day_interval<C: Calendar + ?Sized>(self, calendar: &C) -> Result<DateInterval>;

    fn week_interval<C: Calendar + ?Sized>(self, calendar: &C) -> Result<DateInterval>;

    fn month_interval<C: Calendar + ?Sized>(self, calendar: &C) -> Result<DateInterval>;

    fn year_interval<C: Calendar + ?Sized>(self, calendar: &C) -> Result<DateInterval>;

    fn previous_day_interval<C: Calendar + ?Sized>(self, calendar: &C) -> Result<DateInterval>;
}

fn interval<C: Calendar + ?Sized>(
    unit: CalendarUnit,
    point: DateTime<Utc>,
    calendar: &C,
) -> Result<DateInterval> {
    calendar
        .interval_of(unit, point)
        .ok_or(DateKitError::calendar("interval", unit))
}

fn component<C: Calendar + ?Sized>(
    unit: CalendarUnit,
    point: DateTime<Utc>,
    calendar: &C,
) -> Result<i64> {
    calendar
        .components(&[unit], point)
        .get(unit)
        .ok_or_else(|| DateKitError::IncompleteComponents(format!("no {unit} for {point}")))
}

impl DateExt for DateTime<Utc> {
    fn adding<C: Calendar + ?Sized>(
        self,
        unit: CalendarUnit,
        value: i64,
        calendar: &C,
    ) -> Result<Self> {
        calendar
            .adding(unit, value, self)
            .ok_or(DateKitError::calendar("adding", unit))
    }

    fn adding_or_self<C: Calendar + ?Sized>(
        self,
        unit: CalendarUnit,
        value: i64,
        calendar: &C,
    ) -> Self {
        self.adding(unit, value, calendar).unwrap_or_else(|err| {
            tracing::debug!(%unit, value, point = %self, error = %err, "keeping original point");
            self
        })
    }

    fn subtracting<C: Calendar + ?Sized>(
        self,
        unit: CalendarUnit,
        value: i64,
        calendar: &C,
    ) -> Result<Self> {
        let negated = value
            .checked_neg()
            .ok_or(DateKitError::calendar("subtracting", unit))?;
        self.adding(unit, negated, calendar)
    }

    fn count_days_to<C: Calendar + ?Sized>(self, other: Self, calendar: &C) -> Result<i64> {
        count_whole_days_between(self, other, calendar)
    }

    fn count_days_from<C: Calendar + ?Sized>(self, other: Self, calendar: &C) -> Result<i64> {
        count_whole_days_between(other, self, calendar)
    }

    fn start_of_day<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Self> {
        calendar
            .start_of_day(self)
            .ok_or(DateKitError::calendar("start of day", CalendarUnit::Day))
    }

    fn start_of_day_or_self<C: Calendar + ?Sized>(self, calendar: &C) -> Self {
        self.start_of_day(calendar).unwrap_or_else(|err| {
            tracing::debug!(point = %self, error = %err, "keeping original point");
            self
        })
    }

    fn end_of_day<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Self> {
        self.adding(CalendarUnit::Day, 1, calendar)?
            .start_of_day(calendar)
    }

    fn start_of_month<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Self> {
        Ok(interval(CalendarUnit::Month, self, calendar)?.start)
    }

    fn start_of_month_or_self<C: Calendar + ?Sized>(self, calendar: &C) -> Self {
        self.start_of_month(calendar).unwrap_or_else(|err| {
            tracing::debug!(point = %self, error = %err, "keeping original point");
            self
        })
    }

    fn end_of_month<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Self> {
        Ok(interval(CalendarUnit::Month, self, calendar)?.end)
    }

    fn end_of_month_or_self<C: Calendar + ?Sized>(self, calendar: &C) -> Self {
        self.end_of_month(calendar).unwrap_or_else(|err| {
            tracing::debug!(point = %self, error = %err, "keeping original point");
            self
        })
    }

    fn start_of_previous_month<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Self> {
        self.subtracting(CalendarUnit::Month, 1, calendar)?
            .start_of_month(calendar)
    }

    fn first_weekday_before_start_of_month<C: Calendar + ?Sized>(
        self,
        calendar: &C,
    ) -> Result<Self> {
        let start = self.start_of_month(calendar)?;
        let lead = start.weekday_in(calendar)?.days_since(calendar.first_weekday());
        start.subtracting(CalendarUnit::Day, lead.into(), calendar)
    }

    fn weekday_in<C: Calendar + ?Sized>(self, calendar: &C) -> Result<Weekday> {
        calendar
            .components(&[], self)
            .weekday
            .ok_or_else(|| DateKitError::IncompleteComponents(format!("no weekday for {self}")))
    }

    fn day_number<C: Calendar + ?Sized>(self, calendar: &C) -> Result<i64> {
        component(CalendarUnit::Day, self, calendar)
    }

    fn month_number<C: Calendar + ?Sized>(self, calendar: &C) -> Result<i64> {
        component(CalendarUnit::Month, self, calendar)
    }

    fn year_number<C: Calendar + ?Sized>(self, calendar: &C) -> Result<i64> {
        component(CalendarUnit::Year, self, calendar)
    }

    fn number_of_days_in_month<C: Calendar + ?Sized>(self, calendar: &C) -> Result<u32> {
        calendar
            .range_of(CalendarUnit::Day, CalendarUnit::Month, self)
            .map(|days| days.end.saturating_sub(days.start))
            .ok_or(DateKitError::calendar("days in month", CalendarUnit::Month))
    }

    fn number_of_complete_weeks_in_month<C: Calendar + ?Sized>(
        self,
        calendar: &C,
    ) -> Result<u32> {
        let month = interval(CalendarUnit::Month, self, calendar)?;
        let weeks = calendar
            .difference(CalendarUnit::WeekOfMonth, month.start, month.end)
            .ok_or(DateKitError::calendar("difference", CalendarUnit::WeekOfMonth))?;
        u32::try_from(weeks)
            .map_err(|_| DateKitError::calendar("difference", CalendarUnit::WeekOfMonth))
    }

    fn number_of_incomplete_weeks_in_month<C: Calendar + ?Sized>(
        self,
        calendar: &C,
    ) -> Result<u32> {
        let last_day = self
            .end_of_month(calendar)?
            .subtracting(CalendarUnit::Day, 1, calendar)?;
        let days = calendar
            .range_of(CalendarUnit::Day, CalendarUnit::WeekOfMonth, last_day)
            .ok_or(DateKitError::calendar("days in week", CalendarUnit::WeekOfMonth))?;
        Ok(u32::from(days.len() < 7))
    }

    fn number_of_weeks_in_month<C: Calendar + ?Sized>(self, calendar: &C) -> Result<u32> {
        Ok(self.number_of_complete_weeks_in_month(calendar)?
            + self.number_of_incomplete_weeks_in_month(calendar)?)
    }

    fn duration_to<C: Calendar + ?Sized>(
        self,
        other: Self,
        units: &[CalendarUnit],
        calendar: &C,
    ) -> Result<DateComponents> {
        let (from, to) = (self.min(other), self.max(other));
        let mut ordered = units.to_vec();
        ordered.sort();
        ordered.dedup();

        let mut cursor = from;
        let mut breakdown = DateComponents::default();
        for unit in ordered {
            let whole = calendar
                .difference(unit, cursor, to)
                .ok_or(DateKitError::calendar("difference", unit))?;
            breakdown.set(unit, whole);
            cursor = cursor.adding(unit, whole, calendar)?;
        }
        Ok(breakdown)
    }

    fn is_between(self, start: Self, end: Self) -> bool {
        start <= self && self <= end
    }

    fn is_between_until(self, start: Self, end: Self) -> bool {
        start <= self && self < end
    }

    fn is_past(self, relative_to: Self) -> bool {
        self < relative_to
    }

    fn is_future(self, relative_to: Self) -> bool {
        self > relative_to
    }

    fn is_same<C: Calendar + ?Sized>(
        self,
        other: Option<Self>,
        granularity: CalendarUnit,
        calendar: &C,
    ) -> Result<bool> {
        let Some(other) = other else {
            return Ok(false);
        };
        Ok(interval(granularity, self, calendar)? == interval(granularity, other, calendar)?)
    }

    fn yesterday<C: Calendar + ?Sized>(
        self,
        granularity: CalendarUnit,
        calendar: &C,
    ) -> Result<Self> {
        let components = calendar.components(granularity.truncation_set(), self);
        let truncated = calendar
            .date_from_components(&components)
            .ok_or_else(|| {
                DateKitError::IncompleteComponents(format!(
                    "cannot rebuild {self} at {granularity} granularity"
                ))
            })?;
        truncated.subtracting(CalendarUnit::Day, 1, calendar)
    }

    fn day_interval<C: Calendar + ?Sized>(self, calendar: &C) -> Result<DateInterval> {
        interval(CalendarUnit::Day, self, calendar)
    }

    fn week_interval<C: Calendar + ?Sized>(self, calendar: &C) -> Result<DateInterval> {
        interval(CalendarUnit::WeekOfYear, self, calendar)
    }

    fn month_interval<C: Calendar + ?Sized>(self, calendar: &C) -> Result<DateInterval> {
        interval(CalendarUnit::Month, self, calendar)
    }

    fn year_interval<C: Calendar + ?Sized>(self, calendar: &C) -> Result<DateInterval> {
        interval(CalendarUnit::Year, self, calendar)
    }

    fn previous_day_interval<C: Calendar + ?Sized>(self, calendar: &C) -> Result<DateInterval> {
        let day = self.subtracting(CalendarUnit::Day, 1, calendar)?;
        interval(CalendarUnit::Day, day, calendar)
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Range;

    use super::*;
    use crate::calendar::GregorianCalendar;
    use chrono_tz::America::New_York;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn cal() -> GregorianCalendar {
        GregorianCalendar::default()
    }

    /// A calendar that can compute nothing.
    struct BrokenCalendar;

    impl Calendar for BrokenCalendar {
        fn first_weekday(&self) -> Weekday {
            Weekday::Sunday
        }
        fn components(&self, _: &[CalendarUnit], _: DateTime<Utc>) -> DateComponents {
            DateComponents::default()
        }
        fn date_from_components(&self, _: &DateComponents) -> Option<DateTime<Utc>> {
            None
        }
        fn interval_of(&self, _: CalendarUnit, _: DateTime<Utc>) -> Option<DateInterval> {
            None
        }
        fn adding(&self, _: CalendarUnit, _: i64, _: DateTime<Utc>) -> Option<DateTime<Utc>> {
            None
        }
        fn range_of(
            &self,
            _: CalendarUnit,
            _: CalendarUnit,
            _: DateTime<Utc>,
        ) -> Option<Range<u32>> {
            None
        }
        fn difference(&self, _: CalendarUnit, _: DateTime<Utc>, _: DateTime<Utc>) -> Option<i64> {
            None
        }
    }

    // ── adding / subtracting ────────────────────────────────────────────

    #[test]
    fn test_adding_and_subtracting_days() {
        let point = utc("2024-03-20T13:16:49Z");
        assert_eq!(
            point.adding(CalendarUnit::Day, 12, &cal()).unwrap(),
            utc("2024-04-01T13:16:49Z")
        );
        assert_eq!(
            point.subtracting(CalendarUnit::Day, 20, &cal()).unwrap(),
            utc("2024-02-29T13:16:49Z")
        );
    }

    #[test]
    fn test_adding_failure_is_an_error() {
        let point = utc("2024-03-20T13:16:49Z");
        let err = point.adding(CalendarUnit::Month, 1, &BrokenCalendar).unwrap_err();
        assert_eq!(
            err,
            DateKitError::Calendar {
                operation: "adding",
                unit: CalendarUnit::Month
            }
        );
    }

    #[test]
    fn test_lenient_variants_keep_input() {
        let point = utc("2024-03-20T13:16:49Z");
        assert_eq!(point.adding_or_self(CalendarUnit::Day, 3, &BrokenCalendar), point);
        assert_eq!(point.start_of_day_or_self(&BrokenCalendar), point);
        assert_eq!(point.start_of_month_or_self(&BrokenCalendar), point);
        assert_eq!(point.end_of_month_or_self(&BrokenCalendar), point);
    }

    #[test]
    fn test_subtracting_min_value_is_an_error() {
        let point = utc("2024-03-20T13:16:49Z");
        assert!(point.subtracting(CalendarUnit::Second, i64::MIN, &cal()).is_err());
    }

    // ── day counting ────────────────────────────────────────────────────

    #[test]
    fn test_count_days_ignores_time_of_day() {
        let a = utc("2024-03-20T23:59:00Z");
        let b = utc("2024-03-23T00:01:00Z");
        assert_eq!(a.count_days_to(b, &cal()).unwrap(), 3);
        assert_eq!(b.count_days_from(a, &cal()).unwrap(), 3);
    }

    #[test]
    fn test_count_days_clamps_to_zero() {
        let a = utc("2024-03-20T10:00:00Z");
        let b = utc("2024-03-23T10:00:00Z");
        assert_eq!(b.count_days_to(a, &cal()).unwrap(), 0);
        assert_eq!(a.count_days_from(b, &cal()).unwrap(), 0);
        assert_eq!(a.count_days_to(a, &cal()).unwrap(), 0);
    }

    #[test]
    fn test_count_days_across_dst() {
        let cal = GregorianCalendar::new(New_York, Weekday::Sunday);
        let a = utc("2026-03-07T17:00:00Z");
        let b = utc("2026-03-09T16:00:00Z");
        assert_eq!(a.count_days_to(b, &cal).unwrap(), 2);
    }

    // ── day / month boundaries ──────────────────────────────────────────

    #[test]
    fn test_start_and_end_of_day() {
        let point = utc("2024-03-20T13:16:49Z");
        assert_eq!(point.start_of_day(&cal()).unwrap(), utc("2024-03-20T00:00:00Z"));
        assert_eq!(point.end_of_day(&cal()).unwrap(), utc("2024-03-21T00:00:00Z"));
    }

    #[test]
    fn test_end_of_day_in_timezone() {
        let cal = GregorianCalendar::new(New_York, Weekday::Sunday);
        // 2026-03-07 22:00 EST; the following midnight is still EST
        let point = utc("2026-03-08T03:00:00Z");
        assert_eq!(point.end_of_day(&cal).unwrap(), utc("2026-03-08T05:00:00Z"));
    }

    #[test]
    fn test_start_and_end_of_month() {
        let point = utc("2024-02-10T08:00:00Z");
        assert_eq!(point.start_of_month(&cal()).unwrap(), utc("2024-02-01T00:00:00Z"));
        assert_eq!(point.end_of_month(&cal()).unwrap(), utc("2024-03-01T00:00:00Z"));
    }

    #[test]
    fn test_start_of_previous_month() {
        let point = utc("2024-03-31T08:00:00Z");
        assert_eq!(
            point.start_of_previous_month(&cal()).unwrap(),
            utc("2024-02-01T00:00:00Z")
        );
    }

    #[test]
    fn test_first_weekday_before_start_of_month_sunday_first() {
        // May 2024 starts on a Wednesday: grid starts Sunday April 28
        let point = utc("2024-05-15T12:00:00Z");
        assert_eq!(
            point.first_weekday_before_start_of_month(&cal()).unwrap(),
            utc("2024-04-28T00:00:00Z")
        );
    }

    #[test]
    fn test_first_weekday_before_start_of_month_monday_first() {
        // September 2024 starts on a Sunday: a Monday grid starts August 26
        let cal = cal().with_first_weekday(Weekday::Monday);
        let point = utc("2024-09-10T12:00:00Z");
        assert_eq!(
            point.first_weekday_before_start_of_month(&cal).unwrap(),
            utc("2024-08-26T00:00:00Z")
        );
    }

    #[test]
    fn test_first_weekday_before_start_of_month_on_first_weekday() {
        // September 2024 starts on a Sunday: no leading days
        let point = utc("2024-09-10T12:00:00Z");
        assert_eq!(
            point.first_weekday_before_start_of_month(&cal()).unwrap(),
            utc("2024-09-01T00:00:00Z")
        );
    }

    // ── components ──────────────────────────────────────────────────────

    #[test]
    fn test_number_accessors() {
        let point = utc("2024-03-20T13:16:49Z");
        assert_eq!(point.day_number(&cal()).unwrap(), 20);
        assert_eq!(point.month_number(&cal()).unwrap(), 3);
        assert_eq!(point.year_number(&cal()).unwrap(), 2024);
        assert_eq!(point.weekday_in(&cal()).unwrap(), Weekday::Wednesday);
    }

    #[test]
    fn test_number_accessors_fail_without_components() {
        let point = utc("2024-03-20T13:16:49Z");
        let err = point.day_number(&BrokenCalendar).unwrap_err();
        assert!(err.to_string().contains("Incomplete date components"), "got: {err}");
    }

    #[test]
    fn test_number_of_days_in_month() {
        let days = |s| utc(s).number_of_days_in_month(&cal()).unwrap();
        assert_eq!(days("2024-02-10T00:00:00Z"), 29);
        assert_eq!(days("2023-02-10T00:00:00Z"), 28);
        assert_eq!(days("2024-04-30T23:59:59Z"), 30);
        assert_eq!(days("2024-12-01T00:00:00Z"), 31);
    }

    #[test]
    fn test_weeks_in_month_with_trailing_partial_week() {
        // May 2024: 31 days starting Wednesday, ends Friday
        let point = utc("2024-05-15T12:00:00Z");
        assert_eq!(point.number_of_complete_weeks_in_month(&cal()).unwrap(), 4);
        assert_eq!(point.number_of_incomplete_weeks_in_month(&cal()).unwrap(), 1);
        assert_eq!(point.number_of_weeks_in_month(&cal()).unwrap(), 5);
    }

    #[test]
    fn test_incomplete_weeks_zero_when_month_ends_on_last_weekday() {
        // August 31, 2024 is a Saturday
        let point = utc("2024-08-15T12:00:00Z");
        assert_eq!(point.number_of_incomplete_weeks_in_month(&cal()).unwrap(), 0);
        // With Monday-first weeks the same Saturday leaves the week open
        let monday = cal().with_first_weekday(Weekday::Monday);
        assert_eq!(point.number_of_incomplete_weeks_in_month(&monday).unwrap(), 1);
    }

    #[test]
    fn test_complete_weeks_in_february() {
        let point = utc("2023-02-15T12:00:00Z");
        assert_eq!(point.number_of_complete_weeks_in_month(&cal()).unwrap(), 4);
    }

    // ── duration ────────────────────────────────────────────────────────

    #[test]
    fn test_duration_default_units() {
        let a = utc("2024-03-20T09:00:00Z");
        let b = utc("2024-03-21T11:15:30Z");
        let d = a.duration_to(b, &DEFAULT_DURATION_UNITS, &cal()).unwrap();
        assert_eq!(d.hour, Some(26));
        assert_eq!(d.minute, Some(15));
        assert_eq!(d.second, Some(30));
        assert_eq!(d.day, None);
    }

    #[test]
    fn test_duration_is_symmetric_and_non_negative() {
        let a = utc("2024-03-20T09:00:00Z");
        let b = utc("2024-03-21T11:15:30Z");
        let forward = a.duration_to(b, &DEFAULT_DURATION_UNITS, &cal()).unwrap();
        let backward = b.duration_to(a, &DEFAULT_DURATION_UNITS, &cal()).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_duration_unit_order_does_not_matter() {
        let a = utc("2024-01-31T00:00:00Z");
        let b = utc("2024-03-02T06:00:00Z");
        let d = a
            .duration_to(b, &[CalendarUnit::Hour, CalendarUnit::Day, CalendarUnit::Month], &cal())
            .unwrap();
        // Jan 31 + 1 month = Feb 29, then 2 days and 6 hours
        assert_eq!(d.month, Some(1));
        assert_eq!(d.day, Some(2));
        assert_eq!(d.hour, Some(6));
    }

    #[test]
    fn test_duration_minutes_only() {
        let a = utc("2024-03-20T09:00:00Z");
        let b = utc("2024-03-20T10:30:59Z");
        let d = a.duration_to(b, &[CalendarUnit::Minute], &cal()).unwrap();
        assert_eq!(d.minute, Some(90));
        assert_eq!(d.hour, None);
    }

    // ── predicates ──────────────────────────────────────────────────────

    #[test]
    fn test_is_between_inclusive_and_exclusive() {
        let start = utc("2024-03-20T00:00:00Z");
        let end = utc("2024-03-21T00:00:00Z");
        assert!(end.is_between(start, end));
        assert!(!end.is_between_until(start, end));
        assert!(start.is_between_until(start, end));
    }

    #[test]
    fn test_is_between_inverted_range_is_empty() {
        let start = utc("2024-03-21T00:00:00Z");
        let end = utc("2024-03-20T00:00:00Z");
        let mid = utc("2024-03-20T12:00:00Z");
        assert!(!mid.is_between(start, end));
        assert!(!mid.is_between_until(start, end));
    }

    #[test]
    fn test_past_and_future_are_strict() {
        let now = utc("2024-03-20T12:00:00Z");
        assert!(utc("2024-03-20T11:59:59Z").is_past(now));
        assert!(utc("2024-03-20T12:00:01Z").is_future(now));
        assert!(!now.is_past(now));
        assert!(!now.is_future(now));
    }

    #[test]
    fn test_is_same_granularities() {
        let a = utc("2024-03-20T01:00:00Z");
        let b = utc("2024-03-20T23:00:00Z");
        assert!(a.is_same(Some(b), CalendarUnit::Day, &cal()).unwrap());
        assert!(!a.is_same(Some(b), CalendarUnit::Hour, &cal()).unwrap());
        assert!(a.is_same(Some(b), CalendarUnit::Month, &cal()).unwrap());
        assert!(!a.is_same(None, CalendarUnit::Day, &cal()).unwrap());
    }

    #[test]
    fn test_is_same_depends_on_timezone() {
        let a = utc("2024-03-20T01:00:00Z");
        let b = utc("2024-03-20T23:00:00Z");
        let new_york = GregorianCalendar::new(New_York, Weekday::Sunday);
        assert!(!a.is_same(Some(b), CalendarUnit::Day, &new_york).unwrap());
    }

    // ── yesterday ───────────────────────────────────────────────────────

    #[test]
    fn test_yesterday_at_day_granularity() {
        let point = utc("2024-03-20T13:16:49Z");
        let yesterday = point.yesterday(CalendarUnit::Day, &cal()).unwrap();
        assert_eq!(yesterday, utc("2024-03-19T00:00:00Z"));

        let minus_one = point.adding(CalendarUnit::Day, -1, &cal()).unwrap();
        assert!(yesterday
            .is_same(Some(minus_one), CalendarUnit::Day, &cal())
            .unwrap());
    }

    #[test]
    fn test_yesterday_keeps_finer_fields() {
        let point = utc("2024-03-01T13:16:49Z");
        assert_eq!(
            point.yesterday(CalendarUnit::Minute, &cal()).unwrap(),
            utc("2024-02-29T13:16:00Z")
        );
        assert_eq!(
            point.yesterday(CalendarUnit::Year, &cal()).unwrap(),
            utc("2024-02-29T00:00:00Z")
        );
    }

    #[test]
    fn test_yesterday_fails_when_components_cannot_be_rebuilt() {
        let point = utc("2024-03-20T13:16:49Z");
        let err = point.yesterday(CalendarUnit::Day, &BrokenCalendar).unwrap_err();
        assert!(matches!(err, DateKitError::IncompleteComponents(_)));
    }

    // ── intervals ───────────────────────────────────────────────────────

    #[test]
    fn test_period_intervals() {
        let point = utc("2024-03-20T13:16:49Z");
        let day = point.day_interval(&cal()).unwrap();
        assert_eq!(day.start, point.start_of_day(&cal()).unwrap());
        assert_eq!(day.end, point.end_of_day(&cal()).unwrap());

        let week = point.week_interval(&cal()).unwrap();
        assert_eq!(week.start, utc("2024-03-17T00:00:00Z"));

        let month = point.month_interval(&cal()).unwrap();
        assert_eq!(month.duration().num_days(), 31);

        let year = point.year_interval(&cal()).unwrap();
        assert_eq!(year.duration().num_days(), 366);
    }

    #[test]
    fn test_previous_day_interval() {
        let point = utc("2024-03-01T13:16:49Z");
        let previous = point.previous_day_interval(&cal()).unwrap();
        assert_eq!(previous.start, utc("2024-02-29T00:00:00Z"));
        assert_eq!(previous.end, utc("2024-03-01T00:00:00Z"));
    }

    #[test]
    fn test_seconds_in_day() {
        assert_eq!(SECONDS_IN_DAY, 86_400);
    }

    #[test]
    fn test_unrepresentable_local_day_is_an_error() {
        let ny = GregorianCalendar::new(New_York, Weekday::Monday);
        let min = DateTime::<Utc>::MIN_UTC;
        assert!(min.start_of_day(&ny).is_err());
        assert!(min.weekday_in(&ny).is_err());
        assert_eq!(min.start_of_day_or_self(&ny), min);
    }
}
