//! # datekit
//!
//! Calendar arithmetic over `chrono::DateTime<Utc>`.
//!
//! Every computation is a pure function of its inputs and an explicit
//! [`Calendar`]: there is no ambient "current calendar", time zone or clock.
//! Build a [`GregorianCalendar`] once at the application boundary (directly or
//! from a [`CalendarConfig`]) and pass it down.
//!
//! ## Modules
//!
//! - [`calendar`] — the [`Calendar`] capability and its chrono-tz implementation
//! - [`point`] — day/month boundaries, unit arithmetic, day counting, predicates
//! - [`interval`] — [`DateInterval`] and next/previous interval navigation
//! - [`weekday`] — locale-independent [`Weekday`] numbering
//! - [`symbols`] — weekday and month display names
//! - [`date_key`] — [`DateKey`] civil-day identity
//! - [`unit`] — [`CalendarUnit`] and [`DateComponents`]
//! - [`config`] — [`CalendarConfig`]
//! - [`error`] — Error types
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use datekit::{CalendarUnit, DateExt, GregorianCalendar};
//!
//! let calendar = GregorianCalendar::default();
//! let point: DateTime<Utc> = "2024-03-20T13:16:49Z".parse().unwrap();
//!
//! let month = point.month_interval(&calendar).unwrap();
//! let next = month.next_interval(&calendar);
//! assert_eq!(next.start, "2024-04-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap());
//! assert_eq!(point.number_of_days_in_month(&calendar).unwrap(), 31);
//! assert!(point
//!     .yesterday(CalendarUnit::Day, &calendar)
//!     .unwrap()
//!     .is_same(Some(point.subtracting(CalendarUnit::Day, 1, &calendar).unwrap()), CalendarUnit::Day, &calendar)
//!     .unwrap());
//! ```

pub mod calendar;
pub mod config;
pub mod date_key;
pub mod error;
pub mod interval;
pub mod point;
pub mod symbols;
pub mod unit;
pub mod weekday;

pub use calendar::{Calendar, GregorianCalendar};
pub use config::CalendarConfig;
pub use date_key::DateKey;
pub use error::DateKitError;
pub use interval::{DateInterval, OffsetDirection};
pub use point::{count_whole_days_between, DateExt, DEFAULT_DURATION_UNITS, SECONDS_IN_DAY};
pub use symbols::{SymbolStyle, Symbols};
pub use unit::{CalendarUnit, DateComponents};
pub use weekday::Weekday;
