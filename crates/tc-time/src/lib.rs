//! # tc-time
//!
//! Date, public-holiday, and split-week types for effort tracking.
//!
//! The central operations are [`week::split_week`], which partitions the
//! ISO week around a reference date into month-pure labeled runs, and
//! [`calendar::HolidayCalendar::is_public_holiday`] for the built-in
//! [`calendars::BadenWuerttemberg`] jurisdiction.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the `Holiday` enum.
pub mod calendar;

/// Concrete holiday calendars (jurisdiction specific).
pub mod calendars;

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// German display formatting.
pub mod format;

/// `Month` — month of the year.
pub mod month;

/// Split-week partition of ISO weeks.
pub mod week;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Holiday, HolidayCalendar};
pub use calendars::BadenWuerttemberg;
pub use date::Date;
pub use easter::easter_sunday;
pub use month::Month;
pub use week::{split_week, week_end, week_start, WeekSplit};
pub use weekday::Weekday;
