//! Split-week partition of ISO weeks.
//!
//! Timecards are kept per calendar month, so a week that straddles a
//! month boundary is entered as two separate sub-periods. [`split_week`]
//! partitions the ISO week (Monday–Sunday) containing a reference date
//! into one or two contiguous runs of days, none of which crosses a
//! month boundary, each labeled with its `"KW {n}"` calendar-week label.

use crate::date::Date;
use crate::format::format_date_range;
use tc_core::errors::Result;

/// A contiguous run of days within one calendar month, forming a whole
/// ISO week or one part of a week split by a month boundary.
///
/// Constructed by [`split_week`]; never mutated and never persisted.
/// Callers recompute it whenever their reference date changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeekSplit {
    start: Date,
    end: Date,
    label: String,
    days: Vec<Date>,
}

impl WeekSplit {
    /// First day of the run (equals `days()[0]`).
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the run (equals `days().last()`).
    pub fn end(&self) -> Date {
        self.end
    }

    /// The calendar-week label, `"KW {n}"`, with a `/1` suffix on the
    /// continuation part of a split week.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The days of the run, in calendar order.
    pub fn days(&self) -> &[Date] {
        &self.days
    }

    /// Number of days in the run (1–7).
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    /// Return `true` if `date` falls inside the run.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Return `true` if this is the continuation part of a split week
    /// (its label carries the `/1` suffix).
    pub fn is_continuation(&self) -> bool {
        self.label.ends_with("/1")
    }
}

impl std::fmt::Display for WeekSplit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({})",
            self.label,
            format_date_range(self.start, self.end)
        )
    }
}

/// Return the Monday on or before `date` (the start of its ISO week).
///
/// Infallible: serial 0 is itself a Monday, so the week start never
/// leaves the valid range.
pub fn week_start(date: Date) -> Date {
    date - (date.weekday().ordinal() as i32 - 1)
}

/// Return the Sunday on or after `date` (the end of its ISO week).
///
/// # Errors
/// Fails only if the Sunday lies past the last representable date.
pub fn week_end(date: Date) -> Result<Date> {
    date.add_days(7 - date.weekday().ordinal() as i32)
}

/// Partition the ISO week containing `reference` into month-pure runs.
///
/// The seven days Monday–Sunday are walked in order; a run is closed
/// whenever the next day belongs to a different calendar month, so the
/// result has one entry for a week inside a single month and two for a
/// week straddling a month boundary. More than two is impossible: seven
/// consecutive days meet at most one month boundary.
///
/// Every run is labeled `"KW {n}"` where `n` is the ISO week number of
/// the run's **last** day; the second run of a split week gets the
/// `"KW {n}/1"` continuation label. The first run keeps the plain
/// label: the suffix marks the continuation, not the first part.
///
/// # Errors
/// Fails only if the week overhangs the last representable date.
pub fn split_week(reference: Date) -> Result<Vec<WeekSplit>> {
    let monday = week_start(reference);
    let mut days = Vec::with_capacity(7);
    for offset in 0..7 {
        days.push(monday.add_days(offset)?);
    }

    let mut splits: Vec<WeekSplit> = Vec::with_capacity(2);
    let mut run: Vec<Date> = Vec::with_capacity(7);
    for (i, &day) in days.iter().enumerate() {
        run.push(day);
        let next = days.get(i + 1);
        if next.is_some_and(|n| n.month() == day.month()) {
            continue;
        }
        // Month boundary ahead, or end of week: close the current run.
        let week = day.iso_week();
        let label = if splits.is_empty() {
            format!("KW {week}")
        } else {
            format!("KW {week}/1")
        };
        splits.push(WeekSplit {
            start: run[0],
            end: day,
            label,
            days: std::mem::take(&mut run),
        });
    }

    debug_assert!(matches!(splits.len(), 1 | 2));
    Ok(splits)
}
