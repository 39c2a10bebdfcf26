//! German display formatting for dates and ranges.
//!
//! The strings the tracking views render: numeric `dd.MM.yyyy` forms and
//! two-letter weekday names. The ISO-8601 form used for persistence is
//! `Date`'s own `Display`/`FromStr`.

use crate::date::Date;

/// Format a date as `dd.MM.yyyy`.
pub fn format_date(date: Date) -> String {
    format!(
        "{:02}.{:02}.{:04}",
        date.day_of_month(),
        date.month(),
        date.year()
    )
}

/// Format an inclusive date range as `dd.MM.yyyy - dd.MM.yyyy`.
pub fn format_date_range(start: Date, end: Date) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

/// Short column label for a day, `dd.MM.`
pub fn day_label(date: Date) -> String {
    format!("{:02}.{:02}.", date.day_of_month(), date.month())
}

/// German two-letter weekday abbreviation (`"Mo"` … `"So"`).
pub fn day_name(date: Date) -> &'static str {
    date.weekday().short_name_de()
}
