//! Concrete holiday calendars (jurisdiction specific).
//!
//! One module per jurisdiction. Supporting a further federal state means
//! adding a module here with a type implementing
//! [`HolidayCalendar`](crate::calendar::HolidayCalendar).

/// Baden-Württemberg public holidays.
pub mod baden_wuerttemberg;

pub use baden_wuerttemberg::BadenWuerttemberg;
