//! # timecard
//!
//! Date calculations for corporate effort tracking: split-week
//! partitioning of ISO weeks and German public-holiday awareness.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `tc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use timecard::time::{split_week, BadenWuerttemberg, Date, HolidayCalendar};
//!
//! let reference: Date = "2024-01-30".parse().unwrap();
//! let splits = split_week(reference).unwrap();
//! assert_eq!(splits.len(), 2);
//! assert_eq!(splits[0].label(), "KW 5");
//! assert_eq!(splits[1].label(), "KW 5/1");
//!
//! let cal = BadenWuerttemberg;
//! assert!(cal.is_public_holiday("2024-03-29".parse().unwrap()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use tc_core as core;

/// Date, holiday calendar, and split-week types.
pub use tc_time as time;
