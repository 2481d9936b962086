// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        reason = "allow these lints in tests to improve the readability of the tests"
    )
)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Timezone-aware wall-clock conveniences: calendar boundaries, flexible
//! formatting, and tolerant parsing.
//!
//! # Quick Start
//!
//! ```
//! use jiff::tz::TimeZone;
//! use tock::TimeValue;
//!
//! // Pin the process-wide display zone; the system zone is the default.
//! tock::set_location(TimeZone::UTC);
//!
//! let now = tock::now();
//! println!("it is now {}", tock::ymd_his(&now));
//!
//! // Calendar boundaries of the instant's month.
//! let first = tock::start_of_month(Some(&now));
//! let last = tock::end_of_month(Some(&now));
//! assert!(first <= now && now <= last);
//!
//! // Tolerant parsing from several representations.
//! let from_text = tock::parse(TimeValue::from("2020-01-01 00:00:01"))?;
//! let from_epoch = tock::parse(TimeValue::from(1_577_836_801_i64))?;
//! assert_eq!(from_text, from_epoch);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Why?
//!
//! Services that report in a business time zone keep answering the same small
//! questions: what is "today" over there, where does this week or month begin
//! and end, how do I render or recover a `"YYYY-MM-DD HH:MM:SS"` stamp? This
//! crate answers them once, on top of [jiff]'s calendar arithmetic, instead of
//! scattering ad hoc zone and boundary math through application code.
//!
//! For machine-centric time (timeouts, periodic work, monotonic measurement,
//! controllable clocks for testing) use a clock abstraction crate instead.
//! This crate is purely about human-centric calendar time.
//!
//! [jiff]: https://crates.io/crates/jiff
//!
//! # Overview
//!
//! - [`set_location`] / [`location`] - The process-wide active time zone in
//!   which results are expressed. Defaults to the system zone.
//! - [`now`], [`today`], [`tomorrow`], [`yesterday`] - Current-time accessors.
//! - [`start_of_day`], [`end_of_day`], [`start_of_week`], [`end_of_week`],
//!   [`start_of_month`], [`end_of_month`], [`start_of_year`], [`end_of_year`] -
//!   Boundaries of the period containing a reference instant. Total functions;
//!   they never fail.
//! - [`ymd_his`], [`ymd`], [`format`] - Rendering, including a single-letter
//!   token dialect (`"Y-m-d H:i:s"`) alongside jiff's native layouts.
//! - [`parse`] and [`TimeValue`] - Tolerant interpretation of an instant,
//!   text, or epoch seconds.
//! - [`Error`] - The error produced by [`parse`]; nothing else in the crate
//!   fails.
//!
//! # The active location
//!
//! Exactly one location is active per process. Every function that produces an
//! instant expresses it in the active location; boundary functions take their
//! calendar date from the reference (in the reference's own zone) and
//! materialize the boundary in the active location. The setting is guarded, so
//! concurrent readers never observe a torn value, but replacing it while other
//! threads compute is inherently racy in the way any process-wide setting is:
//! set it once at startup.
//!
//! # Optional references
//!
//! Every boundary function takes `Option<&Zoned>`. Pass `Some(&instant)` to
//! compute the boundary for that instant, or `None` for "relative to now":
//!
//! ```
//! use jiff::tz::TimeZone;
//!
//! tock::set_location(TimeZone::UTC);
//!
//! // Identical calendar dates, one explicit and one implicit.
//! let explicit = tock::start_of_day(Some(&tock::now()));
//! let implicit = tock::today();
//! assert_eq!(explicit.date(), implicit.date());
//! ```

mod boundary;
mod error;
mod fmt;
mod location;
mod parse;

pub use boundary::{
    end_of_day, end_of_month, end_of_week, end_of_year, now, start_of_day, start_of_month,
    start_of_week, start_of_year, today, tomorrow, yesterday,
};
pub use error::{Error, Result};
pub use fmt::{LAYOUT_YMD, LAYOUT_YMD_HIS, format, ymd, ymd_his};
pub use location::{location, set_location};
pub use parse::{TimeValue, parse};
