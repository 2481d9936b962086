// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;
use jiff::{Span, Timestamp, Zoned};

use crate::location;

/// Returns the current instant, expressed in the active location.
///
/// # Examples
///
/// ```
/// use jiff::tz::TimeZone;
///
/// tock::set_location(TimeZone::UTC);
/// let now = tock::now();
/// assert_eq!(now.time_zone(), &TimeZone::UTC);
/// ```
#[must_use]
pub fn now() -> Zoned {
    Timestamp::now().to_zoned(location())
}

/// Returns 00:00:00 of the current calendar date in the active location.
///
/// Equivalent to `start_of_day(None)`.
#[must_use]
pub fn today() -> Zoned {
    start_of_day(None)
}

/// Returns 00:00:00 of the calendar date one day after the reference.
///
/// The reference defaults to [`now`] when `None`.
///
/// # Examples
///
/// ```
/// use jiff::civil::date;
/// use jiff::tz::TimeZone;
///
/// tock::set_location(TimeZone::UTC);
/// let reference = date(2020, 2, 28).at(15, 30, 0, 0).to_zoned(TimeZone::UTC)?;
/// assert_eq!(tock::ymd_his(&tock::tomorrow(Some(&reference))), "2020-02-29 00:00:00");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn tomorrow(reference: Option<&Zoned>) -> Zoned {
    let (date, location) = resolve(reference);
    let next = date.tomorrow().unwrap_or(Date::MAX);
    materialize(next.at(0, 0, 0, 0), &location)
}

/// Returns 00:00:00 of the calendar date one day before the reference.
///
/// The reference defaults to [`now`] when `None`.
#[must_use]
pub fn yesterday(reference: Option<&Zoned>) -> Zoned {
    let (date, location) = resolve(reference);
    let previous = date.yesterday().unwrap_or(Date::MIN);
    materialize(previous.at(0, 0, 0, 0), &location)
}

/// Returns 00:00:00 of the reference's calendar date.
///
/// The reference defaults to [`now`] when `None`.
///
/// # Examples
///
/// ```
/// use jiff::civil::date;
/// use jiff::tz::TimeZone;
///
/// tock::set_location(TimeZone::UTC);
/// let reference = date(2020, 6, 15).at(13, 45, 59, 0).to_zoned(TimeZone::UTC)?;
/// assert_eq!(tock::ymd_his(&tock::start_of_day(Some(&reference))), "2020-06-15 00:00:00");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn start_of_day(reference: Option<&Zoned>) -> Zoned {
    let (date, location) = resolve(reference);
    materialize(date.at(0, 0, 0, 0), &location)
}

/// Returns 23:59:59 of the reference's calendar date.
///
/// The reference defaults to [`now`] when `None`.
#[must_use]
pub fn end_of_day(reference: Option<&Zoned>) -> Zoned {
    let (date, location) = resolve(reference);
    materialize(date.at(23, 59, 59, 0), &location)
}

/// Returns Monday 00:00:00 of the week containing the reference.
///
/// Weeks start on Monday: a Sunday reference belongs to the week that began
/// six days earlier, so `start_of_week(t) <= t` holds for every weekday.
///
/// The reference defaults to [`now`] when `None`.
///
/// # Examples
///
/// ```
/// use jiff::civil::date;
/// use jiff::tz::TimeZone;
///
/// tock::set_location(TimeZone::UTC);
/// // 2020-06-21 is a Sunday; its week began on Monday the 15th.
/// let sunday = date(2020, 6, 21).at(10, 0, 0, 0).to_zoned(TimeZone::UTC)?;
/// assert_eq!(tock::ymd_his(&tock::start_of_week(Some(&sunday))), "2020-06-15 00:00:00");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn start_of_week(reference: Option<&Zoned>) -> Zoned {
    let (date, location) = resolve(reference);
    let days_from_monday = i64::from(date.weekday().to_monday_zero_offset());
    let monday = date.saturating_sub(Span::new().days(days_from_monday));
    materialize(monday.at(0, 0, 0, 0), &location)
}

/// Returns Sunday 23:59:59 of the week containing the reference.
///
/// Weeks end on Sunday: a Sunday reference is its own week end, so
/// `t <= end_of_week(t)` holds for every weekday.
///
/// The reference defaults to [`now`] when `None`.
#[must_use]
pub fn end_of_week(reference: Option<&Zoned>) -> Zoned {
    let (date, location) = resolve(reference);
    let days_to_sunday = i64::from(6 - date.weekday().to_monday_zero_offset());
    let sunday = date.saturating_add(Span::new().days(days_to_sunday));
    materialize(sunday.at(23, 59, 59, 0), &location)
}

/// Returns 00:00:00 of the first calendar day of the reference's month.
///
/// The reference defaults to [`now`] when `None`.
#[must_use]
pub fn start_of_month(reference: Option<&Zoned>) -> Zoned {
    let (date, location) = resolve(reference);
    materialize(date.first_of_month().at(0, 0, 0, 0), &location)
}

/// Returns 23:59:59 of the last calendar day of the reference's month.
///
/// Month lengths of 28, 29, 30, and 31 days are all handled, including
/// February in leap years. The result is exactly one second before the start
/// of the following month.
///
/// The reference defaults to [`now`] when `None`.
///
/// # Examples
///
/// ```
/// use jiff::civil::date;
/// use jiff::tz::TimeZone;
///
/// tock::set_location(TimeZone::UTC);
/// let leap = date(2020, 2, 10).at(8, 0, 0, 0).to_zoned(TimeZone::UTC)?;
/// assert_eq!(tock::ymd_his(&tock::end_of_month(Some(&leap))), "2020-02-29 23:59:59");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn end_of_month(reference: Option<&Zoned>) -> Zoned {
    let (date, location) = resolve(reference);
    materialize(date.last_of_month().at(23, 59, 59, 0), &location)
}

/// Returns January 1 00:00:00 of the reference's year.
///
/// The reference defaults to [`now`] when `None`.
#[must_use]
pub fn start_of_year(reference: Option<&Zoned>) -> Zoned {
    let (date, location) = resolve(reference);
    materialize(date.first_of_year().at(0, 0, 0, 0), &location)
}

/// Returns December 31 23:59:59 of the reference's year.
///
/// The reference defaults to [`now`] when `None`.
#[must_use]
pub fn end_of_year(reference: Option<&Zoned>) -> Zoned {
    let (date, location) = resolve(reference);
    materialize(date.last_of_year().at(23, 59, 59, 0), &location)
}

// The calendar date comes from the reference in the reference's own zone (or
// from the current instant in the active location); the computed boundary is
// always materialized in the active location.
fn resolve(reference: Option<&Zoned>) -> (Date, TimeZone) {
    let location = location();
    let date = reference.map_or_else(|| Timestamp::now().to_zoned(location.clone()).date(), Zoned::date);
    (date, location)
}

// Civil times in a DST gap or fold resolve with jiff's compatible
// disambiguation. A civil time outside the representable instant range clamps
// to the nearest boundary, keeping every caller total.
fn materialize(datetime: DateTime, location: &TimeZone) -> Zoned {
    location.to_zoned(datetime).unwrap_or_else(|_| {
        let clamped = if datetime.year() > 0 { Timestamp::MAX } else { Timestamp::MIN };
        clamped.to_zoned(location.clone())
    })
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::{self, TimeZone};

    use crate::location::testing::with_location;
    use crate::ymd_his;

    use super::*;

    fn zoned(year: i16, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Zoned {
        date(year, month, day)
            .at(hour, minute, second, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    #[test]
    fn now_in_active_location() {
        let fixed = TimeZone::fixed(tz::offset(-7));
        with_location(fixed.clone(), || {
            assert_eq!(now().time_zone(), &fixed);
        });
    }

    #[test]
    fn today_is_start_of_current_day() {
        with_location(TimeZone::UTC, || {
            let today = today();
            assert_eq!(today.time(), jiff::civil::time(0, 0, 0, 0));
            assert_eq!(today.date(), now().date());
        });
    }

    #[test]
    fn tomorrow_crosses_month_end() {
        with_location(TimeZone::UTC, || {
            let reference = zoned(2021, 1, 31, 22, 0, 0);
            assert_eq!(ymd_his(&tomorrow(Some(&reference))), "2021-02-01 00:00:00");
        });
    }

    #[test]
    fn tomorrow_handles_leap_february() {
        with_location(TimeZone::UTC, || {
            let reference = zoned(2020, 2, 28, 1, 2, 3);
            assert_eq!(ymd_his(&tomorrow(Some(&reference))), "2020-02-29 00:00:00");
        });
    }

    #[test]
    fn yesterday_crosses_year_start() {
        with_location(TimeZone::UTC, || {
            let reference = zoned(2021, 1, 1, 0, 30, 0);
            assert_eq!(ymd_his(&yesterday(Some(&reference))), "2020-12-31 00:00:00");
        });
    }

    #[test]
    fn day_bounds_share_the_reference_date() {
        with_location(TimeZone::UTC, || {
            let reference = zoned(2020, 6, 15, 13, 45, 59);
            let start = start_of_day(Some(&reference));
            let end = end_of_day(Some(&reference));

            assert!(start <= reference && reference <= end);
            assert_eq!(start.date(), reference.date());
            assert_eq!(end.date(), reference.date());
            assert_eq!(ymd_his(&start), "2020-06-15 00:00:00");
            assert_eq!(ymd_his(&end), "2020-06-15 23:59:59");
        });
    }

    #[test]
    fn week_runs_monday_through_sunday() {
        with_location(TimeZone::UTC, || {
            // 2020-06-17 is a Wednesday.
            let reference = zoned(2020, 6, 17, 12, 0, 0);
            assert_eq!(ymd_his(&start_of_week(Some(&reference))), "2020-06-15 00:00:00");
            assert_eq!(ymd_his(&end_of_week(Some(&reference))), "2020-06-21 23:59:59");
        });
    }

    #[test]
    fn monday_reference_is_its_own_week_start() {
        with_location(TimeZone::UTC, || {
            let monday = zoned(2020, 6, 15, 8, 0, 0);
            assert_eq!(ymd_his(&start_of_week(Some(&monday))), "2020-06-15 00:00:00");
            assert_eq!(ymd_his(&end_of_week(Some(&monday))), "2020-06-21 23:59:59");
        });
    }

    #[test]
    fn sunday_reference_belongs_to_the_preceding_week() {
        with_location(TimeZone::UTC, || {
            // 2020-06-21 is a Sunday. The week began six days earlier and ends
            // that same day.
            let sunday = zoned(2020, 6, 21, 23, 0, 0);
            let start = start_of_week(Some(&sunday));
            let end = end_of_week(Some(&sunday));

            assert_eq!(ymd_his(&start), "2020-06-15 00:00:00");
            assert_eq!(ymd_his(&end), "2020-06-21 23:59:59");
            assert!(start <= sunday && sunday <= end);
        });
    }

    #[test]
    fn week_crosses_month_boundary() {
        with_location(TimeZone::UTC, || {
            // 2020-07-01 is a Wednesday; its week began in June.
            let reference = zoned(2020, 7, 1, 6, 0, 0);
            assert_eq!(ymd_his(&start_of_week(Some(&reference))), "2020-06-29 00:00:00");
            assert_eq!(ymd_his(&end_of_week(Some(&reference))), "2020-07-05 23:59:59");
        });
    }

    #[test]
    fn month_bounds_for_leap_february() {
        with_location(TimeZone::UTC, || {
            let reference = zoned(2020, 2, 10, 8, 0, 0);
            assert_eq!(ymd_his(&start_of_month(Some(&reference))), "2020-02-01 00:00:00");
            assert_eq!(ymd_his(&end_of_month(Some(&reference))), "2020-02-29 23:59:59");
        });
    }

    #[test]
    fn month_bounds_for_plain_february() {
        with_location(TimeZone::UTC, || {
            let reference = zoned(2021, 2, 10, 8, 0, 0);
            assert_eq!(ymd_his(&end_of_month(Some(&reference))), "2021-02-28 23:59:59");
        });
    }

    #[test]
    fn month_bounds_for_thirty_one_day_month() {
        with_location(TimeZone::UTC, || {
            let reference = zoned(2020, 1, 15, 8, 0, 0);
            assert_eq!(ymd_his(&end_of_month(Some(&reference))), "2020-01-31 23:59:59");
        });
    }

    #[test]
    fn end_of_month_is_one_second_before_next_month() {
        with_location(TimeZone::UTC, || {
            for reference in [
                zoned(2020, 2, 10, 8, 0, 0),
                zoned(2021, 2, 10, 8, 0, 0),
                zoned(2020, 4, 1, 0, 0, 0),
                zoned(2020, 12, 31, 23, 59, 59),
            ] {
                let end = end_of_month(Some(&reference));
                let next_start = start_of_month(Some(&tomorrow(Some(&end))));

                assert_eq!(end.year(), reference.year());
                assert_eq!(end.month(), reference.month());
                assert_eq!(
                    &end + Span::new().seconds(1),
                    next_start,
                    "reference: {reference}"
                );
            }
        });
    }

    #[test]
    fn year_bounds() {
        with_location(TimeZone::UTC, || {
            let reference = zoned(2020, 6, 15, 12, 0, 0);
            assert_eq!(ymd_his(&start_of_year(Some(&reference))), "2020-01-01 00:00:00");
            assert_eq!(ymd_his(&end_of_year(Some(&reference))), "2020-12-31 23:59:59");
        });
    }

    #[test]
    fn boundary_is_materialized_in_active_location() {
        let fixed = TimeZone::fixed(tz::offset(8));
        with_location(fixed.clone(), || {
            // The reference carries UTC; its calendar date drives the result,
            // which lands in the active location.
            let reference = zoned(2020, 6, 15, 13, 0, 0);
            let start = start_of_day(Some(&reference));

            assert_eq!(start.time_zone(), &fixed);
            assert_eq!(ymd_his(&start), "2020-06-15 00:00:00");
        });
    }

    #[test]
    fn boundaries_do_not_mutate_the_reference() {
        with_location(TimeZone::UTC, || {
            let reference = zoned(2020, 6, 15, 13, 45, 59);
            let before = reference.clone();
            let _ = start_of_week(Some(&reference));
            let _ = end_of_month(Some(&reference));
            assert_eq!(reference, before);
        });
    }
}
