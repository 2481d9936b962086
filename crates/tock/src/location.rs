// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::{PoisonError, RwLock};

use jiff::tz::TimeZone;

// The lock is not on a hot path: the location is written rarely (typically once
// at startup) and reads take a shared guard only long enough to clone a
// reference-counted handle. Replacing the stored value cannot leave it torn, so
// a poisoned lock is recovered rather than propagated.
static ACTIVE: RwLock<Option<TimeZone>> = RwLock::new(None);

/// Replaces the process-wide active location.
///
/// The active location determines the time zone in which [`now`][crate::now],
/// the boundary functions, and [`parse`][crate::parse] express their results.
/// The new value takes effect for all subsequent calls in every thread; calls
/// already in flight keep the location they resolved.
///
/// # Examples
///
/// ```
/// use jiff::tz::TimeZone;
///
/// tock::set_location(TimeZone::UTC);
/// assert_eq!(tock::location(), TimeZone::UTC);
/// ```
pub fn set_location(location: TimeZone) {
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = Some(location);
}

/// Returns the process-wide active location.
///
/// If [`set_location`] was never called, this is the system time zone. The
/// returned value is always usable: when the system zone cannot be determined,
/// jiff falls back to UTC.
///
/// Cloning a [`TimeZone`] is inexpensive (it is reference counted), so calling
/// this function repeatedly is cheap.
///
/// # Examples
///
/// ```
/// let location = tock::location();
/// let now = tock::now();
/// assert_eq!(now.time_zone(), &location);
/// ```
#[must_use]
pub fn location() -> TimeZone {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(TimeZone::system)
}

#[cfg(test)]
fn clear() {
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = None;
}
