// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Zoned;
use jiff::fmt::strtime;

/// The canonical layout producing `"YYYY-MM-DD HH:MM:SS"`, in jiff's
/// [`strtime`] dialect.
///
/// [`parse`][crate::parse] accepts textual input in exactly this layout.
pub const LAYOUT_YMD_HIS: &str = "%Y-%m-%d %H:%M:%S";

/// The canonical layout producing `"YYYY-MM-DD"`, in jiff's [`strtime`]
/// dialect.
pub const LAYOUT_YMD: &str = "%Y-%m-%d";

/// Formats the instant as `"YYYY-MM-DD HH:MM:SS"`.
///
/// # Examples
///
/// ```
/// use jiff::civil::date;
/// use jiff::tz::TimeZone;
///
/// let instant = date(2020, 1, 2).at(3, 4, 5, 0).to_zoned(TimeZone::UTC)?;
/// assert_eq!(tock::ymd_his(&instant), "2020-01-02 03:04:05");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn ymd_his(instant: &Zoned) -> String {
    native(instant, LAYOUT_YMD_HIS)
}

/// Formats the instant as `"YYYY-MM-DD"`.
///
/// # Examples
///
/// ```
/// use jiff::civil::date;
/// use jiff::tz::TimeZone;
///
/// let instant = date(2020, 1, 2).at(3, 4, 5, 0).to_zoned(TimeZone::UTC)?;
/// assert_eq!(tock::ymd(&instant), "2020-01-02");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn ymd(instant: &Zoned) -> String {
    native(instant, LAYOUT_YMD)
}

/// Formats the instant according to `pattern`.
///
/// Two pattern dialects are supported:
///
/// 1. If `pattern` contains none of the token characters `Y y m d H i s`, it
///    is handed verbatim to jiff's [`strtime`] formatter and its layout rules
///    apply.
/// 2. Otherwise every maximal run of a token character is substituted with the
///    corresponding calendar field of the instant, and all other characters
///    are copied through:
///
///    | Token | Field             |
///    |-------|-------------------|
///    | `Y+`  | 4-digit year      |
///    | `y+`  | 2-digit year      |
///    | `m+`  | 2-digit month     |
///    | `d+`  | 2-digit day       |
///    | `H+`  | 2-digit hour      |
///    | `i+`  | 2-digit minute    |
///    | `s+`  | 2-digit second    |
///
/// Every occurrence of a run is substituted, so `"Y-m-d"` and
/// `"YYYY-mm-dd HH:ii:ss"` produce the same fields.
///
/// Because the token check takes precedence, a `strtime` directive spelled
/// with one of the token letters (such as `%Y`) never reaches the native
/// formatter; use the fixed helpers or token patterns for those fields.
/// Formatting is total: a native layout the formatter rejects is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use jiff::civil::date;
/// use jiff::tz::TimeZone;
///
/// let instant = date(2020, 1, 2).at(3, 4, 5, 0).to_zoned(TimeZone::UTC)?;
///
/// // Token patterns, with arbitrary run lengths.
/// assert_eq!(tock::format(&instant, "Y-m-d H:i:s"), "2020-01-02 03:04:05");
/// assert_eq!(tock::format(&instant, "YYYY/mm/dd"), "2020/01/02");
///
/// // No token characters: the pattern is native layout text.
/// assert_eq!(tock::format(&instant, "2006-01-02"), "2006-01-02");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn format(instant: &Zoned, pattern: &str) -> String {
    if !pattern.contains(is_token) {
        return native(instant, pattern);
    }

    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();
    while let Some(ch) = chars.next() {
        if !is_token(ch) {
            out.push(ch);
            continue;
        }
        // Consume the rest of this token run; the run length does not matter.
        while chars.peek() == Some(&ch) {
            let _ = chars.next();
        }
        out.push_str(&field(instant, ch));
    }
    out
}

const fn is_token(ch: char) -> bool {
    matches!(ch, 'Y' | 'y' | 'm' | 'd' | 'H' | 'i' | 's')
}

fn field(instant: &Zoned, token: char) -> String {
    match token {
        'Y' => format!("{:04}", instant.year()),
        'y' => format!("{:02}", instant.year().rem_euclid(100)),
        'm' => format!("{:02}", instant.month()),
        'd' => format!("{:02}", instant.day()),
        'H' => format!("{:02}", instant.hour()),
        'i' => format!("{:02}", instant.minute()),
        's' => format!("{:02}", instant.second()),
        _ => unreachable!("callers only pass token characters"),
    }
}

// Total by construction: a layout the native formatter cannot render comes
// back unchanged.
fn native(instant: &Zoned, layout: &str) -> String {
    strtime::format(layout, instant).unwrap_or_else(|_| layout.to_owned())
}
