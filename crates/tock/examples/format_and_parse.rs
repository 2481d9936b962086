// Copyright (c) Microsoft Corporation.

//! This example demonstrates formatting and tolerant parsing.
//!
//! This includes:
//!
//! - The fixed `ymd_his` / `ymd` layouts
//! - Token patterns and native layouts in `format`
//! - Parsing from text, epoch seconds, and an existing instant

use jiff::tz::TimeZone;
use tock::TimeValue;

fn main() -> tock::Result<()> {
    tock::set_location(TimeZone::UTC);

    let now = tock::now();

    // Fixed layouts.
    println!("canonical: {}", tock::ymd_his(&now));
    println!("date only: {}", tock::ymd(&now));

    // Token patterns substitute runs of Y y m d H i s with calendar fields.
    println!("token:     {}", tock::format(&now, "Y-m-d H:i:s"));
    println!("verbose:   {}", tock::format(&now, "YYYY/mm/dd"));

    // A pattern without token characters is a native jiff layout.
    println!("native:    {}", tock::format(&now, "%B %e, %A"));

    // Parsing accepts several representations.
    let from_text = tock::parse(TimeValue::from("2020-01-01 00:00:01"))?;
    let from_epoch = tock::parse(TimeValue::from(1_577_836_801_i64))?;
    assert_eq!(from_text, from_epoch);
    println!("parsed:    {}", tock::ymd_his(&from_text));

    // Unsupported input is an explicit error, not a silent fallback.
    if let Err(err) = tock::parse(TimeValue::from(3.14)) {
        println!("rejected:  {err}");
    }

    Ok(())
}
