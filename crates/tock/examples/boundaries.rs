// Copyright (c) Microsoft Corporation.

//! This example demonstrates the calendar boundary functions.

use jiff::tz::TimeZone;

fn main() {
    // Express everything in UTC; the system zone is the default.
    tock::set_location(TimeZone::UTC);

    let now = tock::now();
    println!("now:            {}", tock::ymd_his(&now));

    // Day-relative accessors.
    println!("today:          {}", tock::ymd_his(&tock::today()));
    println!("tomorrow:       {}", tock::ymd_his(&tock::tomorrow(None)));
    println!("yesterday:      {}", tock::ymd_his(&tock::yesterday(None)));

    // Boundaries of the periods containing `now`. Passing `None` instead of
    // `Some(&now)` computes the same thing relative to the current instant.
    println!("start of day:   {}", tock::ymd_his(&tock::start_of_day(Some(&now))));
    println!("end of day:     {}", tock::ymd_his(&tock::end_of_day(Some(&now))));
    println!("start of week:  {}", tock::ymd_his(&tock::start_of_week(Some(&now))));
    println!("end of week:    {}", tock::ymd_his(&tock::end_of_week(Some(&now))));
    println!("start of month: {}", tock::ymd_his(&tock::start_of_month(Some(&now))));
    println!("end of month:   {}", tock::ymd_his(&tock::end_of_month(Some(&now))));
    println!("start of year:  {}", tock::ymd_his(&tock::start_of_year(Some(&now))));
    println!("end of year:    {}", tock::ymd_his(&tock::end_of_year(Some(&now))));
}
