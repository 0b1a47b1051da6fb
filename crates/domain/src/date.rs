use chrono::prelude::*;
use chrono_tz::Tz;

const MILLIS_PER_HOUR: f64 = 1000.0 * 60.0 * 60.0;

/// Wall clock reading in `tz` at the given instant.
///
/// The result carries no offset. Two civil values are compared field by
/// field, so a daylight saving transition between them does not move an
/// event off its clock hour.
pub fn civil_now(timestamp_millis: i64, tz: &Tz) -> Option<NaiveDateTime> {
    Utc.timestamp_millis_opt(timestamp_millis)
        .single()
        .map(|instant| instant.with_timezone(tz).naive_local())
}

/// Hours from `from` to `to`, both read as wall clock values in the same zone
pub fn civil_diff_hours(from: &NaiveDateTime, to: &NaiveDateTime) -> f64 {
    to.signed_duration_since(*from).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

// 09:05
pub fn format_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
