//! Resolving IANA timezone names to UTC offsets.

use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Get the UTC offset currently in effect for `canonical_timezone`, an IANA
/// timezone name such as "Pacific/Auckland".
///
/// Returns `None` if `canonical_timezone` is not a recognised timezone name.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}
