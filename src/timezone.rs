//! Resolves canonical timezone names to UTC offsets.

use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Looks up the UTC offset in effect at `instant` for a canonical timezone
/// name, e.g. "Pacific/Auckland".
///
/// Returns [None] if the name is not a known canonical timezone.
pub fn local_offset(canonical_timezone: &str, instant: OffsetDateTime) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|timezone| timezone.get_offset_utc(&instant).to_utc())
}
