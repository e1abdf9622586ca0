//! Local calendar date lookup from a canonical timezone name.

use time::{Date, OffsetDateTime};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// The current calendar date in the given canonical timezone.
///
/// This is how callers obtain the reference date for
/// [parse](crate::parse): the date resolver itself never reads the clock.
///
/// # Errors
///
/// Returns [Error::InvalidTimezone] when `canonical_timezone` is not a
/// valid canonical timezone string such as `"Asia/Taipei"`.
pub fn local_date(canonical_timezone: &str) -> Result<Date, Error> {
    let timezone = time_tz::timezones::get_by_name(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))?;

    let now = OffsetDateTime::now_utc();
    let offset = timezone.get_offset_utc(&now).to_utc();

    Ok(now.to_offset(offset).date())
}

#[cfg(test)]
mod timezone_tests {
    use super::local_date;
    use crate::Error;

    #[test]
    fn canonical_timezone_resolves_to_a_date() {
        assert!(local_date("Asia/Taipei").is_ok());
        assert!(local_date("Pacific/Auckland").is_ok());
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        assert_eq!(
            local_date("Not/AZone"),
            Err(Error::InvalidTimezone("Not/AZone".to_owned()))
        );
    }
}
