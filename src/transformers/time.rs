//! Timestamp, date and age conversions
//!
//! Conversions that depend on a time zone are generic over
//! [`chrono::TimeZone`]; the CLI passes [`chrono::Local`].

use std::fmt;

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{Result, ToolError};

/// Values above this are taken to be milliseconds already
pub const MILLIS_THRESHOLD: i64 = 100_000_000_000;

const UTC_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const LOCAL_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Renderings of a single instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampReport {
    pub millis: i64,
    pub utc: String,
    pub local: String,
    /// `YYYY-MM-DDTHH:MM` in UTC, suitable for feeding back into [`date_to_timestamp`]
    pub datetime_local: String,
}

impl fmt::Display for TimestampReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "UTC:   {}", self.utc)?;
        writeln!(f, "Local: {}", self.local)?;
        write!(f, "ISO:   {}", self.datetime_local)
    }
}

/// Interpret `text` as seconds or milliseconds since the epoch
pub fn timestamp_to_date<Tz>(text: &str, tz: &Tz) -> Result<TimestampReport>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let invalid = || ToolError::InvalidTimestamp(text.trim().to_string());
    let value: i64 = text.trim().parse().map_err(|_| invalid())?;
    let millis = if value > MILLIS_THRESHOLD {
        value
    } else {
        value.checked_mul(1000).ok_or_else(invalid)?
    };
    let instant: DateTime<Utc> = DateTime::from_timestamp_millis(millis).ok_or_else(invalid)?;

    Ok(TimestampReport {
        millis,
        utc: instant.format(UTC_FORMAT).to_string(),
        local: instant.with_timezone(tz).format(LOCAL_FORMAT).to_string(),
        datetime_local: instant.format(DATETIME_LOCAL_FORMAT).to_string(),
    })
}

fn parse_naive_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Seconds since the epoch for a wall-clock time in `tz`, floored
pub fn date_to_timestamp<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<i64> {
    let trimmed = text.trim();
    let naive = parse_naive_datetime(trimmed)
        .ok_or_else(|| ToolError::InvalidDate(format!("'{}' is not YYYY-MM-DDTHH:MM", trimmed)))?;
    let instant = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| ToolError::InvalidDate(format!("'{}' does not exist in this time zone", trimmed)))?;
    Ok(instant.timestamp())
}

/// Calendar difference between a birth date and a later day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years, {} months, {} days", self.years, self.months, self.days)
    }
}

/// Age on `today` of someone born on `birth`.
///
/// Whole months are counted from `birth` itself, so a month-end birthday
/// lands on the last day of shorter months. The remaining days are counted
/// from that anniversary.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Result<Age> {
    if birth > today {
        return Err(ToolError::InvalidDate("birth date is in the future".into()));
    }

    let anniversary = |months: u32| birth.checked_add_months(Months::new(months));
    let mut months = ((today.year() - birth.year()) * 12 + today.month() as i32 - birth.month() as i32) as u32;
    let mut anchor = anniversary(months).ok_or_else(|| ToolError::InvalidDate("date out of range".into()))?;
    while anchor > today {
        months -= 1;
        anchor = anniversary(months).ok_or_else(|| ToolError::InvalidDate("date out of range".into()))?;
    }

    Ok(Age {
        years: (months / 12) as i32,
        months: (months % 12) as i32,
        days: (today - anchor).num_days() as i32,
    })
}

/// Parse a `YYYY-MM-DD` birth date and compute the age on `today`
pub fn age(text: &str, today: NaiveDate) -> Result<Age> {
    let trimmed = text.trim();
    let birth = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|e| ToolError::InvalidDate(format!("'{}': {}", trimmed, e)))?;
    age_on(birth, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_timestamp_seconds() {
        let report = timestamp_to_date("1791979200", &Utc).unwrap();
        assert_eq!(report.millis, 1_791_979_200_000);
        assert_eq!(report.utc, "Wed, 14 Oct 2026 12:00:00 GMT");
        assert_eq!(report.local, "10/14/2026, 12:00:00 PM");
        assert_eq!(report.datetime_local, "2026-10-14T12:00");
    }

    #[test]
    fn test_timestamp_millis_heuristic() {
        let report = timestamp_to_date("1791979200000", &Utc).unwrap();
        assert_eq!(report.utc, "Wed, 14 Oct 2026 12:00:00 GMT");
        // exactly at the threshold still counts as seconds
        let at = timestamp_to_date("100000000000", &Utc).unwrap();
        assert_eq!(at.millis, 100_000_000_000_000);
    }

    #[test]
    fn test_timestamp_local_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let report = timestamp_to_date("1000000000", &tz).unwrap();
        assert_eq!(report.local, "9/9/2001, 3:46:40 AM");
        assert_eq!(report.datetime_local, "2001-09-09T01:46");
    }

    #[test]
    fn test_timestamp_invalid() {
        assert!(matches!(timestamp_to_date("soon", &Utc), Err(ToolError::InvalidTimestamp(_))));
        assert!(matches!(
            timestamp_to_date(&i64::MAX.to_string(), &Utc),
            Err(ToolError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_date_to_timestamp() {
        assert_eq!(date_to_timestamp("2026-10-14T12:00", &Utc).unwrap(), 1_791_979_200);
        assert_eq!(date_to_timestamp("2026-10-14", &Utc).unwrap(), 1_791_936_000);
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(date_to_timestamp("2026-10-14T14:00", &tz).unwrap(), 1_791_979_200);
    }

    #[test]
    fn test_date_round_trip() {
        let report = timestamp_to_date("1791979200", &Utc).unwrap();
        assert_eq!(date_to_timestamp(&report.datetime_local, &Utc).unwrap(), 1_791_979_200);
    }

    #[test]
    fn test_date_to_timestamp_invalid() {
        assert!(matches!(date_to_timestamp("14/10/2026", &Utc), Err(ToolError::InvalidDate(_))));
    }

    #[test]
    fn test_age() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let age = age("1990-12-20", today).unwrap();
        assert_eq!(age, Age { years: 35, months: 9, days: 24 });
        assert_eq!(age.to_string(), "35 years, 9 months, 24 days");
    }

    #[test]
    fn test_age_birthday_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        assert_eq!(age("2000-10-14", today).unwrap(), Age { years: 26, months: 0, days: 0 });
    }

    #[test]
    fn test_age_future_birth_rejected() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        assert!(matches!(age("2030-01-01", today), Err(ToolError::InvalidDate(_))));
        assert!(matches!(age("not a date", today), Err(ToolError::InvalidDate(_))));
    }

    #[test]
    fn test_age_month_end_birthday() {
        // no March 31st anniversary yet, and February has no 31st
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(age("2000-01-31", today).unwrap(), Age { years: 26, months: 1, days: 1 });

        let today = NaiveDate::from_ymd_opt(2026, 3, 30).unwrap();
        assert_eq!(age("2000-01-31", today).unwrap(), Age { years: 26, months: 1, days: 30 });

        let today = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        assert_eq!(age("2000-01-31", today).unwrap(), Age { years: 26, months: 2, days: 0 });
    }

    #[test]
    fn test_age_leap_day_birth() {
        let today = NaiveDate::from_ymd_opt(2027, 2, 28).unwrap();
        assert_eq!(age("2000-02-29", today).unwrap(), Age { years: 27, months: 0, days: 0 });

        let today = NaiveDate::from_ymd_opt(2027, 2, 27).unwrap();
        assert_eq!(age("2000-02-29", today).unwrap(), Age { years: 26, months: 11, days: 29 });

        let today = NaiveDate::from_ymd_opt(2028, 2, 29).unwrap();
        assert_eq!(age("2000-02-29", today).unwrap(), Age { years: 28, months: 0, days: 0 });
    }

    #[test]
    fn test_age_days_never_negative() {
        let birth = NaiveDate::from_ymd_opt(1999, 8, 31).unwrap();
        let mut today = birth;
        for _ in 0..800 {
            let age = age_on(birth, today).unwrap();
            assert!((0..31).contains(&age.days), "{} -> {:?}", today, age);
            assert!((0..12).contains(&age.months));
            today = today.succ_opt().unwrap();
        }
    }
}
