use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// When an entry was watched: the instant for ordering, the calendar date for bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchTime {
    pub instant: DateTime<Utc>,
    pub date: NaiveDate,
}

/// Parse a logged watch timestamp.
///
/// RFC 3339 values land on the calendar date of their own offset, or of
/// `offset` when one is given. Naive date-times and plain `YYYY-MM-DD` dates
/// are taken as written (and ordered as if they were UTC). Anything else
/// returns `None`.
pub fn parse_watch_time(raw: &str, offset: Option<FixedOffset>) -> Option<WatchTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        let date = match offset {
            Some(offset) => timestamp.with_timezone(&offset).date_naive(),
            None => timestamp.date_naive(),
        };
        return Some(WatchTime {
            instant: timestamp.with_timezone(&Utc),
            date,
        });
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(WatchTime {
                instant: Utc.from_utc_datetime(&naive),
                date: naive.date(),
            });
        }
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(WatchTime {
        instant: Utc.from_utc_datetime(&midnight),
        date,
    })
}

/// `YYYY-MM` key used for monthly buckets
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}
