use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

use crate::constants::ROLLING_WINDOW_HOURS;
use crate::error::UsageError;
use crate::validation::validate_month;

/// The query window for one calendar day of a monthly breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub day: u32,
    pub start_ms: i64,
    pub end_ms: i64,
}

/// Fixed 24-hour lookback ending at `now`.
///
/// Plain duration subtraction; no calendar adjustment is involved.
pub fn rolling_window(now: DateTime<Utc>) -> (i64, i64) {
    let start = now - Duration::hours(ROLLING_WINDOW_HOURS);
    (start.timestamp_millis(), now.timestamp_millis())
}

/// One query window per calendar day of the given month, in the given
/// zone, ordered by day ascending.
///
/// Each window runs from local midnight to 23:59:59.999 of the same day,
/// so a daily-granularity source attributes every record to exactly one
/// day. The zone is an explicit parameter; nothing here reads ambient
/// locale state.
pub fn month_windows<Tz: TimeZone>(
    zone: &Tz,
    year: i32,
    month: u32,
) -> Result<Vec<DayWindow>, UsageError> {
    validate_month(month)?;
    let days = days_in_month(year, month).ok_or(UsageError::InvalidArgument {
        field: "year",
        reason: format!("no calendar for {year}-{month:02}"),
    })?;

    let mut windows = Vec::new();
    for day in 1..=days {
        let start = zone
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .earliest()
            .ok_or_else(|| no_local_time(year, month, day))?;
        let end = zone
            .with_ymd_and_hms(year, month, day, 23, 59, 59)
            .latest()
            .ok_or_else(|| no_local_time(year, month, day))?
            + Duration::milliseconds(999);
        windows.push(DayWindow {
            day,
            start_ms: start.timestamp_millis(),
            end_ms: end.timestamp_millis(),
        });
    }
    Ok(windows)
}

/// Number of days in the given month, or `None` outside the supported
/// calendar range. Leap-year aware.
fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_month_first.pred_opt()?.day())
}

fn no_local_time(year: i32, month: u32, day: u32) -> UsageError {
    UsageError::InvalidArgument {
        field: "month",
        reason: format!("no valid local time on {year}-{month:02}-{day:02}"),
    }
}
