use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};

use crate::error::UsageError;
use crate::models::{sanitize_records, AppUsageSummary, DailyUsageSummary};
use crate::source::ObservationSource;

use super::aggregate::{aggregate_by_package, single_package_minutes};
use super::window::{month_windows, rolling_window};

/// Per-app totals over the 24-hour window ending at `now`.
///
/// The result is keyed off the installed-package universe: exactly one
/// entry per installed package (zero minutes when nothing was reported),
/// sorted by package id so enumeration is deterministic across calls.
/// Packages the source reports but that are no longer installed are
/// treated as stale and dropped.
pub fn build_app_usage_summary<S>(
    now: DateTime<Utc>,
    installed: &[String],
    source: &S,
) -> Result<Vec<AppUsageSummary>, UsageError>
where
    S: ObservationSource + ?Sized,
{
    let (start_ms, end_ms) = rolling_window(now);
    let raw = source.query(start_ms, end_ms)?;
    let (observations, skipped) = sanitize_records(raw);
    if skipped > 0 {
        log::warn!("skipped {skipped} malformed records in rolling window");
    }
    let minutes_by_package = aggregate_by_package(&observations);

    let universe: BTreeSet<&str> = installed.iter().map(String::as_str).collect();
    Ok(universe
        .into_iter()
        .map(|package_id| AppUsageSummary {
            package_id: package_id.to_string(),
            foreground_minutes: minutes_by_package.get(package_id).copied().unwrap_or(0),
        })
        .collect())
}

/// Day-by-day usage of one package across a calendar month.
///
/// Issues one sequential source query per day window so each day's
/// result is attributed independently, even when the source's native
/// granularity is daily. Days without a matching observation report
/// zero; only an unavailable source or an invalid month fails.
pub fn build_monthly_summary<Tz, S>(
    zone: &Tz,
    package_id: &str,
    year: i32,
    month: u32,
    source: &S,
) -> Result<Vec<DailyUsageSummary>, UsageError>
where
    Tz: TimeZone,
    S: ObservationSource + ?Sized,
{
    let windows = month_windows(zone, year, month)?;
    let mut daily = Vec::with_capacity(windows.len());
    for window in windows {
        let raw = source.query(window.start_ms, window.end_ms)?;
        let (observations, skipped) = sanitize_records(raw);
        if skipped > 0 {
            log::debug!("skipped {skipped} malformed records on day {}", window.day);
        }
        daily.push(DailyUsageSummary {
            day: window.day,
            foreground_minutes: single_package_minutes(&observations, package_id),
        });
    }
    Ok(daily)
}
