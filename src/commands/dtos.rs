// src/commands/dtos.rs

use serde::Serialize;

use crate::bridge::AppUsageEntry;
use crate::models::DailyUsageSummary;

#[derive(Serialize)]
pub struct AppUsageResponse {
    pub app_name: String,
    pub package_id: String,
    pub category: &'static str,
    pub foreground_minutes: i64,
}

impl From<AppUsageEntry> for AppUsageResponse {
    fn from(entry: AppUsageEntry) -> Self {
        Self {
            app_name: entry.app_name,
            package_id: entry.package_id,
            category: entry.category.display_name(),
            foreground_minutes: entry.foreground_minutes,
        }
    }
}

#[derive(Serialize)]
pub struct DailyUsageResponse {
    pub day: u32,
    pub foreground_minutes: i64,
}

impl From<DailyUsageSummary> for DailyUsageResponse {
    fn from(daily: DailyUsageSummary) -> Self {
        Self {
            day: daily.day,
            foreground_minutes: daily.foreground_minutes,
        }
    }
}
