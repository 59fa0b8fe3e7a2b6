use chrono::{DateTime, Datelike, Local, Utc};

use crate::error::UsageError;
use crate::models::{AppCategory, DailyUsageSummary};
use crate::source::{InstalledPackages, ObservationSource, PackageMetadata};
use crate::usage::summary::{build_app_usage_summary, build_monthly_summary};
use crate::validation::validate_package_id;

/// One enriched rolling-summary entry, ready for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppUsageEntry {
    pub package_id: String,
    pub app_name: String,
    pub category: AppCategory,
    pub foreground_minutes: i64,
}

/// Answers the UI layer's usage queries over the platform capabilities.
///
/// Holds no mutable state; every query recomputes from scratch against
/// the supplied capabilities.
pub struct UsageBridge {
    source: Box<dyn ObservationSource>,
    packages: Box<dyn InstalledPackages>,
    metadata: Box<dyn PackageMetadata>,
}

impl UsageBridge {
    pub fn new(
        source: Box<dyn ObservationSource>,
        packages: Box<dyn InstalledPackages>,
        metadata: Box<dyn PackageMetadata>,
    ) -> Self {
        Self {
            source,
            packages,
            metadata,
        }
    }

    /// Per-app usage over the last 24 hours, one entry per installed
    /// package with resolvable metadata.
    pub fn app_usage(&self) -> Result<Vec<AppUsageEntry>, UsageError> {
        self.app_usage_at(Utc::now())
    }

    fn app_usage_at(&self, now: DateTime<Utc>) -> Result<Vec<AppUsageEntry>, UsageError> {
        let installed = self.packages.list();
        let summaries = build_app_usage_summary(now, &installed, self.source.as_ref())?;

        let mut entries = Vec::with_capacity(summaries.len());
        for summary in summaries {
            // A package that cannot be resolved must not sink the batch.
            let Some(info) = self.metadata.lookup(&summary.package_id) else {
                log::warn!("no metadata for {}, skipping", summary.package_id);
                continue;
            };
            entries.push(AppUsageEntry {
                package_id: summary.package_id,
                app_name: info.label,
                category: info.category,
                foreground_minutes: summary.foreground_minutes,
            });
        }
        Ok(entries)
    }

    /// Day-by-day usage of one package for a month of the current year,
    /// in the device's local zone.
    pub fn app_state(&self, package_id: &str, month: u32) -> Result<Vec<DailyUsageSummary>, UsageError> {
        self.monthly_usage(package_id, Local::now().year(), month)
    }

    /// Day-by-day usage of one package across the given month.
    pub fn monthly_usage(
        &self,
        package_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<DailyUsageSummary>, UsageError> {
        let package_id = validate_package_id(package_id)?;
        build_monthly_summary(&Local, package_id, year, month, self.source.as_ref())
    }

    /// Whether the usage-access permission is currently granted.
    pub fn permission_granted(&self) -> bool {
        self.source.permission_granted()
    }
}
