//! Shared test utilities for the screen-time bridge.
//!
//! This module provides fixture capability implementations used across
//! test modules.

#![cfg(test)]

use crate::error::UsageError;
use crate::models::{AppCategory, RawUsageRecord};
use crate::source::{AppInfo, InstalledPackages, ObservationSource, PackageMetadata};

/// Build a raw record covering `[start_ms, end_ms]` with the given
/// foreground duration.
pub fn raw(package_id: &str, start_ms: i64, end_ms: i64, foreground_ms: i64) -> RawUsageRecord {
    RawUsageRecord {
        package_id: package_id.to_string(),
        window_start_ms: start_ms,
        window_end_ms: end_ms,
        foreground_ms,
    }
}

/// Source that replays fixed records, filtered to the queried range the
/// way the OS service filters by interval overlap.
pub struct FixedSource {
    pub records: Vec<RawUsageRecord>,
    pub permission: bool,
}

impl FixedSource {
    pub fn new(records: Vec<RawUsageRecord>) -> Self {
        Self {
            records,
            permission: true,
        }
    }
}

impl ObservationSource for FixedSource {
    fn query(&self, start_ms: i64, end_ms: i64) -> Result<Vec<RawUsageRecord>, UsageError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.window_start_ms <= end_ms && r.window_end_ms >= start_ms)
            .cloned()
            .collect())
    }

    fn permission_granted(&self) -> bool {
        self.permission
    }
}

/// Source that fails every query, as when usage permission is revoked.
pub struct RevokedSource;

impl ObservationSource for RevokedSource {
    fn query(&self, _start_ms: i64, _end_ms: i64) -> Result<Vec<RawUsageRecord>, UsageError> {
        Err(UsageError::SourceUnavailable {
            reason: "usage permission revoked".into(),
        })
    }

    fn permission_granted(&self) -> bool {
        false
    }
}

/// Installed-package list fixture.
pub struct FixedPackages(pub Vec<String>);

impl InstalledPackages for FixedPackages {
    fn list(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Metadata fixture that labels every package after its id.
pub struct EchoMetadata;

impl PackageMetadata for EchoMetadata {
    fn lookup(&self, package_id: &str) -> Option<AppInfo> {
        Some(AppInfo {
            label: package_id.to_string(),
            category: AppCategory::Other,
        })
    }
}

/// Metadata fixture that only resolves the listed package ids.
pub struct PartialMetadata(pub Vec<String>);

impl PackageMetadata for PartialMetadata {
    fn lookup(&self, package_id: &str) -> Option<AppInfo> {
        self.0.iter().any(|p| p == package_id).then(|| AppInfo {
            label: package_id.to_string(),
            category: AppCategory::Productivity,
        })
    }
}
