// src/source/mod.rs
//
// Capability traits for everything the OS supplies: the usage-accounting
// service, the installed-package list, and per-package metadata. The
// aggregation core and bridge only ever see these traits, so the whole
// pipeline runs unchanged against test fixtures.

use crate::error::UsageError;
use crate::models::{AppCategory, RawUsageRecord};

/// Resolved display metadata for an installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub label: String,
    pub category: AppCategory,
}

/// The OS usage-accounting service.
///
/// Granularity and duplicate-reporting behavior are opaque: the same
/// package may appear in several overlapping records for one query.
pub trait ObservationSource: Send + Sync {
    /// Raw records for the interval `[start_ms, end_ms]`.
    fn query(&self, start_ms: i64, end_ms: i64) -> Result<Vec<RawUsageRecord>, UsageError>;

    /// Whether usage-access permission is currently granted.
    fn permission_granted(&self) -> bool;
}

/// Enumerates the packages that should appear in the rolling summary,
/// whether or not they reported any usage.
pub trait InstalledPackages: Send + Sync {
    fn list(&self) -> Vec<String>;
}

/// Per-package display metadata.
///
/// `None` means the package cannot be resolved (uninstalled mid-query,
/// broken manifest); the caller skips that entry and continues.
pub trait PackageMetadata: Send + Sync {
    fn lookup(&self, package_id: &str) -> Option<AppInfo>;
}

/// Source stub for builds without an OS usage-accounting service.
pub struct UnsupportedSource;

impl ObservationSource for UnsupportedSource {
    fn query(&self, _start_ms: i64, _end_ms: i64) -> Result<Vec<RawUsageRecord>, UsageError> {
        Err(UsageError::SourceUnavailable {
            reason: "usage stats are not available on this platform".into(),
        })
    }

    fn permission_granted(&self) -> bool {
        false
    }
}

/// Package-list stub for builds without a package manager.
pub struct NoInstalledPackages;

impl InstalledPackages for NoInstalledPackages {
    fn list(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Metadata stub for builds without a package manager.
pub struct NoPackageMetadata;

impl PackageMetadata for NoPackageMetadata {
    fn lookup(&self, _package_id: &str) -> Option<AppInfo> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_source_fails_queries() {
        let result = UnsupportedSource.query(0, 1_000);
        assert!(matches!(result, Err(UsageError::SourceUnavailable { .. })));
        assert!(!UnsupportedSource.permission_granted());
    }

    #[test]
    fn test_stub_capabilities_are_empty() {
        assert!(NoInstalledPackages.list().is_empty());
        assert!(NoPackageMetadata.lookup("com.example.a").is_none());
    }
}
