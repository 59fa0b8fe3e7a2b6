use serde::{Deserialize, Serialize};

/// One raw (package, interval, duration) record from the OS
/// usage-tracking service, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUsageRecord {
    pub package_id: String,
    pub window_start_ms: i64,
    pub window_end_ms: i64,
    pub foreground_ms: i64,
}

/// A validated usage record. Only these reach the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageObservation {
    pub package_id: String,
    pub window_start_ms: i64,
    pub window_end_ms: i64,
    pub foreground_ms: i64,
}

/// Why a raw record was dropped during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyPackageId,
    NegativeDuration,
    InvertedWindow,
}

impl RawUsageRecord {
    /// Validate a raw record into an observation the aggregator can trust.
    pub fn validate(self) -> Result<UsageObservation, SkipReason> {
        if self.package_id.trim().is_empty() {
            return Err(SkipReason::EmptyPackageId);
        }
        if self.foreground_ms < 0 {
            return Err(SkipReason::NegativeDuration);
        }
        if self.window_end_ms < self.window_start_ms {
            return Err(SkipReason::InvertedWindow);
        }
        Ok(UsageObservation {
            package_id: self.package_id,
            window_start_ms: self.window_start_ms,
            window_end_ms: self.window_end_ms,
            foreground_ms: self.foreground_ms,
        })
    }
}

/// Validate a batch of raw records, dropping malformed ones.
///
/// A single bad record must not sink the batch; the caller gets the
/// surviving observations plus a skip count for logging.
pub fn sanitize_records(records: Vec<RawUsageRecord>) -> (Vec<UsageObservation>, usize) {
    let mut observations = Vec::with_capacity(records.len());
    let mut skipped = 0;
    for record in records {
        match record.validate() {
            Ok(observation) => observations.push(observation),
            Err(reason) => {
                log::debug!("dropping malformed usage record: {reason:?}");
                skipped += 1;
            }
        }
    }
    (observations, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(package_id: &str, foreground_ms: i64) -> RawUsageRecord {
        RawUsageRecord {
            package_id: package_id.to_string(),
            window_start_ms: 1_000,
            window_end_ms: 2_000,
            foreground_ms,
        }
    }

    #[test]
    fn test_validate_well_formed_record() {
        let observation = record("com.example.app", 500).validate().unwrap();
        assert_eq!(observation.package_id, "com.example.app");
        assert_eq!(observation.foreground_ms, 500);
    }

    #[test]
    fn test_validate_rejects_empty_package_id() {
        assert_eq!(record("", 500).validate(), Err(SkipReason::EmptyPackageId));
        assert_eq!(record("  ", 500).validate(), Err(SkipReason::EmptyPackageId));
    }

    #[test]
    fn test_validate_rejects_negative_duration() {
        assert_eq!(record("com.example.app", -1).validate(), Err(SkipReason::NegativeDuration));
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let raw = RawUsageRecord {
            package_id: "com.example.app".to_string(),
            window_start_ms: 2_000,
            window_end_ms: 1_000,
            foreground_ms: 500,
        };
        assert_eq!(raw.validate(), Err(SkipReason::InvertedWindow));
    }

    #[test]
    fn test_sanitize_records_counts_skips() {
        let (observations, skipped) = sanitize_records(vec![
            record("com.example.a", 500),
            record("", 500),
            record("com.example.b", -5),
        ]);
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].package_id, "com.example.a");
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_sanitize_records_empty_input() {
        let (observations, skipped) = sanitize_records(Vec::new());
        assert!(observations.is_empty());
        assert_eq!(skipped, 0);
    }
}
