use std::collections::HashMap;

use crate::constants::MS_PER_MINUTE;
use crate::models::UsageObservation;

/// Convert a foreground duration to whole minutes (truncating division).
/// Never negative.
pub fn minutes_from_ms(ms: i64) -> i64 {
    if ms <= 0 {
        0
    } else {
        ms / MS_PER_MINUTE
    }
}

/// Collapse observations into one minute total per package.
///
/// Merge policy is last-value-wins per package: when the source reports
/// a package across overlapping sub-windows, the most recently processed
/// record determines the value. Observations are never summed.
// TODO: confirm with product whether overlapping records should sum
// instead of overwrite; last-wins loses usage when the source splits a
// package across sub-windows.
pub fn aggregate_by_package(observations: &[UsageObservation]) -> HashMap<String, i64> {
    let mut minutes_by_package = HashMap::new();
    for observation in observations {
        minutes_by_package.insert(
            observation.package_id.clone(),
            minutes_from_ms(observation.foreground_ms),
        );
    }
    minutes_by_package
}

/// Minutes for a single package under the last-wins merge policy.
///
/// No matching observation means zero recorded usage, never an error.
pub fn single_package_minutes(observations: &[UsageObservation], package_id: &str) -> i64 {
    observations
        .iter()
        .rev()
        .find(|observation| observation.package_id == package_id)
        .map_or(0, |observation| minutes_from_ms(observation.foreground_ms))
}
