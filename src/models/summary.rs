/// Total foreground usage for one package over the rolling window.
///
/// Computed fresh per request and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppUsageSummary {
    pub package_id: String,
    pub foreground_minutes: i64,
}

/// Foreground usage for one calendar day of a monthly breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyUsageSummary {
    pub day: u32,
    pub foreground_minutes: i64,
}
