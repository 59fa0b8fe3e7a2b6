mod category;
mod observation;
mod summary;

pub use category::AppCategory;
pub use observation::{sanitize_records, RawUsageRecord, SkipReason, UsageObservation};
pub use summary::{AppUsageSummary, DailyUsageSummary};
