// src/constants.rs

/// Milliseconds in one minute
pub const MS_PER_MINUTE: i64 = 60_000;

/// Hours covered by the rolling usage window
pub const ROLLING_WINDOW_HOURS: i64 = 24;

/// Maximum package identifier length
pub const MAX_PACKAGE_ID_LEN: usize = 255;
