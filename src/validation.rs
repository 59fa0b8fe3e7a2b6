use crate::constants::MAX_PACKAGE_ID_LEN;
use crate::error::UsageError;

/// Validate a calendar month number (1-12).
pub fn validate_month(month: u32) -> Result<(), UsageError> {
    if !(1..=12).contains(&month) {
        return Err(UsageError::InvalidArgument {
            field: "month",
            reason: format!("must be 1-12, got {month}"),
        });
    }
    Ok(())
}

/// Validate a package identifier.
/// Returns the trimmed identifier if valid.
pub fn validate_package_id(package_id: &str) -> Result<&str, UsageError> {
    let package_id = package_id.trim();
    if package_id.is_empty() {
        return Err(UsageError::InvalidArgument {
            field: "package_id",
            reason: "cannot be empty".into(),
        });
    }
    if package_id.len() > MAX_PACKAGE_ID_LEN {
        return Err(UsageError::InvalidArgument {
            field: "package_id",
            reason: format!("cannot exceed {MAX_PACKAGE_ID_LEN} characters"),
        });
    }
    Ok(package_id)
}
