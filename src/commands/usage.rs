use tauri::State;

use crate::bridge::UsageBridge;

use super::{AppUsageResponse, DailyUsageResponse};

#[tauri::command]
pub fn get_app_usage(bridge: State<UsageBridge>) -> Result<Vec<AppUsageResponse>, String> {
    let entries = bridge.app_usage().map_err(|e| {
        log::error!("failed to build app usage summary: {e}");
        String::from(e)
    })?;
    Ok(entries.into_iter().map(AppUsageResponse::from).collect())
}

#[tauri::command]
pub fn get_app_state(
    bridge: State<UsageBridge>,
    package_id: String,
    month: u32,
) -> Result<Vec<DailyUsageResponse>, String> {
    let daily = bridge.app_state(&package_id, month).map_err(|e| {
        log::error!("failed to build monthly summary for {package_id}: {e}");
        String::from(e)
    })?;
    Ok(daily.into_iter().map(DailyUsageResponse::from).collect())
}

#[tauri::command]
pub fn is_usage_permission_granted(bridge: State<UsageBridge>) -> bool {
    bridge.permission_granted()
}
