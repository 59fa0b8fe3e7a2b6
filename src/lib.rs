pub mod bridge;
mod commands;
pub mod constants;
pub mod error;
pub mod models;
pub mod source;
#[cfg(test)]
mod test_utils;
pub mod usage;
pub mod validation;

use tauri::Manager;

use crate::bridge::UsageBridge;
use crate::source::{NoInstalledPackages, NoPackageMetadata, UnsupportedSource};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Desktop builds have no usage-accounting service; a mobile
            // platform layer swaps real capabilities in here.
            let bridge = UsageBridge::new(
                Box::new(UnsupportedSource),
                Box::new(NoInstalledPackages),
                Box::new(NoPackageMetadata),
            );
            app.manage(bridge);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_usage,
            commands::get_app_state,
            commands::is_usage_permission_granted,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
