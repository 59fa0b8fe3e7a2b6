// src/commands/mod.rs
//
// Commands module - provides Tauri IPC command handlers for the usage
// queries exposed to the UI layer.

mod dtos;
pub mod usage;

pub use dtos::*;
pub use usage::*;
