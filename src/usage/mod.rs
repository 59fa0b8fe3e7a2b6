// src/usage/mod.rs
//
// Usage aggregation core: time windows, record aggregation, summary
// building. Platform-free; everything external arrives through the
// capability traits in `crate::source`.

pub mod aggregate;
pub mod summary;
pub mod window;
