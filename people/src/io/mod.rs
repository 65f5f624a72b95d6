//! I/O helpers for people commands.

pub mod announce;
pub mod config;
