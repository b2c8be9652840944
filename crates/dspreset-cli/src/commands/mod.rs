//! CLI command implementations.

pub mod add;
pub mod check;
pub mod common;
pub mod list;
pub mod paths;
pub mod show;
pub mod types;
