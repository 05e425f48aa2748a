// sitepatch/src/commands/mod.rs

pub mod check;
pub mod fmt;
pub mod patch;
pub mod restore;
