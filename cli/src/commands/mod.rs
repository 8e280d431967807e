//! Command implementations

pub mod args;
pub mod bundle;
pub mod check;
pub mod env;
pub mod version;
