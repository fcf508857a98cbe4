//! Value Object Module

pub mod fields;
pub mod github_username;
