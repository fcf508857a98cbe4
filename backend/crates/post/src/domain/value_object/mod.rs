//! Value Object Module

pub mod text;
