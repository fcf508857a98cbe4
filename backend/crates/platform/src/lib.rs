//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Cryptographic helpers (random bytes, SHA-256, avatar URLs)
//! - Environment configuration accessors

pub mod config;
pub mod crypto;
pub mod password;
