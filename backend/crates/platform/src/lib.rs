//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, adaptive work factor)
//! - Cookie management
//! - Small cryptographic utilities (random bytes, Base64)

pub mod cookie;
pub mod crypto;
pub mod password;
