//! # Journal Infrastructure
//!
//! Concrete implementations of the ports defined in `journal-core`.
//! This crate contains the repositories and authentication services.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory repositories only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::DatabaseConnections;
pub use database::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresUserRepository};
