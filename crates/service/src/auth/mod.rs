//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Login verifies argon2 password hashes stored on `users.password` and issues
//! HS256 session tokens; session validation resolves a token back to a user.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::{hash_password, AuthConfig, AuthService};
