//! Shared types, errors, and configuration for rxerp.
//!
//! This crate provides common types used across all other crates:
//! - Typed integer IDs for type-safe entity references
//! - Application-wide error types
//! - Session context and role gating
//! - Configuration management

pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
pub use session::{AccessPolicy, Role, SessionContext};
