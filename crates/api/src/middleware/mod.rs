//! Request middleware.

pub mod auth;

pub use auth::{AuthSession, session_middleware};
