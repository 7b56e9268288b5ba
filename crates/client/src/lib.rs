//! # Roomly Client
//!
//! The client crate talks to the room-booking REST backend. It owns the
//! session (HTTP client, configuration, CSRF token) and exposes one typed
//! async function per backend operation.
//!
//! ## Architecture
//!
//! - **Config**: environment-driven settings for base URL, API root,
//!   CSRF cookie and request timeout
//! - **Session**: the per-page-load context that replaces the browser
//!   client's module-level globals
//! - **Api**: typed operations over the rooms and bookings endpoints,
//!   returning `ApiResult` so the auth, HTTP and parse failure branches
//!   stay an explicit sum type
//!
//! Booking submissions are validated by `roomly-core` before any request
//! is sent; the server remains authoritative for every rule.

/// Typed operations over the backend endpoints
pub mod api;
/// Client configuration loaded from the environment
pub mod config;
/// Request session and CSRF handling
pub mod session;

pub use config::ClientConfig;
pub use session::Session;
