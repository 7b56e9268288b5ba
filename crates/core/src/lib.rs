//! # Roomly Core
//!
//! Domain types and business rules for the roomly booking client.
//!
//! This crate is pure and synchronous: it knows nothing about HTTP or the
//! calendar widget. It provides the booking data model, the time-window
//! validator applied before a booking is submitted, and the normalizer that
//! projects raw booking records onto renderable calendar events. The clock
//! is always an explicit argument so every rule stays testable.

/// Calendar event projection and record normalization
pub mod calendar;
/// Error taxonomy shared by the client and its callers
pub mod errors;
/// Wire-level data model for rooms and bookings
pub mod models;
/// Booking time-window validation rules
pub mod validate;
