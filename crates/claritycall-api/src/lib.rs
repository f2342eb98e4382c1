//! # claritycall-api
//!
//! Typed REST/JSON transport for the claritycall backend. A single
//! [`ApiClient`] carries the session cookie jar; each sub-module adds the
//! calls for one resource (slots, bookings, mentors, notifications, chat,
//! auth). Route names live here and nowhere else; callers work purely in
//! terms of logical operations.

pub mod auth;
pub mod bookings;
pub mod chat;
pub mod client;
pub mod config;
pub mod mentors;
pub mod notifications;
pub mod slots;

mod error;

pub use bookings::{ConfirmBookingRequest, NewBookingRequest};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use slots::NewSlot;
