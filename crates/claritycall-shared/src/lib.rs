//! # claritycall-shared
//!
//! Domain types shared between the API transport and the client state
//! layer: slot/booking records as they appear on the wire, the split
//! civil-time codec used by slot forms, and the error types both sides
//! convert from.

pub mod constants;
pub mod time;
pub mod types;

mod error;

pub use error::TimeError;
pub use time::{Meridiem, SplitTime};
pub use types::*;
