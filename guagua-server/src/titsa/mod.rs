//! TITSA stop info client.
//!
//! This module talks to the endpoint behind the arrival boards on
//! titsa.com, which answers with live waiting times for one stop.
//!
//! Key characteristics of the endpoint:
//! - It never 404s for unknown stops; it answers with an empty
//!   `parada` section instead. An empty description means "no such
//!   stop".
//! - Text fields arrive with a Latin-1/UTF-8 double encoding that
//!   needs repair before display.
//! - Field types are loose; numbers show up both bare and quoted.

mod client;
mod convert;
mod error;
mod types;

pub use client::{StopQuery, TitsaApi, TitsaConfig};
pub use convert::{ConversionError, stop_description, stop_lines};
pub use error::TitsaError;
pub use types::{LineEntry, StopInfoResponse, StopSection, TextOrNumber};
