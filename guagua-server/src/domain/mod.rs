//! Domain types for the bus stop bot.
//!
//! This module contains the core types that represent validated transit
//! data. All types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod line;
mod stop_id;
mod urgency;

pub use line::BusLine;
pub use stop_id::{InvalidStopId, StopId};
pub use urgency::Urgency;
