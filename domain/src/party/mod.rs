//! Party domain
//!
//! The party record and the builder used to assemble it.

pub mod builder;
mod calendar_date;
mod clock_time;
pub mod entities;
mod scalar_text;

pub use builder::PartyBuilder;
pub use entities::Party;
