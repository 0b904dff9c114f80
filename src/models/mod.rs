//! Data models for the toolbox
//!
//! This module contains the small domain types shared by the formulas and the
//! host-facing registry:
//! - Location: Geographic coordinates
//! - Value: Scalars exchanged with the scripting host

pub mod location;
pub mod value;

// Re-export all public types for convenient access
pub use location::Coordinates;
pub use value::Value;
