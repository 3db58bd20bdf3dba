//! Shared type definitions for the Weary activity scheduling harness.
//!
//! This crate is the single source of truth for the small vocabulary shared
//! between the agent model and the scheduling core.
//!
//! # Modules
//!
//! - [`ids`] -- String identifiers for activities and item types
//! - [`enums`] -- The exertion scale ([`ActivityLevel`])
//! - [`structs`] -- The serializable weariness transition record

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::ActivityLevel;
pub use ids::{ActivityId, ItemTypeId};
pub use structs::WearyTransition;
