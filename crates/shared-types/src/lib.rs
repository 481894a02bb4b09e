//! # Shared Types Crate
//!
//! Primitives shared by every accounting module and by the genesis pipeline.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: addresses and coin sets are defined once here
//!   so that module sub-states compare and serialize identically.
//! - **Canonical Form**: balance sets have one canonical ordering (ascending
//!   denomination) so equality and hashing downstream are deterministic.

pub mod amount;
pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
