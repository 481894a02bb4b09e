//! # genesis-runtime
//!
//! Prepares the genesis state a node launches from.
//!
//! ## Startup Sequence
//!
//! 1. Read configuration from the environment
//! 2. Initialize logging
//! 3. Load the genesis document, or wrap the default state into a fresh one
//! 4. Collect bootstrap transactions from the gentx directory
//! 5. Assemble, validate, normalize accounts
//! 6. Optionally write the assembled document back to disk
//!
//! Any failure aborts with a non-zero exit code.

pub mod config;
pub mod error;
pub mod files;
pub mod logging;
pub mod pipeline;

pub use config::RuntimeConfig;
pub use error::RuntimeError;
pub use pipeline::{prepare_genesis, PreparedGenesis};
