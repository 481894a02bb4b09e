//! # genesis-modules
//!
//! Genesis contracts of the ledger's accounting modules.
//!
//! ## Role in System
//!
//! Every accounting module owns exactly two things at genesis time:
//!
//! - a `GenesisState` sub-state, embedded in the application state document
//! - a `validate_genesis` function that checks that sub-state in isolation
//!
//! The genesis pipeline treats sub-states as opaque and only ever calls
//! `validate_genesis`. Errors come back as the module's own error enum, and
//! [`ModuleError`] collects them without rewording so callers can match the
//! concrete kind.
//!
//! ## Modules
//!
//! | Module | Sub-state |
//! |--------|-----------|
//! | `auth` | transaction and signature limits |
//! | `bank` | send switch |
//! | `distribution` | fee pool, community tax, proposer rewards |
//! | `mint` | minter and inflation parameters |
//! | `staking` | staking parameters, validators, delegations, pool |
//! | `supply` | total supply |
//! | `slashing` | liveness and double-sign penalties |
//! | `gov` | deposit, voting and tally parameters |
//! | `bandwidth` | bandwidth metering and pricing |
//! | `rank` | reputation ranking parameters |
//! | `crisis` | invariant-check constant fee |
//! | `wasm` | contract code and instances |

pub mod auth;
pub mod bandwidth;
pub mod bank;
pub mod crisis;
pub mod distribution;
pub mod error;
pub mod gov;
pub mod mint;
pub mod rank;
pub mod ratio;
pub mod slashing;
pub mod staking;
pub mod supply;
pub mod wasm;

pub use error::ModuleError;
