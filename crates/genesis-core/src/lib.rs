//! # genesis-core
//!
//! Builds and checks the initial ledger state of a new network.
//!
//! ## Pipeline
//!
//! ```text
//! GenesisDoc.app_state + bootstrap txs
//!         │
//!         ↓
//!   GenesisAssembler ── decode container, check every tx carries
//!         │             exactly one create-validator message
//!         ↓
//!   GenesisState ─────→ GenesisValidator ── unique addresses,
//!                             │             normalizable accounts,
//!                             ↓             every module's own rules
//!                        Ok | GenesisError
//! ```
//!
//! When no document is supplied, [`DefaultGenesisBuilder`] produces the
//! baseline container from [`GenesisParams`].
//!
//! Everything here is synchronous and free of I/O.

pub mod account;
pub mod assembler;
pub mod defaults;
pub mod document;
pub mod error;
pub mod registry;
pub mod state;
pub mod tx;
pub mod validation;

pub use account::{normalize, Account, AccountError, GenesisAccount};
pub use assembler::GenesisAssembler;
pub use defaults::{build_default, DefaultGenesisBuilder, GenesisParams, ParamsError};
pub use document::GenesisDoc;
pub use error::{ErrorKind, GenesisError};
pub use registry::{GenesisModule, ModuleRegistry};
pub use state::GenesisState;
pub use tx::{JsonTxDecoder, Msg, RawTx, StdTx, TxDecodeError, TxDecoder};
pub use validation::{validate_genesis_state, GenesisValidator};
