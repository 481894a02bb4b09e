//! # Ledger Genesis Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Documents, accounts and bootstrap txs
//! ├── integration/      # Document → assembler → validator flows
//! └── properties/       # proptest properties of the pipeline
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p genesis-tests
//!
//! # By category
//! cargo test -p genesis-tests integration::
//! cargo test -p genesis-tests properties::
//!
//! # Benchmarks
//! cargo bench -p genesis-tests
//! ```

pub mod fixtures;
pub mod integration;
pub mod properties;
