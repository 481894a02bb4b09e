//! # Integration Flows
//!
//! Full pipeline runs: genesis document and bootstrap batch through the
//! assembler, then the assembled container through the validator.

pub mod end_to_end;
