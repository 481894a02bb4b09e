//! # Pipeline Properties
//!
//! Randomized checks of the account normalizer, the duplicate-address rule
//! and the bootstrap batch handling.

#[cfg(test)]
mod accounts;
#[cfg(test)]
mod assembly;
