//! Static classification tables and helpers shared across the crate.

pub mod monomers;
