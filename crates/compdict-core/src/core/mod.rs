//! # Core Module
//!
//! Fundamental building blocks for chemical-component resolution: the record
//! model and its derived classification, the dictionary index over records, the
//! standard-monomer tables, and the definition-file reader.
//!
//! ## Architecture
//!
//! - **Component Representation** ([`models`]) - Records, category enums, and
//!   the dictionary with its replacement and parent resolution protocol
//! - **Definition I/O** ([`io`]) - Reading CIF chemical-component definitions
//!   into a dictionary
//! - **Classification Tables** ([`utils`]) - Static tables of the canonical
//!   biological monomers backing the standard/non-standard derivation

pub mod io;
pub mod models;
pub mod utils;
