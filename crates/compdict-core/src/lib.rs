//! # Compdict Core Library
//!
//! A library for resolving identifiers of chemical building blocks (amino acids,
//! nucleotides, ligands, modified residues) referenced by macromolecular structure
//! files into fully described chemical-component records.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict direction of dependency,
//! keeping the data model testable in isolation from any definition source.
//!
//! - **[`core`]: The Foundation.** Contains the component record model
//!   ([`core::models::component::ChemComp`]) with its derived classification
//!   fields, the versioned dictionary answering replacement and parent queries
//!   ([`core::models::dictionary::ComponentDictionary`]), the standard-monomer
//!   classification tables, and the CIF definition reader.
//!
//! - **[`provider`]: The Public API.** The user-facing resolution layer. A
//!   [`provider::ComponentProvider`] turns an identifier string into a record,
//!   absorbing missing or unreadable definitions into a tagged sentinel result
//!   instead of raising errors.

pub mod core;
pub mod provider;
