//! # Core Models Module
//!
//! Data structures representing chemical components and the dictionary that
//! indexes them.
//!
//! ## Key Components
//!
//! - [`category`] - Residue and polymer category enums derived from the raw
//!   textual component type
//! - [`component`] - The chemical-component record, its builder, and the empty
//!   sentinel record
//! - [`dictionary`] - The id-keyed index with replacement and parent queries

pub mod category;
pub mod component;
pub mod dictionary;
