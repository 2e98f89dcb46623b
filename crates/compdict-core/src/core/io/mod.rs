//! Reading chemical-component definition formats.
//!
//! This module turns definition text into a populated
//! [`ComponentDictionary`](crate::core::models::dictionary::ComponentDictionary).
//! It owns all grammar and field-mapping logic; the data model only consumes
//! the resulting dictionary.

pub mod cif;
pub mod traits;
