//! # Provider Module
//!
//! The user-facing resolution layer: a [`ComponentProvider`] turns an
//! identifier string into a chemical-component record and never fails.
//!
//! Downstream structure-building code cannot do anything useful with a raised
//! error mid-build, so a provider absorbs both missing and unreadable
//! definitions into the empty sentinel record. The [`Resolved`] wrapper keeps
//! that ergonomic contract while still letting callers that care distinguish a
//! genuine definition from a degraded fallback.

pub mod bundled;
pub mod source;

use crate::core::models::component::ChemComp;

/// Why a resolution fell back to the sentinel record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No definition stream exists for the identifier; a normal, expected
    /// outcome for unknown or obsolete components.
    NotFound,
    /// A stream exists but decompression or parsing failed.
    Unreadable,
}

/// How a record was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The record was parsed from a real definition.
    Definition,
    /// The record is the empty sentinel, tagged with the requested id.
    Fallback(FallbackReason),
}

/// A resolution outcome: always a record, tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    record: ChemComp,
    resolution: Resolution,
}

impl Resolved {
    pub fn definition(record: ChemComp) -> Self {
        Self {
            record,
            resolution: Resolution::Definition,
        }
    }

    /// Builds the sentinel outcome for a normalized identifier.
    pub fn fallback(id: impl Into<String>, reason: FallbackReason) -> Self {
        Self {
            record: ChemComp::empty_with_id(id),
            resolution: Resolution::Fallback(reason),
        }
    }

    pub fn record(&self) -> &ChemComp {
        &self.record
    }

    pub fn into_record(self) -> ChemComp {
        self.record
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.resolution, Resolution::Fallback(_))
    }
}

/// Capability contract for component resolution.
///
/// `resolve` is case-insensitive and whitespace-trimming on the identifier and
/// never fails: every variant (bundled, or a future network-fetching one) must
/// return a record, falling back to the empty sentinel when its source cannot
/// supply a definition.
pub trait ComponentProvider {
    fn resolve(&self, identifier: &str) -> Resolved;
}

/// Canonical identifier form: trimmed and uppercased.
pub(crate) fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_uppercase()
}
