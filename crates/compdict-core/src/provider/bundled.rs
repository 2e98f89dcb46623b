use super::source::DefinitionSource;
use super::{ComponentProvider, FallbackReason, Resolved, normalize_identifier};
use crate::core::io::cif::{CifComponentFile, CifError};
use crate::core::io::traits::ComponentFormat;
use flate2::read::GzDecoder;
use std::io::{self, BufReader};
use thiserror::Error;
use tracing::{debug, warn};

/// Internal failure taxonomy for one resolution attempt. Never escapes
/// [`BundledProvider::resolve`]; it only feeds the log message and the
/// fallback reason.
#[derive(Debug, Error)]
enum ResolveFailure {
    #[error("reading definition stream failed: {0}")]
    Io(#[from] io::Error),
    #[error("parsing definition failed: {0}")]
    Parse(#[from] CifError),
}

/// Component provider backed by a fixed local subset of gzipped CIF
/// definitions, resolved through a [`DefinitionSource`].
///
/// Each call independently re-reads and re-parses its backing resource; there
/// is no caching, so callers wanting amortized cost must memoize externally.
/// Resolution is synchronous and local-resource-bound.
#[derive(Debug, Clone)]
pub struct BundledProvider<S> {
    source: S,
}

impl<S: DefinitionSource> BundledProvider<S> {
    pub fn new(source: S) -> Self {
        debug!("Initialising bundled component provider");
        Self { source }
    }

    fn resolve_definition(&self, id: &str) -> Result<Option<Resolved>, ResolveFailure> {
        let Some(stream) = self.source.open(id)? else {
            return Ok(None);
        };
        debug!("Reading definition for component {id}");
        let mut reader = BufReader::new(GzDecoder::new(stream));
        let dictionary = CifComponentFile::read_from(&mut reader)?;
        Ok(dictionary.get(id).cloned().map(Resolved::definition))
    }
}

impl<S: DefinitionSource> ComponentProvider for BundledProvider<S> {
    /// Resolves an identifier to a record, absorbing every failure mode.
    ///
    /// The identifier is trimmed and uppercased first. A missing definition
    /// falls back silently; an unreadable one is logged and falls back the
    /// same way, so callers always receive a valid (possibly empty) record.
    fn resolve(&self, identifier: &str) -> Resolved {
        let id = normalize_identifier(identifier);
        match self.resolve_definition(&id) {
            Ok(Some(resolved)) => resolved,
            Ok(None) => {
                debug!("No definition for component {id}, using the empty record");
                Resolved::fallback(id, FallbackReason::NotFound)
            }
            Err(failure) => {
                warn!("Problem loading definition for component {id}, using the empty record: {failure}");
                Resolved::fallback(id, FallbackReason::Unreadable)
            }
        }
    }
}
