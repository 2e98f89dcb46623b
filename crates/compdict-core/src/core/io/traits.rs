use crate::core::models::dictionary::ComponentDictionary;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading chemical-component definition formats.
///
/// Implementors own all grammar and field-mapping logic for one textual
/// format and emit their results as a populated [`ComponentDictionary`].
/// A single definition stream may yield any number of records, though
/// per-component definition files typically hold exactly one.
pub trait ComponentFormat {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads component definitions from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns a dictionary holding every record found in the input.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<ComponentDictionary, Self::Error>;

    /// Reads component definitions from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Return
    ///
    /// Returns a dictionary holding every record found in the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<ComponentDictionary, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
