use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

/// Resource lookup interface consumed by providers.
///
/// Given an already-normalized identifier, a source either yields a byte
/// stream containing a compressed definition or reports absence. Absence is a
/// normal, expected outcome (unknown or obsolete component), not an error;
/// `Err` is reserved for genuine I/O failures while opening the stream.
pub trait DefinitionSource {
    type Reader: Read;

    fn open(&self, id: &str) -> io::Result<Option<Self::Reader>>;
}

/// Definition source backed by a directory of gzipped CIF files, one file per
/// component (`<dir>/<ID>.cif.gz`). This is the bundled-subset layout shipped
/// alongside an application for offline use.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn definition_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.cif.gz"))
    }
}

impl DefinitionSource for DirectorySource {
    type Reader = File;

    fn open(&self, id: &str) -> io::Result<Option<File>> {
        match File::open(self.definition_path(id)) {
            Ok(file) => Ok(Some(file)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Definition source holding gzipped definitions in memory, keyed by id.
///
/// Used by embedders that compile definitions into the binary and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    definitions: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a compressed definition under an id.
    pub fn insert(&mut self, id: impl Into<String>, compressed: Vec<u8>) {
        self.definitions.insert(id.into(), compressed);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl DefinitionSource for MemorySource {
    type Reader = Cursor<Vec<u8>>;

    fn open(&self, id: &str) -> io::Result<Option<Cursor<Vec<u8>>>> {
        Ok(self.definitions.get(id).cloned().map(Cursor::new))
    }
}
