//! Loading corpus text from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CorpusError, InputError};

/// Checks that `bytes` can be used as corpus text.
///
/// - Must be valid UTF-8
/// - Must not contain NUL bytes, which only show up in binary data
pub fn corpus_text(bytes: &[u8]) -> Result<&str, CorpusError> {
    if let Some(offset) = bytes.iter().position(|b| *b == 0) {
        return Err(CorpusError::Binary { offset });
    }

    std::str::from_utf8(bytes).map_err(|e| CorpusError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

/// Reads a whole corpus file into memory.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String, InputError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read corpus");

    Ok(corpus_text(&bytes)?.to_string())
}
