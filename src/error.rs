use std::path::PathBuf;

use thiserror::Error;

/// The corpus bytes cannot be turned into text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    #[error("corpus is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("corpus looks like binary data (NUL byte at offset {offset})")]
    Binary { offset: usize },
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("no corpus text was supplied")]
    MissingCorpus,

    #[error("failed to read corpus {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Corpus(#[from] CorpusError),
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("chain grew past {limit} words without reaching the end of a sentence")]
    LengthExceeded { limit: usize },
}
