use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("invalid key `{value}`")]
    InvalidKey {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),

    #[error("cannot read input file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shift {shift} moves `{ch}` outside the alphabet")]
    OutOfAlphabet { ch: char, shift: i32 },

    #[error("cannot write to stdout")]
    Stdout(#[source] std::io::Error),
}
