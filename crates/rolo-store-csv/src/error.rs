//! Error type for `rolo-store-csv`.
//!
//! Parse variants carry the 1-based physical line the offending record
//! started on. A single bad record fails the whole load; rows are never
//! skipped or coerced.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("bad header line: expected {expected:?}, found {found:?}")]
  BadHeader { expected: &'static str, found: String },

  #[error("line {line}: contact id is not a positive integer: {value:?}")]
  InvalidId { line: usize, value: String },

  #[error("line {line}: expected 4 fields, found {found}")]
  WrongFieldCount { line: usize, found: usize },

  #[error("line {line}: unterminated quoted field")]
  UnterminatedQuote { line: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
