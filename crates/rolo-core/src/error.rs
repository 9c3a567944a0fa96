//! Error types for `rolo-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("name must not be empty")]
  EmptyName,

  #[error("phone must contain 7 to 15 digits: {0:?}")]
  InvalidPhone(String),

  #[error("malformed email address: {0:?}")]
  InvalidEmail(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
