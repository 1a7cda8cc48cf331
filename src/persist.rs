
//! The minimal serialized form of a radix definition, for stashing a
//! working set in a key-value store and rebuilding it later.

use crate::radix::{Alphabet, ConfigError, Radix};
use crate::system::NumeralSystem;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// The persisted shape of one radix: just enough to reconstruct the
/// definition. The alphabet is stored post-slicing, so restoring
/// takes it as exact rather than re-slicing a reference alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRadix {
  pub name: String,
  pub radix: u32,
  pub system: NumeralSystem,
  pub chars: Vec<String>,
  pub enabled: bool,
}

/// Error type for [`from_json`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PersistError {
  #[error("{0}")]
  Json(#[from] serde_json::Error),
  #[error("{0}")]
  Config(#[from] ConfigError),
}

impl From<&Radix> for StoredRadix {
  fn from(radix: &Radix) -> Self {
    StoredRadix {
      name: radix.name().to_string(),
      radix: radix.base(),
      system: radix.system(),
      chars: radix.symbols().to_vec(),
      enabled: radix.is_enabled(),
    }
  }
}

impl StoredRadix {
  /// Rebuilds the full definition this record was taken from.
  pub fn restore(&self) -> Result<Radix, ConfigError> {
    let radix = Radix::with_alphabet(self.radix, self.system, Alphabet::Exact(self.chars.clone()))?;
    Ok(radix.named(self.name.clone()).with_enabled(self.enabled))
  }
}

/// Serializes a working set to JSON.
pub fn to_json(radixes: &[Radix]) -> Result<String, PersistError> {
  let stored: Vec<StoredRadix> = radixes.iter().map(StoredRadix::from).collect();
  Ok(serde_json::to_string(&stored)?)
}

/// Rebuilds a working set from JSON produced by [`to_json`].
pub fn from_json(json: &str) -> Result<Vec<Radix>, PersistError> {
  let stored: Vec<StoredRadix> = serde_json::from_str(json)?;
  stored.iter()
    .map(|record| record.restore().map_err(PersistError::from))
    .collect()
}
