
//! The immutable definition of a single numeral system: its base,
//! system kind, and digit table.

use crate::alphabet::{BAL27_ALPHABET, BASE27_ALPHABET, BIJ26_ALPHABET, DEFAULT_ALPHABET, SUM_ALPHABET};
use crate::system::NumeralSystem;

use itertools::Itertools;
use num::{BigInt, Zero};
use num::pow::Pow;
use thiserror::Error;

use std::cmp::Reverse;

/// A digit alphabet supplied to [`Radix::with_alphabet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alphabet {
  /// A centered reference alphabet. The constructor slices the digit
  /// window the system needs out of the middle, so the alphabet must
  /// have a well-defined center symbol (odd length) and enough
  /// symbols on each side of it.
  Full(Vec<String>),
  /// Exactly the symbols the system requires, already trimmed. This
  /// is the path persistence must take when reconstructing a stored
  /// radix, since stored alphabets are saved post-slicing.
  Exact(Vec<String>),
}

/// An immutable descriptor of one numeral system. Constructed once,
/// never mutated; every codec operation takes one by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radix {
  name: String,
  system: NumeralSystem,
  base: u32,
  chars: Vec<String>,
  zero_at: usize,
  low: i64,
  high: i64,
  enabled: bool,
  /// Place values for the sum system's greedy encoder, largest
  /// first. Explicitly sorted so encoding order never depends on
  /// anything incidental. Empty for every other system.
  places: Vec<(BigInt, usize)>,
  /// Symbol indices ordered by descending symbol length, so prefix
  /// matching always takes the longest symbol it can.
  match_order: Vec<usize>,
}

/// Error type for [`Radix`] construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
  #[error("{system} radix out of range: {base}")]
  BaseOutOfRange { system: NumeralSystem, base: u32 },
  #[error("{system} radix must be odd: {base}")]
  BaseMustBeOdd { system: NumeralSystem, base: u32 },
  #[error("{system} radix must be even: {base}")]
  BaseMustBeEven { system: NumeralSystem, base: u32 },
  #[error("{system} radix {base} expects {required} symbols, got {len}")]
  AlphabetTooSmall { system: NumeralSystem, base: u32, required: usize, len: usize },
  #[error("reference alphabet has no center symbol: {len} symbols")]
  NoCenterSymbol { len: usize },
}

impl Radix {
  /// Constructs a radix over the built-in default alphabet.
  pub fn new(base: u32, system: NumeralSystem) -> Result<Self, ConfigError> {
    check_base(base, system)?;
    let chars = default_window(base, system)?;
    Ok(Self::from_parts(base, system, chars))
  }

  /// Constructs a radix over a caller-supplied alphabet.
  pub fn with_alphabet(base: u32, system: NumeralSystem, alphabet: Alphabet) -> Result<Self, ConfigError> {
    check_base(base, system)?;
    let chars = match alphabet {
      Alphabet::Full(symbols) => slice_window(base, system, &symbols)?,
      Alphabet::Exact(symbols) => {
        check_exact(base, system, &symbols)?;
        symbols
      }
    };
    Ok(Self::from_parts(base, system, chars))
  }

  /// Replaces the display name, keeping everything else.
  pub fn named(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  /// Replaces the display-layer enabled flag, keeping everything
  /// else. The flag has no effect on codec behavior.
  pub fn with_enabled(mut self, enabled: bool) -> Self {
    self.enabled = enabled;
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn system(&self) -> NumeralSystem {
    self.system
  }

  pub fn base(&self) -> u32 {
    self.base
  }

  /// The digit symbols, in table order.
  pub fn symbols(&self) -> &[String] {
    &self.chars
  }

  /// The symbol that encodes zero. For bijective systems this is the
  /// placeholder symbol, valid only as a complete zero-valued string.
  pub fn zero_symbol(&self) -> &str {
    &self.chars[self.zero_at]
  }

  /// Index of the zero symbol in the digit table.
  pub fn zero_at(&self) -> usize {
    self.zero_at
  }

  /// Smallest single-digit value. For sum and balsum radixes this is
  /// the bound of one multiplier cycle; the weighted place values
  /// live in the place table.
  pub fn low(&self) -> i64 {
    self.low
  }

  /// Largest single-digit value, with the same caveat as [`Radix::low`].
  pub fn high(&self) -> i64 {
    self.high
  }

  pub fn is_enabled(&self) -> bool {
    self.enabled
  }

  /// The user-facing listing of characters accepted by the decoder,
  /// as used in decode error messages. Skips the bijective
  /// placeholder and includes `-` only for sign-prefix systems.
  pub fn allowed_characters(&self) -> String {
    let digits = if self.system == NumeralSystem::Bijective {
      &self.chars[1..]
    } else {
      &self.chars[..]
    };
    let joined = digits.iter().join("");
    if self.system.uses_sign_prefix() {
      format!("-{joined}")
    } else {
      joined
    }
  }

  /// The signed value of the digit symbol at `idx` in the table. For
  /// summing systems this is the full weighted place value.
  pub fn digit_value(&self, idx: usize) -> BigInt {
    match self.system {
      NumeralSystem::Standard | NumeralSystem::Bijective => BigInt::from(idx),
      NumeralSystem::Balanced | NumeralSystem::Clock => BigInt::from(idx as i64 - self.zero_at as i64),
      NumeralSystem::Sum => {
        if idx == 0 {
          BigInt::zero()
        } else {
          sum_place_value(self.base, idx)
        }
      }
      NumeralSystem::Balsum => {
        let offset = idx as i64 - self.zero_at as i64;
        if offset == 0 {
          BigInt::zero()
        } else {
          let value = balsum_place_value(self.base, offset.unsigned_abs() as usize);
          if offset < 0 { -value } else { value }
        }
      }
    }
  }

  /// The sum system's place table, largest value first.
  pub(crate) fn places(&self) -> &[(BigInt, usize)] {
    &self.places
  }

  /// Index of the balsum symbol worth `d * base^k`, if the table
  /// reaches that far. `d` is a nonzero balanced digit.
  pub(crate) fn balsum_symbol_index(&self, d: i64, k: usize) -> Option<usize> {
    debug_assert!(d != 0);
    let half = ((self.base - 1) / 2) as usize;
    let j = k * half + d.unsigned_abs() as usize;
    if d > 0 {
      let idx = self.zero_at + j;
      (idx < self.chars.len()).then_some(idx)
    } else {
      (j <= self.zero_at).then(|| self.zero_at - j)
    }
  }

  /// Matches the longest digit symbol that is a prefix of `s`,
  /// returning its table index and byte length.
  pub(crate) fn match_symbol_prefix(&self, s: &str) -> Option<(usize, usize)> {
    for &idx in &self.match_order {
      let sym = &self.chars[idx];
      if s.starts_with(sym.as_str()) {
        return Some((idx, sym.len()));
      }
    }
    None
  }

  fn from_parts(base: u32, system: NumeralSystem, chars: Vec<String>) -> Self {
    let (zero_at, low, high) = digit_bounds(base, system, chars.len());
    let places = match system {
      NumeralSystem::Sum => {
        let mut places: Vec<_> = (1..chars.len())
          .map(|j| (sum_place_value(base, j), j))
          .collect();
        places.sort_by(|a, b| b.cmp(a));
        places
      }
      _ => Vec::new(),
    };
    let mut match_order: Vec<usize> = (0..chars.len()).collect();
    match_order.sort_by_key(|&i| Reverse(chars[i].len()));
    Radix {
      name: system.default_name(base),
      system,
      base,
      chars,
      zero_at,
      low,
      high,
      enabled: system.default_enabled(base),
      places,
      match_order,
    }
  }
}

/// Constructs the default working set: every base from 2 to 36, as
/// standard, bijective (up to 35), balanced (odd bases) and clock
/// (even bases) radixes, with the conventional bases enabled.
pub fn default_radixes() -> Vec<Radix> {
  let mut radixes = Vec::new();
  for base in 2..=36 {
    // expect: every (base, system) pair pushed here is valid over
    // the default alphabet.
    radixes.push(Radix::new(base, NumeralSystem::Standard).expect("Radix out of bounds"));
    if base <= 35 {
      radixes.push(Radix::new(base, NumeralSystem::Bijective).expect("Radix out of bounds"));
    }
    if base % 2 == 1 {
      radixes.push(Radix::new(base, NumeralSystem::Balanced).expect("Radix out of bounds"));
    } else if base >= 4 {
      radixes.push(Radix::new(base, NumeralSystem::Clock).expect("Radix out of bounds"));
    }
  }
  radixes
}

/// Like [`default_radixes`], but sliced from a caller-supplied
/// reference alphabet instead of the built-in one.
pub fn default_radixes_with(alphabet: &[String]) -> Result<Vec<Radix>, ConfigError> {
  let mut radixes = Vec::new();
  for base in 2..=36 {
    let full = || Alphabet::Full(alphabet.to_vec());
    radixes.push(Radix::with_alphabet(base, NumeralSystem::Standard, full())?);
    if base <= 35 {
      radixes.push(Radix::with_alphabet(base, NumeralSystem::Bijective, full())?);
    }
    if base % 2 == 1 {
      radixes.push(Radix::with_alphabet(base, NumeralSystem::Balanced, full())?);
    } else if base >= 4 {
      radixes.push(Radix::with_alphabet(base, NumeralSystem::Clock, full())?);
    }
  }
  Ok(radixes)
}

fn check_base(base: u32, system: NumeralSystem) -> Result<(), ConfigError> {
  if base < system.min_base() || base > system.max_base() {
    return Err(ConfigError::BaseOutOfRange { system, base });
  }
  if system.requires_odd_base() && base % 2 == 0 {
    return Err(ConfigError::BaseMustBeOdd { system, base });
  }
  if system.requires_even_base() && base % 2 == 1 {
    return Err(ConfigError::BaseMustBeEven { system, base });
  }
  Ok(())
}

/// The default digit window for `(base, system)`. A few conventional
/// combinations have their own alphabets; everything else is sliced
/// out of the reference alphabet.
fn default_window(base: u32, system: NumeralSystem) -> Result<Vec<String>, ConfigError> {
  match (system, base) {
    (NumeralSystem::Standard, 27) => Ok(BASE27_ALPHABET.clone()),
    (NumeralSystem::Bijective, 26) => Ok(BIJ26_ALPHABET.clone()),
    (NumeralSystem::Balanced, 27) => Ok(BAL27_ALPHABET.clone()),
    (NumeralSystem::Sum, _) => {
      // The sum alphabet is a fixed 27 symbols, so large bases can
      // fall below the minimum of one symbol per digit value.
      let chars = SUM_ALPHABET.clone();
      check_exact(base, system, &chars)?;
      Ok(chars)
    }
    _ => slice_window(base, system, &DEFAULT_ALPHABET),
  }
}

fn slice_window(base: u32, system: NumeralSystem, alphabet: &[String]) -> Result<Vec<String>, ConfigError> {
  let len = alphabet.len();
  if len % 2 == 0 {
    return Err(ConfigError::NoCenterSymbol { len });
  }
  let center = len / 2;
  let base_us = base as usize;
  let too_small = |required: usize| ConfigError::AlphabetTooSmall { system, base, required, len };
  let (start, end) = match system {
    NumeralSystem::Standard => (center, center + base_us),
    NumeralSystem::Bijective => (center, center + base_us + 1),
    NumeralSystem::Balanced => {
      let half = (base_us - 1) / 2;
      (center - half.min(center), center + half + 1)
    }
    NumeralSystem::Clock => {
      let half = base_us / 2;
      (center - (half - 1).min(center), center + half + 1)
    }
    NumeralSystem::Sum => (center, len),
    NumeralSystem::Balsum => (0, len),
  };
  let window = alphabet.get(start..end.min(len)).unwrap_or(&[]);
  let required = required_symbols(base, system);
  if end > len || window.len() < required {
    return Err(too_small(required));
  }
  Ok(window.to_vec())
}

fn check_exact(base: u32, system: NumeralSystem, symbols: &[String]) -> Result<(), ConfigError> {
  let required = required_symbols(base, system);
  let len = symbols.len();
  let exact_fit = match system {
    // Summing tables are open-ended: anything at least the minimum.
    NumeralSystem::Sum | NumeralSystem::Balsum => len >= required,
    _ => len == required,
  };
  if !exact_fit {
    return Err(ConfigError::AlphabetTooSmall { system, base, required, len });
  }
  if system == NumeralSystem::Balsum && len % 2 == 0 {
    return Err(ConfigError::NoCenterSymbol { len });
  }
  Ok(())
}

fn required_symbols(base: u32, system: NumeralSystem) -> usize {
  match system {
    NumeralSystem::Bijective => base as usize + 1,
    _ => base as usize,
  }
}

fn digit_bounds(base: u32, system: NumeralSystem, len: usize) -> (usize, i64, i64) {
  let base = base as i64;
  match system {
    NumeralSystem::Standard => (0, 0, base - 1),
    NumeralSystem::Bijective => (0, 1, base),
    NumeralSystem::Balanced | NumeralSystem::Balsum => {
      let half = (base - 1) / 2;
      ((len - 1) / 2, -half, half)
    }
    NumeralSystem::Clock => {
      let half = base / 2;
      (half as usize - 1, -half + 1, half)
    }
    NumeralSystem::Sum => (0, 1, base - 1),
  }
}

/// Value of the sum-system symbol at offset `j >= 1` past the zero
/// symbol: a bijective-style digit cycling every `base - 1` symbols,
/// with each completed cycle multiplying the place by `base`.
fn sum_place_value(base: u32, j: usize) -> BigInt {
  let cycle = (base - 1) as usize;
  let digit = (j - 1) % cycle + 1;
  let power = ((j - 1) / cycle) as u32;
  BigInt::from(digit) * BigInt::from(base).pow(power)
}

/// Value of the balsum symbol at offset `j >= 1` from the center, on
/// the positive side. The multiplier grows every `half` symbols.
/// With base 3 the cycle length is 1 and this degenerates to plain
/// powers of 3.
fn balsum_place_value(base: u32, j: usize) -> BigInt {
  let half = ((base - 1) / 2) as usize;
  let digit = (j - 1) % half + 1;
  let power = ((j - 1) / half) as u32;
  BigInt::from(digit) * BigInt::from(base).pow(power)
}
