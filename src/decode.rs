
//! Parsing digit strings back into arbitrary-precision integers.

use crate::alphabet::ELLIPSIS;
use crate::radix::Radix;
use crate::system::NumeralSystem;

use num::{BigInt, Zero};
use thiserror::Error;

/// Error type for [`decode`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
  #[error("Non-base character encountered: {symbol:?}. Allowed characters are {allowed:?}")]
  UnrecognizedSymbol { symbol: String, allowed: String },
  #[error("The zero placeholder {symbol:?} is only valid as a complete zero. Allowed characters are {allowed:?}")]
  ZeroPlaceholder { symbol: String, allowed: String },
}

impl DecodeError {
  pub(crate) fn unrecognized(rest: &str, radix: &Radix) -> Self {
    let symbol = rest.chars().next().map(String::from).unwrap_or_default();
    DecodeError::UnrecognizedSymbol {
      symbol,
      allowed: radix.allowed_characters(),
    }
  }

  pub(crate) fn zero_placeholder(radix: &Radix) -> Self {
    DecodeError::ZeroPlaceholder {
      symbol: radix.symbols()[0].clone(),
      allowed: radix.allowed_characters(),
    }
  }
}

/// Parses a digit string in the given radix.
///
/// A leading `-` negates the result in every system, even the
/// balanced family where the encoder never produces one, so that
/// user-typed negative numbers survive a round trip through any
/// radix. Positional systems fold by `acc * base + digit`; summing
/// systems fold by addition and skip the truncation marker.
pub fn decode(text: &str, radix: &Radix) -> Result<BigInt, DecodeError> {
  // The zero symbol might also be a valid leading character of a
  // longer number in a pathological alphabet, so the exact match is
  // checked before any parsing.
  if text == radix.zero_symbol() {
    return Ok(BigInt::zero());
  }
  let (negative, digits) = match text.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, text),
  };
  let summing = radix.system().is_summing();
  let mut acc = BigInt::zero();
  let mut rest = digits;
  while !rest.is_empty() {
    if summing {
      if let Some(stripped) = rest.strip_prefix(ELLIPSIS) {
        rest = stripped;
        continue;
      }
    }
    let Some((idx, len)) = radix.match_symbol_prefix(rest) else {
      return Err(DecodeError::unrecognized(rest, radix));
    };
    if radix.system() == NumeralSystem::Bijective && idx == 0 {
      return Err(DecodeError::zero_placeholder(radix));
    }
    if summing {
      acc += radix.digit_value(idx);
    } else {
      acc = acc * radix.base() + radix.digit_value(idx);
    }
    rest = &rest[len..];
  }
  Ok(if negative { -acc } else { acc })
}
