
//! Digit-level navigation: appending and removing the least
//! significant digit of a value, as seen through a radix's encoding.

use crate::decode::decode;
use crate::encode::encode_parts;
use crate::radix::Radix;
use crate::system::NumeralSystem;

use num::{BigInt, One, Signed, Zero};
use thiserror::Error;

/// Error type for the shift operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShiftError {
  /// Bijective radixes have no zero digit to append, and sum radixes
  /// are not positional, so shifting is rejected rather than
  /// silently ignored.
  #[error("Digit shifting is not defined for {system} radixes")]
  Unsupported { system: NumeralSystem },
}

/// Appends an implicit zero digit: `value * base`.
pub fn shift_left(value: &BigInt, radix: &Radix) -> Result<BigInt, ShiftError> {
  check_shiftable(radix)?;
  Ok(value * radix.base())
}

/// Appends the smallest nonzero digit instead of zero, letting a
/// number grow one digit at a time starting from nothing: zero
/// becomes one, and nonzero values gain a trailing unit digit of
/// their own sign. Meaningful for every system, bijective included.
pub fn filling_shift_left(value: &BigInt, radix: &Radix) -> BigInt {
  if value.is_zero() {
    BigInt::one()
  } else if value.is_positive() {
    value * radix.base() + 1u32
  } else {
    value * radix.base() - 1u32
  }
}

/// Drops the least significant digit. Deliberately round-trips
/// through the encoded form: which symbol counts as the last digit
/// is the encoder's call, and it differs between systems.
pub fn shift_right(value: &BigInt, radix: &Radix) -> Result<BigInt, ShiftError> {
  check_shiftable(radix)?;
  let (negative, mut parts) = encode_parts(value, radix);
  parts.pop();
  let mut text = String::new();
  if negative {
    text.push('-');
  }
  for part in parts {
    text.push_str(part);
  }
  // expect: every remaining symbol came from the radix's own table
  Ok(decode(&text, radix).expect("own encoding must decode"))
}

fn check_shiftable(radix: &Radix) -> Result<(), ShiftError> {
  match radix.system() {
    NumeralSystem::Bijective | NumeralSystem::Sum => {
      Err(ShiftError::Unsupported { system: radix.system() })
    }
    _ => Ok(()),
  }
}
