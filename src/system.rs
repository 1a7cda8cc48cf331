
//! The kinds of positional numeral system supported by the codec.

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// A kind of numeral system. Together with a base, a system kind
/// determines the shape of the digit table and the encoding
/// algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
  /// Conventional positional notation with digits `0..base-1`.
  Standard,
  /// Digits `1..=base` and no zero digit; zero is representable only
  /// as the designated placeholder symbol standing alone.
  Bijective,
  /// Odd base, digits centered on zero, sign carried by digit choice.
  Balanced,
  /// Even base, balanced-like but with one more positive digit than
  /// negative, like the hours on a clock face.
  Clock,
  /// Digits name place values directly and the value of a string is
  /// the sum of its digits.
  Sum,
  /// Balanced digit range combined with sum-style decoding.
  Balsum,
}

impl NumeralSystem {
  /// Every system kind, in display order.
  pub const ALL: [NumeralSystem; 6] = [
    NumeralSystem::Standard,
    NumeralSystem::Bijective,
    NumeralSystem::Balanced,
    NumeralSystem::Clock,
    NumeralSystem::Sum,
    NumeralSystem::Balsum,
  ];

  /// The smallest base this system supports. A clock radix needs at
  /// least one negative digit, or negative numbers would have no
  /// representation at all, so its minimum is 4 rather than 2.
  pub fn min_base(self) -> u32 {
    match self {
      NumeralSystem::Clock => 4,
      _ => 2,
    }
  }

  /// The largest base this system supports. The standard and clock
  /// tables fit 36 digits in the reference alphabet; the others give
  /// one position up to the zero symbol.
  pub fn max_base(self) -> u32 {
    match self {
      NumeralSystem::Standard | NumeralSystem::Clock => 36,
      _ => 35,
    }
  }

  /// Whether negative numbers take a `-` prefix in this system.
  /// Balanced-family systems instead carry the sign in the digit
  /// symbols themselves.
  pub fn uses_sign_prefix(self) -> bool {
    matches!(
      self,
      NumeralSystem::Standard | NumeralSystem::Bijective | NumeralSystem::Sum,
    )
  }

  /// Whether strings in this system decode by summing digit values
  /// rather than by positional multiplication.
  pub fn is_summing(self) -> bool {
    matches!(self, NumeralSystem::Sum | NumeralSystem::Balsum)
  }

  /// Whether this system requires an odd base.
  pub fn requires_odd_base(self) -> bool {
    matches!(self, NumeralSystem::Balanced | NumeralSystem::Balsum)
  }

  /// Whether this system requires an even base.
  pub fn requires_even_base(self) -> bool {
    self == NumeralSystem::Clock
  }

  /// Prefix used when generating a default display name for a radix
  /// of this system.
  pub fn name_prefix(self) -> &'static str {
    match self {
      NumeralSystem::Standard => "",
      NumeralSystem::Bijective => "bij-",
      NumeralSystem::Balanced => "bal-",
      NumeralSystem::Clock => "clock-",
      NumeralSystem::Sum => "sum-",
      NumeralSystem::Balsum => "balsum-",
    }
  }

  /// The default display name for a radix of this system.
  pub fn default_name(self, base: u32) -> String {
    format!("{}{}", self.name_prefix(), base)
  }

  /// Whether a radix of this system starts out enabled in a default
  /// working set.
  pub fn default_enabled(self, base: u32) -> bool {
    match self {
      NumeralSystem::Standard => [2, 10, 12, 27].contains(&base),
      NumeralSystem::Bijective => base == 26,
      NumeralSystem::Balanced => [3, 19, 27].contains(&base),
      NumeralSystem::Clock => [4, 6, 8, 10, 12, 16, 18, 20, 22, 24, 30, 36].contains(&base),
      NumeralSystem::Sum | NumeralSystem::Balsum => false,
    }
  }
}

impl Display for NumeralSystem {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let name = match self {
      NumeralSystem::Standard => "standard",
      NumeralSystem::Bijective => "bijective",
      NumeralSystem::Balanced => "balanced",
      NumeralSystem::Clock => "clock",
      NumeralSystem::Sum => "sum",
      NumeralSystem::Balsum => "balsum",
    };
    write!(f, "{name}")
  }
}
