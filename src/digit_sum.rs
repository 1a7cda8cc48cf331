
//! Repeated digit-sum reduction of an encoded number.
//!
//! Summing the digit values of a rendering and re-encoding the
//! result, over and over, eventually reaches a single digit (the
//! generalization of the casting-out-nines digital root). The chain
//! of intermediate values is returned for display.

use crate::decode::DecodeError;
use crate::encode::encode;
use crate::radix::Radix;

use itertools::Itertools;
use num::{BigInt, Zero};

use std::fmt::{self, Display, Formatter};

/// One step of the reduction: a digit-value sum and its rendering in
/// the radix it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSumStep {
  pub value: BigInt,
  pub rendered: String,
}

/// The whole reduction chain for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSumChain {
  /// Whether the input carried a leading `-`. The sign is carried
  /// textually and does not participate in the sums.
  pub negative: bool,
  pub steps: Vec<DigitSumStep>,
}

/// Reduces `text` by repeated digit-value summation in the given
/// radix. Stops at a single-symbol rendering, or as soon as the sum
/// stops changing. Summing systems stop after one step, since their
/// digit values already add up to the number itself.
pub fn digit_sum(text: &str, radix: &Radix) -> Result<DigitSumChain, DecodeError> {
  let negative = text.starts_with('-');
  let mut current = text.strip_prefix('-').unwrap_or(text).to_string();
  let mut steps: Vec<DigitSumStep> = Vec::new();
  loop {
    let value = symbol_value_sum(&current, radix)?;
    if steps.last().is_some_and(|last| last.value == value) {
      break;
    }
    let rendered = encode(&value, radix);
    let single = symbol_count(&rendered, radix) <= 1;
    steps.push(DigitSumStep { value, rendered: rendered.clone() });
    if single {
      break;
    }
    current = rendered;
  }
  Ok(DigitSumChain { negative, steps })
}

fn symbol_value_sum(text: &str, radix: &Radix) -> Result<BigInt, DecodeError> {
  let mut sum = BigInt::zero();
  let mut rest = text;
  while !rest.is_empty() {
    if radix.system().is_summing() {
      if let Some(stripped) = rest.strip_prefix(crate::alphabet::ELLIPSIS) {
        rest = stripped;
        continue;
      }
    }
    let Some((idx, len)) = radix.match_symbol_prefix(rest) else {
      return Err(DecodeError::unrecognized(rest, radix));
    };
    sum += radix.digit_value(idx);
    rest = &rest[len..];
  }
  Ok(sum)
}

fn symbol_count(text: &str, radix: &Radix) -> usize {
  let mut count = 0;
  let mut rest = text;
  while !rest.is_empty() {
    let advance = match radix.match_symbol_prefix(rest) {
      Some((_, len)) => len,
      // Anything else (the truncation marker, a stray sign) counts
      // as one character.
      None => rest.chars().next().map_or(1, char::len_utf8),
    };
    count += 1;
    rest = &rest[advance..];
  }
  count
}

impl Display for DigitSumChain {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "∑=")?;
    if self.negative {
      write!(f, "-")?;
    }
    let rendered = self.steps.iter()
      .map(|step| format!("{}({})", step.rendered, step.value))
      .join("=");
    write!(f, "{rendered}")
  }
}
