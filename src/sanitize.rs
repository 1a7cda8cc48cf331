
//! Splitting pasted text into the characters a radix accepts and the
//! characters it rejects.

use crate::alphabet::ELLIPSIS;
use crate::radix::Radix;
use crate::util::regex_opt_with;

use either::Either;
use itertools::Itertools;

/// Result of [`sanitize`]: the input partitioned into accepted and
/// rejected characters, each side keeping its original relative
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SanitizedInput {
  pub accepted: String,
  pub rejected: String,
}

/// Uppercases `input` and partitions it against the radix's digit
/// table. A `-` is acceptable only in systems that use a sign
/// prefix, and the truncation marker only in summing systems.
///
/// Matching is done symbol-by-symbol with the longest alternative
/// first, so a multi-codepoint digit symbol is taken or rejected as
/// a unit instead of being torn apart codepoint by codepoint.
pub fn sanitize(input: &str, radix: &Radix) -> SanitizedInput {
  let input = input.to_uppercase();
  let mut allowed: Vec<&str> = radix.symbols().iter().map(|s| s.as_str()).collect();
  if radix.system().uses_sign_prefix() {
    allowed.push("-");
  }
  if radix.system().is_summing() {
    allowed.push(ELLIPSIS);
  }
  let matcher = regex_opt_with(allowed, |s| format!("^{s}"));

  let mut tokens: Vec<Either<&str, char>> = Vec::new();
  let mut rest = input.as_str();
  while !rest.is_empty() {
    if let Some(found) = matcher.find(rest) {
      tokens.push(Either::Left(found.as_str()));
      rest = &rest[found.end()..];
    } else {
      // expect: the remainder is non-empty, so there is a next char
      let c = rest.chars().next().expect("non-empty remainder");
      tokens.push(Either::Right(c));
      rest = &rest[c.len_utf8()..];
    }
  }
  let (accepted, rejected) = tokens.into_iter().partition_map(|token| token);
  SanitizedInput { accepted, rejected }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::radix::Alphabet;
  use crate::system::NumeralSystem;

  fn radix(base: u32, system: NumeralSystem) -> Radix {
    Radix::new(base, system).unwrap()
  }

  #[test]
  fn test_partition_preserves_order() {
    let r = radix(10, NumeralSystem::Standard);
    let result = sanitize("1x2y3-z", &r);
    assert_eq!(result.accepted, "123-");
    assert_eq!(result.rejected, "XYZ");
  }

  #[test]
  fn test_uppercases_before_matching() {
    let r = radix(16, NumeralSystem::Standard);
    let result = sanitize("0xfe", &r);
    assert_eq!(result.accepted, "0FE");
    assert_eq!(result.rejected, "X");
  }

  #[test]
  fn test_minus_only_for_sign_prefix_systems() {
    let standard = radix(9, NumeralSystem::Standard);
    assert_eq!(sanitize("-12", &standard).accepted, "-12");
    let balanced = radix(9, NumeralSystem::Balanced);
    let result = sanitize("-12", &balanced);
    assert_eq!(result.accepted, "12");
    assert_eq!(result.rejected, "-");
  }

  #[test]
  fn test_ellipsis_only_for_summing_systems() {
    let sum = radix(10, NumeralSystem::Sum);
    assert_eq!(sanitize("Z…A", &sum).accepted, "Z…A");
    let standard = radix(10, NumeralSystem::Standard);
    let result = sanitize("1…2", &standard);
    assert_eq!(result.accepted, "12");
    assert_eq!(result.rejected, "…");
  }

  #[test]
  fn test_balanced_digit_symbols_accepted() {
    let r = radix(9, NumeralSystem::Balanced);
    let result = sanitize("❶4 + ❷", &r);
    assert_eq!(result.accepted, "❶4❷");
    assert_eq!(result.rejected, " + ");
  }

  #[test]
  fn test_multi_codepoint_symbol_is_atomic() {
    let symbols = vec!["0".to_string(), "XY".to_string(), "Z".to_string()];
    let r = Radix::with_alphabet(3, NumeralSystem::Standard, Alphabet::Exact(symbols)).unwrap();
    let result = sanitize("XYZ", &r);
    assert_eq!(result.accepted, "XYZ");
    assert_eq!(result.rejected, "");
    // A lone X is not a symbol, even though it starts one.
    let result = sanitize("XZX", &r);
    assert_eq!(result.accepted, "Z");
    assert_eq!(result.rejected, "XX");
  }

  #[test]
  fn test_idempotent_on_accepted_output() {
    for r in [
      radix(10, NumeralSystem::Standard),
      radix(9, NumeralSystem::Balanced),
      radix(10, NumeralSystem::Sum),
    ] {
      let first = sanitize("  -9❶8a7…B?", &r);
      let again = sanitize(&first.accepted, &r);
      assert_eq!(again.accepted, first.accepted);
      assert_eq!(again.rejected, "");
    }
  }

  #[test]
  fn test_empty_input() {
    let r = radix(10, NumeralSystem::Standard);
    assert_eq!(sanitize("", &r), SanitizedInput::default());
  }
}
