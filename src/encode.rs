
//! Conversion from arbitrary-precision integers to digit strings.

use crate::alphabet::ELLIPSIS;
use crate::radix::Radix;
use crate::system::NumeralSystem;

use num::{BigInt, Signed, ToPrimitive, Zero};

/// Longest run of a single repeated place value the sum encoder will
/// emit. Past this, the remaining magnitude is folded by modulo and
/// the run is capped with [`ELLIPSIS`].
pub const MAX_PLACE_RUN: u32 = 28;

/// Encodes a signed integer as a digit string in the given radix.
/// Total: every integer has an encoding, and zero always encodes as
/// the radix's designated zero symbol.
pub fn encode(value: &BigInt, radix: &Radix) -> String {
  let (negative, parts) = encode_parts(value, radix);
  let mut out = String::new();
  if negative {
    out.push('-');
  }
  for part in parts {
    out.push_str(part);
  }
  out
}

/// Encodes to the sequence of digit symbols, most significant first,
/// plus whether an explicit `-` prefix is called for. Balanced-family
/// systems carry the sign in the digit symbols and never ask for the
/// prefix.
pub(crate) fn encode_parts<'a>(value: &BigInt, radix: &'a Radix) -> (bool, Vec<&'a str>) {
  if value.is_zero() {
    return (false, vec![radix.zero_symbol()]);
  }
  let negative = value.is_negative();
  let magnitude = value.abs();
  let parts = match radix.system() {
    NumeralSystem::Sum => sum_parts(&magnitude, radix),
    NumeralSystem::Balsum => balsum_parts(&magnitude, negative, radix),
    _ => positional_parts(&magnitude, negative, radix),
  };
  (negative && radix.system().uses_sign_prefix(), parts)
}

/// Shared divmod loop for the positional systems. Digits come out
/// least significant first and are reversed at the end.
fn positional_parts<'a>(magnitude: &BigInt, negative: bool, radix: &'a Radix) -> Vec<&'a str> {
  let base = radix.base();
  let system = radix.system();
  let high = radix.high();
  let zero_at = radix.zero_at() as i64;
  let mut n = magnitude.clone();
  let mut parts = Vec::new();
  while !n.is_zero() {
    // unwrap: the remainder is below the base, which is at most 36
    let mut d = (&n % base).to_i64().unwrap();
    match system {
      NumeralSystem::Bijective => {
        // Force the remainder into 1..=base by borrowing one from
        // the quotient when it would be zero.
        let q = if d == 0 { &n / base - 1u32 } else { &n / base };
        d = (&n - &q * base).to_i64().unwrap();
        n = q;
      }
      NumeralSystem::Balanced | NumeralSystem::Clock => {
        // A remainder past `high` wraps to the negative digit set.
        // Clock radixes also wrap a negative value's remainder that
        // lands exactly on `high`, since `-high` has no digit there.
        if d > high || (system == NumeralSystem::Clock && negative && d == high) {
          d -= base as i64;
          n += high; // folds the +1 carry into the division below
        }
        if negative {
          d = -d;
        }
        d += zero_at;
        n /= base;
      }
      _ => {
        n /= base;
      }
    }
    parts.push(radix.symbols()[d as usize].as_str());
  }
  parts.reverse();
  parts
}

/// Greedy walk down the descending place table. Not positional: the
/// output is a bag of place values that sum to the magnitude, capped
/// at [`MAX_PLACE_RUN`] repetitions per place.
fn sum_parts<'a>(magnitude: &BigInt, radix: &'a Radix) -> Vec<&'a str> {
  let cap = BigInt::from(MAX_PLACE_RUN);
  let mut remaining = magnitude.clone();
  let mut parts = Vec::new();
  for (value, idx) in radix.places() {
    if remaining.is_zero() {
      break;
    }
    let count = &remaining / value;
    if count.is_zero() {
      continue;
    }
    let symbol = radix.symbols()[*idx].as_str();
    if count > cap {
      for _ in 0..MAX_PLACE_RUN {
        parts.push(symbol);
      }
      parts.push(ELLIPSIS);
      remaining %= value;
    } else {
      // unwrap: just checked count <= MAX_PLACE_RUN
      let count = count.to_u32().unwrap();
      for _ in 0..count {
        parts.push(symbol);
      }
      remaining -= value * count;
    }
  }
  parts
}

/// Balanced digit extraction, emitting a weighted symbol for each
/// nonzero positional digit. When a digit's weight is beyond the
/// symbol table, the remaining high-order digits are dropped and the
/// output gains a leading [`ELLIPSIS`].
fn balsum_parts<'a>(magnitude: &BigInt, negative: bool, radix: &'a Radix) -> Vec<&'a str> {
  let base = radix.base();
  let high = radix.high();
  let mut n = magnitude.clone();
  let mut k = 0;
  let mut parts = Vec::new();
  let mut truncated = false;
  while !n.is_zero() {
    // unwrap: the remainder is below the base, which is at most 35
    let mut d = (&n % base).to_i64().unwrap();
    if d > high {
      d -= base as i64;
      n += high;
    }
    n /= base;
    if d != 0 {
      let d = if negative { -d } else { d };
      match radix.balsum_symbol_index(d, k) {
        Some(idx) => parts.push(radix.symbols()[idx].as_str()),
        None => {
          truncated = true;
          break;
        }
      }
    }
    k += 1;
  }
  if truncated {
    parts.push(ELLIPSIS);
  }
  parts.reverse();
  parts
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::radix::Radix;
  use num::pow::Pow;

  fn radix(base: u32, system: NumeralSystem) -> Radix {
    Radix::new(base, system).unwrap()
  }

  fn enc(value: i64, radix: &Radix) -> String {
    encode(&BigInt::from(value), radix)
  }

  #[test]
  fn test_standard_base9() {
    let r = radix(9, NumeralSystem::Standard);
    assert_eq!(enc(-80, &r), "-88");
    assert_eq!(enc(-40, &r), "-44");
    assert_eq!(enc(-9, &r), "-10");
    assert_eq!(enc(-1, &r), "-1");
    assert_eq!(enc(0, &r), "0");
    assert_eq!(enc(1, &r), "1");
    assert_eq!(enc(8, &r), "8");
    assert_eq!(enc(9, &r), "10");
    assert_eq!(enc(80, &r), "88");
  }

  #[test]
  fn test_standard_base10_and_12() {
    let r10 = radix(10, NumeralSystem::Standard);
    assert_eq!(enc(-99, &r10), "-99");
    assert_eq!(enc(10, &r10), "10");
    let r12 = radix(12, NumeralSystem::Standard);
    assert_eq!(enc(-143, &r12), "-BB");
    assert_eq!(enc(-11, &r12), "-B");
    assert_eq!(enc(11, &r12), "B");
    assert_eq!(enc(12, &r12), "10");
    assert_eq!(enc(143, &r12), "BB");
  }

  #[test]
  fn test_standard_base27() {
    let r = radix(27, NumeralSystem::Standard);
    assert_eq!(enc(-728, &r), "-ZZ");
    assert_eq!(enc(-27, &r), "-A0");
    assert_eq!(enc(1, &r), "A");
    assert_eq!(enc(26, &r), "Z");
    assert_eq!(enc(27, &r), "A0");
    assert_eq!(enc(702, &r), "Z0");
    assert_eq!(enc(728, &r), "ZZ");
  }

  #[test]
  fn test_bijective_base9() {
    let r = radix(9, NumeralSystem::Bijective);
    assert_eq!(enc(-90, &r), "-99");
    assert_eq!(enc(-10, &r), "-11");
    assert_eq!(enc(-9, &r), "-9");
    assert_eq!(enc(0, &r), "0");
    assert_eq!(enc(1, &r), "1");
    assert_eq!(enc(9, &r), "9");
    assert_eq!(enc(10, &r), "11");
    assert_eq!(enc(90, &r), "99");
  }

  #[test]
  fn test_bijective_base10() {
    let r = radix(10, NumeralSystem::Bijective);
    assert_eq!(enc(-110, &r), "-AA");
    assert_eq!(enc(-10, &r), "-A");
    assert_eq!(enc(10, &r), "A");
    assert_eq!(enc(11, &r), "11");
    assert_eq!(enc(101, &r), "A1");
    assert_eq!(enc(110, &r), "AA");
  }

  #[test]
  fn test_bijective_base26() {
    let r = radix(26, NumeralSystem::Bijective);
    assert_eq!(enc(-702, &r), "-ZZ");
    assert_eq!(enc(-1, &r), "-A");
    assert_eq!(enc(1, &r), "A");
    assert_eq!(enc(26, &r), "Z");
    assert_eq!(enc(27, &r), "AA");
    assert_eq!(enc(677, &r), "ZA");
    assert_eq!(enc(702, &r), "ZZ");
  }

  #[test]
  fn test_bijective_never_uses_placeholder() {
    let r = radix(9, NumeralSystem::Bijective);
    for value in 1..2000 {
      assert!(!enc(value, &r).contains('0'), "value {value}");
    }
  }

  #[test]
  fn test_balanced_base9() {
    let r = radix(9, NumeralSystem::Balanced);
    assert_eq!(enc(-40, &r), "❹❹");
    assert_eq!(enc(-18, &r), "❷0");
    assert_eq!(enc(-5, &r), "❶4");
    assert_eq!(enc(-4, &r), "❹");
    assert_eq!(enc(-1, &r), "❶");
    assert_eq!(enc(0, &r), "0");
    assert_eq!(enc(1, &r), "1");
    assert_eq!(enc(4, &r), "4");
    assert_eq!(enc(5, &r), "1❹");
    assert_eq!(enc(18, &r), "20");
    assert_eq!(enc(40, &r), "44");
  }

  #[test]
  fn test_balanced_base19() {
    let r = radix(19, NumeralSystem::Balanced);
    assert_eq!(enc(-180, &r), "❾❾");
    assert_eq!(enc(-162, &r), "❾9");
    assert_eq!(enc(-10, &r), "❶9");
    assert_eq!(enc(-9, &r), "❾");
    assert_eq!(enc(9, &r), "9");
    assert_eq!(enc(10, &r), "1❾");
    assert_eq!(enc(162, &r), "9❾");
    assert_eq!(enc(180, &r), "99");
  }

  #[test]
  fn test_balanced_base27() {
    let r = radix(27, NumeralSystem::Balanced);
    assert_eq!(enc(-364, &r), "AA");
    assert_eq!(enc(-338, &r), "AZ");
    assert_eq!(enc(-14, &r), "MZ");
    assert_eq!(enc(-13, &r), "A");
    assert_eq!(enc(-1, &r), "M");
    assert_eq!(enc(1, &r), "N");
    assert_eq!(enc(13, &r), "Z");
    assert_eq!(enc(14, &r), "NA");
    assert_eq!(enc(338, &r), "ZA");
    assert_eq!(enc(364, &r), "ZZ");
  }

  #[test]
  fn test_clock_base12() {
    let r = radix(12, NumeralSystem::Clock);
    assert_eq!(enc(0, &r), "0");
    assert_eq!(enc(6, &r), "6");
    assert_eq!(enc(7, &r), "1❺");
    assert_eq!(enc(12, &r), "10");
    assert_eq!(enc(-6, &r), "❶6");
    assert_eq!(enc(-7, &r), "❶5");
    assert_eq!(enc(-12, &r), "❶0");
  }

  #[test]
  fn test_balanced_family_never_emits_minus() {
    for r in [
      radix(9, NumeralSystem::Balanced),
      radix(12, NumeralSystem::Clock),
      radix(9, NumeralSystem::Balsum),
    ] {
      for value in -2000..0 {
        assert!(!enc(value, &r).starts_with('-'), "{} encoding {value}", r.name());
      }
    }
  }

  #[test]
  fn test_sum_base10() {
    let r = radix(10, NumeralSystem::Sum);
    assert_eq!(enc(0, &r), "0");
    assert_eq!(enc(1, &r), "A");
    assert_eq!(enc(9, &r), "I");
    assert_eq!(enc(10, &r), "J");
    assert_eq!(enc(11, &r), "JA");
    assert_eq!(enc(29, &r), "KI");
    assert_eq!(enc(100, &r), "S");
    assert_eq!(enc(999, &r), "ZSRI");
    assert_eq!(enc(-11, &r), "-JA");
    assert_eq!(enc(-29, &r), "-KI");
  }

  #[test]
  fn test_sum_run_cap() {
    let r = radix(10, NumeralSystem::Sum);
    // 800 * 29: one repetition over the cap, so the run is capped at
    // 28 and the excess is folded away by the modulo.
    let s = enc(800 * 29, &r);
    assert_eq!(s, format!("{}{}", "Z".repeat(28), ELLIPSIS));
    let s = enc(800 * 29 + 423, &r);
    assert_eq!(s, format!("{}{}VKC", "Z".repeat(28), ELLIPSIS));
    // 800 * 28 is exactly at the cap: no truncation.
    let s = enc(800 * 28, &r);
    assert_eq!(s, "Z".repeat(28));
  }

  #[test]
  fn test_balsum_base9() {
    let r = radix(9, NumeralSystem::Balsum);
    assert_eq!(enc(0, &r), "0");
    assert_eq!(enc(1, &r), "1");
    assert_eq!(enc(4, &r), "4");
    assert_eq!(enc(5, &r), "5❹");
    assert_eq!(enc(9, &r), "5");
    assert_eq!(enc(13, &r), "54");
    assert_eq!(enc(81, &r), "9");
    assert_eq!(enc(-1, &r), "❶");
    assert_eq!(enc(-5, &r), "❺4");
    assert_eq!(enc(-9, &r), "❺");
  }

  #[test]
  fn test_balsum_skips_zero_digits() {
    let r = radix(9, NumeralSystem::Balsum);
    // 82 = 81 + 1: the 9^1 digit is zero and emits nothing.
    assert_eq!(enc(82, &r), "91");
  }

  #[test]
  fn test_balsum_truncates_past_table() {
    let r = radix(9, NumeralSystem::Balsum);
    // 9^9 needs a digit at position 9; the default table ends at
    // 3 * 9^8.
    let value = BigInt::from(9u32).pow(9u32);
    let s = encode(&value, &r);
    assert_eq!(s, ELLIPSIS);
    // 3 * 9^8 is the last symbol in the table.
    let value = BigInt::from(3u32) * BigInt::from(9u32).pow(8u32);
    assert_eq!(encode(&value, &r), "Z");
  }

  #[test]
  fn test_large_standard_value() {
    let r = radix(2, NumeralSystem::Standard);
    let value = BigInt::from(1u32) << 100usize;
    let s = encode(&value, &r);
    assert_eq!(s.len(), 101);
    assert!(s.starts_with('1'));
    assert!(s[1..].chars().all(|c| c == '0'));
  }

  #[test]
  fn test_zero_is_canonical_for_every_system() {
    for r in [
      radix(10, NumeralSystem::Standard),
      radix(10, NumeralSystem::Bijective),
      radix(9, NumeralSystem::Balanced),
      radix(12, NumeralSystem::Clock),
      radix(10, NumeralSystem::Sum),
      radix(9, NumeralSystem::Balsum),
    ] {
      assert_eq!(encode(&BigInt::zero(), &r), r.zero_symbol());
    }
  }
}
