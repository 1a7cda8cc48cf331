
//! The default digit alphabets and helpers for working with digit
//! symbols.
//!
//! A digit symbol is a user-perceived character. Most of the built-in
//! symbols are a single Unicode codepoint, but custom alphabets may
//! use symbols spanning several codepoints (for instance, a digraph
//! like `"Ch"`), so symbols are carried around as owned strings and
//! treated as atomic units everywhere in this crate.

use once_cell::sync::Lazy;

const ZERO: &str = "0";
const BASE9: &str = "123456789";
const BASE_MINUS9: &str = "❾❽❼❻❺❹❸❷❶";
const BASE26: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE_MINUS26: &str = "🅩🅨🅧🅦🅥🅤🅣🅢🅡🅠🅟🅞🅝🅜🅛🅚🅙🅘🅗🅖🅕🅔🅓🅒🅑🅐";

/// Marker emitted when an encoded run of repeated place values has
/// been truncated, and ignored (contributing zero) when decoding.
pub const ELLIPSIS: &str = "…";

/// The full reference alphabet: negative letters, negative digits,
/// zero, positive digits, positive letters. 71 symbols, with the zero
/// symbol exactly at the center, so that every system's digit window
/// can be sliced out of it.
pub static DEFAULT_ALPHABET: Lazy<Vec<String>> =
  Lazy::new(|| symbols(&format!("{BASE_MINUS26}{BASE_MINUS9}{ZERO}{BASE9}{BASE26}")));

/// Default alphabet for standard base 27: zero plus the Latin
/// letters, rather than a slice of [`DEFAULT_ALPHABET`].
pub static BASE27_ALPHABET: Lazy<Vec<String>> =
  Lazy::new(|| symbols(&format!("{ZERO}{BASE26}")));

/// Default alphabet for bijective base 26: the zero placeholder plus
/// the Latin letters.
pub static BIJ26_ALPHABET: Lazy<Vec<String>> =
  Lazy::new(|| symbols(&format!("{ZERO}{BASE26}")));

/// Default alphabet for balanced base 27: letters A-M for the
/// negative digits, zero at the center, N-Z for the positive digits.
pub static BAL27_ALPHABET: Lazy<Vec<String>> =
  Lazy::new(|| symbols(&format!("ABCDEFGHIJKLM{ZERO}NOPQRSTUVWXYZ")));

/// Default alphabet for sum systems of any base: zero plus the Latin
/// letters, reused cyclically with growing place multipliers.
pub static SUM_ALPHABET: Lazy<Vec<String>> =
  Lazy::new(|| symbols(&format!("{ZERO}{BASE26}")));

/// Splits a string into one symbol per codepoint. Custom alphabets
/// with multi-codepoint symbols should be built as explicit symbol
/// lists instead of going through this function.
pub fn symbols(s: &str) -> Vec<String> {
  s.chars().map(String::from).collect()
}
