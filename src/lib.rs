
//! Bidirectional codec between signed arbitrary-precision integers
//! and digit strings, over several flavors of positional numeral
//! system: standard, bijective, balanced, clock, sum and balsum,
//! each with a configurable digit alphabet.
//!
//! A [`radix::Radix`] is built once and then fed by reference into
//! the pure, stateless operations: [`encode::encode`],
//! [`decode::decode`], [`sanitize::sanitize`] and the shift helpers
//! in [`shift`]. Nothing here does I/O or holds global state.

pub mod alphabet;
pub mod decode;
pub mod digit_sum;
pub mod encode;
pub mod persist;
pub mod radix;
pub mod sanitize;
pub mod shift;
pub mod system;
pub mod util;
