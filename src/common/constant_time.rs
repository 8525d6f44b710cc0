use subtle::ConstantTimeEq;

/// Two byte strings compare equal only when their lengths match and every byte matches, with
/// timing independent of the position of the first difference.
///
/// The length check short-circuits (lengths aren't secret), but once lengths match the byte
/// comparison always runs in full via `subtle`, and the result is the logical AND of the two
/// checks — no dead branch kept around "to look constant-time".
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
  a.len() == b.len() && bool::from(a.ct_eq(b))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn equal_inputs_match() {
    assert!(constant_time_eq(b"same", b"same"));
  }

  #[test]
  fn different_lengths_never_match() {
    assert!(!constant_time_eq(b"short", b"shorter"));
  }

  #[test]
  fn same_length_different_bytes_never_match() {
    assert!(!constant_time_eq(b"abcd", b"abce"));
  }

  #[test]
  fn empty_vs_empty_matches() {
    assert!(constant_time_eq(b"", b""));
  }

  #[test]
  fn empty_vs_nonempty_never_matches() {
    assert!(!constant_time_eq(b"", b"x"));
  }
}
