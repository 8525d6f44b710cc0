use crate::common::{base64_decode, base64_encode, constant_time_eq};
use std::fmt;
use std::ops::Deref;

/// An optional, unencrypted-but-authenticated byte string appended to a token after a `.`.
#[derive(Default, Debug, Clone, Copy)]
pub struct Footer<'a>(&'a [u8]);

impl<'a> Footer<'a> {
  pub(crate) fn encode(&self) -> String {
    base64_encode(self.0)
  }

  pub(crate) fn decode_b64url(s: &str) -> Result<Vec<u8>, crate::PasetoError> {
    base64_decode(s)
  }

  /// True only when `self` and `other` carry the same bytes, compared in constant time.
  pub(crate) fn matches(&self, other: &[u8]) -> bool {
    constant_time_eq(self.0, other)
  }
}

impl<'a> Deref for Footer<'a> {
  type Target = [u8];

  fn deref(&self) -> &'a Self::Target {
    self.0
  }
}

impl<'a> AsRef<[u8]> for Footer<'a> {
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}

impl<'a> From<&'a str> for Footer<'a> {
  fn from(s: &'a str) -> Self {
    Self(s.as_bytes())
  }
}

impl<'a> From<&'a [u8]> for Footer<'a> {
  fn from(b: &'a [u8]) -> Self {
    Self(b)
  }
}

impl<'a> fmt::Display for Footer<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", String::from_utf8_lossy(self.0))
  }
}

impl<'a> PartialEq for Footer<'a> {
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}
impl<'a> Eq for Footer<'a> {}
