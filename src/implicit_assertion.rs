use std::fmt;
use std::ops::Deref;

/// An optional byte string authenticated via the pre-authentication encoding but never
/// transmitted as part of the token.
#[derive(Default, Debug, Clone, Copy)]
pub struct ImplicitAssertion<'a>(&'a [u8]);

impl<'a> Deref for ImplicitAssertion<'a> {
  type Target = [u8];

  fn deref(&self) -> &'a Self::Target {
    self.0
  }
}

impl<'a> AsRef<[u8]> for ImplicitAssertion<'a> {
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}

impl<'a> From<&'a str> for ImplicitAssertion<'a> {
  fn from(s: &'a str) -> Self {
    Self(s.as_bytes())
  }
}

impl<'a> From<&'a [u8]> for ImplicitAssertion<'a> {
  fn from(b: &'a [u8]) -> Self {
    Self(b)
  }
}

impl<'a> fmt::Display for ImplicitAssertion<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", String::from_utf8_lossy(self.0))
  }
}

impl<'a> PartialEq for ImplicitAssertion<'a> {
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}
impl<'a> Eq for ImplicitAssertion<'a> {}
