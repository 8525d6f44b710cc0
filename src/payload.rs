use std::fmt;
use std::ops::Deref;

/// The opaque plaintext (for `local`) or message (for `public`) protected by a token.
#[derive(Default, Debug, Clone, Copy)]
pub struct Payload<'a>(&'a [u8]);

impl<'a> Deref for Payload<'a> {
  type Target = [u8];

  fn deref(&self) -> &'a Self::Target {
    self.0
  }
}

impl AsRef<[u8]> for Payload<'_> {
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}

impl<'a> From<&'a str> for Payload<'a> {
  fn from(s: &'a str) -> Self {
    Self(s.as_bytes())
  }
}

impl<'a> From<&'a [u8]> for Payload<'a> {
  fn from(b: &'a [u8]) -> Self {
    Self(b)
  }
}

impl<R> PartialEq<R> for Payload<'_>
where
  R: AsRef<[u8]>,
{
  fn eq(&self, other: &R) -> bool {
    self.0 == other.as_ref()
  }
}

impl fmt::Display for Payload<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", String::from_utf8_lossy(self.0))
  }
}
