use crate::{PurposeTrait, VersionTrait};
use std::fmt;
use std::fmt::Display;
use std::marker::PhantomData;
use std::ops::Deref;

/// The domain-separating prefix string for a given (version, purpose) pair, e.g. `"v4.local."`.
///
/// The trailing dot is part of the literal; it is fed into the pre-authentication encoding
/// and must never be reformatted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Header<Version, Purpose>
where
  Version: VersionTrait,
  Purpose: PurposeTrait,
{
  version: PhantomData<Version>,
  purpose: PhantomData<Purpose>,
  header: &'static str,
}

impl<Version: VersionTrait, Purpose: PurposeTrait> Deref for Header<Version, Purpose> {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    self.header.as_bytes()
  }
}

impl<Version: VersionTrait, Purpose: PurposeTrait> AsRef<str> for Header<Version, Purpose> {
  fn as_ref(&self) -> &str {
    self.header
  }
}

static V3_LOCAL: &str = "v3.local.";
static V3_PUBLIC: &str = "v3.public.";
static V4_LOCAL: &str = "v4.local.";
static V4_PUBLIC: &str = "v4.public.";

impl<Version: VersionTrait, Purpose: PurposeTrait> Default for Header<Version, Purpose> {
  fn default() -> Self {
    let header = match (Version::default().as_ref(), Purpose::default().as_ref()) {
      ("v3", "local") => V3_LOCAL,
      ("v3", "public") => V3_PUBLIC,
      ("v4", "local") => V4_LOCAL,
      ("v4", "public") => V4_PUBLIC,
      _ => unreachable!("only v3/v4 and local/public marker types exist"),
    };
    Self {
      version: PhantomData,
      purpose: PhantomData,
      header,
    }
  }
}

impl<Version: VersionTrait, Purpose: PurposeTrait> Display for Header<Version, Purpose> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.header)
  }
}
