use crate::PasetoError;
use rand_core::TryRngCore;
use std::fmt::Debug;
use zeroize::Zeroize;

/// A fixed-size buffer of secret or public key material, zeroized on drop.
///
/// This is the only place raw bytes are converted into key material; every higher-level key
/// type (`LocalKeyV3`, `PrivateKeyV4`, ...) wraps a `Key<N>` rather than a bare slice, so the
/// four PASETO key kinds stay mutually non-assignable at the type level.
#[derive(Zeroize, Clone)]
#[zeroize(drop)]
pub(crate) struct Key<const KEYSIZE: usize>([u8; KEYSIZE]);

impl<const KEYSIZE: usize> Key<KEYSIZE> {
  pub(crate) fn from_exact(bytes: [u8; KEYSIZE]) -> Self {
    Self(bytes)
  }

  pub(crate) fn from_slice(bytes: &[u8]) -> Result<Self, PasetoError> {
    if bytes.len() != KEYSIZE {
      return Err(PasetoError::KeyLength);
    }
    let mut buf = [0u8; KEYSIZE];
    buf.copy_from_slice(bytes);
    Ok(Self(buf))
  }

  /// Draws `KEYSIZE` bytes from a caller-supplied, possibly-fallible entropy source.
  pub(crate) fn generate<R: TryRngCore>(rng: &mut R) -> Result<Self, PasetoError> {
    let mut buf = [0u8; KEYSIZE];
    rng.try_fill_bytes(&mut buf).map_err(|_| PasetoError::EntropyFailure)?;
    Ok(Self(buf))
  }
}

impl<const KEYSIZE: usize> AsRef<[u8]> for Key<KEYSIZE> {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl<const KEYSIZE: usize> std::ops::Deref for Key<KEYSIZE> {
  type Target = [u8; KEYSIZE];
  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<const KEYSIZE: usize> Debug for Key<KEYSIZE> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Key<{KEYSIZE}>(REDACTED)")
  }
}
