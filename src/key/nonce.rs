use super::raw_key::Key;
use crate::PasetoError;
use rand_core::TryRngCore;

/// The 32-byte nonce used by both `v3.local` and `v4.local`.
///
/// Exposed separately from the symmetric key so callers can supply a fixed nonce for test
/// vectors while real traffic draws one from an entropy source.
pub struct LocalNonce(pub(crate) Key<32>);

impl LocalNonce {
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, PasetoError> {
    Ok(Self(Key::from_slice(bytes)?))
  }

  pub fn generate<R: TryRngCore>(rng: &mut R) -> Result<Self, PasetoError> {
    Ok(Self(Key::generate(rng)?))
  }

  pub(crate) fn as_bytes(&self) -> &[u8; 32] {
    &self.0
  }
}
