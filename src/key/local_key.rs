use super::raw_key::Key;
use crate::PasetoError;
use rand_core::TryRngCore;

/// A 32-byte symmetric key for `v3.local` encryption/decryption only.
///
/// Deliberately not interchangeable with [`LocalKeyV4`] or either asymmetric key type — the
/// type system, not a runtime check, is what prevents a v4 key from being handed to v3 code.
pub struct LocalKeyV3(pub(crate) Key<32>);

/// A 32-byte symmetric key for `v4.local` encryption/decryption only.
pub struct LocalKeyV4(pub(crate) Key<32>);

macro_rules! local_key_impl {
  ($name:ident) => {
    impl $name {
      /// Draws 32 bytes from `rng`. The caller owns the entropy source; this call only
      /// fails if reading from it fails ([`PasetoError::EntropyFailure`]).
      pub fn generate<R: TryRngCore>(rng: &mut R) -> Result<Self, PasetoError> {
        Ok(Self(Key::generate(rng)?))
      }

      /// Builds a key directly from exactly 32 bytes of external key material.
      pub fn from_bytes(bytes: &[u8]) -> Result<Self, PasetoError> {
        Ok(Self(Key::from_slice(bytes)?))
      }

      /// Builds a key by taking the first 32 bytes of a seed of at least 32 bytes.
      pub fn from_seed(seed: &[u8]) -> Result<Self, PasetoError> {
        if seed.len() < 32 {
          return Err(PasetoError::SeedTooShort);
        }
        Self::from_bytes(&seed[..32])
      }

      pub(crate) fn as_bytes(&self) -> &[u8; 32] {
        &self.0
      }
    }
  };
}

local_key_impl!(LocalKeyV3);
local_key_impl!(LocalKeyV4);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_too_short_is_rejected() {
    let seed = [0u8; 31];
    assert!(matches!(LocalKeyV3::from_seed(&seed), Err(PasetoError::SeedTooShort)));
  }

  #[test]
  fn seed_exactly_32_is_accepted() {
    let seed = [7u8; 32];
    let key = LocalKeyV4::from_seed(&seed).unwrap();
    assert_eq!(key.as_bytes(), &seed);
  }

  #[test]
  fn wrong_length_bytes_are_rejected() {
    assert!(matches!(LocalKeyV3::from_bytes(&[0u8; 31]), Err(PasetoError::KeyLength)));
  }
}
