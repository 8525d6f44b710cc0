use super::raw_key::Key;
use crate::PasetoError;

/// A 48-byte ECDSA P-384 private scalar, externally supplied. Used for `v3.public` signing only.
pub struct PrivateKeyV3(pub(crate) Key<48>);

impl PrivateKeyV3 {
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, PasetoError> {
    Ok(Self(Key::from_slice(bytes)?))
  }
}

/// A 49-byte compressed-SEC1 ECDSA P-384 public point. Used for `v3.public` verification only.
pub struct PublicKeyV3(pub(crate) Key<49>);

impl PublicKeyV3 {
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, PasetoError> {
    let key = Key::from_slice(bytes)?;
    if key[0] != 2 && key[0] != 3 {
      return Err(PasetoError::InvalidKey);
    }
    Ok(Self(key))
  }
}

/// A 64-byte Ed25519 keypair (32-byte seed followed by 32-byte public key), externally
/// supplied. Used for `v4.public` signing only.
pub struct PrivateKeyV4(pub(crate) Key<64>);

impl PrivateKeyV4 {
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, PasetoError> {
    Ok(Self(Key::from_slice(bytes)?))
  }
}

/// A 32-byte Ed25519 public key. Used for `v4.public` verification only.
pub struct PublicKeyV4(pub(crate) Key<32>);

impl PublicKeyV4 {
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, PasetoError> {
    Ok(Self(Key::from_slice(bytes)?))
  }
}
