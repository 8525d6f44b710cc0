use crate::PasetoError;
use blake2::digest::consts::U32;
use blake2::digest::{FixedOutput, KeyInit, Update};
use blake2::Blake2bMac;
use hmac::{Hmac, Mac};
use sha2::Sha384;

/// HMAC-SHA384 tag over the pre-authentication encoding, used by `v3.local`.
pub(crate) fn hmac_sha384(key: &[u8; 48], data: &[u8]) -> Result<[u8; 48], PasetoError> {
  let mut mac =
    <Hmac<Sha384> as Mac>::new_from_slice(key).map_err(|_| PasetoError::InternalCrypto)?;
  Mac::update(&mut mac, data);
  let mut out = [0u8; 48];
  out.copy_from_slice(&mac.finalize().into_bytes());
  Ok(out)
}

/// Keyed BLAKE2b-32 tag over the pre-authentication encoding, used by `v4.local`.
pub(crate) fn blake2b_mac(key: &[u8; 32], data: &[u8]) -> Result<[u8; 32], PasetoError> {
  let mut mac = <Blake2bMac<U32> as KeyInit>::new_from_slice(key)?;
  Update::update(&mut mac, data);
  let mut out = [0u8; 32];
  out.copy_from_slice(&mac.finalize_fixed());
  Ok(out)
}
