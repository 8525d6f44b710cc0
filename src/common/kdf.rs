use super::{AUTH_KEY_INFO, ENCRYPTION_KEY_INFO};
use crate::PasetoError;
use blake2::digest::consts::U56;
use blake2::digest::{FixedOutput, KeyInit, Update};
use blake2::Blake2bMac;
use ring::hkdf;

/// Derived key material for `v3.local`: a 32-byte AES key, a 16-byte CTR IV (the second half of
/// the HKDF encryption-key output), and a 48-byte HMAC-SHA384 key.
pub(crate) struct V3LocalKeys {
  pub(crate) encryption_key: [u8; 32],
  pub(crate) counter_nonce: [u8; 16],
  pub(crate) authentication_key: [u8; 48],
}

#[derive(Debug, PartialEq)]
struct HkdfLen(usize);

impl hkdf::KeyType for HkdfLen {
  fn len(&self) -> usize {
    self.0
  }
}

fn hkdf_sha384_expand(key: &[u8], info: &[u8], out_len: usize) -> Result<Vec<u8>, PasetoError> {
  let salt = hkdf::Salt::new(hkdf::HKDF_SHA384, &[]);
  let prk = salt.extract(key);
  let info_slices = [info];
  let okm = prk.expand(&info_slices, HkdfLen(out_len))?;
  let mut out = vec![0u8; out_len];
  okm.fill(&mut out)?;
  Ok(out)
}

/// Splits the v3.local symmetric key into its encryption and authentication halves via
/// HKDF-HMAC-SHA384. The HKDF `info` parameter is the literal domain-separator string
/// concatenated directly with the raw nonce, with no separator.
pub(crate) fn v3_local_keys(key: &[u8], nonce: &[u8; 32]) -> Result<V3LocalKeys, PasetoError> {
  let mut enc_info = Vec::with_capacity(ENCRYPTION_KEY_INFO.len() + nonce.len());
  enc_info.extend_from_slice(ENCRYPTION_KEY_INFO);
  enc_info.extend_from_slice(nonce);
  let tmp = hkdf_sha384_expand(key, &enc_info, 48)?;

  let mut auth_info = Vec::with_capacity(AUTH_KEY_INFO.len() + nonce.len());
  auth_info.extend_from_slice(AUTH_KEY_INFO);
  auth_info.extend_from_slice(nonce);
  let ak = hkdf_sha384_expand(key, &auth_info, 48)?;

  let mut encryption_key = [0u8; 32];
  encryption_key.copy_from_slice(tmp.get(..32).ok_or(PasetoError::InternalCrypto)?);
  let mut counter_nonce = [0u8; 16];
  counter_nonce.copy_from_slice(tmp.get(32..48).ok_or(PasetoError::InternalCrypto)?);
  let mut authentication_key = [0u8; 48];
  authentication_key.copy_from_slice(&ak);

  Ok(V3LocalKeys {
    encryption_key,
    counter_nonce,
    authentication_key,
  })
}

/// Derived key material for `v4.local`: a 32-byte XChaCha20 key, a 24-byte sub-nonce (the
/// second half of the BLAKE2b-56 encryption-key output), and a 32-byte keyed-BLAKE2b auth key.
pub(crate) struct V4LocalKeys {
  pub(crate) encryption_key: [u8; 32],
  pub(crate) counter_nonce: [u8; 24],
  pub(crate) authentication_key: [u8; 32],
}

/// Splits the v4.local symmetric key via keyed BLAKE2b. The 56-byte encryption-key MAC output
/// splits as `ek = bytes[0..32]`, `n2 = bytes[32..56]` — do not reverse the halves.
pub(crate) fn v4_local_keys(key: &[u8], nonce: &[u8; 32]) -> Result<V4LocalKeys, PasetoError> {
  let mut enc_mac = <Blake2bMac<U56> as KeyInit>::new_from_slice(key)?;
  enc_mac.update(ENCRYPTION_KEY_INFO);
  enc_mac.update(nonce);
  let enc_out = enc_mac.finalize_fixed();

  let mut auth_mac =
    <Blake2bMac<blake2::digest::consts::U32> as KeyInit>::new_from_slice(key)?;
  auth_mac.update(AUTH_KEY_INFO);
  auth_mac.update(nonce);
  let auth_out = auth_mac.finalize_fixed();

  let mut encryption_key = [0u8; 32];
  encryption_key.copy_from_slice(&enc_out[..32]);
  let mut counter_nonce = [0u8; 24];
  counter_nonce.copy_from_slice(&enc_out[32..56]);
  let mut authentication_key = [0u8; 32];
  authentication_key.copy_from_slice(&auth_out[..32]);

  Ok(V4LocalKeys {
    encryption_key,
    counter_nonce,
    authentication_key,
  })
}
