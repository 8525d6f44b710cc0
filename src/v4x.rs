//! An experimental, non-standard secondary construction for `local` tokens.
//!
//! This is not part of PASETO. It keeps the same BLAKE2b-56 key-splitting step as `v4.local`
//! for the encryption key and cipher sub-nonce, but derives the authentication key by running
//! XChaCha20 itself over a zero block at counter 0 (the real payload is then encrypted starting
//! at counter 1), and authenticates with keyed BLAKE3 instead of BLAKE2b. Reachable only behind
//! the `v4x` feature; nothing in the standard `v3`/`v4` code paths depends on it.
use crate::common::{assemble_local_body, base64_encode, base64_decode, constant_time_eq, split_local_body, v4_local_keys};
use crate::key::{LocalKeyV4, LocalNonce};
use crate::PasetoError;
use chacha20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use chacha20::XChaCha20;
use std::str;

const HEADER: &str = "v4x.local.";
const NONCE_SIZE: usize = 32;
const TAG_SIZE: usize = 32;
const BLOCK_SIZE: u64 = 64;

fn derive_auth_key(encryption_key: &[u8; 32], counter_nonce: &[u8; 24]) -> [u8; 32] {
  let mut cipher = XChaCha20::new(encryption_key.into(), counter_nonce.into());
  let mut auth_key = [0u8; 32];
  cipher.apply_keystream(&mut auth_key);
  auth_key
}

fn xor_from_counter_one(encryption_key: &[u8; 32], counter_nonce: &[u8; 24], data: &[u8]) -> Vec<u8> {
  let mut cipher = XChaCha20::new(encryption_key.into(), counter_nonce.into());
  cipher.seek(BLOCK_SIZE);
  let mut out = data.to_vec();
  cipher.apply_keystream(&mut out);
  out
}

fn blake3_mac(key: &[u8; 32], data: &[u8]) -> [u8; 32] {
  *blake3::keyed_hash(key, data).as_bytes()
}

/// A 32-byte symmetric key for the `v4x` construction. Distinct from [`LocalKeyV4`] only at
/// the type level, so a standard v4 key can never be fed into this non-standard cipher by
/// accident; the underlying bytes are handled identically.
pub struct LocalKeyV4X(LocalKeyV4);

impl LocalKeyV4X {
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, PasetoError> {
    Ok(Self(LocalKeyV4::from_bytes(bytes)?))
  }
}

/// Encrypts `payload` into a `v4x.local.` token.
pub fn encrypt(
  payload: &[u8],
  key: &LocalKeyV4X,
  nonce: &LocalNonce,
  footer: Option<&[u8]>,
  implicit_assertion: Option<&[u8]>,
) -> Result<String, PasetoError> {
  let footer = footer.unwrap_or(&[]);
  let implicit_assertion = implicit_assertion.unwrap_or(&[]);

  let nonce_bytes = nonce.as_bytes();
  let keys = v4_local_keys(key.0.as_bytes(), nonce_bytes)?;
  let auth_key = derive_auth_key(&keys.encryption_key, &keys.counter_nonce);
  let ciphertext = xor_from_counter_one(&keys.encryption_key, &keys.counter_nonce, payload);

  let pae = crate::common::PreAuthenticationEncoding::parse(&[
    HEADER.as_bytes(),
    nonce_bytes,
    &ciphertext,
    footer,
    implicit_assertion,
  ]);
  let tag = blake3_mac(&auth_key, pae.as_ref());

  let body = assemble_local_body(nonce_bytes, &ciphertext, &tag);
  Ok(format!("{HEADER}{}", base64_encode(&body)))
}

/// Decrypts a `v4x.local.` token, returning the original payload.
pub fn decrypt(
  token: &str,
  key: &LocalKeyV4X,
  footer: Option<&[u8]>,
  implicit_assertion: Option<&[u8]>,
) -> Result<String, PasetoError> {
  let footer = footer.unwrap_or(&[]);
  let implicit_assertion = implicit_assertion.unwrap_or(&[]);

  let rest = token.strip_prefix(HEADER).ok_or(PasetoError::BadPrefix)?;
  let body = base64_decode(rest)?;
  let (nonce_bytes, ciphertext, tag) = split_local_body(&body, NONCE_SIZE, TAG_SIZE)?;
  let nonce: [u8; NONCE_SIZE] = nonce_bytes.try_into().map_err(|_| PasetoError::BadLayout)?;

  let keys = v4_local_keys(key.0.as_bytes(), &nonce)?;
  let auth_key = derive_auth_key(&keys.encryption_key, &keys.counter_nonce);

  let pae = crate::common::PreAuthenticationEncoding::parse(&[
    HEADER.as_bytes(),
    &nonce,
    ciphertext,
    footer,
    implicit_assertion,
  ]);
  let expected_tag = blake3_mac(&auth_key, pae.as_ref());
  if !constant_time_eq(tag, &expected_tag) {
    return Err(PasetoError::AuthFailed);
  }

  let plaintext = xor_from_counter_one(&keys.encryption_key, &keys.counter_nonce, ciphertext);
  Ok(str::from_utf8(&plaintext)?.to_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trips_payload() {
    let key = LocalKeyV4X::from_bytes(&[9u8; 32]).unwrap();
    let nonce = LocalNonce::from_bytes(&[1u8; 32]).unwrap();
    let token = encrypt(b"hello x", &key, &nonce, None, None).unwrap();
    assert!(token.starts_with(HEADER));
    let plaintext = decrypt(&token, &key, None, None).unwrap();
    assert_eq!(plaintext, "hello x");
  }

  #[test]
  fn tampered_ciphertext_fails() {
    let key = LocalKeyV4X::from_bytes(&[9u8; 32]).unwrap();
    let nonce = LocalNonce::from_bytes(&[1u8; 32]).unwrap();
    let mut token = encrypt(b"hello x", &key, &nonce, None, None).unwrap();
    token.push('A');
    assert!(decrypt(&token, &key, None, None).is_err());
  }
}
