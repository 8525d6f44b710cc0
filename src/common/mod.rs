mod cipher;
mod constant_time;
mod kdf;
mod pae;
mod raw_body;
mod tag;

pub(crate) use cipher::{aes256_ctr_xor, xchacha20_xor};
pub(crate) use constant_time::constant_time_eq;
pub(crate) use kdf::{v3_local_keys, v4_local_keys};
pub(crate) use pae::PreAuthenticationEncoding;
pub(crate) use raw_body::{assemble_local_body, assemble_public_body, split_local_body, split_public_body};
pub(crate) use tag::{blake2b_mac, hmac_sha384};

use base64::prelude::*;
use base64::Engine;
use crate::PasetoError;

pub(crate) fn base64_encode(bytes: &[u8]) -> String {
  BASE64_URL_SAFE_NO_PAD.encode(bytes)
}

pub(crate) fn base64_decode(s: &str) -> Result<Vec<u8>, PasetoError> {
  Ok(BASE64_URL_SAFE_NO_PAD.decode(s)?)
}

/// Encryption/authentication key derivation info strings, fixed by the wire format.
/// Concatenated directly with the raw nonce, with no separator and no length prefix.
pub(crate) const ENCRYPTION_KEY_INFO: &[u8] = b"paseto-encryption-key";
pub(crate) const AUTH_KEY_INFO: &[u8] = b"paseto-auth-key-for-aead";
