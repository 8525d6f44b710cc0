use aes::Aes256;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::XChaCha20;
use ctr::Ctr128BE;

type Aes256Ctr = Ctr128BE<Aes256>;

/// AES-256-CTR keystream XOR, used for both encryption and decryption of `v3.local` (the
/// cipher is its own inverse). `iv` is the 16-byte counter nonce split out of the HKDF output.
pub(crate) fn aes256_ctr_xor(key: &[u8; 32], iv: &[u8; 16], data: &[u8]) -> Vec<u8> {
  let mut buf = data.to_vec();
  let mut cipher = Aes256Ctr::new(key.into(), iv.into());
  cipher.apply_keystream(&mut buf);
  buf
}

/// XChaCha20 keystream XOR (unauthenticated; the keyed-BLAKE2b tag provides integrity),
/// used for both encryption and decryption of `v4.local`.
pub(crate) fn xchacha20_xor(key: &[u8; 32], nonce: &[u8; 24], data: &[u8]) -> Vec<u8> {
  let mut buf = data.to_vec();
  let mut cipher = XChaCha20::new(key.into(), nonce.into());
  cipher.apply_keystream(&mut buf);
  buf
}
