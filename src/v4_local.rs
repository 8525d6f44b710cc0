use crate::common::{
  assemble_local_body, base64_encode, blake2b_mac, constant_time_eq, split_local_body, v4_local_keys,
  xchacha20_xor, PreAuthenticationEncoding,
};
use crate::header::Header;
use crate::key::{LocalKeyV4, LocalNonce};
use crate::{Footer, ImplicitAssertion, Local, PasetoError, Paseto, V4};
use std::str;

const NONCE_SIZE: usize = 32;
const TAG_SIZE: usize = 32;

impl<'a> Paseto<'a, V4, Local> {
  /// Encrypts the builder's payload into a `v4.local` token.
  pub fn try_encrypt(&self, key: &LocalKeyV4, nonce: &LocalNonce) -> Result<String, PasetoError> {
    let footer = self.footer.unwrap_or_default();
    let implicit_assertion = self.implicit_assertion.unwrap_or_default();

    let nonce_bytes = nonce.as_bytes();
    let keys = v4_local_keys(key.as_bytes(), nonce_bytes)?;

    let ciphertext = xchacha20_xor(&keys.encryption_key, &keys.counter_nonce, &self.payload);

    let pae = PreAuthenticationEncoding::parse(&[
      &self.header,
      nonce_bytes,
      &ciphertext,
      footer.as_ref(),
      implicit_assertion.as_ref(),
    ]);
    let tag = blake2b_mac(&keys.authentication_key, pae.as_ref())?;

    let body = assemble_local_body(nonce_bytes, &ciphertext, &tag);
    Ok(self.format_token(&base64_encode(&body)))
  }

  /// Decrypts a `v4.local` token, returning the original payload.
  ///
  /// Ciphertext bounds are derived from `NONCE_SIZE`/`TAG_SIZE` by name, not from the fact
  /// that both happen to equal 32 for this version.
  pub fn try_decrypt(
    token: &'a str,
    key: &LocalKeyV4,
    footer: impl Into<Option<Footer<'a>>>,
    implicit_assertion: impl Into<Option<ImplicitAssertion<'a>>>,
  ) -> Result<String, PasetoError> {
    let footer = footer.into();
    let implicit_assertion = implicit_assertion.into().unwrap_or_default();

    let body = Self::parse_raw_token(token, footer)?;
    let (nonce_bytes, ciphertext, tag) = split_local_body(&body, NONCE_SIZE, TAG_SIZE)?;
    let nonce: [u8; NONCE_SIZE] = nonce_bytes.try_into().map_err(|_| PasetoError::BadLayout)?;

    let keys = v4_local_keys(key.as_bytes(), &nonce)?;

    let pae = PreAuthenticationEncoding::parse(&[
      &Header::<V4, Local>::default(),
      &nonce,
      ciphertext,
      footer.unwrap_or_default().as_ref(),
      implicit_assertion.as_ref(),
    ]);
    let expected_tag = blake2b_mac(&keys.authentication_key, pae.as_ref())?;
    if !constant_time_eq(tag, &expected_tag) {
      return Err(PasetoError::AuthFailed);
    }

    let plaintext = xchacha20_xor(&keys.encryption_key, &keys.counter_nonce, ciphertext);
    Ok(str::from_utf8(&plaintext)?.to_owned())
  }
}
