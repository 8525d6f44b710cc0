use crate::common::{
  aes256_ctr_xor, assemble_local_body, base64_encode, constant_time_eq, hmac_sha384, split_local_body, v3_local_keys,
  PreAuthenticationEncoding,
};
use crate::header::Header;
use crate::key::{LocalKeyV3, LocalNonce};
use crate::{Footer, ImplicitAssertion, Local, PasetoError, Paseto, V3};
use std::str;

const NONCE_SIZE: usize = 32;
const TAG_SIZE: usize = 48;

impl<'a> Paseto<'a, V3, Local> {
  /// Encrypts the builder's payload into a `v3.local` token.
  pub fn try_encrypt(&self, key: &LocalKeyV3, nonce: &LocalNonce) -> Result<String, PasetoError> {
    let footer = self.footer.unwrap_or_default();
    let implicit_assertion = self.implicit_assertion.unwrap_or_default();

    let nonce_bytes = nonce.as_bytes();
    let keys = v3_local_keys(key.as_bytes(), nonce_bytes)?;

    let ciphertext = aes256_ctr_xor(&keys.encryption_key, &keys.counter_nonce, &self.payload);

    let pae = PreAuthenticationEncoding::parse(&[
      &self.header,
      nonce_bytes,
      &ciphertext,
      footer.as_ref(),
      implicit_assertion.as_ref(),
    ]);
    let tag = hmac_sha384(&keys.authentication_key, pae.as_ref())?;

    let body = assemble_local_body(nonce_bytes, &ciphertext, &tag);
    Ok(self.format_token(&base64_encode(&body)))
  }

  /// Decrypts a `v3.local` token, returning the original payload.
  pub fn try_decrypt(
    token: &'a str,
    key: &LocalKeyV3,
    footer: impl Into<Option<Footer<'a>>>,
    implicit_assertion: impl Into<Option<ImplicitAssertion<'a>>>,
  ) -> Result<String, PasetoError> {
    let footer = footer.into();
    let implicit_assertion = implicit_assertion.into().unwrap_or_default();

    let body = Self::parse_raw_token(token, footer)?;
    let (nonce_bytes, ciphertext, tag) = split_local_body(&body, NONCE_SIZE, TAG_SIZE)?;
    let nonce: [u8; NONCE_SIZE] = nonce_bytes.try_into().map_err(|_| PasetoError::BadLayout)?;

    let keys = v3_local_keys(key.as_bytes(), &nonce)?;

    let pae = PreAuthenticationEncoding::parse(&[
      &Header::<V3, Local>::default(),
      &nonce,
      ciphertext,
      footer.unwrap_or_default().as_ref(),
      implicit_assertion.as_ref(),
    ]);
    let expected_tag = hmac_sha384(&keys.authentication_key, pae.as_ref())?;
    if !constant_time_eq(tag, &expected_tag) {
      return Err(PasetoError::AuthFailed);
    }

    let plaintext = aes256_ctr_xor(&keys.encryption_key, &keys.counter_nonce, ciphertext);
    Ok(str::from_utf8(&plaintext)?.to_owned())
  }
}
