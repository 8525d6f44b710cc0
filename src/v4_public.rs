use crate::common::{assemble_public_body, base64_encode, split_public_body, PreAuthenticationEncoding};
use crate::header::Header;
use crate::key::{PrivateKeyV4, PublicKeyV4};
use crate::{Footer, ImplicitAssertion, PasetoError, Paseto, Public, V4};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

const SIGNATURE_SIZE: usize = ed25519_dalek::SIGNATURE_LENGTH;

impl<'a> Paseto<'a, V4, Public> {
  /// Signs the builder's payload, producing a `v4.public` token.
  pub fn try_sign(&self, key: &PrivateKeyV4) -> Result<String, PasetoError> {
    let footer = self.footer.unwrap_or_default();
    let implicit_assertion = self.implicit_assertion.unwrap_or_default();

    let keypair_bytes: &[u8; 64] = key.0.as_ref().try_into()?;
    let signing_key = SigningKey::from_keypair_bytes(keypair_bytes)?;

    let pae = PreAuthenticationEncoding::parse(&[
      &self.header,
      &self.payload,
      footer.as_ref(),
      implicit_assertion.as_ref(),
    ]);
    let signature = signing_key.sign(pae.as_ref());

    let body = assemble_public_body(&self.payload, &signature.to_bytes());
    Ok(self.format_token(&base64_encode(&body)))
  }

  /// Verifies a `v4.public` token against the given public key, returning the signed message.
  pub fn try_verify(
    token: &'a str,
    public_key: &PublicKeyV4,
    footer: impl Into<Option<Footer<'a>>>,
    implicit_assertion: impl Into<Option<ImplicitAssertion<'a>>>,
  ) -> Result<String, PasetoError> {
    let footer = footer.into();
    let implicit_assertion = implicit_assertion.into().unwrap_or_default();

    let body = Self::parse_raw_token(token, footer)?;
    let (message, signature_bytes) = split_public_body(&body, SIGNATURE_SIZE)?;

    let key_bytes: &[u8; 32] = public_key.0.as_ref().try_into()?;
    let verifying_key = VerifyingKey::from_bytes(key_bytes)?;
    let signature = Signature::try_from(signature_bytes).map_err(|_| PasetoError::AuthFailed)?;

    let pae = PreAuthenticationEncoding::parse(&[
      &Header::<V4, Public>::default(),
      message,
      footer.unwrap_or_default().as_ref(),
      implicit_assertion.as_ref(),
    ]);
    verifying_key.verify(pae.as_ref(), &signature).map_err(|_| PasetoError::AuthFailed)?;

    Ok(String::from_utf8(message.to_vec())?)
  }
}
