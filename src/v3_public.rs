use crate::common::{assemble_public_body, base64_encode, split_public_body, PreAuthenticationEncoding};
use crate::header::Header;
use crate::key::{PrivateKeyV3, PublicKeyV3};
use crate::{Footer, ImplicitAssertion, PasetoError, Paseto, Public, V3};
use p384::ecdsa::signature::{DigestSigner, DigestVerifier};
use p384::ecdsa::{Signature, SigningKey, VerifyingKey};
use p384::elliptic_curve::sec1::ToEncodedPoint;
use sha2::Digest;

const SIGNATURE_SIZE: usize = 96;

impl<'a> Paseto<'a, V3, Public> {
  /// Signs the builder's payload, producing a `v3.public` token.
  ///
  /// The signer's compressed public point is folded into the pre-authentication encoding
  /// ahead of the header, so a signature never verifies against a different keypair's point.
  pub fn try_sign(&self, key: &PrivateKeyV3) -> Result<String, PasetoError> {
    let footer = self.footer.unwrap_or_default();
    let implicit_assertion = self.implicit_assertion.unwrap_or_default();

    let key_bytes: &[u8; 48] = &key.0;
    let signing_key = SigningKey::from_bytes(key_bytes.into())?;
    let compressed_public_key = VerifyingKey::from(&signing_key).to_encoded_point(true);

    let pae = PreAuthenticationEncoding::parse(&[
      compressed_public_key.as_ref(),
      &self.header,
      &self.payload,
      footer.as_ref(),
      implicit_assertion.as_ref(),
    ]);
    let mut digest = sha2::Sha384::new();
    digest.update(pae.as_ref());
    let signature: Signature = signing_key.try_sign_digest(digest)?;

    let body = assemble_public_body(&self.payload, &signature.to_bytes());
    Ok(self.format_token(&base64_encode(&body)))
  }

  /// Verifies a `v3.public` token against the given public key, returning the signed message.
  pub fn try_verify(
    token: &'a str,
    public_key: &PublicKeyV3,
    footer: impl Into<Option<Footer<'a>>>,
    implicit_assertion: impl Into<Option<ImplicitAssertion<'a>>>,
  ) -> Result<String, PasetoError> {
    let footer = footer.into();
    let implicit_assertion = implicit_assertion.into().unwrap_or_default();

    let body = Self::parse_raw_token(token, footer)?;
    let (message, signature_bytes) = split_public_body(&body, SIGNATURE_SIZE)?;

    let verifying_key = VerifyingKey::from_sec1_bytes(public_key.0.as_ref())?;
    let signature = Signature::try_from(signature_bytes).map_err(|_| PasetoError::AuthFailed)?;

    let pae = PreAuthenticationEncoding::parse(&[
      public_key.0.as_ref(),
      &Header::<V3, Public>::default(),
      message,
      footer.unwrap_or_default().as_ref(),
      implicit_assertion.as_ref(),
    ]);
    let mut digest = sha2::Sha384::new();
    digest.update(pae.as_ref());
    verifying_key.verify_digest(digest, &signature).map_err(|_| PasetoError::AuthFailed)?;

    Ok(String::from_utf8(message.to_vec())?)
  }
}
