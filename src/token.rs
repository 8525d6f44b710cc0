use crate::header::Header;
use crate::{Footer, ImplicitAssertion, ImplicitAssertionCapable, Payload, PasetoError, PurposeTrait, VersionTrait};

/// Builds and parses PASETO tokens for a given `(Version, Purpose)` pair.
///
/// Given a [`Payload`], optional [`Footer`] and optional [`ImplicitAssertion`], this produces an
/// encrypted token (for the [`crate::Local`] purpose) or a signed one (for
/// [`crate::Public`]). See the version-specific `try_encrypt`/`try_decrypt`/`try_sign`/
/// `try_verify` inherent impls.
#[derive(Default, Copy, Clone)]
pub struct Paseto<'a, Version, Purpose>
where
  Version: VersionTrait,
  Purpose: PurposeTrait,
{
  pub(crate) header: Header<Version, Purpose>,
  pub(crate) payload: Payload<'a>,
  pub(crate) footer: Option<Footer<'a>>,
  pub(crate) implicit_assertion: Option<ImplicitAssertion<'a>>,
}

impl<'a, Version: VersionTrait, Purpose: PurposeTrait> Paseto<'a, Version, Purpose> {
  /// Starts building a token.
  pub fn builder() -> Self {
    Self::default()
  }

  /// Sets the payload (for `local`) or message (for `public`) to be protected.
  pub fn set_payload(mut self, payload: Payload<'a>) -> Self {
    self.payload = payload;
    self
  }

  /// Sets the optional footer, authenticated but transmitted unencrypted.
  pub fn set_footer(mut self, footer: Footer<'a>) -> Self {
    self.footer = Some(footer);
    self
  }

  pub(crate) fn format_token(&self, body_b64: &str) -> String {
    match self.footer {
      Some(f) if !f.as_ref().is_empty() => format!("{}{}.{}", self.header, body_b64, f.encode()),
      _ => format!("{}{}", self.header, body_b64),
    }
  }

  /// Splits a raw token string into its decoded body, after validating the version/purpose
  /// prefix and, if one is expected, the footer.
  pub(crate) fn parse_raw_token(raw_token: &'a str, expected_footer: Option<Footer<'a>>) -> Result<Vec<u8>, PasetoError> {
    if raw_token.is_empty() {
      return Err(PasetoError::TokenEmpty);
    }

    let parts: Vec<&str> = raw_token.split('.').collect();
    if !(3..=4).contains(&parts.len()) {
      return Err(PasetoError::BadPrefix);
    }

    let expected_header = Header::<Version, Purpose>::default();
    let found_prefix = format!("{}.{}.", parts[0], parts[1]);
    if found_prefix != expected_header.as_ref() {
      return Err(PasetoError::BadPrefix);
    }

    let expected = expected_footer.unwrap_or_default();
    match parts.len() {
      4 => {
        let found_footer_bytes = Footer::decode_b64url(parts[3])?;
        if !expected.matches(&found_footer_bytes) {
          return Err(PasetoError::FooterMismatch);
        }
      }
      _ if !expected.as_ref().is_empty() => return Err(PasetoError::FooterMissing),
      _ => {}
    }

    crate::common::base64_decode(parts[2])
  }
}

impl<'a, Version, Purpose> Paseto<'a, Version, Purpose>
where
  Version: ImplicitAssertionCapable,
  Purpose: PurposeTrait,
{
  /// Sets the optional implicit assertion, authenticated but never transmitted.
  pub fn set_implicit_assertion(mut self, implicit_assertion: ImplicitAssertion<'a>) -> Self {
    self.implicit_assertion = Some(implicit_assertion);
    self
  }
}
