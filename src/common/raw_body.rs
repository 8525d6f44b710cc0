use crate::PasetoError;

/// Assembles a `local` token body: `nonce || ciphertext || tag`, preallocated to its final size.
pub(crate) fn assemble_local_body(nonce: &[u8], ciphertext: &[u8], tag: &[u8]) -> Vec<u8> {
  let mut body = Vec::with_capacity(nonce.len() + ciphertext.len() + tag.len());
  body.extend_from_slice(nonce);
  body.extend_from_slice(ciphertext);
  body.extend_from_slice(tag);
  body
}

/// Splits a decoded `local` body into `(nonce, ciphertext, tag)`.
///
/// Bounds are derived from the caller-supplied, version-specific `nonce_size`/`tag_size` by
/// name — never from incidental equality between two versions' constants, which would make
/// one version's decoder silently correct for the wrong reason.
pub(crate) fn split_local_body<'a>(
  body: &'a [u8],
  nonce_size: usize,
  tag_size: usize,
) -> Result<(&'a [u8], &'a [u8], &'a [u8]), PasetoError> {
  if body.len() < nonce_size + tag_size {
    return Err(PasetoError::BadLayout);
  }
  let ciphertext_end = body.len() - tag_size;
  let nonce = body.get(..nonce_size).ok_or(PasetoError::BadLayout)?;
  let ciphertext = body.get(nonce_size..ciphertext_end).ok_or(PasetoError::BadLayout)?;
  let tag = body.get(ciphertext_end..).ok_or(PasetoError::BadLayout)?;
  Ok((nonce, ciphertext, tag))
}

/// Assembles a `public` token body: `message || signature`.
pub(crate) fn assemble_public_body(message: &[u8], signature: &[u8]) -> Vec<u8> {
  let mut body = Vec::with_capacity(message.len() + signature.len());
  body.extend_from_slice(message);
  body.extend_from_slice(signature);
  body
}

/// Splits a decoded `public` body into `(message, signature)`.
pub(crate) fn split_public_body(body: &[u8], signature_size: usize) -> Result<(&[u8], &[u8]), PasetoError> {
  if body.len() < signature_size {
    return Err(PasetoError::BadLayout);
  }
  let message_len = body.len() - signature_size;
  let message = body.get(..message_len).ok_or(PasetoError::BadLayout)?;
  let signature = body.get(message_len..).ok_or(PasetoError::BadLayout)?;
  Ok((message, signature))
}
