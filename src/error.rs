use thiserror::Error;

/// Every failure mode a PASETO primitive can surface.
///
/// Verification failures (`AuthFailed`, `FooterMismatch`, `BadLayout`) are
/// always reached only after the constant-time tag/signature comparison has
/// run to completion; the variant itself is for caller-side diagnostics, not
/// a timing side channel.
#[derive(Debug, Error)]
pub enum PasetoError {
  #[error("key is missing")]
  KeyMissing,

  #[error("key has the wrong length")]
  KeyLength,

  #[error("key is the right length but not in a valid format")]
  InvalidKey,

  #[error("seed is shorter than 32 bytes")]
  SeedTooShort,

  #[error("failed to read from the entropy source")]
  EntropyFailure,

  #[error("token is empty")]
  TokenEmpty,

  #[error("token is missing its version/purpose prefix, or it doesn't match")]
  BadPrefix,

  #[error("base64url decoding failed")]
  BadEncoding {
    #[from]
    source: base64::DecodeError,
  },

  #[error("token body is shorter than its required fields")]
  BadLayout,

  #[error("a footer was expected but the token carries none")]
  FooterMissing,

  #[error("the token's footer does not match the expected footer")]
  FooterMismatch,

  #[error("authentication failed: MAC mismatch or invalid signature")]
  AuthFailed,

  #[error("a cryptographic primitive failed to initialize")]
  InternalCrypto,

  #[error("decrypted payload was not valid UTF-8")]
  Utf8 {
    #[from]
    source: std::str::Utf8Error,
  },

  #[error("decrypted payload was not valid UTF-8")]
  FromUtf8 {
    #[from]
    source: std::string::FromUtf8Error,
  },

  // p384::ecdsa::Error and ed25519_dalek::SignatureError are both aliases of the same
  // underlying `signature::Error` type, so they share a single `#[from]` variant here
  // (two `#[from]` impls for the same concrete type would conflict).
  #[error("signature operation failed")]
  Signature {
    #[from]
    source: p384::ecdsa::Error,
  },

  #[error("keyed hash initialization failed")]
  InvalidMacKeyLength {
    #[from]
    source: blake2::digest::InvalidLength,
  },

  #[error("a cryptographic primitive failed to initialize")]
  Unspecified {
    #[from]
    source: ring::error::Unspecified,
  },

  #[error("a slice conversion failed")]
  TryFromSlice {
    #[from]
    source: std::array::TryFromSliceError,
  },
}
