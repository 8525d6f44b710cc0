use std::fmt;
use std::fmt::Display;

/// Used by marker types to identify which PASETO protocol version a token belongs to.
pub trait VersionTrait: Display + Default + AsRef<str> {}

/// V3 and V4 both bind an [`crate::ImplicitAssertion`] into the pre-authentication
/// encoding; earlier PASETO versions don't.
pub trait ImplicitAssertionCapable: VersionTrait {}

/// ## Version 3: NIST Modern
///
/// * `v3.local`: AES-256-CTR + HMAC-SHA384 (Encrypt-then-MAC), keys split via HKDF-SHA384.
/// * `v3.public`: ECDSA over NIST P-384 with SHA-384, using RFC 6979 deterministic nonces.
///   The signer's compressed public key is folded into the pre-authentication encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct V3;

impl VersionTrait for V3 {}
impl ImplicitAssertionCapable for V3 {}
impl AsRef<str> for V3 {
  fn as_ref(&self) -> &str {
    "v3"
  }
}
impl Display for V3 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "v3")
  }
}

/// ## Version 4: Sodium Modern
///
/// * `v4.local`: XChaCha20 + keyed BLAKE2b-MAC (Encrypt-then-MAC), keys split via BLAKE2b.
/// * `v4.public`: Ed25519.
#[derive(Debug, Clone, Copy, Default)]
pub struct V4;

impl VersionTrait for V4 {}
impl ImplicitAssertionCapable for V4 {}
impl AsRef<str> for V4 {
  fn as_ref(&self) -> &str {
    "v4"
  }
}
impl Display for V4 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "v4")
  }
}
