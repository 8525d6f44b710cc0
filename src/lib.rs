//! Low-level PASETO v3 and v4 primitives.
//!
//! This crate implements the `local` (symmetric AEAD) and `public` (asymmetric signature)
//! constructions for protocol versions 3 (`v3.local` / `v3.public`) and 4 (`v4.local` /
//! `v4.public`). It does not model claims, registered/reserved JSON fields, or PASERK key
//! wrapping; callers who need those build them on top of [`Paseto`].
//!
//! ```
//! use paseto_primitives::{LocalKeyV4, LocalNonce, Paseto, Payload, V4, Local};
//!
//! let key = LocalKeyV4::from_bytes(&[0u8; 32])?;
//! let nonce = LocalNonce::from_bytes(&[0u8; 32])?;
//!
//! let token = Paseto::<V4, Local>::builder()
//!   .set_payload(Payload::from("hello world"))
//!   .try_encrypt(&key, &nonce)?;
//!
//! let decrypted = Paseto::<V4, Local>::try_decrypt(&token, &key, None, None)?;
//! assert_eq!(decrypted, "hello world");
//! # Ok::<(), paseto_primitives::PasetoError>(())
//! ```
//!
//! Keys intended for real use should be drawn from an entropy source via
//! [`LocalKeyV4::generate`] rather than hardcoded, as shown here only for a self-contained
//! example.

mod common;
mod error;
mod footer;
mod header;
mod implicit_assertion;
mod key;
mod payload;
mod purpose;
mod token;
mod v3_local;
mod v3_public;
mod v4_local;
mod v4_public;
#[cfg(feature = "v4x")]
mod v4x;
mod version;

pub use error::PasetoError;
pub use footer::Footer;
pub use implicit_assertion::ImplicitAssertion;
pub use key::{LocalKeyV3, LocalKeyV4, LocalNonce, PrivateKeyV3, PrivateKeyV4, PublicKeyV3, PublicKeyV4};
pub use payload::Payload;
pub use purpose::{Local, Public, PurposeTrait};
pub use token::Paseto;
pub use version::{ImplicitAssertionCapable, VersionTrait, V3, V4};

#[cfg(feature = "v4x")]
pub use v4x::LocalKeyV4X;
