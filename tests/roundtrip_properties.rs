use paseto_primitives::{
  Footer, ImplicitAssertion, Local, LocalKeyV3, LocalKeyV4, LocalNonce, Paseto, Payload, PrivateKeyV3, PrivateKeyV4,
  Public, PublicKeyV3, PublicKeyV4, V3, V4,
};
use proptest::prelude::*;

fn v3_local_key() -> LocalKeyV3 {
  LocalKeyV3::from_bytes(&[0x42u8; 32]).unwrap()
}

fn v4_local_key() -> LocalKeyV4 {
  LocalKeyV4::from_bytes(&[0x24u8; 32]).unwrap()
}

proptest! {
  #[test]
  fn v3_local_round_trips(payload in "\\PC{0,256}", footer in "\\PC{0,64}", assertion in "\\PC{0,64}") {
    let key = v3_local_key();
    let nonce = LocalNonce::from_bytes(&[0x11u8; 32]).unwrap();
    let token = Paseto::<V3, Local>::builder()
      .set_payload(Payload::from(payload.as_str()))
      .set_footer(Footer::from(footer.as_str()))
      .set_implicit_assertion(ImplicitAssertion::from(assertion.as_str()))
      .try_encrypt(&key, &nonce)
      .unwrap();

    let decrypted = Paseto::<V3, Local>::try_decrypt(
      &token,
      &key,
      Footer::from(footer.as_str()),
      ImplicitAssertion::from(assertion.as_str()),
    ).unwrap();
    prop_assert_eq!(decrypted, payload);
  }

  #[test]
  fn v4_local_round_trips(payload in "\\PC{0,256}", footer in "\\PC{0,64}", assertion in "\\PC{0,64}") {
    let key = v4_local_key();
    let nonce = LocalNonce::from_bytes(&[0x22u8; 32]).unwrap();
    let token = Paseto::<V4, Local>::builder()
      .set_payload(Payload::from(payload.as_str()))
      .set_footer(Footer::from(footer.as_str()))
      .set_implicit_assertion(ImplicitAssertion::from(assertion.as_str()))
      .try_encrypt(&key, &nonce)
      .unwrap();

    let decrypted = Paseto::<V4, Local>::try_decrypt(
      &token,
      &key,
      Footer::from(footer.as_str()),
      ImplicitAssertion::from(assertion.as_str()),
    ).unwrap();
    prop_assert_eq!(decrypted, payload);
  }

  #[test]
  fn distinct_nonces_never_produce_the_same_v4_local_token(payload in "\\PC{1,64}") {
    let key = v4_local_key();
    let token_a = Paseto::<V4, Local>::builder()
      .set_payload(Payload::from(payload.as_str()))
      .try_encrypt(&key, &LocalNonce::from_bytes(&[0x01u8; 32]).unwrap())
      .unwrap();
    let token_b = Paseto::<V4, Local>::builder()
      .set_payload(Payload::from(payload.as_str()))
      .try_encrypt(&key, &LocalNonce::from_bytes(&[0x02u8; 32]).unwrap())
      .unwrap();
    prop_assert_ne!(token_a, token_b);
  }

  #[test]
  fn a_flipped_nonce_byte_breaks_v4_local_decryption(payload in "\\PC{1,64}") {
    let key = v4_local_key();
    let nonce = LocalNonce::from_bytes(&[0x33u8; 32]).unwrap();
    let token = Paseto::<V4, Local>::builder()
      .set_payload(Payload::from(payload.as_str()))
      .try_encrypt(&key, &nonce)
      .unwrap();

    // Flipping the first base64 character of the (always full 4-byte-group) nonce changes a
    // decoded byte unconditionally, unlike flipping the final, possibly slack-bit-padded group.
    let body_start = "v4.local.".len();
    let mut bytes = token.into_bytes();
    bytes[body_start] = if bytes[body_start] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(bytes).unwrap();

    prop_assert!(Paseto::<V4, Local>::try_decrypt(&tampered, &key, None, None).is_err());
  }

  #[test]
  fn mismatched_footer_is_rejected_on_decrypt(payload in "\\PC{1,32}", correct in "\\PC{1,16}", wrong in "\\PC{1,16}") {
    prop_assume!(correct != wrong);
    let key = v4_local_key();
    let nonce = LocalNonce::from_bytes(&[0x44u8; 32]).unwrap();
    let token = Paseto::<V4, Local>::builder()
      .set_payload(Payload::from(payload.as_str()))
      .set_footer(Footer::from(correct.as_str()))
      .try_encrypt(&key, &nonce)
      .unwrap();

    let result = Paseto::<V4, Local>::try_decrypt(&token, &key, Footer::from(wrong.as_str()), None);
    prop_assert!(result.is_err());
  }
}

#[test]
fn v3_public_sign_is_deterministic() {
  let private_key = PrivateKeyV3::from_bytes(&[0x07u8; 48]).unwrap();
  let payload = Payload::from("a message to sign");

  let token_a = Paseto::<paseto_primitives::V3, Public>::builder()
    .set_payload(payload)
    .try_sign(&private_key)
    .unwrap();
  let token_b = Paseto::<paseto_primitives::V3, Public>::builder()
    .set_payload(payload)
    .try_sign(&private_key)
    .unwrap();

  assert_eq!(token_a, token_b);
}

#[test]
fn v3_public_round_trips() {
  use p384::ecdsa::SigningKey;
  use p384::elliptic_curve::sec1::ToEncodedPoint;

  let signing_key = SigningKey::from_bytes(&[0x09u8; 48].into()).unwrap();
  let verifying_point = p384::ecdsa::VerifyingKey::from(&signing_key).to_encoded_point(true);

  let private_key = PrivateKeyV3::from_bytes(&[0x09u8; 48]).unwrap();
  let public_key = PublicKeyV3::from_bytes(verifying_point.as_ref()).unwrap();

  let payload = Payload::from("a message to sign");
  let token = Paseto::<paseto_primitives::V3, Public>::builder()
    .set_payload(payload)
    .try_sign(&private_key)
    .unwrap();

  let verified = Paseto::<paseto_primitives::V3, Public>::try_verify(&token, &public_key, None, None).unwrap();
  assert_eq!(verified, "a message to sign");
}

#[test]
fn v4_public_sign_is_deterministic() {
  let mut keypair_bytes = [0u8; 64];
  keypair_bytes[..32].copy_from_slice(&[0x05u8; 32]);
  let signing_key = ed25519_dalek::SigningKey::from_bytes(&[0x05u8; 32]);
  keypair_bytes[32..].copy_from_slice(signing_key.verifying_key().as_bytes());

  let private_key = PrivateKeyV4::from_bytes(&keypair_bytes).unwrap();
  let payload = Payload::from("a message to sign");

  let token_a = Paseto::<V4, Public>::builder().set_payload(payload).try_sign(&private_key).unwrap();
  let token_b = Paseto::<V4, Public>::builder().set_payload(payload).try_sign(&private_key).unwrap();
  assert_eq!(token_a, token_b);
}

#[test]
fn v4_public_round_trips() {
  let signing_key = ed25519_dalek::SigningKey::from_bytes(&[0x06u8; 32]);
  let mut keypair_bytes = [0u8; 64];
  keypair_bytes[..32].copy_from_slice(&[0x06u8; 32]);
  keypair_bytes[32..].copy_from_slice(signing_key.verifying_key().as_bytes());

  let private_key = PrivateKeyV4::from_bytes(&keypair_bytes).unwrap();
  let public_key = PublicKeyV4::from_bytes(signing_key.verifying_key().as_bytes()).unwrap();

  let payload = Payload::from("a message to sign");
  let token = Paseto::<V4, Public>::builder().set_payload(payload).try_sign(&private_key).unwrap();

  let verified = Paseto::<V4, Public>::try_verify(&token, &public_key, None, None).unwrap();
  assert_eq!(verified, "a message to sign");
}
