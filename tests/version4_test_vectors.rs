use anyhow::Result;
use paseto_primitives::{Footer, Local, LocalKeyV4, LocalNonce, Paseto, Payload, PrivateKeyV4, Public, PublicKeyV4, V4};

const SHARED_KEY_HEX: &str = "707172737475767778797a7b7c7d7e7f808182838485868788898a8b8c8d8e8f";

#[test]
fn test_4_e_1_zero_nonce_empty_footer() -> Result<()> {
  let key = LocalKeyV4::from_bytes(&hex::decode(SHARED_KEY_HEX)?)?;
  let nonce = LocalNonce::from_bytes(&[0u8; 32])?;
  let payload = r#"{"data":"this is a secret message","exp":"2022-01-01T00:00:00+00:00"}"#;

  let token = Paseto::<V4, Local>::builder()
    .set_payload(Payload::from(payload))
    .try_encrypt(&key, &nonce)?;

  assert_eq!(
    token,
    "v4.local.AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAQAr68PS4AXe7If_ZgesdkUMvSwscFlAl1pk5HC0e8kApeaqMfGo_7OpBnwJOAbY9V7WU6abu74MmcUE8YWAiaArVI8XJ5hOb_4v9RmDkneN0S92dx0OW4pgy7omxgf3S8c3LlQg"
  );

  let decrypted = Paseto::<V4, Local>::try_decrypt(&token, &key, None, None)?;
  assert_eq!(decrypted, payload);
  Ok(())
}

#[test]
fn test_4_s_2_with_footer() -> Result<()> {
  let private_key = PrivateKeyV4::from_bytes(&hex::decode(
    "b4cbfb43df4ce210727d953e4a713307fa19bb7d9f85041438d9e11b942a37741eb9dbbbbc047c03fd70604e0071f0987e16b28b757225c11f00415d0e20b1a2",
  )?)?;
  let public_key = PublicKeyV4::from_bytes(&hex::decode(
    "1eb9dbbbbc047c03fd70604e0071f0987e16b28b757225c11f00415d0e20b1a2",
  )?)?;

  let payload = r#"{"data":"this is a signed message","exp":"2022-01-01T00:00:00+00:00"}"#;
  let footer = r#"{"kid":"zVhMiPBP9fRf2snEcT7gFTioeA9COcNy9DfgL1W60haN"}"#;

  let token = Paseto::<V4, Public>::builder()
    .set_payload(Payload::from(payload))
    .set_footer(Footer::from(footer))
    .try_sign(&private_key)?;

  assert_eq!(
    token,
    "v4.public.eyJkYXRhIjoidGhpcyBpcyBhIHNpZ25lZCBtZXNzYWdlIiwiZXhwIjoiMjAyMi0wMS0wMVQwMDowMDowMCswMDowMCJ9v3Jt8mx_TdM2ceTGoqwrh4yDFn0XsHvvV_D0DtwQxVrJEBMl0F2caAdgnpKlt4p7xBnx1HcO-SPo8FPp214HDw.eyJraWQiOiJ6VmhNaVBCUDlmUmYyc25FY1Q3Z0ZUaW9lQTlDT2NOeTlEZmdMMVc2MGhhTiJ9"
  );

  let verified = Paseto::<V4, Public>::try_verify(&token, &public_key, Footer::from(footer), None)?;
  assert_eq!(verified, payload);
  Ok(())
}

#[test]
fn wrong_footer_is_rejected() -> Result<()> {
  let key = LocalKeyV4::from_bytes(&hex::decode(SHARED_KEY_HEX)?)?;
  let nonce = LocalNonce::from_bytes(&[0u8; 32])?;
  let token = Paseto::<V4, Local>::builder()
    .set_payload(Payload::from("hello"))
    .set_footer(Footer::from("expected"))
    .try_encrypt(&key, &nonce)?;

  let result = Paseto::<V4, Local>::try_decrypt(&token, &key, Footer::from("wrong"), None);
  assert!(result.is_err());
  Ok(())
}
