mod asymmetric_key;
mod local_key;
mod nonce;
mod raw_key;

pub use asymmetric_key::{PrivateKeyV3, PrivateKeyV4, PublicKeyV3, PublicKeyV4};
pub use local_key::{LocalKeyV3, LocalKeyV4};
pub use nonce::LocalNonce;
