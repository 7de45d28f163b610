//! Kyber implementation by PQClean: https://github.com/rustpq/pqcrypto
//!
//! PQClean draws its randomness from the system, so the RNG passed to these
//! implementations is not used.

use pqcrypto_kyber::{kyber1024, kyber512, kyber768};
use pqcrypto_traits::kem::{Ciphertext as _, PublicKey as _, SecretKey as _, SharedSecret as _};

use crate::bytearray::{ByteArray, SensitiveByteArray};
use crate::error::{KemError, KemResult};
use crate::traits::{CryptoComponent, Kem, Rng};
use crate::KeyPair;

/// Kyber512 KEM implementation
pub struct Kyber512;
/// Kyber768 KEM implementation
pub struct Kyber768;
/// Kyber1024 KEM implementation
pub struct Kyber1024;

impl CryptoComponent for Kyber512 {
    fn name() -> &'static str {
        "Kyber512"
    }
}

impl CryptoComponent for Kyber768 {
    fn name() -> &'static str {
        "Kyber768"
    }
}

impl CryptoComponent for Kyber1024 {
    fn name() -> &'static str {
        "Kyber1024"
    }
}

macro_rules! impl_kyber {
    ($kyber:ty, $module:ident, $sk:expr, $pk:expr, $ct:expr) => {
        impl Kem for $kyber {
            type SecretKey = SensitiveByteArray<[u8; $sk]>;
            type PubKey = [u8; $pk];
            type Ct = [u8; $ct];
            type Ss = SensitiveByteArray<[u8; 32]>;

            fn genkey<R: Rng>(_rng: &mut R) -> KemResult<KeyPair<Self::PubKey, Self::SecretKey>> {
                let (pk, sk) = $module::keypair();
                Ok(KeyPair {
                    public: Self::PubKey::from_slice(pk.as_bytes()),
                    secret: Self::SecretKey::from_slice(sk.as_bytes()),
                })
            }

            fn encapsulate<R: Rng>(pk: &[u8], _rng: &mut R) -> KemResult<(Self::Ct, Self::Ss)> {
                let pk = $module::PublicKey::from_bytes(pk).map_err(|_| KemError::Input)?;
                let (ss, ct) = $module::encapsulate(&pk);
                Ok((
                    ByteArray::from_slice(ct.as_bytes()),
                    SensitiveByteArray::from_slice(ss.as_bytes()),
                ))
            }

            fn decapsulate(ct: &[u8], sk: &[u8]) -> KemResult<Self::Ss> {
                let ct = $module::Ciphertext::from_bytes(ct).map_err(|_| KemError::Input)?;
                let sk = $module::SecretKey::from_bytes(sk).map_err(|_| KemError::Input)?;
                let ss = $module::decapsulate(&ct, &sk);
                Ok(SensitiveByteArray::from_slice(ss.as_bytes()))
            }
        }
    };
}

impl_kyber!(Kyber512, kyber512, 1632, 800, 768);
impl_kyber!(Kyber768, kyber768, 2400, 1184, 1088);
impl_kyber!(Kyber1024, kyber1024, 3168, 1568, 1568);
