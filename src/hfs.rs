//! Hybrid Forward Secrecy functions for the Noise HFS extension
//!
//! See: <https://github.com/noiseprotocol/noise_spec/blob/master/extensions/ext_hybrid_forward_secrecy.md>

use core::marker::PhantomData;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bytearray::ByteArray;
use crate::constants::NULL_HFS_NAME;
use crate::error::{HfsError, HfsResult};
use crate::traits::{CryptoComponent, Hfs, HfsKeys, Kem, Rng};

/// Role-dependent HFS key material
///
/// KEM based hybrid forward secrecy is asymmetric: the initiator generates a
/// KEM keypair and decapsulates later, while the responder encapsulates
/// against the initiator's key and obtains the shared secret right away.
pub enum HfsKey<P1, S, P2, O>
where
    P1: ByteArray,
    S: ByteArray,
    P2: ByteArray,
    O: ByteArray,
{
    /// Keys generated for the first `f` token
    Initiator { public: P1, secret: S },
    /// Keys generated for the second `f` token
    Responder { public: P2, shared: O },
}

impl<P1, S, P2, O> Zeroize for HfsKey<P1, S, P2, O>
where
    P1: ByteArray,
    S: ByteArray,
    P2: ByteArray,
    O: ByteArray,
{
    fn zeroize(&mut self) {
        match self {
            HfsKey::Initiator { public, secret } => {
                public.zeroize();
                secret.zeroize();
            }
            HfsKey::Responder { public, shared } => {
                public.zeroize();
                shared.zeroize();
            }
        }
    }
}

/// HFS keypair, tagged with the HFS function that produced it
///
/// Owned by a single handshake and consumed by [`Hfs::ff`].
/// All key material is zeroized on drop.
pub struct HfsKeyPair<P1, S, P2, O>
where
    P1: ByteArray,
    S: ByteArray,
    P2: ByteArray,
    O: ByteArray,
{
    origin: &'static str,
    key: HfsKey<P1, S, P2, O>,
}

impl<P1, S, P2, O> HfsKeyPair<P1, S, P2, O>
where
    P1: ByteArray,
    S: ByteArray,
    P2: ByteArray,
    O: ByteArray,
{
    /// Wrap key material produced by the HFS function named `origin`
    pub fn new(origin: &'static str, key: HfsKey<P1, S, P2, O>) -> Self {
        Self { origin, key }
    }

    /// Name of the HFS function that produced this keypair
    pub fn origin(&self) -> &'static str {
        self.origin
    }

    pub fn key(&self) -> &HfsKey<P1, S, P2, O> {
        &self.key
    }

    /// Public bytes to transmit for the `f` token
    pub fn public(&self) -> &[u8] {
        match &self.key {
            HfsKey::Initiator { public, .. } => public.as_slice(),
            HfsKey::Responder { public, .. } => public.as_slice(),
        }
    }

    pub fn is_initiator(&self) -> bool {
        matches!(self.key, HfsKey::Initiator { .. })
    }
}

impl<P1, S, P2, O> Drop for HfsKeyPair<P1, S, P2, O>
where
    P1: ByteArray,
    S: ByteArray,
    P2: ByteArray,
    O: ByteArray,
{
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl<P1, S, P2, O> ZeroizeOnDrop for HfsKeyPair<P1, S, P2, O>
where
    P1: ByteArray,
    S: ByteArray,
    P2: ByteArray,
    O: ByteArray,
{
}

impl<P1, S, P2, O> core::fmt::Debug for HfsKeyPair<P1, S, P2, O>
where
    P1: ByteArray,
    S: ByteArray,
    P2: ByteArray,
    O: ByteArray,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let role = if self.is_initiator() {
            "Initiator"
        } else {
            "Responder"
        };
        f.debug_struct("HfsKeyPair")
            .field("origin", &self.origin)
            .field("role", &role)
            .finish_non_exhaustive()
    }
}

/// HFS function backed by a KEM
///
/// * `f` without remote key: generate a KEM keypair, send the public key
/// * `f` with remote key: encapsulate against it, send the ciphertext
/// * `ff` as initiator: decapsulate the received ciphertext
/// * `ff` as responder: return the secret obtained from encapsulation
pub struct KemHfs<K: Kem>(PhantomData<K>);

impl<K: Kem> CryptoComponent for KemHfs<K> {
    fn name() -> &'static str {
        K::name()
    }
}

impl<K: Kem> Hfs for KemHfs<K> {
    type PubKey1 = K::PubKey;
    type PubKey2 = K::Ct;
    type SecretKey = K::SecretKey;
    type Output = K::Ss;

    fn genkey_f<R: Rng>(rng: &mut R, rf: Option<&[u8]>) -> HfsResult<HfsKeys<Self>> {
        let key = match rf {
            Some(rf) => {
                check_len(rf, Self::f_len_1())?;
                let (public, shared) = K::encapsulate(rf, rng)?;
                tracing::debug!(hfs = Self::name(), "generated responder HFS key");
                HfsKey::Responder { public, shared }
            }
            None => {
                let keys = K::genkey(rng)?;
                tracing::debug!(hfs = Self::name(), "generated initiator HFS key");
                HfsKey::Initiator {
                    public: ByteArray::clone(&keys.public),
                    secret: ByteArray::clone(&keys.secret),
                }
            }
        };

        Ok(HfsKeyPair::new(Self::name(), key))
    }

    fn ff(keypair: HfsKeys<Self>, pubkey: &[u8]) -> HfsResult<Self::Output> {
        if keypair.origin() != Self::name() {
            tracing::warn!(
                hfs = Self::name(),
                origin = keypair.origin(),
                "HFS keypair from a different function"
            );
            return Err(HfsError::UnsupportedKeypairVariant);
        }

        match keypair.key() {
            HfsKey::Initiator { secret, .. } => {
                // The peer value for the initiator is the responder's `f`, i.e. the KEM ciphertext
                check_len(pubkey, Self::f_len_2())?;
                let shared = K::decapsulate(pubkey, secret.as_slice())?;
                tracing::trace!(hfs = Self::name(), "decapsulated HFS secret");
                Ok(shared)
            }
            HfsKey::Responder { shared, .. } => Ok(ByteArray::clone(shared)),
        }
    }
}

fn check_len(data: &[u8], expected: usize) -> HfsResult<()> {
    if data.len() != expected {
        tracing::warn!(expected, actual = data.len(), "invalid HFS key length");
        return Err(HfsError::InvalidKeyLength {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Null HFS function for patterns without `f` and `ff` tokens
///
/// A correct handshake driver never calls [`Hfs::genkey_f`] or [`Hfs::ff`] on
/// this type. Both fail with [`HfsError::NullCapabilityInvoked`].
pub struct NoHfs;

impl CryptoComponent for NoHfs {
    fn name() -> &'static str {
        NULL_HFS_NAME
    }
}

impl Hfs for NoHfs {
    type PubKey1 = [u8; 0];
    type PubKey2 = [u8; 0];
    type SecretKey = [u8; 0];
    type Output = [u8; 0];

    fn genkey_f<R: Rng>(_rng: &mut R, _rf: Option<&[u8]>) -> HfsResult<HfsKeys<Self>> {
        tracing::warn!("genkey_f called for null HFS");
        Err(HfsError::NullCapabilityInvoked)
    }

    fn ff(_keypair: HfsKeys<Self>, _pubkey: &[u8]) -> HfsResult<Self::Output> {
        tracing::warn!("ff called for null HFS");
        Err(HfsError::NullCapabilityInvoked)
    }
}
