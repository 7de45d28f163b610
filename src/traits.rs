//! Common traits used throughout the crate

use rand_core::{CryptoRng, RngCore};

use crate::bytearray::ByteArray;
use crate::error::{HfsResult, KemResult};
use crate::hfs::HfsKeyPair;
use crate::KeyPair;

/// Common trait for all crypto components
pub trait CryptoComponent {
    /// Name of this algorithm
    fn name() -> &'static str;
}

/// Cryptographically secure random number source
///
/// Blanket-implemented for everything that implements [`RngCore`] and [`CryptoRng`].
pub trait Rng: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> Rng for T {}

/// Common trait for all key encapsulation mechanisms
///
/// Key, ciphertext and shared secret sizes are published through the
/// [`ByteArray::len`] of the associated types.
pub trait Kem: CryptoComponent {
    type SecretKey: ByteArray;
    type PubKey: ByteArray;
    type Ct: ByteArray;
    type Ss: ByteArray;

    /// Generate a keypair
    fn genkey<R: Rng>(rng: &mut R) -> KemResult<KeyPair<Self::PubKey, Self::SecretKey>>;

    /// Encapsulate a public key and return the ciphertext and shared secret
    fn encapsulate<R: Rng>(pk: &[u8], rng: &mut R) -> KemResult<(Self::Ct, Self::Ss)>;

    /// Decapsulate ciphertext with secret key and return the shared secret
    fn decapsulate(ct: &[u8], sk: &[u8]) -> KemResult<Self::Ss>;

    /// Public key length in bytes
    fn pubkey_len() -> usize {
        Self::PubKey::len()
    }

    /// Ciphertext length in bytes
    fn ct_len() -> usize {
        Self::Ct::len()
    }

    /// Shared secret length in bytes
    fn ss_len() -> usize {
        Self::Ss::len()
    }
}

/// Keypair type produced and consumed by the HFS function `F`
pub type HfsKeys<F> = HfsKeyPair<
    <F as Hfs>::PubKey1,
    <F as Hfs>::SecretKey,
    <F as Hfs>::PubKey2,
    <F as Hfs>::Output,
>;

/// Hybrid forward secrecy function for the Noise HFS extension
///
/// Implementors are stateless and used through static dispatch, so the same
/// function can serve any number of concurrent handshakes.
///
/// The HFS function is invoked by the handshake driver only for the `f` and
/// `ff` tokens:
///
/// * For the first `f` token of the handshake (sent by the initiator),
///   [`Hfs::genkey_f`] is called without a remote key.
/// * For the second `f` token (sent by the responder),
///   [`Hfs::genkey_f`] is called with the initiator's freshly received key.
/// * For the `ff` token, both parties call [`Hfs::ff`] with their own keypair
///   and the peer's public bytes.
pub trait Hfs: CryptoComponent + Sized {
    /// Public key sent with the first `f` token
    type PubKey1: ByteArray;
    /// Public key sent with the second `f` token
    type PubKey2: ByteArray;
    /// Secret key held by the initiator between `f` and `ff`
    type SecretKey: ByteArray;
    /// Output of the `ff` calculation
    type Output: ByteArray;

    /// Generate a new HFS keypair relative to remote public key `rf`
    ///
    /// `rf` is `None` for the first `f` token and contains the peer's public
    /// key for the second one.
    ///
    /// # Errors
    /// * [`crate::error::HfsError::InvalidKeyLength`] if `rf` is not [`Hfs::f_len_1`] bytes
    fn genkey_f<R: Rng>(rng: &mut R, rf: Option<&[u8]>) -> HfsResult<HfsKeys<Self>>;

    /// Mix a local keypair with a remote public key
    ///
    /// Consumes the keypair, which is zeroized afterwards.
    fn ff(keypair: HfsKeys<Self>, pubkey: &[u8]) -> HfsResult<Self::Output>;

    /// Size in bytes of the public key from [`Hfs::genkey_f`] when `rf` is `None`
    fn f_len_1() -> usize {
        Self::PubKey1::len()
    }

    /// Size in bytes of the public key from [`Hfs::genkey_f`] when `rf` is set
    fn f_len_2() -> usize {
        Self::PubKey2::len()
    }

    /// Size in bytes of the [`Hfs::ff`] output
    fn f_len() -> usize {
        Self::Output::len()
    }
}
