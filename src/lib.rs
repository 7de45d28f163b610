#![cfg_attr(not(feature = "std"), no_std)]
//! # noise-hfs
//!
//! `no_std` compatible handshake vocabulary for the [Noise framework](https://noiseprotocol.org/noise.html)
//! together with the [Hybrid Forward Secrecy (HFS) extension](https://github.com/noiseprotocol/noise_spec/blob/master/extensions/ext_hybrid_forward_secrecy.md),
//! which mixes a post-quantum KEM into an otherwise classical Diffie-Hellman handshake through
//! two extra tokens, `f` and `ff`.
//!
//! This crate provides the pieces a Noise handshake state machine needs for HFS:
//!
//! * [`handshakepattern`] - The token grammar and a validated table of handshake patterns,
//!   including `XXhfs`
//! * [`hfs::KemHfs`] - HFS function backed by any [`traits::Kem`]
//! * [`hfs::NoHfs`] - Null HFS function for patterns without `f`/`ff`
//! * [`HfsState`] - Per-handshake helper that drives the `f` and `ff` tokens
//!
//! Wire framing, the symmetric state (hashing and key derivation), DH and the
//! AEAD cipher belong to the handshake driver and are out of scope here.
//!
//! ## HFS in a handshake
//!
//! * First `f` token (initiator): [`traits::Hfs::genkey_f`] with no remote key,
//!   send [`traits::Hfs::f_len_1`] bytes
//! * Second `f` token (responder): [`traits::Hfs::genkey_f`] with the initiator's key,
//!   send [`traits::Hfs::f_len_2`] bytes
//! * `ff` token: [`traits::Hfs::ff`] yields [`traits::Hfs::f_len`] bytes to mix into the chaining key
//!
//! ## Crypto Vendors
//!
//! KEM implementations are in the [`crypto`] module and users can plug in their own
//! through the [`traits::Kem`] trait.
//!
//! ## Features
//!
//! | Feature flag              | Description                               | Default   | Details                               |
//! | ---                       | ---                                       | ---       | ---                                   |
//! | `use-rust-crypto-ml-kem`  | Enable ML-KEM KEMs by RustCrypto          | yes       |                                       |
//! | `use-pqclean-kyber`       | Enable Kyber KEMs by PQClean              | yes       |                                       |
//! | `getrandom`               | Enable default system RNG                 | yes       |                                       |
//! | `std`                     | Enable standard library support           | no        | Currently only affects dependencies   |
//!
//! ## Example
//!
//! ```ignore
//! use noise_hfs::crypto::hfs::HfsMlKem1024;
//! use noise_hfs::handshakepattern::{lookup, Token};
//! use noise_hfs::HfsState;
//!
//! let pattern = lookup("XXhfs").unwrap();
//! let mut rng = rand::thread_rng();
//!
//! let mut alice = HfsState::<HfsMlKem1024>::new(true);
//! let mut bob = HfsState::<HfsMlKem1024>::new(false);
//! let mut buf = [0u8; 2048];
//!
//! // -> e, f
//! let n = alice.write_f(&mut rng, &mut buf).unwrap();
//! bob.read_f(&buf[..n]).unwrap();
//!
//! // <- e, f, ee, ff, s, es
//! let n = bob.write_f(&mut rng, &mut buf).unwrap();
//! let bob_secret = bob.ff().unwrap();
//! alice.read_f(&buf[..n]).unwrap();
//! let alice_secret = alice.ff().unwrap();
//!
//! assert_eq!(alice_secret.as_slice(), bob_secret.as_slice());
//! ```

pub mod bytearray;
pub mod constants;
mod crypto_impl;
pub mod error;
pub mod handshakepattern;
pub mod hfs;
mod hfsstate;
#[cfg(test)]
mod test;
pub mod traits;

pub use hfsstate::HfsState;
pub use traits::Hfs;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Concrete crypto implementations
pub mod crypto {

    /// Supported KEMs
    pub mod kem {
        #[cfg(feature = "use-pqclean-kyber")]
        pub use crate::crypto_impl::pqclean_kyber;
        #[cfg(feature = "use-rust-crypto-ml-kem")]
        pub use crate::crypto_impl::rust_crypto_ml_kem;
    }

    /// Supported HFS functions
    pub mod hfs {
        pub use crate::hfs::NoHfs;

        #[cfg(feature = "use-pqclean-kyber")]
        use crate::crypto_impl::pqclean_kyber;
        #[cfg(feature = "use-rust-crypto-ml-kem")]
        use crate::crypto_impl::rust_crypto_ml_kem;
        use crate::hfs::KemHfs;

        /// HFS with ML-KEM-512 by RustCrypto
        #[cfg(feature = "use-rust-crypto-ml-kem")]
        pub type HfsMlKem512 = KemHfs<rust_crypto_ml_kem::MlKem512>;
        /// HFS with ML-KEM-768 by RustCrypto
        #[cfg(feature = "use-rust-crypto-ml-kem")]
        pub type HfsMlKem768 = KemHfs<rust_crypto_ml_kem::MlKem768>;
        /// HFS with ML-KEM-1024 by RustCrypto
        #[cfg(feature = "use-rust-crypto-ml-kem")]
        pub type HfsMlKem1024 = KemHfs<rust_crypto_ml_kem::MlKem1024>;

        /// HFS with Kyber512 by PQClean
        #[cfg(feature = "use-pqclean-kyber")]
        pub type HfsKyber512 = KemHfs<pqclean_kyber::Kyber512>;
        /// HFS with Kyber768 by PQClean
        #[cfg(feature = "use-pqclean-kyber")]
        pub type HfsKyber768 = KemHfs<pqclean_kyber::Kyber768>;
        /// HFS with Kyber1024 by PQClean
        #[cfg(feature = "use-pqclean-kyber")]
        pub type HfsKyber1024 = KemHfs<pqclean_kyber::Kyber1024>;
    }

    /// Default RNG
    #[cfg(feature = "getrandom")]
    pub mod rng {
        pub use crate::crypto_impl::random::DefaultRng;
    }
}

/// A zeroize-on-drop container for keys
#[derive(ZeroizeOnDrop)]
pub struct KeyPair<P: Zeroize, S: Zeroize> {
    pub public: P,
    pub secret: S,
}
