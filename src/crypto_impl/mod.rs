//! Implementations for supported PQ crypto

// KEMs
#[cfg(feature = "use-pqclean-kyber")]
pub mod pqclean_kyber;
#[cfg(feature = "use-rust-crypto-ml-kem")]
pub mod rust_crypto_ml_kem;

// RNG
#[cfg(feature = "getrandom")]
pub mod random;
