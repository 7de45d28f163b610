//! HFS function tests over every shipped KEM vendor

use crate::bytearray::ByteArray;
use crate::crypto::hfs::{
    HfsKyber1024, HfsKyber512, HfsKyber768, HfsMlKem1024, HfsMlKem512, HfsMlKem768, NoHfs,
};
use crate::error::HfsError;
use crate::hfs::{HfsKey, HfsKeyPair};
use crate::traits::{CryptoComponent, Hfs};

#[test]
fn hfs_round_trips() {
    round_trip::<HfsMlKem512>();
    round_trip::<HfsMlKem768>();
    round_trip::<HfsMlKem1024>();
    round_trip::<HfsKyber512>();
    round_trip::<HfsKyber768>();
    round_trip::<HfsKyber1024>();
}

#[test]
fn hfs_length_checks() {
    length_checks::<HfsMlKem512>();
    length_checks::<HfsMlKem768>();
    length_checks::<HfsMlKem1024>();
    length_checks::<HfsKyber512>();
    length_checks::<HfsKyber768>();
    length_checks::<HfsKyber1024>();
}

#[test]
fn hfs_pinned_sizes() {
    assert_sizes::<HfsMlKem512>(800, 768, 32);
    assert_sizes::<HfsMlKem768>(1184, 1088, 32);
    assert_sizes::<HfsMlKem1024>(1568, 1568, 32);
    assert_sizes::<HfsKyber512>(800, 768, 32);
    assert_sizes::<HfsKyber768>(1184, 1088, 32);
    assert_sizes::<HfsKyber1024>(1568, 1568, 32);
}

#[test]
fn hfs_names() {
    assert_eq!(HfsMlKem1024::name(), "MLKEM1024");
    assert_eq!(HfsKyber1024::name(), "Kyber1024");
    assert_eq!(NoHfs::name(), "none");
}

#[test]
fn initiator_ff_expects_ciphertext_length() {
    // Public key and ciphertext lengths differ for ML-KEM-768
    let mut rng = rand::thread_rng();
    let alice = HfsMlKem768::genkey_f(&mut rng, None).unwrap();
    let bogus = [0u8; 1184];
    assert_eq!(
        HfsMlKem768::ff(alice, &bogus).err(),
        Some(HfsError::InvalidKeyLength {
            expected: 1088,
            actual: 1184
        })
    );
}

#[test]
fn keypair_from_other_vendor_is_rejected() {
    let mut rng = rand::thread_rng();

    // Same sizes, incompatible algorithms
    let kyber = HfsKyber1024::genkey_f(&mut rng, None).unwrap();
    let ct = [0u8; 1568];
    assert_eq!(
        HfsMlKem1024::ff(kyber, &ct).err(),
        Some(HfsError::UnsupportedKeypairVariant)
    );

    let alice = HfsMlKem1024::genkey_f(&mut rng, None).unwrap();
    let bob = HfsMlKem1024::genkey_f(&mut rng, Some(alice.public())).unwrap();
    assert_eq!(
        HfsKyber1024::ff(bob, alice.public()).err(),
        Some(HfsError::UnsupportedKeypairVariant)
    );
}

#[test]
fn tampered_ciphertext_yields_different_secret() {
    let mut rng = rand::thread_rng();
    let alice = HfsMlKem768::genkey_f(&mut rng, None).unwrap();
    let bob = HfsMlKem768::genkey_f(&mut rng, Some(alice.public())).unwrap();

    let mut ct = [0u8; 1088];
    ct.copy_from_slice(bob.public());
    ct[0] ^= 0x01;

    // ML-KEM uses implicit rejection, decapsulation still succeeds
    let alice_out = HfsMlKem768::ff(alice, &ct).unwrap();
    let bob_out = HfsMlKem768::ff(bob, &[]).unwrap();
    assert_ne!(alice_out.as_slice(), bob_out.as_slice());
}

#[test]
fn null_hfs() {
    let mut rng = rand::thread_rng();

    assert_eq!(NoHfs::f_len_1(), 0);
    assert_eq!(NoHfs::f_len_2(), 0);
    assert_eq!(NoHfs::f_len(), 0);

    assert_eq!(
        NoHfs::genkey_f(&mut rng, None).err(),
        Some(HfsError::NullCapabilityInvoked)
    );
    assert_eq!(
        NoHfs::genkey_f(&mut rng, Some(&[])).err(),
        Some(HfsError::NullCapabilityInvoked)
    );

    let keys = HfsKeyPair::new(
        NoHfs::name(),
        HfsKey::Initiator {
            public: [],
            secret: [],
        },
    );
    assert_eq!(NoHfs::ff(keys, &[]), Err(HfsError::NullCapabilityInvoked));
}

#[test]
fn keypair_debug_hides_keys() {
    let mut rng = rand::thread_rng();
    let alice = HfsMlKem512::genkey_f(&mut rng, None).unwrap();
    let mut out = arrayvec::ArrayString::<128>::new();
    core::fmt::write(&mut out, format_args!("{alice:?}")).unwrap();
    assert_eq!(
        out.as_str(),
        "HfsKeyPair { origin: \"MLKEM512\", role: \"Initiator\", .. }"
    );
}

fn round_trip<F: Hfs>() {
    let mut rng = rand::thread_rng();

    let alice = F::genkey_f(&mut rng, None).unwrap();
    assert!(alice.is_initiator());
    assert_eq!(alice.origin(), F::name());
    assert_eq!(alice.public().len(), F::f_len_1());

    let bob = F::genkey_f(&mut rng, Some(alice.public())).unwrap();
    assert!(!bob.is_initiator());
    assert_eq!(bob.public().len(), F::f_len_2());

    let alice_out = F::ff(alice, bob.public()).unwrap();
    assert_eq!(alice_out.as_slice().len(), F::f_len());

    match bob.key() {
        HfsKey::Responder { shared, .. } => assert_eq!(alice_out.as_slice(), shared.as_slice()),
        HfsKey::Initiator { .. } => panic!("Expected responder keys"),
    }

    // Responder ignores the peer value
    let bob_out = F::ff(bob, &[0u8; 3]).unwrap();
    assert_eq!(alice_out.as_slice(), bob_out.as_slice());
}

fn length_checks<F: Hfs>() {
    let mut rng = rand::thread_rng();

    let short = [0u8; 16];
    assert_eq!(
        F::genkey_f(&mut rng, Some(&short)).err(),
        Some(HfsError::InvalidKeyLength {
            expected: F::f_len_1(),
            actual: short.len()
        })
    );
    assert_eq!(
        F::genkey_f(&mut rng, Some(&[])).err(),
        Some(HfsError::InvalidKeyLength {
            expected: F::f_len_1(),
            actual: 0
        })
    );

    let alice = F::genkey_f(&mut rng, None).unwrap();
    assert_eq!(
        F::ff(alice, &short).err(),
        Some(HfsError::InvalidKeyLength {
            expected: F::f_len_2(),
            actual: short.len()
        })
    );
}

fn assert_sizes<F: Hfs>(f_len_1: usize, f_len_2: usize, f_len: usize) {
    assert_eq!(F::f_len_1(), f_len_1);
    assert_eq!(F::f_len_2(), f_len_2);
    assert_eq!(F::f_len(), f_len);
}
