#![no_main]

use libfuzzer_sys::fuzz_target;
use noise_hfs::crypto::hfs::{HfsKyber768, HfsMlKem1024, HfsMlKem768};
use noise_hfs::Hfs;

fuzz_target!(|data: &[u8]| {
    let mut rng = rand::thread_rng();

    // Fuzzed data is the responder's f as seen by the initiator
    let alice = HfsMlKem768::genkey_f(&mut rng, None).unwrap();
    let _ = HfsMlKem768::ff(alice, data);

    let alice = HfsMlKem1024::genkey_f(&mut rng, None).unwrap();
    let _ = HfsMlKem1024::ff(alice, data);

    let alice = HfsKyber768::genkey_f(&mut rng, None).unwrap();
    let _ = HfsKyber768::ff(alice, data);
});
