#![no_main]

use libfuzzer_sys::fuzz_target;
use noise_hfs::crypto::hfs::{HfsKyber768, HfsMlKem1024, HfsMlKem512};
use noise_hfs::Hfs;

fuzz_target!(|data: &[u8]| {
    let mut rng = rand::thread_rng();

    // Fuzzed data is the initiator's f as seen by the responder
    let _ = HfsMlKem512::genkey_f(&mut rng, Some(data));
    let _ = HfsMlKem1024::genkey_f(&mut rng, Some(data));
    let _ = HfsKyber768::genkey_f(&mut rng, Some(data));
});
