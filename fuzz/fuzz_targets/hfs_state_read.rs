#![no_main]

use libfuzzer_sys::fuzz_target;
use noise_hfs::crypto::hfs::HfsMlKem768;
use noise_hfs::HfsState;

fuzz_target!(|data: &[u8]| {
    let mut rng = rand::thread_rng();
    let mut buf = [0u8; 4096];

    let mut alice = HfsState::<HfsMlKem768>::new(true);
    let mut bob = HfsState::<HfsMlKem768>::new(false);

    // Alice has sent her f and waits for the reply
    alice.write_f(&mut rng, &mut buf).unwrap();

    if alice.read_f(data).is_ok() {
        alice.ff().unwrap();
    }
    if bob.read_f(data).is_ok() {
        bob.write_f(&mut rng, &mut buf).unwrap();
        bob.ff().unwrap();
    }
});
