#![no_main]

use libfuzzer_sys::fuzz_target;
use noise_hfs::handshakepattern::lookup;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = core::str::from_utf8(data) {
        if let Ok(pattern) = lookup(name) {
            assert_eq!(pattern.name(), name);
        }
    }
});
