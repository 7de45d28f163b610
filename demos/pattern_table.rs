use noise_hfs::crypto::hfs::HfsMlKem1024;
use noise_hfs::handshakepattern::{lookup, names};
use noise_hfs::traits::CryptoComponent;

// Names of the classical primitives the handshake driver would use
struct X25519;
struct ChaChaPoly;
struct Sha256;

impl CryptoComponent for X25519 {
    fn name() -> &'static str {
        "25519"
    }
}

impl CryptoComponent for ChaChaPoly {
    fn name() -> &'static str {
        "ChaChaPoly"
    }
}

impl CryptoComponent for Sha256 {
    fn name() -> &'static str {
        "SHA256"
    }
}

fn main() {
    for name in names() {
        let pattern = lookup(name).unwrap();
        let protocol = pattern
            .protocol_name::<X25519, HfsMlKem1024, ChaChaPoly, Sha256>()
            .unwrap();

        println!("{protocol}");
        println!("{pattern}");
    }
}
