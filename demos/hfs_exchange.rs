use noise_hfs::crypto::hfs::HfsMlKem768;
use noise_hfs::crypto::rng::DefaultRng;
use noise_hfs::handshakepattern::{noise_xxhfs, Token};
use noise_hfs::HfsState;

fn main() {
    let pattern = noise_xxhfs();
    let mut rng = DefaultRng;

    let mut alice = HfsState::<HfsMlKem768>::new(true);
    let mut bob = HfsState::<HfsMlKem768>::new(false);

    // The DH tokens and the symmetric state live in the handshake driver,
    // here we only carry the HFS parts of each message
    let mut buf = [0u8; 4096];
    let mut alice_secret = None;
    let mut bob_secret = None;

    for (i, message) in pattern.messages().enumerate() {
        let (sender, receiver, sender_secret, receiver_secret) = if pattern.is_initiator_message(i)
        {
            (&mut alice, &mut bob, &mut alice_secret, &mut bob_secret)
        } else {
            (&mut bob, &mut alice, &mut bob_secret, &mut alice_secret)
        };

        let mut n = 0;
        for token in message {
            match token {
                Token::F => n += sender.write_f(&mut rng, &mut buf[n..]).unwrap(),
                Token::FF => *sender_secret = Some(sender.ff().unwrap()),
                _ => {}
            }
        }

        let mut m = 0;
        for token in message {
            match token {
                Token::F => m += receiver.read_f(&buf[m..n]).unwrap(),
                Token::FF => *receiver_secret = Some(receiver.ff().unwrap()),
                _ => {}
            }
        }

        println!("message {i}: {n} HFS bytes");
    }

    let alice_secret = alice_secret.unwrap();
    let bob_secret = bob_secret.unwrap();
    assert_eq!(alice_secret.as_slice(), bob_secret.as_slice());

    println!(
        "Both parties mix {} bytes of KEM output into the chaining key",
        alice_secret.as_slice().len()
    );
}
