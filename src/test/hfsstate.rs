//! Driving HFS state through handshake patterns

use crate::bytearray::ByteArray;
use crate::crypto::hfs::{HfsKyber768, HfsMlKem1024, HfsMlKem512, NoHfs};
use crate::error::HfsError;
use crate::handshakepattern::{noise_xxhfs, HandshakePattern, Token};
use crate::traits::Hfs;
use crate::HfsState;

#[test]
fn hfs_state_xxhfs() {
    run_pattern::<HfsMlKem512>(noise_xxhfs());
    run_pattern::<HfsMlKem1024>(noise_xxhfs());
    run_pattern::<HfsKyber768>(noise_xxhfs());
}

#[test]
fn hfs_state_custom_pattern() {
    let pattern = HandshakePattern::new(
        "NNhfs",
        &[],
        &[],
        &[&[Token::E, Token::F], &[Token::E, Token::F, Token::EE, Token::FF]],
    )
    .unwrap();
    run_pattern::<HfsMlKem1024>(pattern);
}

#[test]
fn hfs_state_wire_lengths() {
    let alice = HfsState::<HfsMlKem512>::new(true);
    let bob = HfsState::<HfsMlKem512>::new(false);

    assert_eq!(alice.write_len(), 800);
    assert_eq!(alice.read_len(), 768);
    assert_eq!(bob.write_len(), 768);
    assert_eq!(bob.read_len(), 800);
}

#[test]
fn hfs_state_misuse() {
    let mut rng = rand::thread_rng();
    let mut buf = [0u8; 2048];

    let mut alice = HfsState::<HfsMlKem512>::new(true);
    let mut bob = HfsState::<HfsMlKem512>::new(false);

    // Responder cannot generate before receiving the initiator's key
    assert_eq!(
        bob.write_f(&mut rng, &mut buf),
        Err(HfsError::MissingMaterial)
    );
    // Nothing to mix yet
    assert_eq!(alice.ff().err(), Some(HfsError::MissingMaterial));
    // Initiator cannot read before writing
    assert_eq!(alice.read_f(&[0u8; 768]), Err(HfsError::InvalidState));

    let mut short = [0u8; 10];
    assert_eq!(
        alice.write_f(&mut rng, &mut short),
        Err(HfsError::BufferTooSmall)
    );

    let n = alice.write_f(&mut rng, &mut buf).unwrap();
    assert_eq!(n, 800);
    assert_eq!(
        alice.write_f(&mut rng, &mut buf),
        Err(HfsError::InvalidState)
    );

    assert_eq!(
        bob.read_f(&buf[..n - 1]),
        Err(HfsError::InvalidKeyLength {
            expected: 800,
            actual: 799
        })
    );
    assert_eq!(bob.read_f(&buf[..n]), Ok(800));
    assert_eq!(bob.read_f(&buf[..n]), Err(HfsError::InvalidState));

    // Initiator has its keys but not the peer's f
    assert_eq!(alice.ff().err(), Some(HfsError::MissingMaterial));

    let n = bob.write_f(&mut rng, &mut buf).unwrap();
    let bob_out = bob.ff().unwrap();
    assert!(bob.is_finished());
    assert_eq!(bob.ff().err(), Some(HfsError::InvalidState));

    // Trailing bytes belong to the following tokens
    let mut msg = [0u8; 1024];
    msg[..n].copy_from_slice(&buf[..n]);
    assert_eq!(alice.read_f(&msg), Ok(768));
    let alice_out = alice.ff().unwrap();

    assert_eq!(alice_out.as_slice(), bob_out.as_slice());
}

#[test]
fn hfs_state_null() {
    let mut rng = rand::thread_rng();
    let mut buf = [0u8; 16];
    let mut alice = HfsState::<NoHfs>::new(true);

    assert_eq!(alice.write_len(), 0);
    assert_eq!(
        alice.write_f(&mut rng, &mut buf),
        Err(HfsError::NullCapabilityInvoked)
    );
}

/// Walk the pattern and process `f`/`ff` tokens for both parties.
/// Other tokens belong to the DH layer and only advance the message.
fn run_pattern<F: Hfs>(pattern: HandshakePattern) {
    let mut rng = rand::thread_rng();
    let mut alice = HfsState::<F>::new(true);
    let mut bob = HfsState::<F>::new(false);

    let mut alice_out = None;
    let mut bob_out = None;
    let mut buf = [0u8; 4096];

    for (i, message) in pattern.messages().enumerate() {
        let (sender, receiver, sender_out, receiver_out) = if pattern.is_initiator_message(i) {
            (&mut alice, &mut bob, &mut alice_out, &mut bob_out)
        } else {
            (&mut bob, &mut alice, &mut bob_out, &mut alice_out)
        };

        // Write
        let mut n = 0;
        for token in message {
            match token {
                Token::F => n += sender.write_f(&mut rng, &mut buf[n..]).unwrap(),
                Token::FF => *sender_out = Some(sender.ff().unwrap()),
                _ => {}
            }
        }
        assert_eq!(
            n,
            message.iter().filter(|t| **t == Token::F).count() * sender.write_len()
        );

        // Read
        let mut m = 0;
        for token in message {
            match token {
                Token::F => m += receiver.read_f(&buf[m..n]).unwrap(),
                Token::FF => *receiver_out = Some(receiver.ff().unwrap()),
                _ => {}
            }
        }
        assert_eq!(m, n);
    }

    assert!(alice.is_finished() && bob.is_finished());

    let alice_out = alice_out.unwrap();
    let bob_out = bob_out.unwrap();
    assert_eq!(alice_out.as_slice().len(), F::f_len());
    assert_eq!(alice_out.as_slice(), bob_out.as_slice());
}
