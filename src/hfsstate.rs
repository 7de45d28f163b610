//! Per-handshake HFS state for driving the `f` and `ff` tokens

use crate::bytearray::ByteArray;
use crate::error::{HfsError, HfsResult};
use crate::traits::{Hfs, HfsKeys, Rng};

/// HFS half of a handshake state machine
///
/// Tracks the local HFS keypair and the peer's `f` value for one handshake so
/// that the driver only has to forward bytes:
///
/// * `f` token, writing - [`HfsState::write_f`]
/// * `f` token, reading - [`HfsState::read_f`]
/// * `ff` token - [`HfsState::ff`], then mix the output into the symmetric state
///
/// The initiator's `f` is always generated without a remote key, the responder's
/// `f` against the initiator's key. Dropping the state wipes any pending keys.
pub struct HfsState<F: Hfs> {
    initiator: bool,
    keys: Option<HfsKeys<F>>,
    // Initiator's `f`, held by the responder
    rf1: Option<F::PubKey1>,
    // Responder's `f`, held by the initiator
    rf2: Option<F::PubKey2>,
    finished: bool,
}

impl<F: Hfs> HfsState<F> {
    /// Initialize HFS state for a new handshake
    ///
    /// # Arguments
    /// * `initiator` - True if we are the initiating party
    pub fn new(initiator: bool) -> Self {
        Self {
            initiator,
            keys: None,
            rf1: None,
            rf2: None,
            finished: false,
        }
    }

    /// Are we the initiator
    pub fn is_initiator(&self) -> bool {
        self.initiator
    }

    /// Has the `ff` calculation been completed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of bytes our `f` token occupies in a handshake message
    pub fn write_len(&self) -> usize {
        if self.initiator {
            F::f_len_1()
        } else {
            F::f_len_2()
        }
    }

    /// Number of bytes the peer's `f` token occupies in a handshake message
    pub fn read_len(&self) -> usize {
        if self.initiator {
            F::f_len_2()
        } else {
            F::f_len_1()
        }
    }

    /// Generate our HFS keypair and write its public part to `out`
    ///
    /// # Returns
    /// Number of bytes written
    ///
    /// # Errors
    /// * [`HfsError::InvalidState`] if our `f` was already written
    /// * [`HfsError::MissingMaterial`] if we are the responder and have not read the initiator's `f`
    /// * [`HfsError::BufferTooSmall`] if `out` cannot hold the public key
    pub fn write_f<R: Rng>(&mut self, rng: &mut R, out: &mut [u8]) -> HfsResult<usize> {
        if self.keys.is_some() || self.finished {
            return Err(HfsError::InvalidState);
        }

        let len = self.write_len();
        if out.len() < len {
            return Err(HfsError::BufferTooSmall);
        }

        let keys = if self.initiator {
            F::genkey_f(rng, None)?
        } else {
            let rf = self.rf1.as_ref().ok_or(HfsError::MissingMaterial)?;
            F::genkey_f(rng, Some(rf.as_slice()))?
        };

        out[..len].copy_from_slice(keys.public());
        self.keys = Some(keys);

        tracing::trace!(initiator = self.initiator, len, "wrote HFS f");
        Ok(len)
    }

    /// Read the peer's `f` from the start of `message`
    ///
    /// # Returns
    /// Number of bytes consumed from `message`
    ///
    /// # Errors
    /// * [`HfsError::InvalidState`] if the peer's `f` was already read, or if we
    ///   are the initiator and have not written our own `f` yet
    /// * [`HfsError::InvalidKeyLength`] if `message` is too short
    pub fn read_f(&mut self, message: &[u8]) -> HfsResult<usize> {
        let len = self.read_len();
        if message.len() < len {
            return Err(HfsError::InvalidKeyLength {
                expected: len,
                actual: message.len(),
            });
        }

        if self.initiator {
            if self.rf2.is_some() || self.keys.is_none() {
                return Err(HfsError::InvalidState);
            }
            self.rf2 = Some(ByteArray::from_slice(&message[..len]));
        } else {
            if self.rf1.is_some() {
                return Err(HfsError::InvalidState);
            }
            self.rf1 = Some(ByteArray::from_slice(&message[..len]));
        }

        tracing::trace!(initiator = self.initiator, len, "read HFS f");
        Ok(len)
    }

    /// Perform the `ff` calculation
    ///
    /// Consumes our HFS keypair. The output is meant to be mixed into the
    /// handshake's chaining key.
    ///
    /// # Errors
    /// * [`HfsError::InvalidState`] if `ff` was already performed
    /// * [`HfsError::MissingMaterial`] if either `f` has not been exchanged yet
    pub fn ff(&mut self) -> HfsResult<F::Output> {
        if self.finished {
            return Err(HfsError::InvalidState);
        }
        if self.keys.is_none() {
            return Err(HfsError::MissingMaterial);
        }

        let remote = if self.initiator {
            self.rf2.as_ref().map(|k| k.as_slice())
        } else {
            self.rf1.as_ref().map(|k| k.as_slice())
        }
        .ok_or(HfsError::MissingMaterial)?;

        let keys = self.keys.take().ok_or(HfsError::MissingMaterial)?;
        let out = F::ff(keys, remote)?;
        self.finished = true;

        tracing::debug!(initiator = self.initiator, hfs = F::name(), "HFS ff complete");
        Ok(out)
    }
}
