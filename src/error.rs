use displaydoc::Display;
use thiserror_no_std::Error;

/// Errors that can happen during HFS operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HfsError {
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
    #[error("Keypair was produced by a different HFS function")]
    UnsupportedKeypairVariant,
    #[error("Null HFS function invoked")]
    NullCapabilityInvoked,
    #[error("Missing key material for the requested HFS operation")]
    MissingMaterial,
    #[error("Requested an HFS operation in invalid state")]
    InvalidState,
    #[error("Provided buffer too small for HFS public key")]
    BufferTooSmall,
    #[error("KEM error: {0}")]
    Kem(#[from] KemError),
}

pub type HfsResult<T> = Result<T, HfsError>;

/// Errors that can happen during KEM operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KemError {
    #[error("Invalid input")]
    Input,
    #[error("Decapsulation error")]
    Decapsulation,
    #[error("Encapsulation error")]
    Encapsulation,
    #[error("Error generating keys")]
    KeyGeneration,
}

pub type KemResult<T> = Result<T, KemError>;

#[derive(Debug, Error, Display, Clone, Copy, PartialEq, Eq)]
/// Errors that can happen while defining or looking up handshake patterns
pub enum PatternError {
    /// Unknown handshake pattern
    UnknownPattern,
    /// Duplicate pattern name in registry
    DuplicateName,
    /// Pre-messages may only contain a single `s` token
    InvalidPreMessage,
    /// Handshake pattern has no messages
    Empty,
    /// Handshake pattern exceeds capacity limits
    TooLarge,
    /// Token sent more than once by the same party
    DuplicateToken,
    /// DH token used before both keys are known
    MissingKey,
    /// `f`/`ff` tokens used in an inconsistent order
    InvalidHfsOrder,
    /// Protocol name does not fit the name buffer
    NameTooLong,
}

pub type PatternResult<T> = Result<T, PatternError>;
