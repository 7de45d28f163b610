//! Pre-made Noise handshake patterns and tools for defining new ones
//!
//! All built-in patterns live in a constant registry that is validated at
//! compile time. Use [`lookup`] to fetch a pattern by name or one of the
//! `noise_*` constructors to get a specific one.

use core::fmt::Write;

use arrayvec::{ArrayString, ArrayVec};

use crate::constants::{MAX_MESSAGES, MAX_MESSAGE_TOKENS, MAX_PRE_TOKENS, MAX_PROTOCOL_NAME_LEN};
use crate::error::{PatternError, PatternResult};
use crate::traits::{CryptoComponent, Hfs};

/// Handshake tokens of the Noise framework and the HFS extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    E,
    S,
    EE,
    ES,
    SE,
    SS,
    F,
    FF,
}

impl Token {
    /// Token as written in Noise pattern notation
    pub fn as_str(self) -> &'static str {
        match self {
            Token::E => "e",
            Token::S => "s",
            Token::EE => "ee",
            Token::ES => "es",
            Token::SE => "se",
            Token::SS => "ss",
            Token::F => "f",
            Token::FF => "ff",
        }
    }

    /// Is this an HFS token
    pub const fn is_hfs(self) -> bool {
        matches!(self, Token::F | Token::FF)
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static handshake pattern definition
///
/// Messages alternate between the parties, starting with the initiator.
#[derive(Clone, Copy, Debug)]
pub struct PatternDef {
    pub name: &'static str,
    pub pre_initiator: &'static [Token],
    pub pre_responder: &'static [Token],
    pub messages: &'static [&'static [Token]],
}

impl PatternDef {
    /// Check that the definition forms a valid handshake pattern
    pub const fn validate(&self) -> PatternResult<()> {
        check_tokens(self.pre_initiator, self.pre_responder, self.messages)
    }
}

/// Noise handshake pattern
///
/// Contains token sequences for pre-shared information
/// as well as actual handshake messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandshakePattern {
    name: &'static str,
    pre_initiator: ArrayVec<Token, MAX_PRE_TOKENS>,
    pre_responder: ArrayVec<Token, MAX_PRE_TOKENS>,
    messages: ArrayVec<ArrayVec<Token, MAX_MESSAGE_TOKENS>, MAX_MESSAGES>,
}

impl HandshakePattern {
    /// Initialize a new handshake pattern
    ///
    /// # Arguments:
    /// * `name` - Pattern name
    /// * `pre_initiator` - Tokens shared by initiator pre handshake
    /// * `pre_responder` - Tokens shared by responder pre handshake
    /// * `messages` - Handshake messages, alternating and starting with the initiator
    ///
    /// # Errors
    /// Any [`PatternError`] describing why the token sequence is not a valid pattern
    pub fn new(
        name: &'static str,
        pre_initiator: &[Token],
        pre_responder: &[Token],
        messages: &[&[Token]],
    ) -> PatternResult<Self> {
        check_tokens(pre_initiator, pre_responder, messages)?;
        Ok(Self::build(name, pre_initiator, pre_responder, messages))
    }

    fn from_def(def: &PatternDef) -> Self {
        Self::build(def.name, def.pre_initiator, def.pre_responder, def.messages)
    }

    // Capacities have been checked by `check_tokens`
    fn build(
        name: &'static str,
        pre_initiator: &[Token],
        pre_responder: &[Token],
        messages: &[&[Token]],
    ) -> Self {
        Self {
            name,
            pre_initiator: pre_initiator.iter().copied().collect(),
            pre_responder: pre_responder.iter().copied().collect(),
            messages: messages
                .iter()
                .map(|m| m.iter().copied().collect())
                .collect(),
        }
    }

    /// Get name of the pattern
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get initiators pre shared data
    pub fn pre_initiator(&self) -> &[Token] {
        &self.pre_initiator
    }

    /// Get responders pre shared data
    pub fn pre_responder(&self) -> &[Token] {
        &self.pre_responder
    }

    /// Iterate over all handshake messages in order
    pub fn messages(&self) -> impl Iterator<Item = &[Token]> {
        self.messages.iter().map(|m| m.as_slice())
    }

    /// Get message pattern based on message index
    pub fn message(&self, index: usize) -> Option<&[Token]> {
        self.messages.get(index).map(|m| m.as_slice())
    }

    /// Number of handshake messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false for validated patterns
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Is the message at `index` sent by the initiator
    pub fn is_initiator_message(&self, index: usize) -> bool {
        index % 2 == 0
    }

    /// Check if this is a one-way pattern
    pub fn is_one_way(&self) -> bool {
        self.messages.len() == 1
    }

    /// Check if the pattern uses the HFS extension
    pub fn is_hfs(&self) -> bool {
        self.messages().flatten().any(|t| t.is_hfs())
    }

    /// Build full Noise protocol name for this pattern
    ///
    /// HFS patterns append the HFS function name to the DH name:
    /// `Noise_XXhfs_25519+MLKEM1024_ChaChaPoly_BLAKE2b`.
    ///
    /// # Errors
    /// * [`PatternError::NameTooLong`] if the name does not fit [`MAX_PROTOCOL_NAME_LEN`]
    pub fn protocol_name<DH, HFS, C, H>(&self) -> PatternResult<ArrayString<MAX_PROTOCOL_NAME_LEN>>
    where
        DH: CryptoComponent,
        HFS: Hfs,
        C: CryptoComponent,
        H: CryptoComponent,
    {
        let mut ret = ArrayString::new();

        let res = if self.is_hfs() {
            write!(
                &mut ret,
                "Noise_{}_{}+{}_{}_{}",
                self.name,
                DH::name(),
                HFS::name(),
                C::name(),
                H::name()
            )
        } else {
            write!(
                &mut ret,
                "Noise_{}_{}_{}_{}",
                self.name,
                DH::name(),
                C::name(),
                H::name()
            )
        };

        res.map_err(|_| PatternError::NameTooLong)?;
        Ok(ret)
    }
}

impl core::fmt::Display for HandshakePattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fn write_tokens(
            f: &mut core::fmt::Formatter<'_>,
            arrow: &str,
            tokens: &[Token],
        ) -> core::fmt::Result {
            write!(f, "{arrow}")?;
            for (i, t) in tokens.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{t}")?;
            }
            writeln!(f)
        }

        writeln!(f, "{}:", self.name)?;
        if !self.pre_initiator.is_empty() {
            write_tokens(f, "->", &self.pre_initiator)?;
        }
        if !self.pre_responder.is_empty() {
            write_tokens(f, "<-", &self.pre_responder)?;
        }
        if !self.pre_initiator.is_empty() || !self.pre_responder.is_empty() {
            writeln!(f, "...")?;
        }
        for (i, m) in self.messages().enumerate() {
            let arrow = if self.is_initiator_message(i) { "->" } else { "<-" };
            write_tokens(f, arrow, m)?;
        }
        Ok(())
    }
}

/// Validate a token sequence against the Noise and HFS pattern rules
///
/// Index 0 of the per-party arrays is the initiator, index 1 the responder.
const fn check_tokens(
    pre_initiator: &[Token],
    pre_responder: &[Token],
    messages: &[&[Token]],
) -> PatternResult<()> {
    if pre_initiator.len() > MAX_PRE_TOKENS || pre_responder.len() > MAX_PRE_TOKENS {
        return Err(PatternError::InvalidPreMessage);
    }
    if !only_static(pre_initiator) || !only_static(pre_responder) {
        return Err(PatternError::InvalidPreMessage);
    }
    if messages.is_empty() {
        return Err(PatternError::Empty);
    }
    if messages.len() > MAX_MESSAGES {
        return Err(PatternError::TooLarge);
    }

    let mut e = [false, false];
    let mut s = [!pre_initiator.is_empty(), !pre_responder.is_empty()];
    let mut f = [false, false];
    let mut dh = [false; 4];
    let mut ff = false;

    let mut m = 0;
    while m < messages.len() {
        let message = messages[m];
        if message.len() > MAX_MESSAGE_TOKENS {
            return Err(PatternError::TooLarge);
        }
        let sender = m % 2;

        let mut t = 0;
        while t < message.len() {
            match message[t] {
                Token::E => {
                    if e[sender] {
                        return Err(PatternError::DuplicateToken);
                    }
                    e[sender] = true;
                }
                Token::S => {
                    if s[sender] {
                        return Err(PatternError::DuplicateToken);
                    }
                    s[sender] = true;
                }
                Token::EE | Token::ES | Token::SE | Token::SS => {
                    let (slot, ready) = match message[t] {
                        Token::EE => (0, e[0] && e[1]),
                        Token::ES => (1, e[0] && s[1]),
                        Token::SE => (2, s[0] && e[1]),
                        _ => (3, s[0] && s[1]),
                    };
                    if !ready {
                        return Err(PatternError::MissingKey);
                    }
                    if dh[slot] {
                        return Err(PatternError::DuplicateToken);
                    }
                    dh[slot] = true;
                }
                Token::F => {
                    if f[sender] {
                        return Err(PatternError::DuplicateToken);
                    }
                    // Initiator's f comes first, responder's f is generated against it
                    if !e[sender] || (sender == 1 && !f[0]) {
                        return Err(PatternError::InvalidHfsOrder);
                    }
                    f[sender] = true;
                }
                Token::FF => {
                    if ff {
                        return Err(PatternError::DuplicateToken);
                    }
                    if !(f[0] && f[1]) {
                        return Err(PatternError::InvalidHfsOrder);
                    }
                    ff = true;
                }
            }
            t += 1;
        }
        m += 1;
    }

    if f[0] != ff || f[1] != ff {
        return Err(PatternError::InvalidHfsOrder);
    }

    Ok(())
}

const fn only_static(tokens: &[Token]) -> bool {
    let mut i = 0;
    while i < tokens.len() {
        if !matches!(tokens[i], Token::S) {
            return false;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn check_table(table: &[PatternDef]) -> PatternResult<()> {
    let mut i = 0;
    while i < table.len() {
        if let Err(e) = table[i].validate() {
            return Err(e);
        }
        let mut j = i + 1;
        while j < table.len() {
            if str_eq(table[i].name, table[j].name) {
                return Err(PatternError::DuplicateName);
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

use Token::{E, EE, ES, F, FF, S, SE, SS};

const N: PatternDef = PatternDef {
    name: "N",
    pre_initiator: &[],
    pre_responder: &[S],
    messages: &[&[E, ES]],
};

const K: PatternDef = PatternDef {
    name: "K",
    pre_initiator: &[S],
    pre_responder: &[S],
    messages: &[&[E, ES, SS]],
};

const X: PatternDef = PatternDef {
    name: "X",
    pre_initiator: &[],
    pre_responder: &[S],
    messages: &[&[E, ES, S, SS]],
};

const NN: PatternDef = PatternDef {
    name: "NN",
    pre_initiator: &[],
    pre_responder: &[],
    messages: &[&[E], &[E, EE]],
};

const KN: PatternDef = PatternDef {
    name: "KN",
    pre_initiator: &[S],
    pre_responder: &[],
    messages: &[&[E], &[E, EE, SE]],
};

const NK: PatternDef = PatternDef {
    name: "NK",
    pre_initiator: &[],
    pre_responder: &[S],
    messages: &[&[E, ES], &[E, EE]],
};

const KK: PatternDef = PatternDef {
    name: "KK",
    pre_initiator: &[S],
    pre_responder: &[S],
    messages: &[&[E, ES, SS], &[E, EE, SE]],
};

const NX: PatternDef = PatternDef {
    name: "NX",
    pre_initiator: &[],
    pre_responder: &[],
    messages: &[&[E], &[E, EE, S, ES]],
};

const KX: PatternDef = PatternDef {
    name: "KX",
    pre_initiator: &[S],
    pre_responder: &[],
    messages: &[&[E], &[E, EE, SE, S, ES]],
};

const XN: PatternDef = PatternDef {
    name: "XN",
    pre_initiator: &[],
    pre_responder: &[],
    messages: &[&[E], &[E, EE], &[S, SE]],
};

const XK: PatternDef = PatternDef {
    name: "XK",
    pre_initiator: &[],
    pre_responder: &[S],
    messages: &[&[E, ES], &[E, EE], &[S, SE]],
};

const IN: PatternDef = PatternDef {
    name: "IN",
    pre_initiator: &[],
    pre_responder: &[],
    messages: &[&[E, S], &[E, EE, SE]],
};

const IK: PatternDef = PatternDef {
    name: "IK",
    pre_initiator: &[],
    pre_responder: &[S],
    messages: &[&[E, ES, S, SS], &[E, EE, SE]],
};

const XX: PatternDef = PatternDef {
    name: "XX",
    pre_initiator: &[],
    pre_responder: &[],
    messages: &[&[E], &[E, EE, S, ES], &[S, SE]],
};

const IX: PatternDef = PatternDef {
    name: "IX",
    pre_initiator: &[],
    pre_responder: &[],
    messages: &[&[E, S], &[E, EE, SE, S, ES]],
};

const XXHFS: PatternDef = PatternDef {
    name: "XXhfs",
    pre_initiator: &[],
    pre_responder: &[],
    messages: &[&[E, F], &[E, F, EE, FF, S, ES], &[S, SE]],
};

/// All built-in handshake patterns
pub const PATTERNS: &[PatternDef] = &[
    N, K, X, NN, KN, NK, KK, NX, KX, XN, XK, IN, IK, XX, IX, XXHFS,
];

const _: () = assert!(
    check_table(PATTERNS).is_ok(),
    "invalid built-in handshake pattern table"
);

/// Look up a built-in handshake pattern by name
///
/// # Errors
/// * [`PatternError::UnknownPattern`] if no pattern with the given name exists
pub fn lookup(name: &str) -> PatternResult<HandshakePattern> {
    PATTERNS
        .iter()
        .find(|def| def.name == name)
        .map(HandshakePattern::from_def)
        .ok_or(PatternError::UnknownPattern)
}

/// Names of all built-in handshake patterns
pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|def| def.name)
}

/// Re-run the registry self-check
///
/// The same check is enforced at compile time for [`PATTERNS`].
pub fn validate_registry() -> PatternResult<()> {
    check_table(PATTERNS)
}

// One-way patterns:

/// ```text
/// <- s
/// ...
/// -> e, es
/// ```
pub fn noise_n() -> HandshakePattern {
    HandshakePattern::from_def(&N)
}

/// ```text
/// -> s
/// <- s
/// ...
/// -> e, es, ss
/// ```
pub fn noise_k() -> HandshakePattern {
    HandshakePattern::from_def(&K)
}

/// ```text
/// <- s
/// ...
/// -> e, es, s, ss
/// ```
pub fn noise_x() -> HandshakePattern {
    HandshakePattern::from_def(&X)
}

// Interactive patterns:

/// ```text
/// -> e
/// <- e, ee
/// ```
pub fn noise_nn() -> HandshakePattern {
    HandshakePattern::from_def(&NN)
}

/// ```text
/// -> s
/// ...
/// -> e
/// <- e, ee, se
/// ```
pub fn noise_kn() -> HandshakePattern {
    HandshakePattern::from_def(&KN)
}

/// ```text
/// <- s
/// ...
/// -> e, es
/// <- e, ee
/// ```
pub fn noise_nk() -> HandshakePattern {
    HandshakePattern::from_def(&NK)
}

/// ```text
/// -> s
/// <- s
/// ...
/// -> e, es, ss
/// <- e, ee, se
/// ```
pub fn noise_kk() -> HandshakePattern {
    HandshakePattern::from_def(&KK)
}

/// ```text
/// -> e
/// <- e, ee, s, es
/// ```
pub fn noise_nx() -> HandshakePattern {
    HandshakePattern::from_def(&NX)
}

/// ```text
/// -> s
/// ...
/// -> e
/// <- e, ee, se, s, es
/// ```
pub fn noise_kx() -> HandshakePattern {
    HandshakePattern::from_def(&KX)
}

/// ```text
/// -> e
/// <- e, ee
/// -> s, se
/// ```
pub fn noise_xn() -> HandshakePattern {
    HandshakePattern::from_def(&XN)
}

/// ```text
/// <- s
/// ...
/// -> e, es
/// <- e, ee
/// -> s, se
/// ```
pub fn noise_xk() -> HandshakePattern {
    HandshakePattern::from_def(&XK)
}

/// ```text
/// -> e, s
/// <- e, ee, se
/// ```
pub fn noise_in() -> HandshakePattern {
    HandshakePattern::from_def(&IN)
}

/// ```text
/// <- s
/// ...
/// -> e, es, s, ss
/// <- e, ee, se
/// ```
pub fn noise_ik() -> HandshakePattern {
    HandshakePattern::from_def(&IK)
}

/// ```text
/// -> e
/// <- e, ee, s, es
/// -> s, se
/// ```
pub fn noise_xx() -> HandshakePattern {
    HandshakePattern::from_def(&XX)
}

/// ```text
/// -> e, s
/// <- e, ee, se, s, es
/// ```
pub fn noise_ix() -> HandshakePattern {
    HandshakePattern::from_def(&IX)
}

// HFS patterns:

/// ```text
/// -> e, f
/// <- e, f, ee, ff, s, es
/// -> s, se
/// ```
pub fn noise_xxhfs() -> HandshakePattern {
    HandshakePattern::from_def(&XXHFS)
}
