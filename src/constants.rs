/// Maximum number of tokens in a pre-message
pub const MAX_PRE_TOKENS: usize = 1;
/// Maximum number of messages in a handshake pattern
pub const MAX_MESSAGES: usize = 8;
/// Maximum number of tokens in a single handshake message
pub const MAX_MESSAGE_TOKENS: usize = 8;
/// Maximum length of a full Noise protocol name
pub const MAX_PROTOCOL_NAME_LEN: usize = 128;
/// Name reported by the null HFS function
pub const NULL_HFS_NAME: &str = "none";
