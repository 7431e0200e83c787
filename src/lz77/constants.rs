/// Number of preceding input positions searched for a match
pub const WINDOW_SIZE: usize = 20;

/// Longest match a single token can describe
pub const MAX_MATCH_LENGTH: usize = 255;

/// Shortest match worth emitting (a match token costs 3 bytes)
pub const MIN_MATCH_LENGTH: usize = 3;

/// Tag byte of a literal token
pub const TAG_LITERAL: u8 = 0x00;

/// Tag byte of a match token
pub const TAG_MATCH: u8 = 0x01;

/// Encoded size of a literal token
pub const LITERAL_TOKEN_SIZE: usize = 2;

/// Encoded size of a match token
pub const MATCH_TOKEN_SIZE: usize = 3;

// Offsets are stored in a single byte.
const _: () = assert!(WINDOW_SIZE <= u8::MAX as usize);
const _: () = assert!(MAX_MATCH_LENGTH <= u8::MAX as usize);
