use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Caller contract errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Encoded stream errors
    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] FormatError),

    // Verification errors
    #[error("Round-trip verification failed: output differs from input at byte {position}")]
    VerificationFailed { position: usize },
}

/// Structural problems found while decoding a compressed stream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    // RLE
    #[error("RLE stream length {len} is odd: expected pairs of (count, byte)")]
    OddLength { len: usize },

    #[error("RLE run length 0 at byte {position}")]
    ZeroRunLength { position: usize },

    // LZ77
    #[error("missing literal byte at byte {position}")]
    MissingLiteralByte { position: usize },

    #[error("incomplete match token at byte {position}")]
    IncompleteMatch { position: usize },

    #[error("zero match offset at byte {position}")]
    ZeroOffset { position: usize },

    #[error("zero back-reference offset at output length {available}")]
    ZeroBackReference { available: usize },

    #[error("offset {offset} exceeds output length {available}")]
    OffsetOutOfRange { offset: u8, available: usize },

    #[error("invalid token type 0x{tag:02x} at byte {position}: expected 0x00 or 0x01")]
    InvalidTokenType { tag: u8, position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
