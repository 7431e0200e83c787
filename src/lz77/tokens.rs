use super::constants::{LITERAL_TOKEN_SIZE, MATCH_TOKEN_SIZE, TAG_LITERAL, TAG_MATCH};

/// Represents a single token in the LZ77 stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LZ77Token {
    /// A literal byte
    Literal(u8),
    /// A back-reference: copy `length` bytes from `offset` bytes back
    Match { offset: u8, length: u8 },
}

impl LZ77Token {
    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            LZ77Token::Literal(_) => 1,
            LZ77Token::Match { length, .. } => *length as usize,
        }
    }

    /// Returns the number of bytes this token occupies in the stream
    pub fn encoded_size(&self) -> usize {
        match self {
            LZ77Token::Literal(_) => LITERAL_TOKEN_SIZE,
            LZ77Token::Match { .. } => MATCH_TOKEN_SIZE,
        }
    }

    /// Append the wire representation of this token to `out`
    #[inline]
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match *self {
            LZ77Token::Literal(byte) => out.extend_from_slice(&[TAG_LITERAL, byte]),
            LZ77Token::Match { offset, length } => {
                out.extend_from_slice(&[TAG_MATCH, offset, length])
            }
        }
    }
}
