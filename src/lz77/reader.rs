use super::constants::{TAG_LITERAL, TAG_MATCH};
use super::tokens::LZ77Token;
use crate::error::{FormatError, Result};

/// Cursor over an encoded LZ77 stream
///
/// Each call to [`next_token`](Self::next_token) consumes one complete token.
/// A token cut short by the end of the stream is an error.
pub struct TokenReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TokenReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Byte position of the next token
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Parse the next token.
    /// Returns None when the stream is exhausted
    pub fn next_token(&mut self) -> Result<Option<LZ77Token>> {
        let start = self.pos;
        let Some(&tag) = self.data.get(start) else {
            return Ok(None);
        };
        let payload = &self.data[start + 1..];

        let token = match tag {
            TAG_LITERAL => {
                let &byte =
                    payload.first().ok_or(FormatError::MissingLiteralByte { position: start })?;
                LZ77Token::Literal(byte)
            }
            TAG_MATCH => {
                let [offset, length] = match payload {
                    [offset, length, ..] => [*offset, *length],
                    _ => return Err(FormatError::IncompleteMatch { position: start }.into()),
                };
                if offset == 0 {
                    return Err(FormatError::ZeroOffset { position: start }.into());
                }
                LZ77Token::Match { offset, length }
            }
            _ => return Err(FormatError::InvalidTokenType { tag, position: start }.into()),
        };

        self.pos += token.encoded_size();
        Ok(Some(token))
    }
}

impl Iterator for TokenReader<'_> {
    type Item = Result<LZ77Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next_token();
        if result.is_err() {
            // Stop after the first error
            self.pos = self.data.len();
        }
        result.transpose()
    }
}
