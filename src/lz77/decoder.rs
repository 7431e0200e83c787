use super::reader::TokenReader;
use super::tokens::LZ77Token;
use super::window::OutputWindow;
use crate::error::Result;
use log::debug;

/// Decode an LZ77 stream back into the original bytes.
///
/// Fails on the first malformed token: an unknown tag, a token truncated by
/// the end of input, or a match reaching back before the start of the output.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut reader = TokenReader::new(data);
    let mut window = OutputWindow::with_capacity(data.len());
    let mut token_count = 0usize;

    while let Some(token) = reader.next_token()? {
        match token {
            LZ77Token::Literal(byte) => window.push_byte(byte),
            LZ77Token::Match { offset, length } => window.copy_back(offset, length)?,
        }
        token_count += 1;
    }

    debug!("lz77: decoded {} tokens into {} bytes", token_count, window.available());
    Ok(window.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, FormatError};

    #[test]
    fn test_empty() {
        assert!(decompress(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_literals_and_match() {
        let data = [0x00, b'A', 0x00, b'B', 0x01, 2, 10];
        assert_eq!(decompress(&data).unwrap(), b"ABABABABABAB");
    }

    #[test]
    fn test_self_overlapping_run() {
        assert_eq!(decompress(&[0x00, b'A', 0x01, 1, 99]).unwrap(), vec![b'A'; 100]);
    }

    #[test]
    fn test_invalid_tag() {
        let err = decompress(&[0x02]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidFormat(FormatError::InvalidTokenType { tag: 0x02, position: 0 })
        ));
        assert!(err.to_string().contains("0x02"));
    }

    #[test]
    fn test_incomplete_match() {
        let err = decompress(&[0x01, 0x01]).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(FormatError::IncompleteMatch { .. })));
    }

    #[test]
    fn test_missing_literal() {
        let err = decompress(&[0x00]).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(FormatError::MissingLiteralByte { .. })));
    }

    #[test]
    fn test_offset_beyond_output() {
        let err = decompress(&[0x01, 0x05, 0x01]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidFormat(FormatError::OffsetOutOfRange { offset: 5, available: 0 })
        ));
    }

    #[test]
    fn test_offset_equal_to_output_allowed() {
        assert_eq!(decompress(&[0x00, b'x', 0x00, b'y', 0x01, 2, 4]).unwrap(), b"xyxyxy");
    }
}
