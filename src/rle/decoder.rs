use super::tokens::RunToken;
use crate::error::{FormatError, Result};
use log::debug;

/// Expand an RLE stream back into the original bytes.
///
/// The stream must have even length and every count must be non-zero. A
/// zero count is never produced by [`compress`](super::compress) but is
/// rejected here since the input may come from anywhere.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() % 2 != 0 {
        return Err(FormatError::OddLength { len: data.len() }.into());
    }

    let mut output = Vec::new();
    for (index, pair) in data.chunks_exact(2).enumerate() {
        let token = RunToken::from_pair(pair[0], pair[1])
            .ok_or(FormatError::ZeroRunLength { position: index * 2 })?;
        output.resize(output.len() + token.uncompressed_size(), token.value);
    }

    debug!("rle: decoded {} runs into {} bytes", data.len() / 2, output.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty() {
        assert!(decompress(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_expand_pairs() {
        assert_eq!(decompress(&[3, b'x', 1, b'y']).unwrap(), b"xxxy");
    }

    #[test]
    fn test_odd_length() {
        let err = decompress(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(FormatError::OddLength { len: 3 })));
    }

    #[test]
    fn test_zero_count_reports_position() {
        let err = decompress(&[2, b'a', 0, b'b']).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(FormatError::ZeroRunLength { position: 2 })));
    }

    #[test]
    fn test_adjacent_equal_runs_accepted() {
        // The encoder never splits a run below the cap, but decoding must not care
        assert_eq!(decompress(&[2, b'q', 2, b'q']).unwrap(), b"qqqq");
    }
}
