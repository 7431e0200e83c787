pub mod error;
pub mod lz77;
pub mod processor;
pub mod rle;

pub use error::{Error, FormatError, Result};
pub use lz77::LZ77Token;
pub use processor::Processor;
pub use rle::RunToken;

use std::fmt;
use std::str::FromStr;

/// Compression algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Run-length encoding
    Rle,
    /// Simplified LZ77 with a 20-byte window
    Lz77,
}

impl Algorithm {
    /// Select an algorithm from a pair of mutually exclusive flags.
    /// `operation` only shapes the error message.
    pub fn from_flags(rle: bool, lz: bool, operation: Operation) -> Result<Self> {
        match (rle, lz) {
            (true, false) => Ok(Self::Rle),
            (false, true) => Ok(Self::Lz77),
            (true, true) => Err(Error::InvalidInput(format!(
                "Please specify only one {} algorithm (--rle or --lz)",
                operation.noun()
            ))),
            (false, false) => Err(Error::InvalidInput(format!(
                "Please specify {} algorithm (--rle or --lz)",
                operation.noun()
            ))),
        }
    }

    /// The codec implementing this algorithm
    pub fn codec(self) -> &'static dyn Codec {
        match self {
            Self::Rle => &RleCodec,
            Self::Lz77 => &Lz77Codec,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rle => "rle",
            Self::Lz77 => "lz77",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rle" => Ok(Self::Rle),
            "lz" | "lz77" => Ok(Self::Lz77),
            other => Err(Error::InvalidInput(format!(
                "unknown algorithm '{}' (expected rle or lz)",
                other
            ))),
        }
    }
}

/// Direction of a codec call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Compress,
    Decompress,
}

impl Operation {
    /// "compression" or "decompression"
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Compress => "compression",
            Self::Decompress => "decompression",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Compress => "compress",
            Self::Decompress => "decompress",
        })
    }
}

/// A whole-buffer codec.
///
/// `decompress(compress(data))` must return `data` for every input.
pub trait Codec: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    /// Encode `data` into a new buffer
    fn compress(&self, data: &[u8]) -> Vec<u8>;

    /// Decode `data` into a new buffer, rejecting malformed streams
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Run `operation` on `data`
    fn apply(&self, operation: Operation, data: &[u8]) -> Result<Vec<u8>> {
        match operation {
            Operation::Compress => Ok(self.compress(data)),
            Operation::Decompress => self.decompress(data),
        }
    }
}

/// Run-length codec, see [`rle`]
#[derive(Clone, Copy, Debug, Default)]
pub struct RleCodec;

impl Codec for RleCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Rle
    }

    fn compress(&self, data: &[u8]) -> Vec<u8> {
        rle::compress(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        rle::decompress(data)
    }
}

/// LZ77 codec, see [`lz77`]
#[derive(Clone, Copy, Debug, Default)]
pub struct Lz77Codec;

impl Codec for Lz77Codec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lz77
    }

    fn compress(&self, data: &[u8]) -> Vec<u8> {
        lz77::compress(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        lz77::decompress(data)
    }
}

/// Configuration for a codec run
#[derive(Clone, Debug)]
pub struct CodecConfig {
    /// Codec to use
    pub algorithm: Algorithm,
    /// Compress or decompress
    pub operation: Operation,
    /// Buffer size for I/O operations
    pub buffer_size: usize,
    /// Decode freshly compressed output and compare it with the input
    pub verify: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Rle,
            operation: Operation::Compress,
            buffer_size: 128 * 1024,
            verify: false,
        }
    }
}

/// Statistics from a codec run
#[derive(Clone, Debug, Default)]
pub struct CodecStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// Output was decoded again and matched the input
    pub verified: bool,
}

impl CodecStats {
    /// Output size relative to input size (0.0 for empty input)
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("rle".parse::<Algorithm>().unwrap(), Algorithm::Rle);
        assert_eq!("lz".parse::<Algorithm>().unwrap(), Algorithm::Lz77);
        assert_eq!("LZ77".parse::<Algorithm>().unwrap(), Algorithm::Lz77);
        assert!(matches!("zip".parse::<Algorithm>(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_algorithm_from_flags() {
        let op = Operation::Compress;
        assert_eq!(Algorithm::from_flags(true, false, op).unwrap(), Algorithm::Rle);
        assert_eq!(Algorithm::from_flags(false, true, op).unwrap(), Algorithm::Lz77);

        let err = Algorithm::from_flags(false, false, op).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("Please specify compression algorithm"));
        assert!(matches!(Algorithm::from_flags(true, true, op), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_missing_flag_names_operation() {
        let err = Algorithm::from_flags(false, false, Operation::Decompress).unwrap_err();
        assert!(err.to_string().contains("Please specify decompression algorithm (--rle or --lz)"));
    }

    #[test]
    fn test_codec_dispatch() {
        for algorithm in [Algorithm::Rle, Algorithm::Lz77] {
            let codec = algorithm.codec();
            assert_eq!(codec.algorithm(), algorithm);
            let encoded = codec.apply(Operation::Compress, b"hello hello hello").unwrap();
            assert_eq!(codec.apply(Operation::Decompress, &encoded).unwrap(), b"hello hello hello");
        }
    }

    #[test]
    fn test_ratio() {
        assert_eq!(CodecStats::default().ratio(), 0.0);
        let stats = CodecStats { input_bytes: 200, output_bytes: 50, verified: false };
        assert_eq!(stats.ratio(), 0.25);
    }
}
