use std::num::NonZeroU8;

/// Longest run a single pair can describe
pub const MAX_RUN_LENGTH: u8 = 255;

/// A single `(count, value)` pair in an RLE stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunToken {
    /// Number of repetitions (1-255)
    pub count: NonZeroU8,
    /// The repeated byte
    pub value: u8,
}

impl RunToken {
    pub fn new(count: NonZeroU8, value: u8) -> Self {
        Self { count, value }
    }

    /// Build a token from its wire pair. Returns None for a zero count
    pub fn from_pair(count: u8, value: u8) -> Option<Self> {
        NonZeroU8::new(count).map(|count| Self { count, value })
    }

    /// Wire representation: count first, then value
    #[inline]
    pub fn to_bytes(self) -> [u8; 2] {
        [self.count.get(), self.value]
    }

    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        self.count.get() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bytes_order() {
        assert_eq!(RunToken::from_pair(3, b'Z').unwrap().to_bytes(), [3, b'Z']);
    }

    #[test]
    fn test_zero_count_unrepresentable() {
        assert_eq!(RunToken::from_pair(0, 1), None);
    }

    #[test]
    fn test_uncompressed_size() {
        let token = RunToken::from_pair(MAX_RUN_LENGTH, 0).unwrap();
        assert_eq!(token.uncompressed_size(), 255);
    }
}
