use crate::error::{FormatError, Result};

/// Decoder output that doubles as the back-reference source
pub struct OutputWindow {
    buffer: Vec<u8>,
}

impl OutputWindow {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buffer: Vec::with_capacity(capacity) }
    }

    /// Add a single byte to the output
    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    /// Append `length` bytes starting `offset` bytes back from the end.
    ///
    /// `offset` must be in `1..=available()`. Bytes are copied one at a time,
    /// so when `length > offset` later bytes of the copy read bytes appended
    /// earlier by the same copy.
    pub fn copy_back(&mut self, offset: u8, length: u8) -> Result<()> {
        let available = self.buffer.len();
        if offset == 0 {
            return Err(FormatError::ZeroBackReference { available }.into());
        }
        if offset as usize > available {
            return Err(FormatError::OffsetOutOfRange { offset, available }.into());
        }

        let start = available - offset as usize;
        self.buffer.reserve(length as usize);
        for i in 0..length as usize {
            let byte = self.buffer[start + i];
            self.buffer.push(byte);
        }
        Ok(())
    }

    /// Number of bytes produced so far
    pub fn available(&self) -> usize {
        self.buffer.len()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

impl Default for OutputWindow {
    fn default() -> Self {
        Self::new()
    }
}
