use crate::error::{Error, Result};
use crate::{Codec, CodecConfig, CodecStats, Operation};
use log::{debug, info};
use std::io::{BufReader, BufWriter, Read, Write};

/// Runs one codec operation from a reader to a writer.
///
/// The codecs work on whole buffers, so the input is read to the end before
/// the codec runs and the output is written in one piece afterwards.
pub struct Processor {
    config: CodecConfig,
}

impl Processor {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Read all of `input`, run the configured codec, write the result
    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<CodecStats> {
        let data = self.read_input(input)?;
        let result = self.process(&data)?;
        self.write_output(output, &result)?;
        Ok(self.stats(&data, &result))
    }

    /// Read `input` to the end through a buffer of the configured size
    pub fn read_input<R: Read>(&self, input: R) -> Result<Vec<u8>> {
        let mut reader = BufReader::with_capacity(self.config.buffer_size, input);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        debug!("read {} bytes of input", data.len());
        Ok(data)
    }

    /// Write `data` to `output` through a buffer of the configured size
    pub fn write_output<W: Write>(&self, output: W, data: &[u8]) -> Result<()> {
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, output);
        writer.write_all(data)?;
        writer.flush()?;
        Ok(())
    }

    /// Statistics for a completed run over `input` producing `output`
    pub fn stats(&self, input: &[u8], output: &[u8]) -> CodecStats {
        CodecStats {
            input_bytes: input.len() as u64,
            output_bytes: output.len() as u64,
            verified: self.verifies(),
        }
    }

    /// Run the configured codec on an in-memory buffer
    pub fn process(&self, data: &[u8]) -> Result<Vec<u8>> {
        let codec = self.config.algorithm.codec();
        let result = codec.apply(self.config.operation, data)?;

        if self.verifies() {
            verify_roundtrip(codec, data, &result)?;
            debug!("verified {} round trip of {} bytes", self.config.algorithm, data.len());
        }

        info!(
            "{} {}: {} -> {} bytes",
            self.config.algorithm,
            self.config.operation,
            data.len(),
            result.len()
        );
        Ok(result)
    }

    fn verifies(&self) -> bool {
        self.config.verify && self.config.operation == Operation::Compress
    }
}

/// Decode `encoded` with `codec` and check it reproduces `original`.
///
/// Any failure, including a decode error, is reported as
/// [`Error::VerificationFailed`]; a decode error counts as a difference at
/// byte 0.
fn verify_roundtrip(codec: &dyn Codec, original: &[u8], encoded: &[u8]) -> Result<()> {
    let decoded = codec.decompress(encoded).map_err(|e| {
        debug!("verification decode failed: {}", e);
        Error::VerificationFailed { position: 0 }
    })?;
    match first_difference(original, &decoded) {
        Some(position) => Err(Error::VerificationFailed { position }),
        None => Ok(()),
    }
}

/// Position of the first byte where `a` and `b` differ, including a length
/// difference
fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter().zip(b).position(|(x, y)| x != y).or_else(|| {
        if a.len() != b.len() {
            Some(a.len().min(b.len()))
        } else {
            None
        }
    })
}
