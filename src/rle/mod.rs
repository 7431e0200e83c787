//! Run-length encoding.
//!
//! A stream is a sequence of `(count, value)` byte pairs with `count` in
//! `1..=255`. Runs longer than 255 bytes are split across several pairs.

pub mod decoder;
pub mod encoder;
pub mod tokens;

pub use decoder::decompress;
pub use encoder::{compress, tokenize};
pub use tokens::{RunToken, MAX_RUN_LENGTH};
