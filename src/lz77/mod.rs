//! Simplified LZ77.
//!
//! The encoder searches the previous [`WINDOW_SIZE`] input positions for the
//! longest match and emits either a literal or a back-reference token:
//!
//! - Literal: `0x00, byte`
//! - Match: `0x01, offset, length`
//!
//! There is no header, length prefix or end marker.

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod matcher;
pub mod reader;
pub mod tokens;
pub mod window;

pub use constants::*;
pub use decoder::decompress;
pub use encoder::{compress, tokenize};
pub use matcher::{find_longest_match, MatchCandidate};
pub use reader::TokenReader;
pub use tokens::LZ77Token;
pub use window::OutputWindow;
