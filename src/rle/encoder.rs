use super::tokens::{RunToken, MAX_RUN_LENGTH};
use log::debug;
use std::num::NonZeroU8;

/// Split `data` into maximal runs, each capped at [`MAX_RUN_LENGTH`]
pub fn tokenize(data: &[u8]) -> Vec<RunToken> {
    let mut tokens = Vec::new();
    let Some((&first, rest)) = data.split_first() else {
        return tokens;
    };

    let mut current = first;
    let mut count = NonZeroU8::MIN;

    for &byte in rest {
        if byte == current && count.get() < MAX_RUN_LENGTH {
            count = count.saturating_add(1);
        } else {
            tokens.push(RunToken::new(count, current));
            current = byte;
            count = NonZeroU8::MIN;
        }
    }
    tokens.push(RunToken::new(count, current));

    tokens
}

/// Run-length encode `data`. Empty input gives empty output.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let tokens = tokenize(data);
    let mut output = Vec::with_capacity(tokens.len() * 2);
    for token in &tokens {
        output.extend_from_slice(&token.to_bytes());
    }

    debug!("rle: encoded {} bytes as {} runs ({} bytes)", data.len(), tokens.len(), output.len());
    output
}
