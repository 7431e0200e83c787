use super::constants::MIN_MATCH_LENGTH;
use super::matcher::find_longest_match;
use super::tokens::LZ77Token;
use log::debug;

/// Greedily convert `data` into a token stream.
///
/// At each position the longest match in the window is taken if it is at
/// least [`MIN_MATCH_LENGTH`] bytes long; otherwise the byte is emitted as a
/// literal.
pub fn tokenize(data: &[u8]) -> Vec<LZ77Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        match find_longest_match(data, pos) {
            Some(m) if m.length >= MIN_MATCH_LENGTH => {
                // Both fit a byte: offset <= WINDOW_SIZE, length <= MAX_MATCH_LENGTH
                tokens.push(LZ77Token::Match { offset: m.offset as u8, length: m.length as u8 });
                pos += m.length;
            }
            _ => {
                tokens.push(LZ77Token::Literal(data[pos]));
                pos += 1;
            }
        }
    }

    tokens
}

/// LZ77 encode `data`. Empty input gives empty output.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let tokens = tokenize(data);
    let mut output = Vec::with_capacity(tokens.iter().map(LZ77Token::encoded_size).sum());
    for token in &tokens {
        token.write_to(&mut output);
    }

    let matches = tokens.iter().filter(|t| matches!(t, LZ77Token::Match { .. })).count();
    debug!(
        "lz77: encoded {} bytes as {} literals and {} matches ({} bytes)",
        data.len(),
        tokens.len() - matches,
        matches,
        output.len()
    );
    output
}
