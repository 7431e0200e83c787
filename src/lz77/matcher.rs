use super::constants::{MAX_MATCH_LENGTH, WINDOW_SIZE};

/// Best back-reference found for a position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchCandidate {
    /// Distance back from the current position (1..=WINDOW_SIZE)
    pub offset: usize,
    /// Number of matching bytes (1..=MAX_MATCH_LENGTH)
    pub length: usize,
}

/// Length of the common run starting at `start` and `pos`, capped at
/// [`MAX_MATCH_LENGTH`] and at the end of `data`.
///
/// Both sides read the input buffer, so a run starting at `start` may extend
/// past `pos` into the bytes it is being compared against.
#[inline]
fn match_length(data: &[u8], start: usize, pos: usize) -> usize {
    data[start..]
        .iter()
        .zip(&data[pos..])
        .take(MAX_MATCH_LENGTH)
        .take_while(|(a, b)| a == b)
        .count()
}

/// Brute-force search of the window preceding `pos` for the longest match.
///
/// Candidates are scanned from the oldest window position forward and only a
/// strictly longer run replaces the current best, so on ties the first
/// candidate scanned wins. Returns `None` when no candidate matches even one
/// byte, or when `pos` is past the end of `data`.
pub fn find_longest_match(data: &[u8], pos: usize) -> Option<MatchCandidate> {
    if pos >= data.len() {
        return None;
    }

    let mut best: Option<MatchCandidate> = None;
    for start in pos.saturating_sub(WINDOW_SIZE)..pos {
        let length = match_length(data, start, pos);
        if length > best.map_or(0, |m| m.length) {
            best = Some(MatchCandidate { offset: pos - start, length });
            if length == MAX_MATCH_LENGTH {
                break;
            }
        }
    }
    best
}
