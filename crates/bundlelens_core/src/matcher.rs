use log::trace;

/// Find the byte index of the delimiter closing the one at `open_pos`.
///
/// Supports `{` and `[`. Only delimiters of the same kind affect the depth, and
/// string or comment context is ignored, so a brace inside a literal will skew
/// the result. Returns `None` if `open_pos` does not hold an opener or the
/// buffer ends before the depth returns to zero.
pub fn find_matching_close(content: &str, open_pos: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let (open, close) = match bytes.get(open_pos)? {
        b'{' => (b'{', b'}'),
        b'[' => (b'[', b']'),
        _ => return None,
    };

    let mut depth = 1usize;
    for (offset, &b) in bytes[open_pos + 1..].iter().enumerate() {
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Some(open_pos + 1 + offset);
            }
        }
    }

    trace!("Unterminated delimiter at byte {}", open_pos);
    None
}
