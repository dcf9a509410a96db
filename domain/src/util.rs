//! Shared utility functions.

/// Truncate a string to at most `max_bytes` without splitting a UTF-8
/// character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview of model text for log messages.
///
/// Whitespace runs (including newlines) collapse to one space; the result is
/// cut to `max_bytes` and marked with `...` when shortened.
pub fn preview(s: &str, max_bytes: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let cut = truncate_str(&collapsed, max_bytes);
    if cut.len() < collapsed.len() {
        format!("{cut}...")
    } else {
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("hi", 10), "hi");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        let s = "αβγ"; // 2 bytes each
        assert_eq!(truncate_str(s, 3), "α");
        assert_eq!(truncate_str(s, 4), "αβ");
    }

    #[test]
    fn preview_collapses_lines() {
        assert_eq!(preview("step 1\n\n  step 2", 100), "step 1 step 2");
    }

    #[test]
    fn preview_marks_truncation() {
        assert_eq!(preview("abcdefgh", 3), "abc...");
        assert_eq!(preview("abc", 3), "abc");
    }
}
