//! Allocation-free byte scanning over the response buffer.

/// Returns the offset of the first `byte` within the first `max_len` bytes
/// of `span`, or `None` if it does not occur there.
pub fn find_first(span: &[u8], byte: u8, max_len: usize) -> Option<usize> {
    let end = max_len.min(span.len());
    span[..end].iter().position(|&b| b == byte)
}

/// Returns whether `span` starts with `prefix`, comparing case-sensitively.
///
/// Only the first `span_len` bytes of `span` are considered; a prefix longer
/// than that never matches.
pub fn starts_with(span: &[u8], prefix: &[u8], span_len: usize) -> bool {
    let end = span_len.min(span.len());
    span[..end].starts_with(prefix)
}

/// Returns whether `needle` occurs anywhere in `haystack`.
pub(crate) fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn find_first_hits_and_misses() {
        let line = b"HTTP/1.0 200 OK\r\n";
        assert_eq!(find_first(line, b' ', line.len()), Some(8));
        assert_eq!(find_first(line, b'\n', line.len()), Some(16));
        assert_eq!(find_first(line, b'\n', 16), None);
        assert_eq!(find_first(line, b'x', line.len()), None);
        assert_eq!(find_first(b"", b' ', 10), None);
    }

    #[test]
    fn max_len_past_the_span_is_clamped() {
        assert_eq!(find_first(b"ab", b'b', 100), Some(1));
        assert!(starts_with(b"ab", b"ab", 100));
    }

    #[test]
    fn starts_with_is_case_sensitive() {
        let line = b"Transfer-Encoding: chunked";
        assert!(starts_with(line, b"Transfer-Encoding:", line.len()));
        assert!(!starts_with(line, b"transfer-encoding:", line.len()));
        assert!(!starts_with(line, b"Transfer-Encoding:", 10));
        assert!(starts_with(line, b"", 0));
    }

    #[test]
    fn contains_substrings() {
        assert!(contains(b"gzip, chunked", b"chunked"));
        assert!(contains(b"xgzipx", b"gzip"));
        assert!(!contains(b"identity", b"gzip"));
        assert!(!contains(b"gz", b"gzip"));
    }

    #[test]
    fn find_first_random_positions() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let len = rng.gen_range(1..256);
            let mut span = vec![b'a'; len];
            let k = rng.gen_range(0..len);
            span[k] = b'\n';
            let max_len = rng.gen_range(0..=len);
            let expected = if k < max_len { Some(k) } else { None };
            assert_eq!(find_first(&span, b'\n', max_len), expected);
        }
    }

    #[test]
    fn starts_with_random_prefixes() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let len = rng.gen_range(0..64);
            let span: Vec<u8> = (0..len).map(|_| rng.gen_range(b'a'..=b'c')).collect();
            let cut = rng.gen_range(0..=len);
            assert!(starts_with(&span, &span[..cut], len));
            if cut > 0 {
                let mut other = span[..cut].to_vec();
                other[cut - 1] = b'z';
                assert!(!starts_with(&span, &other, len));
            }
        }
    }
}
