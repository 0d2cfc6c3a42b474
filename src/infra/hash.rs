use std::hash::Hasher;

use twox_hash::XxHash64;

/// Hashes a sequence of `(prefix, line)` pairs as `\n{prefix}{line}`, without
/// joining them into one string first.
pub fn hash_prefixed_lines<'a>(lines: impl IntoIterator<Item = (char, &'a str)>) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    let mut prefix_buf = [0u8; 4];
    for (prefix, line) in lines {
        hasher.write(b"\n");
        hasher.write(prefix.encode_utf8(&mut prefix_buf).as_bytes());
        hasher.write(line.as_bytes());
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_lines_match_joined_text() {
        let streamed = hash_prefixed_lines([('-', "old"), ('+', "new")]);
        let mut joined = XxHash64::with_seed(0);
        joined.write(b"\n-old\n+new");
        assert_eq!(streamed, joined.finish());
        assert_ne!(streamed, hash_prefixed_lines([('+', "old"), ('-', "new")]));
    }
}
