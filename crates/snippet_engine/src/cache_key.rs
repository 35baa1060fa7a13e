use sha2::{Digest, Sha256};

/// Stable, filesystem-safe cache file name: `{url tail}--{short_hash(url)}.json`.
///
/// The readable tail is only a hint for humans browsing the cache directory;
/// the hash decides identity.
pub fn cache_file_name(url: &str) -> String {
    let tail = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url)
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    let stem = sanitize_stem(tail.strip_suffix(".json").unwrap_or(tail));
    format!("{stem}--{}.json", short_hash(url))
}

fn sanitize_stem(input: &str) -> String {
    let mut compacted = String::with_capacity(input.len());
    let mut prev_underscore = false;
    for c in input.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' };
        if c == '_' {
            if !prev_underscore {
                compacted.push(c);
            }
            prev_underscore = true;
        } else {
            compacted.push(c);
            prev_underscore = false;
        }
    }
    let mut stem = compacted.trim_matches('_').to_string();
    if stem.is_empty() {
        stem = "feed".to_string();
    }
    stem.truncate(48);
    stem
}

fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(16);
    for byte in digest.iter().take(8) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::cache_file_name;

    #[test]
    fn name_keeps_readable_tail() {
        let name = cache_file_name("https://example.com/snippets/typescript.json");
        assert!(name.starts_with("typescript--"), "{name}");
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn different_urls_get_different_names() {
        let a = cache_file_name("https://a.example/feed.json");
        let b = cache_file_name("https://b.example/feed.json");
        assert_ne!(a, b);
        assert_eq!(a, cache_file_name("https://a.example/feed.json"));
    }

    #[test]
    fn odd_characters_are_collapsed() {
        let name = cache_file_name("https://example.com/a b:c?x=1");
        assert!(name.starts_with("a_b_c--"), "{name}");
        let bare = cache_file_name("https://example.com/");
        assert!(bare.starts_with("example_com--"), "{bare}");
    }
}
