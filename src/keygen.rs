use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use sha2::{Digest, Sha256};

/// Number of characters in every short key.
pub const KEY_LEN: usize = 8;

/// Derive the short key for a URL.
///
/// The key is the first [`KEY_LEN`] characters of the URL-safe base64
/// encoding of the SHA-256 digest of the URL bytes. The same URL always
/// yields the same key. Eight base64 characters carry 48 bits of the digest,
/// so two different URLs can land on the same key; callers treat that as a
/// last-write-wins overwrite.
pub fn derive_key(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut key = URL_SAFE.encode(digest);
    key.truncate(KEY_LEN);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_url_safe(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(derive_key(""), "47DEQpj8");
        assert_eq!(derive_key("https://example.com/page"), "NkHF8idM");
        assert_eq!(derive_key("https://www.rust-lang.org/"), "Cm5swgya");
    }

    #[test]
    fn test_deterministic() {
        let url = "https://example.com/some/long/path?query=1&other=2";
        assert_eq!(derive_key(url), derive_key(url));
    }

    #[test]
    fn test_length_and_alphabet() {
        let urls = [
            "https://example.com",
            "http://localhost:8090/a",
            "ftp://files.example.org/pub/archive.tar.gz",
            "https://例え.jp/パス",
            "not even a url",
        ];

        for url in urls {
            let key = derive_key(url);
            assert_eq!(key.len(), KEY_LEN, "key for {url:?}");
            assert!(key.chars().all(is_url_safe), "key {key:?} for {url:?}");
        }
    }

    #[test]
    fn test_different_urls_differ() {
        assert_ne!(
            derive_key("https://example.com/a"),
            derive_key("https://example.com/b")
        );
    }
}
