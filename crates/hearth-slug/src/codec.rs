/// Key XORed into ids before rendering. Below 2^31, so every id that fits
/// in 31 bits stays positive after obfuscation.
pub const OBFUSCATION_KEY: u64 = 0x5F3A_C2D1;

/// Decoded base36 values below this are legacy unobfuscated ids.
pub const LEGACY_THRESHOLD: u64 = 1_000_000;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Slug encoder/decoder bound to one obfuscation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlugCodec {
    key: u64,
}

impl Default for SlugCodec {
    fn default() -> Self { Self::new(OBFUSCATION_KEY) }
}

impl SlugCodec {
    pub const fn new(key: u64) -> Self { Self { key } }

    pub const fn key(&self) -> u64 { self.key }

    /// Encode a record id. Negative ids come back as their decimal text.
    pub fn encode(&self, id: i64) -> String {
        match u64::try_from(id) {
            Ok(id) => to_base36(id ^ self.key),
            Err(_) => id.to_string(),
        }
    }

    /// Encode a raw route parameter, returning it unchanged unless it is an integer.
    pub fn encode_str(&self, raw: &str) -> String {
        match raw.trim().parse::<i64>() {
            Ok(id) => self.encode(id),
            Err(_) => raw.to_owned(),
        }
    }

    /// Recover a record id from a slug in any of the three accepted formats.
    ///
    /// Returns `None` for empty input, characters outside `[0-9a-z]`
    /// (after lowercasing), overflow, and non-positive results.
    pub fn decode_str(&self, slug: &str) -> Option<u64> {
        let slug = slug.trim().to_ascii_lowercase();
        if slug.is_empty() {
            return None;
        }

        if slug.bytes().all(|b| b.is_ascii_digit()) {
            return slug.parse::<u64>().ok().filter(|&id| id > 0);
        }

        // from_str_radix would also take a leading sign
        if !slug.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }

        let value = u64::from_str_radix(&slug, 36).ok().filter(|&value| value > 0)?;
        if value < LEGACY_THRESHOLD {
            return Some(value);
        }

        Some(value ^ self.key).filter(|&id| id > 0)
    }

    pub fn decode(&self, slug: Option<&str>) -> Option<u64> { slug.and_then(|slug| self.decode_str(slug)) }
}

/// [`SlugCodec::encode`] with the default key.
pub fn encode(id: i64) -> String { SlugCodec::default().encode(id) }

/// [`SlugCodec::encode_str`] with the default key.
pub fn encode_str(raw: &str) -> String { SlugCodec::default().encode_str(raw) }

/// [`SlugCodec::decode`] with the default key.
pub fn decode(slug: Option<&str>) -> Option<u64> { SlugCodec::default().decode(slug) }

/// [`SlugCodec::decode_str`] with the default key.
pub fn decode_str(slug: &str) -> Option<u64> { SlugCodec::default().decode_str(slug) }

fn to_base36(mut value: u64) -> String {
    // u64::MAX is 13 base36 digits
    let mut buf = [0u8; 13];
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = ALPHABET[(value % 36) as usize];
        value /= 36;
        if value == 0 {
            break;
        }
    }
    buf[start..].iter().map(|&b| b as char).collect()
}
