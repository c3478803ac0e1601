//! Reversible public slugs for numeric record identifiers.
//!
//! A record id is XORed with a fixed 32-bit key and rendered in base36, so
//! consecutive ids do not produce consecutive-looking links. Decoding also
//! accepts the two older link formats still found in the wild: plain
//! decimal ids and plain base36 ids.
//!
//! # Example
//!
//! ```
//! use hearth_slug::{decode_str, encode};
//!
//! let slug = encode(1042);
//! assert_eq!(slug, "qf7zk3");
//! assert_eq!(decode_str(&slug), Some(1042));
//!
//! // legacy links
//! assert_eq!(decode_str("29"), Some(29));
//! assert_eq!(decode_str("t"), Some(29));
//! ```
//!
//! # Legacy boundary
//!
//! Decoded base36 values below [`LEGACY_THRESHOLD`] are taken to be legacy
//! base36 ids and are returned as-is. An id whose obfuscated value falls
//! below the threshold therefore does not survive a round trip, and neither
//! does one whose encoding happens to contain only digits.

pub use self::codec::{LEGACY_THRESHOLD, OBFUSCATION_KEY, SlugCodec, decode, decode_str, encode, encode_str};

mod codec;
