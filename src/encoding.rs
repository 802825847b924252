//! Turning message text into the bytes that get hashed.
//!
//! Text is hashed as its UTF-8 encoding. With the `std` feature, messages may
//! also arrive percent-encoded; [`percent_decode`] turns them back into
//! exactly those UTF-8 bytes.

#[cfg(feature = "std")]
use alloc::string::String;
#[cfg(feature = "std")]
use alloc::vec::Vec;

#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
	#[error("percent-decoded message is not UTF-8 text")]
	NotText(#[from] alloc::string::FromUtf8Error),
}

pub fn utf8_bytes(text: &str) -> &[u8] {
	text.as_bytes()
}

/// Escapes every byte of `text` outside `A-Z a-z 0-9 - _ . ~` as `%XX`.
#[cfg(feature = "std")]
pub fn percent_encode(text: &str) -> String {
	urlencoding::encode(text).into_owned()
}

/// Replaces each `%XX` escape in `encoded` with the byte it names.
///
/// A `%` not followed by two hex digits is kept as is. The decoded bytes must
/// form UTF-8 text, since that is what an encoded message stands for.
#[cfg(feature = "std")]
pub fn percent_decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
	let text = urlencoding::decode(encoded)?;

	Ok(text.into_owned().into_bytes())
}

#[cfg(feature = "std")]
#[test]
fn test_encode_reserved_and_multibyte() {
	assert_eq!(percent_encode("a b/c"), "a%20b%2Fc");
	assert_eq!(percent_encode("-_.~"), "-_.~");
	assert_eq!(percent_encode("\u{e9}"), "%C3%A9");
	assert_eq!(percent_encode("\u{1f9fd}"), "%F0%9F%A7%BD");
}

#[cfg(feature = "std")]
#[test]
fn test_decode() {
	assert_eq!(percent_decode("%C3%a9x").unwrap(), "\u{e9}x".as_bytes());
	assert_eq!(percent_decode("").unwrap(), b"");
	assert_eq!(percent_decode("100%").unwrap(), b"100%");
	assert_eq!(percent_decode("%4g").unwrap(), b"%4g");
}

#[cfg(feature = "std")]
#[test]
fn test_decode_rejects_non_text() {
	// a lone continuation byte
	assert!(matches!(percent_decode("ab%80"), Err(DecodeError::NotText(_))));
	assert!(matches!(percent_decode("%C3"), Err(DecodeError::NotText(_))));
}

#[cfg(all(test, feature = "std"))]
proptest::proptest! {
	#[test]
	fn test_fallback_matches_utf8(text in proptest::prelude::any::<String>()) {
		proptest::prop_assert_eq!(percent_decode(&percent_encode(&text)).unwrap(), utf8_bytes(&text));
	}
}
