//! An implementation of [SHA-3](https://en.wikipedia.org/wiki/SHA-3), fixed to the 256-bit variant.

use alloc::string::String;
use alloc::vec::Vec;

use log::trace;

use super::{keccak_f1600, new_state, State};
use crate::encoding::utf8_bytes;
#[cfg(feature = "std")]
use crate::encoding::{percent_decode, DecodeError};

pub const DIGEST_BITS: usize = 256;
pub const RATE_BITS: usize = 1600 - 2 * DIGEST_BITS;
pub const CAPACITY_BITS: usize = 1600 - RATE_BITS;

pub const DIGEST_BYTES: usize = DIGEST_BITS / 8;
pub const RATE_BYTES: usize = RATE_BITS / 8;
pub const RATE_LANES: usize = RATE_BITS / 64;

/// Appends the SHA-3 domain suffix and pad10*1 padding.
///
/// The result is always a non-empty multiple of [`RATE_BYTES`] and strictly
/// longer than `message`.
pub fn pad(message: &[u8]) -> Vec<u8> {
	let q = RATE_BYTES - message.len() % RATE_BYTES;

	let mut padded = Vec::with_capacity(message.len() + q);
	padded.extend_from_slice(message);

	if q == 1 {
		// suffix, first pad bit and last pad bit all share the one spare byte
		padded.push(0x86);
	} else {
		padded.push(0x06);
		padded.resize(padded.len() + q - 2, 0);
		padded.push(0x80);
	}

	padded
}

/// XORs each rate-sized block of `padded` into `state`, permuting after each one.
///
/// Panics if `padded` isn't a multiple of [`RATE_BYTES`] long.
pub fn absorb(state: &mut State, padded: &[u8]) {
	assert!(padded.len() % RATE_BYTES == 0, "absorbing a buffer that is not rate-aligned");

	for (block_number, block) in padded.chunks_exact(RATE_BYTES).enumerate() {
		for (j, lane_bytes) in block.chunks_exact(8).enumerate() {
			let mut bytes = [0; 8];
			bytes.copy_from_slice(lane_bytes);

			state[j % 5][j / 5] ^= u64::from_le_bytes(bytes);
		}

		keccak_f1600(state);

		trace!("absorbed block {} of {}", block_number + 1, padded.len() / RATE_BYTES);
	}
}

/// Reads the digest out of the rate lanes, `y` outer and `x` inner.
pub fn squeeze(state: &State) -> [u8; DIGEST_BYTES] {
	let mut out = [0; DIGEST_BYTES];

	for (i, chunk) in out.chunks_mut(8).enumerate() {
		let val = state[i % 5][i / 5];
		chunk.copy_from_slice(&val.to_le_bytes()[.. chunk.len()]);
	}

	out
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sha3_256(bytes: &[u8]) -> [u8; DIGEST_BYTES] {
	let padded = pad(bytes);

	trace!("sha3-256: {} message bytes padded to {}", bytes.len(), padded.len());

	let mut state = new_state();
	absorb(&mut state, &padded);

	squeeze(&state)
}

/// Returns the SHA3-256 digest of `message` as 64 lowercase hex characters.
pub fn hash(message: &str) -> String {
	hex::encode(sha3_256(utf8_bytes(message)))
}

/// Like [`hash`], but takes the message in percent-encoded form.
#[cfg(feature = "std")]
pub fn hash_percent_encoded(encoded: &str) -> Result<String, DecodeError> {
	let bytes = percent_decode(encoded)?;

	Ok(hex::encode(sha3_256(&bytes)))
}

#[cfg(test)]
mod tests {
	use alloc::vec;

	use hex_literal::hex;
	use proptest::prelude::*;
	use ::sha3::Digest;

	use super::*;

	fn reference(bytes: &[u8]) -> [u8; DIGEST_BYTES] {
		let mut out = [0; DIGEST_BYTES];
		out.copy_from_slice(&::sha3::Sha3_256::digest(bytes));

		out
	}

	#[test]
	fn test_parameters() {
		assert_eq!(RATE_BITS, 1088);
		assert_eq!(CAPACITY_BITS, 512);
		assert_eq!(RATE_BYTES, 136);
		assert_eq!(RATE_LANES, 17);
		assert_eq!(DIGEST_BYTES, 32);
	}

	#[test]
	fn test_known_vectors() {
		assert_eq!(
			hash(""),
			"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
		);

		assert_eq!(
			hash("abc"),
			"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
		);

		assert_eq!(
			hash("abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
			"41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376",
		);

		assert_eq!(
			sha3_256(&vec![b'a'; 1_000_000]),
			hex!("5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1"),
		);
	}

	#[test]
	fn test_single_letter() {
		assert_eq!(
			hash("a"),
			"80084bf2fba02475726feb2cab2d8215eab14bc6bdd8bfb2c8151257032ecd8b",
		);

		assert_eq!(sha3_256(b"a"), reference(b"a"));
	}

	#[test]
	fn test_non_ascii_message() {
		let message = "sponge \u{e9}\u{1f9fd} \u{3b8}\u{3c1}\u{3c0}";

		assert_eq!(sha3_256(message.as_bytes()), reference(message.as_bytes()));
	}

	#[test]
	fn test_pad_empty() {
		let padded = pad(b"");

		assert_eq!(padded.len(), RATE_BYTES);
		assert_eq!(padded[0], 0x06);
		assert!(padded[1 .. RATE_BYTES - 1].iter().all(|&byte| byte == 0));
		assert_eq!(padded[RATE_BYTES - 1], 0x80);
	}

	#[test]
	fn test_pad_one_spare_byte() {
		let message = [0xaa; RATE_BYTES - 1];
		let padded = pad(&message);

		assert_eq!(padded.len(), RATE_BYTES);
		assert_eq!(&padded[.. RATE_BYTES - 1], &message[..]);
		assert_eq!(padded[RATE_BYTES - 1], 0x86);
	}

	#[test]
	fn test_pad_two_spare_bytes() {
		let padded = pad(&[0xaa; RATE_BYTES - 2]);

		assert_eq!(padded.len(), RATE_BYTES);
		assert_eq!(&padded[RATE_BYTES - 2 ..], &[0x06, 0x80]);
	}

	#[test]
	fn test_pad_full_block() {
		let message = [0xaa; RATE_BYTES];
		let padded = pad(&message);

		assert_eq!(padded.len(), 2 * RATE_BYTES);
		assert_eq!(&padded[.. RATE_BYTES], &message[..]);
		assert_eq!(&padded[RATE_BYTES ..], &pad(b"")[..]);
	}

	#[test]
	fn test_rate_boundaries() {
		for len in [RATE_BYTES - 2, RATE_BYTES - 1, RATE_BYTES, RATE_BYTES + 1, 2 * RATE_BYTES] {
			let message: Vec<u8> = (0 .. len).map(|i| i as u8).collect();

			assert_eq!(sha3_256(&message), reference(&message), "length {}", len);
		}
	}

	#[test]
	fn test_absorb_lane_order() {
		let mut padded = vec![0; RATE_BYTES];
		// lane 7 sits at x = 2, y = 1
		padded[7 * 8] = 1;

		let mut state = new_state();
		absorb(&mut state, &padded);

		let mut expected = new_state();
		expected[2][1] = 1;
		keccak_f1600(&mut expected);

		assert_eq!(state, expected);
	}

	#[test]
	fn test_squeeze_is_transposed() {
		let mut state = new_state();
		state[1][0] = 0x0807_0605_0403_0201;
		state[0][1] = u64::MAX;

		let out = squeeze(&state);

		assert_eq!(&out[8 .. 16], &[1, 2, 3, 4, 5, 6, 7, 8]);
		// (0, 1) is lane 5, past the four lanes a 256-bit digest reads
		assert!(out[.. 8].iter().chain(&out[16 ..]).all(|&byte| byte == 0));
	}

	#[test]
	#[should_panic(expected = "rate-aligned")]
	fn test_absorb_misaligned() {
		absorb(&mut new_state(), &[0; RATE_BYTES + 1]);
	}

	#[test]
	fn test_avalanche() {
		let messages: [&[u8]; 3] = [b"abc", b"", b"The quick brown fox jumps over the lazy dog"];

		for message in messages {
			let mut flipped = message.to_vec();

			match flipped.first_mut() {
				Some(byte) => *byte ^= 1,
				None => flipped.push(0),
			}

			let a = sha3_256(message);
			let b = sha3_256(&flipped);

			let changed_bits: u32 = a.iter().zip(&b).map(|(x, y)| (x ^ y).count_ones()).sum();

			// 128 on average
			assert!((64 .. 192).contains(&changed_bits), "{} bits changed", changed_bits);
		}
	}

	#[cfg(feature = "std")]
	#[test]
	fn test_percent_encoded_entry_point() {
		assert_eq!(hash_percent_encoded("abc").unwrap(), hash("abc"));
		assert_eq!(hash_percent_encoded("%61%62%63").unwrap(), hash("abc"));
		assert_eq!(hash_percent_encoded("%6").unwrap(), hash("%6"));
		assert!(hash_percent_encoded("%ff").is_err());
	}

	proptest! {
		#[test]
		fn test_matches_reference(bytes in proptest::collection::vec(any::<u8>(), 0 .. 600)) {
			prop_assert_eq!(sha3_256(&bytes), reference(&bytes));
		}

		#[test]
		fn test_hex_shape_and_determinism(message in any::<String>()) {
			let digest = hash(&message);

			prop_assert_eq!(digest.len(), 64);
			prop_assert!(digest.bytes().all(|b| matches!(b, b'0' ..= b'9' | b'a' ..= b'f')));
			prop_assert_eq!(digest, hash(&message));
		}

		#[test]
		fn test_pad_shape(bytes in proptest::collection::vec(any::<u8>(), 0 .. 600)) {
			let padded = pad(&bytes);

			prop_assert_eq!(padded.len() % RATE_BYTES, 0);
			prop_assert!(padded.len() > bytes.len());
			prop_assert!(padded.len() - bytes.len() <= RATE_BYTES);
			prop_assert_eq!(&padded[.. bytes.len()], &bytes[..]);
		}
	}

	#[cfg(feature = "std")]
	proptest! {
		#[test]
		fn test_both_encoders_agree(message in any::<String>()) {
			let encoded = crate::encoding::percent_encode(&message);

			prop_assert_eq!(hash_percent_encoded(&encoded).unwrap(), hash(&message));
		}
	}
}
