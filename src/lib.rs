#![cfg_attr(not(feature = "std"), no_std)]

//! SHA3-256 over the Keccak sponge.
//!
//! ```
//! assert_eq!(
//! 	krypton_sha3::hash("abc"),
//! 	"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
//! );
//! ```

extern crate alloc;

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

pub mod encoding;
pub mod keccak;

#[doc(inline)]
pub use keccak::sha3::{hash, sha3_256};

#[cfg(feature = "std")]
#[doc(inline)]
pub use keccak::sha3::hash_percent_encoded;
