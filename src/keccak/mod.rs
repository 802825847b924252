//! The Keccak-f[1600] permutation and the SHA-3 sponge built on it.

mod round_constants;

pub use round_constants::ROUND_CONSTANTS;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod rho_pi;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::rho_pi::rho_pi;
use components::theta::theta;

pub mod sha3;

/// The 1600-bit permutation state, indexed as `state[x][y]`.
pub type State = [[u64; 5]; 5];

pub const NUM_ROUNDS: usize = 24;

/// Returns the all-zero state every sponge starts from.
pub const fn new_state() -> State {
	[[0; 5]; 5]
}

/// Applies round number `round` of Keccak-f[1600].
///
/// Panics if `round` is not below [`NUM_ROUNDS`].
pub fn keccak_round(state: &mut State, round: usize) {
	theta(state);
	rho_pi(state);
	chi(state);
	iota(state, round);
}

pub fn keccak_f1600(state: &mut State) {
	for round in 0 .. NUM_ROUNDS {
		keccak_round(state, round);
	}
}

/// Same as [`keccak_f1600`], but hands the state to `observe` after every round.
pub fn keccak_f1600_traced(state: &mut State, mut observe: impl FnMut(usize, &State)) {
	for round in 0 .. NUM_ROUNDS {
		keccak_round(state, round);
		observe(round, state);
	}
}

#[cfg(test)]
fn from_flat(lanes: [u64; 25]) -> State {
	let mut state = new_state();

	for (i, lane) in lanes.into_iter().enumerate() {
		state[i % 5][i / 5] = lane;
	}

	state
}

#[test]
fn test_zero_state_vectors() {
	// KeccakCodePackage, Keccak-f[1600] applied twice to the zero state
	let mut state = new_state();

	keccak_f1600(&mut state);

	assert_eq!(state, from_flat([
		0xf1258f7940e1dde7, 0x84d5ccf933c0478a, 0xd598261ea65aa9ee, 0xbd1547306f80494d,
		0x8b284e056253d057, 0xff97a42d7f8e6fd4, 0x90fee5a0a44647c4, 0x8c5bda0cd6192e76,
		0xad30a6f71b19059c, 0x30935ab7d08ffc64, 0xeb5aa93f2317d635, 0xa9a6e6260d712103,
		0x81a57c16dbcf555f, 0x43b831cd0347c826, 0x01f22f1a11a5569f, 0x05e5635a21d9ae61,
		0x64befef28cc970f2, 0x613670957bc46611, 0xb87c5a554fd00ecb, 0x8c3ee88a1ccf32c8,
		0x940c7922ae3a2614, 0x1841f924a2c509e4, 0x16f53526e70465c2, 0x75f644e97f30a13b,
		0xeaf1ff7b5ceca249,
	]));

	keccak_f1600(&mut state);

	assert_eq!(state, from_flat([
		0x2d5c954df96ecb3c, 0x6a332cd07057b56d, 0x093d8d1270d76b6c, 0x8a20d9b25569d094,
		0x4f9c4f99e5e7f156, 0xf957b9a2da65fb38, 0x85773dae1275af0d, 0xfaf4f247c3d810f7,
		0x1f1b9ee6f79a8759, 0xe4fecc0fee98b425, 0x68ce61b6b9ce68a1, 0xdeea66c4ba8f974f,
		0x33c43d836eafb1f5, 0xe00654042719dbd9, 0x7cf8a9f009831265, 0xfd5449a6bf174743,
		0x97ddad33d8994b40, 0x48ead5fc5d0be774, 0xe3b8c8ee55b7b03c, 0x91a0226e649e42e9,
		0x900e3129e7badd7b, 0x202a9ec5faa3cce8, 0x5b3402464e1c3db6, 0x609f4e62a44c1059,
		0x20d06cd26a8fbf5c,
	]));
}

#[test]
fn test_traced_runs_every_round() {
	let mut plain = from_flat(core::array::from_fn(|i| (i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15)));
	let mut traced = plain;

	let mut rounds_seen = [false; NUM_ROUNDS];
	let mut by_hand = plain;

	keccak_f1600_traced(&mut traced, |round, intermediate| {
		assert!(!rounds_seen[round]);
		rounds_seen[round] = true;

		keccak_round(&mut by_hand, round);
		assert_eq!(*intermediate, by_hand);
	});

	keccak_f1600(&mut plain);

	assert!(rounds_seen.iter().all(|&seen| seen));
	assert_eq!(traced, plain);
}

#[test]
fn test_zero_state_first_round() {
	// θ, ρ+π and χ all map zero to zero, so only ι leaves a mark
	let mut state = new_state();

	keccak_round(&mut state, 0);

	let mut expected = new_state();
	expected[0][0] = ROUND_CONSTANTS[0];

	assert_eq!(state, expected);
}

#[test]
#[should_panic]
fn test_round_out_of_range() {
	keccak_round(&mut new_state(), NUM_ROUNDS);
}
