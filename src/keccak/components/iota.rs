use super::super::{State, ROUND_CONSTANTS};

pub fn iota(state: &mut State, round_number: usize) {
	state[0][0] ^= ROUND_CONSTANTS[round_number];
}
