pub const ROUND_CONSTANTS: [u64; 24] = [
	0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
	0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
	0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
	0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
	0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
	0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

// the table above, derived from the degree-8 LFSR in FIPS 202 algorithm 5

#[cfg(test)]
fn step_lfsr(state: u8) -> (u8, bool) {
	let new_bit = ((state & 0x8e).count_ones() & 1) as u8;
	let lfsr_output = state & 0x80 != 0;
	let new_state = (state << 1) | new_bit;

	(new_state, lfsr_output)
}

#[test]
fn test_table_matches_lfsr() {
	let mut lfsr = 0x80;

	for (round, &constant) in ROUND_CONSTANTS.iter().enumerate() {
		let mut derived = 0u64;

		for j in 0 .. 7 {
			let (new_lfsr, lfsr_out) = step_lfsr(lfsr);
			lfsr = new_lfsr;

			if lfsr_out {
				derived |= 1 << ((1 << j) - 1);
			}
		}

		assert_eq!(derived, constant, "round {}", round);
	}
}
