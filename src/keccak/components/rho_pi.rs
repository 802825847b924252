use super::super::State;

/// Rotates every lane by its ρ offset while moving it to its π position.
///
/// Walks the single 24-lane orbit of `(x, y) -> (y, 2x + 3y)` starting at
/// `(1, 0)`, carrying the displaced lane forward each step. The lane at
/// `(0, 0)` is outside the orbit and is left untouched.
pub fn rho_pi(state: &mut State) {
	let mut x = 1;
	let mut y = 0;
	let mut carried = state[x][y];

	for t in 0 .. 24 {
		let new_x = y;
		let new_y = (2 * x + 3 * y) % 5;

		let rotation_amount = ((t + 1) * (t + 2) / 2 % 64) as u32;

		let displaced = state[new_x][new_y];
		state[new_x][new_y] = carried.rotate_left(rotation_amount);
		carried = displaced;

		x = new_x;
		y = new_y;
	}
}

#[cfg(test)]
const RHO_OFFSETS: [[u32; 5]; 5] = [
	[0, 36, 3, 41, 18],
	[1, 44, 10, 45, 2],
	[62, 6, 43, 15, 61],
	[28, 55, 25, 21, 56],
	[27, 20, 39, 8, 14],
];

#[test]
fn test_matches_separate_rho_and_pi() {
	let mut state = [[0u64; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			state[x][y] = 0x0123_4567_89ab_cdefu64
				.rotate_left((7 * x + 13 * y) as u32)
				.wrapping_mul(x as u64 + 5 * y as u64 + 1);
		}
	}

	let mut expected = [[0u64; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			expected[y][(2 * x + 3 * y) % 5] = state[x][y].rotate_left(RHO_OFFSETS[x][y]);
		}
	}

	rho_pi(&mut state);

	assert_eq!(state, expected);
}

#[test]
fn test_origin_lane_is_fixed() {
	let mut state = [[0; 5]; 5];
	state[0][0] = 0xdead_beef;

	rho_pi(&mut state);

	assert_eq!(state[0][0], 0xdead_beef);
	assert_eq!(state.iter().flatten().filter(|&&lane| lane != 0).count(), 1);
}
