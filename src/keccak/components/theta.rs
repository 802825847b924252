use super::super::State;

/// Column parities of `state`.
fn parities(state: &State) -> [u64; 5] {
	state.map(|column| column.iter().fold(0, |acc, &lane| acc ^ lane))
}

pub fn theta(state: &mut State) {
	let c = parities(state);

	// d[x] is folded into every lane of column x
	let d: [u64; 5] = core::array::from_fn(|x| c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1));

	for (column, d) in state.iter_mut().zip(d) {
		for lane in column {
			*lane ^= d;
		}
	}
}

#[test]
fn test_single_bit_spreads_to_neighbour_columns() {
	let mut state = [[0; 5]; 5];
	state[2][3] = 1;

	theta(&mut state);

	for y in 0 .. 5 {
		// column 3 sees C[2] directly, column 1 sees it rotated by one
		assert_eq!(state[3][y], 1);
		assert_eq!(state[1][y], 2);
		assert_eq!(state[0][y], 0);
		assert_eq!(state[4][y], 0);
	}

	// column 2 is untouched because its neighbours' parities are zero
	assert_eq!(state[2][3], 1);
	assert_eq!(state[2][0], 0);
}

#[test]
fn test_even_columns_are_a_fixed_point() {
	// every column parity is zero, so d is zero everywhere
	let mut state = [[0; 5]; 5];

	for x in 0 .. 5 {
		state[x][0] = 0xfeed_f00d << x;
		state[x][4] = 0xfeed_f00d << x;
	}

	let before = state;
	theta(&mut state);

	assert_eq!(state, before);
}
