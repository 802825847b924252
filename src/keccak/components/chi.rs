use super::super::State;

pub fn chi(state: &mut State) {
	for y in 0 .. 5 {
		let mut row = [0u64; 5];

		for x in 0 .. 5 {
			row[x] = state[x][y];
		}

		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			state[x][y] = row[x] ^ (!row[xp1] & row[xp2]);
		}
	}
}

#[test]
fn test_reads_row_before_writing() {
	let mut state = [[0; 5]; 5];
	state[2][1] = u64::MAX;

	chi(&mut state);

	assert_eq!(state[0][1], u64::MAX);
	assert_eq!(state[1][1], 0);
	assert_eq!(state[2][1], u64::MAX);
	// lane 3 depends on lane 0, which was zero before this step
	assert_eq!(state[3][1], 0);
	assert_eq!(state[4][1], 0);

	for x in 0 .. 5 {
		assert_eq!(state[x][0], 0);
	}
}
