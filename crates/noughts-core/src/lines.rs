//! The eight winning lines.

use crate::square_set::SquareSet;

/// Winning lines as square-index triples: rows, columns, then diagonals.
pub const WIN_LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The same lines as square sets, in [`WIN_LINES`] order.
pub const WIN_MASKS: [SquareSet; 8] = build_masks();

const fn build_masks() -> [SquareSet; 8] {
    let mut masks = [SquareSet::EMPTY; 8];
    let mut i = 0;
    while i < WIN_LINES.len() {
        let [a, b, c] = WIN_LINES[i];
        masks[i] = SquareSet::new((1 << a) | (1 << b) | (1 << c));
        i += 1;
    }
    masks
}

/// Return the first line fully covered by `marks`, if any.
#[inline]
pub fn completed_line(marks: SquareSet) -> Option<SquareSet> {
    WIN_MASKS.into_iter().find(|&line| marks.contains_all(line))
}
