/// Grid edge length; the winning-line table below is fixed for this geometry.
pub const GRID_SIZE: u8 = 3;
/// Total number of cells on the board.
pub const NUM_CELLS: u8 = GRID_SIZE * GRID_SIZE;
/// The center cell, the strongest opening move.
pub const CENTER: u8 = 4;

/// All position triples that constitute a win: three rows, three columns,
/// and the two diagonals. Positions are row-major, 0 at the top left.
pub const WINNING_LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
