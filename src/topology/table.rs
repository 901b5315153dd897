//! The published ConHex board: 41 cells over 69 positions.
//!
//! Outer-ring cells are bordered by 3 positions, interior cells by 6, and
//! the centre cell by 5. Rows are `(x, y, bordering positions)`.

/// Cells at coordinate 1 and 2 along an axis touch the near side.
pub const LOW_BORDER: u8 = 2;

/// Cells at coordinate 8 and 9 along an axis touch the far side.
pub const HIGH_BORDER: u8 = 8;

pub(crate) const CONHEX_CELLS: [(u8, u8, &[&str]); 41] = [
    (1, 1, &["A1", "B3", "C2"]),
    (1, 3, &["B3", "B4", "B5"]),
    (1, 5, &["B5", "B6", "B7"]),
    (1, 7, &["B7", "B8", "B9"]),
    (1, 9, &["A11", "B9", "C10"]),
    (2, 2, &["B3", "B4", "C2", "C4", "D2", "D3"]),
    (2, 4, &["B4", "B5", "B6", "C4", "C5", "C6"]),
    (2, 6, &["B6", "B7", "B8", "C6", "C7", "C8"]),
    (2, 8, &["B8", "B9", "C10", "C8", "D10", "D9"]),
    (3, 1, &["C2", "D2", "E2"]),
    (3, 3, &["C4", "C5", "D3", "D5", "E3", "E4"]),
    (3, 5, &["C5", "C6", "C7", "D5", "D6", "D7"]),
    (3, 7, &["C7", "C8", "D7", "D9", "E8", "E9"]),
    (3, 9, &["C10", "D10", "E10"]),
    (4, 2, &["D2", "D3", "E2", "E3", "F2", "F3"]),
    (4, 4, &["D5", "D6", "E4", "E6", "F4", "F5"]),
    (4, 6, &["D6", "D7", "E6", "E8", "F7", "F8"]),
    (4, 8, &["D10", "D9", "E10", "E9", "F10", "F9"]),
    (5, 1, &["E2", "F2", "G2"]),
    (5, 3, &["E3", "E4", "F3", "F4", "G3", "G4"]),
    (5, 5, &["E6", "F5", "F6", "F7", "G6"]),
    (5, 7, &["E8", "E9", "F8", "F9", "G8", "G9"]),
    (5, 9, &["E10", "F10", "G10"]),
    (6, 2, &["F2", "F3", "G2", "G3", "H2", "H3"]),
    (6, 4, &["F4", "F5", "G4", "G6", "H5", "H6"]),
    (6, 6, &["F7", "F8", "G6", "G8", "H6", "H7"]),
    (6, 8, &["F10", "F9", "G10", "G9", "H10", "H9"]),
    (7, 1, &["G2", "H2", "I2"]),
    (7, 3, &["G3", "G4", "H3", "H5", "I4", "I5"]),
    (7, 5, &["H5", "H6", "H7", "I5", "I6", "I7"]),
    (7, 7, &["G8", "G9", "H7", "H9", "I7", "I8"]),
    (7, 9, &["G10", "H10", "I10"]),
    (8, 2, &["H2", "H3", "I2", "I4", "J3", "J4"]),
    (8, 4, &["I4", "I5", "I6", "J4", "J5", "J6"]),
    (8, 6, &["I6", "I7", "I8", "J6", "J7", "J8"]),
    (8, 8, &["H10", "H9", "I10", "I8", "J8", "J9"]),
    (9, 1, &["I2", "J3", "K1"]),
    (9, 3, &["J3", "J4", "J5"]),
    (9, 5, &["J5", "J6", "J7"]),
    (9, 7, &["J7", "J8", "J9"]),
    (9, 9, &["I10", "J9", "K11"]),
];
