//! Text rendering of a board.
//!
//! The template marks each position with `#`, in canonical order, and each
//! cell with its `x,y` label.

use std::fmt::{self, Write};

use crate::core::{Owner, Snapshot};

const BOARD_TEMPLATE: &str = r##"   A     B     C     D     E     F     G     H     I     J     K
 1 #-----------+-----------+-----------+-----------+-----------#
   |           |    3,1    |    5,1    |    7,1    |           |
   |           |           |           |           |           |
 2 |   1,1     #-----#-----#-----#-----#-----#-----#     9,1   |
   |         /       |    4,2    |    6,2    |       \         |
   |       /         |           |           |         \       |
 3 +-----#    2,2    #-----#-----#-----#-----#    8,2    #-----+
   |     |         /       |    5,3    |       \         |     |
   |     |       /         |           |         \       |     |
 4 | 1,3 #-----#    3,3    #-----#-----#    7,3    #-----# 9,3 |
   |     |     |         /       |       \         |     |     |
   |     |     |       /         |         \       |     |     |
 5 +-----# 2,4 #-----#    4,4    #    6,4   #------# 8,4 #-----+
   |     |     |     |         /   \        |      |     |     |
   |     |     |     |       /  5,5  \      |      |     |     |
 6 | 1,5 #-----# 3,5 #------#    #    #-----# 7,5  #-----# 9,5 |
   |     |     |     |       \       /      |      |     |     |
   |     |     |     |         \   /        |      |     |     |
 7 +-----# 2,6 #-----#     4,6   #    6,6   #------# 8,6 #-----+
   |     |     |       \         |         /       |     |     |
   |     |     |         \       |       /         |     |     |
 8 | 1,7 #-----#    3,7    #-----#-----#    7,7    #-----# 9,7 |
   |     |       \         |           |         /       |     |
   |     |         \       |    5,7    |       /         |     |
 9 +-----#    2,8    #-----#-----#-----#-----#    8,8    #-----+
   |       \         |           |           |         /       |
   |         \       |    4,8    |    6,8    |       /         |
10 |   1,9     #-----#-----#-----#-----#-----#-----#    9,9    |
   |           |           |           |           |           |
   |           |    3,9    |    5,9    |    7,9    |           |
11 #-----------+-----------+-----------+-----------+-----------#"##;

fn position_char(owner: Owner) -> char {
    match owner {
        Owner::Empty => 'O',
        Owner::Player1 => '1',
        Owner::Player2 => '2',
    }
}

fn cell_label(owner: Owner) -> &'static str {
    match owner {
        Owner::Empty => "   ",
        Owner::Player1 => "-1-",
        Owner::Player2 => "-2-",
    }
}

/// Draw the board: stones as `O`, `1` or `2`, claimed cells as `-1-` or
/// `-2-`. The result ends with a newline.
///
/// Expects the published board; with another topology the marks are
/// filled in order until either runs out.
#[must_use]
pub fn render_board(snapshot: &Snapshot) -> String {
    let mut board = String::with_capacity(BOARD_TEMPLATE.len() + 1);

    for (segment, &(_, owner)) in BOARD_TEMPLATE.split('#').zip(&snapshot.occupancy) {
        board.push_str(segment);
        board.push(position_char(owner));
    }

    for &(cell, owner) in &snapshot.cells {
        let label = cell.to_string();
        board = board.replace(&label, cell_label(owner));
    }

    board.push('\n');
    board
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

/// Write the board followed by a one-line status.
pub fn render_with_status<W: Write>(out: &mut W, snapshot: &Snapshot) -> fmt::Result {
    out.write_str(&render_board(snapshot))?;
    match snapshot.winner {
        Some(player) => writeln!(out, "{} ({}) has won", snapshot.player_names[player], player),
        None => writeln!(
            out,
            "{} ({}) to move",
            snapshot.player_names[snapshot.current_player], snapshot.current_player
        ),
    }
}
