//! Game records in LittleGolem's one-line ConHex format.
//!
//! ```text
//! (;FF[CONHEX]VA[CONHEX]EV[conhex.ld.CONHEX]PB[bob]PW[alice];R[H5];B[I7];R[H7])
//! ```
//!
//! Only the first line of a record is read. `PW` names Player 1 and `PB`
//! Player 2; each `;`-separated field starting with `B[` or `R[` holds one
//! move. Moves are kept as written; they are validated when replayed.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::{MoveError, Player, PlayerMap};

/// Marker every ConHex record carries.
pub const SIGNATURE: &str = "FF[CONHEX]VA[CONHEX]EV[conhex.ld.CONHEX]";

const FIELD_SEPARATOR: char = ';';
const MOVE_TAGS: [&str; 2] = ["B[", "R["];

fn name_tag(player: Player) -> &'static str {
    match player {
        Player::Player1 => "PW[",
        Player::Player2 => "PB[",
    }
}

/// Errors from reading or applying a game record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record is empty")]
    Empty,

    #[error("ConHex signature not found")]
    MissingSignature,

    #[error("could not read player names")]
    UnreadablePlayerNames,

    #[error("could not read moves")]
    UnreadableMoves,

    #[error("move {} of the record can't be played", .ply + 1)]
    Replay {
        ply: usize,
        #[source]
        source: MoveError,
    },

    #[error("could not read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A parsed record: player names and moves in play order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub player_names: PlayerMap<String>,
    pub moves: Vec<String>,
}

impl GameRecord {
    /// Parse the first line of `content`.
    pub fn parse(content: &str) -> Result<Self, RecordError> {
        let line = content.lines().next().ok_or(RecordError::Empty)?;

        if !line.contains(SIGNATURE) {
            return Err(RecordError::MissingSignature);
        }

        let (Some(player1), Some(player2)) = (
            tag_value(line, name_tag(Player::Player1)),
            tag_value(line, name_tag(Player::Player2)),
        ) else {
            return Err(RecordError::UnreadablePlayerNames);
        };
        let player_names = PlayerMap::new(|player| match player {
            Player::Player1 => player1.to_string(),
            Player::Player2 => player2.to_string(),
        });

        let moves = line
            .split(FIELD_SEPARATOR)
            .filter(|field| MOVE_TAGS.iter().any(|tag| field.starts_with(tag)))
            .map(|field| {
                let body = &field[2..];
                body.find(']')
                    .map(|end| body[..end].to_string())
                    .ok_or(RecordError::UnreadableMoves)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            player1 = %player_names[Player::Player1],
            player2 = %player_names[Player::Player2],
            moves = moves.len(),
            "parsed game record"
        );

        Ok(Self { player_names, moves })
    }

    /// Read and parse the first line of a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let path = path.as_ref();
        let io_error = |source: io::Error| RecordError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut line = String::new();
        BufReader::new(File::open(path).map_err(io_error)?)
            .read_line(&mut line)
            .map_err(io_error)?;

        Self::parse(&line)
    }
}

/// Text between `tag` and the next `]`.
fn tag_value<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let start = line.find(tag)? + tag.len();
    let len = line[start..].find(']')?;
    Some(&line[start..start + len])
}
