//! Text form of a board.
//!
//! A board is written as nine squares in row-major order: `X` and `O` for
//! marks, `.`, `_` or a position digit `1`-`9` for an empty square.
//! `/`, `|`, `-`, `+` and whitespace only separate and may appear anywhere, so
//! `"XX./OO./..."`, `"XX.OO...."` and the [`Display`](std::fmt::Display)
//! grid all parse to the same board.

use crate::{Board, BoardError, Player, Square};
use std::str::FromStr;
use tracing::instrument;

impl FromStr for Board {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '1'..='9' => Square::Empty,
                '/' | '|' | '-' | '+' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(BoardError::Symbol(c)),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|rest: Vec<Square>| BoardError::Length(rest.len()))?;
        Board::from_squares(squares)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            for (col, square) in cells.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}", row * 3 + col + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
