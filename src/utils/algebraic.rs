//! Conversions between board squares and algebraic coordinates.
//!
//! Row 0 is rank 8 and column 0 is file `a`, so `Square::new(7, 4)` is `e1`.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::Square;

/// Parse an algebraic coordinate (for example: "e4").
pub fn algebraic_to_square(text: &str) -> Result<Square, NotationError> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(NotationError::InvalidSquare(text.to_owned()));
    };

    if !('a'..='h').contains(&file) {
        return Err(NotationError::InvalidFile(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(NotationError::InvalidRank(rank));
    }

    let col = file as u8 - b'a';
    let row = b'8' - rank as u8;
    Square::new(row, col).ok_or_else(|| NotationError::InvalidSquare(text.to_owned()))
}

#[inline]
pub fn file_char(square: Square) -> char {
    char::from(b'a' + square.col())
}

#[inline]
pub fn rank_char(square: Square) -> char {
    char::from(b'8' - square.row())
}

/// Render a square as an algebraic coordinate (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", file_char(square), rank_char(square))
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", file_char(*self), rank_char(*self))
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_expected_rows() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), Square::at(0, 0));
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), Square::at(7, 7));
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), Square::at(4, 4));
    }

    #[test]
    fn renders_rank_from_row() {
        assert_eq!(square_to_algebraic(Square::at(7, 4)), "e1");
        assert_eq!(Square::at(0, 5).to_string(), "f8");
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(algebraic_to_square("i1"), Err(NotationError::InvalidFile('i')));
        assert_eq!(algebraic_to_square("a9"), Err(NotationError::InvalidRank('9')));
        assert_eq!(
            algebraic_to_square("e10"),
            Err(NotationError::InvalidSquare("e10".to_owned()))
        );
        assert!("".parse::<Square>().is_err());
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" d5 ".parse::<Square>(), Ok(Square::at(3, 3)));
    }
}
