//! Mailbox board: 64 packed pieces, row-major from a8.
//!
//! Index 0 is a8 (the first square of a FEN placement string) and index 63 is
//! h1. `row_of` counts rows from the eighth rank downward and `file_of` counts
//! files from the a-file. The board is a plain `Copy` value so simulations can
//! work on a stack copy without touching the live game.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Row index (`0` for the eighth rank, `7` for the first).
#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / 8
}

/// File index (`0` for the a-file, `7` for the h-file).
#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_at(row: u8, file: u8) -> Square {
    row * 8 + file
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Piece; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [Piece::NONE; 64],
        }
    }

    /// Standard initial setup.
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            board.set_piece(square_at(0, file), Piece::new(kind, Color::Dark));
            board.set_piece(square_at(1, file), Piece::new(PieceKind::Pawn, Color::Dark));
            board.set_piece(square_at(6, file), Piece::new(PieceKind::Pawn, Color::Light));
            board.set_piece(square_at(7, file), Piece::new(kind, Color::Light));
        }
        board
    }

    /// Build a board from a rank-separated placement string
    /// (`"rnbqkbnr/pppppppp/8/..."`). Digits expand into runs of empty squares.
    pub fn from_placement(placement: &str) -> Result<Self, ChessErrors> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessErrors::InvalidPlacement(placement.to_owned()));
        }

        let mut board = Self::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut file = 0u8;
            for ch in rank.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(ChessErrors::InvalidPlacement(placement.to_owned()));
                    }
                    file += skip as u8;
                } else {
                    if file >= 8 {
                        return Err(ChessErrors::InvalidPlacement(placement.to_owned()));
                    }
                    let piece = Piece::decode(ch)?;
                    if piece.is_none() {
                        return Err(ChessErrors::InvalidPieceCharacter(ch));
                    }
                    board.set_piece(square_at(row as u8, file), piece);
                    file += 1;
                }

                if file > 8 {
                    return Err(ChessErrors::InvalidPlacement(placement.to_owned()));
                }
            }

            if file != 8 {
                return Err(ChessErrors::InvalidPlacement(placement.to_owned()));
            }
        }

        Ok(board)
    }

    /// Inverse of `from_placement`, runs of empty squares collapsed to digits.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);

        for row in 0..8u8 {
            let mut empty_run = 0u8;
            for file in 0..8u8 {
                let piece = self.piece_on(square_at(row, file));
                if piece.is_none() {
                    empty_run += 1;
                    continue;
                }
                if empty_run > 0 {
                    out.push(char::from(b'0' + empty_run));
                    empty_run = 0;
                }
                out.push(piece.encode());
            }
            if empty_run > 0 {
                out.push(char::from(b'0' + empty_run));
            }
            if row < 7 {
                out.push('/');
            }
        }

        out
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Piece {
        self.squares[square as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.squares[square as usize] = piece;
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.squares[square as usize] = Piece::NONE;
    }

    /// Move whatever stands on `origin` to `destination`, overwriting it.
    #[inline]
    pub fn relocate(&mut self, origin: Square, destination: Square) {
        let piece = self.piece_on(origin);
        self.clear(origin);
        self.set_piece(destination, piece);
    }

    #[inline]
    pub fn has_piece_on(&self, square: Square) -> bool {
        !self.piece_on(square).is_none()
    }

    #[inline]
    pub fn has_color_piece_on(&self, square: Square, color: Color) -> bool {
        self.piece_on(square).is_color(color)
    }

    /// First square holding `color`'s king, scanning from a8.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.squares
            .iter()
            .position(|&piece| piece == king)
            .map(|idx| idx as Square)
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.squares.iter().filter(|&&p| p == piece).count()
    }

    /// Occupied squares of one color, in ascending index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(move |(_, piece)| piece.is_color(color))
            .map(|(idx, &piece)| (idx as Square, piece))
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.placement())
    }
}
