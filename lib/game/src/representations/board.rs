//! # board.rs
//!
//! Defines the checkers board: a diagonal graph over a square grid with
//! bitboard occupancy.
//!
//! The grid has `2*size+2` rows and columns. Its topology (which cells are
//! playable and which diagonal neighbors each playable cell has) is built
//! once and shared, read-only, by every copy of the board. Piece occupancy is
//! kept in three bitboards (red, black, kings) whose width is picked from the
//! number of cells: `u64` up to 8x8, then `U256`, `U1024` and `U4096` for
//! boards up to 64x64. Copying a board therefore copies three integers.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 18/02/2024

use std::fmt;
use std::sync::Arc;

use bnum::types::{U256, U1024, U4096};
use twiddling::Bits;

use crate::constants::{DIRECTIONS, DIRECTION_VECTORS, MAX_SIZE, MIN_SIZE};
use crate::error::GameError;
use crate::representations::piece::{Color, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u16,
    pub col: u16,
}

impl Coord {
    pub const fn new(row: u16, col: u16) -> Self {
        Coord { row, col }
    }
}

impl From<(u16, u16)> for Coord {
    fn from((row, col): (u16, u16)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bitboard {
    U64(u64),
    U256(U256),
    U1024(U1024),
    U4096(U4096),
}

macro_rules! with_bits {
    ($board:expr, $b:ident => $body:expr) => {
        match $board {
            Bitboard::U64($b) => $body,
            Bitboard::U256($b) => $body,
            Bitboard::U1024($b) => $body,
            Bitboard::U4096($b) => $body,
        }
    };
}

impl Bitboard {
    pub fn new(cells: u32) -> Self {
        match cells {
            0..=64 => Bitboard::U64(0u64),
            65..=256 => Bitboard::U256(<U256 as Bits>::zero()),
            257..=1024 => Bitboard::U1024(<U1024 as Bits>::zero()),
            _ => Bitboard::U4096(<U4096 as Bits>::zero()),
        }
    }

    pub fn get_bit(&self, index: u32) -> bool {
        with_bits!(self, b => b.get_bit(index))
    }

    pub fn set_bit(&mut self, index: u32) {
        with_bits!(self, b => Bits::set_bit(b, index))
    }

    pub fn clear_bit(&mut self, index: u32) {
        with_bits!(self, b => Bits::clear_bit(b, index))
    }

    pub fn count_bits(&self) -> u32 {
        with_bits!(self, b => b.count_bits())
    }

    pub fn is_empty(&self) -> bool {
        with_bits!(self, b => Bits::is_empty(b))
    }

    pub fn bit_indices(&self) -> Vec<u32> {
        with_bits!(self, b => b.bit_indices())
    }

    /// Number of bits set in both boards. Both must come from the same board
    /// size.
    pub fn count_common(&self, other: &Bitboard) -> u32 {
        match (self, other) {
            (Bitboard::U64(a), Bitboard::U64(b)) => (a & b).count_ones(),
            (Bitboard::U256(a), Bitboard::U256(b)) => (*a & *b).count_ones(),
            (Bitboard::U1024(a), Bitboard::U1024(b)) => (*a & *b).count_ones(),
            (Bitboard::U4096(a), Bitboard::U4096(b)) => (*a & *b).count_ones(),
            _ => unreachable!("Bitboards of different widths."),
        }
    }
}

/// A cell of the grid and its diagonal links, stored as cell indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    pub coord: Coord,
    pub neighbors: [Option<u16>; 4],
}

impl Square {
    pub fn is_playable(&self) -> bool {
        (self.coord.row + self.coord.col) % 2 == 1
    }
}

#[derive(Debug)]
struct Topology {
    size: u16,
    dim: u16,
    squares: Vec<Square>,
}

impl Topology {
    fn new(size: u16) -> Self {
        let dim = 2 * size + 2;
        let mut squares = Vec::with_capacity(dim as usize * dim as usize);

        for row in 0..dim {
            for col in 0..dim {
                let mut square = Square {
                    coord: Coord::new(row, col),
                    neighbors: [None; 4],
                };

                if square.is_playable() {
                    for dir in DIRECTIONS {
                        let (dr, dc) = DIRECTION_VECTORS[dir];
                        let r = row as i32 + dr as i32;
                        let c = col as i32 + dc as i32;

                        if r >= 0 && r < dim as i32 && c >= 0 && c < dim as i32 {
                            square.neighbors[dir] =
                                Some((r * dim as i32 + c) as u16);      /* links never change after this      */
                        }
                    }
                }

                squares.push(square);
            }
        }

        Topology { size, dim, squares }
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    topology: Arc<Topology>,
    red: Bitboard,
    black: Bitboard,
    kings: Bitboard,
}

impl Board {
    /// Builds a board with `size` rows of men per side: Black on the top rows,
    /// Red on the bottom rows, both on the odd-parity cells.
    pub fn new(size: u16) -> Result<Board, GameError> {
        let mut board = Board::empty(size)?;

        let dim = board.dim();
        for row in 0..dim {
            for col in 0..dim {
                let coord = Coord::new(row, col);
                if (row + col) % 2 == 0 {
                    continue;
                }

                if row < size {
                    board.set_piece(coord, Piece::man(Color::Black));
                } else if row > size + 1 {
                    board.set_piece(coord, Piece::man(Color::Red));
                }
            }
        }

        Ok(board)
    }

    /// A board of the given size with no pieces on it.
    pub fn empty(size: u16) -> Result<Board, GameError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(GameError::InvalidSize(size));
        }

        let topology = Topology::new(size);
        let cells = topology.squares.len() as u32;

        Ok(Board {
            topology: Arc::new(topology),
            red: Bitboard::new(cells),
            black: Bitboard::new(cells),
            kings: Bitboard::new(cells),
        })
    }

    /// Removes every piece, keeping the topology.
    pub fn clear(&mut self) {
        let cells = self.topology.squares.len() as u32;
        self.red = Bitboard::new(cells);
        self.black = Bitboard::new(cells);
        self.kings = Bitboard::new(cells);
    }

    pub fn size(&self) -> u16 {
        self.topology.size
    }

    pub fn dim(&self) -> u16 {
        self.topology.dim
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.dim() && coord.col < self.dim()
    }

    pub fn index_of(&self, coord: Coord) -> Option<u16> {
        if self.in_bounds(coord) {
            Some(coord.row * self.dim() + coord.col)
        } else {
            None
        }
    }

    pub fn coord_of(&self, index: u16) -> Coord {
        Coord::new(index / self.dim(), index % self.dim())
    }

    pub fn square(&self, coord: Coord) -> Option<&Square> {
        self.index_of(coord)
            .map(|i| &self.topology.squares[i as usize])
    }

    pub fn squares(&self) -> &[Square] {
        &self.topology.squares
    }

    /// The cell one diagonal step away, `None` at the edge or from a
    /// non-playable cell.
    pub fn neighbor(&self, coord: Coord, dir: usize) -> Option<Coord> {
        self.square(coord)?
            .neighbors[dir]
            .map(|i| self.coord_of(i))
    }

    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        let index = self.index_of(coord)? as u32;

        let color = if self.red.get_bit(index) {
            Color::Red
        } else if self.black.get_bit(index) {
            Color::Black
        } else {
            return None;
        };

        Some(Piece {
            color,
            is_king: self.kings.get_bit(index),
        })
    }

    pub fn is_empty(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_none()
    }

    pub fn has_color(&self, coord: Coord, color: Color) -> bool {
        self.piece_at(coord).is_some_and(|p| p.color == color)
    }

    /// Puts `piece` on `coord`, replacing whatever stood there. Coordinates
    /// off the board are ignored.
    pub fn set_piece(&mut self, coord: Coord, piece: Piece) {
        let Some(index) = self.index_of(coord) else {
            return;
        };
        debug_assert!(
            (coord.row + coord.col) % 2 == 1,
            "Pieces only stand on playable squares, not {coord}."
        );

        let index = index as u32;
        self.clear_index(index);

        match piece.color {
            Color::Red => self.red.set_bit(index),
            Color::Black => self.black.set_bit(index),
        }
        if piece.is_king {
            self.kings.set_bit(index);
        }
    }

    pub fn remove_piece(&mut self, coord: Coord) -> Option<Piece> {
        let piece = self.piece_at(coord)?;
        if let Some(index) = self.index_of(coord) {
            self.clear_index(index as u32);
        }
        Some(piece)
    }

    /// Crowns the piece on `coord`. Returns false if the cell is empty.
    pub fn promote(&mut self, coord: Coord) -> bool {
        match self.index_of(coord) {
            Some(index) if !self.is_empty(coord) => {
                self.kings.set_bit(index as u32);
                true
            }
            _ => false,
        }
    }

    fn clear_index(&mut self, index: u32) {
        self.red.clear_bit(index);
        self.black.clear_bit(index);
        self.kings.clear_bit(index);
    }

    pub fn color_board(&self, color: Color) -> &Bitboard {
        match color {
            Color::Red => &self.red,
            Color::Black => &self.black,
        }
    }

    pub fn kings_board(&self) -> &Bitboard {
        &self.kings
    }

    pub fn count_pieces(&self, color: Color) -> u32 {
        self.color_board(color).count_bits()
    }

    pub fn count_kings(&self, color: Color) -> u32 {
        self.color_board(color).count_common(&self.kings)
    }

    /// Cells holding a piece of `color`, in row-major order.
    pub fn occupied(&self, color: Color) -> Vec<Coord> {
        self.color_board(color)
            .bit_indices()
            .into_iter()
            .map(|i| self.coord_of(i as u16))
            .collect()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.dim() == other.dim()
            && self.red == other.red
            && self.black == other.black
            && self.kings == other.kings
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dim() {
            let line: Vec<String> = (0..self.dim())
                .map(|col| {
                    self.piece_at(Coord::new(row, col))
                        .map_or('.', |p| p.symbol())
                        .to_string()
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NE, NW, SE, SW};

    #[test]
    fn rejects_unsupported_sizes() {
        assert_eq!(Board::new(0).unwrap_err(), GameError::InvalidSize(0));
        assert_eq!(Board::new(32).unwrap_err(), GameError::InvalidSize(32));
        assert!(Board::new(31).is_ok());
    }

    #[test]
    fn initial_piece_counts() {
        for size in 1..=10u16 {
            let board = Board::new(size).unwrap();
            let expected = (size * (board.dim() / 2)) as u32;
            assert_eq!(board.count_pieces(Color::Red), expected);
            assert_eq!(board.count_pieces(Color::Black), expected);
            assert_eq!(board.count_kings(Color::Red), 0);
            assert_eq!(board.count_kings(Color::Black), 0);
        }
    }

    #[test]
    fn pieces_only_on_playable_cells() {
        let board = Board::new(3).unwrap();
        for color in Color::ALL {
            for coord in board.occupied(color) {
                assert_eq!((coord.row + coord.col) % 2, 1);
            }
        }
        assert!(board.color_board(Color::Red).count_common(board.color_board(Color::Black)) == 0);
    }

    #[test]
    fn bitboard_width_follows_cell_count() {
        assert!(matches!(Board::new(3).unwrap().red, Bitboard::U64(_)));
        assert!(matches!(Board::new(4).unwrap().red, Bitboard::U256(_)));
        assert!(matches!(Board::new(15).unwrap().red, Bitboard::U1024(_)));
        assert!(matches!(Board::new(16).unwrap().red, Bitboard::U4096(_)));
    }

    #[test]
    fn neighbors_stop_at_edges() {
        let board = Board::new(1).unwrap();
        let corner = Coord::new(0, 1);

        assert_eq!(board.neighbor(corner, NW), None);
        assert_eq!(board.neighbor(corner, NE), None);
        assert_eq!(board.neighbor(corner, SE), Some(Coord::new(1, 2)));
        assert_eq!(board.neighbor(corner, SW), Some(Coord::new(1, 0)));
    }

    #[test]
    fn even_cells_have_no_links() {
        let board = Board::new(2).unwrap();
        for square in board.squares() {
            if !square.is_playable() {
                assert_eq!(square.neighbors, [None; 4]);
            }
        }
    }

    #[test]
    fn links_ignore_occupancy() {
        let mut board = Board::new(2).unwrap();
        let before: Vec<_> = board.squares().to_vec();
        board.clear();
        assert_eq!(board.squares(), before.as_slice());
    }

    #[test]
    fn set_remove_and_promote() {
        let mut board = Board::empty(2).unwrap();
        let c = Coord::new(2, 3);

        board.set_piece(c, Piece::man(Color::Red));
        assert_eq!(board.piece_at(c), Some(Piece::man(Color::Red)));
        assert!(board.promote(c));
        assert_eq!(board.piece_at(c), Some(Piece::king(Color::Red)));
        assert_eq!(board.count_kings(Color::Red), 1);

        board.set_piece(c, Piece::man(Color::Black));
        assert_eq!(board.piece_at(c), Some(Piece::man(Color::Black)));
        assert_eq!(board.count_kings(Color::Red), 0);

        assert_eq!(board.remove_piece(c), Some(Piece::man(Color::Black)));
        assert!(board.is_empty(c));
        assert!(!board.promote(c));
    }

    #[test]
    fn copies_are_independent() {
        let original = Board::new(3).unwrap();
        let mut copy = original.clone();
        copy.remove_piece(Coord::new(0, 1));

        assert!(original.has_color(Coord::new(0, 1), Color::Black));
        assert!(copy.is_empty(Coord::new(0, 1)));
        assert_ne!(original, copy);
    }

    #[test]
    fn display_rows() {
        let board = Board::new(1).unwrap();
        assert_eq!(board.to_string(), ". b . b\n. . . .\n. . . .\nr . r .\n");
    }
}
