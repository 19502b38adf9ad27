//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of cells on the 3x3 board
pub const BOARD_CELLS: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The symbol occupying this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    /// Rank used by [`Board::ordering_key`]: `O < X < Empty`
    fn rank(self) -> u8 {
        match self {
            Cell::O => 0,
            Cell::X => 1,
            Cell::Empty => 2,
        }
    }
}

impl From<Option<Player>> for Cell {
    fn from(symbol: Option<Player>) -> Self {
        symbol.map_or(Cell::Empty, Player::to_cell)
    }
}

/// One of the two symbols a player places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }

    /// Parse a single symbol character.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSymbol`] for anything outside the
    /// two-symbol alphabet, including the empty markers.
    pub fn from_char(c: char) -> Result<Player, crate::Error> {
        Cell::from_char(c)
            .and_then(Cell::to_player)
            .ok_or_else(|| crate::Error::InvalidSymbol {
                symbol: c.to_string(),
            })
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Player::from_char(c),
            _ => Err(crate::Error::InvalidSymbol {
                symbol: trimmed.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A 3x3 board, cells indexed 0-8 in row-major order.
///
/// Boards are plain values: every placement returns a new copy, so sibling
/// branches of a search never share storage. The type is `Copy` since it is
/// only 9 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; BOARD_CELLS],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
    pub(crate) empty: usize,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; BOARD_CELLS])
    }

    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Board { cells }
    }

    /// Helper: Parse 9 cells from a slice of characters.
    ///
    /// # Errors
    ///
    /// Returns error if the slice is not exactly 9 characters or any
    /// character is invalid.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; BOARD_CELLS], crate::Error> {
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    /// Helper: Count pieces on the board.
    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace and `/` row separators are ignored, so `"XO./.X./..O"` and
    /// `"XO. .X. ..O"` both parse. Spaces are separators here, not empty
    /// cells; use `.`, `_` or `-` for empties.
    ///
    /// # Errors
    ///
    /// Returns error if the board does not contain exactly 9 cells or any
    /// character is not a valid cell representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe_search::tictactoe::{Board, Cell};
    ///
    /// let board = Board::from_string("XX./OO./...").unwrap();
    /// assert_eq!(board.get(0), Cell::X);
    /// assert_eq!(board.get(4), Cell::O);
    /// assert!(Board::from_string("XX").is_err());
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        let cells = Self::parse_cells(&chars, s)?;
        Ok(Board { cells })
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        self.count_pieces().empty == 0
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a symbol and return the resulting board
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        if pos >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::OccupiedCell { position: pos });
        }

        let mut next = *self;
        next.cells[pos] = player.to_cell();
        Ok(next)
    }

    /// Infer whose turn it is from the piece counts, assuming X moved first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] unless X and O are level or
    /// X is ahead by exactly one.
    pub fn infer_to_move(&self) -> Result<Player, crate::Error> {
        let count = self.count_pieces();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Find the position where two boards differ (for inferring moves)
    ///
    /// Returns the first position where the cells differ, or None if identical.
    pub fn find_changed_position(&self, other: &Board) -> Option<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
    }

    /// Get a compact string representation, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Total order over boards used for tie-breaking: cells compared
    /// lexicographically from index 0 with `O < X < Empty`.
    pub fn ordering_key(&self) -> [u8; BOARD_CELLS] {
        self.cells.map(Cell::rank)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = crate::Error;

    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let array: [Cell; BOARD_CELLS] =
            cells.try_into().map_err(|_| crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: cells.len(),
                context: "cell slice".to_string(),
            })?;
        Ok(Board { cells: array })
    }
}

impl TryFrom<&[Option<Player>]> for Board {
    type Error = crate::Error;

    fn try_from(symbols: &[Option<Player>]) -> Result<Self, Self::Error> {
        if symbols.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: symbols.len(),
                context: "symbol slice".to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (cell, &symbol) in cells.iter_mut().zip(symbols) {
            *cell = Cell::from(symbol);
        }
        Ok(Board { cells })
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
