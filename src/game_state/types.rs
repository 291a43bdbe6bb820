//! Value types shared by the board and move generation.
//!
//! Cells and units refer to each other through `CellId` / `UnitId` indices
//! into the board's arenas, never through direct references.

use std::fmt;

use crate::utils::notation::cell_label;

/// Largest supported board edge. Columns past `z` have no single-letter label.
pub const MAX_BOARD_SIZE: usize = 26;

/// Side owning a unit. Player 0 is `White` (`w`), player 1 is `Black` (`b`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::White, Player::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Maps `0 -> White` and `1 -> Black`; any other value is `None`.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::White),
            1 => Some(Player::Black),
            _ => None,
        }
    }

    /// Owner of cell `(x, y)` in the starting layout.
    #[inline]
    pub const fn initial_owner(x: usize, y: usize) -> Self {
        if (x + y + 1) & 1 == 0 {
            Player::White
        } else {
            Player::Black
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Grid position, `x` is the column and `y` the row (`y = 0` is rank 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbour one step along `(dx, dy)`, or `None` when it leaves `0..size`.
    #[inline]
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        if x < size && y < size {
            Some(Coord { x, y })
        } else {
            None
        }
    }

    /// True when `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_orthogonally_adjacent(self, other: Coord) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cell_label(*self))
    }
}

/// Index of a cell in the board arena (row-major, `y * size + x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

/// Index of a unit in the board arena, stable for the unit's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub usize);

/// One grid position. Coordinates never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub(crate) coord: Coord,
    pub(crate) unit: Option<UnitId>,
}

impl Cell {
    #[inline]
    pub fn x(&self) -> usize {
        self.coord.x
    }

    #[inline]
    pub fn y(&self) -> usize {
        self.coord.y
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Occupant, if any.
    #[inline]
    pub fn unit(&self) -> Option<UnitId> {
        self.unit
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.unit.is_some()
    }

    /// Display label such as `a1`.
    pub fn label(&self) -> String {
        cell_label(self.coord)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One piece. A captured unit keeps its slot so ids stay stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub(crate) owner: Player,
    pub(crate) cell: CellId,
    pub(crate) captured: bool,
}

impl Unit {
    #[inline]
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Current cell. For a captured unit this is the cell it was taken on.
    #[inline]
    pub fn cell(&self) -> CellId {
        self.cell
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        !self.captured
    }
}

/// A one-step capturing move: `unit` leaves `from` and takes the enemy on `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub unit: UnitId,
    pub from: CellId,
    pub target: CellId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_owner_alternates_from_black_corner() {
        assert_eq!(Player::initial_owner(0, 0), Player::Black);
        assert_eq!(Player::initial_owner(1, 0), Player::White);
        assert_eq!(Player::initial_owner(0, 1), Player::White);
        assert_eq!(Player::initial_owner(1, 1), Player::Black);
    }

    #[test]
    fn player_index_round_trips_and_rejects_others() {
        for p in Player::BOTH {
            assert_eq!(Player::from_index(p.index()), Some(p));
            assert_eq!(p.opposite().opposite(), p);
        }
        assert_eq!(Player::from_index(2), None);
    }

    #[test]
    fn offset_stays_inside_grid() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset(0, -1, 4), None);
        assert_eq!(corner.offset(-1, 0, 4), None);
        assert_eq!(corner.offset(1, 0, 4), Some(Coord::new(1, 0)));

        let far = Coord::new(3, 3);
        assert_eq!(far.offset(1, 0, 4), None);
        assert_eq!(far.offset(0, 1, 4), None);
        assert_eq!(far.offset(0, -1, 4), Some(Coord::new(3, 2)));
    }

    #[test]
    fn adjacency_is_orthogonal_single_step() {
        let c = Coord::new(2, 2);
        assert!(c.is_orthogonally_adjacent(Coord::new(2, 3)));
        assert!(c.is_orthogonally_adjacent(Coord::new(1, 2)));
        assert!(!c.is_orthogonally_adjacent(Coord::new(3, 3)));
        assert!(!c.is_orthogonally_adjacent(Coord::new(2, 4)));
        assert!(!c.is_orthogonally_adjacent(c));
    }
}
