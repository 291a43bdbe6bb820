//! Board state: the cell grid, the unit arena and the capture transition.
//!
//! `Board` owns every `Cell` and `Unit`. Cross references are arena indices,
//! so a cell's occupant and a unit's cell can both be read in O(1) and no
//! outside code can break the pairing.

use crate::errors::{GotaError, GotaResult};
use crate::game_state::types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    seed: u64,
    cells: Vec<Cell>,
    // Creation order, captured units stay in place flagged.
    units: Vec<Unit>,
    live_count: usize,
}

impl Board {
    /// Fully occupied `size x size` board. The owner of `(x, y)` is
    /// `(x + y + 1) mod 2`. `seed` is kept but does not influence placement.
    pub fn new(size: usize, seed: u64) -> GotaResult<Self> {
        let mut board = Self::empty(size, seed)?;
        for y in 0..size {
            for x in 0..size {
                board.place(Coord::new(x, y), Player::initial_owner(x, y));
            }
        }
        Ok(board)
    }

    /// Builds a position from rows listed top (`y = size - 1`) to bottom, one
    /// character per cell: `w` for player 0, `b` for player 1, `.` for empty.
    /// Units are created in row-major order from `y = 0`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], seed: u64) -> GotaResult<Self> {
        let size = rows.len();
        let mut board = Self::empty(size, seed)?;

        let mut grid = Vec::with_capacity(size);
        for row in rows.iter().rev() {
            let row = row.as_ref();
            if row.chars().count() != size {
                return Err(GotaError::InvalidNotation(row.to_owned()));
            }
            grid.push(row.chars().collect::<Vec<char>>());
        }

        for (y, line) in grid.iter().enumerate() {
            for (x, ch) in line.iter().enumerate() {
                match ch {
                    'w' => board.place(Coord::new(x, y), Player::White),
                    'b' => board.place(Coord::new(x, y), Player::Black),
                    '.' => {}
                    _ => return Err(GotaError::InvalidNotation(line.iter().collect())),
                }
            }
        }

        Ok(board)
    }

    fn empty(size: usize, seed: u64) -> GotaResult<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GotaError::InvalidBoardSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                cells.push(Cell {
                    coord: Coord::new(x, y),
                    unit: None,
                });
            }
        }

        Ok(Self {
            size,
            seed,
            cells,
            units: Vec::with_capacity(size * size),
            live_count: 0,
        })
    }

    fn place(&mut self, coord: Coord, owner: Player) {
        let cell = CellId(coord.y * self.size + coord.x);
        let id = UnitId(self.units.len());
        self.units.push(Unit {
            owner,
            cell,
            captured: false,
        });
        self.cells[cell.0].unit = Some(id);
        self.live_count += 1;
    }

    // --- Dimensions ---

    #[inline]
    pub fn width(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn is_inside(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    // --- Cells ---

    #[inline]
    pub fn cell_id(&self, x: usize, y: usize) -> Option<CellId> {
        if x < self.size && y < self.size {
            Some(CellId(y * self.size + x))
        } else {
            None
        }
    }

    #[inline]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    #[inline]
    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cell_id(x, y).and_then(|id| self.cell(id))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn occupied_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.unit.is_some()).count()
    }

    // --- Units ---

    #[inline]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.0)
    }

    /// Live unit standing on `(x, y)`.
    #[inline]
    pub fn unit_at(&self, x: usize, y: usize) -> Option<UnitId> {
        self.cell_at(x, y).and_then(Cell::unit)
    }

    /// Current position of a unit.
    pub fn unit_coord(&self, id: UnitId) -> Option<Coord> {
        let unit = self.unit(id)?;
        self.cell(unit.cell).map(Cell::coord)
    }

    /// Live units in creation order.
    pub fn live_units(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.units
            .iter()
            .enumerate()
            .filter(|(_, u)| !u.captured)
            .map(|(i, u)| (UnitId(i), u))
    }

    #[inline]
    pub fn live_unit_count(&self) -> usize {
        self.live_count
    }

    pub fn live_unit_count_for(&self, player: Player) -> usize {
        self.live_units().filter(|(_, u)| u.owner == player).count()
    }

    // --- Transition ---

    /// Capture-validity of `(x, y)` for a unit owned by `player`: inside the
    /// grid, occupied, and held by the opponent.
    #[inline]
    pub fn is_capture_valid(&self, x: isize, y: isize, player: Player) -> bool {
        if !self.is_inside(x, y) {
            return false;
        }
        match self.cells[y as usize * self.size + x as usize].unit {
            Some(occupant) => self.units[occupant.0].owner != player,
            None => false,
        }
    }

    /// Moves `unit` onto `target`, permanently removing the enemy unit there.
    /// Returns the captured unit. The board is untouched on error.
    pub fn apply_action(&mut self, unit: UnitId, target: CellId) -> GotaResult<UnitId> {
        let mover = self.unit(unit).ok_or(GotaError::UnknownUnit(unit))?;
        let target_cell = self.cell(target).ok_or(GotaError::UnknownCell(target))?;
        let illegal = |reason| GotaError::IllegalAction {
            unit,
            target,
            reason,
        };

        if mover.captured {
            return Err(illegal("moving unit has been captured"));
        }
        let from = mover.cell;
        let origin = self.cells[from.0].coord;
        if !origin.is_orthogonally_adjacent(target_cell.coord) {
            return Err(illegal("target is not an orthogonal neighbour"));
        }
        let victim = target_cell.unit.ok_or_else(|| illegal("target cell is empty"))?;
        if self.units[victim.0].owner == mover.owner {
            return Err(illegal("target is held by the moving player"));
        }

        self.units[victim.0].captured = true;
        self.live_count -= 1;

        self.cells[from.0].unit = None;
        self.cells[target.0].unit = Some(unit);
        self.units[unit.0].cell = target;

        Ok(victim)
    }

    /// Applies a generated action, rejecting it if the unit has moved since.
    pub fn apply(&mut self, action: &Action) -> GotaResult<UnitId> {
        let unit = self
            .unit(action.unit)
            .ok_or(GotaError::UnknownUnit(action.unit))?;
        if unit.cell != action.from {
            return Err(GotaError::IllegalAction {
                unit: action.unit,
                target: action.target,
                reason: "stale action: unit is no longer on its origin cell",
            });
        }
        self.apply_action(action.unit, action.target)
    }

    /// Checks the cell/unit pairing in both directions.
    pub fn is_consistent(&self) -> bool {
        let units_ok = self.live_units().all(|(id, unit)| {
            self.cells
                .get(unit.cell.0)
                .is_some_and(|cell| cell.unit == Some(id))
        });
        let cells_ok = self.cells.iter().enumerate().all(|(i, cell)| match cell.unit {
            Some(id) => self
                .units
                .get(id.0)
                .is_some_and(|u| !u.captured && u.cell == CellId(i)),
            None => true,
        });
        units_ok && cells_ok && self.occupied_cell_count() == self.live_count
    }
}
