//! Floor geometry and occupancy.
//!
//! [`MultiGrid`] owns every entity position and answers Moore-neighborhood
//! queries on either a wrap-around or an edge-clipped floor.

use crate::error::{ConfigError, Result};
use sweep_data::{EntityId, Position};

/// Bounded 2-D floor where any number of entities may share a cell.
///
/// The grid is the single owner of entity positions: `positions[id]` records
/// where an entity sits and `cells[idx]` lists who sits there, in insertion
/// order. Every mutation updates both sides together so the two views never
/// disagree.
///
/// # Edges
/// With `torus` set, neighborhoods wrap around the edges and every cell has
/// eight distinct neighbors once the grid is at least 3x3 (fewer on a 2-wide
/// torus, where left and right wrap onto the same column). Without it, cells
/// on the border simply have fewer neighbors.
///
/// # Examples
/// ```
/// use sweep_core::grid::MultiGrid;
/// use sweep_data::{EntityId, Position};
///
/// let mut grid = MultiGrid::new(3, 3, false)?;
/// grid.place(EntityId(0), Position::new(1, 1));
/// assert_eq!(grid.neighbors(Position::new(0, 0), false).len(), 3);
/// assert_eq!(grid.occupants_at(Position::new(1, 1)), &[EntityId(0)]);
/// # Ok::<(), sweep_core::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MultiGrid {
    width: u16,
    height: u16,
    torus: bool,
    cells: Vec<Vec<EntityId>>,
    positions: Vec<Option<Position>>,
}

impl MultiGrid {
    /// Empty grid of `width` x `height` cells.
    ///
    /// Both sides must be at least 2 so every cell has a neighbor to move to.
    pub fn new(width: u16, height: u16, torus: bool) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(ConfigError::GridTooSmall { width, height });
        }
        Ok(Self {
            width,
            height,
            torus,
            cells: vec![Vec::new(); usize::from(width) * usize::from(height)],
            positions: Vec::new(),
        })
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn is_torus(&self) -> bool {
        self.torus
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> usize {
        usize::from(pos.y) * usize::from(self.width) + usize::from(pos.x)
    }

    /// Moore neighborhood of `pos`: the up to eight cells around it, walked
    /// with the x offset outermost. Wrapped duplicates are dropped, so every
    /// returned cell is distinct.
    pub fn neighbors(&self, pos: Position, include_center: bool) -> Vec<Position> {
        let mut out = Vec::with_capacity(9);
        let (w, h) = (i32::from(self.width), i32::from(self.height));
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 && !include_center {
                    continue;
                }
                let (mut nx, mut ny) = (i32::from(pos.x) + dx, i32::from(pos.y) + dy);
                if self.torus {
                    nx = nx.rem_euclid(w);
                    ny = ny.rem_euclid(h);
                } else if nx < 0 || nx >= w || ny < 0 || ny >= h {
                    continue;
                }
                let cell = Position::new(nx as u16, ny as u16);
                if (cell != pos || include_center) && !out.contains(&cell) {
                    out.push(cell);
                }
            }
        }
        out
    }

    /// Entities at `pos` in the order they arrived there.
    pub fn occupants_at(&self, pos: Position) -> &[EntityId] {
        &self.cells[self.index(pos)]
    }

    #[inline]
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.occupants_at(pos).is_empty()
    }

    pub fn position_of(&self, id: EntityId) -> Option<Position> {
        self.positions.get(id.index()).copied().flatten()
    }

    /// Registers `id` at `pos`. Co-occupancy is allowed.
    pub fn place(&mut self, id: EntityId, pos: Position) {
        debug_assert!(self.contains(pos), "{pos} outside grid");
        debug_assert!(self.position_of(id).is_none(), "{id} placed twice");
        if self.positions.len() <= id.index() {
            self.positions.resize(id.index() + 1, None);
        }
        self.positions[id.index()] = Some(pos);
        let idx = self.index(pos);
        self.cells[idx].push(id);
    }

    /// Relocates `id` to `to`, keeping the relative order of everyone left
    /// behind. Returns the cell the entity came from.
    pub fn move_entity(&mut self, id: EntityId, to: Position) -> Option<Position> {
        debug_assert!(self.contains(to), "{to} outside grid");
        let from = self.position_of(id)?;
        let from_idx = self.index(from);
        if let Some(slot) = self.cells[from_idx].iter().position(|&o| o == id) {
            self.cells[from_idx].remove(slot);
        }
        let to_idx = self.index(to);
        self.cells[to_idx].push(id);
        self.positions[id.index()] = Some(to);
        Some(from)
    }

    /// Every cell with no occupant, in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Position::new(x, y)))
            .filter(|&p| self.is_cell_empty(p))
            .collect()
    }

    /// Number of placed entities.
    pub fn occupant_count(&self) -> usize {
        self.positions.iter().flatten().count()
    }

    /// Checks the bidirectional position/occupancy invariant: each placed
    /// entity is listed exactly once, in the cell its position names, and no
    /// cell lists an entity positioned elsewhere.
    pub fn is_consistent(&self) -> bool {
        let listed: usize = self.cells.iter().map(Vec::len).sum();
        if listed != self.occupant_count() {
            return false;
        }
        self.positions.iter().enumerate().all(|(i, pos)| match pos {
            Some(p) => {
                self.contains(*p)
                    && self.cells[self.index(*p)]
                        .iter()
                        .filter(|o| o.index() == i)
                        .count()
                        == 1
            }
            None => true,
        })
    }
}
