use std::collections::VecDeque;
use std::fmt;

use crate::api::virus_map_dto::VirusMapDto;
use crate::error::{Error, Result};

/// State of one grid cell.
///
/// `Empty` cells never transmit and are never infected; they act as walls.
/// A `Healthy` cell becomes `Infected` when an orthogonal neighbor infects
/// it, and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Healthy,
    Infected,
}

impl TryFrom<u8> for Cell {
    type Error = ();

    fn try_from(value: u8) -> std::result::Result<Cell, ()> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Healthy),
            2 => Ok(Cell::Infected),
            _ => Err(()),
        }
    }
}

/// Result of a [`VirusMap::solve`] run.
///
/// `Infeasible` is a normal output, not an error: at least one healthy cell
/// can never be reached by the infection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every reachable healthy cell was infected after this many steps.
    Elapsed(u32),
    /// A healthy cell remains that infection can never reach.
    Infeasible,
}

impl Outcome {
    /// The conventional integer encoding: the elapsed step count, or -1 for
    /// an infeasible grid.
    pub fn as_steps(self) -> i64 {
        match self {
            Outcome::Elapsed(steps) => i64::from(steps),
            Outcome::Infeasible => -1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_steps())
    }
}

/// An M×N infection-spread grid.
///
/// All initially infected cells are simultaneous sources. Each discrete time
/// step, every infected cell infects its up-to-four orthogonal neighbors that
/// hold a healthy guest. [`solve`](VirusMap::solve) computes the number of
/// steps until no spread remains, and whether every healthy cell was reached.
#[derive(Debug, Clone)]
pub struct VirusMap {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl VirusMap {
    /// Builds a map from raw cell values (0 = empty, 1 = healthy,
    /// 2 = infected).
    ///
    /// Fails fast if the dimensions are below 1×1, the value grid does not
    /// match `rows`×`cols`, or any value is out of range.
    pub fn new(rows: usize, cols: usize, values: Vec<Vec<u8>>) -> Result<VirusMap> {
        if rows < 1 || cols < 1 {
            return Err(Error::GridDimensions { rows, cols });
        }
        if values.len() != rows {
            return Err(Error::GridShape { rows, cols, row: 0, count: values.len() });
        }

        let mut cells = Vec::with_capacity(rows);
        for (r, row) in values.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::GridShape { rows, cols, row: r, count: row.len() });
            }
            let mut parsed = Vec::with_capacity(cols);
            for (c, value) in row.into_iter().enumerate() {
                let cell = Cell::try_from(value).map_err(|_| Error::CellValue { row: r, col: c, value })?;
                parsed.push(cell);
            }
            cells.push(parsed);
        }

        Ok(VirusMap { rows, cols, cells })
    }

    pub fn from_dto(dto: VirusMapDto) -> Result<VirusMap> {
        VirusMap::new(dto.m, dto.n, dto.grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The current state of cell (`row`, `col`), if in bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Runs the spread to completion and returns the elapsed step count, or
    /// [`Outcome::Infeasible`] if some healthy cell can never be reached.
    ///
    /// Multi-source BFS with two alternating frontiers: the frontier for step
    /// t+1 is built entirely from the infected set as it stood at the start
    /// of step t, which makes the simultaneous-step semantics explicit. Cells
    /// are mutated in place; after the call, unreachable cells are the ones
    /// still `Healthy`.
    pub fn solve(&mut self) -> Outcome {
        let mut healthy = 0usize;
        let mut frontier: VecDeque<(usize, usize)> = VecDeque::new();

        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Healthy => healthy += 1,
                    Cell::Infected => frontier.push_back((r, c)),
                    Cell::Empty => {}
                }
            }
        }

        let mut elapsed = 0u32;
        while healthy > 0 && !frontier.is_empty() {
            let mut next = VecDeque::new();
            for (r, c) in frontier.drain(..) {
                for (nr, nc) in Self::neighbors(self.rows, self.cols, r, c) {
                    if self.cells[nr][nc] == Cell::Healthy {
                        self.cells[nr][nc] = Cell::Infected;
                        healthy -= 1;
                        next.push_back((nr, nc));
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            elapsed += 1;
            frontier = next;
        }

        if healthy > 0 {
            log::info!("Infection stalled after {} steps with {} healthy cells unreachable.", elapsed, healthy);
            Outcome::Infeasible
        } else {
            log::info!("Infection spread completed in {} steps.", elapsed);
            Outcome::Elapsed(elapsed)
        }
    }

    /// Orthogonal in-bounds neighbors of (`r`, `c`); no diagonals, no
    /// wraparound.
    fn neighbors(rows: usize, cols: usize, r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> {
        [(0i64, -1i64), (0, 1), (-1, 0), (1, 0)].into_iter().filter_map(move |(dr, dc)| {
            let nr = r as i64 + dr;
            let nc = c as i64 + dc;
            if nr >= 0 && nc >= 0 && (nr as usize) < rows && (nc as usize) < cols {
                Some((nr as usize, nc as usize))
            } else {
                None
            }
        })
    }
}
