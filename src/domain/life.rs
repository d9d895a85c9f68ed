//! Conway's Game of Life (B3/S23) on a sparse, unbounded live set.
//!
//! Only live cells and their neighbours are ever looked at, so a tick costs
//! time proportional to the population rather than to any grid size.

use std::collections::HashSet;

use super::{Cell, LiveSet};

/// Any live cell with two or three live neighbours lives on.
/// Fewer dies of underpopulation, more of overpopulation.
pub const fn survives(neighbors: usize) -> bool {
    matches!(neighbors, 2 | 3)
}

/// Any dead cell with exactly three live neighbours becomes alive
pub const fn is_born(neighbors: usize) -> bool {
    neighbors == 3
}

/// Next state of a single cell given its current state and live neighbour count
pub const fn evolve(alive: bool, neighbors: usize) -> bool {
    match alive {
        true => survives(neighbors),
        false => is_born(neighbors),
    }
}

/// Compute the next generation.
///
/// The output starts empty: a live cell that does not survive is simply not
/// carried over, so death never needs an explicit removal. Dead candidates are
/// the neighbours of live cells; each is decided once even when it borders
/// several live cells.
pub fn step(live: &LiveSet) -> LiveSet {
    let mut next = LiveSet::with_capacity(live.len());
    let mut decided: HashSet<Cell> = HashSet::with_capacity(live.len() * 2);

    for cell in live.iter() {
        if survives(live.live_neighbors(cell)) {
            next.insert(cell);
        }

        for neighbor in cell.neighbors() {
            if live.contains(neighbor) || !decided.insert(neighbor) {
                continue;
            }
            if is_born(live.live_neighbors(neighbor)) {
                next.insert(neighbor);
            }
        }
    }

    next
}

/// Advance `generations` ticks
pub fn step_n(live: &LiveSet, generations: usize) -> LiveSet {
    (0..generations).fold(live.clone(), |current, _| step(&current))
}
