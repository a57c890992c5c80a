//! Hunt/target shot selection over an enemy ocean.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::CellState;
use crate::coordinate::Coordinate;
use crate::ocean::Ocean;

/// Unknown cells orthogonally next to a hit on the same level.
fn target_candidates(enemy: &Ocean) -> Vec<Coordinate> {
    let mut out = Vec::new();
    for (coord, state) in enemy.iter() {
        if state != CellState::Unknown {
            continue;
        }
        let (r, c, l) = (coord.row(), coord.col(), coord.level());
        let mut neighbours = [None; 4];
        neighbours[0] = r.checked_sub(1).map(|r| Coordinate::new(r, c, l));
        neighbours[1] = Some(Coordinate::new(r + 1, c, l));
        neighbours[2] = c.checked_sub(1).map(|c| Coordinate::new(r, c, l));
        neighbours[3] = Some(Coordinate::new(r, c + 1, l));
        let next_to_hit = neighbours
            .into_iter()
            .flatten()
            .any(|n| enemy.get(n) == Ok(CellState::Hit));
        if next_to_hit {
            out.push(coord);
        }
    }
    out
}

/// Pick the next cell to fire at.
///
/// Cells next to a recorded hit are preferred (target mode); otherwise any
/// unknown cell is drawn uniformly (hunt mode). `None` once the whole enemy
/// ocean is known.
pub fn select_target<R: Rng>(enemy: &Ocean, rng: &mut R) -> Option<Coordinate> {
    let targets = target_candidates(enemy);
    let pool = if targets.is_empty() {
        enemy
            .iter()
            .filter(|&(_, state)| state == CellState::Unknown)
            .map(|(coord, _)| coord)
            .collect()
    } else {
        targets
    };
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())])
}
