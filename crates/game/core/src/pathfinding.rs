//! Uniform-cost shortest path over viable tiles.

use std::collections::{BTreeMap, BTreeSet};

use crate::state::{GridMap, Position};

/// Shortest path from `start` to `goal` over viable neighbours.
///
/// The returned path excludes `start` and ends with `goal`; `start == goal`
/// yields an empty path. Returns `None` when the goal cannot be reached under
/// the current occupancy, which includes an occupied or solid goal.
///
/// Every edge costs one. The frontier is a plain list scanned for its
/// cheapest entry (first one wins on ties), which is fine on boards of a few
/// hundred tiles. The result is not re-validated later: actors moving onto
/// it afterwards make the remaining steps fail when they are executed.
pub fn find_path(map: &GridMap, start: Position, goal: Position) -> Option<Vec<Position>> {
    if !map.contains(start) || !map.contains(goal) {
        return None;
    }

    let width = map.dimensions().width as usize;
    let index = |position: Position| position.y as usize * width + position.x as usize;

    // Unvisited tiles read as cost 0; only the start is popped at that cost.
    let mut cost = vec![0u32; map.dimensions().area()];
    let mut predecessors: BTreeMap<Position, Position> = BTreeMap::new();
    let mut finalized: BTreeSet<Position> = BTreeSet::new();
    let mut frontier: Vec<Position> = vec![start];

    while !frontier.is_empty() {
        let mut cheapest = 0;
        for (slot, candidate) in frontier.iter().enumerate() {
            if cost[index(*candidate)] < cost[index(frontier[cheapest])] {
                cheapest = slot;
            }
        }
        let current = frontier.remove(cheapest);

        if current == goal {
            return Some(reconstruct(&predecessors, start, goal));
        }
        finalized.insert(current);

        for successor in map.viable_neighbors(current) {
            if finalized.contains(&successor) {
                continue;
            }
            let tentative = cost[index(current)] + 1;
            let queued = frontier.contains(&successor);
            if queued && tentative >= cost[index(successor)] {
                continue;
            }
            predecessors.insert(successor, current);
            cost[index(successor)] = tentative;
            if !queued {
                frontier.push(successor);
            }
        }
    }

    None
}

fn reconstruct(
    predecessors: &BTreeMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut tile = goal;
    while let Some(previous) = predecessors.get(&tile) {
        path.push(*previous);
        tile = *previous;
    }
    path.retain(|position| *position != start);
    path.reverse();
    path
}
