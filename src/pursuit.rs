//! Pursuit engine: the single BFS step a pursuer takes toward its target.

use std::collections::VecDeque;

use crate::grid::{Dir, Grid, Pos};

/// Returns the cell a pursuer standing at `from` should move to next in
/// order to close the shortest open-cell path to `to`.
///
/// The search explores neighbors in the fixed order up, down, left, right,
/// so ties between equal-length paths resolve the same way on every call.
/// `from == to` and unreachable targets both return `from`; holding
/// position is the defined fallback, not an error. Each call is an
/// independent search with no retained state.
pub fn next_step_toward(grid: &Grid, from: Pos, to: Pos) -> Pos {
    if from == to {
        return from;
    }

    let mut visited = vec![vec![false; grid.width()]; grid.height()];
    let mut prev: Vec<Vec<Option<Pos>>> = vec![vec![None; grid.width()]; grid.height()];
    let mut queue = VecDeque::new();
    visited[from.y][from.x] = true;
    queue.push_back(from);

    while let Some(pos) = queue.pop_front() {
        for dir in Dir::ALL {
            let Some(next) = pos.offset(dir) else {
                continue;
            };
            if !grid.is_open(next) || visited[next.y][next.x] {
                continue;
            }
            visited[next.y][next.x] = true;
            prev[next.y][next.x] = Some(pos);
            if next == to {
                return first_step(&prev, from, to);
            }
            queue.push_back(next);
        }
    }

    from
}

/// Walks the predecessor links from `to` back to `from` and returns the
/// cell right after `from` on that path. Only called once `to` has been
/// discovered, so the chain always ends at `from`.
fn first_step(prev: &[Vec<Option<Pos>>], from: Pos, to: Pos) -> Pos {
    let mut step = to;
    while let Some(before) = prev[step.y][step.x] {
        if before == from {
            break;
        }
        step = before;
    }
    step
}
