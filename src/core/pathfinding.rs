use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::trace;
use crate::core::grid::Grid;
use crate::core::models::Vec2;

/// Expansion order of neighbors: +x, -x, +y, -y.
const DIRECTIONS_AROUND: [Vec2; 4] = [
    Vec2 { x: 1, y: 0 },
    Vec2 { x: -1, y: 0 },
    Vec2 { x: 0, y: 1 },
    Vec2 { x: 0, y: -1 },
];

#[derive(Clone, Copy, Eq, PartialEq)]
struct Node {
    f_score: i32,
    h_score: i32,
    seq: u32,
    index: usize,
}

// BinaryHeap is a max-heap, so every comparison is reversed.
// Lowest f first, then lowest h, then earliest pushed.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.h_score.cmp(&self.h_score))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A cell is walkable when it is inside the grid, holds neither wall nor box,
/// and no agent other than the one standing on `self_origin` occupies it.
pub fn is_walkable(grid: &Grid, occupied: &[Vec2], pos: &Vec2, self_origin: &Vec2) -> bool {
    let Some(cell) = grid.get(pos) else {
        return false;
    };
    if !cell.is_walkable() {
        return false;
    }
    !occupied.iter().any(|other| other == pos && other != self_origin)
}

/// Shortest 4-directional path from `start` to `goal`, both ends included.
///
/// `occupied` lists the cells of dynamic agents; the one at `self_origin`
/// is the searcher itself and never blocks. Returns an empty path when the
/// goal cannot be reached and `[start]` when `start == goal`.
pub fn find_path(
    grid: &Grid,
    occupied: &[Vec2],
    start: Vec2,
    goal: Vec2,
    self_origin: Vec2,
) -> Vec<Vec2> {
    if start == goal {
        return vec![start];
    }
    if !grid.contains(&start) || !grid.contains(&goal) {
        return Vec::new();
    }

    let area = grid.size().area() as usize;
    let mut g_score = vec![i32::MAX; area];
    let mut came_from: Vec<Option<usize>> = vec![None; area];
    let mut closed = vec![false; area];
    let mut open_set = BinaryHeap::new();
    let mut seq = 0u32;

    let start_index = grid.index_of(&start);
    let goal_index = grid.index_of(&goal);
    g_score[start_index] = 0;
    let h = start.manhattan(&goal);
    open_set.push(Node { f_score: h, h_score: h, seq, index: start_index });

    let mut expansions = 0usize;
    while let Some(Node { index: current_index, .. }) = open_set.pop() {
        if current_index == goal_index {
            trace!(?start, ?goal, expansions, "path found");
            return reconstruct_path(grid, &came_from, current_index);
        }
        if closed[current_index] {
            continue;
        }
        closed[current_index] = true;
        expansions += 1;

        let current = grid.cell_of(current_index);
        let tentative_g = g_score[current_index] + 1;
        for dir in DIRECTIONS_AROUND {
            let neighbor = current + dir;
            if !is_walkable(grid, occupied, &neighbor, &self_origin) {
                continue;
            }
            let neighbor_index = grid.index_of(&neighbor);
            if closed[neighbor_index] || tentative_g >= g_score[neighbor_index] {
                continue;
            }

            g_score[neighbor_index] = tentative_g;
            came_from[neighbor_index] = Some(current_index);
            seq += 1;
            let h = neighbor.manhattan(&goal);
            open_set.push(Node {
                f_score: tentative_g + h,
                h_score: h,
                seq,
                index: neighbor_index,
            });
        }
    }

    trace!(?start, ?goal, expansions, "no path");
    Vec::new()
}

fn reconstruct_path(grid: &Grid, came_from: &[Option<usize>], goal_index: usize) -> Vec<Vec2> {
    let mut path = vec![grid.cell_of(goal_index)];
    let mut current = goal_index;
    while let Some(prev) = came_from[current] {
        path.push(grid.cell_of(prev));
        current = prev;
    }
    path.reverse();
    path
}
