//! Permutation-parity checks on a [`Cube3x3Snapshot`]
//!
//! When the last-layer search in [`super::search`] exhausts its depth bound
//! at the final full-solve goal, the cube is in a state no legal 3x3
//! sequence reaches — on a real 3x3 corner-permutation parity always
//! matches edge-permutation parity, so exactly one of the two being odd
//! pins down which even-cube swap exception to raise.

use std::collections::{HashMap, HashSet};

use crate::color::{Color, CornerName, CornerPosition, EdgeName, EdgePosition, FaceName, ALL_CORNERS, ALL_EDGES};
use crate::cube_layout::CubeLayout;
use crate::geometry;
use crate::model::cube::Cube3x3Snapshot;

fn corner_cell(pos: CornerPosition) -> (usize, usize) {
    match pos {
        CornerPosition::BottomLeft => (0, 0),
        CornerPosition::BottomRight => (0, 2),
        CornerPosition::TopLeft => (2, 0),
        CornerPosition::TopRight => (2, 2),
    }
}

fn edge_cell(pos: EdgePosition) -> (usize, usize) {
    match pos {
        EdgePosition::Bottom => (0, 1),
        EdgePosition::Left => (1, 0),
        EdgePosition::Right => (1, 2),
        EdgePosition::Top => (2, 1),
    }
}

fn corner_colors_at(snapshot: &Cube3x3Snapshot, name: CornerName) -> HashSet<Color> {
    geometry::corner_triples(name)
        .into_iter()
        .map(|(face, pos)| {
            let (r, c) = corner_cell(pos);
            snapshot.faces[&face][r][c]
        })
        .collect()
}

fn edge_colors_at(snapshot: &Cube3x3Snapshot, name: EdgeName) -> HashSet<Color> {
    geometry::edge_faces(name)
        .into_iter()
        .map(|(face, pos)| {
            let (r, c) = edge_cell(pos);
            snapshot.faces[&face][r][c]
        })
        .collect()
}

fn home_corner_colors(layout: &CubeLayout, name: CornerName) -> HashSet<Color> {
    geometry::corner_triples(name).into_iter().map(|(f, _)| layout.color_of(f)).collect()
}

fn home_edge_colors(layout: &CubeLayout, name: EdgeName) -> HashSet<Color> {
    geometry::edge_faces(name).into_iter().map(|(f, _)| layout.color_of(f)).collect()
}

/// Parity (`true` = odd) of the permutation taking each corner slot's
/// current occupant (identified by its color set, ignoring orientation) to
/// its home slot.
pub fn corner_permutation_is_odd(snapshot: &Cube3x3Snapshot, layout: &CubeLayout) -> bool {
    let homes: HashMap<Vec<Color>, CornerName> =
        ALL_CORNERS.into_iter().map(|n| (sorted(home_corner_colors(layout, n)), n)).collect();
    let mut perm = HashMap::new();
    for slot in ALL_CORNERS {
        let occupant = homes[&sorted(corner_colors_at(snapshot, slot))];
        perm.insert(slot, occupant);
    }
    permutation_is_odd(&perm, ALL_CORNERS.to_vec())
}

/// Same as [`corner_permutation_is_odd`] but over the 12 edges.
pub fn edge_permutation_is_odd(snapshot: &Cube3x3Snapshot, layout: &CubeLayout) -> bool {
    let homes: HashMap<Vec<Color>, EdgeName> =
        ALL_EDGES.into_iter().map(|n| (sorted(home_edge_colors(layout, n)), n)).collect();
    let mut perm = HashMap::new();
    for slot in ALL_EDGES {
        let occupant = homes[&sorted(edge_colors_at(snapshot, slot))];
        perm.insert(slot, occupant);
    }
    permutation_is_odd(&perm, ALL_EDGES.to_vec())
}

fn sorted(set: HashSet<Color>) -> Vec<Color> {
    let mut v: Vec<Color> = set.into_iter().collect();
    v.sort();
    v
}

fn permutation_is_odd<T: Copy + Eq + std::hash::Hash>(perm: &HashMap<T, T>, universe: Vec<T>) -> bool {
    let mut visited: HashSet<T> = HashSet::new();
    let mut swaps = 0usize;
    for start in universe {
        if visited.contains(&start) {
            continue;
        }
        let mut cycle_len = 0usize;
        let mut cur = start;
        while !visited.contains(&cur) {
            visited.insert(cur);
            cur = perm[&cur];
            cycle_len += 1;
        }
        if cycle_len > 0 {
            swaps += cycle_len - 1;
        }
    }
    swaps % 2 == 1
}

/// Picks the even-cube swap exception a final-stage search failure implies,
/// by whichever of the two permutations is odd (exactly one must be, since
/// the caller already reached this only after exhausting a generous depth
/// bound — see [`super::search::solve_on_shadow`]'s doc comment).
pub fn diagnose_swap_parity(snapshot: &Cube3x3Snapshot, layout: &CubeLayout) -> crate::error::Error {
    if corner_permutation_is_odd(snapshot, layout) {
        crate::error::Error::EvenCubeCornerSwapException
    } else {
        crate::error::Error::EvenCubeEdgeSwapParityException
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cube::Cube;

    #[test]
    fn solved_cube_has_even_parity_on_both() {
        let layout = CubeLayout::boy();
        let cube = Cube::new(3, layout.clone(), false).unwrap();
        let snap = cube.get_3x3_colors();
        assert!(!corner_permutation_is_odd(&snap, &layout));
        assert!(!edge_permutation_is_odd(&snap, &layout));
    }

    #[test]
    fn single_face_turn_keeps_both_parities_even() {
        // A legal 3x3 move always keeps corner/edge parity in lockstep.
        let layout = CubeLayout::boy();
        let mut op = crate::operator::Operator::new(Cube::new(3, layout.clone(), false).unwrap());
        op.play(&crate::alg::Alg::FaceAlg(FaceName::R, 1), false).unwrap();
        let snap = op.cube().get_3x3_colors();
        assert_eq!(corner_permutation_is_odd(&snap, &layout), edge_permutation_is_odd(&snap, &layout));
    }
}
