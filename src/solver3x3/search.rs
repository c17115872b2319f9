//! Shared search primitive the beginner and CFOP solvers both build on.
//!
//! L7 does not hand-enumerate a full OLL/PLL-style case table for every
//! sub-stage. Instead every sub-stage reduces to one
//! primitive: allocate a private 3x3 [`Cube`] ("shadow cube"),
//! copy the real cube's virtual-3x3 state onto it via
//! [`Cube::set_3x3_colors`], then iteratively-deepen over the 18 outer-face
//! quarter/half turns until a goal predicate on the shadow holds. The
//! winning move list is then replayed against the real [`Operator`] — every
//! move in it is a depth-0 face turn, which acts identically on an NxN
//! cube's outer layer as it does on a 3x3, so no size-specific translation
//! is needed.
//!
//! Depth is bounded per call site (cross/F2L-style insertions need only a
//! handful of moves; last-layer fixes need more) — see each stage module
//! for its chosen bound. Exhausting the bound without reaching the goal is
//! how last-layer stages recognize an even-cube parity state: those are
//! states a *real* 3x3 can never reach, so a bound generous enough for any
//! real 3x3 case will provably fail on them.

use crate::alg::Alg;
use crate::color::{FaceName, ALL_FACES};
use crate::cube_layout::CubeLayout;
use crate::error::Error;
use crate::model::cube::{Cube, Cube3x3Snapshot};
use crate::operator::Operator;

/// The 18 atomic quarter/half turns of a 3x3's outer layer.
fn candidate_moves() -> Vec<Alg> {
    let mut out = Vec::with_capacity(18);
    for face in ALL_FACES {
        for n in [1, -1, 2] {
            out.push(Alg::FaceAlg(face, n));
        }
    }
    out
}

fn face_of(alg: &Alg) -> FaceName {
    match alg {
        Alg::FaceAlg(f, _) => *f,
        _ => unreachable!("candidate_moves only produces FaceAlg"),
    }
}

/// Builds a throwaway 3x3 [`Operator`] seeded from `snapshot`, matching the
/// real cube's color layout so goal predicates can compare colors directly.
pub(super) fn shadow_operator(layout: &CubeLayout, snapshot: &Cube3x3Snapshot) -> Operator {
    let mut cube = Cube::new(3, layout.clone(), false).expect("n=3 is always valid");
    cube.set_3x3_colors(snapshot);
    Operator::new(cube)
}

/// Iterative-deepening search on a shadow cube for a sequence of outer-face
/// turns reaching `goal`, then replays that sequence on `op`'s real cube.
/// Returns the winning move list (empty if already solved). `Err` means no
/// solution exists within `max_depth` — the caller's signal to treat this
/// as a parity state rather than a bug.
pub fn solve_on_shadow(
    op: &mut Operator,
    goal: impl Fn(&Cube3x3Snapshot) -> bool,
    max_depth: usize,
) -> Result<Vec<Alg>, Error> {
    let layout = op.cube().layout().clone();
    let snapshot = op.cube().get_3x3_colors();
    if goal(&snapshot) {
        return Ok(Vec::new());
    }

    let mut shadow = shadow_operator(&layout, &snapshot);
    let moves = candidate_moves();

    for depth in 1..=max_depth {
        let mut path = Vec::with_capacity(depth);
        if dfs(&mut shadow, &goal, &moves, depth, None, &mut path) {
            for alg in &path {
                op.play(alg, false)?;
            }
            return Ok(path);
        }
    }
    Err(Error::internal(format!(
        "no solution found within depth {max_depth}; likely an unreachable (parity) state"
    )))
}

/// Depth-limited DFS with two standard prunes: never repeat the same face
/// twice in a row (three quarter turns of one face always collapse to one
/// move), and never turn a face immediately after its opposite's mate
/// turned right before that (F B and B F reach the same state; canonicalize
/// on face-name order to cut the redundant half of that branch).
fn dfs(
    shadow: &mut Operator,
    goal: &impl Fn(&Cube3x3Snapshot) -> bool,
    moves: &[Alg],
    remaining: usize,
    last_two: Option<(FaceName, Option<FaceName>)>,
    path: &mut Vec<Alg>,
) -> bool {
    if remaining == 0 {
        return goal(&shadow.cube().get_3x3_colors());
    }
    for mv in moves {
        let f = face_of(mv);
        if let Some((last, prev)) = last_two {
            if f == last {
                continue;
            }
            if let Some(prev) = prev {
                if crate::geometry::is_opposite(f, last) && commutes_before(f, last, prev) {
                    continue;
                }
            }
        }
        shadow.play(mv, false).expect("shadow face turns never fail");
        path.push(mv.clone());
        let next_last_two = Some((f, last_two.map(|(l, _)| l)));
        if dfs(shadow, goal, moves, remaining - 1, next_last_two, path) {
            return true;
        }
        path.pop();
        shadow.undo().expect("shadow undo never fails");
    }
    false
}

/// Canonical tie-break for two opposite-face turns in a row: only allow the
/// enum-declaration-earlier `FaceName` variant to lead.
fn commutes_before(candidate: FaceName, last: FaceName, _prev_prev: FaceName) -> bool {
    candidate > last
}

/// Like [`solve_on_shadow`] but over a caller-supplied move list rather than
/// the 18 atomic turns — the last-layer stage uses this with a handful of
/// named OLL/PLL algorithms (each already carrying its own AUF prefix) as
/// the "moves", since applying 2-4 of those in sequence is how a human
/// 2-look solve actually proceeds. No
/// same-face/opposite-face pruning applies here — composite moves don't
/// share that structure.
pub fn solve_on_shadow_with_moves(
    op: &mut Operator,
    goal: impl Fn(&Cube3x3Snapshot) -> bool,
    moves: &[Alg],
    max_depth: usize,
) -> Result<Vec<Alg>, Error> {
    let layout = op.cube().layout().clone();
    let snapshot = op.cube().get_3x3_colors();
    if goal(&snapshot) {
        return Ok(Vec::new());
    }

    let mut shadow = shadow_operator(&layout, &snapshot);

    for depth in 1..=max_depth {
        let mut path = Vec::with_capacity(depth);
        if dfs_plain(&mut shadow, &goal, moves, depth, &mut path) {
            for alg in &path {
                op.play(alg, false)?;
            }
            return Ok(path);
        }
    }
    Err(Error::internal(format!(
        "no solution found within depth {max_depth}; likely an unreachable (parity) state"
    )))
}

fn dfs_plain(
    shadow: &mut Operator,
    goal: &impl Fn(&Cube3x3Snapshot) -> bool,
    moves: &[Alg],
    remaining: usize,
    path: &mut Vec<Alg>,
) -> bool {
    if remaining == 0 {
        return goal(&shadow.cube().get_3x3_colors());
    }
    for mv in moves {
        shadow.play(mv, false).expect("shadow moves never fail");
        path.push(mv.clone());
        if dfs_plain(shadow, goal, moves, remaining - 1, path) {
            return true;
        }
        path.pop();
        for _ in mv.flatten() {
            shadow.undo().expect("shadow undo never fails");
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube_layout::CubeLayout;

    #[test]
    fn search_on_already_solved_cube_returns_empty_move_list() {
        let mut op = Operator::new(Cube::new(3, CubeLayout::boy(), false).unwrap());
        let moves = solve_on_shadow(&mut op, |snap| {
            ALL_FACES.iter().all(|f| {
                let g = snap.faces[f];
                g.iter().flatten().all(|c| *c == g[1][1])
            })
        }, 4)
        .unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn search_finds_inverse_of_a_single_scrambling_move() {
        let mut op = Operator::new(Cube::new(3, CubeLayout::boy(), false).unwrap());
        op.play(&Alg::FaceAlg(FaceName::R, 1), false).unwrap();
        let solved_state = {
            let mut fresh = Operator::new(Cube::new(3, CubeLayout::boy(), false).unwrap());
            fresh.cube().get_3x3_colors()
        };
        solve_on_shadow(&mut op, |snap| *snap == solved_state, 3).unwrap();
        assert!(op.cube().solved());
    }
}
