//! Last-layer finish: orients and permutes the top layer once
//! [`super::goals::l3_cross_done`] holds, via the small set of well-known
//! 2-look OLL/PLL algorithms human solvers use, rather than a full search
//! over atomic turns
//!
//! Each algorithm here is written with `U` as an explicit leading AUF
//! (adjust-U-face) term so [`search::solve_on_shadow_with_moves`] can try
//! every rotation of it for free by varying that leading turn count; a
//! handful of algorithm applications, each preceded by whichever AUF angle
//! helps, is how a 2-look human solve actually proceeds.

use crate::alg::Alg;
use crate::color::FaceName;
use crate::cube_layout::CubeLayout;
use crate::error::Error;
use crate::operator::Operator;

use super::goals;
use super::parity;
use super::search::solve_on_shadow_with_moves;

/// Sune: cycles 3 last-layer corner orientations, fixing the common
/// "fish"/headlights OLL-corner cases over repeated application.
fn sune() -> Vec<Alg> {
    use FaceName::*;
    vec![
        Alg::FaceAlg(R, 1),
        Alg::FaceAlg(U, 1),
        Alg::FaceAlg(R, -1),
        Alg::FaceAlg(U, 1),
        Alg::FaceAlg(R, 1),
        Alg::FaceAlg(U, 2),
        Alg::FaceAlg(R, -1),
    ]
}

/// Anti-Sune: Sune's mirror, the other common corner-twist case.
fn anti_sune() -> Vec<Alg> {
    use FaceName::*;
    vec![
        Alg::FaceAlg(R, 1),
        Alg::FaceAlg(U, -1),
        Alg::FaceAlg(R, -1),
        Alg::FaceAlg(U, -1),
        Alg::FaceAlg(R, 1),
        Alg::FaceAlg(U, -2),
        Alg::FaceAlg(R, -1),
    ]
}

/// Ua-perm: cycles 3 last-layer edges.
fn ua_perm() -> Vec<Alg> {
    use FaceName::*;
    vec![
        Alg::FaceAlg(R, 2),
        Alg::FaceAlg(U, 1),
        Alg::FaceAlg(R, 1),
        Alg::FaceAlg(U, 1),
        Alg::FaceAlg(R, -1),
        Alg::FaceAlg(U, -1),
        Alg::FaceAlg(R, -1),
        Alg::FaceAlg(U, -1),
        Alg::FaceAlg(R, -1),
        Alg::FaceAlg(U, 1),
        Alg::FaceAlg(R, -1),
    ]
}

/// Ub-perm: Ua's mirror.
fn ub_perm() -> Vec<Alg> {
    use FaceName::*;
    vec![
        Alg::FaceAlg(R, 1),
        Alg::FaceAlg(U, 1),
        Alg::FaceAlg(R, 1),
        Alg::FaceAlg(U, 1),
        Alg::FaceAlg(R, 1),
        Alg::FaceAlg(U, -1),
        Alg::FaceAlg(R, -1),
        Alg::FaceAlg(U, -1),
        Alg::FaceAlg(R, -2),
    ]
}

/// H-perm: swaps both opposite edge pairs (`M2 U M2 U2 M2 U M2`).
fn h_perm() -> Vec<Alg> {
    use crate::color::SliceName::M;
    use FaceName::U;
    vec![
        Alg::SliceAlg(M, 2),
        Alg::FaceAlg(U, 1),
        Alg::SliceAlg(M, 2),
        Alg::FaceAlg(U, 2),
        Alg::SliceAlg(M, 2),
        Alg::FaceAlg(U, 1),
        Alg::SliceAlg(M, 2),
    ]
}

/// Aa-perm: cycles 3 last-layer corners.
fn aa_perm() -> Vec<Alg> {
    use FaceName::*;
    vec![
        Alg::FaceAlg(R, -1),
        Alg::FaceAlg(F, 1),
        Alg::FaceAlg(R, -1),
        Alg::FaceAlg(B, 2),
        Alg::FaceAlg(R, 1),
        Alg::FaceAlg(F, -1),
        Alg::FaceAlg(R, -1),
        Alg::FaceAlg(B, 2),
        Alg::FaceAlg(R, 2),
    ]
}

/// Z-perm: swaps both adjacent edge pairs
/// (`M2 U M2 U M' U2 M2 U2 M'`).
fn z_perm() -> Vec<Alg> {
    use crate::color::SliceName::M;
    use FaceName::U;
    vec![
        Alg::SliceAlg(M, 2),
        Alg::FaceAlg(U, 1),
        Alg::SliceAlg(M, 2),
        Alg::FaceAlg(U, 1),
        Alg::SliceAlg(M, -1),
        Alg::FaceAlg(U, 2),
        Alg::SliceAlg(M, 2),
        Alg::FaceAlg(U, 2),
        Alg::SliceAlg(M, -1),
    ]
}

const ALGORITHMS: &[fn() -> Vec<Alg>] = &[sune, anti_sune, ua_perm, ub_perm, h_perm, aa_perm, z_perm];

/// One candidate move in the composite-move search: an AUF turn (`0..=3`
/// quarter turns of `U`) followed by one named algorithm.
fn candidate_moves() -> Vec<Alg> {
    let mut out = Vec::new();
    for auf in 0..4 {
        for alg_fn in ALGORITHMS {
            let mut terms = Vec::new();
            if auf != 0 {
                terms.push(Alg::FaceAlg(FaceName::U, auf));
            }
            terms.extend(alg_fn());
            out.push(Alg::Sequence(terms));
        }
    }
    out
}

/// Runs the last-layer finish on `op`, whose cube must already satisfy
/// [`goals::l3_cross_done`] relative to `bottom`. A bounded number of
/// algorithm applications (each with free AUF) either reaches a full solve
/// or exhausts — the latter is a genuine even-cube swap-parity state
/// ([`parity::diagnose_swap_parity`] distinguishes which kind).
pub fn solve_last_layer(op: &mut Operator, layout: &CubeLayout, bottom: FaceName) -> Result<(), Error> {
    let moves = candidate_moves();
    let goal = |snap: &crate::model::cube::Cube3x3Snapshot| goals::fully_solved(snap, layout);

    // 6 covers the worst 2-look case: Sune/Anti-Sune have order 6, so a
    // single mis-twisted corner state can need up to 5 further applications
    // before a PLL application finishes the permutation.
    match solve_on_shadow_with_moves(op, goal, &moves, 6) {
        Ok(_) => Ok(()),
        Err(_) => {
            let snapshot = op.cube().get_3x3_colors();
            Err(parity::diagnose_swap_parity(&snapshot, layout))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cube::Cube;

    #[test]
    fn already_solved_cube_needs_no_last_layer_work() {
        let layout = CubeLayout::boy();
        let mut op = Operator::new(Cube::new(3, layout.clone(), false).unwrap());
        solve_last_layer(&mut op, &layout, FaceName::D).unwrap();
        assert!(op.cube().solved());
    }

    #[test]
    fn single_sune_application_is_undone_by_the_search() {
        let layout = CubeLayout::boy();
        let mut op = Operator::new(Cube::new(3, layout.clone(), false).unwrap());
        for mv in sune() {
            op.play(&mv, false).unwrap();
        }
        assert!(!op.cube().solved());
        solve_last_layer(&mut op, &layout, FaceName::D).unwrap();
        assert!(op.cube().solved());
    }
}
