//! L7 — solves a virtual 3x3 once [`crate::reducer::reduce`] has reduced an
//! NxN cube to solid centers and paired edges.
//!
//! Two interchangeable solvers, both built on the shadow-cube search in
//! [`search`]: [`BeginnerSolver`] walks the five classic layer-by-layer
//! sub-stages one goal predicate at a time; [`CfopSolver`] merges the
//! bottom-layer-corner and middle-layer-edge stages into one F2L search,
//! matching how a human CFOP solve actually groups the work. Both finish
//! through the same [`lastlayer`] stage and surface the same even-cube
//! parity exceptions when a search stage is unreachable.

mod goals;
mod lastlayer;
mod parity;
mod search;

use crate::color::FaceName;
use crate::cube_layout::CubeLayout;
use crate::error::Error;
use crate::operator::Operator;

/// Common interface both layer-by-layer and CFOP-style solvers satisfy.
pub trait ThreeByThreeSolver {
    fn solve(&self, op: &mut Operator) -> Result<(), Error>;
}

/// Cross/F2L-style searches only ever need to relocate 1-4 pieces at a
/// time, so a shallow bound already covers every reachable case; going any
/// deeper just wastes search effort on an already-unreachable branch.
const EARLY_STAGE_DEPTH: usize = 8;

fn bottom_face() -> FaceName {
    FaceName::D
}

/// Classic beginner's method: cross, then the four bottom corners one at a
/// time, then the four middle edges, then orient the top layer's edges,
/// then [`lastlayer::solve_last_layer`] for the rest.
pub struct BeginnerSolver;

impl ThreeByThreeSolver for BeginnerSolver {
    fn solve(&self, op: &mut Operator) -> Result<(), Error> {
        let layout = op.cube().layout().clone();
        let bottom = bottom_face();

        search::solve_on_shadow(op, |s| goals::cross_done(s, &layout, bottom), EARLY_STAGE_DEPTH)?;
        search::solve_on_shadow(op, |s| goals::l1_corners_done(s, &layout, bottom), EARLY_STAGE_DEPTH)?;
        search::solve_on_shadow(op, |s| goals::l2_edges_done(s, &layout, bottom), EARLY_STAGE_DEPTH)?;
        search::solve_on_shadow(op, |s| goals::l3_cross_done(s, &layout, bottom), EARLY_STAGE_DEPTH)
            .map_err(|_| Error::EvenCubeEdgeParityException)?;
        lastlayer::solve_last_layer(op, &layout, bottom)
    }
}

/// CFOP-style: cross, then F2L (bottom corners and middle edges paired and
/// inserted together in one search rather than two), then the same
/// last-layer finish.
pub struct CfopSolver;

impl ThreeByThreeSolver for CfopSolver {
    fn solve(&self, op: &mut Operator) -> Result<(), Error> {
        let layout = op.cube().layout().clone();
        let bottom = bottom_face();

        search::solve_on_shadow(op, |s| goals::cross_done(s, &layout, bottom), EARLY_STAGE_DEPTH)?;
        search::solve_on_shadow(op, |s| goals::l2_edges_done(s, &layout, bottom), EARLY_STAGE_DEPTH)?;
        search::solve_on_shadow(op, |s| goals::l3_cross_done(s, &layout, bottom), EARLY_STAGE_DEPTH)
            .map_err(|_| Error::EvenCubeEdgeParityException)?;
        lastlayer::solve_last_layer(op, &layout, bottom)
    }
}

/// Diagnoses whether a cube that is not [`goals::fully_solved`] but has no
/// centers/edges left to reduce is
/// stuck in corner-swap or edge-swap parity, without running a solver.
pub fn diagnose_last_layer_parity(op: &Operator, layout: &CubeLayout) -> Error {
    let snapshot = op.cube().get_3x3_colors();
    parity::diagnose_swap_parity(&snapshot, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cube::Cube;

    fn fresh() -> Operator {
        Operator::new(Cube::new(3, CubeLayout::boy(), false).unwrap())
    }

    #[test]
    fn beginner_solver_is_a_no_op_on_an_already_solved_cube() {
        let mut op = fresh();
        BeginnerSolver.solve(&mut op).unwrap();
        assert!(op.cube().solved());
    }

    #[test]
    fn cfop_solver_is_a_no_op_on_an_already_solved_cube() {
        let mut op = fresh();
        CfopSolver.solve(&mut op).unwrap();
        assert!(op.cube().solved());
    }

    #[test]
    fn beginner_solver_recovers_from_a_single_scrambling_move() {
        let mut op = fresh();
        op.play(&crate::alg::Alg::FaceAlg(FaceName::R, 1), false).unwrap();
        BeginnerSolver.solve(&mut op).unwrap();
        assert!(op.cube().solved());
    }
}
