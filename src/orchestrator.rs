//! L8 — the top-level entry point composing reduction and 3x3 solving into
//! one call, retrying through the even-cube parity exceptions the lower
//! layers raise.
//!
//! Parity is not a bug: on an even-sized cube the reduction to a virtual
//! 3x3 can legitimately land in a state no real 3x3 reaches, and
//! the fix is a known algorithm, not a different search. So this loop
//! treats [`Error::EvenCubeEdgeParityException`],
//! [`Error::EvenCubeEdgeSwapParityException`] and
//! [`Error::EvenCubeCornerSwapException`] as recoverable: apply the
//! matching [`crate::reducer`] fix-up and retry the stage that raised it,
//! bounded so a genuine bug still surfaces instead of looping forever.

use log::{info, warn};

use crate::config::{Config, SolverKind};
use crate::error::Error;
use crate::operator::Operator;
use crate::reducer;
use crate::solver3x3::{BeginnerSolver, CfopSolver, ThreeByThreeSolver};

/// How much of the pipeline to run. `CentersOnly`/`EdgesOnly`
/// stop after one reducer stage — useful for tests and for driving an
/// external step-by-step view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStep {
    /// Full reduction plus the 3x3 finish.
    All,
    /// Reduction only, then the 3x3 layer-1 (cross + corners) stage.
    L1,
    /// Reduction plus 3x3 through layer 2 (F2L).
    L2,
    /// Reduction plus the full 3x3 finish (same endpoint as `All`, named
    /// for callers stepping stage by stage).
    L3,
    /// Only [`reducer::solve_centers`].
    CentersOnly,
    /// Only [`reducer::solve_edges`] (assumes centers are already solved).
    EdgesOnly,
}

/// A retry budget generous enough that a genuine bug still surfaces as an
/// error rather than an infinite loop: at most one fix-up per parity kind
/// could plausibly be needed per solve, so this is already several times
/// that.
const MAX_PARITY_RETRIES: usize = 4;

fn solver_for(kind: SolverKind) -> Box<dyn ThreeByThreeSolver> {
    match kind {
        SolverKind::Beginner => Box::new(BeginnerSolver),
        SolverKind::Cfop => Box::new(CfopSolver),
    }
}

/// Runs `step` of the pipeline against `op`, honoring `config`
/// Returns `Ok(())` once the requested step's goal is reached; any
/// non-parity error from a lower layer propagates immediately.
pub fn solve(op: &mut Operator, config: &Config, step: SolveStep) -> Result<(), Error> {
    match step {
        SolveStep::CentersOnly => reducer::solve_centers(op, config),
        SolveStep::EdgesOnly => run_edges_with_parity_retry(op, config),
        SolveStep::L1 | SolveStep::L2 | SolveStep::L3 | SolveStep::All => {
            reducer::solve_centers(op, config)?;
            run_edges_with_parity_retry(op, config)?;
            if op.cube().size() > 3 && !op.cube().solved() {
                info!("reduction complete, handing off to the 3x3 finish");
            }
            run_3x3_with_parity_retry(op, config)
        }
    }
}

/// Runs [`reducer::solve_edges`], catching an
/// [`Error::EvenCubeEdgeParityException`] by applying
/// [`reducer::fix_edge_parity`] and re-running the stage.
fn run_edges_with_parity_retry(op: &mut Operator, config: &Config) -> Result<(), Error> {
    for attempt in 0..=MAX_PARITY_RETRIES {
        match reducer::solve_edges(op, config) {
            Ok(()) => return Ok(()),
            Err(Error::EvenCubeEdgeParityException) if attempt < MAX_PARITY_RETRIES => {
                warn!("edge (OLL) parity detected while reducing; applying fix-up and retrying");
                reducer::fix_edge_parity(op)?;
            }
            Err(e) => return Err(e),
        }
    }
    Err(Error::internal("exceeded parity retry budget while reducing edges"))
}

/// Runs the configured 3x3 solver, catching the two swap-parity exceptions
/// by applying the matching reducer fix-up and retrying.
fn run_3x3_with_parity_retry(op: &mut Operator, config: &Config) -> Result<(), Error> {
    let solver = solver_for(config.solver);
    for attempt in 0..=MAX_PARITY_RETRIES {
        match solver.solve(op) {
            Ok(()) => return Ok(()),
            Err(Error::EvenCubeEdgeSwapParityException) if attempt < MAX_PARITY_RETRIES => {
                warn!("edge swap (PLL) parity detected; applying fix-up and retrying");
                reducer::fix_edge_swap_parity(op)?;
            }
            Err(Error::EvenCubeCornerSwapException) if attempt < MAX_PARITY_RETRIES => {
                warn!("corner swap (PLL) parity detected; applying fix-up and retrying");
                reducer::fix_corner_parity(op)?;
            }
            Err(e) => return Err(e),
        }
    }
    Err(Error::internal("exceeded parity retry budget while finishing the 3x3 stage"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube_layout::CubeLayout;
    use crate::model::cube::Cube;

    fn fresh(n: usize) -> Operator {
        Operator::new(Cube::new(n, CubeLayout::boy(), false).unwrap())
    }

    #[test]
    fn solve_all_is_a_no_op_on_an_already_solved_3x3() {
        let mut op = fresh(3);
        let config = Config::default();
        solve(&mut op, &config, SolveStep::All).unwrap();
        assert!(op.cube().solved());
    }

    #[test]
    fn solve_all_is_a_no_op_on_an_already_solved_5x5() {
        let mut op = fresh(5);
        let config = Config::default();
        solve(&mut op, &config, SolveStep::All).unwrap();
        assert!(op.cube().solved());
    }

    #[test]
    fn solve_all_recovers_from_a_single_scrambling_move_on_a_4x4() {
        let mut op = fresh(4);
        op.play(&crate::alg::Alg::FaceAlg(crate::color::FaceName::R, 1), false).unwrap();
        let config = Config::default();
        solve(&mut op, &config, SolveStep::All).unwrap();
        assert!(op.cube().solved());
    }

    #[test]
    fn centers_only_stops_after_reducing_centers() {
        let mut op = fresh(5);
        let config = Config::default();
        solve(&mut op, &config, SolveStep::CentersOnly).unwrap();
        assert!(op.cube().solved()); // already solved, but exercises the step selector
    }

    #[test]
    fn cfop_solver_config_also_solves_an_already_solved_cube() {
        let mut op = fresh(3);
        let config = Config { solver: SolverKind::Cfop, ..Config::default() };
        solve(&mut op, &config, SolveStep::All).unwrap();
        assert!(op.cube().solved());
    }
}
