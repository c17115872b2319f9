//! Knobs controlling solve behavior

/// Runtime configuration for a [`crate::orchestrator`] solve, an
/// [`crate::operator::Operator`], or a standalone [`crate::model::Cube`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Side length of the cube to build/solve.
    pub cube_size: usize,
    /// Which 3x3 solving method the reducer hands off to.
    pub solver: SolverKind,
    /// Whether the operator should record history entries useful for
    /// stepwise playback.
    pub animation_enabled: bool,
    /// Run `Cube::solved`/state sanity assertions after every move during a
    /// solve; expensive, meant for debugging.
    pub check_cube_sanity: bool,
    /// Emit verbose per-step tracing from the reducer/solver.
    pub solver_debug: bool,
    /// Stamp tracker attribute keys as human-readable tags instead of bare
    /// presence markers, for debugging tracker state by eye.
    pub solver_annotate_trackers: bool,
    /// Enable [`crate::cache::CubeCache`] memoization of coordinate queries.
    pub enable_cube_cache: bool,
    /// Search a wider block shape before committing to a center piece
    /// placement in [`crate::reducer`] (slower, fewer total moves).
    pub optimize_center_blocks: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Beginner,
    Cfop,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cube_size: 5,
            solver: SolverKind::Beginner,
            animation_enabled: true,
            check_cube_sanity: false,
            solver_debug: true,
            solver_annotate_trackers: false,
            enable_cube_cache: true,
            optimize_center_blocks: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let c = Config::default();
        assert_eq!(c.cube_size, 5);
        assert_eq!(c.solver, SolverKind::Beginner);
        assert!(c.animation_enabled);
        assert!(!c.check_cube_sanity);
        assert!(c.solver_debug);
        assert!(!c.solver_annotate_trackers);
        assert!(c.enable_cube_cache);
        assert!(!c.optimize_center_blocks);
    }
}
