//! L3: plays [`Alg`] trees against a [`Cube`], keeping an undo history and
//! the scoped on/off switches (`with_animation`, `save_history`) that
//! restore their prior setting on every exit path.

use crate::alg::{Alg, SliceSpec};
use crate::error::Error;
use crate::geometry::{self, Axis};
use crate::model::Cube;

/// One played atomic move, kept for [`Operator::undo`] and [`Operator::history`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub alg: Alg,
}

/// Plays algorithms against an owned [`Cube`], tracking history and honoring
/// an optional abort flag.
pub struct Operator {
    cube: Cube,
    history: Vec<PlayedMove>,
    history_enabled: bool,
    animation_enabled: bool,
    aborted: bool,
}

impl Operator {
    pub fn new(cube: Cube) -> Self {
        Operator { cube, history: Vec::new(), history_enabled: true, animation_enabled: true, aborted: false }
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn cube_mut(&mut self) -> &mut Cube {
        &mut self.cube
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn count(&self) -> usize {
        self.history.len()
    }

    /// Requests that the next atomic move raise [`Error::OpAborted`] instead
    /// of running. Cleared by [`Operator::reset_abort`].
    pub fn request_abort(&mut self) {
        self.aborted = true;
    }

    pub fn reset_abort(&mut self) {
        self.aborted = false;
    }

    /// Plays `alg`, or its inverse when `inverse` is true, one atomic term
    /// at a time.
    pub fn play(&mut self, alg: &Alg, inverse: bool) -> Result<(), Error> {
        let alg = if inverse { alg.inverse() } else { alg.clone() };
        for atomic in alg.flatten() {
            if self.aborted {
                return Err(Error::OpAborted);
            }
            self.play_atomic(&atomic)?;
            if self.history_enabled {
                self.history.push(PlayedMove { alg: atomic });
            }
        }
        Ok(())
    }

    /// Undoes the last played move, if any.
    pub fn undo(&mut self) -> Result<(), Error> {
        let Some(last) = self.history.pop() else { return Ok(()) };
        let was_enabled = self.history_enabled;
        self.history_enabled = false;
        let result = self.play_atomic(&last.alg.inverse());
        self.history_enabled = was_enabled;
        result
    }

    pub fn reset(&mut self) {
        self.cube.reset();
        self.history.clear();
    }

    /// Runs `f` with history recording toggled to `enabled`, restoring the
    /// previous setting afterward.
    pub fn save_history<T>(&mut self, enabled: bool, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = self.history_enabled;
        self.history_enabled = enabled;
        let result = f(self);
        self.history_enabled = previous;
        result
    }

    /// Runs `f` with animation toggled to `enabled`, restoring the previous
    /// setting on every exit path. This
    /// crate has no rendering backend; the flag exists
    /// for callers that drive an external view.
    pub fn with_animation<T>(&mut self, enabled: bool, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = self.animation_enabled;
        self.animation_enabled = enabled;
        let result = f(self);
        self.animation_enabled = previous;
        result
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    fn play_atomic(&mut self, atomic: &Alg) -> Result<(), Error> {
        let n = self.cube.size();
        match atomic {
            Alg::FaceAlg(face, turns) => self.cube.rotate_face_and_slice(*face, *turns, &[0]),
            Alg::SlicedFaceAlg(face, turns, spec) => {
                let depths = to_face_depths(spec);
                self.cube.rotate_face_and_slice(*face, *turns, &depths)
            }
            Alg::SliceAlg(slice, turns) => {
                let depths: Vec<usize> = (1..=n.saturating_sub(2)).collect();
                self.cube.rotate_slice(*slice, *turns, &depths)
            }
            Alg::SlicedSliceAlg(slice, turns, spec) => {
                self.cube.rotate_slice(*slice, *turns, &spec.indices())
            }
            Alg::DoubleLayerAlg(face, turns) => {
                let depths: Vec<usize> = (0..=n.saturating_sub(2)).collect();
                self.cube.rotate_face_and_slice(*face, *turns, &depths)
            }
            Alg::WideFaceAlg(face, turns) => {
                let depths: Vec<usize> = (0..=n.saturating_sub(2)).collect();
                self.cube.rotate_face_and_slice(*face, *turns, &depths)
            }
            Alg::WholeCubeAlg(axis, turns) => self.play_whole_cube(*axis, *turns),
            Alg::Sequence(_) | Alg::Repetition(_, _) => {
                unreachable!("Alg::flatten() removes composites before play_atomic runs")
            }
        }
    }

    /// A whole-cube reorientation: the pole face plus every slice up to (but
    /// not including) the face opposite it, and that opposite face turned
    /// the other way so its own grid spins too.
    fn play_whole_cube(&mut self, axis: Axis, turns: i32) -> Result<(), Error> {
        let n = self.cube.size();
        let pole = axis.pole();
        let anti = geometry::opposite(pole);
        let depths: Vec<usize> = (0..=n.saturating_sub(2)).collect();
        self.cube.rotate_face_and_slice(pole, turns, &depths)?;
        self.cube.rotate_face_and_slice(anti, -turns, &[0])
    }
}

/// `R[1]` names the same depth as bare `R`: the public 1-based bracket index `i` is the cube's
/// 0-based face-rotation depth `i - 1`.
fn to_face_depths(spec: &SliceSpec) -> Vec<usize> {
    spec.indices().into_iter().map(|i| i.saturating_sub(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::FaceName;
    use crate::cube_layout::CubeLayout;
    use std::str::FromStr;

    fn fresh(n: usize) -> Operator {
        Operator::new(Cube::new(n, CubeLayout::boy(), false).unwrap())
    }

    #[test]
    fn play_then_undo_restores_solved_state() {
        let mut op = fresh(4);
        op.play(&Alg::from_str("R U R' U'").unwrap(), false).unwrap();
        assert!(!op.cube().solved());
        for _ in 0..4 {
            op.undo().unwrap();
        }
        assert!(op.cube().solved());
    }

    #[test]
    fn play_inverse_flag_matches_explicit_inverse_alg() {
        let mut a = fresh(4);
        let mut b = fresh(4);
        let alg = Alg::from_str("R U F'").unwrap();
        a.play(&alg, true).unwrap();
        b.play(&alg.inverse(), false).unwrap();
        assert_eq!(a.cube().get_state(), b.cube().get_state());
    }

    #[test]
    fn save_history_false_plays_without_recording() {
        let mut op = fresh(4);
        op.save_history(false, |o| o.play(&Alg::FaceAlg(FaceName::R, 1), false).unwrap());
        assert_eq!(op.count(), 0);
        assert!(!op.cube().solved());
    }

    #[test]
    fn abort_request_is_honored_before_the_next_atomic() {
        let mut op = fresh(4);
        op.request_abort();
        let err = op.play(&Alg::FaceAlg(FaceName::R, 1), false).unwrap_err();
        assert!(matches!(err, Error::OpAborted));
    }

    #[test]
    fn bracket_index_one_matches_bare_face_move() {
        let mut a = fresh(5);
        let mut b = fresh(5);
        a.play(&Alg::FaceAlg(FaceName::R, 1), false).unwrap();
        b.play(&Alg::from_str("R[1]").unwrap(), false).unwrap();
        assert_eq!(a.cube().get_state(), b.cube().get_state());
    }

    #[test]
    fn whole_cube_x_four_times_is_identity() {
        let mut op = fresh(4);
        for _ in 0..4 {
            op.play(&Alg::WholeCubeAlg(Axis::X, 1), false).unwrap();
        }
        assert!(op.cube().solved());
    }
}
