//! L6 — reduces an NxN cube to a virtual 3x3: solid centers,
//! paired edge wings, ready to hand off to [`crate::solver3x3`].
//!
//! Both stages ride on the same primitive: [`crate::commutator`] doesn't
//! care whether the point it's relocating is a center cell or an edge-wing
//! facelet on the border — a cube piece always moves as the rigid unit
//! [`crate::model::slice::PartSlice`] models, so pointing the commutator at
//! one facelet of a wing carries its partner facelet along for free.

use log::{debug, trace};

use crate::color::{Color, EdgeName, FaceName, ALL_EDGES, ALL_FACES};
use crate::commutator;
use crate::config::Config;
use crate::error::Error;
use crate::geometry;
use crate::operator::Operator;

/// Runs both reduction stages in order.
pub fn reduce(op: &mut Operator, config: &Config) -> Result<(), Error> {
    solve_centers(op, config)?;
    solve_edges(op, config)?;
    Ok(())
}

/// Stage 1: fills every face's `(n-2)x(n-2)` center grid with its home
/// color by repeatedly locating a wrongly-placed center of the right color
/// elsewhere on the cube and commuting it in.
pub fn solve_centers(op: &mut Operator, config: &Config) -> Result<(), Error> {
    let n = op.cube().size();
    let layout = op.cube().layout().clone();
    for face in ALL_FACES {
        let home = layout.color_of(face);
        for row in 1..=n - 2 {
            for col in 1..=n - 2 {
                if op.cube().center(face, row, col).facelet(face).expect("center has one facelet").color == home {
                    continue;
                }
                place_center(op, face, row, col, home)?;
            }
        }
        if config.solver_debug {
            debug!("centers solved for face {face:?}");
        }
    }
    Ok(())
}

fn place_center(op: &mut Operator, target_face: FaceName, row: usize, col: usize, home: Color) -> Result<(), Error> {
    let n = op.cube().size();
    for source_face in ALL_FACES {
        if source_face == target_face {
            continue;
        }
        for r in 1..=n - 2 {
            for c in 1..=n - 2 {
                let piece_color =
                    op.cube().center(source_face, r, c).facelet(source_face).expect("center has one facelet").color;
                if piece_color != home {
                    continue;
                }
                let plan = match commutator::plan_commutator(op.cube(), source_face, (r, c), target_face, (row, col)) {
                    Ok(plan) => plan,
                    Err(_) => continue,
                };
                trace!("commuting center {source_face:?}({r},{c}) -> {target_face:?}({row},{col})");
                commutator::apply_commutator(op, &plan)?;
                if op.cube().facelet(target_face, row, col) == home {
                    return Ok(());
                }
            }
        }
    }
    Err(Error::internal(format!(
        "no reachable center of color {home:?} found for {target_face:?} ({row},{col})"
    )))
}

/// Stage 2: pairs every edge's `n-2` wings so each shows the two home colors
/// of its edge's faces. Works one wing slot at a
/// time; the last slot sometimes has no correctly-oriented donor left on
/// the whole cube — that is exactly even-cube OLL parity, so this function
/// surfaces it rather than looping forever.
pub fn solve_edges(op: &mut Operator, config: &Config) -> Result<(), Error> {
    let n = op.cube().size();
    if n < 4 {
        return Ok(()); // no interior wings to pair on a 3x3
    }
    let wing_count = n - 2;
    let layout = op.cube().layout().clone();

    for edge in ALL_EDGES {
        let [(fa, pos_a), (fb, pos_b)] = geometry::edge_faces(edge);
        let home_a = layout.color_of(fa);
        let home_b = layout.color_of(fb);
        for index in 0..wing_count {
            let (ra, ca) = geometry::point_from_depth_along(pos_a, 0, index + 1, n);
            let (rb, cb) = geometry::point_from_depth_along(pos_b, 0, index + 1, n);
            if op.cube().facelet(fa, ra, ca) == home_a && op.cube().facelet(fb, rb, cb) == home_b {
                continue;
            }
            pair_wing(op, fa, (ra, ca), home_a, fb, (rb, cb), home_b)?;
        }
        if config.solver_debug {
            debug!("edge {edge:?} paired");
        }
    }
    Ok(())
}

/// Finds a donor wing elsewhere on the cube already showing `(home_a,
/// home_b)` in the right orientation and commutes it onto `(face_a, pt_a)`
/// (which, being a rigid wing, carries `(face_b, pt_b)` along for free).
fn pair_wing(
    op: &mut Operator,
    face_a: FaceName,
    pt_a: (usize, usize),
    home_a: Color,
    face_b: FaceName,
    pt_b: (usize, usize),
    home_b: Color,
) -> Result<(), Error> {
    let n = op.cube().size();
    let wing_count = n - 2;
    for edge in ALL_EDGES {
        let [(ca, pos_a), (cb, pos_b)] = geometry::edge_faces(edge);
        for index in 0..wing_count {
            let (ra, ca_) = geometry::point_from_depth_along(pos_a, 0, index + 1, n);
            let (rb, cb_) = geometry::point_from_depth_along(pos_b, 0, index + 1, n);
            if (ca, ra, ca_) == (face_a, pt_a.0, pt_a.1) {
                continue;
            }
            let color_a = op.cube().facelet(ca, ra, ca_);
            let color_b = op.cube().facelet(cb, rb, cb_);
            let (src_a, src_pt_a) = if ca == face_a || (color_a == home_a && color_b == home_b) {
                ((ca, (ra, ca_)), (cb, (rb, cb_)))
            } else {
                ((cb, (rb, cb_)), (ca, (ra, ca_)))
            };
            let ((donor_face_a, donor_pt_a), (donor_face_b, donor_pt_b)) = (src_a, src_pt_a);
            let donor_color_a = op.cube().facelet(donor_face_a, donor_pt_a.0, donor_pt_a.1);
            let donor_color_b = op.cube().facelet(donor_face_b, donor_pt_b.0, donor_pt_b.1);
            if donor_color_a != home_a || donor_color_b != home_b {
                continue;
            }
            let plan = match commutator::plan_commutator(op.cube(), donor_face_a, donor_pt_a, face_a, pt_a) {
                Ok(plan) => plan,
                Err(_) => continue,
            };
            commutator::apply_commutator(op, &plan)?;
            if op.cube().facelet(face_a, pt_a.0, pt_a.1) == home_a && op.cube().facelet(face_b, pt_b.0, pt_b.1) == home_b {
                return Ok(());
            }
        }
    }
    Err(Error::EvenCubeEdgeParityException)
}

/// Plays a fixed parity-correction algorithm for an odd number of flipped
/// edge wings, generalized from the
/// well-known 4x4 "OLL parity" algorithm: a wide double-layer turn, a
/// middle-layer half turn, then its mirror on the other wide layer.
/// Disturbs the just-placed edges and corners; re-run [`solve_edges`]
/// afterward.
pub fn fix_edge_parity(op: &mut Operator) -> Result<(), Error> {
    use crate::alg::{Alg, SliceSpec};
    let n = op.cube().size();
    let mid = (n / 2).max(1);
    let wide = SliceSpec::Range(1, mid);
    let alg = Alg::Sequence(vec![
        Alg::SlicedFaceAlg(FaceName::R, 2, wide.clone()),
        Alg::FaceAlg(FaceName::U, 2),
        Alg::SlicedFaceAlg(FaceName::R, 2, wide.clone()),
        Alg::FaceAlg(FaceName::U, 2),
        Alg::SlicedFaceAlg(FaceName::R, 2, SliceSpec::Single(mid)),
        Alg::FaceAlg(FaceName::U, 2),
        Alg::SlicedFaceAlg(FaceName::L, 2, SliceSpec::Single(mid)),
        Alg::FaceAlg(FaceName::U, 2),
        Alg::SlicedFaceAlg(FaceName::R, 2, SliceSpec::Single(mid)),
        Alg::FaceAlg(FaceName::U, 2),
        Alg::SlicedFaceAlg(FaceName::R, 2, SliceSpec::Single(mid)),
        Alg::FaceAlg(FaceName::U, 2),
        Alg::SlicedFaceAlg(FaceName::R, 2, wide),
    ]);
    op.play(&alg, false)
}

/// PLL edge-swap parity fix: a
/// wide double turn swapping two opposite edge pairs.
pub fn fix_edge_swap_parity(op: &mut Operator) -> Result<(), Error> {
    use crate::alg::{Alg, SliceSpec};
    let n = op.cube().size();
    let mid = (n / 2).max(1);
    let alg = Alg::Sequence(vec![
        Alg::SlicedFaceAlg(FaceName::R, 2, SliceSpec::Range(1, mid)),
        Alg::FaceAlg(FaceName::U, 2),
        Alg::SlicedFaceAlg(FaceName::R, 2, SliceSpec::Range(1, mid)),
        Alg::FaceAlg(FaceName::U, 2),
    ]);
    op.play(&alg, false)
}

/// PLL corner-swap parity fix.
pub fn fix_corner_parity(op: &mut Operator) -> Result<(), Error> {
    use crate::alg::{Alg, SliceSpec};
    let n = op.cube().size();
    let mid = (n / 2).max(1);
    let alg = Alg::Sequence(vec![
        Alg::SlicedFaceAlg(FaceName::F, 2, SliceSpec::Range(1, mid)),
        Alg::FaceAlg(FaceName::U, 2),
        Alg::SlicedFaceAlg(FaceName::F, 2, SliceSpec::Range(1, mid)),
        Alg::FaceAlg(FaceName::D, 2),
    ]);
    op.play(&alg, false)
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
    fn solve_centers_is_a_no_op_on_an_already_solved_cube() {
        let mut op = fresh(5);
        let config = Config::default();
        solve_centers(&mut op, &config).unwrap();
        assert!(op.cube().solved());
    }

    #[test]
    fn solve_edges_is_a_no_op_on_an_already_solved_cube() {
        let mut op = fresh(5);
        let config = Config::default();
        solve_edges(&mut op, &config).unwrap();
        assert!(op.cube().solved());
    }

    #[test]
    fn reduce_is_a_no_op_on_an_already_solved_4x4() {
        let mut op = fresh(4);
        let config = Config::default();
        reduce(&mut op, &config).unwrap();
        assert!(op.cube().solved());
    }

    #[test]
    fn solve_centers_recovers_after_one_commutator_scramble() {
        let mut op = fresh(5);
        // Disturb a single center pair manually via the same machinery the
        // stage itself uses, then confirm the stage restores home colors.
        let plan = commutator::plan_commutator(op.cube(), FaceName::U, (1, 1), FaceName::F, (1, 1)).unwrap();
        commutator::apply_commutator(&mut op, &plan).unwrap();
        let config = Config::default();
        solve_centers(&mut op, &config).unwrap();
        for face in ALL_FACES {
            let home = op.cube().layout().color_of(face);
            for row in 1..=3 {
                for col in 1..=3 {
                    assert_eq!(op.cube().facelet(face, row, col), home);
                }
            }
        }
    }
}
