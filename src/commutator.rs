//! L5 — generic 3-cycle primitive for center pieces.
//!
//! Moving a single center piece from one face to another without disturbing
//! the rest of the cube is a conjugated commutator: bridge the piece across
//! on a pole face adjacent to both (one [`crate::model::cube::Cube::rotate_face_and_slice`]
//! ring step, built on [`geometry::ring_step`]/[`geometry::ring_step_sign`],
//! which exist for exactly this), relocate it within the target face with a
//! single turn of that face, then undo the bridge and the relocation — the
//! classic X Y X⁻¹ Y⁻¹ shape.
//!
//! The source piece's depth (distance from the pole-facing border) must
//! match the target point's depth for a pre-rotation of the source face to
//! align them — true whenever a reducer works one reduced layer at a time,
//! which is how [`crate::reducer`] drives this module.

use crate::alg::{Alg, SliceSpec};
use crate::color::{FaceName, ALL_FACES};
use crate::error::{Error, GeometryErrorCode};
use crate::geometry::{self, Point};
use crate::model::cube::Cube;
use crate::operator::Operator;

/// A planned commutator: the algorithm to play, and where the piece
/// originally at the target point ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommutatorPlan {
    pub alg: Alg,
    pub s2_face: FaceName,
    pub s2: Point,
}

fn rotate_point_k(n: usize, p: Point, k: i32) -> Point {
    let mut cur = p;
    for _ in 0..k.rem_euclid(4) {
        cur = geometry::rotate_point_cw(n, cur);
    }
    cur
}

/// The face adjacent to both `a` and `b` that bridges them — always exists
/// and is unique up to the 2-face choice when `a`,`b` are themselves
/// adjacent.
fn bridge_pole(a: FaceName, b: FaceName) -> Option<FaceName> {
    ALL_FACES.into_iter().find(|&p| p != a && p != b && geometry::is_adjacent(p, a) && geometry::is_adjacent(p, b))
}

fn depth_from_pole(pole: FaceName, face: FaceName, p: Point, n: usize) -> Result<usize, Error> {
    let pos = geometry::position_of(face, pole)?;
    Ok(geometry::depth_along(pos, p, n).0)
}

/// Plans (without touching the cube) the commutator moving the piece at
/// `(source_face, source_point)` onto `(target_face, target_point)`, for
/// adjacent faces.
pub fn plan_adjacent_commutator(
    cube: &Cube,
    source_face: FaceName,
    source_point: Point,
    target_face: FaceName,
    target_point: Point,
) -> Result<CommutatorPlan, Error> {
    if source_face == target_face {
        return Err(Error::same_face(source_face));
    }
    if geometry::is_opposite(source_face, target_face) {
        return Err(Error::geometry(
            GeometryErrorCode::UnsupportedFacePair,
            format!("{source_face:?}/{target_face:?} are opposite; use plan_commutator"),
        ));
    }
    let pole = bridge_pole(source_face, target_face).ok_or_else(|| {
        Error::geometry(
            GeometryErrorCode::UnsupportedFacePair,
            format!("no pole bridges {source_face:?} and {target_face:?}"),
        )
    })?;
    let n = cube.size();
    let target_depth = depth_from_pole(pole, target_face, target_point, n)?;

    let (setup_turns, s_prime) = (0..4)
        .find_map(|k| {
            let rotated = rotate_point_k(n, source_point, k);
            let d = depth_from_pole(pole, source_face, rotated, n).ok()?;
            (d == target_depth).then_some((k, rotated))
        })
        .ok_or_else(|| {
            Error::geometry(
                GeometryErrorCode::OutOfRange,
                format!(
                    "no rotation of {source_face:?} brings {source_point:?} to target depth {target_depth}"
                ),
            )
        })?;

    let sign = geometry::ring_step_sign(pole, source_face, target_face)?;
    let natural = geometry::ring_step(pole, source_face, target_face, s_prime, n)?;

    let y_turns = (0..4)
        .find(|&y| rotate_point_k(n, natural, y) == target_point)
        .ok_or_else(|| {
            Error::geometry(
                GeometryErrorCode::OutOfRange,
                format!("{natural:?} and {target_point:?} are not in the same rotational orbit on {target_face:?}"),
            )
        })?;

    let depth_spec = SliceSpec::Single(target_depth + 1); // 1-based, see slice-index normalization

    let mut terms = Vec::new();
    if setup_turns != 0 {
        terms.push(Alg::FaceAlg(source_face, setup_turns));
    }
    terms.push(Alg::SlicedFaceAlg(pole, sign, depth_spec.clone()));
    if y_turns != 0 {
        terms.push(Alg::FaceAlg(target_face, y_turns));
    }
    terms.push(Alg::SlicedFaceAlg(pole, -sign, depth_spec));
    if y_turns != 0 {
        terms.push(Alg::FaceAlg(target_face, -y_turns));
    }
    if setup_turns != 0 {
        terms.push(Alg::FaceAlg(source_face, -setup_turns));
    }

    let s2 = rotate_point_k(n, target_point, 1);
    Ok(CommutatorPlan { alg: Alg::Sequence(terms), s2_face: target_face, s2 })
}

/// Commutator for opposite source/target faces: hop through a face adjacent to both (any
/// of the 4 faces besides `source_face`/`target_face` qualifies, since
/// they're all adjacent to both poles of an opposite pair), landing at an
/// intermediate point chosen so the second hop reaches `target_point`.
pub fn plan_opposite_commutator(
    cube: &Cube,
    source_face: FaceName,
    source_point: Point,
    target_face: FaceName,
    target_point: Point,
) -> Result<CommutatorPlan, Error> {
    if !geometry::is_opposite(source_face, target_face) {
        return Err(Error::geometry(
            GeometryErrorCode::UnsupportedFacePair,
            format!("{source_face:?}/{target_face:?} are not opposite"),
        ));
    }
    let bridge = ALL_FACES
        .into_iter()
        .find(|&f| geometry::is_adjacent(f, source_face) && geometry::is_adjacent(f, target_face))
        .ok_or_else(|| Error::internal("no bridge face found for an opposite pair".to_string()))?;

    // Land the first hop wherever the bridge face's own orientation
    // naturally carries it; the second hop's setup rotation then has full
    // freedom to align it with target_point's depth, same as the adjacent
    // case.
    let n = cube.size();
    let mid_point = rotate_point_k(n, source_point, 0);
    let first = plan_adjacent_commutator(cube, source_face, source_point, bridge, mid_point)?;
    let second = plan_adjacent_commutator(cube, bridge, first.s2, target_face, target_point)?;

    Ok(CommutatorPlan {
        alg: Alg::Sequence(vec![first.alg, second.alg]),
        s2_face: target_face,
        s2: second.s2,
    })
}

/// Dispatches to the adjacent or opposite family based on the face pair.
pub fn plan_commutator(
    cube: &Cube,
    source_face: FaceName,
    source_point: Point,
    target_face: FaceName,
    target_point: Point,
) -> Result<CommutatorPlan, Error> {
    if geometry::is_opposite(source_face, target_face) {
        plan_opposite_commutator(cube, source_face, source_point, target_face, target_point)
    } else {
        plan_adjacent_commutator(cube, source_face, source_point, target_face, target_point)
    }
}

/// Plays a (possibly cached) commutator plan against `operator`'s cube.
/// Passing a plan obtained from a prior `dry_run` call avoids recomputing
/// the geometry.
pub fn apply_commutator(operator: &mut Operator, plan: &CommutatorPlan) -> Result<(), Error> {
    operator.play(&plan.alg, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube_layout::CubeLayout;
    use crate::model::cube::Cube;

    fn cube(n: usize) -> Cube {
        Cube::new(n, CubeLayout::boy(), false).unwrap()
    }

    #[test]
    fn same_face_is_rejected() {
        let c = cube(4);
        assert!(plan_adjacent_commutator(&c, FaceName::U, (1, 1), FaceName::U, (1, 1)).is_err());
    }

    #[test]
    fn opposite_face_rejected_by_adjacent_family() {
        let c = cube(4);
        assert!(plan_adjacent_commutator(&c, FaceName::U, (1, 1), FaceName::D, (1, 1)).is_err());
    }

    #[test]
    fn adjacent_commutator_moves_the_targeted_color_onto_the_target_face() {
        let c = cube(5);
        let target_point = (1, 1);
        let plan = plan_commutator(&c, FaceName::U, (1, 1), FaceName::F, target_point).unwrap();
        let mut op = Operator::new(c);
        let expected_color = op.cube().center(FaceName::U, 1, 1).facelet(FaceName::U).unwrap().color;
        apply_commutator(&mut op, &plan).unwrap();
        let got = op.cube().center(FaceName::F, target_point.0, target_point.1).facelet(FaceName::F).unwrap().color;
        assert_eq!(got, expected_color);
    }

    #[test]
    fn opposite_commutator_reaches_the_opposite_face() {
        let c = cube(5);
        let target_point = (1, 1);
        let plan = plan_commutator(&c, FaceName::U, (1, 1), FaceName::D, target_point).unwrap();
        let mut op = Operator::new(c);
        let expected_color = op.cube().center(FaceName::U, 1, 1).facelet(FaceName::U).unwrap().color;
        apply_commutator(&mut op, &plan).unwrap();
        let got = op.cube().center(FaceName::D, target_point.0, target_point.1).facelet(FaceName::D).unwrap().color;
        assert_eq!(got, expected_color);
    }

    #[test]
    fn commutator_leaves_cube_size_and_other_faces_home_colors_mostly_intact_for_untouched_faces() {
        // The two faces that are neither source, target, nor the bridge pole
        // never take part in the ring step at all.
        let c = cube(5);
        let before = c.center(FaceName::L, 1, 1).facelet(FaceName::L).unwrap().clone();
        let before_r = c.center(FaceName::R, 1, 1).facelet(FaceName::R).unwrap().clone();
        let plan = plan_commutator(&c, FaceName::U, (2, 2), FaceName::F, (2, 2)).unwrap();
        let mut op = Operator::new(c);
        apply_commutator(&mut op, &plan).unwrap();
        assert_eq!(op.cube().center(FaceName::L, 1, 1).facelet(FaceName::L).unwrap(), &before);
        assert_eq!(op.cube().center(FaceName::R, 1, 1).facelet(FaceName::R).unwrap(), &before_r);
    }
}
