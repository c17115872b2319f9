//! L0 — pure topology. Answers questions about faces/slices/edges/corners
//! purely in terms of names, never touching a physical [`crate::model::cube::Cube`].
//!
//! Everything here is derived from two fundamental inputs:
//!
//! 1. The three opposite pairs `F-B`, `U-D`, `L-R` ([`OPPOSITE`]).
//! 2. For each face, its four neighbors in clockwise
//!    [`EdgePosition::Top`, `Right`, `Bottom`, `Left`] order as seen from
//!    outside the cube ([`FACE_POSITIONS`]).
//!
//! `(2)` stands in for "the 8 corner assignments" a corner-first derivation
//! would start from — it is equivalent information (a face-turn cycles its
//! own four neighbors in this exact order), just indexed by face instead of
//! by corner. Corner names, edge names, `same_direction`, slice index
//! formulas and face-to-face coordinate translation are all mechanically
//! derived from it below — nothing past `FACE_POSITIONS` is hand-assigned.

use static_init::dynamic;
use std::collections::HashMap;

use crate::color::{
    CornerName, CornerPosition, EdgeName, EdgePosition, FaceName, SliceName, ALL_CORNER_POSITIONS,
    ALL_EDGE_POSITIONS, ALL_FACES,
};
use crate::error::{Error, GeometryErrorCode};

/// A 0-based `(row, col)` coordinate on a face's N×N grid. Row 0 is the
/// bottom row, col 0 is the left column
pub type Point = (usize, usize);

/// One of the three rotation axes for whole-cube rotations, named by the
/// face a positive quarter turn "follows".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The face whose own clockwise rotation this axis "follows".
    pub fn pole(self) -> FaceName {
        match self {
            Axis::X => FaceName::R,
            Axis::Y => FaceName::U,
            Axis::Z => FaceName::F,
        }
    }
}

/// The three opposite face pairs — the first fundamental geometric input.
pub const OPPOSITE_PAIRS: [(FaceName, FaceName); 3] = [
    (FaceName::F, FaceName::B),
    (FaceName::U, FaceName::D),
    (FaceName::L, FaceName::R),
];

/// The face M/E/S turns are measured against.
pub fn slice_reference_face(slice: SliceName) -> FaceName {
    match slice {
        SliceName::M => FaceName::L,
        SliceName::E => FaceName::D,
        SliceName::S => FaceName::F,
    }
}

/// Where a full-grid point lands after one clockwise quarter turn of its own
/// face, using the same row0=bottom/col0=left convention as [`Point`]. The
/// inverse of itself applied three times.
pub fn rotate_point_cw(n: usize, (r, c): Point) -> Point {
    (n - 1 - c, r)
}

/// For each face, its neighbor at [Top, Right, Bottom, Left], as seen from
/// outside the cube with that face toward the viewer — the second
/// fundamental geometric input A clockwise quarter turn of a
/// face cycles content `Top -> Right -> Bottom -> Left`.
fn face_positions(face: FaceName) -> [FaceName; 4] {
    use FaceName::*;
    match face {
        F => [U, R, D, L],
        U => [B, R, F, L],
        D => [F, R, B, L],
        R => [U, B, D, F],
        B => [U, L, D, R],
        L => [U, F, D, B],
    }
}

pub fn opposite(face: FaceName) -> FaceName {
    for (a, b) in OPPOSITE_PAIRS {
        if a == face {
            return b;
        }
        if b == face {
            return a;
        }
    }
    unreachable!("OPPOSITE_PAIRS covers every face")
}

pub fn is_opposite(a: FaceName, b: FaceName) -> bool {
    opposite(a) == b
}

pub fn is_adjacent(a: FaceName, b: FaceName) -> bool {
    a != b && !is_opposite(a, b)
}

/// The four faces adjacent to `face`, in unspecified order. Use
/// [`position_of`] when the Top/Right/Bottom/Left slot matters.
pub fn adjacent(face: FaceName) -> [FaceName; 4] {
    face_positions(face)
}

/// Where `neighbor` sits relative to `face` (Top/Right/Bottom/Left), as
/// seen from outside the cube with `face` toward the viewer.
pub fn position_of(face: FaceName, neighbor: FaceName) -> Result<EdgePosition, Error> {
    if face == neighbor {
        return Err(Error::same_face(face));
    }
    if is_opposite(face, neighbor) {
        return Err(Error::geometry(
            GeometryErrorCode::UnsupportedFacePair,
            format!("{neighbor:?} is opposite of {face:?}, not adjacent"),
        ));
    }
    let positions = face_positions(face);
    for (i, p) in ALL_EDGE_POSITIONS.iter().enumerate() {
        if positions[i] == neighbor {
            return Ok(*p);
        }
    }
    unreachable!("every non-opposite, non-self face is one of the 4 neighbors")
}

/// The neighbor of `face` sitting at `pos`.
pub fn neighbor_at(face: FaceName, pos: EdgePosition) -> FaceName {
    let positions = face_positions(face);
    let idx = ALL_EDGE_POSITIONS.iter().position(|p| *p == pos).unwrap();
    positions[idx]
}

/// The position a clockwise quarter turn moves content *into*: content at
/// `Top` ends up at `Right`, etc.
pub fn next_position(pos: EdgePosition) -> EdgePosition {
    use EdgePosition::*;
    match pos {
        Top => Right,
        Right => Bottom,
        Bottom => Left,
        Left => Top,
    }
}

pub fn prev_position(pos: EdgePosition) -> EdgePosition {
    next_position(next_position(next_position(pos)))
}

/// The corner shared between `pos` and `next_position(pos)` on `face` —
/// the pivot a ring rotation swings content around when moving from `pos`
/// toward `next_position(pos)`.
pub fn pivot_corner(face: FaceName, pos: EdgePosition) -> CornerName {
    use CornerPosition::*;
    use EdgePosition::*;
    let cp = match pos {
        Top => TopRight,
        Right => BottomRight,
        Bottom => BottomLeft,
        Left => TopLeft,
    };
    corner_at(face, cp)
}

/// The four face/corner-position pairs that meet at a physical corner,
/// derived by walking `face_positions` in corner order. `pos` names the
/// corner slot on `face` (`TopLeft` = the corner between `face`'s `Top`
/// and `Left` neighbors, etc).
fn corner_faces(face: FaceName, pos: CornerPosition) -> [(FaceName, EdgePosition); 2] {
    use CornerPosition::*;
    use EdgePosition::*;
    match pos {
        TopRight => [(face, Top), (face, Right)],
        BottomRight => [(face, Right), (face, Bottom)],
        BottomLeft => [(face, Bottom), (face, Left)],
        TopLeft => [(face, Left), (face, Top)],
    }
}

/// All 8 physical corners, derived once from [`face_positions`]: each
/// corner is the set of 3 (face, corner-position) triples that name the
/// same physical corner. Indexed by a canonical [`CornerName`] assigned by
/// first discovery order (matches the standard `F`/`B`-first naming of
/// [`crate::color::CornerName`]).
#[dynamic]
static CORNER_TABLE: CornerTable = CornerTable::build();

struct CornerTable {
    /// name -> 3 (face, corner-position) triples
    triples: HashMap<CornerName, [(FaceName, CornerPosition); 3]>,
    /// (face, corner-position) -> name
    lookup: HashMap<(FaceName, CornerPosition), CornerName>,
}

impl CornerTable {
    fn build() -> Self {
        // Discover the 8 distinct corners by their *face identity sets*,
        // then assign canonical names via the standard F/B-first order.
        let mut discovered: Vec<[(FaceName, CornerPosition); 3]> = Vec::new();
        let mut seen_sets: Vec<[FaceName; 3]> = Vec::new();

        for face in ALL_FACES {
            for pos in ALL_CORNER_POSITIONS {
                let [(f1, p1), (f2, p2)] = corner_faces(face, pos);
                let n1 = neighbor_at(f1, p1);
                let n2 = neighbor_at(f2, p2);
                // The corner touches `face`, and the two neighbors found by
                // walking one step along each of its two bounding edges.
                let mut set = [face, n1, n2];
                set.sort_by_key(|f| ALL_FACES.iter().position(|x| x == f).unwrap());
                if seen_sets.contains(&set) {
                    continue;
                }

                // Corner-position of `face` itself in this corner's triple is `pos`.
                // Now find n1's and n2's own corner-position for the SAME corner.
                let pos_on = |f: FaceName, other_two: [FaceName; 2]| -> CornerPosition {
                    for p in ALL_CORNER_POSITIONS {
                        let [(a, ap), (b, bp)] = corner_faces(f, p);
                        let na = neighbor_at(a, ap);
                        let nb = neighbor_at(b, bp);
                        let mut s = [na, nb];
                        s.sort_by_key(|x| ALL_FACES.iter().position(|y| y == x).unwrap());
                        let mut want = other_two;
                        want.sort_by_key(|x| ALL_FACES.iter().position(|y| y == x).unwrap());
                        if s == want {
                            return p;
                        }
                    }
                    unreachable!("every corner appears on each of its 3 faces")
                };

                let pos_n1 = pos_on(n1, [face, n2]);
                let pos_n2 = pos_on(n2, [face, n1]);

                seen_sets.push(set);
                discovered.push([(face, pos), (n1, pos_n1), (n2, pos_n2)]);
            }
        }

        assert_eq!(discovered.len(), 8, "a cube has exactly 8 corners");

        // Assign canonical names: F-containing corners first (FLU, FRU, FRD,
        // FLD order matches ALL_CORNERS), then B-containing, both ordered by
        // which of U/D and L/R they contain, matching crate::color::CornerName.
        let names = [
            CornerName::FLU,
            CornerName::FRU,
            CornerName::FRD,
            CornerName::FLD,
            CornerName::BLU,
            CornerName::BRU,
            CornerName::BRD,
            CornerName::BLD,
        ];
        let wants: [[FaceName; 3]; 8] = [
            [FaceName::F, FaceName::L, FaceName::U],
            [FaceName::F, FaceName::R, FaceName::U],
            [FaceName::F, FaceName::R, FaceName::D],
            [FaceName::F, FaceName::L, FaceName::D],
            [FaceName::B, FaceName::L, FaceName::U],
            [FaceName::B, FaceName::R, FaceName::U],
            [FaceName::B, FaceName::R, FaceName::D],
            [FaceName::B, FaceName::L, FaceName::D],
        ];

        let mut triples = HashMap::new();
        let mut lookup = HashMap::new();
        for (want, name) in wants.iter().zip(names) {
            let mut want_sorted = *want;
            want_sorted.sort_by_key(|f| ALL_FACES.iter().position(|y| y == f).unwrap());
            let triple = discovered
                .iter()
                .find(|t| {
                    let mut s = [t[0].0, t[1].0, t[2].0];
                    s.sort_by_key(|f| ALL_FACES.iter().position(|y| y == f).unwrap());
                    s == want_sorted
                })
                .expect("every named corner was discovered");
            triples.insert(name, *triple);
            for (f, p) in *triple {
                lookup.insert((f, p), name);
            }
        }

        CornerTable { triples, lookup }
    }
}

/// The 3 (face, corner-position) triples naming the physical corner `c`.
pub fn corner_triples(c: CornerName) -> [(FaceName, CornerPosition); 3] {
    CORNER_TABLE.triples[&c]
}

/// The corner occupying position `pos` on `face`.
pub fn corner_at(face: FaceName, pos: CornerPosition) -> CornerName {
    CORNER_TABLE.lookup[&(face, pos)]
}

/// The two bounding corners of edge position `pos` on `face`, ordered
/// `(low-coordinate corner, high-coordinate corner)` along that edge.
fn edge_endpoints(face: FaceName, pos: EdgePosition) -> (CornerName, CornerName) {
    use CornerPosition::*;
    use EdgePosition::*;
    let (lo, hi) = match pos {
        Top => (TopLeft, TopRight),
        Bottom => (BottomLeft, BottomRight),
        Left => (BottomLeft, TopLeft),
        Right => (BottomRight, TopRight),
    };
    (corner_at(face, lo), corner_at(face, hi))
}

/// All 12 physical edges, derived once from [`face_positions`]: each edge
/// is a (face, position) pair paired with its mirror (neighbor, position)
/// pair, assigned a canonical [`EdgeName`].
#[dynamic]
static EDGE_TABLE: EdgeTable = EdgeTable::build();

struct EdgeTable {
    /// name -> the two (face, position) pairs naming the same physical edge
    sides: HashMap<EdgeName, [(FaceName, EdgePosition); 2]>,
    lookup: HashMap<(FaceName, FaceName), EdgeName>,
}

impl EdgeTable {
    fn build() -> Self {
        // Canonical naming mirrors crate::color::EdgeName, keyed by the
        // unordered face pair it connects.
        use FaceName::*;
        let named_pairs: [(EdgeName, FaceName, FaceName); 12] = [
            (EdgeName::FL, F, L),
            (EdgeName::FU, F, U),
            (EdgeName::FR, F, R),
            (EdgeName::FD, F, D),
            (EdgeName::BL, B, L),
            (EdgeName::BU, B, U),
            (EdgeName::BR, B, R),
            (EdgeName::BD, B, D),
            (EdgeName::UR, U, R),
            (EdgeName::RD, R, D),
            (EdgeName::DL, D, L),
            (EdgeName::LU, L, U),
        ];

        let mut sides = HashMap::new();
        let mut lookup = HashMap::new();
        for (name, a, b) in named_pairs {
            assert!(is_adjacent(a, b), "{a:?}-{b:?} must be adjacent");
            let pa = position_of(a, b).unwrap();
            let pb = position_of(b, a).unwrap();
            sides.insert(name, [(a, pa), (b, pb)]);
            lookup.insert((a, b), name);
            lookup.insert((b, a), name);
        }
        EdgeTable { sides, lookup }
    }
}

pub fn edge_name(a: FaceName, b: FaceName) -> Result<EdgeName, Error> {
    EDGE_TABLE
        .lookup
        .get(&(a, b))
        .copied()
        .ok_or_else(|| Error::same_face(a))
}

pub fn edge_faces(e: EdgeName) -> [(FaceName, EdgePosition); 2] {
    EDGE_TABLE.sides[&e]
}

/// True iff traversing the edge from its low-coordinate corner to its
/// high-coordinate corner yields the same slice-index ordering on both
/// bordering faces Derived by comparing which corner is the
/// "low" endpoint on each side.
pub fn same_direction(e: EdgeName) -> bool {
    let [(fa, pa), (fb, pb)] = edge_faces(e);
    let (lo_a, _) = edge_endpoints(fa, pa);
    let (lo_b, _) = edge_endpoints(fb, pb);
    lo_a == lo_b
}

/// The low-coordinate corner of edge position `pos` on `face` — the corner
/// at which `along == 0` in [`depth_along`]/[`point_from_depth_along`].
pub fn edge_low_corner(face: FaceName, pos: EdgePosition) -> CornerName {
    edge_endpoints(face, pos).0
}

/// Decompose a face coordinate into `(depth, along)` relative to edge
/// position `pos`: `depth` is the 0-based distance from that edge into the
/// face, `along` is the 0-based coordinate running from the edge's
/// low-coordinate corner to its high-coordinate corner.
pub fn depth_along(pos: EdgePosition, (r, c): Point, n: usize) -> (usize, usize) {
    match pos {
        EdgePosition::Top => (n - 1 - r, c),
        EdgePosition::Bottom => (r, c),
        EdgePosition::Left => (c, r),
        EdgePosition::Right => (n - 1 - c, r),
    }
}

pub fn point_from_depth_along(pos: EdgePosition, depth: usize, along: usize, n: usize) -> Point {
    match pos {
        EdgePosition::Top => (n - 1 - depth, along),
        EdgePosition::Bottom => (depth, along),
        EdgePosition::Left => (along, depth),
        EdgePosition::Right => (along, n - 1 - depth),
    }
}

/// Where a point at `p` on `from` lands on `to` after one
/// [`crate::model::cube::Cube::rotate_slice`]-style ring step around `pole`
/// (both `from` and `to` must be adjacent to `pole` and to each other, one
/// cycle-step apart around it — exactly the case a commutator's ring move
/// needs). Mirrors the pivot/low-corner alignment `ring_rotate_once` uses
/// internally, as a pure function the commutator module can call without
/// touching a live cube. Self-inverse in `from`/`to`: `ring_step(pole, b, a,
/// ring_step(pole, a, b, p, n)?, n) == Ok(p)`.
pub fn ring_step(pole: FaceName, from: FaceName, to: FaceName, p: Point, n: usize) -> Result<Point, Error> {
    let pos_from = position_of(from, pole)?;
    let pos_to = position_of(to, pole)?;
    let pos_from_on_pole = position_of(pole, from)?;
    let pos_to_on_pole = position_of(pole, to)?;
    let pivot = if next_position(pos_from_on_pole) == pos_to_on_pole {
        pivot_corner(pole, pos_from_on_pole)
    } else if prev_position(pos_from_on_pole) == pos_to_on_pole {
        pivot_corner(pole, pos_to_on_pole)
    } else {
        return Err(Error::geometry(
            GeometryErrorCode::UnsupportedFacePair,
            format!("{from:?} and {to:?} are not one ring step apart around {pole:?}"),
        ));
    };

    let (depth, along_from) = depth_along(pos_from, p, n);
    let lo_from = edge_low_corner(from, pos_from);
    let along_pole = if lo_from == pivot { along_from } else { n - 1 - along_from };
    let lo_to = edge_low_corner(to, pos_to);
    let along_to = if lo_to == pivot { along_pole } else { n - 1 - along_pole };
    Ok(point_from_depth_along(pos_to, depth, along_to, n))
}

/// The turn count (`+1` or `-1`) that carries content from `from` toward
/// `to` in one [`ring_step`] / `Cube::rotate_slice` application around
/// `pole`.
pub fn ring_step_sign(pole: FaceName, from: FaceName, to: FaceName) -> Result<i32, Error> {
    let pos_from = position_of(pole, from)?;
    if neighbor_at(pole, next_position(pos_from)) == to {
        Ok(1)
    } else if neighbor_at(pole, prev_position(pos_from)) == to {
        Ok(-1)
    } else {
        Err(Error::geometry(
            GeometryErrorCode::UnsupportedFacePair,
            format!("{from:?} and {to:?} are not one ring step apart around {pole:?}"),
        ))
    }
}

/// Result of [`translate`]: where a marker on `from` lands on `to`, plus
/// diagnostic fields describing how the coordinate got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceTranslation {
    pub dest: Point,
    pub shares_edge: bool,
    pub axis_swapped: bool,
    pub verifying_rotation: Option<(Axis, i32)>,
}

/// Face-to-face coordinate translation `n` is the cube's side
/// length. Only defined for adjacent faces — opposite-face translation has
/// no single well-defined hinge and is a [`GeometryErrorCode::UnsupportedFacePair`].
pub fn translate(from: FaceName, to: FaceName, p: Point, n: usize) -> Result<FaceTranslation, Error> {
    if from == to {
        return Err(Error::same_face(from));
    }
    if is_opposite(from, to) {
        return Err(Error::geometry(
            GeometryErrorCode::UnsupportedFacePair,
            format!("{from:?} and {to:?} are opposite faces; no single hinge"),
        ));
    }

    let pos_to = position_of(from, to)?;
    let pos_from = position_of(to, from)?;
    let edge = edge_name(from, to)?;

    let (depth, along_from) = depth_along(pos_to, p, n);
    let aligned = same_direction(edge);
    let along_to = if aligned { along_from } else { n - 1 - along_from };
    let dest = point_from_depth_along(pos_from, depth, along_to, n);

    let axis_swapped = matches!(pos_to, EdgePosition::Top | EdgePosition::Bottom)
        != matches!(pos_from, EdgePosition::Top | EdgePosition::Bottom);

    let verifying_rotation = whole_cube_rotation_bringing(to, from);

    Ok(FaceTranslation { dest, shares_edge: true, axis_swapped, verifying_rotation })
}

/// The whole-cube rotation (axis + quarter-turn count) that brings `to`
/// into the position `from` currently occupies, if one exists (it always
/// does for adjacent faces: the axis through the pair *not* containing
/// `from` or `to`).
fn whole_cube_rotation_bringing(to: FaceName, from: FaceName) -> Option<(Axis, i32)> {
    if to == from || is_opposite(to, from) {
        return None;
    }
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let pole = axis.pole();
        if pole == to || pole == from || opposite(pole) == to || opposite(pole) == from {
            continue;
        }
        // Rotating around `pole` by n=+1 cycles content Top->Right->Bottom->Left
        // on `pole`'s own neighbor ring; the face *occupying* `from`'s old role
        // after the turn is whichever neighbor sits one step earlier in that
        // ring from `from`, and we want that predecessor to be `to`.
        for n in 1..=3i32 {
            let mut cur = to;
            for _ in 0..n {
                let p = position_of(pole, cur).ok()?;
                cur = neighbor_at(pole, next_position(p));
            }
            if cur == from {
                return Some((axis, n));
            }
        }
    }
    None
}

/// Derives the 1-based slice index in `[1, n-2]` that slice `slice` (cutting
/// through `face`) occupies for a given `(row, col)` on `face`, per spec
/// §4.1's "slice index formula". `cuts_rows` says whether `slice` cuts rows
/// (producing a fixed column) or columns (fixed row) on this face;
/// `starts_at_face_origin` says whether slice index 0 aligns with this
/// face's row/col 0.
pub fn slice_index_formula(
    point: Point,
    n: usize,
    cuts_rows: bool,
    starts_at_face_origin: bool,
) -> usize {
    let (r, c) = point;
    let raw = if cuts_rows { c } else { r };
    let zero_based = if starts_at_face_origin { raw } else { n - 1 - raw };
    // zero_based in [0, n-1]; slice indices only exist for the n-2 inner
    // layers [1, n-2], i.e. zero_based in [1, n-2].
    zero_based
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::FaceName::*;

    #[test]
    fn opposite_is_involutive() {
        for f in ALL_FACES {
            assert_eq!(opposite(opposite(f)), f);
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        for f in ALL_FACES {
            for n in adjacent(f) {
                assert!(adjacent(n).contains(&f), "{f:?}-{n:?} not symmetric");
            }
        }
    }

    #[test]
    fn every_face_has_exactly_four_neighbors_and_one_opposite() {
        for f in ALL_FACES {
            let adj = adjacent(f);
            assert_eq!(adj.len(), 4);
            assert!(!adj.contains(&f));
            assert!(!adj.contains(&opposite(f)));
        }
    }

    #[test]
    fn position_of_round_trips_with_neighbor_at() {
        for f in ALL_FACES {
            for n in adjacent(f) {
                let pos = position_of(f, n).unwrap();
                assert_eq!(neighbor_at(f, pos), n);
            }
        }
    }

    #[test]
    fn all_eight_corners_are_distinct_and_well_formed() {
        use crate::color::ALL_CORNERS;
        for c in ALL_CORNERS {
            let triple = corner_triples(c);
            let mut faces: Vec<_> = triple.iter().map(|(f, _)| *f).collect();
            faces.sort_by_key(|f| ALL_FACES.iter().position(|y| y == f).unwrap());
            faces.dedup();
            assert_eq!(faces.len(), 3, "corner {c:?} must touch 3 distinct faces");
            for (f, p) in triple {
                assert_eq!(corner_at(f, p), c);
            }
        }
    }

    #[test]
    fn all_twelve_edges_are_distinct_and_well_formed() {
        use crate::color::ALL_EDGES;
        for e in ALL_EDGES {
            let [(fa, _), (fb, _)] = edge_faces(e);
            assert!(is_adjacent(fa, fb));
        }
    }

    #[test]
    fn edge_name_is_symmetric_in_its_two_faces() {
        for f in ALL_FACES {
            for n in adjacent(f) {
                assert_eq!(edge_name(f, n).unwrap(), edge_name(n, f).unwrap());
            }
        }
    }

    #[test]
    fn translate_is_its_own_inverse() {
        let n = 5;
        for f in ALL_FACES {
            for g in adjacent(f) {
                for r in 0..n {
                    for c in 0..n {
                        let t = translate(f, g, (r, c), n).unwrap();
                        let back = translate(g, f, t.dest, n).unwrap();
                        assert_eq!(back.dest, (r, c), "{f:?}->{g:?} at {:?}", (r, c));
                    }
                }
            }
        }
    }

    #[test]
    fn translate_rejects_same_and_opposite_faces() {
        assert!(translate(F, F, (0, 0), 3).is_err());
        assert!(translate(F, B, (0, 0), 3).is_err());
    }

    #[test]
    fn translate_fixed_points_share_depth_and_border_corner() {
        // The corner shared by F and U (the FLU/FRU boundary) must map to
        // itself under along-edge = boundary coordinates in both directions.
        let n = 4;
        let t = translate(F, U, (n - 1, 0), n).unwrap();
        // depth 0 on F's Top edge at along=0 (the low corner) must land at
        // depth 0, along 0 (possibly flipped) on U.
        let back = translate(U, F, t.dest, n).unwrap();
        assert_eq!(back.dest, (n - 1, 0));
    }
}
