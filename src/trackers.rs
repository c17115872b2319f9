//! L4: locates specific pieces and faces across rotations
//!
//! Two families:
//! - Marked trackers stamp an [`AttrKey`] onto a piece once and find it
//!   again by that key — cheap, but only as durable as the piece itself.
//! - Color-based trackers recompute a piece's current slot from its color
//!   set on every query — no state to keep in sync, a little more work per
//!   call.

use std::collections::{HashMap, HashSet};

use crate::color::{Color, CornerName, EdgeName, FaceName, ALL_CORNERS, ALL_EDGES, ALL_FACES};
use crate::cube_layout::CubeLayout;
use crate::error::Error;
use crate::geometry;
use crate::model::cube::Cube;
use crate::model::part_edge::{AttrKey, AttrValue};

pub trait CornerTracker {
    fn locate(&self, cube: &Cube) -> CornerName;
}

pub trait EdgeTracker {
    fn locate(&self, cube: &Cube) -> EdgeName;
}

pub trait FaceTracker {
    fn locate(&self, cube: &Cube) -> FaceName;
}

/// Stamps one facelet of a corner piece and finds it again by that key. A
/// corner's three facelets always travel together, so marking any one of
/// them is enough.
pub struct MarkedCornerTracker {
    key: AttrKey,
}

impl MarkedCornerTracker {
    pub fn new(cube: &mut Cube, name: CornerName) -> Self {
        let key = AttrKey::fresh();
        let facelet = cube.corner_mut(name).facelets_mut().into_iter().next().expect("a corner has 3 facelets");
        facelet.set_attr(key, AttrValue::Present);
        MarkedCornerTracker { key }
    }
}

impl CornerTracker for MarkedCornerTracker {
    fn locate(&self, cube: &Cube) -> CornerName {
        cube.find_corner_by_attr(self.key).expect("marked corner is never removed from the cube")
    }
}

/// Stamps one facelet of an edge wing and finds it again by that key.
pub struct MarkedEdgeTracker {
    key: AttrKey,
}

impl MarkedEdgeTracker {
    pub fn new(cube: &mut Cube, name: EdgeName, index: usize) -> Self {
        let key = AttrKey::fresh();
        let facelet = cube
            .edge_wing_mut(name, index)
            .facelets_mut()
            .into_iter()
            .next()
            .expect("an edge wing has 2 facelets");
        facelet.set_attr(key, AttrValue::Present);
        MarkedEdgeTracker { key }
    }
}

impl EdgeTracker for MarkedEdgeTracker {
    fn locate(&self, cube: &Cube) -> EdgeName {
        cube.find_edge_wing_by_attr(self.key).map(|(name, _)| name).expect("marked edge wing is never removed")
    }
}

/// Tracks several parts at once under one handle — useful for a block of
/// centers a reducer stage wants to keep an eye on together.
pub struct MultiPartTracker {
    keys: Vec<AttrKey>,
}

impl MultiPartTracker {
    /// Marks every `(face, row, col)` center cell given, minting one fresh
    /// key per cell.
    pub fn mark_centers(cube: &mut Cube, cells: &[(FaceName, usize, usize)]) -> Self {
        let mut keys = Vec::with_capacity(cells.len());
        for &(face, row, col) in cells {
            let key = AttrKey::fresh();
            cube.center_mut(face, row, col).facelet_mut(face).expect("center has one facelet").set_attr(key, AttrValue::Present);
            keys.push(key);
        }
        MultiPartTracker { keys }
    }

    /// Current `(face, row, col)` of each marked center, in the order given
    /// to [`MultiPartTracker::mark_centers`].
    pub fn locate_centers(&self, cube: &Cube) -> Vec<(FaceName, usize, usize)> {
        self.keys.iter().map(|k| cube.find_center_by_attr(*k).expect("marked center is never removed")).collect()
    }
}

/// Locates a corner by the unordered set of colors it was assigned at
/// construction, regardless of which slot currently holds it. Content never
/// changes color except by moving, so this never goes stale.
pub struct ColorBasedCornerTracker {
    colors: HashSet<Color>,
}

impl ColorBasedCornerTracker {
    pub fn new(colors: [Color; 3]) -> Self {
        ColorBasedCornerTracker { colors: colors.into_iter().collect() }
    }

    pub fn for_home(layout: &CubeLayout, name: CornerName) -> Self {
        let colors = geometry::corner_triples(name).map(|(face, _)| layout.color_of(face));
        Self::new(colors)
    }
}

impl CornerTracker for ColorBasedCornerTracker {
    fn locate(&self, cube: &Cube) -> CornerName {
        ALL_CORNERS
            .into_iter()
            .find(|name| {
                let have: HashSet<Color> = cube.corner(*name).facelets().into_iter().map(|e| e.color).collect();
                have == self.colors
            })
            .expect("every 3-color combination that exists on the cube occupies exactly one corner slot")
    }
}

/// Locates an edge by the unordered pair of colors it was assigned at
/// construction, regardless of which slot currently holds it.
pub struct ColorBasedEdgeTracker {
    colors: HashSet<Color>,
}

impl ColorBasedEdgeTracker {
    pub fn new(colors: [Color; 2]) -> Self {
        ColorBasedEdgeTracker { colors: colors.into_iter().collect() }
    }

    pub fn for_home(layout: &CubeLayout, name: EdgeName) -> Self {
        let colors = geometry::edge_faces(name).map(|(face, _)| layout.color_of(face));
        Self::new(colors)
    }
}

impl EdgeTracker for ColorBasedEdgeTracker {
    fn locate(&self, cube: &Cube) -> EdgeName {
        ALL_EDGES
            .into_iter()
            .find(|name| {
                let idx = 0;
                let have: HashSet<Color> =
                    cube.edge_wing(*name, idx).facelets().into_iter().map(|e| e.color).collect();
                have == self.colors
            })
            .expect("every 2-color combination that exists on the cube occupies exactly one edge slot")
    }
}

/// For odd cubes, a face's single fixed-point center facelet (the grid's
/// true middle cell, which never moves within its own face under a face
/// turn) identifies that face's original color at a glance.
pub struct SimpleFaceTracker {
    origin: FaceName,
}

impl SimpleFaceTracker {
    pub fn new(origin: FaceName) -> Self {
        SimpleFaceTracker { origin }
    }
}

impl FaceTracker for SimpleFaceTracker {
    fn locate(&self, cube: &Cube) -> FaceName {
        let target = cube.layout().color_of(self.origin);
        let mid = (cube.size() - 1) / 2;
        ALL_FACES
            .into_iter()
            .find(|f| cube.center(*f, mid, mid).facelet(*f).expect("center has one facelet").color == target)
            .expect("every face has a fixed-point center cell on an odd cube")
    }
}

/// For even cubes (no fixed-point center cell), marks one arbitrary center
/// facelet of `origin`'s face at construction and finds whichever face now
/// holds it.
pub struct MarkedFaceTracker {
    key: AttrKey,
}

impl MarkedFaceTracker {
    pub fn new(cube: &mut Cube, origin: FaceName) -> Self {
        let key = AttrKey::fresh();
        cube.center_mut(origin, 1, 1).facelet_mut(origin).expect("center has one facelet").set_attr(key, AttrValue::Present);
        MarkedFaceTracker { key }
    }
}

impl FaceTracker for MarkedFaceTracker {
    fn locate(&self, cube: &Cube) -> FaceName {
        cube.find_center_by_attr(self.key).map(|(f, _, _)| f).expect("marked face center is never removed")
    }
}

/// Holds the current color identity of all six faces at once, read from
/// each face's center block by majority vote Robust against a
/// handful of stray center pieces still out of place — exact once centers
/// are fully solved.
pub struct FacesTrackerHolder {
    colors: HashMap<FaceName, Color>,
}

impl FacesTrackerHolder {
    pub fn from_cube(cube: &Cube) -> Self {
        let colors = ALL_FACES.into_iter().map(|f| (f, cube.majority_center_color(f))).collect();
        FacesTrackerHolder { colors }
    }

    pub fn get_face_colors(&self) -> &HashMap<FaceName, Color> {
        &self.colors
    }

    pub fn face_for_color(&self, color: Color) -> Option<FaceName> {
        self.colors.iter().find(|(_, c)| **c == color).map(|(f, _)| *f)
    }

    /// Confirms the tracked identity still forms a BOY-equivalent layout —
    /// the check a reducer runs once centers are believed solved, before
    /// handing off to the 3x3-stage solver
    pub fn assert_is_boy(&self) -> Result<(), Error> {
        let mut assignment = [(FaceName::U, Color::White); 6];
        for (slot, face) in assignment.iter_mut().zip(ALL_FACES) {
            *slot = (face, self.colors[&face]);
        }
        let layout = CubeLayout::new(assignment)?;
        if layout.is_boy_equivalent() {
            Ok(())
        } else {
            Err(Error::internal("tracked face colors are not a BOY-equivalent layout".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use crate::alg::Alg;

    #[test]
    fn marked_corner_tracker_follows_piece_through_moves() {
        let mut cube = Cube::new(4, CubeLayout::boy(), false).unwrap();
        let tracker = MarkedCornerTracker::new(&mut cube, CornerName::FRU);
        assert_eq!(tracker.locate(&cube), CornerName::FRU);
        let mut op = crate::operator::Operator::new(cube);
        op.play(&Alg::from_str("R U R' U'").unwrap(), false).unwrap();
        let cube = op.cube();
        assert_ne!(tracker.locate(cube), CornerName::FRU);
    }

    #[test]
    fn color_based_corner_tracker_agrees_with_marked_tracker_after_scramble() {
        let mut cube = Cube::new(4, CubeLayout::boy(), false).unwrap();
        let marked = MarkedCornerTracker::new(&mut cube, CornerName::FRU);
        let by_color = ColorBasedCornerTracker::for_home(cube.layout(), CornerName::FRU);
        let mut op = crate::operator::Operator::new(cube);
        op.play(&Alg::from_str("R U R' U' F2").unwrap(), false).unwrap();
        let cube = op.cube();
        assert_eq!(marked.locate(cube), by_color.locate(cube));
    }

    #[test]
    fn simple_face_tracker_follows_whole_cube_rotation_on_odd_cube() {
        let cube = Cube::new(5, CubeLayout::boy(), false).unwrap();
        let tracker = SimpleFaceTracker::new(FaceName::U);
        assert_eq!(tracker.locate(&cube), FaceName::U);
        let mut op = crate::operator::Operator::new(cube);
        op.play(&Alg::WholeCubeAlg(crate::geometry::Axis::X, 1), false).unwrap();
        assert_ne!(tracker.locate(op.cube()), FaceName::U);
        for _ in 0..3 {
            op.play(&Alg::WholeCubeAlg(crate::geometry::Axis::X, 1), false).unwrap();
        }
        assert_eq!(tracker.locate(op.cube()), FaceName::U);
    }

    #[test]
    fn faces_tracker_holder_reads_solved_cube_as_boy() {
        let cube = Cube::new(4, CubeLayout::boy(), false).unwrap();
        let holder = FacesTrackerHolder::from_cube(&cube);
        holder.assert_is_boy().unwrap();
        assert_eq!(holder.face_for_color(Color::White), Some(FaceName::D));
    }
}
