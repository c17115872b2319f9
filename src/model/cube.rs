//! L1 — the cube aggregate: parts, rotation primitives, state hashing.
//!
//! Avoids cyclic references between Face, Edge and Corner by never storing
//! back-pointers: `Cube` owns every [`PartSlice`] directly in name-keyed
//! maps, and a "Face" is never a stored object with back-references — it's
//! the set of derived queries in this file, computed on demand through
//! [`crate::geometry`]. Corners/edges never hold pointers to each other, so
//! there's nothing to arena-index; Part *identity* (which named slot
//! something lives in) never moves, only the [`PartEdge`] content inside
//! each slot does, via [`Cube::get_facelet`]/[`Cube::set_facelet`].
//!
//! Face coordinates are 0-based `(row, col)` with row 0 the bottom row and
//! col 0 the left column.

use std::collections::HashMap;

use crate::cache::{Cache, CubeCache};
use crate::color::{
    Color, CornerName, CornerPosition, EdgeName, EdgePosition, FaceName, SliceName, ALL_CORNERS,
    ALL_EDGES, ALL_FACES,
};
use crate::cube_layout::CubeLayout;
use crate::error::{Error, GeometryErrorCode};
use crate::geometry;
use crate::model::part_edge::PartEdge;
use crate::model::slice::PartSlice;

/// Emitted after every mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeEvent {
    Modified,
}

/// An opaque, hashable snapshot of cube state.
/// Two tokens are equal iff every facelet's color and attribute set match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateToken(Vec<(Color, Vec<String>)>);

/// A reduced `3x3` color snapshot of one face, used to build/read shadow
/// cubes for the 3x3 solver.
/// Indexed `[row][col]`, row 0 bottom, col 0 left, same as full-size faces.
pub type Face3x3 = [[Color; 3]; 3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube3x3Snapshot {
    pub faces: HashMap<FaceName, Face3x3>,
}

pub struct Cube {
    n: usize,
    corners: HashMap<CornerName, PartSlice>,
    edges: HashMap<EdgeName, Vec<PartSlice>>,
    centers: HashMap<FaceName, Vec<PartSlice>>,
    original_layout: CubeLayout,
    listeners: Vec<Box<dyn FnMut(CubeEvent)>>,
    cache: CubeCache<(String, Vec<i64>), i64>,
}

impl Cube {
    pub fn new(n: usize, layout: CubeLayout, enable_cache: bool) -> Result<Self, Error> {
        if n < 3 {
            return Err(Error::internal(format!("cube size must be >= 3, got {n}")));
        }
        let (corners, edges, centers) = Self::solved_parts(n, &layout);
        Ok(Cube {
            n,
            corners,
            edges,
            centers,
            original_layout: layout,
            listeners: Vec::new(),
            cache: CubeCache::new(enable_cache),
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn layout(&self) -> &CubeLayout {
        &self.original_layout
    }

    fn solved_parts(
        n: usize,
        layout: &CubeLayout,
    ) -> (HashMap<CornerName, PartSlice>, HashMap<EdgeName, Vec<PartSlice>>, HashMap<FaceName, Vec<PartSlice>>)
    {
        let mut corners = HashMap::new();
        for name in ALL_CORNERS {
            let triple = geometry::corner_triples(name);
            let edges = triple.map(|(f, _)| (f, PartEdge::new(layout.color_of(f))));
            corners.insert(name, PartSlice::Corner { edges });
        }

        let mut edges = HashMap::new();
        for name in ALL_EDGES {
            let [(fa, _), (fb, _)] = geometry::edge_faces(name);
            let wings = (0..n - 2)
                .map(|i| PartSlice::EdgeWing {
                    edges: [(fa, PartEdge::new(layout.color_of(fa))), (fb, PartEdge::new(layout.color_of(fb)))],
                    index: i,
                })
                .collect();
            edges.insert(name, wings);
        }

        let mut centers = HashMap::new();
        for face in ALL_FACES {
            let m = n - 2;
            let mut slices = Vec::with_capacity(m * m);
            for row in 1..=m {
                for col in 1..=m {
                    slices.push(PartSlice::Center { edge: PartEdge::new(layout.color_of(face)), row, col });
                }
            }
            centers.insert(face, slices);
        }

        (corners, edges, centers)
    }

    // ---- coordinate-indexed access --------------------------------------

    fn center_local_index(n: usize, row: usize, col: usize) -> usize {
        (row - 1) * (n - 2) + (col - 1)
    }

    /// Converts a face-local, 0-based wing position (`along - 1`, in
    /// `[0, n-3]`) into the canonical index used to key [`Cube::edges`],
    /// which is always measured from `edge_faces(edge)[0]`'s own
    /// low-to-high axis.
    fn wing_index(&self, edge: EdgeName, face: FaceName, local: usize) -> usize {
        let [(fa, _), (_fb, _)] = geometry::edge_faces(edge);
        if face == fa || geometry::same_direction(edge) {
            local
        } else {
            (self.n - 2) - 1 - local
        }
    }

    fn corner_position_of(n: usize, r: usize, c: usize) -> CornerPosition {
        match (r == n - 1, c == n - 1) {
            (false, false) => CornerPosition::BottomLeft,
            (false, true) => CornerPosition::BottomRight,
            (true, false) => CornerPosition::TopLeft,
            (true, true) => CornerPosition::TopRight,
        }
    }

    fn get_facelet(&self, face: FaceName, r: usize, c: usize) -> PartEdge {
        let n = self.n;
        let is_row_edge = r == 0 || r == n - 1;
        let is_col_edge = c == 0 || c == n - 1;
        if is_row_edge && is_col_edge {
            let cp = Self::corner_position_of(n, r, c);
            let name = geometry::corner_at(face, cp);
            self.corners[&name].facelet(face).unwrap().clone()
        } else if is_row_edge || is_col_edge {
            let pos = if r == n - 1 {
                EdgePosition::Top
            } else if r == 0 {
                EdgePosition::Bottom
            } else if c == 0 {
                EdgePosition::Left
            } else {
                EdgePosition::Right
            };
            let neighbor = geometry::neighbor_at(face, pos);
            let edge = geometry::edge_name(face, neighbor).unwrap();
            let (_, along) = geometry::depth_along(pos, (r, c), n);
            let idx = self.wing_index(edge, face, along - 1);
            self.edges[&edge][idx].facelet(face).unwrap().clone()
        } else {
            let idx = Self::center_local_index(n, r, c);
            self.centers[&face][idx].facelet(face).unwrap().clone()
        }
    }

    fn set_facelet(&mut self, face: FaceName, r: usize, c: usize, value: PartEdge) {
        let n = self.n;
        let is_row_edge = r == 0 || r == n - 1;
        let is_col_edge = c == 0 || c == n - 1;
        if is_row_edge && is_col_edge {
            let cp = Self::corner_position_of(n, r, c);
            let name = geometry::corner_at(face, cp);
            *self.corners.get_mut(&name).unwrap().facelet_mut(face).unwrap() = value;
        } else if is_row_edge || is_col_edge {
            let pos = if r == n - 1 {
                EdgePosition::Top
            } else if r == 0 {
                EdgePosition::Bottom
            } else if c == 0 {
                EdgePosition::Left
            } else {
                EdgePosition::Right
            };
            let neighbor = geometry::neighbor_at(face, pos);
            let edge = geometry::edge_name(face, neighbor).unwrap();
            let (_, along) = geometry::depth_along(pos, (r, c), n);
            let idx = self.wing_index(edge, face, along - 1);
            *self.edges.get_mut(&edge).unwrap()[idx].facelet_mut(face).unwrap() = value;
        } else {
            let idx = Self::center_local_index(n, r, c);
            *self.centers.get_mut(&face).unwrap()[idx].facelet_mut(face).unwrap() = value;
        }
    }

    /// The color currently showing at `(row, col)` on `face`.
    pub fn facelet(&self, face: FaceName, row: usize, col: usize) -> Color {
        self.get_facelet(face, row, col).color
    }

    // ---- rotation primitives ---------------------------------

    fn rotate_face_grid_once(&mut self, face: FaceName) {
        let n = self.n;
        let mut buf = vec![None; n * n];
        for r in 0..n {
            for c in 0..n {
                // Clockwise quarter turn (row0=bottom, col0=left): new(r,c) = old(c, n-1-r).
                buf[r * n + c] = Some(self.get_facelet(face, c, n - 1 - r));
            }
        }
        for r in 0..n {
            for c in 0..n {
                self.set_facelet(face, r, c, buf[r * n + c].take().unwrap());
            }
        }
    }

    /// Cycles the ring of facelets at depth `depth` (0 = the border
    /// touching `face`) around `face`'s four neighbors one quarter turn
    /// clockwise: content at Top moves to Right, Right to Bottom, etc.
    fn ring_rotate_once(&mut self, face: FaceName, depth: usize) {
        let n = self.n;
        use EdgePosition::*;
        let positions = [Top, Right, Bottom, Left];

        let mut bufs: Vec<Vec<PartEdge>> = Vec::with_capacity(4);
        for &pos in &positions {
            let neighbor = geometry::neighbor_at(face, pos);
            let pos_on_neighbor = geometry::position_of(neighbor, face).unwrap();
            let pivot = geometry::pivot_corner(face, pos);
            let lo = geometry::edge_low_corner(neighbor, pos_on_neighbor);
            let mut buf = Vec::with_capacity(n);
            for along in 0..n {
                let along_on_neighbor = if lo == pivot { along } else { n - 1 - along };
                let (r, c) = geometry::point_from_depth_along(pos_on_neighbor, depth, along_on_neighbor, n);
                buf.push(self.get_facelet(neighbor, r, c));
            }
            bufs.push(buf);
        }

        for (i, &pos) in positions.iter().enumerate() {
            let dest_pos = geometry::next_position(pos);
            let neighbor = geometry::neighbor_at(face, dest_pos);
            let pos_on_neighbor = geometry::position_of(neighbor, face).unwrap();
            // Same pivot used to read this strip: the corner between `pos`
            // and `dest_pos` is the physical hinge content swings around.
            let pivot = geometry::pivot_corner(face, pos);
            let lo = geometry::edge_low_corner(neighbor, pos_on_neighbor);
            for along in 0..n {
                let along_on_neighbor = if lo == pivot { along } else { n - 1 - along };
                let (r, c) = geometry::point_from_depth_along(pos_on_neighbor, depth, along_on_neighbor, n);
                self.set_facelet(neighbor, r, c, bufs[i][along].clone());
            }
        }
    }

    fn check_slice_depth(&self, d: usize) -> Result<(), Error> {
        if d > self.n - 2 {
            Err(Error::geometry(
                GeometryErrorCode::OutOfRange,
                format!("slice depth {d} out of range for n={} (max {})", self.n, self.n - 2),
            ))
        } else {
            Ok(())
        }
    }

    /// Rotates `face` by `n_turns` quarter turns (negative = inverse),
    /// dragging along the ring at each depth in `slices` (0 = the layer
    /// immediately touching `face`, up to `n-2`).
    pub fn rotate_face_and_slice(&mut self, face: FaceName, n_turns: i32, slices: &[usize]) -> Result<(), Error> {
        for &d in slices {
            self.check_slice_depth(d)?;
        }
        let steps = n_turns.rem_euclid(4) as usize;
        for _ in 0..steps {
            self.rotate_face_grid_once(face);
            for &d in slices {
                self.ring_rotate_once(face, d);
            }
        }
        self.emit_modified();
        Ok(())
    }

    fn slice_reference_face(slice: SliceName) -> FaceName {
        geometry::slice_reference_face(slice)
    }

    /// Rotates one or more inner slices of `slice_name` without touching
    /// the two faces it sits between.
    pub fn rotate_slice(&mut self, slice_name: SliceName, n_turns: i32, slices: &[usize]) -> Result<(), Error> {
        for &d in slices {
            if d == 0 {
                return Err(Error::geometry(
                    GeometryErrorCode::OutOfRange,
                    "slice moves never touch depth 0 (that's a face turn)".to_string(),
                ));
            }
            self.check_slice_depth(d)?;
        }
        let face = Self::slice_reference_face(slice_name);
        let steps = n_turns.rem_euclid(4) as usize;
        for _ in 0..steps {
            for &d in &slices {
                self.ring_rotate_once(face, *d);
            }
        }
        self.emit_modified();
        Ok(())
    }

    // ---- state operations ------------------------------------

    pub fn get_state(&self) -> StateToken {
        let mut out = Vec::new();
        for name in ALL_CORNERS {
            if let PartSlice::Corner { edges } = &self.corners[&name] {
                for (_, e) in edges {
                    out.push(Self::facelet_signature(e));
                }
            }
        }
        for name in ALL_EDGES {
            for slice in &self.edges[&name] {
                if let PartSlice::EdgeWing { edges, .. } = slice {
                    for (_, e) in edges {
                        out.push(Self::facelet_signature(e));
                    }
                }
            }
        }
        for face in ALL_FACES {
            for slice in &self.centers[&face] {
                if let PartSlice::Center { edge, .. } = slice {
                    out.push(Self::facelet_signature(edge));
                }
            }
        }
        StateToken(out)
    }

    fn facelet_signature(e: &PartEdge) -> (Color, Vec<String>) {
        let mut tags: Vec<String> = e.attr_keys().map(|k| format!("{k:?}:{:?}", e.get_attr(k))).collect();
        tags.sort();
        (e.color, tags)
    }

    pub fn compare_state(&self, other: &StateToken) -> bool {
        self.get_state() == *other
    }

    pub fn reset(&mut self) {
        let (corners, edges, centers) = Self::solved_parts(self.n, &self.original_layout);
        self.corners = corners;
        self.edges = edges;
        self.centers = centers;
        self.emit_modified();
    }

    pub fn solved(&self) -> bool {
        for name in ALL_CORNERS {
            if let PartSlice::Corner { edges } = &self.corners[&name] {
                if edges.iter().any(|(f, e)| e.color != self.original_layout.color_of(*f)) {
                    return false;
                }
            }
        }
        for name in ALL_EDGES {
            for slice in &self.edges[&name] {
                if let PartSlice::EdgeWing { edges, .. } = slice {
                    if edges.iter().any(|(f, e)| e.color != self.original_layout.color_of(*f)) {
                        return false;
                    }
                }
            }
        }
        for face in ALL_FACES {
            for slice in &self.centers[&face] {
                if let PartSlice::Center { edge, .. } = slice {
                    if edge.color != self.original_layout.color_of(face) {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn edge_position_to_3x3(pos: EdgePosition) -> (usize, usize) {
        match pos {
            EdgePosition::Bottom => (0, 1),
            EdgePosition::Left => (1, 0),
            EdgePosition::Right => (1, 2),
            EdgePosition::Top => (2, 1),
        }
    }

    fn corner_position_to_3x3(cp: CornerPosition) -> (usize, usize) {
        match cp {
            CornerPosition::BottomLeft => (0, 0),
            CornerPosition::BottomRight => (0, 2),
            CornerPosition::TopLeft => (2, 0),
            CornerPosition::TopRight => (2, 2),
        }
    }

    /// Reduces this cube to a 3x3 color snapshot: each face center becomes
    /// one cell (assumed solid), each edge becomes one cell per bordering
    /// face (assumed paired), corners map 1:1
    pub fn get_3x3_colors(&self) -> Cube3x3Snapshot {
        let mut faces = HashMap::new();
        for face in ALL_FACES {
            let mut grid = [[self.original_layout.color_of(face); 3]; 3];
            for cp in [CornerPosition::TopLeft, CornerPosition::TopRight, CornerPosition::BottomLeft, CornerPosition::BottomRight]
            {
                let name = geometry::corner_at(face, cp);
                let (r, c) = Self::corner_position_to_3x3(cp);
                grid[r][c] = self.corners[&name].facelet(face).unwrap().color;
            }
            for pos in [EdgePosition::Top, EdgePosition::Right, EdgePosition::Bottom, EdgePosition::Left] {
                let neighbor = geometry::neighbor_at(face, pos);
                let edge = geometry::edge_name(face, neighbor).unwrap();
                let (r, c) = Self::edge_position_to_3x3(pos);
                grid[r][c] = self.edges[&edge][0].facelet(face).unwrap().color;
            }
            if self.n > 2 {
                grid[1][1] = self.centers[&face][0].facelet(face).unwrap().color;
            }
            faces.insert(face, grid);
        }
        Cube3x3Snapshot { faces }
    }

    /// Overwrites this cube's state from a 3x3 snapshot, writing every
    /// wing of a paired edge and every slice of a solid center to the same
    /// color.
    pub fn set_3x3_colors(&mut self, snapshot: &Cube3x3Snapshot) {
        for face in ALL_FACES {
            let grid = snapshot.faces[&face];
            for cp in [CornerPosition::TopLeft, CornerPosition::TopRight, CornerPosition::BottomLeft, CornerPosition::BottomRight]
            {
                let name = geometry::corner_at(face, cp);
                let (r, c) = Self::corner_position_to_3x3(cp);
                self.corners.get_mut(&name).unwrap().facelet_mut(face).unwrap().color = grid[r][c];
            }
            for pos in [EdgePosition::Top, EdgePosition::Right, EdgePosition::Bottom, EdgePosition::Left] {
                let neighbor = geometry::neighbor_at(face, pos);
                let edge = geometry::edge_name(face, neighbor).unwrap();
                let (r, c) = Self::edge_position_to_3x3(pos);
                for wing in self.edges.get_mut(&edge).unwrap().iter_mut() {
                    wing.facelet_mut(face).unwrap().color = grid[r][c];
                }
            }
            if self.n > 2 {
                let color = grid[1][1];
                for slice in self.centers.get_mut(&face).unwrap().iter_mut() {
                    slice.facelet_mut(face).unwrap().color = color;
                }
            }
        }
        self.emit_modified();
    }

    // ---- events -----------------------------------------------------------

    pub fn on_modified(&mut self, f: impl FnMut(CubeEvent) + 'static) {
        self.listeners.push(Box::new(f));
    }

    fn emit_modified(&mut self) {
        self.cache.clear();
        let mut listeners = std::mem::take(&mut self.listeners);
        for l in listeners.iter_mut() {
            l(CubeEvent::Modified);
        }
        self.listeners = listeners;
    }

    // ---- cached geometric queries --------------------------------

    /// The 1-based slice index of `point` on `face`, memoized per
    /// `(face, cuts_rows, starts_at_face_origin, point)` signature.
    pub fn slice_index_of(
        &mut self,
        face: FaceName,
        point: (usize, usize),
        cuts_rows: bool,
        starts_at_face_origin: bool,
    ) -> usize {
        let key = (
            format!("slice_index:{face:?}:{cuts_rows}:{starts_at_face_origin}"),
            vec![point.0 as i64, point.1 as i64, self.n as i64],
        );
        if let Some(v) = Cache::get(&self.cache, &key) {
            return *v as usize;
        }
        let value = geometry::slice_index_formula(point, self.n, cuts_rows, starts_at_face_origin);
        Cache::put(&mut self.cache, key, value as i64);
        value
    }

    // ---- part access for trackers / commutators ----------------------------

    pub fn corner(&self, name: CornerName) -> &PartSlice {
        &self.corners[&name]
    }

    pub fn corner_mut(&mut self, name: CornerName) -> &mut PartSlice {
        self.corners.get_mut(&name).unwrap()
    }

    pub fn edge_wing(&self, name: EdgeName, index: usize) -> &PartSlice {
        &self.edges[&name][index]
    }

    pub fn edge_wing_mut(&mut self, name: EdgeName, index: usize) -> &mut PartSlice {
        &mut self.edges.get_mut(&name).unwrap()[index]
    }

    pub fn edge_wing_count(&self) -> usize {
        self.n - 2
    }

    pub fn center(&self, face: FaceName, row: usize, col: usize) -> &PartSlice {
        let idx = Self::center_local_index(self.n, row, col);
        &self.centers[&face][idx]
    }

    pub fn center_mut(&mut self, face: FaceName, row: usize, col: usize) -> &mut PartSlice {
        let idx = Self::center_local_index(self.n, row, col);
        &mut self.centers.get_mut(&face).unwrap()[idx]
    }

    pub fn corners_iter(&self) -> impl Iterator<Item = (CornerName, &PartSlice)> {
        self.corners.iter().map(|(k, v)| (*k, v))
    }

    pub fn edges_iter(&self) -> impl Iterator<Item = (EdgeName, &Vec<PartSlice>)> {
        self.edges.iter().map(|(k, v)| (*k, v))
    }

    pub fn centers_iter(&self) -> impl Iterator<Item = (FaceName, &Vec<PartSlice>)> {
        self.centers.iter().map(|(k, v)| (*k, v))
    }

    pub fn all_facelets_mut(&mut self) -> Vec<&mut PartEdge> {
        let mut out = Vec::new();
        for s in self.corners.values_mut() {
            out.extend(s.facelets_mut());
        }
        for v in self.edges.values_mut() {
            for s in v.iter_mut() {
                out.extend(s.facelets_mut());
            }
        }
        for v in self.centers.values_mut() {
            for s in v.iter_mut() {
                out.extend(s.facelets_mut());
            }
        }
        out
    }

    // ---- tracker support --------------------------------------

    /// Finds the corner piece carrying `key`, if any tracker has marked one.
    pub fn find_corner_by_attr(&self, key: crate::model::part_edge::AttrKey) -> Option<CornerName> {
        ALL_CORNERS
            .into_iter()
            .find(|name| self.corners[name].facelets().into_iter().any(|e| e.has_attr(key)))
    }

    /// Finds the edge wing carrying `key`, if any tracker has marked one.
    pub fn find_edge_wing_by_attr(
        &self,
        key: crate::model::part_edge::AttrKey,
    ) -> Option<(EdgeName, usize)> {
        for name in ALL_EDGES {
            for (idx, wing) in self.edges[&name].iter().enumerate() {
                if wing.facelets().into_iter().any(|e| e.has_attr(key)) {
                    return Some((name, idx));
                }
            }
        }
        None
    }

    /// Finds the center piece carrying `key`, if any tracker has marked one.
    pub fn find_center_by_attr(
        &self,
        key: crate::model::part_edge::AttrKey,
    ) -> Option<(FaceName, usize, usize)> {
        for face in ALL_FACES {
            for slice in &self.centers[&face] {
                if let PartSlice::Center { edge, row, col } = slice {
                    if edge.has_attr(key) {
                        return Some((face, *row, *col));
                    }
                }
            }
        }
        None
    }

    /// The majority color among `face`'s center pieces — the even-cube
    /// fallback a [`crate::trackers::FaceTracker`] uses when no single
    /// center piece pins down a face's identity
    pub fn majority_center_color(&self, face: FaceName) -> Color {
        let mut counts: HashMap<Color, usize> = HashMap::new();
        for slice in &self.centers[&face] {
            if let PartSlice::Center { edge, .. } = slice {
                *counts.entry(edge.color).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .max_by_key(|(_, n)| *n)
            .map(|(c, _)| c)
            .unwrap_or_else(|| self.original_layout.color_of(face))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube_layout::CubeLayout;

    fn cube(n: usize) -> Cube {
        Cube::new(n, CubeLayout::boy(), true).unwrap()
    }

    #[test]
    fn fresh_cube_is_solved() {
        for n in [3, 4, 5, 6] {
            assert!(cube(n).solved(), "n={n}");
        }
    }

    #[test]
    fn four_quarter_turns_is_identity() {
        for n in [3, 4, 5] {
            let mut c = cube(n);
            let before = c.get_state();
            c.rotate_face_and_slice(FaceName::R, 4, &[0]).unwrap();
            assert_eq!(c.get_state(), before, "n={n}");
        }
    }

    #[test]
    fn turn_then_inverse_is_identity() {
        for n in [3, 4, 5, 6] {
            for slices in [vec![0], vec![0, 1], (0..n - 2).collect::<Vec<_>>()] {
                let mut c = cube(n);
                let before = c.get_state();
                c.rotate_face_and_slice(FaceName::R, 1, &slices).unwrap();
                c.rotate_face_and_slice(FaceName::R, -1, &slices).unwrap();
                assert_eq!(c.get_state(), before, "n={n} slices={slices:?}");
            }
        }
    }

    #[test]
    fn single_turn_unsolves_a_solved_cube() {
        let mut c = cube(4);
        c.rotate_face_and_slice(FaceName::U, 1, &[0]).unwrap();
        assert!(!c.solved());
    }

    #[test]
    fn slice_move_does_not_touch_the_two_flanking_faces() {
        let mut c = cube(5);
        let before_l = (0..5).flat_map(|r| (0..5).map(move |cc| (r, cc))).map(|(r, cc)| c.facelet(FaceName::L, r, cc)).collect::<Vec<_>>();
        let before_r = (0..5).flat_map(|r| (0..5).map(move |cc| (r, cc))).map(|(r, cc)| c.facelet(FaceName::R, r, cc)).collect::<Vec<_>>();
        c.rotate_slice(SliceName::M, 1, &[1, 2, 3]).unwrap();
        let after_l = (0..5).flat_map(|r| (0..5).map(move |cc| (r, cc))).map(|(r, cc)| c.facelet(FaceName::L, r, cc)).collect::<Vec<_>>();
        let after_r = (0..5).flat_map(|r| (0..5).map(move |cc| (r, cc))).map(|(r, cc)| c.facelet(FaceName::R, r, cc)).collect::<Vec<_>>();
        assert_eq!(before_l, after_l);
        assert_eq!(before_r, after_r);
    }

    #[test]
    fn rotate_slice_rejects_depth_zero() {
        let mut c = cube(5);
        assert!(c.rotate_slice(SliceName::M, 1, &[0]).is_err());
    }

    #[test]
    fn sexy_move_six_times_is_identity_on_3x3() {
        let mut c = cube(3);
        let before = c.get_state();
        for _ in 0..6 {
            c.rotate_face_and_slice(FaceName::R, 1, &[0]).unwrap();
            c.rotate_face_and_slice(FaceName::U, 1, &[0]).unwrap();
            c.rotate_face_and_slice(FaceName::R, -1, &[0]).unwrap();
            c.rotate_face_and_slice(FaceName::U, -1, &[0]).unwrap();
        }
        assert_eq!(c.get_state(), before);
    }

    #[test]
    fn reset_restores_solved_state_after_scramble() {
        let mut c = cube(4);
        let solved = c.get_state();
        c.rotate_face_and_slice(FaceName::F, 1, &[0, 1]).unwrap();
        assert_ne!(c.get_state(), solved);
        c.reset();
        assert_eq!(c.get_state(), solved);
        assert!(c.solved());
    }

    #[test]
    fn get_and_set_3x3_round_trip_on_solved_cube() {
        let mut c = cube(5);
        let snap = c.get_3x3_colors();
        c.rotate_face_and_slice(FaceName::R, 1, &(0..3).collect::<Vec<_>>()).unwrap();
        c.set_3x3_colors(&snap);
        // After overwriting every facelet from a solved 3x3 snapshot, the
        // virtual 3x3 read back out must itself be solved.
        let snap_after = c.get_3x3_colors();
        for face in ALL_FACES {
            for r in 0..3 {
                for cc in 0..3 {
                    assert_eq!(snap_after.faces[&face][r][cc], snap.faces[&face][r][cc]);
                }
            }
        }
    }

    #[test]
    fn modified_listener_fires_on_rotation() {
        let mut c = cube(3);
        let count = std::rc::Rc::new(std::cell::RefCell::new(0));
        let count2 = count.clone();
        c.on_modified(move |_| *count2.borrow_mut() += 1);
        c.rotate_face_and_slice(FaceName::F, 1, &[0]).unwrap();
        assert_eq!(*count.borrow(), 1);
        c.reset();
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn cache_memoizes_slice_index_and_clears_on_mutation() {
        let mut c = cube(5);
        let a = c.slice_index_of(FaceName::F, (2, 2), true, true);
        let b = c.slice_index_of(FaceName::F, (2, 2), true, true);
        assert_eq!(a, b);
        c.rotate_face_and_slice(FaceName::F, 1, &[0]).unwrap();
        // Still consistent after cache invalidation by mutation.
        let c2 = c.slice_index_of(FaceName::F, (2, 2), true, true);
        assert_eq!(c2, a);
    }
}
