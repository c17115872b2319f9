//! Goal predicates over a [`Cube3x3Snapshot`], staged from easiest to
//! hardest. Every predicate only reads
//! `snapshot`, so the same functions drive both the shadow search in
//! [`super::search`] and a solver's own progress checks on the real cube.

use crate::color::{ALL_FACES, CornerPosition, EdgePosition, FaceName};
use crate::cube_layout::CubeLayout;
use crate::model::cube::Cube3x3Snapshot;

fn edge_cell(pos: EdgePosition) -> (usize, usize) {
    match pos {
        EdgePosition::Bottom => (0, 1),
        EdgePosition::Left => (1, 0),
        EdgePosition::Right => (1, 2),
        EdgePosition::Top => (2, 1),
    }
}

fn corner_cell(pos: CornerPosition) -> (usize, usize) {
    match pos {
        CornerPosition::BottomLeft => (0, 0),
        CornerPosition::BottomRight => (0, 2),
        CornerPosition::TopLeft => (2, 0),
        CornerPosition::TopRight => (2, 2),
    }
}

/// The four bottom-face edges show the bottom color and match their side
/// face's center (a "cross").
pub fn cross_done(snapshot: &Cube3x3Snapshot, layout: &CubeLayout, bottom: FaceName) -> bool {
    let bottom_home = layout.color_of(bottom);
    let g = snapshot.faces[&bottom];
    for pos in [EdgePosition::Top, EdgePosition::Right, EdgePosition::Bottom, EdgePosition::Left] {
        let (r, c) = edge_cell(pos);
        if g[r][c] != bottom_home {
            return false;
        }
    }
    for face in ALL_FACES {
        if face == bottom || crate::geometry::is_opposite(face, bottom) {
            continue;
        }
        let home = layout.color_of(face);
        let g = snapshot.faces[&face];
        let (r, c) = edge_cell(EdgePosition::Bottom);
        if g[r][c] != home {
            return false;
        }
    }
    true
}

/// Bottom layer fully solved: cross plus all four bottom corners correct.
pub fn l1_corners_done(snapshot: &Cube3x3Snapshot, layout: &CubeLayout, bottom: FaceName) -> bool {
    if !cross_done(snapshot, layout, bottom) {
        return false;
    }
    let bottom_home = layout.color_of(bottom);
    let g = snapshot.faces[&bottom];
    for pos in [CornerPosition::BottomLeft, CornerPosition::BottomRight, CornerPosition::TopLeft, CornerPosition::TopRight] {
        let (r, c) = corner_cell(pos);
        if g[r][c] != bottom_home {
            return false;
        }
    }
    for face in ALL_FACES {
        if face == bottom || crate::geometry::is_opposite(face, bottom) {
            continue;
        }
        let home = layout.color_of(face);
        let g = snapshot.faces[&face];
        for (r, c) in [corner_cell(CornerPosition::BottomLeft), corner_cell(CornerPosition::BottomRight)] {
            if g[r][c] != home {
                return false;
            }
        }
    }
    true
}

/// Bottom two layers fully solved: L1 plus the middle-layer edges on the
/// four side faces.
pub fn l2_edges_done(snapshot: &Cube3x3Snapshot, layout: &CubeLayout, bottom: FaceName) -> bool {
    if !l1_corners_done(snapshot, layout, bottom) {
        return false;
    }
    for face in ALL_FACES {
        if face == bottom || crate::geometry::is_opposite(face, bottom) {
            continue;
        }
        let home = layout.color_of(face);
        let g = snapshot.faces[&face];
        for pos in [EdgePosition::Left, EdgePosition::Right] {
            let (r, c) = edge_cell(pos);
            if g[r][c] != home {
                return false;
            }
        }
    }
    true
}

/// L2 plus every top-face edge oriented (showing the top color) — "OLL
/// cross" in CFOP terms, the stage even-cube edge-flip parity prevents.
pub fn l3_cross_done(snapshot: &Cube3x3Snapshot, layout: &CubeLayout, bottom: FaceName) -> bool {
    if !l2_edges_done(snapshot, layout, bottom) {
        return false;
    }
    let top = crate::geometry::opposite(bottom);
    let top_home = layout.color_of(top);
    let g = snapshot.faces[&top];
    for pos in [EdgePosition::Top, EdgePosition::Right, EdgePosition::Bottom, EdgePosition::Left] {
        let (r, c) = edge_cell(pos);
        if g[r][c] != top_home {
            return false;
        }
    }
    true
}

/// Every facelet of every face matches that face's home color.
pub fn fully_solved(snapshot: &Cube3x3Snapshot, layout: &CubeLayout) -> bool {
    ALL_FACES.into_iter().all(|f| {
        let home = layout.color_of(f);
        snapshot.faces[&f].iter().flatten().all(|c| *c == home)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cube::Cube;

    #[test]
    fn fresh_cube_passes_every_stage_goal() {
        let layout = CubeLayout::boy();
        let cube = Cube::new(3, layout.clone(), false).unwrap();
        let snap = cube.get_3x3_colors();
        assert!(cross_done(&snap, &layout, FaceName::D));
        assert!(l1_corners_done(&snap, &layout, FaceName::D));
        assert!(l2_edges_done(&snap, &layout, FaceName::D));
        assert!(l3_cross_done(&snap, &layout, FaceName::D));
        assert!(fully_solved(&snap, &layout));
    }
}
