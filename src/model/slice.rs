//! [`PartSlice`]: one physical cubelet sub-unit

use crate::color::FaceName;
use crate::model::part_edge::PartEdge;

/// One physical cubelet sub-unit, positioned at a fixed named slot
/// ([`crate::color::CornerName`], [`crate::color::EdgeName`], or
/// [`crate::color::FaceName`]) on the cube. Rotation moves *content*
/// between slots, never the slots themselves — see
/// [`crate::model::cube::Cube`]'s module docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartSlice {
    /// Three facelets, one per adjacent face, in the order given by
    /// [`crate::geometry::corner_triples`].
    Corner { edges: [(FaceName, PartEdge); 3] },
    /// Two facelets, one per adjacent face, at a given index along the
    /// edge (0-based, `0..N-2`).
    EdgeWing { edges: [(FaceName, PartEdge); 2], index: usize },
    /// One facelet, at a `(row, col)` in the face's `(N-2)x(N-2)` center
    /// grid (1-based face coordinates, i.e. `row, col in [1, N-2]`).
    Center { edge: PartEdge, row: usize, col: usize },
}

impl PartSlice {
    pub fn facelet(&self, face: FaceName) -> Option<&PartEdge> {
        match self {
            PartSlice::Corner { edges } => edges.iter().find(|(f, _)| *f == face).map(|(_, e)| e),
            PartSlice::EdgeWing { edges, .. } => edges.iter().find(|(f, _)| *f == face).map(|(_, e)| e),
            PartSlice::Center { edge, .. } => Some(edge),
        }
    }

    pub fn facelet_mut(&mut self, face: FaceName) -> Option<&mut PartEdge> {
        match self {
            PartSlice::Corner { edges } => edges.iter_mut().find(|(f, _)| *f == face).map(|(_, e)| e),
            PartSlice::EdgeWing { edges, .. } => edges.iter_mut().find(|(f, _)| *f == face).map(|(_, e)| e),
            PartSlice::Center { edge, .. } => Some(edge),
        }
    }

    pub fn facelets(&self) -> Vec<&PartEdge> {
        match self {
            PartSlice::Corner { edges } => edges.iter().map(|(_, e)| e).collect(),
            PartSlice::EdgeWing { edges, .. } => edges.iter().map(|(_, e)| e).collect(),
            PartSlice::Center { edge, .. } => vec![edge],
        }
    }

    pub fn facelets_mut(&mut self) -> Vec<&mut PartEdge> {
        match self {
            PartSlice::Corner { edges } => edges.iter_mut().map(|(_, e)| e).collect(),
            PartSlice::EdgeWing { edges, .. } => edges.iter_mut().map(|(_, e)| e).collect(),
            PartSlice::Center { edge, .. } => vec![edge],
        }
    }

    /// True iff every facelet's color matches what a solved cube would
    /// show at this slot, given a `color_of` lookup.
    pub fn is_home(&self, color_of: impl Fn(FaceName) -> crate::color::Color) -> bool {
        match self {
            PartSlice::Corner { edges } => edges.iter().all(|(f, e)| e.color == color_of(*f)),
            PartSlice::EdgeWing { edges, .. } => edges.iter().all(|(f, e)| e.color == color_of(*f)),
            PartSlice::Center { .. } => true, // face identity alone decides centers; checked by caller
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn corner_facelet_lookup_by_face() {
        let slice = PartSlice::Corner {
            edges: [
                (FaceName::F, PartEdge::new(Color::Blue)),
                (FaceName::L, PartEdge::new(Color::Orange)),
                (FaceName::U, PartEdge::new(Color::Yellow)),
            ],
        };
        assert_eq!(slice.facelet(FaceName::L).unwrap().color, Color::Orange);
        assert!(slice.facelet(FaceName::R).is_none());
    }

    #[test]
    fn edge_wing_facelet_mut_updates_color() {
        let mut slice = PartSlice::EdgeWing {
            edges: [(FaceName::F, PartEdge::new(Color::Blue)), (FaceName::U, PartEdge::new(Color::Yellow))],
            index: 0,
        };
        slice.facelet_mut(FaceName::F).unwrap().color = Color::Red;
        assert_eq!(slice.facelet(FaceName::F).unwrap().color, Color::Red);
    }
}
