//! Color → face assignments and the BOY reference scheme.
//!
//! The *topology* lives in [`crate::geometry`] and never changes; a
//! [`CubeLayout`] is just which [`Color`] currently paints which
//! [`FaceName`], which does change (a scrambled cube's `U` face isn't
//! necessarily yellow once you've done whole-cube rotations).

use std::collections::HashMap;

use static_init::dynamic;

use crate::color::{Color, FaceName, ALL_COLORS, ALL_FACES};
use crate::error::Error;
use crate::geometry::{self, Axis};

/// An assignment of [`Color`] to [`FaceName`]. Always a bijection over the
/// six faces/colors — constructors reject anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeLayout {
    color_of: HashMap<FaceName, Color>,
    face_of: HashMap<Color, FaceName>,
}

impl CubeLayout {
    pub fn new(assignment: [(FaceName, Color); 6]) -> Result<Self, Error> {
        let mut color_of = HashMap::new();
        let mut face_of = HashMap::new();
        for (face, color) in assignment {
            if color_of.insert(face, color).is_some() {
                return Err(Error::internal(format!("duplicate face {face:?} in layout")));
            }
            if face_of.insert(color, face).is_some() {
                return Err(Error::internal(format!("duplicate color {color:?} in layout")));
            }
        }
        if color_of.len() != 6 || face_of.len() != 6 {
            return Err(Error::internal("layout must be a bijection over all 6 faces/colors"));
        }
        Ok(CubeLayout { color_of, face_of })
    }

    pub fn color_of(&self, face: FaceName) -> Color {
        self.color_of[&face]
    }

    pub fn face_of(&self, color: Color) -> FaceName {
        self.face_of[&color]
    }

    /// The canonical BOY scheme: Blue-Orange-Yellow on the F-L-U corner,
    /// with White/Green/Red on the opposing D/B/R faces.
    pub fn boy() -> Self {
        use Color::*;
        use FaceName::*;
        CubeLayout::new([(F, Blue), (L, Orange), (U, Yellow), (B, Green), (R, Red), (D, White)])
            .expect("canonical BOY assignment is a bijection by construction")
    }

    /// True iff this layout is BOY up to a whole-cube rotation — i.e. some
    /// rotation of the canonical scheme produces exactly this layout.
    pub fn is_boy_equivalent(&self) -> bool {
        let boy = CubeLayout::boy();
        all_rotations_of(&boy).iter().any(|r| r == self)
    }

    /// Every face/color pair, in [`crate::color::ALL_FACES`] order.
    pub fn pairs(&self) -> [(FaceName, Color); 6] {
        let mut out = [(FaceName::U, Color::White); 6];
        for (i, f) in ALL_FACES.into_iter().enumerate() {
            out[i] = (f, self.color_of[&f]);
        }
        out
    }
}

impl Default for CubeLayout {
    fn default() -> Self {
        CubeLayout::boy()
    }
}

/// Applies a single whole-cube quarter turn (n=+1) around `axis` to a
/// layout: the two pole faces keep their color, the four ring faces cycle
/// their colors one step around the ring.
fn rotate_layout_once(layout: &CubeLayout, axis: Axis) -> CubeLayout {
    let pole = axis.pole();
    let anti_pole = geometry::opposite(pole);
    let mut assignment = [(FaceName::U, Color::White); 6];
    for (i, face) in ALL_FACES.into_iter().enumerate() {
        let source = if face == pole || face == anti_pole {
            face
        } else {
            let p = geometry::position_of(pole, face).expect("ring face is adjacent to pole");
            geometry::neighbor_at(pole, prev_position(p))
        };
        assignment[i] = (face, layout.color_of(source));
    }
    CubeLayout::new(assignment).expect("rotation preserves bijectivity")
}

fn prev_position(p: crate::color::EdgePosition) -> crate::color::EdgePosition {
    use crate::color::EdgePosition::*;
    match p {
        Top => Left,
        Right => Top,
        Bottom => Right,
        Left => Bottom,
    }
}

/// All 24 orientations reachable from `layout` by whole-cube rotation.
fn all_rotations_of(layout: &CubeLayout) -> Vec<CubeLayout> {
    let mut out = Vec::with_capacity(24);
    let mut base = layout.clone();
    for _ in 0..4 {
        let mut mid = base.clone();
        for _ in 0..4 {
            let mut inner = mid.clone();
            for _ in 0..4 {
                if !out.contains(&inner) {
                    out.push(inner.clone());
                }
                inner = rotate_layout_once(&inner, Axis::Z);
            }
            mid = rotate_layout_once(&mid, Axis::Y);
        }
        base = rotate_layout_once(&base, Axis::X);
    }
    out
}

/// The BOY reference layout, shared process-wide as a lazily-initialized
/// singleton.
#[dynamic]
pub static BOY_SINGLETON: CubeLayout = CubeLayout::boy();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boy_is_boy_equivalent() {
        assert!(CubeLayout::boy().is_boy_equivalent());
    }

    #[test]
    fn rotated_boy_is_still_boy_equivalent() {
        let rotated = rotate_layout_once(&CubeLayout::boy(), Axis::Y);
        assert!(rotated.is_boy_equivalent());
        assert_ne!(rotated, CubeLayout::boy());
    }

    #[test]
    fn four_rotations_return_to_start() {
        let mut cur = CubeLayout::boy();
        for _ in 0..4 {
            cur = rotate_layout_once(&cur, Axis::X);
        }
        assert_eq!(cur, CubeLayout::boy());
    }

    #[test]
    fn non_boy_layout_is_rejected() {
        use Color::*;
        use FaceName::*;
        // Swap two colors relative to BOY: not reachable by any rotation.
        let bad = CubeLayout::new([(F, Orange), (L, Blue), (U, Yellow), (B, Green), (R, Red), (D, White)])
            .unwrap();
        assert!(!bad.is_boy_equivalent());
    }

    #[test]
    fn all_colors_and_faces_present() {
        let l = CubeLayout::boy();
        for f in ALL_FACES {
            let c = l.color_of(f);
            assert_eq!(l.face_of(c), f);
        }
        for c in ALL_COLORS {
            let f = l.face_of(c);
            assert_eq!(l.color_of(f), c);
        }
    }
}
