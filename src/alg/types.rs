use crate::color::{FaceName, SliceName};
use crate::geometry::Axis;

/// A bracketed slice selector, e.g. `[2]`, `[1:3]`, `[1,3,4]`. Indices are
/// 1-based — the `-1` translation
/// to the cube's 0-based rotation API happens only where an `Alg` is
/// played, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceSpec {
    Single(usize),
    Range(usize, usize),
    List(Vec<usize>),
}

impl SliceSpec {
    /// The concrete, sorted, deduplicated set of 1-based indices this spec
    /// names.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            SliceSpec::Single(i) => vec![*i],
            SliceSpec::Range(a, b) => (*a..=*b).collect(),
            SliceSpec::List(v) => {
                let mut v = v.clone();
                v.sort_unstable();
                v.dedup();
                v
            }
        }
    }

    /// True for the spec every bare face/slice token implies (`[1]`).
    fn is_default_single_one(&self) -> bool {
        matches!(self, SliceSpec::Single(1))
    }
}

/// An algorithm: an atomic move or a composition of them.
/// Immutable once built; `n` is never reduced mod 4 in the tree itself —
/// that happens only when an atomic move is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alg {
    /// Rotate a face by `n` quarter turns (negative = inverse, `2` = half).
    FaceAlg(FaceName, i32),
    /// A face turn with an explicit inner-slice selection dragged along.
    SlicedFaceAlg(FaceName, i32, SliceSpec),
    /// A middle-slice move (`M`, `E`, `S`).
    SliceAlg(SliceName, i32),
    /// A middle-slice move restricted to an explicit index selection.
    SlicedSliceAlg(SliceName, i32, SliceSpec),
    /// Classic wide move: face plus every inner slice, sized to the cube
    /// (`Rw` on a 4x4 turns depths 0, 1 and 2; on a 5x5 it turns 0 through 3).
    DoubleLayerAlg(FaceName, i32),
    /// Adaptive wide move: face plus every inner slice, computed from the
    /// target cube's size when played.
    WideFaceAlg(FaceName, i32),
    /// A whole-cube reorientation around `X`/`Y`/`Z`.
    WholeCubeAlg(Axis, i32),
    /// Play each member left to right.
    Sequence(Vec<Alg>),
    /// Play `alg` `k` times in a row.
    Repetition(Box<Alg>, i32),
}

impl Alg {
    /// The structural inverse: `inv(seq(a,b,c)) = seq(inv(c), inv(b), inv(a))`,
    /// `inv(face, n) = (face, -n)`
    pub fn inverse(&self) -> Alg {
        match self {
            Alg::FaceAlg(f, n) => Alg::FaceAlg(*f, -n),
            Alg::SlicedFaceAlg(f, n, s) => Alg::SlicedFaceAlg(*f, -n, s.clone()),
            Alg::SliceAlg(s, n) => Alg::SliceAlg(*s, -n),
            Alg::SlicedSliceAlg(s, n, spec) => Alg::SlicedSliceAlg(*s, -n, spec.clone()),
            Alg::DoubleLayerAlg(f, n) => Alg::DoubleLayerAlg(*f, -n),
            Alg::WideFaceAlg(f, n) => Alg::WideFaceAlg(*f, -n),
            Alg::WholeCubeAlg(a, n) => Alg::WholeCubeAlg(*a, -n),
            Alg::Sequence(terms) => Alg::Sequence(terms.iter().rev().map(Alg::inverse).collect()),
            Alg::Repetition(alg, k) => Alg::Repetition(Box::new(alg.inverse()), *k),
        }
    }

    /// Flattens this algorithm into the ordered list of atomic terms a
    /// player would execute.
    pub fn flatten(&self) -> Vec<Alg> {
        match self {
            Alg::Sequence(terms) => terms.iter().flat_map(Alg::flatten).collect(),
            Alg::Repetition(alg, k) => {
                let body = alg.flatten();
                let reps = (*k).max(0) as usize;
                std::iter::repeat(body).take(reps).flatten().collect()
            }
            atomic => vec![atomic.clone()],
        }
    }
}
