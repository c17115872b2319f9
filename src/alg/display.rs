use std::fmt;

use crate::alg::types::{Alg, SliceSpec};

/// The quarter-turn suffix for `n` turns, reduced mod 4.
fn turn_suffix(n: i32) -> &'static str {
    match n.rem_euclid(4) {
        2 => "2",
        3 => "'",
        _ => "",
    }
}

fn bracket(spec: &SliceSpec) -> String {
    match spec {
        SliceSpec::Single(i) => format!("[{i}]"),
        SliceSpec::Range(a, b) => format!("[{a}:{b}]"),
        SliceSpec::List(v) => {
            let parts: Vec<String> = v.iter().map(|i| i.to_string()).collect();
            format!("[{}]", parts.join(","))
        }
    }
}

impl Alg {
    /// Canonical, round-trippable serialization.
    pub fn atomic_str(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Alg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alg::FaceAlg(face, n) => write!(f, "{face}{}", turn_suffix(*n)),
            Alg::SlicedFaceAlg(face, n, spec) => {
                // R[1] is shown identically to bare R
                if matches!(spec, SliceSpec::Single(1)) {
                    write!(f, "{face}{}", turn_suffix(*n))
                } else {
                    write!(f, "{face}{}{}", bracket(spec), turn_suffix(*n))
                }
            }
            Alg::SliceAlg(slice, n) => write!(f, "{slice}{}", turn_suffix(*n)),
            Alg::SlicedSliceAlg(slice, n, spec) => {
                write!(f, "{slice}{}{}", bracket(spec), turn_suffix(*n))
            }
            Alg::DoubleLayerAlg(face, n) | Alg::WideFaceAlg(face, n) => {
                write!(f, "{}{}", face.to_string().to_lowercase(), turn_suffix(*n))
            }
            Alg::WholeCubeAlg(axis, n) => {
                let letter = match axis {
                    crate::geometry::Axis::X => "x",
                    crate::geometry::Axis::Y => "y",
                    crate::geometry::Axis::Z => "z",
                };
                write!(f, "{letter}{}", turn_suffix(*n))
            }
            Alg::Sequence(terms) => {
                let parts: Vec<String> = terms.iter().map(Alg::to_string).collect();
                write!(f, "{}", parts.join(" "))
            }
            Alg::Repetition(alg, k) => write!(f, "({}) {}", alg, k),
        }
    }
}
