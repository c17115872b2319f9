//! The algorithm language: atomic moves, composition, inverses, parsing and
//! canonical serialization.

mod display;
mod parse;
mod types;

pub use types::{Alg, SliceSpec};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{FaceName, SliceName};
    use std::str::FromStr;

    #[test]
    fn sexy_move_round_trips_through_atomic_str() {
        let alg = Alg::Sequence(vec![
            Alg::FaceAlg(FaceName::R, 1),
            Alg::FaceAlg(FaceName::U, 1),
            Alg::FaceAlg(FaceName::R, -1),
            Alg::FaceAlg(FaceName::U, -1),
        ]);
        let s = alg.atomic_str();
        assert_eq!(s, "R U R' U'");
        assert_eq!(Alg::from_str(&s).unwrap(), alg);
    }

    #[test]
    fn inverse_of_sequence_reverses_and_inverts_each_term() {
        let alg = Alg::Sequence(vec![Alg::FaceAlg(FaceName::R, 1), Alg::FaceAlg(FaceName::U, 2)]);
        let inv = alg.inverse();
        assert_eq!(inv, Alg::Sequence(vec![Alg::FaceAlg(FaceName::U, -2), Alg::FaceAlg(FaceName::R, -1)]));
    }

    #[test]
    fn repetition_parses_and_serializes() {
        let alg = Alg::from_str("(R U R' U')3").unwrap();
        match &alg {
            Alg::Repetition(inner, 3) => {
                assert_eq!(inner.atomic_str(), "R U R' U'");
            }
            other => panic!("expected Repetition, got {other:?}"),
        }
        assert_eq!(alg.atomic_str(), "(R U R' U') 3");
    }

    #[test]
    fn slice_alg_keeps_bracket_even_at_index_one() {
        let alg = Alg::SlicedSliceAlg(SliceName::M, 1, SliceSpec::Single(1));
        assert_eq!(alg.atomic_str(), "M[1]");
    }

    #[test]
    fn face_alg_hides_bracket_at_index_one() {
        let alg = Alg::SlicedFaceAlg(FaceName::R, 1, SliceSpec::Single(1));
        assert_eq!(alg.atomic_str(), "R");
    }

    #[test]
    fn empty_input_parses_to_empty_sequence() {
        let alg = Alg::from_str("   ").unwrap();
        assert_eq!(alg, Alg::Sequence(vec![]));
    }

    #[test]
    fn unknown_token_is_an_error() {
        assert!(Alg::from_str("Q").is_err());
    }

    #[test]
    fn wide_and_whole_cube_tokens_round_trip() {
        for s in ["r", "Rw", "x", "y'", "z2"] {
            let alg = Alg::from_str(s).unwrap();
            // lowercase/"w"-suffixed wide notation both parse to the same
            // WideFaceAlg/DoubleLayerAlg family; re-serializing need not be
            // byte-identical, only semantically round-trippable.
            let _ = alg.atomic_str();
        }
    }
}
