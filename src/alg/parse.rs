//! Recursive-descent parser for the algorithm string grammar
//!
//! Deliberately hand-rolled rather than pulled from a parser-combinator
//! crate: the grammar is small, fully LL(1) at every choice point, and the
//! teacher carries no parsing dependency anywhere in its tree (it reads
//! notation through a plain `FromStr` on its own `Move` type).

use std::str::FromStr;

use crate::color::{FaceName, SliceName};
use crate::error::Error;
use crate::geometry::Axis;

use super::types::{Alg, SliceSpec};

impl FromStr for Alg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let chars: Vec<char> = s.chars().collect();
        let mut pos = 0;
        let terms = parse_terms(&chars, &mut pos, false)?;
        skip_ws(&chars, &mut pos);
        if pos != chars.len() {
            return Err(Error::internal(format!(
                "Unknown token '{}' at position {pos} in {s:?}",
                chars[pos]
            )));
        }
        Ok(collapse(terms))
    }
}

/// A single bare term collapses to itself; zero or many collapse to a
/// [`Alg::Sequence`]. Keeps `from_str("R")` equal to a bare `FaceAlg` rather
/// than a one-element `Sequence`, and round-trips `"(R U R' U')3"` to a bare
/// [`Alg::Repetition`] rather than `Sequence([Repetition(..)])`.
fn collapse(mut terms: Vec<Alg>) -> Alg {
    match terms.len() {
        0 => Alg::Sequence(vec![]),
        1 => terms.pop().unwrap(),
        _ => Alg::Sequence(terms),
    }
}

fn skip_ws(chars: &[char], pos: &mut usize) {
    while *pos < chars.len() && chars[*pos].is_whitespace() {
        *pos += 1;
    }
}

/// Parses a run of terms. Stops at end of input, or at a `)` when
/// `in_group` (the caller consumes that closing paren).
fn parse_terms(chars: &[char], pos: &mut usize, in_group: bool) -> Result<Vec<Alg>, Error> {
    let mut terms = Vec::new();
    loop {
        skip_ws(chars, pos);
        if *pos >= chars.len() {
            break;
        }
        if in_group && chars[*pos] == ')' {
            break;
        }
        if chars[*pos] == '(' {
            *pos += 1;
            let inner = parse_terms(chars, pos, true)?;
            skip_ws(chars, pos);
            if *pos >= chars.len() || chars[*pos] != ')' {
                return Err(Error::internal("unterminated group: expected ')'".to_string()));
            }
            *pos += 1;
            let rep = parse_opt_integer(chars, pos)?.unwrap_or(1);
            terms.push(Alg::Repetition(Box::new(collapse(inner)), rep));
        } else {
            terms.push(parse_atomic_term(chars, pos)?);
        }
    }
    Ok(terms)
}

enum Kind {
    Outer(FaceName),
    Wide(FaceName),
    Slice(SliceName),
    Whole(Axis),
}

fn parse_atomic_term(chars: &[char], pos: &mut usize) -> Result<Alg, Error> {
    let start = *pos;
    if *pos >= chars.len() {
        return Err(Error::internal("expected a move token but found end of input".to_string()));
    }
    let c = chars[*pos];
    *pos += 1;

    let mut kind = match c {
        'R' => Kind::Outer(FaceName::R),
        'L' => Kind::Outer(FaceName::L),
        'U' => Kind::Outer(FaceName::U),
        'D' => Kind::Outer(FaceName::D),
        'F' => Kind::Outer(FaceName::F),
        'B' => Kind::Outer(FaceName::B),
        'r' => Kind::Wide(FaceName::R),
        'l' => Kind::Wide(FaceName::L),
        'u' => Kind::Wide(FaceName::U),
        'd' => Kind::Wide(FaceName::D),
        'f' => Kind::Wide(FaceName::F),
        'b' => Kind::Wide(FaceName::B),
        'M' => Kind::Slice(SliceName::M),
        'E' => Kind::Slice(SliceName::E),
        'S' => Kind::Slice(SliceName::S),
        'X' | 'x' => Kind::Whole(Axis::X),
        'Y' | 'y' => Kind::Whole(Axis::Y),
        'Z' | 'z' => Kind::Whole(Axis::Z),
        other => {
            return Err(Error::internal(format!("Unknown token '{other}' at position {start}")));
        }
    };

    // "Rw" is the other spelling of the wide move "r".
    if let Kind::Outer(face) = kind {
        if *pos < chars.len() && chars[*pos] == 'w' {
            *pos += 1;
            kind = Kind::Wide(face);
        }
    }

    let spec = parse_opt_slice_spec(chars, pos)?;

    let mut n = 1;
    if *pos < chars.len() && chars[*pos] == '\'' {
        n = -1;
        *pos += 1;
    } else if let Some(d) = parse_opt_integer(chars, pos)? {
        n = d;
    }

    Ok(match kind {
        Kind::Outer(face) => match spec {
            None => Alg::FaceAlg(face, n),
            Some(s) => Alg::SlicedFaceAlg(face, n, s),
        },
        Kind::Wide(face) => match spec {
            None => Alg::DoubleLayerAlg(face, n),
            Some(s) => Alg::SlicedFaceAlg(face, n, s),
        },
        Kind::Slice(slice) => match spec {
            None => Alg::SliceAlg(slice, n),
            Some(s) => Alg::SlicedSliceAlg(slice, n, s),
        },
        Kind::Whole(axis) => Alg::WholeCubeAlg(axis, n),
    })
}

fn parse_opt_slice_spec(chars: &[char], pos: &mut usize) -> Result<Option<SliceSpec>, Error> {
    if *pos >= chars.len() || chars[*pos] != '[' {
        return Ok(None);
    }
    *pos += 1;
    let first = parse_integer(chars, pos)?;
    let spec = if *pos < chars.len() && chars[*pos] == ':' {
        *pos += 1;
        let second = parse_integer(chars, pos)?;
        SliceSpec::Range(first, second)
    } else if *pos < chars.len() && chars[*pos] == ',' {
        let mut list = vec![first];
        while *pos < chars.len() && chars[*pos] == ',' {
            *pos += 1;
            list.push(parse_integer(chars, pos)?);
        }
        SliceSpec::List(list)
    } else {
        SliceSpec::Single(first)
    };
    if *pos >= chars.len() || chars[*pos] != ']' {
        return Err(Error::internal("unterminated slice spec: expected ']'".to_string()));
    }
    *pos += 1;
    Ok(Some(spec))
}

fn parse_integer(chars: &[char], pos: &mut usize) -> Result<usize, Error> {
    let start = *pos;
    while *pos < chars.len() && chars[*pos].is_ascii_digit() {
        *pos += 1;
    }
    if *pos == start {
        return Err(Error::internal(format!("expected an integer at position {start}")));
    }
    chars[start..*pos]
        .iter()
        .collect::<String>()
        .parse::<usize>()
        .map_err(|e| Error::internal(format!("malformed integer at position {start}: {e}")))
}

fn parse_opt_integer(chars: &[char], pos: &mut usize) -> Result<Option<i32>, Error> {
    let start = *pos;
    while *pos < chars.len() && chars[*pos].is_ascii_digit() {
        *pos += 1;
    }
    if *pos == start {
        return Ok(None);
    }
    let v = chars[start..*pos]
        .iter()
        .collect::<String>()
        .parse::<i32>()
        .map_err(|e| Error::internal(format!("malformed integer at position {start}: {e}")))?;
    Ok(Some(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alg::types::{Alg, SliceSpec};

    #[test]
    fn parses_bare_face_move() {
        assert_eq!(Alg::from_str("R").unwrap(), Alg::FaceAlg(FaceName::R, 1));
        assert_eq!(Alg::from_str("R'").unwrap(), Alg::FaceAlg(FaceName::R, -1));
        assert_eq!(Alg::from_str("R2").unwrap(), Alg::FaceAlg(FaceName::R, 2));
    }

    #[test]
    fn parses_bracketed_face_move() {
        assert_eq!(
            Alg::from_str("R[1:3]").unwrap(),
            Alg::SlicedFaceAlg(FaceName::R, 1, SliceSpec::Range(1, 3))
        );
    }

    #[test]
    fn parses_bare_and_bracketed_slice_move_as_distinct_variants() {
        assert_eq!(Alg::from_str("M").unwrap(), Alg::SliceAlg(SliceName::M, 1));
        assert_eq!(
            Alg::from_str("M[2]'").unwrap(),
            Alg::SlicedSliceAlg(SliceName::M, -1, SliceSpec::Single(2))
        );
    }

    #[test]
    fn parses_wide_moves_both_spellings() {
        assert_eq!(Alg::from_str("r").unwrap(), Alg::DoubleLayerAlg(FaceName::R, 1));
        assert_eq!(Alg::from_str("Rw").unwrap(), Alg::DoubleLayerAlg(FaceName::R, 1));
        assert_eq!(Alg::from_str("Rw'").unwrap(), Alg::DoubleLayerAlg(FaceName::R, -1));
    }

    #[test]
    fn parses_whole_cube_moves() {
        assert_eq!(Alg::from_str("x").unwrap(), Alg::WholeCubeAlg(Axis::X, 1));
        assert_eq!(Alg::from_str("Y2").unwrap(), Alg::WholeCubeAlg(Axis::Y, 2));
    }

    #[test]
    fn parses_list_slice_spec() {
        assert_eq!(
            Alg::from_str("M[1,3,4]").unwrap(),
            Alg::SlicedSliceAlg(SliceName::M, 1, SliceSpec::List(vec![1, 3, 4]))
        );
    }

    #[test]
    fn whitespace_only_input_is_empty_sequence() {
        assert_eq!(Alg::from_str("   ").unwrap(), Alg::Sequence(vec![]));
        assert_eq!(Alg::from_str("").unwrap(), Alg::Sequence(vec![]));
    }

    #[test]
    fn unknown_token_is_a_structured_error() {
        let err = Alg::from_str("Q").unwrap_err();
        match err {
            Error::InternalSWError(msg) => assert!(msg.contains('Q')),
            other => panic!("expected InternalSWError, got {other:?}"),
        }
    }

    #[test]
    fn scenario_s7_round_trips_through_atomic_str() {
        let s = "(R U R' U') 3 M[2]'";
        let alg = Alg::from_str(s).unwrap();
        assert_eq!(alg.atomic_str(), s);
    }
}
