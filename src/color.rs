//! Pure value types naming the cube's faces, colors, slices and parts.
//!
//! Nothing here carries behavior beyond `Display`/`FromStr`/iteration — the
//! geometry (who's opposite whom, which edge sits where) lives in
//! [`crate::geometry`], derived from [`ALL_FACES`] plus the corner wiring
//! table rather than hardcoded per enum.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The six sticker colors. Unlike [`FaceName`] these are not fixed to a
/// face — [`crate::cube_layout::CubeLayout`] maps colors onto faces, and
/// that mapping is what varies, not the topology.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Color {
    White, Yellow, Blue, Green, Red, Orange,
}

pub const ALL_COLORS: [Color; 6] = [
    Color::White, Color::Yellow, Color::Blue, Color::Green, Color::Red, Color::Orange,
];

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::White => "W",
            Color::Yellow => "Y",
            Color::Blue => "B",
            Color::Green => "G",
            Color::Red => "R",
            Color::Orange => "O",
        };
        write!(f, "{s}")
    }
}

impl TryFrom<char> for Color {
    type Error = Error;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'W' => Ok(Color::White),
            'Y' => Ok(Color::Yellow),
            'B' => Ok(Color::Blue),
            'G' => Ok(Color::Green),
            'R' => Ok(Color::Red),
            'O' => Ok(Color::Orange),
            _ => Err(Error::internal(format!("unknown color char {value}"))),
        }
    }
}

/// One of the six faces of the cube. The topology (opposites, adjacency,
/// corner wiring) is fixed regardless of which [`Color`] a [`crate::cube_layout::CubeLayout`]
/// paints it with.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum FaceName {
    U, D, F, B, L, R,
}

pub const ALL_FACES: [FaceName; 6] = [
    FaceName::U, FaceName::D, FaceName::F, FaceName::B, FaceName::L, FaceName::R,
];

impl fmt::Display for FaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for FaceName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(FaceName::U),
            "D" => Ok(FaceName::D),
            "F" => Ok(FaceName::F),
            "B" => Ok(FaceName::B),
            "L" => Ok(FaceName::L),
            "R" => Ok(FaceName::R),
            _ => Err(Error::internal(format!("unknown face token {s}"))),
        }
    }
}

/// The three middle slices of an NxN cube: `M` runs parallel to `L`/`R`,
/// `E` parallel to `U`/`D`, `S` parallel to `F`/`B`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum SliceName {
    M,
    E,
    S,
}

pub const ALL_SLICES: [SliceName; 3] = [SliceName::M, SliceName::E, SliceName::S];

impl fmt::Display for SliceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for SliceName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(SliceName::M),
            "E" => Ok(SliceName::E),
            "S" => Ok(SliceName::S),
            _ => Err(Error::internal(format!("unknown slice token {s}"))),
        }
    }
}

/// The twelve edges, named by the two faces they border (face-pair order
/// matches [`crate::geometry`]'s canonical corner wiring, not alphabetical).
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum EdgeName {
    FL, FU, FR, FD,
    BL, BU, BR, BD,
    UR, RD, DL, LU,
}

pub const ALL_EDGES: [EdgeName; 12] = [
    EdgeName::FL, EdgeName::FU, EdgeName::FR, EdgeName::FD,
    EdgeName::BL, EdgeName::BU, EdgeName::BR, EdgeName::BD,
    EdgeName::UR, EdgeName::RD, EdgeName::DL, EdgeName::LU,
];

impl fmt::Display for EdgeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The eight corners, named by the three faces they touch (U/D first).
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum CornerName {
    FLU, FRU, FRD, FLD,
    BLU, BRU, BRD, BLD,
}

pub const ALL_CORNERS: [CornerName; 8] = [
    CornerName::FLU, CornerName::FRU, CornerName::FRD, CornerName::FLD,
    CornerName::BLU, CornerName::BRU, CornerName::BRD, CornerName::BLD,
];

impl fmt::Display for CornerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Where an edge sits relative to a face, viewed from outside the cube.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum EdgePosition {
    Top,
    Right,
    Bottom,
    Left,
}

pub const ALL_EDGE_POSITIONS: [EdgePosition; 4] =
    [EdgePosition::Top, EdgePosition::Right, EdgePosition::Bottom, EdgePosition::Left];

/// Where a corner sits relative to a face, viewed from outside the cube.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum CornerPosition {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

pub const ALL_CORNER_POSITIONS: [CornerPosition; 4] = [
    CornerPosition::TopLeft,
    CornerPosition::TopRight,
    CornerPosition::BottomRight,
    CornerPosition::BottomLeft,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_round_trips_through_display_and_from_str() {
        for f in ALL_FACES {
            let s = f.to_string();
            assert_eq!(FaceName::from_str(&s).unwrap(), f);
        }
    }

    #[test]
    fn color_round_trips_through_display_and_try_from_char() {
        for c in ALL_COLORS {
            let s = c.to_string();
            let ch = s.chars().next().unwrap();
            assert_eq!(Color::try_from(ch).unwrap(), c);
        }
    }
}
