//! The cube model: colored facelets (L1 in spec terms) built on top of the
//! pure topology in [`crate::geometry`].

pub mod cube;
pub mod part_edge;
pub mod slice;

pub use cube::Cube;
pub use part_edge::{AttrKey, AttrValue, PartEdge};
pub use slice::PartSlice;
