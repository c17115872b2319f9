use thiserror::Error;

use crate::color::FaceName;

/// Errors produced by the cube model, algorithm language, operator, trackers
/// and solver pipeline.
///
/// Most variants are *surfaced* straight to the caller (a bug, or a
/// programming error at a call site). `OpAborted` and the parity variants
/// are *recovered*: the operator swallows `OpAborted` at a solve boundary,
/// and the orchestrator catches the parity variants and repairs the cube
/// before retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An internal invariant was violated, an unreachable branch was hit, or
    /// an algorithm string contained an unknown token.
    #[error("internal error: {0}")]
    InternalSWError(String),

    /// The user requested an abort of a long-running solve. Caught at the
    /// operator's outermost `solve()` boundary and turned into a normal
    /// early return; never meant to escape past that boundary.
    #[error("operation aborted")]
    OpAborted,

    /// The 3x3 (or reduced NxN) solver hit an OLL-parity state: an odd
    /// number of flipped edge wings, unreachable on a true 3x3.
    #[error("even-cube edge (OLL) parity detected")]
    EvenCubeEdgeParityException,

    /// PLL edge-swap parity: two edges need to be exchanged.
    #[error("even-cube edge swap (PLL) parity detected")]
    EvenCubeEdgeSwapParityException,

    /// PLL corner-swap parity: two corners need to be exchanged.
    #[error("even-cube corner swap (PLL) parity detected")]
    EvenCubeCornerSwapException,

    /// A geometry query was asked something it cannot answer: same face
    /// used as both source and target, an unsupported face pair, etc.
    #[error("geometry error [{code:?}]: {message}")]
    GeometryError { code: GeometryErrorCode, message: String },
}

/// Discriminates `GeometryError` causes without string-matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryErrorCode {
    /// Source and target face were the same face.
    SameFace,
    /// The requested face pair is not supported by the calling algorithm
    /// family (e.g. an opposite-face pair passed to the adjacent-face
    /// commutator family).
    UnsupportedFacePair,
    /// A coordinate or slice index fell outside the valid range for the
    /// cube's size.
    OutOfRange,
}

impl Error {
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::InternalSWError(msg.into())
    }

    pub fn geometry(code: GeometryErrorCode, msg: impl Into<String>) -> Self {
        Error::GeometryError { code, message: msg.into() }
    }

    pub fn same_face(a: FaceName) -> Self {
        Error::geometry(
            GeometryErrorCode::SameFace,
            format!("source and target face are both {a:?}"),
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
