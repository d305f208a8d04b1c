use thiserror::Error;

use crate::{Anchor, Point, Size};

/// Why a value could not be assigned to a position-like attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentError {
    /// The value was a scalar or a string instead of a tuple.
    NotATuple,
    /// The value was a tuple with the wrong number of components.
    WrongArity(usize),
    /// A component of the tuple was not a number.
    NotNumeric,
    /// A component was a float while the box only accepts integers.
    NotInteger,
    /// A float component was NaN or infinite.
    NotFinite,
    /// A component does not fit in an `i32` coordinate.
    OutOfRange,
}

impl std::fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotATuple => write!(f, "expected a 2-tuple"),
            Self::WrongArity(n) => write!(f, "expected a 2-tuple, got {} components", n),
            Self::NotNumeric => write!(f, "tuple components must be numbers"),
            Self::NotInteger => write!(f, "tuple components must be integers"),
            Self::NotFinite => write!(f, "tuple components must be finite"),
            Self::OutOfRange => write!(f, "tuple component out of the i32 range"),
        }
    }
}

/// Contract violations raised by the geometry layer.
///
/// All of these indicate a usage bug in the calling widget or application.
/// They are reported at the offending call and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid geometry: size {0} has a negative component")]
    InvalidGeometry(Size),

    #[error("box at {position} with size {size} anchored {anchor} leaves the i32 coordinate range")]
    GeometryOverflow {
        position: Point,
        size: Size,
        anchor: Anchor,
    },

    #[error("invalid anchor {0:?}")]
    InvalidAnchor(String),

    #[error("cannot assign to `{attr}`: {reason}")]
    InvalidAssignment {
        attr: &'static str,
        reason: AssignmentError,
    },

    #[error("`{0}` is a read-only projection of the resolved rectangle")]
    ReadOnlyAttribute(&'static str),

    #[error("unknown attribute {0:?}")]
    UnknownAttribute(String),
}
