//! Name-keyed access to an [`AnchoredBox`](crate::AnchoredBox).
//!
//! Typed code should use the box's accessors directly. This module exists
//! for declarative layouts and scripting hooks, where attribute names and
//! values only show up at runtime and the write rules have to be checked
//! dynamically.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::{AssignmentError, Error};
use crate::{Anchor, Point, Size};

/// Every attribute name an anchored box answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    /// One of the nine anchor points. Writable: re-anchors and moves the box.
    Point(Anchor),

    X,
    Y,
    Left,
    Top,
    Right,
    Bottom,
    CenterX,
    CenterY,
    Width,
    Height,
    /// Short alias of `Width`.
    W,
    /// Short alias of `Height`.
    H,

    /// The anchor name itself.
    Anchor,
    /// The logical (unresolved) position.
    Pos,
    /// The logical size.
    Size,
}

impl Attr {
    pub fn name(&self) -> &'static str {
        match self {
            Attr::Point(anchor) => anchor.name(),
            Attr::X => "x",
            Attr::Y => "y",
            Attr::Left => "left",
            Attr::Top => "top",
            Attr::Right => "right",
            Attr::Bottom => "bottom",
            Attr::CenterX => "centerx",
            Attr::CenterY => "centery",
            Attr::Width => "width",
            Attr::Height => "height",
            Attr::W => "w",
            Attr::H => "h",
            Attr::Anchor => "anchor",
            Attr::Pos => "pos",
            Attr::Size => "size",
        }
    }

    /// Returns `true` for the pure projections that can never be assigned.
    pub fn is_read_only(&self) -> bool {
        !matches!(
            self,
            Attr::Point(_) | Attr::Anchor | Attr::Pos | Attr::Size
        )
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let attr = match s {
            "x" => Attr::X,
            "y" => Attr::Y,
            "left" => Attr::Left,
            "top" => Attr::Top,
            "right" => Attr::Right,
            "bottom" => Attr::Bottom,
            "centerx" => Attr::CenterX,
            "centery" => Attr::CenterY,
            "width" => Attr::Width,
            "height" => Attr::Height,
            "w" => Attr::W,
            "h" => Attr::H,
            "anchor" => Attr::Anchor,
            "pos" => Attr::Pos,
            "size" => Attr::Size,
            other => match other.parse::<Anchor>() {
                Ok(anchor) => Attr::Point(anchor),
                Err(_) => return Err(Error::UnknownAttribute(other.to_string())),
            },
        };

        Ok(attr)
    }
}

/// A dynamically typed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Vec<AttrValue>),
}

impl AttrValue {
    pub fn pair(a: impl Into<AttrValue>, b: impl Into<AttrValue>) -> Self {
        AttrValue::Tuple(vec![a.into(), b.into()])
    }

    /// Interpret this value as a pair of integers.
    ///
    /// With `strict` set, float components are refused. Otherwise they are
    /// truncated toward zero. Integers outside the `i32` range and floats
    /// that are not finite or truncate outside it are always refused.
    pub(crate) fn to_pair(
        &self,
        attr: &'static str,
        strict: bool,
    ) -> Result<(i32, i32), Error> {
        let fail = |reason| Error::InvalidAssignment { attr, reason };

        let items = match self {
            AttrValue::Tuple(items) => items,
            _ => return Err(fail(AssignmentError::NotATuple)),
        };
        if items.len() != 2 {
            return Err(fail(AssignmentError::WrongArity(items.len())));
        }

        let component = |v: &AttrValue| match v {
            AttrValue::Int(i) => i32::try_from(*i).map_err(|_| fail(AssignmentError::OutOfRange)),
            AttrValue::Float(_) if strict => Err(fail(AssignmentError::NotInteger)),
            AttrValue::Float(f) if !f.is_finite() => Err(fail(AssignmentError::NotFinite)),
            AttrValue::Float(f) => {
                let t = f.trunc();
                if t < f64::from(i32::MIN) || t > f64::from(i32::MAX) {
                    Err(fail(AssignmentError::OutOfRange))
                } else {
                    Ok(t as i32)
                }
            }
            _ => Err(fail(AssignmentError::NotNumeric)),
        };

        Ok((component(&items[0])?, component(&items[1])?))
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(i64::from(v))
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

impl From<(i32, i32)> for AttrValue {
    fn from((a, b): (i32, i32)) -> Self {
        AttrValue::pair(a, b)
    }
}

impl From<(f64, f64)> for AttrValue {
    fn from((a, b): (f64, f64)) -> Self {
        AttrValue::pair(a, b)
    }
}

impl From<(i32, i32, i32)> for AttrValue {
    fn from((a, b, c): (i32, i32, i32)) -> Self {
        AttrValue::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

impl From<Point> for AttrValue {
    fn from(p: Point) -> Self {
        AttrValue::pair(p.x, p.y)
    }
}

impl From<Size> for AttrValue {
    fn from(s: Size) -> Self {
        AttrValue::pair(s.width, s.height)
    }
}

impl From<Anchor> for AttrValue {
    fn from(a: Anchor) -> Self {
        AttrValue::Str(a.name().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("w".parse::<Attr>().unwrap(), Attr::W);
        assert_eq!("centery".parse::<Attr>().unwrap(), Attr::CenterY);
        assert_eq!(
            "bottomright".parse::<Attr>().unwrap(),
            Attr::Point(Anchor::bottom_right())
        );
        assert_eq!(
            "colour".parse::<Attr>(),
            Err(Error::UnknownAttribute("colour".to_string()))
        );
    }

    #[test]
    fn read_only_set() {
        let read_only = [
            "width", "height", "w", "h", "x", "y", "top", "left", "bottom", "right", "centerx",
            "centery",
        ];
        for name in read_only.iter() {
            assert!(name.parse::<Attr>().unwrap().is_read_only(), "{}", name);
        }
        for anchor in Anchor::ALL.iter() {
            assert!(!Attr::Point(*anchor).is_read_only());
        }
        assert!(!Attr::Anchor.is_read_only());
    }

    #[test]
    fn pair_conversion() {
        assert_eq!(AttrValue::from((3, -4)).to_pair("pos", true), Ok((3, -4)));
        assert_eq!(AttrValue::from((3.9, -4.9)).to_pair("pos", false), Ok((3, -4)));
        assert_eq!(
            AttrValue::from((3.5, 1.0)).to_pair("pos", true),
            Err(Error::InvalidAssignment {
                attr: "pos",
                reason: AssignmentError::NotInteger
            })
        );
        assert_eq!(
            AttrValue::pair(i64::from(i32::MIN), i64::from(i32::MAX)).to_pair("pos", true),
            Ok((i32::MIN, i32::MAX))
        );
        assert_eq!(
            AttrValue::pair(i64::from(i32::MAX) + 1, 0).to_pair("pos", true),
            Err(Error::InvalidAssignment {
                attr: "pos",
                reason: AssignmentError::OutOfRange
            })
        );
        assert_eq!(
            AttrValue::from((-2147483648.9, 0.0)).to_pair("pos", false),
            Ok((i32::MIN, 0))
        );
        assert_eq!(
            AttrValue::from((-2147483649.0, 0.0)).to_pair("pos", false),
            Err(Error::InvalidAssignment {
                attr: "pos",
                reason: AssignmentError::OutOfRange
            })
        );
        assert_eq!(
            AttrValue::from((f64::NEG_INFINITY, 0.0)).to_pair("pos", false),
            Err(Error::InvalidAssignment {
                attr: "pos",
                reason: AssignmentError::NotFinite
            })
        );
        assert_eq!(
            AttrValue::pair("a", 1).to_pair("pos", false),
            Err(Error::InvalidAssignment {
                attr: "pos",
                reason: AssignmentError::NotNumeric
            })
        );
    }
}
