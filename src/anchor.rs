use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::{Point, Size};

/// One of the nine named reference points of a rectangle.
///
/// An anchor fixes which point of a widget's box lands on the widget's
/// position. `Anchor::center()` puts the middle of the box on the position,
/// `Anchor::bottom_right()` its lower right corner, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub h_align: HAlign,
    pub v_align: VAlign,
}

impl Anchor {
    /// All nine anchors, row by row from the top-left corner.
    pub const ALL: [Anchor; 9] = [
        Anchor::top_left(),
        Anchor::mid_top(),
        Anchor::top_right(),
        Anchor::mid_left(),
        Anchor::center(),
        Anchor::mid_right(),
        Anchor::bottom_left(),
        Anchor::mid_bottom(),
        Anchor::bottom_right(),
    ];

    pub const fn new(h_align: HAlign, v_align: VAlign) -> Self {
        Self { h_align, v_align }
    }

    pub const fn top_left() -> Self {
        Self::new(HAlign::Left, VAlign::Top)
    }

    pub const fn mid_top() -> Self {
        Self::new(HAlign::Center, VAlign::Top)
    }

    pub const fn top_right() -> Self {
        Self::new(HAlign::Right, VAlign::Top)
    }

    pub const fn mid_left() -> Self {
        Self::new(HAlign::Left, VAlign::Center)
    }

    pub const fn center() -> Self {
        Self::new(HAlign::Center, VAlign::Center)
    }

    pub const fn mid_right() -> Self {
        Self::new(HAlign::Right, VAlign::Center)
    }

    pub const fn bottom_left() -> Self {
        Self::new(HAlign::Left, VAlign::Bottom)
    }

    pub const fn mid_bottom() -> Self {
        Self::new(HAlign::Center, VAlign::Bottom)
    }

    pub const fn bottom_right() -> Self {
        Self::new(HAlign::Right, VAlign::Bottom)
    }

    /// The canonical name of this anchor, e.g. `"topleft"` or `"midright"`.
    pub fn name(&self) -> &'static str {
        match (self.h_align, self.v_align) {
            (HAlign::Left, VAlign::Top) => "topleft",
            (HAlign::Center, VAlign::Top) => "midtop",
            (HAlign::Right, VAlign::Top) => "topright",
            (HAlign::Left, VAlign::Center) => "midleft",
            (HAlign::Center, VAlign::Center) => "center",
            (HAlign::Right, VAlign::Center) => "midright",
            (HAlign::Left, VAlign::Bottom) => "bottomleft",
            (HAlign::Center, VAlign::Bottom) => "midbottom",
            (HAlign::Right, VAlign::Bottom) => "bottomright",
        }
    }

    /// The offset of this anchor point from the top-left corner of a box
    /// with the given size.
    ///
    /// Centered axes use integer division, so on odd extents the center
    /// sits one half pixel toward the top-left.
    #[inline]
    pub fn offset(&self, size: Size) -> Point {
        Point {
            x: self.h_align.offset(size.width),
            y: self.v_align.offset(size.height),
        }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::center()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Anchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Anchor::ALL
            .iter()
            .find(|a| a.name() == s)
            .copied()
            .ok_or_else(|| Error::InvalidAnchor(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

impl HAlign {
    #[inline]
    fn offset(&self, width: i32) -> i32 {
        match self {
            HAlign::Left => 0,
            HAlign::Center => width / 2,
            HAlign::Right => width,
        }
    }
}

impl Default for HAlign {
    fn default() -> Self {
        HAlign::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

impl VAlign {
    #[inline]
    fn offset(&self, height: i32) -> i32 {
        match self {
            VAlign::Top => 0,
            VAlign::Center => height / 2,
            VAlign::Bottom => height,
        }
    }
}

impl Default for VAlign {
    fn default() -> Self {
        VAlign::Top
    }
}
