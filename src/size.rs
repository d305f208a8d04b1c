use std::fmt;
use std::ops::Add;

/// An extent in screen coordinates (pixels).
///
/// Components are signed so that a size producer returning a negative
/// extent can be caught at resolution time instead of wrapping around.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if neither dimension is negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Size { width, height }
    }
}

impl From<Size> for (i32, i32) {
    fn from(s: Size) -> Self {
        (s.width, s.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// A point in screen coordinates (pixels).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by a size, e.g. to step from a corner to the
    /// opposite one.
    #[inline]
    pub fn offset_by(&self, size: Size) -> Point {
        Point {
            x: self.x + size.width,
            y: self.y + size.height,
        }
    }

    /// Component-wise `self + rhs`, or `None` if either axis overflows.
    pub fn checked_add(self, rhs: Point) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
        })
    }

    /// Component-wise `self - rhs`, or `None` if either axis overflows.
    pub fn checked_sub(self, rhs: Point) -> Option<Point> {
        Some(Point {
            x: self.x.checked_sub(rhs.x)?,
            y: self.y.checked_sub(rhs.y)?,
        })
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Point> for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Self::Output {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// An axis-aligned rectangle in screen coordinates (pixels).
///
/// This is a plain value: it knows nothing about anchors. See
/// [`AnchoredBox`](crate::AnchoredBox) for the lazily resolved version.
///
/// The edge accessors assume the far corner `pos + size` fits in `i32`.
/// [`Rect::checked_new`] guarantees it; every rectangle handed out by an
/// anchored box is built that way.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pos_tl: Point,
    size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(pos: Point, size: Size) -> Self {
        Self { pos_tl: pos, size }
    }

    /// Like [`Rect::new`], but `None` if the bottom-right corner would not
    /// be representable.
    pub fn checked_new(pos: Point, size: Size) -> Option<Self> {
        pos.x.checked_add(size.width)?;
        pos.y.checked_add(size.height)?;
        Some(Self::new(pos, size))
    }

    pub fn x(&self) -> i32 {
        self.pos_tl.x
    }

    pub fn y(&self) -> i32 {
        self.pos_tl.y
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn x2(&self) -> i32 {
        self.pos_tl.x + self.size.width
    }

    pub fn y2(&self) -> i32 {
        self.pos_tl.y + self.size.height
    }

    pub fn pos(&self) -> Point {
        self.pos_tl
    }

    pub fn pos_br(&self) -> Point {
        self.pos_tl.offset_by(self.size)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.pos_tl.x + (self.size.width / 2)
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.pos_tl.y + (self.size.height / 2)
    }

    #[inline]
    pub fn center_pos(&self) -> Point {
        Point {
            x: self.center_x(),
            y: self.center_y(),
        }
    }

    /// Returns `true` if the point lies inside the rectangle. All four edges
    /// count as inside.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.pos_tl.x
            && point.y >= self.pos_tl.y
            && point.x <= self.x2()
            && point.y <= self.y2()
    }

    /// Returns a rectangle of the given height sharing this one's horizontal
    /// span and vertical center.
    pub fn with_height_centered(&self, height: i32) -> Rect {
        let height = height.max(0).min(self.size.height);
        Rect::new(
            Point::new(self.pos_tl.x, self.center_y() - height / 2),
            Size::new(self.size.width, height),
        )
    }
}
