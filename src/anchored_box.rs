use std::fmt;

use crate::attr::{Attr, AttrValue};
use crate::error::Error;
use crate::{Anchor, Point, Rect, Size, Value};

/// The geometry every widget is built on.
///
/// A box stores a logical position, a logical size and an anchor, each of
/// which may be a literal or a producer. It never stores a rectangle: every
/// geometric read first resolves the three inputs into a fresh [`Rect`] whose
/// anchor point sits exactly on the position, then projects the requested
/// field out of it.
///
/// Derived fields (`left`, `width`, `center_x`, ...) are read-only. The only
/// way to move a box is to change its position, or to place one of its nine
/// anchor points with [`AnchoredBox::place`], which re-anchors the box at the
/// same time.
pub struct AnchoredBox {
    position: Value<Point>,
    size: Value<Size>,
    anchor: Value<Anchor>,

    focused: bool,
    clicked: bool,
    strict: bool,
}

impl AnchoredBox {
    pub fn new(
        position: impl Into<Value<Point>>,
        size: impl Into<Value<Size>>,
        anchor: impl Into<Value<Anchor>>,
    ) -> Self {
        Self {
            position: position.into(),
            size: size.into(),
            anchor: anchor.into(),
            focused: false,
            clicked: false,
            strict: false,
        }
    }

    /// Refuse float components in [`AnchoredBox::set_attr`] instead of
    /// truncating them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    // --- Logical inputs ----------------------------------------------------

    /// The current logical position (the point the anchor sits on).
    pub fn position(&self) -> Point {
        self.position.get()
    }

    /// The current logical size.
    ///
    /// Fails with [`Error::InvalidGeometry`] if a producer returned a
    /// negative extent.
    pub fn size(&self) -> Result<Size, Error> {
        let size = self.size.get();
        if size.is_valid() {
            Ok(size)
        } else {
            Err(Error::InvalidGeometry(size))
        }
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor.get()
    }

    pub fn set_position(&mut self, position: impl Into<Value<Point>>) {
        self.position = position.into();
    }

    pub fn set_size(&mut self, size: impl Into<Value<Size>>) {
        self.size = size.into();
    }

    /// Change the anchor while keeping the position. The box moves so that
    /// its new anchor point lands on the old position.
    pub fn set_anchor(&mut self, anchor: impl Into<Value<Anchor>>) {
        self.anchor = anchor.into();
    }

    /// Move the named point of the box to `point`.
    ///
    /// The anchor becomes `anchor` and the position becomes `point` in one
    /// step, so the box is never observed with one changed and not the other.
    pub fn place(&mut self, anchor: Anchor, point: impl Into<Point>) {
        let point = point.into();
        log::trace!("placing {} at {}", anchor, point);

        self.anchor = Value::Literal(anchor);
        self.position = Value::Literal(point);
    }

    // --- Resolution --------------------------------------------------------

    /// Compute the rectangle described by the current position, size and
    /// anchor. Producers are called once each.
    ///
    /// Fails with [`Error::GeometryOverflow`] if any edge of the rectangle
    /// falls outside the `i32` range. Every projection of a rectangle
    /// returned from here is then overflow free.
    pub fn resolve(&self) -> Result<Rect, Error> {
        let size = self.size()?;
        let anchor = self.anchor();
        let position = self.position();

        position
            .checked_sub(anchor.offset(size))
            .and_then(|top_left| Rect::checked_new(top_left, size))
            .ok_or(Error::GeometryOverflow {
                position,
                size,
                anchor,
            })
    }

    /// The evaluated position and size, enough to rebuild an equivalent box
    /// with the same anchor.
    pub fn as_bounds(&self) -> Result<(Point, Size), Error> {
        Ok((self.position(), self.size()?))
    }

    /// Returns `true` if `point` lies inside the resolved rectangle, edges
    /// included.
    pub fn contains(&self, point: impl Into<Point>) -> Result<bool, Error> {
        Ok(self.resolve()?.contains_point(point.into()))
    }

    // --- Projections -------------------------------------------------------

    /// The named anchor point of the resolved rectangle.
    pub fn point(&self, anchor: Anchor) -> Result<Point, Error> {
        let rect = self.resolve()?;
        Ok(rect.pos() + anchor.offset(rect.size()))
    }

    pub fn x(&self) -> Result<i32, Error> {
        Ok(self.resolve()?.x())
    }

    pub fn y(&self) -> Result<i32, Error> {
        Ok(self.resolve()?.y())
    }

    pub fn left(&self) -> Result<i32, Error> {
        self.x()
    }

    pub fn top(&self) -> Result<i32, Error> {
        self.y()
    }

    pub fn right(&self) -> Result<i32, Error> {
        Ok(self.resolve()?.x2())
    }

    pub fn bottom(&self) -> Result<i32, Error> {
        Ok(self.resolve()?.y2())
    }

    pub fn width(&self) -> Result<i32, Error> {
        Ok(self.resolve()?.width())
    }

    pub fn height(&self) -> Result<i32, Error> {
        Ok(self.resolve()?.height())
    }

    pub fn center_x(&self) -> Result<i32, Error> {
        Ok(self.resolve()?.center_x())
    }

    pub fn center_y(&self) -> Result<i32, Error> {
        Ok(self.resolve()?.center_y())
    }

    pub fn top_left(&self) -> Result<Point, Error> {
        self.point(Anchor::top_left())
    }

    pub fn mid_top(&self) -> Result<Point, Error> {
        self.point(Anchor::mid_top())
    }

    pub fn top_right(&self) -> Result<Point, Error> {
        self.point(Anchor::top_right())
    }

    pub fn mid_left(&self) -> Result<Point, Error> {
        self.point(Anchor::mid_left())
    }

    pub fn center(&self) -> Result<Point, Error> {
        self.point(Anchor::center())
    }

    pub fn mid_right(&self) -> Result<Point, Error> {
        self.point(Anchor::mid_right())
    }

    pub fn bottom_left(&self) -> Result<Point, Error> {
        self.point(Anchor::bottom_left())
    }

    pub fn mid_bottom(&self) -> Result<Point, Error> {
        self.point(Anchor::mid_bottom())
    }

    pub fn bottom_right(&self) -> Result<Point, Error> {
        self.point(Anchor::bottom_right())
    }

    // --- Name-keyed access -------------------------------------------------

    /// Read an attribute by name. Geometric attributes are resolved first.
    pub fn get_attr(&self, attr: Attr) -> Result<AttrValue, Error> {
        let value: AttrValue = match attr {
            Attr::Anchor => self.anchor().into(),
            Attr::Pos => self.position().into(),
            Attr::Size => self.size()?.into(),
            Attr::Point(anchor) => self.point(anchor)?.into(),
            Attr::X | Attr::Left => self.x()?.into(),
            Attr::Y | Attr::Top => self.y()?.into(),
            Attr::Right => self.right()?.into(),
            Attr::Bottom => self.bottom()?.into(),
            Attr::CenterX => self.center_x()?.into(),
            Attr::CenterY => self.center_y()?.into(),
            Attr::Width | Attr::W => self.width()?.into(),
            Attr::Height | Attr::H => self.height()?.into(),
        };

        Ok(value)
    }

    /// Assign an attribute by name.
    ///
    /// Anchor points take a 2-tuple and re-anchor the box, `anchor` takes an
    /// anchor name, `pos` and `size` take 2-tuples. Every other attribute is
    /// a projection and fails with [`Error::ReadOnlyAttribute`]. Nothing is
    /// modified when an error is returned.
    pub fn set_attr(&mut self, attr: Attr, value: impl Into<AttrValue>) -> Result<(), Error> {
        let value = value.into();

        match attr {
            Attr::Point(anchor) => {
                let point: Point = value.to_pair(anchor.name(), self.strict)?.into();
                self.place(anchor, point);
            }
            Attr::Anchor => {
                let anchor = match &value {
                    AttrValue::Str(name) => name.parse::<Anchor>()?,
                    other => return Err(Error::InvalidAnchor(format!("{:?}", other))),
                };
                self.set_anchor(anchor);
            }
            Attr::Pos => {
                let point: Point = value.to_pair("pos", self.strict)?.into();
                self.set_position(point);
            }
            Attr::Size => {
                let size: Size = value.to_pair("size", self.strict)?.into();
                if !size.is_valid() {
                    return Err(Error::InvalidGeometry(size));
                }
                self.set_size(size);
            }
            read_only => return Err(Error::ReadOnlyAttribute(read_only.name())),
        }

        Ok(())
    }

    // --- Focus / click state -----------------------------------------------

    pub fn focus(&mut self) {
        if !self.focused {
            log::trace!("focus gained");
        }
        self.focused = true;
    }

    pub fn unfocus(&mut self) {
        if self.focused {
            log::trace!("focus lost");
        }
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Mark the box as pressed. Returns `false`, and does nothing, if it was
    /// already pressed.
    pub fn click(&mut self) -> bool {
        if self.clicked {
            return false;
        }
        self.clicked = true;
        true
    }

    /// Mark the box as released. Returns `false`, and does nothing, if it was
    /// not pressed.
    pub fn release(&mut self) -> bool {
        if !self.clicked {
            return false;
        }
        self.clicked = false;
        true
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }
}

impl fmt::Display for AnchoredBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolve() {
            Ok(rect) => write!(
                f,
                "AnchoredBox(topleft={}, size={})",
                rect.pos(),
                rect.size()
            ),
            Err(e) => write!(f, "AnchoredBox(<{}>)", e),
        }
    }
}

impl fmt::Debug for AnchoredBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssignmentError;
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn centered() -> AnchoredBox {
        AnchoredBox::new((100, 200), (50, 20), Anchor::center())
    }

    fn square() -> AnchoredBox {
        AnchoredBox::new((0, 0), (100, 100), Anchor::top_left())
    }

    #[test]
    fn center_anchor_projections() {
        let b = centered();

        assert_eq!(b.left().unwrap(), 75);
        assert_eq!(b.right().unwrap(), 125);
        assert_eq!(b.top().unwrap(), 190);
        assert_eq!(b.bottom().unwrap(), 210);

        assert_eq!(b.x().unwrap(), b.left().unwrap());
        assert_eq!(b.y().unwrap(), b.top().unwrap());
        assert_eq!(b.width().unwrap(), 50);
        assert_eq!(b.height().unwrap(), 20);
        assert_eq!(b.center_x().unwrap(), 100);
        assert_eq!(b.center_y().unwrap(), 200);

        assert_eq!(b.top_left().unwrap(), Point::new(75, 190));
        assert_eq!(b.top_right().unwrap(), Point::new(125, 190));
        assert_eq!(b.mid_top().unwrap(), Point::new(100, 190));
        assert_eq!(b.mid_left().unwrap(), Point::new(75, 200));
        assert_eq!(b.center().unwrap(), Point::new(100, 200));
        assert_eq!(b.mid_right().unwrap(), Point::new(125, 200));
        assert_eq!(b.mid_bottom().unwrap(), Point::new(100, 210));
        assert_eq!(b.bottom_right().unwrap(), Point::new(125, 210));
        assert_eq!(b.bottom_left().unwrap(), Point::new(75, 210));
    }

    #[test]
    fn top_left_anchor() {
        let b = AnchoredBox::new((1, 1), (10, 10), Anchor::top_left());

        assert_eq!(b.center().unwrap(), Point::new(6, 6));
        assert_eq!(b.height().unwrap(), 10);
    }

    #[test]
    fn change_anchor_keeps_position() {
        let mut b = centered();
        assert_eq!(b.center().unwrap(), Point::new(100, 200));

        b.set_anchor(Anchor::top_left());
        assert_eq!(b.top_left().unwrap(), Point::new(100, 200));
        assert_eq!(b.center().unwrap(), Point::new(125, 210));
    }

    #[test]
    fn place_reanchors() {
        let mut b = centered();
        b.place(Anchor::top_left(), (0, 0));

        assert_eq!(b.anchor(), Anchor::top_left());
        assert_eq!(b.center().unwrap(), Point::new(25, 10));
    }

    #[test]
    fn set_attr_on_anchor_point_reanchors() {
        let mut b = centered();
        b.set_attr(Attr::Point(Anchor::top_left()), (0, 0)).unwrap();

        assert_eq!(b.anchor(), Anchor::top_left());
        assert_eq!(b.get_attr(Attr::Point(Anchor::center())).unwrap(), AttrValue::pair(25, 10));
    }

    #[test]
    fn projections_are_read_only() {
        let names = [
            "width", "height", "w", "h", "x", "y", "top", "left", "bottom", "right", "centerx",
            "centery",
        ];

        let mut b = centered();
        for name in names.iter() {
            let attr: Attr = name.parse().unwrap();
            assert_eq!(
                b.set_attr(attr, 10),
                Err(Error::ReadOnlyAttribute(attr.name()))
            );
        }
        // Nothing moved.
        assert_eq!(b.center().unwrap(), Point::new(100, 200));
        assert_eq!(b.anchor(), Anchor::center());
    }

    #[test]
    fn malformed_point_assignment() {
        let mut b = centered();
        let center = Attr::Point(Anchor::center());

        assert_eq!(
            b.set_attr(center, 5),
            Err(Error::InvalidAssignment {
                attr: "center",
                reason: AssignmentError::NotATuple
            })
        );
        assert_eq!(
            b.set_attr(center, (0, 0, 0)),
            Err(Error::InvalidAssignment {
                attr: "center",
                reason: AssignmentError::WrongArity(3)
            })
        );
        assert_eq!(b.center().unwrap(), Point::new(100, 200));
    }

    #[test]
    fn strict_mode_refuses_floats() {
        let mut lax = centered();
        lax.set_attr(Attr::Point(Anchor::center()), (10.7, 20.2)).unwrap();
        assert_eq!(lax.center().unwrap(), Point::new(10, 20));

        let mut strict = centered().strict(true);
        assert_eq!(
            strict.set_attr(Attr::Point(Anchor::center()), (10.7, 20.2)),
            Err(Error::InvalidAssignment {
                attr: "center",
                reason: AssignmentError::NotInteger
            })
        );
    }

    #[test]
    fn malformed_size_assignment() {
        let mut b = centered();

        assert!(matches!(
            b.set_attr(Attr::Size, 0),
            Err(Error::InvalidAssignment {
                reason: AssignmentError::NotATuple,
                ..
            })
        ));
        assert!(matches!(
            b.set_attr(Attr::Size, (0, 0, 0)),
            Err(Error::InvalidAssignment {
                reason: AssignmentError::WrongArity(3),
                ..
            })
        ));
        assert_eq!(
            b.set_attr(Attr::Size, (-1, 4)),
            Err(Error::InvalidGeometry(Size::new(-1, 4)))
        );
    }

    #[test]
    fn set_size_keeps_position() {
        let mut b = square();
        b.set_attr(Attr::Size, (10, 10)).unwrap();

        assert_eq!(b.width().unwrap(), 10);
        assert_eq!(b.height().unwrap(), 10);
        assert_eq!(b.position(), Point::new(0, 0));
    }

    #[test]
    fn anchor_by_name() {
        let mut b = centered();

        for anchor in Anchor::ALL.iter() {
            b.set_attr(Attr::Anchor, anchor.name()).unwrap();
            assert_eq!(b.anchor(), *anchor);
            assert_eq!(b.get_attr(Attr::Anchor).unwrap(), AttrValue::from(*anchor));
        }

        for bad in &["topleft ", "BANANA", "TROL", "CENTER", "apolo"] {
            assert_eq!(
                b.set_attr(Attr::Anchor, *bad),
                Err(Error::InvalidAnchor(bad.to_string()))
            );
        }
        assert!(matches!(
            b.set_attr(Attr::Anchor, 42),
            Err(Error::InvalidAnchor(_))
        ));
    }

    #[test]
    fn position_producer_is_live() {
        let screen = Rc::new(Cell::new(Point::new(100, 100)));
        let s = Rc::clone(&screen);
        let b = AnchoredBox::new(
            Value::computed(move || s.get()),
            (10, 10),
            Anchor::bottom_right(),
        );

        assert_eq!(b.top_left().unwrap(), Point::new(90, 90));

        screen.set(Point::new(200, 200));
        assert_eq!(b.top_left().unwrap(), Point::new(190, 190));
    }

    #[test]
    fn size_producer_is_live() {
        let screen = Rc::new(Cell::new(Size::new(100, 100)));
        let s = Rc::clone(&screen);
        let b = AnchoredBox::new(
            (0, 0),
            Value::computed(move || {
                let screen = s.get();
                Size::new(screen.width / 2, screen.height / 2)
            }),
            Anchor::top_left(),
        );

        assert_eq!(b.size().unwrap(), Size::new(50, 50));

        screen.set(Size::new(200, 200));
        assert_eq!(b.bottom_right().unwrap(), Point::new(100, 100));
    }

    #[test]
    fn anchor_producer_is_live() {
        let anchor = Rc::new(Cell::new(Anchor::center()));
        let a = Rc::clone(&anchor);
        let b = AnchoredBox::new((0, 0), (10, 10), Value::computed(move || a.get()));

        assert_eq!(b.anchor(), Anchor::center());
        anchor.set(Anchor::top_left());
        assert_eq!(b.anchor(), Anchor::top_left());
        assert_eq!(b.center().unwrap(), Point::new(5, 5));
    }

    #[test]
    fn negative_size_is_invalid_geometry() {
        let b = AnchoredBox::new(
            (0, 0),
            Value::computed(|| Size::new(-5, 10)),
            Anchor::center(),
        );

        assert_eq!(b.width(), Err(Error::InvalidGeometry(Size::new(-5, 10))));
        assert_eq!(b.contains((0, 0)), Err(Error::InvalidGeometry(Size::new(-5, 10))));
    }

    #[test]
    fn geometry_at_the_i32_limits() {
        let near_max = AnchoredBox::new((i32::MAX - 5, 0), (10, 10), Anchor::top_left());
        let overflow = Error::GeometryOverflow {
            position: Point::new(i32::MAX - 5, 0),
            size: Size::new(10, 10),
            anchor: Anchor::top_left(),
        };
        assert_eq!(near_max.right(), Err(overflow.clone()));
        assert_eq!(near_max.contains((0, 0)), Err(overflow));

        let near_min = AnchoredBox::new((i32::MIN, 0), (10, 10), Anchor::center());
        assert!(matches!(
            near_min.resolve(),
            Err(Error::GeometryOverflow { .. })
        ));
        assert!(matches!(
            near_min.get_attr(Attr::CenterX),
            Err(Error::GeometryOverflow { .. })
        ));

        // A box touching the limits exactly still resolves.
        let exact = AnchoredBox::new((i32::MAX, i32::MIN), (10, 10), Anchor::top_right());
        assert_eq!(exact.right().unwrap(), i32::MAX);
        assert_eq!(exact.top().unwrap(), i32::MIN);
        assert_eq!(exact.bottom_right().unwrap(), Point::new(i32::MAX, i32::MIN + 10));
    }

    #[test]
    fn out_of_range_assignment_is_refused() {
        let mut b = centered();
        let top_left = Attr::Point(Anchor::top_left());

        assert_eq!(
            b.set_attr(top_left, AttrValue::pair(4_294_967_296i64, 5)),
            Err(Error::InvalidAssignment {
                attr: "topleft",
                reason: AssignmentError::OutOfRange
            })
        );
        assert_eq!(
            b.set_attr(top_left, (1e20, 0.0)),
            Err(Error::InvalidAssignment {
                attr: "topleft",
                reason: AssignmentError::OutOfRange
            })
        );
        assert_eq!(
            b.set_attr(top_left, (1.0, f64::NAN)),
            Err(Error::InvalidAssignment {
                attr: "topleft",
                reason: AssignmentError::NotFinite
            })
        );
        assert_eq!(
            b.set_attr(Attr::Size, (f64::INFINITY, 1.0)),
            Err(Error::InvalidAssignment {
                attr: "size",
                reason: AssignmentError::NotFinite
            })
        );

        // Nothing moved.
        assert_eq!(b.anchor(), Anchor::center());
        assert_eq!(b.center().unwrap(), Point::new(100, 200));
    }

    #[test]
    fn containment_is_inclusive() {
        let b = square();

        for p in &[(0, 0), (50, 50), (100, 100), (23, 0), (0, 23), (100, 23), (23, 100), (50, 0)] {
            assert!(b.contains(*p).unwrap(), "{:?} should be inside", p);
        }
        for p in &[(-1, -1), (-1, 0), (101, 100), (23, -1), (0, 101), (23, 101)] {
            assert!(!b.contains(*p).unwrap(), "{:?} should be outside", p);
        }
    }

    #[test]
    fn focus_and_click() {
        let mut b = centered();
        assert!(!b.is_focused());
        b.focus();
        assert!(b.is_focused());
        b.unfocus();
        assert!(!b.is_focused());

        assert!(!b.is_clicked());
        assert!(b.click());
        assert!(!b.click());
        assert!(b.is_clicked());
        assert!(b.release());
        assert!(!b.release());
        assert!(!b.is_clicked());
    }

    #[test]
    fn release_without_click_is_noop() {
        let mut b = centered();
        assert!(!b.release());
        assert!(!b.is_clicked());
    }

    #[test]
    fn bounds_and_display() {
        let b = centered();

        assert_eq!(b.as_bounds().unwrap(), (Point::new(100, 200), Size::new(50, 20)));

        let s = b.to_string();
        assert_eq!(s, format!("{:?}", b));
        assert!(s.contains("AnchoredBox"));
        assert!(s.contains(&b.x().unwrap().to_string()));
        assert!(s.contains(&b.y().unwrap().to_string()));
        assert!(s.contains(&b.width().unwrap().to_string()));
        assert!(s.contains(&b.height().unwrap().to_string()));
    }

    fn any_anchor() -> impl Strategy<Value = Anchor> {
        (0..9usize).prop_map(|i| Anchor::ALL[i])
    }

    proptest! {
        #[test]
        fn every_projection_agrees_with_the_anchor(
            x in -1000i32..1000,
            y in -1000i32..1000,
            w in 0i32..500,
            h in 0i32..500,
            anchor in any_anchor(),
        ) {
            let b = AnchoredBox::new((x, y), (w, h), anchor);
            let rect = b.resolve().unwrap();

            prop_assert_eq!(b.point(anchor).unwrap(), Point::new(x, y));
            prop_assert_eq!(rect.size(), Size::new(w, h));

            prop_assert_eq!(b.left().unwrap(), rect.x());
            prop_assert_eq!(b.right().unwrap(), rect.x() + w);
            prop_assert_eq!(b.top().unwrap(), rect.y());
            prop_assert_eq!(b.bottom().unwrap(), rect.y() + h);

            for other in Anchor::ALL.iter() {
                prop_assert_eq!(b.point(*other).unwrap(), rect.pos() + other.offset(rect.size()));
            }
        }
    }
}
