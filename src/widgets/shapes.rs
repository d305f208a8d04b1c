//! Simple shapes to draw, or to attach to other widgets through computed
//! positions.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Error;
use crate::primitive::{Primitive, Surface};
use crate::widget::Widget;
use crate::{Anchor, AnchoredBox, Color, Point, Size, Value};

/// How a [`Dot`] is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotShape {
    Circle,
    Cross,
}

impl Default for DotShape {
    fn default() -> Self {
        DotShape::Circle
    }
}

/// A marker centered on its position.
pub struct Dot {
    bx: AnchoredBox,
    radius: i32,
    color: Color,
    shape: DotShape,
}

impl Dot {
    pub fn new(position: impl Into<Value<Point>>, radius: i32) -> Self {
        Self {
            bx: AnchoredBox::new(position, Size::new(radius, radius), Anchor::center()),
            radius,
            color: Color::TURQUOISE,
            shape: DotShape::default(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_shape(mut self, shape: DotShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Euclidean distance from the dot's position to `point`.
    pub fn distance_to(&self, point: impl Into<Point>) -> f64 {
        let point = point.into();
        let pos = self.bx.position();
        let dx = f64::from(point.x) - f64::from(pos.x);
        let dy = f64::from(point.y) - f64::from(pos.y);
        dx.hypot(dy)
    }
}

impl Widget for Dot {
    fn anchored_box(&self) -> &AnchoredBox {
        &self.bx
    }

    fn anchored_box_mut(&mut self) -> &mut AnchoredBox {
        &mut self.bx
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error> {
        match self.shape {
            DotShape::Circle => surface.draw(Primitive::Circle {
                center: self.bx.center()?,
                radius: self.radius,
                color: self.color,
            }),
            DotShape::Cross => {
                surface.draw(Primitive::Line {
                    start: self.bx.mid_left()?,
                    end: self.bx.mid_right()?,
                    width: 1,
                    color: self.color,
                });
                surface.draw(Primitive::Line {
                    start: self.bx.mid_top()?,
                    end: self.bx.mid_bottom()?,
                    width: 1,
                    color: self.color,
                });
            }
        }

        Ok(())
    }
}

type Ends = Rc<RefCell<[Value<Point>; 2]>>;

fn read_ends(ends: &Ends) -> (Point, Point) {
    let ends = ends.borrow();
    (ends[0].get(), ends[1].get())
}

/// A segment between two points, either of which may be a producer.
///
/// The box is the bounding box of the two ends: its position and size are
/// producers reading the ends, so it follows them without any update call.
/// Replacing the box's position or size directly detaches it from the ends.
pub struct Line {
    bx: AnchoredBox,
    ends: Ends,
    color: Color,
    width: i32,
}

impl Line {
    pub fn new(start: impl Into<Value<Point>>, end: impl Into<Value<Point>>) -> Self {
        let ends: Ends = Rc::new(RefCell::new([start.into(), end.into()]));

        let e = Rc::clone(&ends);
        let position = Value::computed(move || {
            let (a, b) = read_ends(&e);
            Point::new(a.x.min(b.x), a.y.min(b.y))
        });
        let e = Rc::clone(&ends);
        let size = Value::computed(move || {
            let (a, b) = read_ends(&e);
            Size::new(
                a.x.max(b.x).saturating_sub(a.x.min(b.x)),
                a.y.max(b.y).saturating_sub(a.y.min(b.y)),
            )
        });

        Self {
            bx: AnchoredBox::new(position, size, Anchor::top_left()),
            ends,
            color: Color::PURPLE,
            width: 1,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    pub fn start(&self) -> Point {
        self.ends.borrow()[0].get()
    }

    pub fn end(&self) -> Point {
        self.ends.borrow()[1].get()
    }

    pub fn set_start(&mut self, start: impl Into<Value<Point>>) {
        self.ends.borrow_mut()[0] = start.into();
    }

    pub fn set_end(&mut self, end: impl Into<Value<Point>>) {
        self.ends.borrow_mut()[1] = end.into();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Widget for Line {
    fn anchored_box(&self) -> &AnchoredBox {
        &self.bx
    }

    fn anchored_box_mut(&mut self) -> &mut AnchoredBox {
        &mut self.bx
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error> {
        let (start, end) = read_ends(&self.ends);
        surface.draw(Primitive::Line {
            start,
            end,
            width: self.width,
            color: self.color,
        });
        Ok(())
    }
}

/// How a [`Rectangle`] is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectStyle {
    Filled,
    /// Outline only, `width` pixels thick.
    Border { width: i32 },
    Rounded { radius: i32 },
}

impl Default for RectStyle {
    fn default() -> Self {
        RectStyle::Filled
    }
}

/// A plain rectangle, top-left anchored by default.
pub struct Rectangle {
    bx: AnchoredBox,
    color: Color,
    style: RectStyle,
}

impl Rectangle {
    pub fn new(position: impl Into<Value<Point>>, size: impl Into<Value<Size>>) -> Self {
        Self {
            bx: AnchoredBox::new(position, size, Anchor::top_left()),
            color: Color::PINK,
            style: RectStyle::default(),
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<Value<Anchor>>) -> Self {
        self.bx.set_anchor(anchor);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_style(mut self, style: RectStyle) -> Self {
        self.style = style;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn style(&self) -> RectStyle {
        self.style
    }
}

impl Widget for Rectangle {
    fn anchored_box(&self) -> &AnchoredBox {
        &self.bx
    }

    fn anchored_box_mut(&mut self) -> &mut AnchoredBox {
        &mut self.bx
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error> {
        let rect = self.bx.resolve()?;
        let color = self.color;

        surface.draw(match self.style {
            RectStyle::Filled => Primitive::FillRect { rect, color },
            RectStyle::Border { width } => Primitive::StrokeRect { rect, width, color },
            RectStyle::Rounded { radius } => Primitive::RoundedRect {
                rect,
                radius,
                color,
            },
        });

        Ok(())
    }
}
