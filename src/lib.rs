//! Widgets positioned by anchored rectangles.
//!
//! Every widget owns an [`AnchoredBox`]: a position, a size, and an anchor
//! naming which of the nine reference points of the rectangle sits at the
//! position. Any of the three can be a [`Value::Computed`] producer, in
//! which case the geometry is re-resolved on every read.

mod anchor;
mod anchored_box;
mod color;
mod error;
mod settings;
mod value;
mod widget;

pub mod attr;
pub mod event;
pub mod font;
pub mod primitive;
pub mod size;
pub mod widgets;

pub use anchor::{Anchor, HAlign, VAlign};
pub use anchored_box::AnchoredBox;
pub use attr::{Attr, AttrValue};
pub use color::Color;
pub use error::{AssignmentError, Error};
pub use event::{Event, EventCapturedStatus, MouseButtonState, MouseEvent};
pub use font::Font;
pub use primitive::{Primitive, RecordingSurface, SingleLineText, Surface};
pub use settings::Settings;
pub use size::{Point, Rect, Size};
pub use value::Value;
pub use widget::Widget;
pub use widgets::{
    Button, CallMode, Dot, DotShape, FocusSelector, Line, Menu, MenuCategory, MenuElement,
    RectStyle, Rectangle, Slider, Text, WidgetId, Window,
};
