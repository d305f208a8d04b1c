use crate::error::Error;
use crate::event::{Event, EventCapturedStatus};
use crate::primitive::Surface;
use crate::{AnchoredBox, Point};

/// A drawable, interactive element built on one [`AnchoredBox`].
pub trait Widget {
    fn anchored_box(&self) -> &AnchoredBox;

    fn anchored_box_mut(&mut self) -> &mut AnchoredBox;

    /// Interpret one input event.
    #[allow(unused)]
    fn on_event(&mut self, event: &Event) -> Result<EventCapturedStatus, Error> {
        Ok(EventCapturedStatus::NotCaptured)
    }

    /// Draw the widget at its currently resolved position.
    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error>;

    fn contains(&self, point: Point) -> Result<bool, Error> {
        self.anchored_box().contains(point)
    }

    fn focus(&mut self) {
        self.anchored_box_mut().focus();
    }

    fn unfocus(&mut self) {
        self.anchored_box_mut().unfocus();
    }

    fn is_focused(&self) -> bool {
        self.anchored_box().is_focused()
    }
}
