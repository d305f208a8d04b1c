use crate::error::Error;
use crate::event::{Event, EventCapturedStatus, Key, KeyState, Modifiers};
use crate::primitive::{Primitive, Surface};
use crate::widget::Widget;
use crate::{Color, Point, Rect, Size};

/// Handle to a widget added to a [`Window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

type Condition = Box<dyn Fn() -> bool>;

struct Entry {
    id: WidgetId,
    widget: Box<dyn Widget>,
    condition: Condition,
}

/// The top-level container of an application.
///
/// Widgets are updated and drawn in the order they were added, and only
/// while their condition holds. Every active widget sees every event,
/// whether or not an earlier one captured it. Escape and Alt+F4 stop the
/// window.
pub struct Window {
    widgets: Vec<Entry>,
    next_id: u64,

    size: Size,
    background: Color,
    running: bool,
}

impl Window {
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            widgets: Vec::new(),
            next_id: 0,
            size: size.into(),
            background: Color::WHITE,
            running: true,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Called by the event loop when the host window was resized.
    pub fn set_size(&mut self, size: impl Into<Size>) {
        self.size = size.into();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn close(&mut self) {
        log::debug!("closing window");
        self.running = false;
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Add a widget that is always active.
    pub fn add(&mut self, widget: impl Widget + 'static) -> WidgetId {
        self.add_if(widget, || true)
    }

    /// Add a widget that is only updated and drawn while `condition`
    /// returns `true`.
    pub fn add_if<C>(&mut self, widget: impl Widget + 'static, condition: C) -> WidgetId
    where
        C: Fn() -> bool + 'static,
    {
        let id = WidgetId(self.next_id);
        self.next_id += 1;

        self.widgets.push(Entry {
            id,
            widget: Box::new(widget),
            condition: Box::new(condition),
        });

        id
    }

    /// Take a widget out of the window. Returns `None` if it was already
    /// removed.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let index = self.widgets.iter().position(|entry| entry.id == id)?;
        Some(self.widgets.remove(index).widget)
    }

    pub fn get(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.widgets
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.widget.as_ref())
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget + 'static)> {
        self.widgets
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| entry.widget.as_mut())
    }

    /// Whether the widget exists and its condition currently holds.
    pub fn is_active(&self, id: WidgetId) -> bool {
        self.widgets
            .iter()
            .any(|entry| entry.id == id && (entry.condition)())
    }

    pub fn on_event(&mut self, event: &Event) -> Result<EventCapturedStatus, Error> {
        if let Event::Keyboard(key) = event {
            let alt_f4 = key.key == Key::F4 && key.modifiers.contains(Modifiers::ALT);
            if key.state == KeyState::Down && (key.key == Key::Escape || alt_f4) {
                self.close();
                return Ok(EventCapturedStatus::Captured { repaint: false });
            }
        }

        let mut status = EventCapturedStatus::NotCaptured;
        for entry in self.widgets.iter_mut() {
            if !(entry.condition)() {
                continue;
            }

            status = match (status, entry.widget.on_event(event)?) {
                (
                    EventCapturedStatus::Captured { repaint: a },
                    EventCapturedStatus::Captured { repaint: b },
                ) => EventCapturedStatus::Captured { repaint: a || b },
                (EventCapturedStatus::NotCaptured, other) => other,
                (captured, EventCapturedStatus::NotCaptured) => captured,
            };
        }

        Ok(status)
    }

    /// Fill the background, then draw every active widget.
    pub fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error> {
        surface.draw(Primitive::FillRect {
            rect: Rect::new(Point::ORIGIN, self.size),
            color: self.background,
        });

        for entry in self.widgets.iter_mut() {
            if (entry.condition)() {
                entry.widget.render(surface)?;
            }
        }

        Ok(())
    }
}
