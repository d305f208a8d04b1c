use crate::error::Error;
use crate::event::{Event, EventCapturedStatus, Key, KeyState, Modifiers};
use crate::primitive::Surface;
use crate::widget::Widget;

type Action = Box<dyn FnMut()>;

/// Cycles keyboard focus through a list of widgets.
///
/// Exactly one widget is focused whenever the list is not empty. Tab moves
/// to the next widget, Shift+Tab to the previous one, both wrapping around.
/// Every other event goes to all widgets in order until one captures it.
pub struct FocusSelector {
    items: Vec<Box<dyn Widget>>,
    selected: Option<usize>,

    on_select: Vec<Option<Action>>,
    on_unselect: Vec<Option<Action>>,
}

impl FocusSelector {
    /// Take ownership of `items` and focus the first one.
    pub fn new(items: Vec<Box<dyn Widget>>) -> Self {
        let mut items = items;
        for item in items.iter_mut() {
            item.unfocus();
        }
        let selected = if items.is_empty() {
            None
        } else {
            items[0].focus();
            Some(0)
        };

        let mut on_select = Vec::new();
        let mut on_unselect = Vec::new();
        on_select.resize_with(items.len(), || None);
        on_unselect.resize_with(items.len(), || None);

        Self {
            items,
            selected,
            on_select,
            on_unselect,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&dyn Widget> {
        self.selected.map(|i| self.items[i].as_ref())
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn get(&self, index: usize) -> Option<&dyn Widget> {
        self.items.get(index).map(|w| w.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Widget + 'static)> {
        self.items.get_mut(index).map(|w| w.as_mut())
    }

    /// Focus the widget at `index`, wrapping around the list.
    pub fn select(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        let index = index % self.items.len();

        if let Some(old) = self.selected {
            if let Some(action) = self.on_unselect[old].as_mut() {
                action();
            }
            self.items[old].unfocus();
        }

        self.selected = Some(index);
        self.items[index].focus();
        if let Some(action) = self.on_select[index].as_mut() {
            action();
        }
    }

    pub fn next(&mut self) {
        if let Some(i) = self.selected {
            self.select(i + 1);
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.selected {
            self.select(i + self.items.len() - 1);
        }
    }

    /// Run `action` every time the widget at `index` gains focus. Replaces
    /// any previous action. Out of range indices are ignored.
    pub fn on_select<F: FnMut() + 'static>(&mut self, index: usize, action: F) {
        if let Some(slot) = self.on_select.get_mut(index) {
            *slot = Some(Box::new(action));
        }
    }

    /// Run `action` every time the widget at `index` loses focus.
    pub fn on_unselect<F: FnMut() + 'static>(&mut self, index: usize, action: F) {
        if let Some(slot) = self.on_unselect.get_mut(index) {
            *slot = Some(Box::new(action));
        }
    }

    pub fn on_event(&mut self, event: &Event) -> Result<EventCapturedStatus, Error> {
        if let Event::Keyboard(key) = event {
            if key.key == Key::Tab && !self.items.is_empty() {
                if key.state == KeyState::Down {
                    if key.modifiers.contains(Modifiers::SHIFT) {
                        self.prev();
                    } else {
                        self.next();
                    }
                }
                return Ok(EventCapturedStatus::Captured { repaint: true });
            }
        }

        for item in self.items.iter_mut() {
            let status = item.on_event(event)?;
            if status.is_captured() {
                return Ok(status);
            }
        }

        Ok(EventCapturedStatus::NotCaptured)
    }

    pub fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error> {
        for item in self.items.iter_mut() {
            item.render(surface)?;
        }
        Ok(())
    }
}
