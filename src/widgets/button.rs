use crate::error::Error;
use crate::event::{Event, EventCapturedStatus, Key, KeyState, MouseButtonState};
use crate::primitive::{Primitive, SingleLineText, Surface};
use crate::widget::Widget;
use crate::{Anchor, AnchoredBox, Color, Font, HAlign, Point, Settings, Size, VAlign, Value};

/// When a button runs its callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMode {
    /// As soon as the button goes down.
    OnPress,
    /// When the button comes back up over the widget. A press that is
    /// dragged off the button and released elsewhere does nothing.
    OnRelease,
}

impl Default for CallMode {
    fn default() -> Self {
        CallMode::OnPress
    }
}

/// A clickable button with a text label.
pub struct Button {
    bx: AnchoredBox,

    label: String,
    color: Color,
    color_pressed: Color,
    font: Font,
    contrast_threshold: u8,

    call_mode: CallMode,
    callback: Box<dyn FnMut()>,
}

impl Button {
    /// A center-anchored button.
    pub fn new<F>(
        settings: &Settings,
        callback: F,
        position: impl Into<Value<Point>>,
        size: impl Into<Value<Size>>,
        label: impl Into<String>,
    ) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            bx: AnchoredBox::new(position, size, Anchor::center())
                .strict(settings.strict_assignment),
            label: label.into(),
            color: Color::GREEN,
            color_pressed: Color::GREEN.halved(),
            font: settings.default_font.clone(),
            contrast_threshold: settings.contrast_threshold,
            call_mode: CallMode::default(),
            callback: Box::new(callback),
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<Value<Anchor>>) -> Self {
        self.bx.set_anchor(anchor);
        self
    }

    /// Set the resting color. The pressed color becomes this one, halved.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.color_pressed = color.halved();
        self
    }

    pub fn with_pressed_color(mut self, color: Color) -> Self {
        self.color_pressed = color;
        self
    }

    pub fn with_call_mode(mut self, call_mode: CallMode) -> Self {
        self.call_mode = call_mode;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn call_mode(&self) -> CallMode {
        self.call_mode
    }

    pub fn is_pressed(&self) -> bool {
        self.bx.is_clicked()
    }

    /// Push the button down. Returns `false` if it was already down, in
    /// which case the callback is not run again.
    pub fn press(&mut self) -> bool {
        if !self.bx.click() {
            return false;
        }
        if self.call_mode == CallMode::OnPress {
            self.fire();
        }
        true
    }

    /// Let the button up. Returns `false` if it was not down.
    pub fn release(&mut self) -> bool {
        if !self.bx.release() {
            return false;
        }
        if self.call_mode == CallMode::OnRelease {
            self.fire();
        }
        true
    }

    /// Let the button up without running an `OnRelease` callback.
    pub fn cancel(&mut self) -> bool {
        self.bx.release()
    }

    fn fire(&mut self) {
        log::debug!("button {:?} activated", self.label);
        (self.callback)();
    }

    fn current_color(&self) -> Color {
        if self.bx.is_clicked() {
            self.color_pressed
        } else {
            self.color
        }
    }
}

impl Widget for Button {
    fn anchored_box(&self) -> &AnchoredBox {
        &self.bx
    }

    fn anchored_box_mut(&mut self) -> &mut AnchoredBox {
        &mut self.bx
    }

    fn on_event(&mut self, event: &Event) -> Result<EventCapturedStatus, Error> {
        let changed = match event {
            Event::Mouse(mouse) => match mouse.left_button {
                MouseButtonState::JustPressed if self.bx.contains(mouse.position)? => {
                    self.press()
                }
                MouseButtonState::JustUnpressed if self.bx.is_clicked() => {
                    if self.bx.contains(mouse.position)? {
                        self.release()
                    } else {
                        self.cancel()
                    }
                }
                _ => return Ok(EventCapturedStatus::NotCaptured),
            },
            Event::Keyboard(key) if self.bx.is_focused() => {
                let activates = matches!(&key.key, Key::Enter)
                    || matches!(&key.key, Key::Character(c) if c.as_str() == " ");
                if !activates {
                    return Ok(EventCapturedStatus::NotCaptured);
                }
                match key.state {
                    KeyState::Down => self.press(),
                    KeyState::Up => self.release(),
                }
            }
            Event::Keyboard(_) => return Ok(EventCapturedStatus::NotCaptured),
        };

        Ok(EventCapturedStatus::Captured { repaint: changed })
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error> {
        let rect = self.bx.resolve()?;
        let color = self.current_color();

        surface.draw(Primitive::FillRect { rect, color });
        surface.draw(Primitive::SingleLineText(SingleLineText {
            text: self.label.clone(),
            font_color: color.bw_contrasted(self.contrast_threshold),
            background: Some(color),
            font: self.font.clone(),
            position: rect.center_pos(),
            h_align: HAlign::Center,
            v_align: VAlign::Center,
        }));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyboardEvent, MouseEvent};
    use crate::primitive::RecordingSurface;
    use crate::Rect;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_button(call_mode: CallMode) -> (Button, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let button = Button::new(
            &Settings::default(),
            move || c.set(c.get() + 1),
            (300, 200),
            (60, 40),
            "RED",
        )
        .with_anchor(Anchor::bottom_right())
        .with_call_mode(call_mode);

        (button, calls)
    }

    fn key(key: Key, state: KeyState) -> Event {
        Event::Keyboard(KeyboardEvent {
            key,
            state,
            ..Default::default()
        })
    }

    #[test]
    fn double_press_fires_once() {
        let (mut button, calls) = counting_button(CallMode::OnPress);

        assert!(button.press());
        assert!(!button.press());
        assert!(button.is_pressed());
        assert_eq!(calls.get(), 1);

        assert!(button.release());
        assert!(!button.release());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn release_mode_fires_on_release() {
        let (mut button, calls) = counting_button(CallMode::OnRelease);

        button.press();
        assert_eq!(calls.get(), 0);
        button.release();
        assert_eq!(calls.get(), 1);

        // A release without a press does nothing.
        button.release();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn mouse_press_inside_only() {
        let (mut button, calls) = counting_button(CallMode::OnPress);

        let outside = Event::Mouse(MouseEvent::left_pressed((10, 10)));
        assert_eq!(
            button.on_event(&outside).unwrap(),
            EventCapturedStatus::NotCaptured
        );
        assert_eq!(calls.get(), 0);

        // Bottom-right anchored at (300, 200): the box spans 240..=300 x 160..=200.
        let edge = Event::Mouse(MouseEvent::left_pressed((300, 200)));
        assert_eq!(
            button.on_event(&edge).unwrap(),
            EventCapturedStatus::Captured { repaint: true }
        );
        assert_eq!(calls.get(), 1);

        // Overlapping press events do not fire twice.
        assert_eq!(
            button.on_event(&edge).unwrap(),
            EventCapturedStatus::Captured { repaint: false }
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn release_outside_cancels() {
        let (mut button, calls) = counting_button(CallMode::OnRelease);

        button
            .on_event(&Event::Mouse(MouseEvent::left_pressed((250, 180))))
            .unwrap();
        button
            .on_event(&Event::Mouse(MouseEvent::left_released((0, 0))))
            .unwrap();

        assert!(!button.is_pressed());
        assert_eq!(calls.get(), 0);

        button
            .on_event(&Event::Mouse(MouseEvent::left_pressed((250, 180))))
            .unwrap();
        button
            .on_event(&Event::Mouse(MouseEvent::left_released((251, 181))))
            .unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn keyboard_needs_focus() {
        let (mut button, calls) = counting_button(CallMode::OnPress);

        let enter = key(Key::Enter, KeyState::Down);
        assert!(!button.on_event(&enter).unwrap().is_captured());

        button.focus();
        assert!(button.on_event(&enter).unwrap().is_captured());
        assert_eq!(calls.get(), 1);
        button.on_event(&key(Key::Enter, KeyState::Up)).unwrap();
        assert!(!button.is_pressed());

        let other = key(Key::Character("a".to_string()), KeyState::Down);
        assert!(!button.on_event(&other).unwrap().is_captured());
    }

    #[test]
    fn follows_moving_anchor_point() {
        let (mut button, _) = counting_button(CallMode::OnPress);
        button.anchored_box_mut().place(Anchor::top_right(), (300, 50));

        assert_eq!(
            button.anchored_box().resolve().unwrap(),
            Rect::new(Point::new(240, 50), Size::new(60, 40))
        );
    }

    #[test]
    fn render_uses_pressed_color() {
        let (mut button, _) = counting_button(CallMode::OnPress);
        let button_rect = Rect::new(Point::new(240, 160), Size::new(60, 40));
        let mut surface = RecordingSurface::new();

        button.render(&mut surface).unwrap();
        assert_eq!(
            surface.primitives[0],
            Primitive::FillRect {
                rect: button_rect,
                color: Color::GREEN
            }
        );
        match &surface.primitives[1] {
            Primitive::SingleLineText(text) => {
                assert_eq!(text.text, "RED");
                assert_eq!(text.position, Point::new(270, 180));
                assert_eq!(text.font_color, Color::WHITE);
            }
            other => panic!("expected text, got {:?}", other),
        }

        surface.clear();
        button.press();
        button.render(&mut surface).unwrap();
        assert_eq!(
            surface.primitives[0],
            Primitive::FillRect {
                rect: button_rect,
                color: Color::GREEN.halved()
            }
        );
    }
}
