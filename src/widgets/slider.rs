use crate::error::Error;
use crate::event::{Event, EventCapturedStatus, Key, KeyState, KeyboardEvent, MouseButtonState};
use crate::primitive::{Primitive, SingleLineText, Surface};
use crate::widget::Widget;
use crate::{Anchor, AnchoredBox, Color, Font, HAlign, Point, Settings, Size, VAlign, Value};

/// A horizontal bar to pick a value in a range.
///
/// Pressing inside the bar grabs the cursor and dragging moves it, even
/// outside the bar, until the button is let go. A focused slider also
/// steps with the arrow keys. The value is always inside `min..=max` and on a multiple of
/// `step` away from `min`.
pub struct Slider {
    bx: AnchoredBox,

    min: f64,
    max: f64,
    step: f64,
    value: f64,

    color: Color,
    bg_color: Color,
    show_value: bool,
    font_family: String,
    contrast_threshold: u8,

    on_change: Box<dyn FnMut(f64)>,
}

impl Slider {
    /// A center-anchored slider over `min..=max`, starting at `min`.
    pub fn new<F>(
        settings: &Settings,
        on_change: F,
        position: impl Into<Value<Point>>,
        size: impl Into<Value<Size>>,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let max = if max < min {
            log::warn!("slider range {}..{} is reversed, using an empty range", min, max);
            min
        } else {
            max
        };
        let step = if step > 0.0 { step } else { 1.0 };

        Self {
            bx: AnchoredBox::new(position, size, Anchor::center())
                .strict(settings.strict_assignment),
            min,
            max,
            step,
            value: min,
            color: Color::BLUE,
            bg_color: Color::LIGHT_GREY,
            show_value: true,
            font_family: settings.default_font.family.clone(),
            contrast_threshold: settings.contrast_threshold,
            on_change: Box::new(on_change),
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<Value<Anchor>>) -> Self {
        self.bx.set_anchor(anchor);
        self
    }

    pub fn with_colors(mut self, color: Color, bg_color: Color) -> Self {
        self.color = color;
        self.bg_color = bg_color;
        self
    }

    pub fn with_initial(mut self, value: f64) -> Self {
        self.value = self.snap(value);
        self
    }

    pub fn show_value(mut self, show_value: bool) -> Self {
        self.show_value = show_value;
        self
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Set the value, clamped into range and snapped to the step. Runs the
    /// change callback if the stored value moved.
    pub fn set_value(&mut self, value: f64) {
        let value = self.snap(value);
        if value != self.value {
            self.value = value;
            log::debug!("slider value changed to {}", value);
            (self.on_change)(value);
        }
    }

    /// The x coordinate of the cursor.
    pub fn value_px(&self) -> Result<i32, Error> {
        let rect = self.bx.resolve()?;
        let span = self.max - self.min;
        if span <= 0.0 {
            return Ok(rect.x());
        }

        let offset = f64::from(rect.width()) * (self.value - self.min) / span;
        Ok(rect.x() + offset.round() as i32)
    }

    /// Move the cursor to the x coordinate `px`, clamped to the bar.
    pub fn set_value_px(&mut self, px: i32) -> Result<(), Error> {
        let rect = self.bx.resolve()?;
        if rect.width() == 0 {
            self.set_value(self.min);
            return Ok(());
        }

        let px = px.max(rect.x()).min(rect.x2());
        let ratio = f64::from(px - rect.x()) / f64::from(rect.width());
        self.set_value(self.min + ratio * (self.max - self.min));

        Ok(())
    }

    fn snap(&self, value: f64) -> f64 {
        let value = value.max(self.min).min(self.max);
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Arrow keys move a focused slider by one step.
    fn on_key(&mut self, key: &KeyboardEvent) -> Result<EventCapturedStatus, Error> {
        if !self.bx.is_focused() || key.state != KeyState::Down {
            return Ok(EventCapturedStatus::NotCaptured);
        }

        let before = self.value;
        match key.key {
            Key::ArrowLeft | Key::ArrowDown => self.set_value(self.value - self.step),
            Key::ArrowRight | Key::ArrowUp => self.set_value(self.value + self.step),
            _ => return Ok(EventCapturedStatus::NotCaptured),
        }

        Ok(EventCapturedStatus::Captured {
            repaint: self.value != before,
        })
    }

    fn value_text(&self) -> String {
        if self.step.fract() == 0.0 && self.min.fract() == 0.0 {
            format!("{}", self.value as i64)
        } else {
            format!("{:.2}", self.value)
        }
    }
}

impl Widget for Slider {
    fn anchored_box(&self) -> &AnchoredBox {
        &self.bx
    }

    fn anchored_box_mut(&mut self) -> &mut AnchoredBox {
        &mut self.bx
    }

    fn on_event(&mut self, event: &Event) -> Result<EventCapturedStatus, Error> {
        let mouse = match event {
            Event::Mouse(mouse) => mouse,
            Event::Keyboard(key) => return self.on_key(key),
        };

        // The drag state is the box's click state. Focus belongs to
        // whoever drives keyboard navigation.
        match mouse.left_button {
            MouseButtonState::JustPressed if self.bx.contains(mouse.position)? => {
                self.bx.click();
                self.set_value_px(mouse.position.x)?;
            }
            MouseButtonState::StayedPressed if self.bx.is_clicked() => {
                self.set_value_px(mouse.position.x)?;
            }
            MouseButtonState::JustUnpressed if self.bx.is_clicked() => {
                self.bx.release();
            }
            _ => return Ok(EventCapturedStatus::NotCaptured),
        }

        Ok(EventCapturedStatus::Captured { repaint: true })
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error> {
        let rect = self.bx.resolve()?;
        let cursor = Point::new(self.value_px()?, rect.center_y());

        surface.draw(Primitive::FillRect {
            rect: rect.with_height_centered(rect.height() / 3),
            color: self.bg_color,
        });
        surface.draw(Primitive::Circle {
            center: cursor,
            radius: rect.height() / 2,
            color: self.color,
        });

        if self.show_value {
            surface.draw(Primitive::SingleLineText(SingleLineText {
                text: self.value_text(),
                font_color: self.color.bw_contrasted(self.contrast_threshold),
                background: None,
                font: Font::new(self.font_family.clone(), (rect.height() / 2).max(1) as u32),
                position: cursor,
                h_align: HAlign::Center,
                v_align: VAlign::Center,
            }));
        }

        Ok(())
    }
}
