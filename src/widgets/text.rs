use crate::error::Error;
use crate::primitive::{Primitive, SingleLineText, Surface};
use crate::widget::Widget;
use crate::{Anchor, AnchoredBox, Color, Font, HAlign, Point, Settings, Size, VAlign, Value};

/// A single line of text.
///
/// The box is sized to the text. The text may be a producer; it is re-read
/// and re-measured each time the widget is drawn.
pub struct Text {
    bx: AnchoredBox,

    text: Value<String>,
    color: Color,
    bg_color: Option<Color>,
    font: Font,

    /// The text and font the box size was last measured for.
    measured: Option<(String, Font)>,
}

impl Text {
    /// A center-anchored text.
    ///
    /// The box has a zero size until the text is first measured, by
    /// [`Text::refresh`] or the first render. Use [`Text::measured`] when the
    /// edges are needed before the first frame.
    pub fn new(
        settings: &Settings,
        text: impl Into<Value<String>>,
        position: impl Into<Value<Point>>,
    ) -> Self {
        Self {
            bx: AnchoredBox::new(position, Size::ZERO, Anchor::center())
                .strict(settings.strict_assignment),
            text: text.into(),
            color: Color::BLUE,
            bg_color: None,
            font: settings.default_font.clone(),
            measured: None,
        }
    }

    /// A center-anchored text, sized with `surface` right away.
    pub fn measured(
        settings: &Settings,
        surface: &dyn Surface,
        text: impl Into<Value<String>>,
        position: impl Into<Value<Point>>,
    ) -> Self {
        let mut text = Self::new(settings, text, position);
        text.refresh(surface);
        text
    }

    pub fn with_anchor(mut self, anchor: impl Into<Value<Anchor>>) -> Self {
        self.bx.set_anchor(anchor);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_bg_color(mut self, bg_color: Color) -> Self {
        self.bg_color = Some(bg_color);
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    pub fn set_text(&mut self, text: impl Into<Value<String>>) {
        self.text = text.into();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn bg_color(&self) -> Option<Color> {
        self.bg_color
    }

    pub fn set_bg_color(&mut self, bg_color: Option<Color>) {
        self.bg_color = bg_color;
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Re-measure the text if it or the font changed since the last
    /// measurement, resizing the box. Returns the current text.
    pub fn refresh(&mut self, surface: &dyn Surface) -> String {
        let text = self.text.get();

        let stale = match &self.measured {
            Some((last_text, last_font)) => *last_text != text || *last_font != self.font,
            None => true,
        };
        if stale {
            let size = surface.measure_text(&text, &self.font);
            self.bx.set_size(size);
            self.measured = Some((text.clone(), self.font.clone()));
        }

        text
    }
}

impl Widget for Text {
    fn anchored_box(&self) -> &AnchoredBox {
        &self.bx
    }

    fn anchored_box_mut(&mut self) -> &mut AnchoredBox {
        &mut self.bx
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error> {
        let text = self.refresh(surface);
        let rect = self.bx.resolve()?;

        surface.draw(Primitive::SingleLineText(SingleLineText {
            text,
            font_color: self.color,
            background: self.bg_color,
            font: self.font.clone(),
            position: rect.pos(),
            h_align: HAlign::Left,
            v_align: VAlign::Top,
        }));

        Ok(())
    }
}
