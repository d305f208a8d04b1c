use crate::{Color, Font, HAlign, Point, Rect, Size, VAlign};

/// What widgets ask a [`Surface`] to draw.
///
/// How primitives get rasterized (antialiasing, glyph shaping, ...) is the
/// surface's business.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    FillRect { rect: Rect, color: Color },
    /// The outline of `rect`, `width` pixels thick.
    StrokeRect { rect: Rect, width: i32, color: Color },
    RoundedRect { rect: Rect, radius: i32, color: Color },
    Circle { center: Point, radius: i32, color: Color },
    Line { start: Point, end: Point, width: i32, color: Color },
    SingleLineText(SingleLineText),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingleLineText {
    pub text: String,
    pub font_color: Color,
    pub background: Option<Color>,
    pub font: Font,
    pub position: Point,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

/// A drawing target. The toolkit never looks at its contents.
pub trait Surface {
    fn draw(&mut self, primitive: Primitive);

    /// The pixel size `text` would take when drawn with `font`.
    fn measure_text(&self, text: &str, font: &Font) -> Size;
}

/// A surface that keeps every primitive it receives. Text is measured as a
/// fixed-advance font: each char is half the point size wide and lines are
/// the point size tall.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub primitives: Vec<Primitive>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    fn measure_text(&self, text: &str, font: &Font) -> Size {
        let size_pt = font.size_pt as i32;
        Size::new(text.chars().count() as i32 * size_pt / 2, size_pt)
    }
}
