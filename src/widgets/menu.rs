use crate::error::Error;
use crate::event::{Event, EventCapturedStatus, MouseButtonState};
use crate::font::px_to_pt;
use crate::primitive::{Primitive, SingleLineText, Surface};
use crate::widget::Widget;
use crate::{Anchor, AnchoredBox, Color, Font, HAlign, Point, Settings, Size, VAlign, Value};

/// How far the label of the chosen element moves right.
const CHOSEN_INDENT: i32 = 5;

/// Default text color of the `n`th entry of a list: black and dark grey,
/// alternating.
fn stripe_color(n: usize) -> Color {
    if n % 2 == 0 {
        Color::BLACK
    } else {
        Color::BLACK.mix(Color::WHITE, 0.7)
    }
}

/// Background of the `n`th entry of a list: light grey and white,
/// alternating.
fn stripe_bg_color(n: usize) -> Color {
    if n % 2 == 0 {
        Color::rgb(240, 240, 240)
    } else {
        Color::WHITE
    }
}

/// Place a box by its top-left corner and return its bottom-left corner,
/// where the next row goes.
fn stack(bx: &mut AnchoredBox, top_left: Point, size: Size) -> Result<Point, Error> {
    bx.place(Anchor::top_left(), top_left);
    bx.set_size(size);
    bx.bottom_left()
}

/// One choosable row of a [`Menu`].
pub struct MenuElement {
    bx: AnchoredBox,

    name: String,
    color: Color,
    bg_color: Color,
    font: Font,

    chosen: bool,
    highlighted: bool,
}

impl MenuElement {
    fn new(name: String, height: i32, color: Color, bg_color: Color, font: Font) -> Self {
        Self {
            bx: AnchoredBox::new(Point::ORIGIN, Size::new(0, height), Anchor::top_left()),
            name,
            color,
            bg_color,
            font,
            chosen: false,
            highlighted: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn bg_color(&self) -> Color {
        self.bg_color
    }

    pub fn is_chosen(&self) -> bool {
        self.chosen
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Mark this element as the selected one. Returns `false` if it
    /// already was.
    pub fn choose(&mut self) -> bool {
        !std::mem::replace(&mut self.chosen, true)
    }

    pub fn stop_choose(&mut self) -> bool {
        std::mem::replace(&mut self.chosen, false)
    }

    pub fn highlight(&mut self) -> bool {
        !std::mem::replace(&mut self.highlighted, true)
    }

    pub fn stop_highlight(&mut self) -> bool {
        std::mem::replace(&mut self.highlighted, false)
    }

    /// The background while hovered: the normal one, nudged away from
    /// black or white.
    pub fn darker_color(&self) -> Color {
        if self.bg_color.bw_contrasted(30) == Color::WHITE {
            self.bg_color.mix(Color::WHITE, 0.9)
        } else {
            self.bg_color.mix(Color::BLACK, 0.9)
        }
    }

    fn stack_at(&mut self, top_left: Point, width: i32) -> Result<Point, Error> {
        let height = self.bx.size()?.height;
        stack(&mut self.bx, top_left, Size::new(width, height))
    }
}

impl Widget for MenuElement {
    fn anchored_box(&self) -> &AnchoredBox {
        &self.bx
    }

    fn anchored_box_mut(&mut self) -> &mut AnchoredBox {
        &mut self.bx
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error> {
        let rect = self.bx.resolve()?;
        let background = if self.highlighted {
            self.darker_color()
        } else {
            self.bg_color
        };

        let mut position = rect.pos();
        if self.chosen {
            position.x = position.x.saturating_add(CHOSEN_INDENT);
        }

        surface.draw(Primitive::FillRect {
            rect,
            color: background,
        });
        surface.draw(Primitive::SingleLineText(SingleLineText {
            text: self.name.clone(),
            font_color: self.color,
            background: None,
            font: self.font.clone(),
            position,
            h_align: HAlign::Left,
            v_align: VAlign::Top,
        }));

        Ok(())
    }
}

/// A titled group of elements inside a [`Menu`].
pub struct MenuCategory {
    bx: AnchoredBox,
    title_bx: AnchoredBox,

    title: String,
    color: Color,
    font: Font,

    items: Vec<MenuElement>,
}

impl MenuCategory {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuElement] {
        &self.items
    }

    fn stack_at(&mut self, top_left: Point, width: i32) -> Result<Point, Error> {
        let title_height = self.title_bx.size()?.height;
        let mut cursor = stack(&mut self.title_bx, top_left, Size::new(width, title_height))?;
        for item in self.items.iter_mut() {
            cursor = item.stack_at(cursor, width)?;
        }

        let height = cursor.y.saturating_sub(top_left.y);
        stack(&mut self.bx, top_left, Size::new(width, height))
    }
}

impl Widget for MenuCategory {
    fn anchored_box(&self) -> &AnchoredBox {
        &self.bx
    }

    fn anchored_box_mut(&mut self) -> &mut AnchoredBox {
        &mut self.bx
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error> {
        surface.draw(Primitive::SingleLineText(SingleLineText {
            text: self.title.clone(),
            font_color: self.color,
            background: None,
            font: self.font.clone(),
            position: self.title_bx.top_left()?,
            h_align: HAlign::Left,
            v_align: VAlign::Top,
        }));
        for item in self.items.iter_mut() {
            item.render(surface)?;
        }

        Ok(())
    }
}

enum Entry {
    Element(MenuElement),
    Category(MenuCategory),
}

/// A vertical list of choosable elements, optionally grouped in
/// categories.
///
/// Every entry is stacked at the bottom-left corner of the previous one,
/// starting from the menu's top-left corner, and spans the menu's width.
/// The stacking is redone each time the menu handles an event or is drawn,
/// so entries follow a moving or resizing menu.
pub struct Menu {
    bx: AnchoredBox,

    entries: Vec<Entry>,
    item_size: i32,
    sep_color: Color,
    font_family: String,

    on_choose: Option<Box<dyn FnMut(&str)>>,
}

impl Menu {
    /// An empty top-left anchored menu whose rows are `item_size` pixels
    /// tall.
    pub fn new(
        settings: &Settings,
        position: impl Into<Value<Point>>,
        size: impl Into<Value<Size>>,
        item_size: i32,
    ) -> Self {
        Self {
            bx: AnchoredBox::new(position, size, Anchor::top_left())
                .strict(settings.strict_assignment),
            entries: Vec::new(),
            item_size: item_size.max(0),
            sep_color: Color::CONCRETE,
            font_family: settings.default_font.family.clone(),
            on_choose: None,
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<Value<Anchor>>) -> Self {
        self.bx.set_anchor(anchor);
        self
    }

    pub fn with_sep_color(mut self, sep_color: Color) -> Self {
        self.sep_color = sep_color;
        self
    }

    /// Run `action` with the element's name whenever a new element is
    /// chosen.
    pub fn on_choose<F: FnMut(&str) + 'static>(&mut self, action: F) {
        self.on_choose = Some(Box::new(action));
    }

    fn font(&self, px: i32) -> Font {
        Font::new(self.font_family.clone(), px_to_pt(px.max(0) as u32))
    }

    /// Start a new category. Items added afterwards go into it.
    ///
    /// Text colors alternate from one entry to the next unless `color` is
    /// given.
    pub fn add_category(&mut self, title: impl Into<String>, color: Option<Color>) -> &mut Self {
        let title_height = self.item_size * 3 / 2;
        let color = color.unwrap_or_else(|| stripe_color(self.entries.len()));

        self.entries.push(Entry::Category(MenuCategory {
            bx: AnchoredBox::new(Point::ORIGIN, Size::new(0, title_height), Anchor::top_left()),
            title_bx: AnchoredBox::new(Point::ORIGIN, Size::new(0, title_height), Anchor::top_left()),
            title: title.into(),
            color,
            font: self.font(title_height),
            items: Vec::new(),
        }));

        self
    }

    /// Add an element, to the last category if the menu ends with one.
    pub fn add_item(&mut self, name: impl Into<String>, color: Option<Color>) -> &mut Self {
        let font = self.font(self.item_size);
        let item_size = self.item_size;

        match self.entries.last_mut() {
            Some(Entry::Category(category)) => {
                // The title counts as the first row of the category.
                let n = category.items.len() + 1;
                category.items.push(MenuElement::new(
                    name.into(),
                    item_size,
                    color.unwrap_or_else(|| stripe_color(n)),
                    stripe_bg_color(n),
                    font,
                ));
            }
            _ => {
                let n = self.entries.len();
                self.entries.push(Entry::Element(MenuElement::new(
                    name.into(),
                    item_size,
                    color.unwrap_or_else(|| stripe_color(n)),
                    stripe_bg_color(n),
                    font,
                )));
            }
        }

        self
    }

    /// Every element in display order, categories flattened.
    pub fn elements(&self) -> impl Iterator<Item = &MenuElement> {
        self.entries.iter().flat_map(|entry| match entry {
            Entry::Element(element) => std::slice::from_ref(element).iter(),
            Entry::Category(category) => category.items.iter(),
        })
    }

    fn elements_mut(&mut self) -> impl Iterator<Item = &mut MenuElement> {
        self.entries.iter_mut().flat_map(|entry| match entry {
            Entry::Element(element) => std::slice::from_mut(element).iter_mut(),
            Entry::Category(category) => category.items.iter_mut(),
        })
    }

    pub fn categories(&self) -> impl Iterator<Item = &MenuCategory> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Category(category) => Some(category),
            Entry::Element(_) => None,
        })
    }

    pub fn chosen(&self) -> Option<&MenuElement> {
        self.elements().find(|element| element.is_chosen())
    }

    pub fn highlighted(&self) -> Option<&MenuElement> {
        self.elements().find(|element| element.is_highlighted())
    }

    /// Stack the entries under the menu's current top-left corner.
    pub fn layout(&mut self) -> Result<(), Error> {
        let rect = self.bx.resolve()?;

        let mut cursor = rect.pos();
        for entry in self.entries.iter_mut() {
            cursor = match entry {
                Entry::Element(element) => element.stack_at(cursor, rect.width())?,
                Entry::Category(category) => category.stack_at(cursor, rect.width())?,
            };
        }

        Ok(())
    }

    fn element_at(&self, point: Point) -> Result<Option<usize>, Error> {
        for (i, element) in self.elements().enumerate() {
            if element.contains(point)? {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    /// Choose the element under `point`, if any, and un-choose every other
    /// one. Returns `true` if the choice changed.
    pub fn choose_at(&mut self, point: impl Into<Point>) -> Result<bool, Error> {
        self.layout()?;
        let index = match self.element_at(point.into())? {
            Some(index) => index,
            None => return Ok(false),
        };

        let mut newly_chosen = None;
        for (i, element) in self.elements_mut().enumerate() {
            if i == index {
                if element.choose() {
                    newly_chosen = Some(element.name.clone());
                }
            } else {
                element.stop_choose();
            }
        }

        match newly_chosen {
            Some(name) => {
                log::debug!("menu element {:?} chosen", name);
                if let Some(action) = self.on_choose.as_mut() {
                    action(&name);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Highlight the element under `point`, if any, and clear the highlight
    /// of every other one. Nothing changes when `point` is over no element.
    pub fn highlight_at(&mut self, point: impl Into<Point>) -> Result<bool, Error> {
        self.layout()?;
        let index = match self.element_at(point.into())? {
            Some(index) => index,
            None => return Ok(false),
        };

        let mut changed = false;
        for (i, element) in self.elements_mut().enumerate() {
            changed |= if i == index {
                element.highlight()
            } else {
                element.stop_highlight()
            };
        }

        Ok(changed)
    }
}

impl Widget for Menu {
    fn anchored_box(&self) -> &AnchoredBox {
        &self.bx
    }

    fn anchored_box_mut(&mut self) -> &mut AnchoredBox {
        &mut self.bx
    }

    fn on_event(&mut self, event: &Event) -> Result<EventCapturedStatus, Error> {
        let mouse = match event {
            Event::Mouse(mouse) => mouse,
            Event::Keyboard(_) => return Ok(EventCapturedStatus::NotCaptured),
        };
        if !self.bx.contains(mouse.position)? {
            return Ok(EventCapturedStatus::NotCaptured);
        }

        let mut repaint = false;
        if mouse.left_button == MouseButtonState::JustPressed {
            repaint |= self.choose_at(mouse.position)?;
        }
        repaint |= self.highlight_at(mouse.position)?;

        Ok(EventCapturedStatus::Captured { repaint })
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), Error> {
        self.layout()?;

        for entry in self.entries.iter_mut() {
            match entry {
                Entry::Element(element) => element.render(surface)?,
                Entry::Category(category) => category.render(surface)?,
            }
        }

        surface.draw(Primitive::Line {
            start: self.bx.top_right()?,
            end: self.bx.bottom_right()?,
            width: 1,
            color: self.sep_color,
        });

        Ok(())
    }
}
