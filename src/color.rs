/// An opaque RGB color.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(30, 144, 255);
    pub const TRUE_BLUE: Color = Color::rgb(0, 0, 255);
    pub const PURPLE: Color = Color::rgb(148, 0, 211);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(60, 179, 113);
    pub const DK_GREEN: Color = Color::rgb(46, 139, 87);
    pub const ORANGE: Color = Color::rgb(230, 140, 30);
    pub const GREY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GREY: Color = Color::rgb(192, 192, 192);
    pub const TURQUOISE: Color = Color::rgb(64, 224, 208);
    pub const PINK: Color = Color::rgb(255, 105, 180);
    pub const CONCRETE: Color = Color::rgb(149, 165, 166);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black or white, whichever reads best on top of this color.
    ///
    /// Returns black when the mean channel value is above `threshold`.
    pub fn bw_contrasted(&self, threshold: u8) -> Color {
        let mean = (u16::from(self.r) + u16::from(self.g) + u16::from(self.b)) as f32 / 3.0;
        if mean > f32::from(threshold) {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// `self * pos + other * (1 - pos)`, channel by channel, truncated.
    pub fn mix(&self, other: Color, pos: f32) -> Color {
        let pos = pos.max(0.0).min(1.0);
        let opp = 1.0 - pos;
        let channel = |a: u8, b: u8| (f32::from(a) * pos + f32::from(b) * opp) as u8;

        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// Every channel halved. The default pressed color of a button.
    pub fn halved(&self) -> Color {
        Color::rgb(self.r / 2, self.g / 2, self.b / 2)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color { r, g, b }
    }
}
