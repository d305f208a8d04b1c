/// Point sizes for pixel heights below 200.
#[rustfmt::skip]
const PX_TO_PT: [u32; 200] = [
    1, 1, 1, 1, 2, 3, 3, 4, 5, 6, 7, 7, 8, 9, 10, 11, 11, 12, 12, 13, 14, 15, 15, 16, 17, 18, 19, 19, 20, 21, 22,
    23, 23, 24, 25, 25, 26, 27, 27, 28, 29, 30, 31, 31, 32, 33, 34, 35, 35, 36, 37, 38, 38, 39, 39, 40, 41, 42, 43,
    43, 44, 45, 46, 47, 47, 48, 49, 50, 50, 51, 51, 52, 53, 54, 55, 55, 56, 57, 58, 59, 59, 60, 61, 62, 63, 63, 63,
    64, 65, 66, 67, 67, 68, 69, 70, 71, 71, 72, 73, 74, 75, 75, 75, 76, 77, 78, 79, 79, 80, 81, 82, 83, 83, 84, 85,
    86, 87, 87, 88, 88, 89, 90, 91, 91, 92, 93, 94, 95, 95, 96, 97, 98, 99, 99, 100, 101, 101, 102, 103, 103, 104,
    105, 106, 107, 107, 108, 109, 110, 111, 111, 112, 113, 113, 114, 115, 115, 116, 117, 118, 119, 119, 120, 121,
    122, 123, 123, 124, 125, 126, 126, 127, 127, 128, 129, 130, 131, 131, 132, 133, 134, 135, 135, 136, 137, 138,
    139, 139, 139, 140, 141, 142, 143, 143, 144, 145, 146, 147, 147, 148, 149,
];

pub const DEFAULT_FAMILY: &str = "Segoe UI Light";

/// A font face and size, passed by value to the widgets that draw text.
///
/// There is no global default font: pass one explicitly, typically
/// [`Settings::default_font`](crate::Settings::default_font).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    pub family: String,
    pub size_pt: u32,
}

impl Font {
    pub fn new(family: impl Into<String>, size_pt: u32) -> Self {
        Self {
            family: family.into(),
            size_pt,
        }
    }

    /// A font of the default family that renders roughly `px` pixels tall.
    pub fn from_px(px: u32) -> Self {
        Self::new(DEFAULT_FAMILY, px_to_pt(px))
    }

    pub fn with_size_pt(mut self, size_pt: u32) -> Self {
        self.size_pt = size_pt;
        self
    }

    pub fn with_size_px(mut self, px: u32) -> Self {
        self.size_pt = px_to_pt(px);
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, 20)
    }
}

/// Convert a pixel height to a point size.
///
/// Never over-estimates: the resulting text may be one or two pixels smaller
/// than asked, a few more for very large sizes.
pub fn px_to_pt(px: u32) -> u32 {
    if px < 200 {
        PX_TO_PT[px as usize]
    } else {
        ((f64::from(px) - 1.21) / 1.332).floor() as u32
    }
}
